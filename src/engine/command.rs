//! The eight conversion commands and the shared per-selection pipeline.

use clap::ValueEnum;
use regex::{Captures, Regex};

use crate::engine::{
    config::{
        DST_BIN_KEY, DST_EXP_KEY, DST_HEX_KEY, SRC_BIN_KEY, SRC_EXP_KEY, SRC_HEX_KEY, Settings,
    },
    convert, expand,
    error::ConversionError,
    pattern::{
        self, DST_BIN_DEFAULT, DST_EXP_DEFAULT, DST_HEX_DEFAULT, DestTemplate, is_quote_delimited,
    },
    surface::{EditorSurface, Selection},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    BinToDec,
    BinToHex,
    DecToBin,
    DecToHex,
    HexToBin,
    HexToDec,
    ExpToDec,
    DecToExp,
}

/// Source domain, named in the skip report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Binary,
    Decimal,
    Hexadecimal,
    Exponential,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Binary => write!(f, "binary"),
            Domain::Decimal => write!(f, "decimal"),
            Domain::Hexadecimal => write!(f, "hexadecimal"),
            Domain::Exponential => write!(f, "exponential"),
        }
    }
}

impl Command {
    pub fn domain(self) -> Domain {
        match self {
            Command::BinToDec | Command::BinToHex => Domain::Binary,
            Command::DecToBin | Command::DecToHex | Command::DecToExp => Domain::Decimal,
            Command::HexToBin | Command::HexToDec => Domain::Hexadecimal,
            Command::ExpToDec => Domain::Exponential,
        }
    }

    /// Settings key for the source pattern; decimal sources have none.
    pub fn source_key(self) -> Option<&'static str> {
        match self {
            Command::BinToDec | Command::BinToHex => Some(SRC_BIN_KEY),
            Command::HexToBin | Command::HexToDec => Some(SRC_HEX_KEY),
            Command::ExpToDec => Some(SRC_EXP_KEY),
            Command::DecToBin | Command::DecToHex | Command::DecToExp => None,
        }
    }

    /// Settings key for the destination template; plain-decimal outputs
    /// have none.
    pub fn dest_key(self) -> Option<&'static str> {
        match self {
            Command::DecToBin | Command::HexToBin => Some(DST_BIN_KEY),
            Command::BinToHex | Command::DecToHex => Some(DST_HEX_KEY),
            Command::DecToExp => Some(DST_EXP_KEY),
            Command::BinToDec | Command::HexToDec | Command::ExpToDec => None,
        }
    }
}

/// Destination binding for the integer commands.
enum IntDest {
    /// `*ToDec`: plain decimal rendering, no template involved.
    Decimal,
    Template(DestTemplate),
}

/// Per-invocation pipeline binding: patterns are resolved once, before the
/// selection loop.
enum Plan {
    Radix {
        source: Regex,
        radix: u32,
        dest: IntDest,
    },
    FromDecimal {
        dest: DestTemplate,
    },
    ExpToDec {
        source: Regex,
    },
    DecToExp {
        marker: String,
    },
}

impl Plan {
    fn for_command(cmd: Command, settings: &Settings) -> Self {
        let src_bin =
            || pattern::resolve_source(settings, SRC_BIN_KEY, pattern::default_src_bin());
        let src_hex =
            || pattern::resolve_source(settings, SRC_HEX_KEY, pattern::default_src_hex());
        let dst_bin = || DestTemplate::resolve(settings, DST_BIN_KEY, DST_BIN_DEFAULT);
        let dst_hex = || DestTemplate::resolve(settings, DST_HEX_KEY, DST_HEX_DEFAULT);

        match cmd {
            Command::BinToDec => Plan::Radix {
                source: src_bin(),
                radix: 2,
                dest: IntDest::Decimal,
            },
            Command::BinToHex => Plan::Radix {
                source: src_bin(),
                radix: 2,
                dest: IntDest::Template(dst_hex()),
            },
            Command::DecToBin => Plan::FromDecimal { dest: dst_bin() },
            Command::DecToHex => Plan::FromDecimal { dest: dst_hex() },
            Command::HexToBin => Plan::Radix {
                source: src_hex(),
                radix: 16,
                dest: IntDest::Template(dst_bin()),
            },
            Command::HexToDec => Plan::Radix {
                source: src_hex(),
                radix: 16,
                dest: IntDest::Decimal,
            },
            Command::ExpToDec => Plan::ExpToDec {
                source: pattern::resolve_source(settings, SRC_EXP_KEY, pattern::default_src_exp()),
            },
            Command::DecToExp => Plan::DecToExp {
                marker: settings
                    .get(DST_EXP_KEY)
                    .unwrap_or(DST_EXP_DEFAULT)
                    .to_string(),
            },
        }
    }
}

/// Runs a command over every current selection and returns the skip count.
/// Per-selection failures never interrupt the remaining selections; a
/// non-zero count is reported once through the surface's message sink.
pub fn run(cmd: Command, surface: &mut dyn EditorSurface, settings: &Settings) -> usize {
    let plan = Plan::for_command(cmd, settings);
    let mut skipped = 0usize;

    let count = surface.selections().len();
    for i in 0..count {
        // Re-fetch each iteration: the host adjusts ranges after edits.
        let Some(sel) = surface.selections().get(i).copied() else {
            break;
        };
        if let Err(err) = convert_selection(&plan, surface, sel) {
            log::debug!("{cmd:?}: selection {i} skipped: {err}");
            skipped += 1;
        }
    }

    if skipped > 0 {
        surface.notify(&format!(
            "Skipped {skipped} invalid {} value(s)!",
            cmd.domain()
        ));
    }
    skipped
}

fn convert_selection(
    plan: &Plan,
    surface: &mut dyn EditorSurface,
    sel: Selection,
) -> Result<(), ConversionError> {
    match plan {
        Plan::Radix {
            source,
            radix,
            dest,
        } => {
            let sel = expand::to_word(surface, sel, is_quote_delimited(source))?;
            let text = read(surface, sel)?;
            let caps = match_at_start(source, &text)?;
            let digits = caps.get(1).ok_or(ConversionError::NoMatch)?.as_str();
            let value = convert::parse_radix(digits, *radix)?;
            let out = match dest {
                IntDest::Decimal => value.to_string(),
                IntDest::Template(t) => t.render(value),
            };
            surface.replace(sel, &out)
        }
        Plan::FromDecimal { dest } => {
            let sel = expand::to_word(surface, sel, false)?;
            let text = read(surface, sel)?;
            let value = convert::parse_decimal(&text)?;
            surface.replace(sel, &dest.render(value))
        }
        Plan::ExpToDec { source } => {
            let sel = expand::to_numeric_run(surface, sel, expand::EXP_CHARSET)?;
            let text = read(surface, sel)?;
            let caps = match_at_start(source, &text)?;
            let mantissa = caps.get(1).ok_or(ConversionError::NoMatch)?.as_str();
            let exponent = caps.get(2).ok_or(ConversionError::NoMatch)?.as_str();
            let out = convert::exp_to_decimal(mantissa, exponent)?;
            surface.replace(sel, &out)
        }
        Plan::DecToExp { marker } => {
            let sel = expand::to_numeric_run(surface, sel, expand::DEC_CHARSET)?;
            let text = read(surface, sel)?;
            let out = convert::decimal_to_exp(&text, marker)?;
            surface.replace(sel, &out)
        }
    }
}

fn read(surface: &dyn EditorSurface, sel: Selection) -> Result<String, ConversionError> {
    surface.substr(sel).ok_or(ConversionError::InvalidRange)
}

/// Matches anchored at the start of the selection text, like the classic
/// `re.match` contract: a hit further in does not count.
fn match_at_start<'t>(pattern: &Regex, text: &'t str) -> Result<Captures<'t>, ConversionError> {
    pattern
        .captures(text)
        .filter(|c| c.get(0).is_some_and(|m| m.start() == 0))
        .ok_or(ConversionError::NoMatch)
}
