//! Source-pattern resolution and destination templates.
//!
//! Source patterns are regular expressions with one or two capture groups,
//! looked up in the settings store and compiled with a silent fallback to the
//! built-in default. Destination templates are parsed into a closed set of
//! format modes instead of evaluating arbitrary format strings from
//! configuration.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::engine::config::Settings;

pub const SRC_BIN_DEFAULT: &str = r"\b(?:0b)?([01]+)\b";
pub const SRC_HEX_DEFAULT: &str = r"\b(?:0x)?([0-9a-fA-F]+)h?\b";
pub const SRC_EXP_DEFAULT: &str = r"\b(\d+\.\d+)e([-+]?\d+)\b";
pub const DST_BIN_DEFAULT: &str = "{0:b}";
pub const DST_HEX_DEFAULT: &str = "{0:#x}";
pub const DST_EXP_DEFAULT: &str = "e";

static SRC_BIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(SRC_BIN_DEFAULT).expect("builtin binary pattern"));
static SRC_HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(SRC_HEX_DEFAULT).expect("builtin hex pattern"));
static SRC_EXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(SRC_EXP_DEFAULT).expect("builtin exponential pattern"));

pub fn default_src_bin() -> &'static Regex {
    &SRC_BIN
}

pub fn default_src_hex() -> &'static Regex {
    &SRC_HEX
}

pub fn default_src_exp() -> &'static Regex {
    &SRC_EXP
}

/// Resolves a source pattern: configured value if present and compilable,
/// otherwise the built-in default. Never fails.
pub fn resolve_source(settings: &Settings, key: &str, default: &Regex) -> Regex {
    match settings.get(key) {
        Some(configured) => Regex::new(configured).unwrap_or_else(|err| {
            log::warn!("invalid {key} pattern {configured:?}, using default: {err}");
            default.clone()
        }),
        None => default.clone(),
    }
}

/// The single-quote convention: a source pattern whose first literal
/// character is a quote matches quoted tokens, so cursor expansion must take
/// in one extra character on each side.
pub fn is_quote_delimited(pattern: &Regex) -> bool {
    pattern.as_str().starts_with('\'')
}

/// How a converted integer is rendered back into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    Plain,
    Binary,
    HexLower,
    HexUpper,
    /// `0x`-prefixed lowercase hex.
    HexPrefixed,
}

/// A destination template: literal text around a single placeholder.
/// `'B{0:X}'` parses to prefix `'B`, mode `HexUpper`, suffix `'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestTemplate {
    prefix: String,
    mode: FormatMode,
    suffix: String,
}

impl DestTemplate {
    /// Parses a `{value}`-style template against the known placeholder forms.
    /// Returns `None` for templates without a recognizable placeholder.
    pub fn parse(template: &str) -> Option<Self> {
        let open = template.find('{')?;
        let close = template[open..].find('}')? + open;
        let inner = &template[open + 1..close];
        let spec = inner.strip_prefix('0').unwrap_or(inner);
        let spec = spec.strip_prefix(':').unwrap_or(spec);
        let mode = match spec {
            "" | "d" => FormatMode::Plain,
            "b" => FormatMode::Binary,
            "x" => FormatMode::HexLower,
            "X" => FormatMode::HexUpper,
            "#x" => FormatMode::HexPrefixed,
            _ => return None,
        };
        Some(Self {
            prefix: template[..open].to_string(),
            mode,
            suffix: template[close + 1..].to_string(),
        })
    }

    /// Resolves a destination template from settings with the same fallback
    /// discipline as [`resolve_source`]: unrecognizable templates fall back
    /// to the default. The defaults are known-good, so this never fails.
    pub fn resolve(settings: &Settings, key: &str, default: &str) -> Self {
        let configured = settings.get(key).unwrap_or(default);
        Self::parse(configured).unwrap_or_else(|| {
            if configured != default {
                log::warn!("invalid {key} template {configured:?}, using default {default:?}");
            }
            Self::parse(default).expect("builtin destination template")
        })
    }

    /// Renders a value through the template. Negative values keep the sign
    /// in front of the digits (and any radix prefix), never two's
    /// complement.
    pub fn render(&self, value: i128) -> String {
        let sign = if value < 0 { "-" } else { "" };
        let mag = value.unsigned_abs();
        let digits = match self.mode {
            FormatMode::Plain => value.to_string(),
            FormatMode::Binary => format!("{sign}{mag:b}"),
            FormatMode::HexLower => format!("{sign}{mag:x}"),
            FormatMode::HexUpper => format!("{sign}{mag:X}"),
            FormatMode::HexPrefixed => format!("{sign}0x{mag:x}"),
        };
        format!("{}{}{}", self.prefix, digits, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_templates() {
        let t = DestTemplate::parse(DST_BIN_DEFAULT).unwrap();
        assert_eq!(t.render(5), "101");
        let t = DestTemplate::parse(DST_HEX_DEFAULT).unwrap();
        assert_eq!(t.render(26), "0x1a");
    }

    #[test]
    fn parses_quoted_template_with_affixes() {
        let t = DestTemplate::parse("'B{0:X}'").unwrap();
        assert_eq!(t.render(46), "'B2E'");
    }

    #[test]
    fn negative_values_keep_the_sign() {
        let t = DestTemplate::parse("{0:#x}").unwrap();
        assert_eq!(t.render(-26), "-0x1a");
        let t = DestTemplate::parse("{0:b}").unwrap();
        assert_eq!(t.render(-5), "-101");
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        assert!(DestTemplate::parse("{0:o}").is_none());
        assert!(DestTemplate::parse("no placeholder").is_none());
    }

    #[test]
    fn resolve_falls_back_on_bad_regex() {
        let mut settings = Settings::new();
        settings.set(crate::engine::config::SRC_BIN_KEY, "([unclosed");
        let r = resolve_source(&settings, crate::engine::config::SRC_BIN_KEY, default_src_bin());
        assert_eq!(r.as_str(), SRC_BIN_DEFAULT);
    }

    #[test]
    fn resolve_falls_back_on_bad_template() {
        let mut settings = Settings::new();
        settings.set(crate::engine::config::DST_HEX_KEY, "{0:q}");
        let t = DestTemplate::resolve(
            &settings,
            crate::engine::config::DST_HEX_KEY,
            DST_HEX_DEFAULT,
        );
        assert_eq!(t.render(255), "0xff");
    }

    #[test]
    fn quote_detection_uses_first_literal_char() {
        assert!(is_quote_delimited(&Regex::new("'B([01]+)'").unwrap()));
        assert!(!is_quote_delimited(default_src_bin()));
    }
}
