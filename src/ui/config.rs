use anyhow::{Context, Result, bail};

use crate::engine::config::Settings;
use crate::engine::config_file::ConfigFile;
use crate::engine::surface::Selection;
use crate::ui::cli::Cli;

/// Merges the config file and CLI overrides into the settings store the
/// pattern resolver reads. Precedence, lowest to highest: config file,
/// `--setting key=value`, `--src-pattern`/`--dst-template`.
pub fn build_settings(args: &Cli, cfg_file: &ConfigFile) -> Result<Settings> {
    let mut settings = Settings::new();
    cfg_file.apply(&mut settings);

    for entry in &args.settings {
        let (key, value) = entry
            .split_once('=')
            .with_context(|| format!("Invalid --setting '{entry}', expected key=value"))?;
        settings.set(key, value);
    }

    if let Some(pattern) = &args.src_pattern {
        match args.command.source_key() {
            Some(key) => settings.set(key, pattern.clone()),
            None => bail!(
                "--src-pattern does not apply: {:?} parses decimal text directly",
                args.command
            ),
        }
    }
    if let Some(template) = &args.dst_template {
        match args.command.dest_key() {
            Some(key) => settings.set(key, template.clone()),
            None => bail!(
                "--dst-template does not apply: {:?} renders plain decimal",
                args.command
            ),
        }
    }

    Ok(settings)
}

/// Parses `--select` arguments. `START..END` is a range, a bare `N` is a
/// cursor. Without any, the whole input is one selection.
pub fn build_selections(args: &Cli, input_len: usize) -> Result<Vec<Selection>> {
    if args.select.is_empty() {
        return Ok(vec![Selection::new(0, input_len)]);
    }
    args.select.iter().map(|s| parse_selection(s)).collect()
}

fn parse_selection(spec: &str) -> Result<Selection> {
    let parse_pos = |p: &str| {
        p.trim()
            .parse::<usize>()
            .with_context(|| format!("Invalid selection position '{p}'"))
    };
    match spec.split_once("..") {
        Some((start, end)) => {
            let (start, end) = (parse_pos(start)?, parse_pos(end)?);
            if start > end {
                bail!("Invalid selection '{spec}': start is past end");
            }
            Ok(Selection::new(start, end))
        }
        None => Ok(Selection::cursor(parse_pos(spec)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ranges_and_cursors() {
        assert_eq!(parse_selection("4..8").unwrap(), Selection::new(4, 8));
        assert_eq!(parse_selection("12").unwrap(), Selection::cursor(12));
        assert!(parse_selection("8..4").is_err());
        assert!(parse_selection("x..y").is_err());
    }
}
