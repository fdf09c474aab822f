use std::io::Read;

use anyhow::{Context, Result};

use crate::{
    engine::{command, config_file::ConfigFile, surface::BufferSurface},
    ui::{
        cli::Cli,
        config::{build_selections, build_settings},
        output::OutputHandler,
    },
};

/// The primary orchestration function for the application.
pub fn run(args: Cli) -> Result<()> {
    let cfg_file: ConfigFile = match &args.config {
        Some(path) => confy::load_path(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => confy::load("numshift", None).context("Failed to load config file")?,
    };

    let settings = build_settings(&args, &cfg_file)?;
    let input = read_input(&args)?;
    let selections = build_selections(&args, input.chars().count())?;

    let mut surface = BufferSurface::with_selections(&input, selections);
    let skipped = command::run(args.command, &mut surface, &settings);

    let text = surface.text();
    OutputHandler::new(&text, skipped, surface.messages(), &args).handle()
}

fn read_input(args: &Cli) -> Result<String> {
    match &args.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
