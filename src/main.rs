use anyhow::Result;
use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> Result<()> {
    env_logger::init();
    let args = numshift::ui::cli::Cli::parse();
    numshift::app_controller::run(args)
}
