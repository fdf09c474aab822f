// src/ui/cli.rs

use crate::engine::command::Command;
use crate::engine::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION")
)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Conversion to apply
    #[clap(value_enum)]
    pub command: Command,

    /// Input file; reads stdin when omitted
    pub path: Option<PathBuf>,

    /// Selections as half-open character ranges START..END, or a bare
    /// position N for a cursor that expands to the surrounding token.
    /// May be given multiple times; without it the whole input is one
    /// selection.
    #[clap(short = 's', long = "select", value_name = "RANGE")]
    pub select: Vec<String>,

    /// Override the source pattern for the command's source domain
    #[clap(long, value_name = "REGEX")]
    pub src_pattern: Option<String>,

    /// Override the destination template for the command's target domain
    #[clap(long, value_name = "TEMPLATE")]
    pub dst_template: Option<String>,

    /// Explicit setting as key=value (e.g. convert_src_bin='B([01]+)')
    #[clap(long = "setting", value_name = "KEY=VALUE")]
    pub settings: Vec<String>,

    /// Path to a TOML config file (defaults to the user config dir)
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Optional output file path; stdout when omitted
    #[clap(short = 'O', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Output format: text or json
    #[clap(short = 'F', long = "output-format", default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,
}
