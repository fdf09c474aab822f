use anyhow::{Context, Result};
use serde_json::json;

use crate::engine::config::OutputFormat;
use crate::ui::cli::Cli;

/// Handles all final output generation based on CLI arguments.
pub struct OutputHandler<'a> {
    text: &'a str,
    skipped: usize,
    messages: &'a [String],
    args: &'a Cli,
}

impl<'a> OutputHandler<'a> {
    pub fn new(text: &'a str, skipped: usize, messages: &'a [String], args: &'a Cli) -> Self {
        Self {
            text,
            skipped,
            messages,
            args,
        }
    }

    pub fn handle(&self) -> Result<()> {
        if self.args.output_format == OutputFormat::Json {
            return self.handle_json_output();
        }

        // Status messages go to stderr so the converted text stays pipeable.
        for message in self.messages {
            eprintln!("{message}");
        }

        match &self.args.output_file {
            Some(path) => std::fs::write(path, self.text)
                .with_context(|| format!("Failed to write output to {}", path.display()))?,
            None => print!("{}", self.text),
        }
        Ok(())
    }

    fn handle_json_output(&self) -> Result<()> {
        let json_out = json!({
            "text": self.text,
            "skipped": self.skipped,
            "messages": self.messages,
        });
        let rendered = serde_json::to_string_pretty(&json_out)?;
        match &self.args.output_file {
            Some(path) => std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?,
            None => println!("{rendered}"),
        }
        Ok(())
    }
}
