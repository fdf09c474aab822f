use clap::ValueEnum;
use std::collections::HashMap;

/// Settings keys understood by the pattern resolver.
pub const SRC_BIN_KEY: &str = "convert_src_bin";
pub const DST_BIN_KEY: &str = "convert_dst_bin";
pub const SRC_HEX_KEY: &str = "convert_src_hex";
pub const DST_HEX_KEY: &str = "convert_dst_hex";
pub const SRC_EXP_KEY: &str = "convert_src_exp";
pub const DST_EXP_KEY: &str = "convert_dst_exp";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Read-only key→value store the engine resolves patterns from. Externally
/// owned: built once per invocation from the config file and CLI overrides.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
