// src/engine/mod.rs
pub mod command;
pub mod config;
pub mod config_file;
pub mod convert;
pub mod error;
pub mod expand;
pub mod pattern;
pub mod surface;
