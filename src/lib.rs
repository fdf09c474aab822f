// src/lib.rs

//! Internal library for numshift – not published on crates.io

pub mod app_controller;
pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    command::{Command, Domain, run as run_command},
    config::{OutputFormat, Settings},
    error::ConversionError,
    surface::{BufferSurface, EditorSurface, Selection},
};
