//! syllab CLI library
//!
//! This library provides the command-line interface for the syllab
//! syllable segmentation system.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod patterns_dir;
pub mod progress;

pub use error::{CliError, CliResult};
