//! Command line interface

pub mod commands;
pub mod display;
pub mod handlers;

pub use commands::{CliArgs, Commands};
