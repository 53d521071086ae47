//! Domain types

pub mod config;
