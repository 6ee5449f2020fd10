//! Error handling for the hackt CLI.
//!
//! `hackt` is the thin edge of the toolchain: each library crate carries its
//! own `thiserror` enum, and this binary collapses all of them into
//! `anyhow::Result` at the boundary the user actually sees.

use std::path::PathBuf;
use thiserror::Error;

/// Errors specific to the CLI's own responsibilities (config loading), as
/// opposed to the pipeline errors `hackc-drv::DriverError` already covers.
#[derive(Debug, Error)]
pub enum HacktError {
    #[error("failed to read {0}: {1}")]
    ConfigRead(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ConfigParse(PathBuf, #[source] toml::de::Error),
}

pub type Result<T> = anyhow::Result<T>;
