//! Configuration for the cube grid samples.
//!
//! Settings persist to disk as RON, support CLI overrides via clap, and
//! deserialize with per-section defaults so older files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GridConfig, LogConfig};
pub use error::ConfigError;
