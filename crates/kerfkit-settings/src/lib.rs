//! KerfKit Settings Crate
//!
//! Generator defaults and export options, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, GeneratorDefaults};
pub use error::{SettingsError, SettingsResult};
