#![no_std]

pub mod config;
pub mod error;
pub mod query;

pub use config::{Mode, SETTINGS, Settings, Units};
pub use error::ConfigError;
