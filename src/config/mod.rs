//! Configuration management for pets.
//!
//! This module handles loading configuration from `~/.pets/`.

mod paths;
mod settings;

pub(crate) use paths::ensure_dir;
pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, StorageConfig};
