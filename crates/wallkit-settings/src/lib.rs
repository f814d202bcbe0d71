//! WallKit Settings Crate
//!
//! Holds the designer configuration: every snapping and geometry tolerance
//! in one place, plus loading and saving it from the user's config directory.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::DesignerConfig;
pub use error::{SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
