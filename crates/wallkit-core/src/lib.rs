//! # WallKit Core
//!
//! Error taxonomy, measurement units and drawing output properties shared by
//! the WallKit crates.

pub mod drawing;
pub mod error;
pub mod units;

pub use drawing::{Lineweight, Orientation, Paper, PaperSize};
pub use error::{Error, ImportError, Result, ValidationError};
pub use units::MeasurementSystem;
