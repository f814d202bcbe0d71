//! Designer configuration for WallKit
//!
//! Every tolerance used by the topology index and the interaction state
//! machine lives here so snapping stays consistent between call sites.
//! All distances are millimeters in model space. Thresholds documented as
//! "zoom-relative" are divided by the current zoom before use.
//!
//! Supports JSON and TOML file formats.

pub use wallkit_core::units::MeasurementSystem;
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wallkit_core::{Lineweight, Paper};

/// Snapping, geometry and drawing defaults for the wall designer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    /// Two endpoints closer than this are the same junction
    pub exact_match_tolerance: f64,
    /// Endpoint snap radius while the pointer moves
    pub endpoint_snap_threshold: f64,
    /// Endpoint snap radius applied on commit (zoom-relative)
    pub commit_snap_threshold: f64,
    /// Distance from an existing wall at which a new chain splits it
    pub split_threshold: f64,
    /// Vertex hover radius (zoom-relative)
    pub hover_threshold: f64,
    /// Distance from the chain origin that closes the shape
    pub closure_threshold: f64,
    /// Segments this short or shorter are discarded on commit
    pub min_commit_length: f64,
    /// Angular window around the axes for automatic alignment, in degrees
    pub axis_alignment_degrees: f64,
    /// Miter corners farther than this many half-thicknesses are capped
    pub miter_limit: f64,
    /// Thickness of new walls
    pub default_thickness: f64,
    /// Initial state of endpoint and axis snapping
    pub snap_enabled: bool,
    /// Maximum number of undo snapshots kept; unbounded when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
    /// Spatial hash cell size of the topology index
    pub index_cell_size: f64,
    /// Margin added around the walls when computing content bounds
    pub content_padding: f64,
    /// Lineweight given to new walls
    pub default_lineweight: Lineweight,
    /// Units used to read and display edited lengths
    pub measurement_system: MeasurementSystem,
    /// Export sheet (kept last so TOML writes it as a trailing table)
    pub paper: Paper,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            exact_match_tolerance: 0.01,
            endpoint_snap_threshold: 5.0,
            commit_snap_threshold: 20.0,
            split_threshold: 10.0,
            hover_threshold: 10.0,
            closure_threshold: 5.0,
            min_commit_length: 2.0,
            axis_alignment_degrees: 2.0,
            miter_limit: 5.0,
            default_thickness: 30.0,
            snap_enabled: true,
            history_limit: None,
            index_cell_size: 100.0,
            content_padding: 50.0,
            default_lineweight: Lineweight::default(),
            measurement_system: MeasurementSystem::default(),
            paper: Paper::default(),
        }
    }
}

impl DesignerConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit-time snap radius at the given zoom.
    pub fn commit_snap_radius(&self, zoom: f64) -> f64 {
        self.commit_snap_threshold / zoom
    }

    /// Vertex hover radius at the given zoom.
    pub fn hover_radius(&self, zoom: f64) -> f64 {
        self.hover_threshold / zoom
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("exact_match_tolerance", self.exact_match_tolerance),
            ("endpoint_snap_threshold", self.endpoint_snap_threshold),
            ("commit_snap_threshold", self.commit_snap_threshold),
            ("split_threshold", self.split_threshold),
            ("hover_threshold", self.hover_threshold),
            ("closure_threshold", self.closure_threshold),
            ("miter_limit", self.miter_limit),
            ("default_thickness", self.default_thickness),
            ("index_cell_size", self.index_cell_size),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::invalid(key, "must be a positive number"));
            }
        }

        if !self.min_commit_length.is_finite() || self.min_commit_length < 0.0 {
            return Err(SettingsError::invalid("min_commit_length", "must be >= 0"));
        }

        if !(0.0..45.0).contains(&self.axis_alignment_degrees) {
            return Err(SettingsError::invalid(
                "axis_alignment_degrees",
                "must be in [0, 45)",
            ));
        }

        if !self.content_padding.is_finite() || self.content_padding < 0.0 {
            return Err(SettingsError::invalid("content_padding", "must be >= 0"));
        }

        if self.history_limit == Some(0) {
            return Err(SettingsError::invalid("history_limit", "must be > 0"));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
