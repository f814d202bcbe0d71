//! # WallKit
//!
//! Wall topology and geometry engine for an architectural sketching canvas:
//! - Connected wall chains with endpoint, axis and shape-closure snapping
//! - Mitered wall outlines at every junction
//! - A single merged silhouette for rendering and export
//! - Undo/redo over the wall list
//!
//! ## Architecture
//!
//! WallKit is organized as a workspace with multiple crates:
//!
//! 1. **wallkit-core** - Error types, units, lineweights and paper sizes
//! 2. **wallkit-settings** - Designer tolerances and their persistence
//! 3. **wallkit-designer** - Topology, outlines, merging and the state machine
//! 4. **wallkit** - Command-line front end that ties the crates together

pub use wallkit_designer as designer;

pub use wallkit_core::{
    Error, ImportError, Lineweight, MeasurementSystem, Orientation, Paper, PaperSize, Result,
    ValidationError,
};

pub use wallkit_settings::{DesignerConfig, SettingsError, SettingsPersistence};

pub use wallkit_designer::{
    Bounds, CommitOutcome, Connectivity, DesignerState, DrawingMode, ExportDocument, ExportLine,
    History, ImportedWall, InteractionState, Key, Modifiers, Point, Silhouette, TopologyIndex,
    Viewport, Wall, WallEnd, WallOutline, WallRef,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so stdout stays free for exported data
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
