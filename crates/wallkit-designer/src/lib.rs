//! # WallKit Designer
//!
//! Wall topology and geometry engine for an interactive wall sketching
//! canvas. Walls are centerlines with a thickness; everything else
//! (connectivity, mitered outlines, the merged silhouette) is derived from
//! their coordinates on every query.
//!
//! ## Core Components
//!
//! - **Geometry**: vector helpers, line intersection, axis alignment
//! - **Topology**: endpoint connectivity over a spatial hash
//! - **Wall Polygons**: mitered four-corner outlines per wall
//! - **Merge**: union of all outlines into one silhouette
//! - **Designer State**: the drawing state machine (snapping, chains,
//!   split-on-click, editing, undo/redo)
//! - **Viewport**: zoom and pan between model and screen space
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (pointer/key events)
//!   ├── Wall list + preview wall
//!   ├── History (undo/redo snapshots)
//!   └── Viewport (zoom-relative thresholds)
//!
//! TopologyIndex (derived per query)
//!   └── build_outlines -> merge_outlines -> Silhouette
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wallkit_designer::{DesignerState, Point};
//!
//! let mut state = DesignerState::new();
//! state.pointer_down(Point::new(0.0, 0.0));
//! state.pointer_down(Point::new(1000.0, 0.0));
//! let silhouette = state.silhouette();
//! ```

pub mod designer_state;
pub mod geometry;
pub mod history;
pub mod merge;
pub mod model;
pub mod topology;
pub mod viewport;
pub mod wall_polygon;

pub use designer_state::{
    CommitOutcome, DesignerState, DrawingMode, ExportDocument, ExportLine, ImportedWall,
    InteractionState, Key, Modifiers,
};
pub use geometry::Axis;
pub use history::History;
pub use merge::{merge_outlines, merge_polygons, merge_walls, Silhouette, SilhouettePolygon};
pub use model::{Bounds, Point, Wall, WallEnd};
pub use topology::{normalize_connections, Connectivity, EndpointRef, TopologyIndex, WallRef};
pub use viewport::Viewport;
pub use wall_polygon::{build_outline, build_outlines, JoinKind, MiterCorner, WallOutline};
