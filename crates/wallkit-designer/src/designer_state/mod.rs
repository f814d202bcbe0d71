//! Designer state: the interaction state machine that owns the wall list.
//!
//! This module is split into submodules for better organization:
//! - `drawing`: chain drawing, snapping, commit and split-on-click
//! - `editing`: selection and thickness/length edits
//! - `file_io`: import of external wall lists and export documents
//!
//! Every public operation is synchronous. Pointer positions arrive already
//! converted to model space; the zoom needed for zoom-relative thresholds
//! comes from the owned [`Viewport`].

mod drawing;
mod editing;
mod file_io;

pub use file_io::{ExportDocument, ExportLine, ImportedWall};

use crate::geometry::Axis;
use crate::history::History;
use crate::merge::{merge_walls, Silhouette};
use crate::model::{Point, Wall};
use crate::topology::{Connectivity, TopologyIndex};
use crate::viewport::Viewport;
use crate::wall_polygon::{build_outlines, WallOutline};
use tracing::{debug, info};
use wallkit_core::Lineweight;
use wallkit_settings::DesignerConfig;

/// Active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Wall,
    Select,
    Pan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    /// A chain is being drawn; the preview wall runs from `segment_start`.
    DrawingChain {
        segment_start: Point,
        /// First point of the chain, target of the shape-closure snap
        chain_start: Point,
        thickness: f64,
    },
    /// Pan tool active; `anchor` is the model point grabbed by the pointer.
    Panning { anchor: Option<Point> },
    Editing { index: usize },
}

/// Keys the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Shift,
    Space,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            shift: false,
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
        }
    }
}

/// Result of trying to turn the preview into a committed wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitOutcome {
    /// Appended at `index`; `closed` when the shape-closure snap applied
    Committed { index: usize, closed: bool },
    /// Too short; nothing changed
    Discarded,
    /// No chain in progress
    NoChain,
}

/// Tool and state saved while Space is held for a temporary pan.
#[derive(Debug, Clone, Copy)]
struct SuspendedTool {
    mode: DrawingMode,
    state: InteractionState,
}

#[derive(Debug, Clone)]
pub struct DesignerState {
    config: DesignerConfig,
    walls: Vec<Wall>,
    preview: Option<Wall>,
    preview_closes: bool,
    state: InteractionState,
    mode: DrawingMode,
    snap_enabled: bool,
    /// Snap state to restore when the held Shift key is released
    snap_before_hold: Option<bool>,
    forced_axis: Option<Axis>,
    history: History,
    viewport: Viewport,
    hovered: Option<Point>,
    current_thickness: f64,
    current_lineweight: Lineweight,
    suspended: Option<SuspendedTool>,
    last_pointer: Option<Point>,
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::with_config(DesignerConfig::default())
    }

    pub fn with_config(config: DesignerConfig) -> Self {
        Self {
            walls: Vec::new(),
            preview: None,
            preview_closes: false,
            state: InteractionState::Idle,
            mode: DrawingMode::Wall,
            snap_enabled: config.snap_enabled,
            snap_before_hold: None,
            forced_axis: None,
            history: match config.history_limit {
                Some(limit) => History::with_limit(&[], limit),
                None => History::new(&[]),
            },
            viewport: Viewport::default(),
            hovered: None,
            current_thickness: config.default_thickness,
            current_lineweight: config.default_lineweight,
            suspended: None,
            last_pointer: None,
            config,
        }
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn preview(&self) -> Option<&Wall> {
        self.preview.as_ref()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap_enabled = enabled;
        self.snap_before_hold = None;
    }

    pub fn forced_axis(&self) -> Option<Axis> {
        self.forced_axis
    }

    /// Endpoint under the pointer, for highlighting.
    pub fn hovered_vertex(&self) -> Option<Point> {
        self.hovered
    }

    /// Thickness given to walls of the next chain.
    pub fn current_thickness(&self) -> f64 {
        self.current_thickness
    }

    pub fn set_current_thickness(&mut self, thickness: f64) {
        if thickness.is_finite() && thickness > 0.0 {
            self.current_thickness = thickness;
        }
    }

    pub fn current_lineweight(&self) -> Lineweight {
        self.current_lineweight
    }

    pub fn set_current_lineweight(&mut self, lineweight: Lineweight) {
        self.current_lineweight = lineweight;
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, InteractionState::DrawingChain { .. })
    }

    /// Index over the committed walls and the preview.
    pub fn topology(&self) -> TopologyIndex<'_> {
        TopologyIndex::new(&self.walls, self.preview.as_ref(), &self.config)
    }

    /// Index over committed walls only; snapping never targets the preview.
    fn committed_topology(&self) -> TopologyIndex<'_> {
        TopologyIndex::new(&self.walls, None, &self.config)
    }

    /// Mitered outlines of every wall, preview last.
    pub fn outlines(&self) -> Vec<WallOutline> {
        build_outlines(&self.walls, self.preview.as_ref(), &self.config)
    }

    /// Merged silhouette of every wall including the preview.
    pub fn silhouette(&self) -> Silhouette {
        merge_walls(&self.walls, self.preview.as_ref(), &self.config)
    }

    /// Each distinct endpoint with its connectivity (the preview counts), for
    /// drawing endpoint markers.
    pub fn endpoint_markers(&self) -> Vec<(Point, Connectivity)> {
        let index = self.topology();
        let mut markers: Vec<(Point, Connectivity)> = Vec::new();
        for e in index.endpoints() {
            let seen = markers
                .iter()
                .any(|(p, _)| p.distance_to(&e.point) < index.tolerance());
            if !seen {
                markers.push((e.point, index.connectivity_at(&e.point)));
            }
        }
        markers
    }

    /// Switch tools. Any unfinished chain is discarded.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if self.mode == mode {
            return;
        }
        self.cancel_chain();
        self.suspended = None;
        self.mode = mode;
        self.state = self.resting_state();
        debug!("Drawing mode set to {:?}", mode);
    }

    /// State to fall back to when nothing is in progress.
    fn resting_state(&self) -> InteractionState {
        match self.mode {
            DrawingMode::Pan => InteractionState::Panning { anchor: None },
            DrawingMode::Wall | DrawingMode::Select => InteractionState::Idle,
        }
    }

    fn cancel_chain(&mut self) {
        if self.preview.take().is_some() {
            debug!("Preview wall discarded");
        }
        self.preview_closes = false;
        self.forced_axis = None;
        if matches!(self.state, InteractionState::DrawingChain { .. }) {
            self.state = self.resting_state();
        }
    }

    /// Escape: drop the preview, the chain and the selection.
    pub fn cancel(&mut self) {
        self.cancel_chain();
        self.hovered = None;
        self.state = self.resting_state();
    }

    /// Handle a key press. Returns true when the key was consumed.
    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) -> bool {
        match key {
            Key::Escape => {
                self.cancel();
                true
            }
            Key::Shift => {
                if self.snap_before_hold.is_none() {
                    self.snap_before_hold = Some(self.snap_enabled);
                    self.snap_enabled = false;
                    self.refresh_preview();
                }
                true
            }
            Key::Space => {
                self.begin_temporary_pan();
                true
            }
            Key::Char(c) if modifiers.ctrl => match c.to_ascii_lowercase() {
                'z' if modifiers.shift => {
                    self.redo();
                    true
                }
                'z' => {
                    self.undo();
                    true
                }
                'y' => {
                    self.redo();
                    true
                }
                _ => false,
            },
            Key::Char(c) => match c.to_ascii_lowercase() {
                'h' => {
                    self.toggle_forced_axis(Axis::Horizontal);
                    true
                }
                'v' => {
                    self.toggle_forced_axis(Axis::Vertical);
                    true
                }
                _ => false,
            },
        }
    }

    /// Handle a key release. Returns true when the key was consumed.
    pub fn key_up(&mut self, key: Key) -> bool {
        match key {
            Key::Shift => {
                if let Some(previous) = self.snap_before_hold.take() {
                    self.snap_enabled = previous;
                    self.refresh_preview();
                }
                true
            }
            Key::Space => {
                self.end_temporary_pan();
                true
            }
            _ => false,
        }
    }

    fn toggle_forced_axis(&mut self, axis: Axis) {
        if !self.is_drawing() {
            return;
        }
        self.forced_axis = if self.forced_axis == Some(axis) {
            None
        } else {
            Some(axis)
        };
        self.refresh_preview();
    }

    fn begin_temporary_pan(&mut self) {
        if self.suspended.is_some() || self.mode == DrawingMode::Pan {
            return;
        }
        self.suspended = Some(SuspendedTool {
            mode: self.mode,
            state: self.state,
        });
        self.mode = DrawingMode::Pan;
        self.state = InteractionState::Panning { anchor: None };
    }

    fn end_temporary_pan(&mut self) {
        if let Some(saved) = self.suspended.take() {
            self.mode = saved.mode;
            self.state = saved.state;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restore the previous snapshot. No-op at the oldest entry.
    pub fn undo(&mut self) {
        if !self.history.can_undo() {
            return;
        }
        let walls = self.history.undo();
        self.restore(walls);
        info!("Undo: {} walls", self.walls.len());
    }

    /// Re-apply the next snapshot. No-op at the newest entry.
    pub fn redo(&mut self) {
        if !self.history.can_redo() {
            return;
        }
        let walls = self.history.redo();
        self.restore(walls);
        info!("Redo: {} walls", self.walls.len());
    }

    fn restore(&mut self, walls: Vec<Wall>) {
        self.cancel_chain();
        self.walls = walls;
        if let InteractionState::Editing { index } = self.state {
            if index >= self.walls.len() {
                self.state = self.resting_state();
            }
        }
    }

    /// Remove every wall. Recorded in history.
    pub fn clear(&mut self) {
        self.cancel();
        self.walls.clear();
        self.history.record(&self.walls);
        info!("All walls cleared");
    }

    /// Replace the wall list wholesale and record it.
    fn replace_walls(&mut self, walls: Vec<Wall>) {
        self.cancel();
        self.walls = walls;
        self.history.record(&self.walls);
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
