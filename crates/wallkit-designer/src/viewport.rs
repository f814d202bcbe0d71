//! Viewport and coordinate transformation for canvas rendering.
//!
//! Screen and model space are related by `screen = model * zoom + pan`.
//! The engine itself only ever sees model-space points; the host converts
//! pointer positions with [`Viewport::screen_to_model`] and passes the zoom
//! so zoom-relative snap radii can be scaled.

use std::fmt;

use crate::model::{Bounds, Point};

pub const MIN_ZOOM: f64 = 0.0001;
pub const MAX_ZOOM: f64 = 10.0;
/// Zoom factor per mouse-wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.05;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport at 1:1 with the model origin at the top-left
    /// of the canvas.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Non-finite
    /// values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    pub fn model_to_screen(&self, model: &Point) -> Point {
        Point::new(
            model.x * self.zoom + self.pan_x,
            model.y * self.zoom + self.pan_y,
        )
    }

    pub fn screen_to_model(&self, screen: &Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Changes zoom while keeping the model point under `screen` fixed.
    pub fn zoom_at(&mut self, screen: &Point, new_zoom: f64) {
        let anchor = self.screen_to_model(screen);
        self.set_zoom(new_zoom);
        self.pan_x = screen.x - anchor.x * self.zoom;
        self.pan_y = screen.y - anchor.y * self.zoom;
    }

    /// Mouse-wheel zoom around the cursor: negative `delta_y` (wheel up)
    /// zooms in by one step, positive zooms out.
    pub fn wheel(&mut self, screen: &Point, delta_y: f64) {
        if delta_y == 0.0 {
            return;
        }
        let factor = if delta_y < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        self.zoom_at(screen, self.zoom * factor);
    }

    /// Drag-pan: shifts pan so the model point `anchor` moves to where
    /// `current` (also model space, converted before the shift) lies.
    pub fn drag(&mut self, anchor: &Point, current: &Point) {
        self.pan_by(
            (current.x - anchor.x) * self.zoom,
            (current.y - anchor.y) * self.zoom,
        );
    }

    /// Fits `bounds` into the canvas, reserving `padding` (fraction of the
    /// canvas, 0.0 - 0.5) on every side, and centers it.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, padding: f64) {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - (padding.clamp(0.0, 0.49) * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / bounds.width();
        let zoom_y = (self.canvas_height * padding_factor) / bounds.height();
        self.set_zoom(zoom_x.min(zoom_y));
        self.center_on(&bounds.center());
    }

    /// Centers the viewport on a model point.
    pub fn center_on(&mut self, model: &Point) {
        self.pan_x = self.canvas_width / 2.0 - model.x * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - model.y * self.zoom;
    }

    /// Resets viewport to 1:1 zoom and no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
