//! Wall data model.
//!
//! Points are millimeters in a single global model space. A [`Wall`] is a
//! centerline plus thickness; connectivity between walls is never stored,
//! it is derived from coordinates by [`crate::topology::TopologyIndex`].

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};
use wallkit_core::Lineweight;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (*other - *self).length()
    }

    /// Euclidean norm when the point is read as a vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise quarter turn.
    pub fn perp(&self) -> Point {
        Point::new(-self.y, self.x)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rounds both coordinates to `step` (e.g. 1e-6) so split points stay
    /// reproducible.
    pub fn quantized(&self, step: f64) -> Point {
        Point::new((self.x / step).round() * step, (self.y / step).round() * step)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Which end of a wall's centerline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallEnd {
    Start,
    End,
}

impl WallEnd {
    pub fn opposite(self) -> WallEnd {
        match self {
            WallEnd::Start => WallEnd::End,
            WallEnd::End => WallEnd::Start,
        }
    }
}

/// A straight wall.
///
/// `start`/`end` are the coordinates in whatever transform the caller is
/// rendering with; `original_start`/`original_end` are the authoritative
/// model-space coordinates every length and geometry computation uses.
/// Outside of a temporary screen-space transform both pairs are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    pub original_start: Point,
    pub original_end: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default)]
    pub lineweight: Lineweight,
}

impl Wall {
    /// New wall in model space; the cached length is computed immediately.
    pub fn new(start: Point, end: Point, thickness: f64) -> Self {
        debug_assert!(thickness > 0.0, "wall thickness must be positive");
        Self {
            start,
            end,
            thickness,
            original_start: start,
            original_end: end,
            length: Some(start.distance_to(&end)),
            lineweight: Lineweight::default(),
        }
    }

    pub fn with_lineweight(mut self, lineweight: Lineweight) -> Self {
        self.lineweight = lineweight;
        self
    }

    /// Model-space length, always recomputed from the original endpoints.
    pub fn model_length(&self) -> f64 {
        self.original_start.distance_to(&self.original_end)
    }

    pub fn half_thickness(&self) -> f64 {
        self.thickness / 2.0
    }

    pub fn endpoint(&self, end: WallEnd) -> Point {
        match end {
            WallEnd::Start => self.original_start,
            WallEnd::End => self.original_end,
        }
    }

    /// A replacement wall with new model endpoints; thickness and lineweight
    /// carry over and the length cache is refreshed.
    pub fn with_endpoints(&self, start: Point, end: Point) -> Wall {
        Wall {
            thickness: self.thickness,
            lineweight: self.lineweight,
            ..Wall::new(start, end, self.thickness)
        }
    }

    pub fn with_thickness(&self, thickness: f64) -> Wall {
        debug_assert!(thickness > 0.0, "wall thickness must be positive");
        Wall {
            thickness,
            ..self.clone()
        }
    }

    /// Move one model endpoint, keeping `start`/`end` in sync.
    pub fn with_endpoint(&self, end: WallEnd, point: Point) -> Wall {
        match end {
            WallEnd::Start => self.with_endpoints(point, self.original_end),
            WallEnd::End => self.with_endpoints(self.original_start, point),
        }
    }

    /// Re-derive `start`/`end` and the length cache from the model endpoints.
    pub fn sync(&mut self) {
        self.start = self.original_start;
        self.end = self.original_end;
        self.length = Some(self.model_length());
    }

    /// True when the cached length agrees with the model endpoints.
    pub fn is_consistent(&self) -> bool {
        self.thickness > 0.0
            && self
                .length
                .is_none_or(|len| (len - self.model_length()).abs() < 1e-9)
    }
}

/// Axis-aligned rectangle in model space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest bounds containing every point, `None` for no points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds::new(p.x, p.y, p.x, p.y),
                Some(b) => Bounds::new(
                    b.min_x.min(p.x),
                    b.min_y.min(p.y),
                    b.max_x.max(p.x),
                    b.max_y.max(p.y),
                ),
            })
        })
    }

    pub fn padded(&self, padding: f64) -> Self {
        Bounds::new(
            self.min_x - padding,
            self.min_y - padding,
            self.max_x + padding,
            self.max_y + padding,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}
