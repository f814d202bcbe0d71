//! Silhouette merging.
//!
//! Unions every wall outline into one multi-polygon so junctions render as a
//! single seamless fill. The boolean work is done by `csgrs`; a union that
//! panics on bad input (self-intersecting or zero-area rings) is caught, logged
//! and the offending polygon is dropped from the result. One bad wall never
//! empties the whole silhouette.
//!
//! Rings are emitted for even-odd filling: holes left by closed rooms or
//! T-junction pockets come out as interior rings.

use crate::geometry::{point_in_polygon, signed_area};
use crate::model::{Point, Wall};
use crate::wall_polygon::{build_outlines, WallOutline};
use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use lyon::math::point;
use lyon::path::Path as LyonPath;
use serde::Serialize;
use std::fmt::Write;
use std::panic;
use tracing::{debug, warn};
use wallkit_settings::DesignerConfig;

/// Rings with less area than this (mm²) are not worth a boolean op.
const MIN_RING_AREA: f64 = 1e-6;
const DUPLICATE_EPSILON: f64 = 1e-9;

/// One connected piece of the silhouette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SilhouettePolygon {
    pub exterior: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

impl SilhouettePolygon {
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| signed_area(h).abs()).sum();
        signed_area(&self.exterior).abs() - holes
    }

    /// Even-odd containment: inside the exterior and outside every hole.
    pub fn contains(&self, p: &Point) -> bool {
        point_in_polygon(p, &self.exterior) && !self.holes.iter().any(|h| point_in_polygon(p, h))
    }

    fn rings(&self) -> impl Iterator<Item = &Vec<Point>> {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }
}

/// Union of all wall outlines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Silhouette {
    pub polygons: Vec<SilhouettePolygon>,
}

impl Silhouette {
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn area(&self) -> f64 {
        self.polygons.iter().map(SilhouettePolygon::area).sum()
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.polygons.iter().any(|poly| poly.contains(p))
    }

    pub fn hole_count(&self) -> usize {
        self.polygons.iter().map(|p| p.holes.len()).sum()
    }

    /// SVG path data, one `M … L … Z` subpath per ring. Render with
    /// `fill-rule="evenodd"`.
    pub fn to_path_data(&self) -> String {
        let mut data = String::new();
        for ring in self.polygons.iter().flat_map(SilhouettePolygon::rings) {
            for (i, p) in ring.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                if !data.is_empty() {
                    data.push(' ');
                }
                let _ = write!(data, "{} {} {}", cmd, p.x, p.y);
            }
            if !ring.is_empty() {
                data.push_str(" Z");
            }
        }
        data
    }

    /// Closed lyon path with one sub-path per ring.
    pub fn to_lyon_path(&self) -> LyonPath {
        let mut builder = LyonPath::builder();
        for ring in self.polygons.iter().flat_map(SilhouettePolygon::rings) {
            let mut points = ring.iter();
            let Some(first) = points.next() else {
                continue;
            };
            builder.begin(point(first.x as f32, first.y as f32));
            for p in points {
                builder.line_to(point(p.x as f32, p.y as f32));
            }
            builder.end(true);
        }
        builder.build()
    }
}

/// Drops repeated vertices and the closing duplicate, and orients the ring
/// counter-clockwise. `None` for rings that cannot bound any area.
fn clean_ring(ring: &[Point]) -> Option<Vec<Point>> {
    let mut cleaned: Vec<Point> = Vec::with_capacity(ring.len());
    for p in ring {
        if !p.is_finite() {
            return None;
        }
        if cleaned
            .last()
            .is_none_or(|last| last.distance_to(p) > DUPLICATE_EPSILON)
        {
            cleaned.push(*p);
        }
    }
    while cleaned.len() > 1
        && cleaned[0].distance_to(&cleaned[cleaned.len() - 1]) <= DUPLICATE_EPSILON
    {
        cleaned.pop();
    }
    if cleaned.len() < 3 {
        return None;
    }

    let area = signed_area(&cleaned);
    if area.abs() < MIN_RING_AREA {
        return None;
    }
    if area < 0.0 {
        cleaned.reverse();
    }
    Some(cleaned)
}

fn ring_to_sketch(ring: &[Point]) -> Option<Sketch<()>> {
    let ring = clean_ring(ring)?;
    let pts: Vec<[f64; 2]> = ring.iter().map(|p| [p.x, p.y]).collect();
    panic::catch_unwind(panic::AssertUnwindSafe(|| Sketch::polygon(&pts, None))).ok()
}

fn sketch_to_silhouette(sketch: &Sketch<()>) -> Silhouette {
    let mp = sketch.to_multipolygon();
    let mut polygons = Vec::new();
    for poly in mp.0 {
        let exterior: Vec<Point> = poly.exterior().0.iter().map(|c| Point::new(c.x, c.y)).collect();
        let Some(exterior) = clean_ring(&exterior) else {
            continue;
        };
        let holes = poly
            .interiors()
            .iter()
            .filter_map(|ring| {
                let pts: Vec<Point> = ring.0.iter().map(|c| Point::new(c.x, c.y)).collect();
                clean_ring(&pts)
            })
            .collect();
        polygons.push(SilhouettePolygon { exterior, holes });
    }
    Silhouette { polygons }
}

/// Union a list of simple polygons.
///
/// Degenerate polygons are skipped; a polygon whose union fails is logged
/// and contributes nothing. Union is order-independent, so the sequential
/// fold gives the same silhouette as any batching of it.
pub fn merge_polygons(polygons: &[Vec<Point>]) -> Silhouette {
    let mut merged: Option<Sketch<()>> = None;

    for (i, ring) in polygons.iter().enumerate() {
        let Some(sketch) = ring_to_sketch(ring) else {
            debug!("Skipping degenerate polygon {}", i);
            continue;
        };

        merged = Some(match merged {
            None => sketch,
            Some(acc) => {
                match panic::catch_unwind(panic::AssertUnwindSafe(|| acc.union(&sketch))) {
                    Ok(union) => union,
                    Err(_) => {
                        warn!("Panic during union of polygon {}, dropping it", i);
                        acc
                    }
                }
            }
        });
    }

    merged
        .map(|sketch| sketch_to_silhouette(&sketch))
        .unwrap_or_default()
}

pub fn merge_outlines(outlines: &[WallOutline]) -> Silhouette {
    let rings: Vec<Vec<Point>> = outlines.iter().map(|o| o.points.to_vec()).collect();
    merge_polygons(&rings)
}

/// Build every outline (preview included) and union them.
pub fn merge_walls(walls: &[Wall], preview: Option<&Wall>, config: &DesignerConfig) -> Silhouette {
    merge_outlines(&build_outlines(walls, preview, config))
}
