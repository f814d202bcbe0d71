//! Wall outline builder.
//!
//! Extrudes a centerline wall into a quadrilateral and miters each end
//! against the wall it meets there. Only one neighbor per end is used (the
//! first in wall order); three- and four-way junctions get a local
//! approximation here and their final shape from the silhouette union in
//! [`crate::merge`].
//!
//! Degenerate cases never fail:
//! - parallel offset lines fall back to the midpoint of the two offset points
//! - corners farther than `miter_limit` half-thicknesses from the junction
//!   are pulled back along the bisector of the two side offsets

use crate::geometry::{line_intersection, normalize, normalize_vector, point_in_polygon, signed_area};
use crate::model::{Point, Wall, WallEnd};
use crate::topology::{TopologyIndex, WallRef};
use serde::Serialize;
use wallkit_settings::DesignerConfig;

/// How one corner of an outline was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinKind {
    /// Free end, squared off
    Square,
    /// Offset edges intersected normally
    Mitered,
    /// Offset edges were parallel; midpoint used
    Parallel,
    /// Intersection too far away; capped along the bisector
    Capped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiterCorner {
    pub point: Point,
    pub kind: JoinKind,
}

/// Corner where the offset edge of one wall meets the offset edge of the
/// wall it joins.
///
/// Both walls are described by their direction pointing away from
/// `junction` and by the side offset (perpendicular, half-thickness long)
/// of the edge taking part in this corner. `limit` is the largest allowed
/// distance between the corner and the junction.
pub fn miter_corner(
    junction: &Point,
    own_dir: &Point,
    own_offset: &Point,
    other_dir: &Point,
    other_offset: &Point,
    limit: f64,
) -> MiterCorner {
    let own_edge = *junction + *own_offset;
    let other_edge = *junction + *other_offset;

    let Some(hit) = line_intersection(&own_edge, own_dir, &other_edge, other_dir) else {
        return MiterCorner {
            point: own_edge.midpoint(&other_edge),
            kind: JoinKind::Parallel,
        };
    };

    if hit.distance_to(junction) <= limit {
        return MiterCorner {
            point: hit,
            kind: JoinKind::Mitered,
        };
    }

    let bisector = normalize_vector(&(*own_offset + *other_offset));
    let point = if bisector == Point::ORIGIN {
        own_edge.midpoint(&other_edge)
    } else {
        *junction + bisector * limit
    };
    MiterCorner {
        point,
        kind: JoinKind::Capped,
    }
}

/// Closed quadrilateral for one wall:
/// `[start_left, end_left, end_right, start_right]`, where left is the
/// counter-clockwise side of `start -> end`.
#[derive(Debug, Clone, PartialEq)]
pub struct WallOutline {
    pub wall: WallRef,
    pub points: [Point; 4],
    pub start_joins: [JoinKind; 2],
    pub end_joins: [JoinKind; 2],
}

impl WallOutline {
    pub fn area(&self) -> f64 {
        signed_area(&self.points).abs()
    }

    pub fn contains(&self, p: &Point) -> bool {
        point_in_polygon(p, &self.points)
    }
}

fn away_direction(wall: &Wall, from: WallEnd) -> Point {
    let (s, e) = (wall.original_start, wall.original_end);
    match from {
        WallEnd::Start => normalize(&s, &e),
        WallEnd::End => normalize(&e, &s),
    }
}

fn corner_at(
    index: &TopologyIndex<'_>,
    wall_ref: WallRef,
    junction: Point,
    away: Point,
    side: Point,
    limit: f64,
) -> MiterCorner {
    let Some(neighbor) = index.neighbor_at(&junction, wall_ref) else {
        return MiterCorner {
            point: junction + side,
            kind: JoinKind::Square,
        };
    };

    let other = index.wall(neighbor.wall);
    let other_away = away_direction(other, neighbor.end);

    // The edge on our left (looking away from the junction) meets the
    // neighbor's right edge, and vice versa.
    let sigma = if side.dot(&away.perp()) >= 0.0 { 1.0 } else { -1.0 };
    let other_side = other_away.perp() * (-sigma * other.half_thickness());

    miter_corner(&junction, &away, &side, &other_away, &other_side, limit)
}

/// Outline of the wall `wall_ref`, mitered against its neighbors in `index`.
pub fn build_outline(index: &TopologyIndex<'_>, wall_ref: WallRef, miter_limit: f64) -> WallOutline {
    let wall = index.wall(wall_ref);
    let (start, end) = (wall.original_start, wall.original_end);
    let dir = normalize(&start, &end);
    let side = dir.perp() * wall.half_thickness();
    let limit = miter_limit * wall.half_thickness();

    let start_left = corner_at(index, wall_ref, start, dir, side, limit);
    let start_right = corner_at(index, wall_ref, start, dir, -side, limit);
    let end_left = corner_at(index, wall_ref, end, -dir, side, limit);
    let end_right = corner_at(index, wall_ref, end, -dir, -side, limit);

    WallOutline {
        wall: wall_ref,
        points: [
            start_left.point,
            end_left.point,
            end_right.point,
            start_right.point,
        ],
        start_joins: [start_left.kind, start_right.kind],
        end_joins: [end_left.kind, end_right.kind],
    }
}

/// Outlines for every committed wall, followed by the preview if present.
pub fn build_outlines(
    walls: &[Wall],
    preview: Option<&Wall>,
    config: &DesignerConfig,
) -> Vec<WallOutline> {
    let index = TopologyIndex::new(walls, preview, config);
    let refs = (0..walls.len())
        .map(WallRef::Committed)
        .chain(preview.map(|_| WallRef::Preview));
    refs.map(|r| build_outline(&index, r, config.miter_limit))
        .collect()
}
