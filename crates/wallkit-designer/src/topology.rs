//! Topology index: which wall endpoints meet where.
//!
//! Connectivity is never stored on the walls. A [`TopologyIndex`] is built
//! from a wall list (plus an optional in-progress preview wall) and answers
//! endpoint queries against it. Endpoints are bucketed in a spatial hash of
//! square cells so queries only look at nearby cells; results are always
//! reported in wall-list order (preview last, start before end), which makes
//! tie-breaking deterministic and identical to a linear scan.

use crate::geometry::{closest_point_on_segment, SegmentProjection, DEGENERATE_EPSILON};
use crate::model::{Point, Wall, WallEnd};
use smallvec::SmallVec;
use std::collections::HashMap;
use wallkit_settings::DesignerConfig;

/// Identifies a wall the index knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WallRef {
    /// Index into the committed wall list
    Committed(usize),
    /// The in-progress wall being drawn
    Preview,
}

/// One end of one wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointRef {
    pub wall: WallRef,
    pub end: WallEnd,
    pub point: Point,
}

impl EndpointRef {
    fn order_key(&self) -> (WallRef, u8) {
        let end = match self.end {
            WallEnd::Start => 0,
            WallEnd::End => 1,
        };
        (self.wall, end)
    }
}

/// How a point participates in the wall graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// No endpoint here
    Unconnected,
    /// Exactly one endpoint: a real, free end
    Free,
    /// Two or more endpoints meet
    Junction(usize),
}

impl Connectivity {
    pub fn from_degree(degree: usize) -> Self {
        match degree {
            0 => Connectivity::Unconnected,
            1 => Connectivity::Free,
            n => Connectivity::Junction(n),
        }
    }
}

/// Nearest point on a committed wall's centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub index: usize,
    pub projection: SegmentProjection,
}

type Cell = (i64, i64);

pub struct TopologyIndex<'a> {
    walls: &'a [Wall],
    preview: Option<&'a Wall>,
    tolerance: f64,
    cell_size: f64,
    cells: HashMap<Cell, SmallVec<[EndpointRef; 4]>>,
}

impl<'a> TopologyIndex<'a> {
    /// Index `walls` (and `preview`, if any) with the tolerances from `config`.
    pub fn new(walls: &'a [Wall], preview: Option<&'a Wall>, config: &DesignerConfig) -> Self {
        Self::with_tolerance(
            walls,
            preview,
            config.exact_match_tolerance,
            config.index_cell_size,
        )
    }

    pub fn with_tolerance(
        walls: &'a [Wall],
        preview: Option<&'a Wall>,
        tolerance: f64,
        cell_size: f64,
    ) -> Self {
        debug_assert!(tolerance > 0.0, "match tolerance must be positive");
        debug_assert!(cell_size > 0.0, "cell size must be positive");

        let mut index = Self {
            walls,
            preview,
            tolerance,
            cell_size,
            cells: HashMap::new(),
        };

        let committed = walls
            .iter()
            .enumerate()
            .map(|(i, w)| (WallRef::Committed(i), w));
        for (wall_ref, wall) in committed.chain(preview.map(|w| (WallRef::Preview, w))) {
            for end in [WallEnd::Start, WallEnd::End] {
                let endpoint = EndpointRef {
                    wall: wall_ref,
                    end,
                    point: wall.endpoint(end),
                };
                let cell = index.cell_of(&endpoint.point);
                index.cells.entry(cell).or_default().push(endpoint);
            }
        }
        index
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn walls(&self) -> &'a [Wall] {
        self.walls
    }

    pub fn preview(&self) -> Option<&'a Wall> {
        self.preview
    }

    /// Resolve a reference produced by this index.
    ///
    /// Panics on a reference this index never produced; that is a logic
    /// error in the caller.
    pub fn wall(&self, wall: WallRef) -> &'a Wall {
        match wall {
            WallRef::Committed(i) => &self.walls[i],
            WallRef::Preview => self
                .preview
                .unwrap_or_else(|| panic!("topology index has no preview wall")),
        }
    }

    fn cell_of(&self, p: &Point) -> Cell {
        (
            (p.x / self.cell_size).floor() as i64,
            (p.y / self.cell_size).floor() as i64,
        )
    }

    /// Endpoints in cells that may lie within `radius` of `p`, in wall order.
    fn candidates(&self, p: &Point, radius: f64) -> Vec<EndpointRef> {
        let reach = (radius / self.cell_size).ceil().max(1.0);
        let span = 2.0 * reach + 1.0;

        let mut found: Vec<EndpointRef> = if !reach.is_finite() || span * span >= self.cells.len() as f64 {
            self.cells.values().flatten().copied().collect()
        } else {
            let reach = reach as i64;
            let (cx, cy) = self.cell_of(p);
            let mut found = Vec::new();
            for dx in -reach..=reach {
                for dy in -reach..=reach {
                    if let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) {
                        found.extend(bucket.iter().copied());
                    }
                }
            }
            found
        };
        found.sort_unstable_by_key(EndpointRef::order_key);
        found
    }

    /// Every endpoint in wall order.
    pub fn endpoints(&self) -> Vec<EndpointRef> {
        let mut all: Vec<EndpointRef> = self.cells.values().flatten().copied().collect();
        all.sort_unstable_by_key(EndpointRef::order_key);
        all
    }

    fn coincident(&self, p: &Point) -> impl Iterator<Item = EndpointRef> + '_ {
        let p = *p;
        self.candidates(&p, self.tolerance)
            .into_iter()
            .filter(move |e| e.point.distance_to(&p) < self.tolerance)
    }

    /// First endpoint matching `point` within the exact-match tolerance.
    pub fn exact_endpoint_at(&self, point: &Point) -> Option<EndpointRef> {
        self.coincident(point).next()
    }

    /// Exact match if there is one, otherwise the nearest endpoint strictly
    /// within `threshold`. Equal distances resolve to the first in wall order.
    pub fn closest_endpoint(&self, point: &Point, threshold: f64) -> Option<EndpointRef> {
        self.exact_endpoint_at(point)
            .or_else(|| self.closest_vertex(point, threshold))
    }

    /// Nearest endpoint strictly within `threshold`, first in wall order on ties.
    pub fn closest_vertex(&self, point: &Point, threshold: f64) -> Option<EndpointRef> {
        let mut best: Option<(f64, EndpointRef)> = None;
        for e in self.candidates(point, threshold) {
            let d = e.point.distance_to(point);
            if d < threshold && best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, e));
            }
        }
        best.map(|(_, e)| e)
    }

    /// Number of endpoints coincident with `point`.
    pub fn degree_at(&self, point: &Point) -> usize {
        self.coincident(point).count()
    }

    pub fn connectivity_at(&self, point: &Point) -> Connectivity {
        Connectivity::from_degree(self.degree_at(point))
    }

    /// True when exactly one endpoint sits at `point`.
    pub fn is_real_endpoint(&self, point: &Point) -> bool {
        self.degree_at(point) == 1
    }

    /// Every wall with an endpoint at `point`, each listed once.
    pub fn walls_touching(&self, point: &Point) -> SmallVec<[EndpointRef; 4]> {
        let mut touching: SmallVec<[EndpointRef; 4]> = SmallVec::new();
        for e in self.coincident(point) {
            if !touching.iter().any(|t| t.wall == e.wall) {
                touching.push(e);
            }
        }
        touching
    }

    /// First other wall with an endpoint at `point`. Zero-length walls have
    /// no direction to miter against and are skipped.
    pub fn neighbor_at(&self, point: &Point, exclude: WallRef) -> Option<EndpointRef> {
        self.coincident(point).find(|e| {
            e.wall != exclude && self.wall(e.wall).model_length() >= DEGENERATE_EPSILON
        })
    }

    /// Nearest committed centerline within `threshold` of `point`.
    pub fn closest_wall(&self, point: &Point, threshold: f64) -> Option<WallHit> {
        let mut best: Option<WallHit> = None;
        for (index, wall) in self.walls.iter().enumerate() {
            let projection =
                closest_point_on_segment(&wall.original_start, &wall.original_end, point);
            if projection.distance < threshold
                && best.is_none_or(|b| projection.distance < b.projection.distance)
            {
                best = Some(WallHit { index, projection });
            }
        }
        best
    }
}

/// Snap endpoints that agree within `tolerance` on both axes to exactly the
/// same coordinates (the first one seen), then resync every wall.
///
/// External wall lists often carry rounding noise at shared corners; after
/// this pass exact-match queries see them as junctions.
pub fn normalize_connections(walls: &mut [Wall], tolerance: f64) -> usize {
    let mut unique: Vec<Point> = Vec::new();
    let mut moved = 0;

    let mut canonical = |p: Point| -> Point {
        if let Some(existing) = unique
            .iter()
            .find(|u| (u.x - p.x).abs() < tolerance && (u.y - p.y).abs() < tolerance)
        {
            *existing
        } else {
            unique.push(p);
            p
        }
    };

    for wall in walls.iter_mut() {
        let start = canonical(wall.original_start);
        let end = canonical(wall.original_end);
        if start != wall.original_start || end != wall.original_end {
            moved += 1;
        }
        wall.original_start = start;
        wall.original_end = end;
        wall.sync();
    }
    moved
}
