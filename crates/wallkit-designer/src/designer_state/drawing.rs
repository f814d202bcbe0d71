//! Chain drawing: pointer handling, preview snapping and commits.

use super::{CommitOutcome, DesignerState, DrawingMode, InteractionState};
use crate::geometry::{align_to_axis, nearly_aligned_axis};
use crate::model::{Point, Wall};
use crate::topology::normalize_connections;
use tracing::{debug, info};

/// Split points are rounded to this grid so both halves agree exactly.
const SPLIT_QUANTUM: f64 = 1e-6;

/// Where a new chain starts.
enum ChainSeed {
    /// On an existing endpoint, inheriting that wall's thickness
    Endpoint { point: Point, thickness: f64 },
    /// On the interior of wall `index`, which gets split there
    Split { index: usize, point: Point },
    /// On an existing endpoint reached through the split search
    OnWall { point: Point },
    Free { point: Point },
}

impl DesignerState {
    /// Pointer pressed at a model-space point.
    ///
    /// Returns the commit outcome when the press committed a segment of an
    /// active chain.
    pub fn pointer_down(&mut self, p: Point) -> Option<CommitOutcome> {
        self.last_pointer = Some(p);
        match self.state {
            InteractionState::Panning { .. } => {
                self.state = InteractionState::Panning { anchor: Some(p) };
                None
            }
            InteractionState::DrawingChain { .. } => {
                self.update_preview(p);
                Some(self.commit())
            }
            InteractionState::Idle | InteractionState::Editing { .. } => {
                match self.mode {
                    DrawingMode::Wall => self.start_chain(p),
                    DrawingMode::Select => {
                        self.select_at(p);
                    }
                    DrawingMode::Pan => {
                        self.state = InteractionState::Panning { anchor: Some(p) };
                    }
                }
                None
            }
        }
    }

    /// Pointer moved to a model-space point.
    pub fn pointer_move(&mut self, p: Point) {
        self.last_pointer = Some(p);
        match self.state {
            InteractionState::Panning { anchor: Some(anchor) } => {
                self.viewport.drag(&anchor, &p);
            }
            InteractionState::DrawingChain { .. } => self.update_preview(p),
            _ if self.mode == DrawingMode::Wall => {
                let radius = self.config.hover_radius(self.zoom());
                self.hovered = self
                    .committed_topology()
                    .closest_vertex(&p, radius)
                    .map(|e| e.point);
            }
            _ => {}
        }
    }

    /// Pointer released at a model-space point. Releasing during a chain
    /// commits the segment (drag drawing); a release where the press started
    /// is too short and is discarded.
    pub fn pointer_up(&mut self, p: Point) -> Option<CommitOutcome> {
        self.last_pointer = Some(p);
        match self.state {
            InteractionState::Panning { anchor: Some(_) } => {
                self.state = InteractionState::Panning { anchor: None };
                None
            }
            InteractionState::DrawingChain { .. } => {
                self.update_preview(p);
                Some(self.commit())
            }
            _ => None,
        }
    }

    fn seed_for(&self, p: &Point) -> ChainSeed {
        let index = self.committed_topology();
        let tolerance = self.config.exact_match_tolerance;

        let hover = self.config.hover_radius(self.zoom());
        if let Some(vertex) = index.closest_vertex(p, hover) {
            return ChainSeed::Endpoint {
                point: vertex.point,
                thickness: index.wall(vertex.wall).thickness,
            };
        }

        if let Some(hit) = index.closest_wall(p, self.config.split_threshold) {
            let point = hit.projection.point.quantized(SPLIT_QUANTUM);
            let wall = &self.walls[hit.index];
            let interior = point.distance_to(&wall.original_start) >= tolerance
                && point.distance_to(&wall.original_end) >= tolerance;
            return if interior {
                ChainSeed::Split {
                    index: hit.index,
                    point,
                }
            } else {
                ChainSeed::OnWall { point }
            };
        }

        ChainSeed::Free { point: *p }
    }

    /// `Idle -> DrawingChain`.
    fn start_chain(&mut self, p: Point) {
        let (start, thickness) = match self.seed_for(&p) {
            ChainSeed::Endpoint { point, thickness } => (point, thickness),
            ChainSeed::Split { index, point } => {
                self.split_wall(index, point);
                (point, self.current_thickness)
            }
            ChainSeed::OnWall { point } | ChainSeed::Free { point } => {
                (point, self.current_thickness)
            }
        };

        self.hovered = None;
        self.forced_axis = None;
        self.state = InteractionState::DrawingChain {
            segment_start: start,
            chain_start: start,
            thickness,
        };
        self.preview = Some(self.preview_wall(start, start, thickness));
        self.preview_closes = false;
        info!(
            "Chain started at ({:.2}, {:.2}), thickness {}",
            start.x, start.y, thickness
        );
    }

    /// Replace wall `index` by two walls meeting at `point`.
    fn split_wall(&mut self, index: usize, point: Point) {
        let wall = self.walls[index].clone();
        let first = wall.with_endpoints(wall.original_start, point);
        let second = wall.with_endpoints(point, wall.original_end);
        self.walls.splice(index..=index, [first, second]);
        self.history.record(&self.walls);
        info!(
            "Split wall {} at ({:.3}, {:.3})",
            index, point.x, point.y
        );
    }

    fn preview_wall(&self, start: Point, end: Point, thickness: f64) -> Wall {
        Wall::new(start, end, thickness).with_lineweight(self.current_lineweight)
    }

    /// Re-run the preview rules at the last pointer position, e.g. after the
    /// snap state or forced axis changed.
    pub(super) fn refresh_preview(&mut self) {
        if let Some(p) = self.last_pointer {
            self.update_preview(p);
        }
    }

    /// Resolve the free end of the preview. Exactly one rule applies, in
    /// this order: shape closure, axis alignment, endpoint snap, raw point.
    fn resolve_preview_end(&self, segment_start: Point, chain_start: Point, p: Point) -> (Point, bool) {
        let tolerance = self.config.exact_match_tolerance;

        let chain_has_length = segment_start.distance_to(&chain_start) >= tolerance;
        if !self.walls.is_empty()
            && chain_has_length
            && p.distance_to(&chain_start) < self.config.closure_threshold
        {
            return (chain_start, true);
        }

        if let Some(axis) = self.forced_axis {
            return (align_to_axis(&segment_start, &p, axis), false);
        }

        if !self.snap_enabled {
            return (p, false);
        }

        if let Some(axis) =
            nearly_aligned_axis(&segment_start, &p, self.config.axis_alignment_degrees)
        {
            return (align_to_axis(&segment_start, &p, axis), false);
        }

        let snapped = self
            .committed_topology()
            .closest_endpoint(&p, self.config.endpoint_snap_threshold)
            .map(|e| e.point);
        (snapped.unwrap_or(p), false)
    }

    fn update_preview(&mut self, p: Point) {
        let InteractionState::DrawingChain {
            segment_start,
            chain_start,
            thickness,
        } = self.state
        else {
            return;
        };
        let (end, closes) = self.resolve_preview_end(segment_start, chain_start, p);
        self.preview = Some(self.preview_wall(segment_start, end, thickness));
        self.preview_closes = closes;
    }

    /// Snap both ends of `wall` to existing endpoints within the zoom-scaled
    /// commit radius. The wall takes the thickness of the wall it snapped to
    /// at its start, else at its end.
    fn force_snap(&self, wall: &Wall) -> Wall {
        let index = self.committed_topology();
        let radius = self.config.commit_snap_radius(self.zoom());

        let start_hit = index.closest_endpoint(&wall.original_start, radius);
        let end_hit = index.closest_endpoint(&wall.original_end, radius);

        let thickness = start_hit
            .or(end_hit)
            .map(|e| index.wall(e.wall).thickness)
            .unwrap_or(wall.thickness);
        let start = start_hit.map_or(wall.original_start, |e| e.point);
        let end = end_hit.map_or(wall.original_end, |e| e.point);

        Wall::new(start, end, thickness).with_lineweight(wall.lineweight)
    }

    /// Append the preview to the wall list and continue the chain from its
    /// end.
    pub fn commit(&mut self) -> CommitOutcome {
        let InteractionState::DrawingChain {
            chain_start,
            thickness,
            ..
        } = self.state
        else {
            return CommitOutcome::NoChain;
        };
        let Some(preview) = self.preview.as_ref() else {
            return CommitOutcome::NoChain;
        };

        let min_length = self.config.min_commit_length;
        if preview.model_length() <= min_length {
            debug!(
                "Discarding {:.3} mm segment (minimum {} mm)",
                preview.model_length(),
                min_length
            );
            return CommitOutcome::Discarded;
        }

        let closes = self.preview_closes;
        let wall = if closes || !self.snap_enabled {
            preview.clone()
        } else {
            self.force_snap(preview)
        };
        if wall.model_length() <= min_length {
            debug!("Segment collapsed by commit snap, discarding");
            return CommitOutcome::Discarded;
        }

        self.walls.push(wall);
        normalize_connections(&mut self.walls, self.config.exact_match_tolerance);
        let index = self.walls.len() - 1;
        self.history.record(&self.walls);

        let end = self.walls[index].original_end;
        info!(
            "Committed wall {} ending at ({:.2}, {:.2}){}",
            index,
            end.x,
            end.y,
            if closes { ", shape closed" } else { "" }
        );

        self.state = InteractionState::DrawingChain {
            segment_start: end,
            chain_start,
            thickness,
        };
        self.preview = Some(self.preview_wall(end, end, thickness));
        self.preview_closes = false;
        self.forced_axis = None;

        CommitOutcome::Committed {
            index,
            closed: closes,
        }
    }
}
