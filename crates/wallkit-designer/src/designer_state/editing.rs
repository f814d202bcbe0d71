//! Wall selection and property edits.

use super::{DesignerState, InteractionState};
use crate::geometry::{closest_point_on_segment, normalize, DEGENERATE_EPSILON};
use crate::model::{Point, Wall};
use crate::topology::normalize_connections;
use tracing::info;
use wallkit_core::units::{format_length, format_meters, parse_positive_length};
use wallkit_core::{Lineweight, ValidationError};

impl DesignerState {
    /// Pick the wall whose centerline is nearest `p`, within its half
    /// thickness or the hover radius, whichever is larger. Enters `Editing`
    /// on a hit, otherwise clears the selection.
    pub fn select_at(&mut self, p: Point) -> Option<usize> {
        let hover = self.config.hover_radius(self.zoom());
        let mut best: Option<(f64, usize)> = None;
        for (i, wall) in self.walls.iter().enumerate() {
            let reach = wall.half_thickness().max(hover);
            let d = closest_point_on_segment(&wall.original_start, &wall.original_end, &p).distance;
            if d <= reach && best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, i));
            }
        }

        match best {
            Some((_, index)) => {
                self.state = InteractionState::Editing { index };
                Some(index)
            }
            None => {
                self.state = self.resting_state();
                None
            }
        }
    }

    /// Select wall `index` for editing.
    pub fn select_wall(&mut self, index: usize) -> Result<(), ValidationError> {
        self.check_index(index)?;
        self.cancel_chain();
        self.state = InteractionState::Editing { index };
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if let InteractionState::Editing { .. } = self.state {
            self.state = self.resting_state();
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            InteractionState::Editing { index } => Some(index),
            _ => None,
        }
    }

    pub fn selected_wall(&self) -> Option<&Wall> {
        self.selected_index().and_then(|i| self.walls.get(i))
    }

    /// Current thickness and length of the selected wall, formatted for the
    /// edit fields in the configured measurement system.
    pub fn edit_fields(&self) -> Option<(String, String)> {
        let wall = self.selected_wall()?;
        let system = self.config.measurement_system;
        Some((
            format_length(wall.thickness, system),
            format_length(wall.model_length(), system),
        ))
    }

    /// Length label shown next to a wall on the canvas.
    pub fn wall_label(&self, index: usize) -> Option<String> {
        self.walls.get(index).map(|w| format_meters(w.model_length()))
    }

    /// Apply typed thickness and length to the selected wall.
    pub fn submit_edit(&mut self, thickness: &str, length: &str) -> Result<(), ValidationError> {
        let index = self.selected_index().ok_or(ValidationError::NoSelection)?;
        self.edit_wall(index, thickness, length)
    }

    /// Set thickness and length of wall `index` from user input.
    ///
    /// The start stays put and the end moves along the wall's current
    /// direction. Both values must parse as positive numbers; on any error
    /// the wall list is untouched.
    pub fn edit_wall(
        &mut self,
        index: usize,
        thickness: &str,
        length: &str,
    ) -> Result<(), ValidationError> {
        self.check_index(index)?;
        let system = self.config.measurement_system;
        let thickness = parse_positive_length("thickness", thickness, system)?;
        let length = parse_positive_length("length", length, system)?;

        let wall = &self.walls[index];
        let start = wall.original_start;
        let end = if wall.model_length() < DEGENERATE_EPSILON {
            // no direction to scale along
            wall.original_end
        } else {
            start + normalize(&start, &wall.original_end) * length
        };
        let updated = wall.with_endpoints(start, end).with_thickness(thickness);
        let chain_tail = index + 1 == self.walls.len()
            && matches!(
                self.state,
                InteractionState::DrawingChain { segment_start, .. }
                    if segment_start.distance_to(&wall.original_end)
                        < self.config.exact_match_tolerance
            );

        self.walls[index] = updated;
        normalize_connections(&mut self.walls, self.config.exact_match_tolerance);
        self.history.record(&self.walls);
        info!(
            "Edited wall {}: thickness {} mm, length {:.3} mm",
            index,
            thickness,
            self.walls[index].model_length()
        );

        // only the segment the chain continues from carries its thickness on
        if let (
            true,
            InteractionState::DrawingChain {
                segment_start,
                chain_start,
                ..
            },
        ) = (chain_tail, self.state)
        {
            self.state = InteractionState::DrawingChain {
                segment_start,
                chain_start,
                thickness,
            };
            if let Some(preview) = self.preview.as_mut() {
                *preview = preview.with_thickness(thickness);
            }
        }
        Ok(())
    }

    /// Change the export lineweight of wall `index`.
    pub fn set_wall_lineweight(
        &mut self,
        index: usize,
        lineweight: Lineweight,
    ) -> Result<(), ValidationError> {
        self.check_index(index)?;
        let updated = self.walls[index].clone().with_lineweight(lineweight);
        self.walls[index] = updated;
        self.history.record(&self.walls);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index < self.walls.len() {
            Ok(())
        } else {
            Err(ValidationError::WallIndexOutOfRange {
                index,
                count: self.walls.len(),
            })
        }
    }
}
