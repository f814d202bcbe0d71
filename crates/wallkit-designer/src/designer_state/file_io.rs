//! Import of externally supplied wall lists and export documents.

use super::DesignerState;
use crate::merge::{merge_walls, Silhouette};
use crate::model::{Bounds, Point, Wall};
use crate::topology::normalize_connections;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use wallkit_core::{ImportError, Lineweight, Paper};
use wallkit_settings::DesignerConfig;

/// Extent reported for an empty drawing.
const EMPTY_EXTENT: f64 = 1000.0;

/// Wall as supplied by an external source (e.g. a floor-plan generator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedWall {
    pub start: Point,
    pub end: Point,
    /// Missing or zero means the default thickness
    #[serde(default)]
    pub thickness: Option<f64>,
    #[serde(default)]
    pub lineweight: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImportPayload {
    List(Vec<ImportedWall>),
    Document { walls: Vec<ImportedWall> },
}

impl ImportPayload {
    fn into_walls(self) -> Vec<ImportedWall> {
        match self {
            ImportPayload::List(walls) | ImportPayload::Document { walls } => walls,
        }
    }
}

/// Convert imported walls to model walls and normalize near-coincident
/// endpoints so shared corners become exact junctions.
fn walls_from_import(
    imported: &[ImportedWall],
    config: &DesignerConfig,
    default_lineweight: Lineweight,
) -> Result<Vec<Wall>, ImportError> {
    let mut walls = Vec::with_capacity(imported.len());
    for (index, w) in imported.iter().enumerate() {
        if !w.start.is_finite() || !w.end.is_finite() {
            return Err(ImportError::NonFiniteCoordinate { index });
        }
        let thickness = match w.thickness {
            None => config.default_thickness,
            Some(t) if t == 0.0 => config.default_thickness,
            Some(t) if t.is_finite() && t > 0.0 => t,
            Some(t) => return Err(ImportError::InvalidThickness { index, thickness: t }),
        };
        let lineweight = w
            .lineweight
            .as_deref()
            .map_or(default_lineweight, Lineweight::from_name_or_default);
        walls.push(Wall::new(w.start, w.end, thickness).with_lineweight(lineweight));
    }
    normalize_connections(&mut walls, config.exact_match_tolerance);
    Ok(walls)
}

/// One wall centerline for a CAD writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportLine {
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    pub lineweight: Lineweight,
    /// DXF group 370 value
    pub dxf_lineweight: i16,
}

impl From<&Wall> for ExportLine {
    fn from(wall: &Wall) -> Self {
        Self {
            start: wall.original_start,
            end: wall.original_end,
            thickness: wall.thickness,
            lineweight: wall.lineweight,
            dxf_lineweight: wall.lineweight.dxf_code(),
        }
    }
}

/// Everything an external serializer needs; no file format is produced here.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub paper: Paper,
    /// Sheet (width, height) in millimeters
    pub paper_size_mm: (f64, f64),
    pub bounds: Bounds,
    pub lines: Vec<ExportLine>,
    pub silhouette: Silhouette,
}

impl DesignerState {
    /// Replace the wall list with imported walls. Recorded in history.
    pub fn import_walls(&mut self, imported: &[ImportedWall]) -> Result<usize, ImportError> {
        let walls = walls_from_import(imported, &self.config, self.current_lineweight)?;
        let count = walls.len();
        self.replace_walls(walls);
        info!("Imported {} walls", count);
        Ok(count)
    }

    /// Import from JSON: either an array of walls or `{"walls": [...]}`.
    pub fn import_json(&mut self, json: &str) -> Result<usize, ImportError> {
        let payload: ImportPayload = serde_json::from_str(json)?;
        self.import_walls(&payload.into_walls())
    }

    /// Read a JSON wall list from disk and import it.
    pub fn load_walls_file(&mut self, path: impl AsRef<Path>) -> wallkit_core::Result<usize> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(self.import_json(&content)?)
    }

    /// Extent of all committed walls plus the configured padding, or
    /// `0..1000` on both axes when there are no walls.
    pub fn content_bounds(&self) -> Bounds {
        let points = self
            .walls
            .iter()
            .flat_map(|w| [&w.original_start, &w.original_end]);
        match Bounds::from_points(points) {
            Some(b) => b.padded(self.config.content_padding),
            None => Bounds::new(0.0, 0.0, EMPTY_EXTENT, EMPTY_EXTENT),
        }
    }

    pub fn export_lines(&self) -> Vec<ExportLine> {
        self.walls.iter().map(ExportLine::from).collect()
    }

    /// Committed walls only; an unfinished preview is never exported.
    pub fn export_document(&self) -> ExportDocument {
        let paper = self.config.paper;
        ExportDocument {
            paper,
            paper_size_mm: paper.dimensions_mm(),
            bounds: self.content_bounds(),
            lines: self.export_lines(),
            silhouette: merge_walls(&self.walls, None, &self.config),
        }
    }

    /// Fit the viewport to the content bounds.
    pub fn fit_to_content(&mut self, padding: f64) {
        let bounds = self.content_bounds();
        self.viewport.fit_to_bounds(&bounds, padding);
    }
}
