//! Drawing output properties: lineweights and paper sheets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plotted line weight attached to each wall for CAD export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lineweight {
    UltraThin,
    Thin,
    Medium,
    #[default]
    Standard,
    Thick,
    VeryThick,
    UltraHeavy,
}

impl Lineweight {
    pub const ALL: [Lineweight; 7] = [
        Self::UltraThin,
        Self::Thin,
        Self::Medium,
        Self::Standard,
        Self::Thick,
        Self::VeryThick,
        Self::UltraHeavy,
    ];

    /// Pen width in millimeters.
    pub fn width_mm(self) -> f64 {
        match self {
            Self::UltraThin => 0.13,
            Self::Thin => 0.18,
            Self::Medium => 0.25,
            Self::Standard => 0.35,
            Self::Thick => 0.50,
            Self::VeryThick => 0.70,
            Self::UltraHeavy => 1.00,
        }
    }

    /// DXF group 370 value (hundredths of a millimeter).
    pub fn dxf_code(self) -> i16 {
        match self {
            Self::UltraThin => 13,
            Self::Thin => 18,
            Self::Medium => 25,
            Self::Standard => 35,
            Self::Thick => 50,
            Self::VeryThick => 70,
            Self::UltraHeavy => 100,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::UltraThin => "ultrathin",
            Self::Thin => "thin",
            Self::Medium => "medium",
            Self::Standard => "standard",
            Self::Thick => "thick",
            Self::VeryThick => "verythick",
            Self::UltraHeavy => "ultraheavy",
        }
    }

    /// Lenient lookup used for imported data: unknown names map to the default.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Lineweight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} mm)", self.name(), self.width_mm())
    }
}

impl FromStr for Lineweight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lw| lw.name() == wanted)
            .ok_or_else(|| format!("Unknown lineweight: {}", s))
    }
}

/// ISO A-series sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperSize {
    A0,
    #[default]
    A1,
    A2,
    A3,
    A4,
}

impl PaperSize {
    /// Portrait (width, height) in millimeters.
    pub fn portrait_mm(self) -> (f64, f64) {
        match self {
            Self::A0 => (841.0, 1189.0),
            Self::A1 => (594.0, 841.0),
            Self::A2 => (420.0, 594.0),
            Self::A3 => (297.0, 420.0),
            Self::A4 => (210.0, 297.0),
        }
    }
}

impl FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A0" => Ok(Self::A0),
            "A1" => Ok(Self::A1),
            "A2" => Ok(Self::A2),
            "A3" => Ok(Self::A3),
            "A4" => Ok(Self::A4),
            _ => Err(format!("Unknown paper size: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

/// Sheet selection for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paper {
    pub size: PaperSize,
    pub orientation: Orientation,
}

impl Paper {
    pub fn new(size: PaperSize, orientation: Orientation) -> Self {
        Self { size, orientation }
    }

    /// Sheet (width, height) in millimeters for the chosen orientation.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        let (w, h) = self.size.portrait_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}
