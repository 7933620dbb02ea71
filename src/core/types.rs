use serde::{Deserialize, Serialize};

use crate::core::primitives::DateMarker;
use crate::error::{GridError, GridResult};

/// Direction along which a sequence of sibling regions is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right; used for day columns.
    Horizontal,
    /// Top to bottom; used for time slats.
    Vertical,
}

/// Measured bounds of one region along a single axis, in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub start: f64,
    pub extent: f64,
}

impl RegionBounds {
    #[must_use]
    pub const fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }

    /// Builds bounds from a leading and trailing edge, e.g. a client rect's
    /// `top` and `bottom`.
    #[must_use]
    pub fn from_edges(start: f64, end: f64) -> Self {
        Self {
            start,
            extent: end - start,
        }
    }

    pub fn validate(self) -> GridResult<Self> {
        if !self.start.is_finite() || !self.extent.is_finite() {
            return Err(GridError::InvalidData(
                "region bounds must be finite".to_owned(),
            ));
        }
        if self.extent < 0.0 {
            return Err(GridError::InvalidData(format!(
                "region extent must be >= 0, got {}",
                self.extent
            )));
        }
        Ok(self)
    }
}

/// Pixel rectangle relative to the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PixelRect {
    #[must_use]
    pub fn width(self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Half-open `[start, end)` span of absolute time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateMarker,
    pub end: DateMarker,
}

impl TimeRange {
    #[must_use]
    pub fn new(start: DateMarker, end: DateMarker) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn overlaps(self, other: TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    #[must_use]
    pub fn contains(self, marker: DateMarker) -> bool {
        marker >= self.start && marker < self.end
    }
}
