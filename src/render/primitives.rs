use serde::{Deserialize, Serialize};

use crate::core::{AxisArrow, NowIndicatorLine, StackedSegment, VerticalPlacement};
use crate::error::{GridError, GridResult};

/// Placement command for one segment element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPrimitive {
    pub id: String,
    pub column: usize,
    pub placement: VerticalPlacement,
    /// Horizontal share of the column, as fractions of its width.
    pub backward_coord: f64,
    pub forward_coord: f64,
    pub is_start: bool,
    pub is_end: bool,
}

impl SegmentPrimitive {
    #[must_use]
    pub fn from_stacked(stacked: &StackedSegment, container_extent: f64) -> Self {
        let segment = &stacked.segment.segment;
        Self {
            id: segment.id.clone(),
            column: segment.column,
            placement: stacked.segment.verticals.placement(container_extent),
            backward_coord: stacked.horizontals.backward_coord,
            forward_coord: stacked.horizontals.forward_coord,
            is_start: segment.is_start,
            is_end: segment.is_end,
        }
    }

    pub fn validate(&self) -> GridResult<()> {
        if !self.placement.top_offset.is_finite()
            || !self.placement.distance_from_far_edge.is_finite()
        {
            return Err(GridError::InvalidData(format!(
                "segment `{}` placement must be finite",
                self.id
            )));
        }
        if !(0.0..=1.0).contains(&self.backward_coord)
            || !(0.0..=1.0).contains(&self.forward_coord)
        {
            return Err(GridError::InvalidData(format!(
                "segment `{}` horizontal coords must be within [0, 1]",
                self.id
            )));
        }
        Ok(())
    }
}

/// Marker line across one column at the current time.
pub type NowLinePrimitive = NowIndicatorLine;

pub(crate) fn validate_now_line(line: NowLinePrimitive) -> GridResult<()> {
    if !line.top.is_finite() || !line.left.is_finite() || !line.right.is_finite() {
        return Err(GridError::InvalidData(
            "now indicator line must be finite".to_owned(),
        ));
    }
    if line.right < line.left {
        return Err(GridError::InvalidData(
            "now indicator line must have right >= left".to_owned(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_arrow(arrow: AxisArrow) -> GridResult<()> {
    if !arrow.top.is_finite() {
        return Err(GridError::InvalidData(
            "now indicator arrow must be finite".to_owned(),
        ));
    }
    Ok(())
}
