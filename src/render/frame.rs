use crate::core::{AxisArrow, NowIndicatorPlacement};
use crate::error::GridResult;
use crate::render::primitives::{validate_arrow, validate_now_line};
use crate::render::{NowLinePrimitive, SegmentPrimitive};

/// Backend-agnostic placement pass handed to a [`Renderer`](crate::render::Renderer).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementFrame {
    /// Extent of the slat container along the time axis.
    pub container_extent: f64,
    pub segments: Vec<SegmentPrimitive>,
    pub now_lines: Vec<NowLinePrimitive>,
    pub now_arrow: Option<AxisArrow>,
}

impl PlacementFrame {
    #[must_use]
    pub fn new(container_extent: f64) -> Self {
        Self {
            container_extent,
            segments: Vec::new(),
            now_lines: Vec::new(),
            now_arrow: None,
        }
    }

    #[must_use]
    pub fn with_segment(mut self, segment: SegmentPrimitive) -> Self {
        self.segments.push(segment);
        self
    }

    #[must_use]
    pub fn with_now_indicator(mut self, placement: &NowIndicatorPlacement) -> Self {
        self.now_lines.extend(placement.lines.iter().copied());
        self.now_arrow = Some(placement.arrow);
        self
    }

    pub fn validate(&self) -> GridResult<()> {
        for segment in &self.segments {
            segment.validate()?;
        }
        for line in &self.now_lines {
            validate_now_line(*line)?;
        }
        if let Some(arrow) = self.now_arrow {
            validate_arrow(arrow)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.now_lines.is_empty() && self.now_arrow.is_none()
    }
}
