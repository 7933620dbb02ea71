use crate::core::TimeRange;
use crate::error::GridResult;
use crate::interaction::{HitResult, HitTester, selection_between};
use crate::render::Renderer;

use super::TimeGridEngine;

impl<R: Renderer> TimeGridEngine<R> {
    /// Resolves a pointer position relative to the grid origin.
    ///
    /// `Ok(None)` means the pointer is outside every cell; an error means the
    /// layout was never measured.
    pub fn hit_test(&self, x: f64, y: f64) -> GridResult<Option<HitResult>> {
        let geometry = self.session.geometry()?;
        Ok(HitTester::new(geometry, self.slots, &self.day_starts).hit_test(x, y))
    }

    /// Time span selected by dragging from `anchor` to the pointer at
    /// `(x, y)`; `None` while the pointer is off the grid.
    pub fn selection_to(&self, anchor: &HitResult, x: f64, y: f64) -> GridResult<Option<TimeRange>> {
        Ok(self
            .hit_test(x, y)?
            .map(|current| selection_between(anchor, &current)))
    }
}
