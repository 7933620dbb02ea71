use chrono::Duration;
use tracing::trace;

use crate::core::{DateMarker, NowIndicatorPlacement, NowIndicatorPositioner, next_refresh_delay};
use crate::error::GridResult;
use crate::render::{PlacementFrame, Renderer};

use super::TimeGridEngine;

impl<R: Renderer> TimeGridEngine<R> {
    /// Placement of the current-time marker, `None` when `now` is not in view.
    pub fn now_indicator(&self, now: DateMarker) -> GridResult<Option<NowIndicatorPlacement>> {
        let geometry = self.session.geometry()?;
        let mapper = self.time_mapper()?;
        Ok(NowIndicatorPositioner::new(mapper, geometry.columns).position(now, &self.day_starts))
    }

    /// Renders the now indicator and returns whether anything was placed.
    pub fn render_now_indicator(&mut self, now: DateMarker) -> GridResult<bool> {
        let Some(placement) = self.now_indicator(now)? else {
            trace!(%now, "now indicator out of view");
            return Ok(false);
        };
        let container_extent = self.time_mapper()?.slats().total_extent();
        let frame = PlacementFrame::new(container_extent).with_now_indicator(&placement);
        self.render_frame(&frame)?;
        Ok(true)
    }

    /// Delay before the indicator should be repositioned.
    #[must_use]
    pub fn now_indicator_refresh_delay(&self, now: DateMarker) -> Duration {
        next_refresh_delay(now)
    }
}
