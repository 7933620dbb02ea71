use tracing::debug;

use crate::core::{Axis, LayoutSession, MeasureProvider, PositionCache};
use crate::error::{GridError, GridResult};
use crate::render::Renderer;

use super::TimeGridEngine;

impl<R: Renderer> TimeGridEngine<R> {
    /// Measures columns and slats and replaces the current layout session.
    ///
    /// Must be called after any geometry-affecting change (resize, column
    /// count, zoom). The previous session is kept when measurement fails.
    pub fn rebuild_positions(
        &mut self,
        columns: &impl MeasureProvider,
        slats: &impl MeasureProvider,
    ) -> GridResult<()> {
        let columns = self.measure_columns(columns)?;
        let slats = self.measure_slats(slats)?;
        self.replace_session(
            LayoutSession::new()
                .on_columns_measured(columns)
                .on_slats_measured(slats),
        );
        Ok(())
    }

    /// Installs all-zero caches of the configured shape.
    ///
    /// Used for non-interactive passes (e.g. print layout) where measured
    /// geometry is meaningless; every hit test misses afterwards.
    pub fn rebuild_positions_zeroed(&mut self) {
        let columns = PositionCache::zeros(Axis::Horizontal, self.day_starts.len());
        let slats = PositionCache::zeros(Axis::Vertical, self.slots.slat_count());
        self.replace_session(
            LayoutSession::new()
                .on_columns_measured(columns)
                .on_slats_measured(slats),
        );
    }

    /// Records a column measurement; slats keep their previous measurement.
    pub fn on_columns_measured(&mut self, columns: &impl MeasureProvider) -> GridResult<()> {
        let columns = self.measure_columns(columns)?;
        let session = std::mem::take(&mut self.session).on_columns_measured(columns);
        self.replace_session(session);
        Ok(())
    }

    /// Records a slat measurement; columns keep their previous measurement.
    pub fn on_slats_measured(&mut self, slats: &impl MeasureProvider) -> GridResult<()> {
        let slats = self.measure_slats(slats)?;
        let session = std::mem::take(&mut self.session).on_slats_measured(slats);
        self.replace_session(session);
        Ok(())
    }

    fn measure_columns(&self, provider: &impl MeasureProvider) -> GridResult<PositionCache> {
        let cache = PositionCache::build(Axis::Horizontal, provider)?;
        if cache.len() != self.day_starts.len() {
            return Err(GridError::InvalidData(format!(
                "measured {} columns but {} day columns are configured",
                cache.len(),
                self.day_starts.len()
            )));
        }
        Ok(cache)
    }

    fn measure_slats(&self, provider: &impl MeasureProvider) -> GridResult<PositionCache> {
        let cache = PositionCache::build(Axis::Vertical, provider)?;
        let expected = self.slots.slat_count();
        if cache.len() != expected {
            return Err(GridError::InvalidData(format!(
                "measured {} slats but the slot configuration yields {expected}",
                cache.len()
            )));
        }
        Ok(cache)
    }

    fn replace_session(&mut self, session: LayoutSession) {
        self.rebuild_count = self.rebuild_count.saturating_add(1);
        debug!(
            rebuild = self.rebuild_count,
            columns = ?session.columns().map(PositionCache::len),
            slats = ?session.slats().map(PositionCache::len),
            column_extent = ?session.columns().map(PositionCache::total_extent),
            slat_extent = ?session.slats().map(PositionCache::total_extent),
            "layout session replaced"
        );
        self.session = session;
    }
}
