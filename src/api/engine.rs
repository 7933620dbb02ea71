use indexmap::IndexMap;
use tracing::debug;

use crate::core::{DateMarker, LayoutSession, SlotGeometry, start_of_day};
use crate::error::GridResult;
use crate::render::{PlacementFrame, Renderer};

use super::TimeGridConfig;

/// Main orchestration facade consumed by host applications.
///
/// `TimeGridEngine` owns the grid configuration, the column-to-day mapping,
/// the geometry of the latest layout pass and the renderer that applies
/// placements.
pub struct TimeGridEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: TimeGridConfig,
    pub(super) slots: SlotGeometry,
    pub(super) day_starts: Vec<DateMarker>,
    pub(super) session: LayoutSession,
    pub(super) rebuild_count: u64,
    pub(super) metadata: IndexMap<String, String>,
}

impl<R: Renderer> TimeGridEngine<R> {
    pub fn new(renderer: R, config: TimeGridConfig) -> GridResult<Self> {
        let slots = config.resolve_slots()?;
        Ok(Self {
            renderer,
            config,
            slots,
            day_starts: Vec::new(),
            session: LayoutSession::new(),
            rebuild_count: 0,
            metadata: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> TimeGridConfig {
        self.config
    }

    #[must_use]
    pub fn slots(&self) -> SlotGeometry {
        self.slots
    }

    /// Replaces the configuration.
    ///
    /// The measured slats no longer match a new slot layout, so the layout
    /// session is discarded and has to be rebuilt.
    pub fn set_config(&mut self, config: TimeGridConfig) -> GridResult<()> {
        let slots = config.resolve_slots()?;
        if slots != self.slots {
            debug!("slot geometry changed, discarding measured positions");
            self.session = LayoutSession::new();
        }
        self.config = config;
        self.slots = slots;
        Ok(())
    }

    /// Day start of every column, left to right.
    #[must_use]
    pub fn day_columns(&self) -> &[DateMarker] {
        &self.day_starts
    }

    /// Sets the day shown by each column; markers are truncated to their day
    /// start.
    pub fn set_day_columns(&mut self, days: Vec<DateMarker>) {
        let days: Vec<DateMarker> = days.into_iter().map(start_of_day).collect();
        if days.len() != self.day_starts.len() && self.session.columns().is_some() {
            debug!(
                previous = self.day_starts.len(),
                current = days.len(),
                "column count changed, discarding measured positions"
            );
            self.session = LayoutSession::new();
        }
        self.day_starts = days;
    }

    #[must_use]
    pub fn layout_session(&self) -> &LayoutSession {
        &self.session
    }

    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    pub(super) fn render_frame(&mut self, frame: &PlacementFrame) -> GridResult<()> {
        self.renderer.render(frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
