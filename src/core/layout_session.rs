use crate::core::position_cache::PositionCache;
use crate::core::types::Axis;
use crate::error::{GridError, GridResult};

/// Geometry captured by one layout pass.
///
/// Each measurement callback consumes the session and returns the next one,
/// so a rebuild never patches a cache in place and the two callbacks may
/// arrive in either order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSession {
    columns: Option<PositionCache>,
    slats: Option<PositionCache>,
}

/// Both caches of a fully measured session.
#[derive(Debug, Clone, Copy)]
pub struct GridGeometry<'a> {
    pub columns: &'a PositionCache,
    pub slats: &'a PositionCache,
}

impl LayoutSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_columns_measured(self, columns: PositionCache) -> Self {
        debug_assert_eq!(columns.axis(), Axis::Horizontal);
        Self {
            columns: Some(columns),
            ..self
        }
    }

    #[must_use]
    pub fn on_slats_measured(self, slats: PositionCache) -> Self {
        debug_assert_eq!(slats.axis(), Axis::Vertical);
        Self {
            slats: Some(slats),
            ..self
        }
    }

    #[must_use]
    pub fn columns(&self) -> Option<&PositionCache> {
        self.columns.as_ref()
    }

    #[must_use]
    pub fn slats(&self) -> Option<&PositionCache> {
        self.slats.as_ref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.columns.is_some() && self.slats.is_some()
    }

    /// Fails with [`GridError::CacheNotBuilt`] until both sides were measured.
    pub fn geometry(&self) -> GridResult<GridGeometry<'_>> {
        let columns = self
            .columns
            .as_ref()
            .ok_or(GridError::CacheNotBuilt { cache: "column" })?;
        let slats = self
            .slats
            .as_ref()
            .ok_or(GridError::CacheNotBuilt { cache: "slat" })?;
        Ok(GridGeometry { columns, slats })
    }
}
