use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::{Axis, RegionBounds};
use crate::error::{GridError, GridResult};

/// Capability that reads live geometry for an ordered run of sibling regions.
///
/// Implemented by the rendering collaborator (a DOM adapter, a widget tree,
/// a fixture). All values share one coordinate space; the cache subtracts
/// `origin` so stored offsets are relative to the common parent.
pub trait MeasureProvider {
    /// Leading edge of the common parent along the measured axis.
    fn origin(&self) -> f64;

    fn region_count(&self) -> usize;

    /// Bounds of region `index`, `0 <= index < region_count()`.
    fn measure_region(&self, index: usize) -> RegionBounds;
}

/// Plain in-memory measurements, used by headless hosts and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasuredRegions {
    pub origin: f64,
    pub regions: Vec<RegionBounds>,
}

impl MeasuredRegions {
    #[must_use]
    pub fn new(origin: f64, regions: Vec<RegionBounds>) -> Self {
        Self { origin, regions }
    }

    /// Lays regions of the given extents back to back starting at `origin`.
    #[must_use]
    pub fn contiguous(origin: f64, extents: &[f64]) -> Self {
        let mut cursor = origin;
        let regions = extents
            .iter()
            .map(|&extent| {
                let bounds = RegionBounds::new(cursor, extent);
                cursor += extent;
                bounds
            })
            .collect();
        Self { origin, regions }
    }

    /// `count` regions of identical extent starting at `origin`.
    #[must_use]
    pub fn uniform(origin: f64, count: usize, extent: f64) -> Self {
        Self::contiguous(origin, &vec![extent; count])
    }
}

impl MeasureProvider for MeasuredRegions {
    fn origin(&self) -> f64 {
        self.origin
    }

    fn region_count(&self) -> usize {
        self.regions.len()
    }

    fn measure_region(&self, index: usize) -> RegionBounds {
        self.regions[index]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub offset: f64,
    pub extent: f64,
}

impl PositionEntry {
    #[must_use]
    pub fn far_edge(self) -> f64 {
        self.offset + self.extent
    }

    /// Half-open containment; zero-extent entries never match.
    #[must_use]
    pub fn contains(self, position: f64) -> bool {
        position >= self.offset && position < self.far_edge()
    }
}

/// Measured offsets and extents of sibling regions along one axis.
///
/// A cache is immutable once built. Layout changes produce a new cache that
/// replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionCache {
    axis: Axis,
    entries: Vec<PositionEntry>,
    total_extent: f64,
    ordered: bool,
    zeroed: bool,
}

impl PositionCache {
    /// Measures every region exposed by `provider`.
    pub fn build(axis: Axis, provider: &impl MeasureProvider) -> GridResult<Self> {
        let origin = provider.origin();
        if !origin.is_finite() {
            return Err(GridError::InvalidData(
                "measurement origin must be finite".to_owned(),
            ));
        }

        let count = provider.region_count();
        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let bounds = provider.measure_region(index).validate()?;
            entries.push(PositionEntry {
                offset: bounds.start - origin,
                extent: bounds.extent,
            });
        }

        Ok(Self::from_entries(axis, entries, false))
    }

    /// Cache of `count` regions whose geometry is all zero.
    ///
    /// Used when layout is suppressed but callers still need a cache of the
    /// right shape. Every pixel lookup on it misses.
    #[must_use]
    pub fn zeros(axis: Axis, count: usize) -> Self {
        let entries = vec![
            PositionEntry {
                offset: 0.0,
                extent: 0.0,
            };
            count
        ];
        Self::from_entries(axis, entries, true)
    }

    fn from_entries(axis: Axis, entries: Vec<PositionEntry>, zeroed: bool) -> Self {
        let total_extent = entries
            .iter()
            .map(|entry| entry.far_edge())
            .fold(0.0_f64, f64::max);
        let ordered = entries
            .windows(2)
            .all(|pair| pair[1].offset >= pair[0].far_edge());

        Self {
            axis,
            entries,
            total_extent,
            ordered,
            zeroed,
        }
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_zeroed(&self) -> bool {
        self.zeroed
    }

    /// Far edge of the furthest region; 0 for an empty cache.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        self.total_extent
    }

    #[must_use]
    pub fn entries(&self) -> &[PositionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<PositionEntry> {
        self.entries.get(index).copied()
    }

    /// Index of the region whose `[offset, far_edge)` contains `position`.
    ///
    /// A position equal to the last far edge is not matched.
    #[must_use]
    pub fn position_to_index(&self, position: f64) -> Option<usize> {
        if !position.is_finite() || position < 0.0 || position >= self.total_extent {
            return None;
        }

        let found = if self.ordered {
            let after = self.entries.partition_point(|entry| entry.offset <= position);
            after
                .checked_sub(1)
                .filter(|&index| self.entries[index].contains(position))
        } else {
            self.entries.iter().position(|entry| entry.contains(position))
        };
        trace!(axis = ?self.axis, position, index = ?found, "position lookup");
        found
    }

    pub fn index_to_offset(&self, index: usize) -> GridResult<f64> {
        self.checked_entry(index).map(|entry| entry.offset)
    }

    pub fn index_to_extent(&self, index: usize) -> GridResult<f64> {
        self.checked_entry(index).map(|entry| entry.extent)
    }

    pub fn index_to_far_edge(&self, index: usize) -> GridResult<f64> {
        self.checked_entry(index).map(PositionEntry::far_edge)
    }

    fn checked_entry(&self, index: usize) -> GridResult<PositionEntry> {
        self.entry(index).ok_or(GridError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }
}
