use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::segment::{PositionedSegment, SegmentVerticals};

/// Horizontal share of a column occupied by one segment.
///
/// `backward_coord`/`forward_coord` are fractions of the column width in
/// `[0, 1]`; `level` is the first stacking lane without vertical collision and
/// `forward_pressure` the longest chain of collisions in later lanes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentHorizontals {
    pub level: usize,
    pub forward_pressure: usize,
    pub backward_coord: f64,
    pub forward_coord: f64,
}

impl SegmentHorizontals {
    /// Pixel `(left, right)` inside a column starting at `column_left`.
    #[must_use]
    pub fn pixel_span(self, column_left: f64, column_width: f64) -> (f64, f64) {
        (
            column_left + self.backward_coord * column_width,
            column_left + self.forward_coord * column_width,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedSegment {
    pub segment: PositionedSegment,
    pub horizontals: SegmentHorizontals,
}

#[must_use]
pub fn verticals_collide(a: SegmentVerticals, b: SegmentVerticals) -> bool {
    a.bottom > b.top && a.top < b.bottom
}

/// Lays out the overlapping segments of a single column side by side.
///
/// Segments are ordered with `compare` first; that order decides lane
/// assignment and breaks ties between equally pressured forward segments.
#[must_use]
pub fn stack_column<F>(mut segments: Vec<PositionedSegment>, mut compare: F) -> Vec<StackedSegment>
where
    F: FnMut(&PositionedSegment, &PositionedSegment) -> Ordering,
{
    segments.sort_by(&mut compare);
    let verticals: Vec<SegmentVerticals> = segments.iter().map(|s| s.verticals).collect();

    let mut stack = ColumnStack::new(&verticals);
    stack.assign_levels();
    stack.link_forward_segments();
    if let Some(first_level) = stack.levels.first().cloned() {
        for &index in &first_level {
            stack.forward_pressure(index);
        }
        for &index in &first_level {
            stack.resolve_coords(index, 0, 0.0);
        }
    }

    let ColumnStack {
        level_of,
        pressure,
        backward,
        forward,
        ..
    } = stack;

    segments
        .into_iter()
        .enumerate()
        .map(|(index, segment)| StackedSegment {
            segment,
            horizontals: SegmentHorizontals {
                level: level_of[index],
                forward_pressure: pressure[index].unwrap_or(0),
                backward_coord: backward[index].unwrap_or(0.0),
                forward_coord: forward[index].unwrap_or(1.0),
            },
        })
        .collect()
}

struct ColumnStack<'a> {
    verticals: &'a [SegmentVerticals],
    levels: Vec<Vec<usize>>,
    level_of: Vec<usize>,
    forward_links: Vec<Vec<usize>>,
    pressure: Vec<Option<usize>>,
    backward: Vec<Option<f64>>,
    forward: Vec<Option<f64>>,
}

impl<'a> ColumnStack<'a> {
    fn new(verticals: &'a [SegmentVerticals]) -> Self {
        let count = verticals.len();
        Self {
            verticals,
            levels: Vec::new(),
            level_of: vec![0; count],
            forward_links: vec![Vec::new(); count],
            pressure: vec![None; count],
            backward: vec![None; count],
            forward: vec![None; count],
        }
    }

    fn collides_with_level(&self, index: usize, level: &[usize]) -> bool {
        level
            .iter()
            .any(|&other| verticals_collide(self.verticals[index], self.verticals[other]))
    }

    fn assign_levels(&mut self) {
        for index in 0..self.verticals.len() {
            let level = self
                .levels
                .iter()
                .position(|lane| !self.collides_with_level(index, lane))
                .unwrap_or(self.levels.len());
            if level == self.levels.len() {
                self.levels.push(Vec::new());
            }
            self.levels[level].push(index);
            self.level_of[index] = level;
        }
    }

    fn link_forward_segments(&mut self) {
        for (level_index, level) in self.levels.iter().enumerate() {
            for &index in level {
                let links = self.levels[level_index + 1..]
                    .iter()
                    .flatten()
                    .copied()
                    .filter(|&other| {
                        verticals_collide(self.verticals[index], self.verticals[other])
                    })
                    .collect();
                self.forward_links[index] = links;
            }
        }
    }

    fn forward_pressure(&mut self, index: usize) -> usize {
        if let Some(pressure) = self.pressure[index] {
            return pressure;
        }
        let mut pressure = 0;
        for other in self.forward_links[index].clone() {
            pressure = pressure.max(1 + self.forward_pressure(other));
        }
        self.pressure[index] = Some(pressure);
        pressure
    }

    fn resolve_coords(
        &mut self,
        index: usize,
        series_backward_pressure: usize,
        series_backward_coord: f64,
    ) {
        if self.forward[index].is_some() {
            return;
        }

        let mut links = self.forward_links[index].clone();
        let forward_coord = if links.is_empty() {
            1.0
        } else {
            links.sort_by(|&a, &b| self.compare_forward(a, b));
            let first = links[0];
            self.resolve_coords(first, series_backward_pressure + 1, series_backward_coord);
            self.backward[first].unwrap_or(1.0)
        };

        self.forward[index] = Some(forward_coord);
        self.backward[index] = Some(
            forward_coord
                - (forward_coord - series_backward_coord) / (series_backward_pressure + 1) as f64,
        );

        for other in links {
            self.resolve_coords(other, 0, forward_coord);
        }
    }

    /// Higher pressure first, then smaller known backward coord (unknown
    /// last), then original order.
    fn compare_forward(&self, a: usize, b: usize) -> Ordering {
        let pressure = |i: usize| self.pressure[i].unwrap_or(0);
        let backward = |i: usize| self.backward[i].map(OrderedFloat);
        pressure(b)
            .cmp(&pressure(a))
            .then_with(|| match (backward(a), backward(b)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.cmp(&b))
    }
}
