//! timegrid-rs: headless coordinate engine for day/week time grids.
//!
//! The crate maps wall-clock time onto measured slat geometry, lays out
//! time-ranged segments inside day columns and resolves pointer positions
//! into `(column, time range)` hits. Measurement and styling stay with the
//! host through the [`core::MeasureProvider`] and [`render::Renderer`] seams.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimeGridConfig, TimeGridEngine};
pub use error::{GridError, GridResult};
