//! # Gridpack Layout
//!
//! Grid-arrangement packing geometry for the gridpack engine.
//!
//! This crate turns an item size, a rows/columns/layers arrangement and two
//! per-axis gap vectors into container dimensions, per-item placement
//! coordinates and constraint warnings. Rendering, persistence and input
//! collection are external consumers of the result types.

pub mod calculator;
pub mod result;
pub mod stats;

// Re-exports
pub use calculator::PackingCalculator;
pub use result::{DimensionSet, PackingResult, Position, ValidationReport};
pub use stats::SampleStats;
pub use gridpack_core::{
    Arrangement, Dimensions, Error, GapVector, PackingParameters, Result, Settings, Unit,
};
