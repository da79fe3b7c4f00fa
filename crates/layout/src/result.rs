//! Layout result representation.

use gridpack_core::{Arrangement, Dimensions, GapVector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four derived dimension triples of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionSet {
    /// Raw item size as supplied.
    pub item: Dimensions,

    /// Item size plus twice the item gap on each axis.
    pub effective_item: Dimensions,

    /// The packed block: effective item times the arrangement count per axis.
    pub inner: Dimensions,

    /// Full container footprint: inner plus twice the container gap per axis.
    pub outer: Dimensions,
}

/// Result of one container calculation.
///
/// Produced fresh on every call and immutable once returned; the calculator
/// keeps no state between calls.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingResult {
    /// All derived dimensions.
    pub dimensions: DimensionSet,

    /// Container gaps used for this calculation.
    pub container_gaps: GapVector,

    /// Item gaps used for this calculation.
    pub item_gaps: GapVector,

    /// Whether the outer footprint overflows the configured surface.
    /// Height never participates in this check.
    pub exceeds_surface: bool,

    /// Total item count (rows * columns * layers).
    pub total_items: usize,

    /// Arrangement used for this calculation.
    pub arrangement: Arrangement,

    /// Human-readable warnings; empty when the container fits.
    pub warnings: Vec<String>,
}

impl PackingResult {
    /// Returns true if the container fits within the surface footprint.
    pub fn is_within_surface(&self) -> bool {
        !self.exceeds_surface
    }

    /// Returns true if any warnings were produced.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Top-left-front corner offset of one item within the packed grid.
///
/// Offsets are relative to the grid origin and do not include the
/// container-gap offset; a caller placing items inside the container adds
/// the container gap to each coordinate itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Offset along the width axis.
    pub x: f64,
    /// Offset along the height axis.
    pub y: f64,
    /// Offset along the depth axis.
    pub z: f64,
}

impl Position {
    /// Creates a position from per-axis offsets.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Outcome of a configuration validation pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationReport {
    /// True when no warnings were produced.
    pub is_valid: bool,

    /// Warnings explaining why the configuration is not valid.
    pub warnings: Vec<String>,
}
