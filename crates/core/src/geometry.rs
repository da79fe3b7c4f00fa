//! Geometric input types for grid packing.
//!
//! All linear values are in the same unit as the configured surface bounds
//! (millimeters in the reference setup). The calculator itself never
//! validates these inputs; the `validate` methods here are the boundary
//! check callers run before invoking it.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw size of one packable item (width, depth, height), excluding any gap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Extent along the width (x) axis.
    pub width: f64,
    /// Extent along the depth (z) axis.
    pub depth: f64,
    /// Extent along the height (y) axis.
    pub height: f64,
}

impl Dimensions {
    /// Creates dimensions from width, depth and height.
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Returns the enclosed volume.
    pub fn volume(&self) -> f64 {
        self.width * self.depth * self.height
    }

    /// Returns the largest of the three extents.
    pub fn max_extent(&self) -> f64 {
        self.width.max(self.depth).max(self.height)
    }

    /// Checks that all extents are positive.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0.0 || self.depth <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidDimensions(
                "all item dimensions must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Grid arrangement counts: how many items are packed along each axis.
///
/// Rows run along the depth axis, columns along the width axis and layers
/// along the height axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arrangement {
    /// Item count along the depth axis.
    pub rows: usize,
    /// Item count along the width axis.
    pub columns: usize,
    /// Item count along the height axis.
    pub layers: usize,
}

impl Arrangement {
    /// Creates an arrangement from row, column and layer counts.
    pub fn new(rows: usize, columns: usize, layers: usize) -> Self {
        Self {
            rows,
            columns,
            layers,
        }
    }

    /// Total number of items in the grid.
    pub fn total(&self) -> usize {
        self.rows * self.columns * self.layers
    }

    /// Checks that every axis has at least one item.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 || self.layers == 0 {
            return Err(Error::InvalidArrangement(
                "rows, columns and layers must each be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Per-axis clearance triple.
///
/// Used both for container gaps (clearance between the packed block and the
/// container wall, applied once per side) and item gaps (clearance around
/// each item, applied on both sides). The axis mapping is fixed: `x` pairs
/// with width, `y` with height and `z` with depth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GapVector {
    /// Clearance along the width axis.
    pub x: f64,
    /// Clearance along the height axis.
    pub y: f64,
    /// Clearance along the depth axis.
    pub z: f64,
}

impl GapVector {
    /// Creates a gap vector from per-axis values.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A zero gap on every axis.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The same gap on every axis.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Checks that no axis has a negative clearance.
    pub fn validate(&self) -> Result<()> {
        if self.x < 0.0 || self.y < 0.0 || self.z < 0.0 {
            return Err(Error::InvalidGaps("gap values must be non-negative".into()));
        }
        Ok(())
    }
}

/// Complete, strongly-typed input set for one packing calculation.
///
/// Bundles what the form layer collects so it can be validated once at the
/// boundary instead of field-by-field inside the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingParameters {
    /// Raw item size.
    pub item: Dimensions,
    /// Grid counts per axis.
    pub arrangement: Arrangement,
    /// Clearance between the packed block and the container wall.
    pub container_gaps: GapVector,
    /// Clearance around each individual item.
    pub item_gaps: GapVector,
}

impl PackingParameters {
    /// Creates a parameter set.
    pub fn new(
        item: Dimensions,
        arrangement: Arrangement,
        container_gaps: GapVector,
        item_gaps: GapVector,
    ) -> Self {
        Self {
            item,
            arrangement,
            container_gaps,
            item_gaps,
        }
    }

    /// Runs all boundary checks: positive dimensions, non-zero counts and
    /// non-negative gaps.
    pub fn validate(&self) -> Result<()> {
        self.item.validate()?;
        self.arrangement.validate()?;
        self.container_gaps.validate()?;
        self.item_gaps.validate()?;
        Ok(())
    }
}
