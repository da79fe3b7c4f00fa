//! Grid packing layout calculator.

use crate::result::{DimensionSet, PackingResult, Position, ValidationReport};
use crate::stats::{self, SampleStats};
use gridpack_core::{Arrangement, Dimensions, GapVector, PackingParameters, Result, Settings};

/// Pure geometry engine turning item size, grid arrangement and gaps into
/// container dimensions, item placements and constraint warnings.
///
/// The only state is the pair of surface bounds fixed at construction; every
/// operation is a deterministic function of its arguments plus those two
/// values. Inputs are trusted: zero or negative values flow through as
/// non-physical geometry, and callers run [`PackingParameters::validate`]
/// at the boundary when they need sanitized input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackingCalculator {
    surface_width: f64,
    surface_depth: f64,
}

impl Default for PackingCalculator {
    fn default() -> Self {
        Self::new(1000.0, 1200.0)
    }
}

impl PackingCalculator {
    /// Creates a calculator for the given surface footprint (in millimeters).
    pub fn new(surface_width: f64, surface_depth: f64) -> Self {
        Self {
            surface_width,
            surface_depth,
        }
    }

    /// Creates a calculator bound to the surface configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.surface_width, settings.surface_depth)
    }

    /// Returns the surface width bound.
    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    /// Returns the surface depth bound.
    pub fn surface_depth(&self) -> f64 {
        self.surface_depth
    }

    /// Computes population mean and standard deviation over a sample
    /// sequence. Fails on an empty slice.
    pub fn compute_statistics(&self, values: &[f64]) -> Result<SampleStats> {
        stats::population_stats(values)
    }

    /// Compares calculated per-axis standard deviations against targets,
    /// returning one warning per axis that strictly exceeds its target.
    pub fn validate_standard_deviations(
        &self,
        calculated: GapVector,
        target: GapVector,
    ) -> Vec<String> {
        stats::validate_standard_deviations(calculated, target)
    }

    /// Computes the full dimension set for one packing configuration.
    ///
    /// Effective item size adds twice the item gap per axis; the inner block
    /// multiplies by the arrangement counts (columns along width, rows along
    /// depth, layers along height); the outer container adds twice the
    /// container gap per axis. Gap axes map as x to width, y to height and
    /// z to depth.
    ///
    /// Surface overflow is a warning, not an error: the result still carries
    /// the full dimensional data so the caller can render the oversized
    /// container anyway.
    pub fn calculate_container(
        &self,
        item: Dimensions,
        arrangement: Arrangement,
        container_gaps: GapVector,
        item_gaps: GapVector,
    ) -> PackingResult {
        let effective_item = Dimensions::new(
            item.width + 2.0 * item_gaps.x,
            item.depth + 2.0 * item_gaps.z,
            item.height + 2.0 * item_gaps.y,
        );

        let inner = Dimensions::new(
            effective_item.width * arrangement.columns as f64,
            effective_item.depth * arrangement.rows as f64,
            effective_item.height * arrangement.layers as f64,
        );

        let outer = Dimensions::new(
            inner.width + 2.0 * container_gaps.x,
            inner.depth + 2.0 * container_gaps.z,
            inner.height + 2.0 * container_gaps.y,
        );

        // The surface is a 2D footprint; height is unconstrained.
        let exceeds_surface = outer.width > self.surface_width || outer.depth > self.surface_depth;

        let warnings = if exceeds_surface {
            log::warn!(
                "container {:.1}x{:.1} exceeds surface {}x{}",
                outer.width,
                outer.depth,
                self.surface_width,
                self.surface_depth
            );
            vec![format!(
                "Container exceeds surface area of {}mm x {}mm",
                self.surface_width, self.surface_depth
            )]
        } else {
            Vec::new()
        };

        PackingResult {
            dimensions: DimensionSet {
                item,
                effective_item,
                inner,
                outer,
            },
            container_gaps,
            item_gaps,
            exceeds_surface,
            total_items: arrangement.total(),
            arrangement,
            warnings,
        }
    }

    /// Convenience over [`calculate_container`](Self::calculate_container)
    /// taking the bundled parameter struct.
    pub fn calculate(&self, params: &PackingParameters) -> PackingResult {
        self.calculate_container(
            params.item,
            params.arrangement,
            params.container_gaps,
            params.item_gaps,
        )
    }

    /// Generates the grid position of every item, layer-major then row then
    /// column, so position `i = layer * rows * columns + row * columns + col`.
    ///
    /// Positions use the raw item dimensions: item gaps are not folded into
    /// the spacing and the container-gap origin offset is not applied, which
    /// intentionally differs from the gapped spacing baked into
    /// [`calculate_container`](Self::calculate_container). Callers that lay
    /// out gapped geometry recompute spacing from the inner block instead.
    pub fn calculate_item_positions(
        &self,
        item: Dimensions,
        arrangement: Arrangement,
    ) -> Vec<Position> {
        let mut positions = Vec::with_capacity(arrangement.total());

        for layer in 0..arrangement.layers {
            for row in 0..arrangement.rows {
                for col in 0..arrangement.columns {
                    positions.push(Position::new(
                        col as f64 * item.width,
                        layer as f64 * item.height,
                        row as f64 * item.depth,
                    ));
                }
            }
        }

        positions
    }

    /// Checks whether a gapless configuration fits the surface.
    ///
    /// Runs [`calculate_container`](Self::calculate_container) with zero gap
    /// vectors and reports validity from the resulting warnings.
    pub fn validate_configuration(
        &self,
        item: Dimensions,
        arrangement: Arrangement,
    ) -> ValidationReport {
        let result =
            self.calculate_container(item, arrangement, GapVector::zero(), GapVector::zero());

        ValidationReport {
            is_valid: result.warnings.is_empty(),
            warnings: result.warnings,
        }
    }
}
