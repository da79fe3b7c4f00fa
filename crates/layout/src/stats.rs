//! Per-axis dimensional statistics.

use gridpack_core::{Error, GapVector, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean and population standard deviation of a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (divide by N, not N-1).
    pub standard_deviation: f64,
}

/// Computes population mean and standard deviation over a sample sequence.
///
/// Fails with [`Error::EmptyInput`] on an empty slice rather than producing
/// NaN from the division by zero.
pub fn population_stats(values: &[f64]) -> Result<SampleStats> {
    if values.is_empty() {
        return Err(Error::EmptyInput(
            "statistics require at least one sample".into(),
        ));
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Ok(SampleStats {
        mean,
        standard_deviation: variance.sqrt(),
    })
}

/// Compares calculated per-axis standard deviations against targets.
///
/// Emits one warning per axis whose calculated value strictly exceeds its
/// target, in x, y, z order. Equality does not warn.
pub fn validate_standard_deviations(calculated: GapVector, target: GapVector) -> Vec<String> {
    let mut warnings = Vec::new();

    if calculated.x > target.x {
        warnings.push(format!(
            "X-axis standard deviation ({:.2}) exceeds target ({})",
            calculated.x, target.x
        ));
    }
    if calculated.y > target.y {
        warnings.push(format!(
            "Y-axis standard deviation ({:.2}) exceeds target ({})",
            calculated.y, target.y
        ));
    }
    if calculated.z > target.z {
        warnings.push(format!(
            "Z-axis standard deviation ({:.2}) exceeds target ({})",
            calculated.z, target.z
        ));
    }

    warnings
}
