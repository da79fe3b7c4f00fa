//! Display and surface configuration.
//!
//! Settings are an explicit value handed to whoever needs them (calculator
//! construction, display layers); nothing here is read from ambient state
//! mid-computation.

use crate::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Linear display unit.
///
/// Computation always happens in millimeters; the unit only affects how a
/// display layer renders values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    /// Millimeters (the computation unit).
    #[default]
    Millimeters,
    /// Centimeters.
    Centimeters,
}

impl Unit {
    /// Converts a millimeter value into this unit.
    pub fn convert(&self, value_mm: f64) -> f64 {
        match self {
            Unit::Millimeters => value_mm,
            Unit::Centimeters => value_mm / 10.0,
        }
    }

    /// Returns the unit suffix used in display strings.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Millimeters => "mm",
            Unit::Centimeters => "cm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Visualizer settings: the surface the container must fit on plus display
/// preferences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Width of the work surface in millimeters.
    pub surface_width: f64,

    /// Depth of the work surface in millimeters.
    pub surface_depth: f64,

    /// Unit used when formatting values for display.
    pub default_unit: Unit,

    /// Hex color for rendered items.
    pub item_color: String,

    /// Hex color for the rendered container.
    pub container_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: 1000.0,
            surface_depth: 1200.0,
            default_unit: Unit::Millimeters,
            item_color: "#4287f5".to_string(),
            container_color: "#bc9166".to_string(),
        }
    }
}

impl Settings {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the surface bounds.
    pub fn with_surface(mut self, width: f64, depth: f64) -> Self {
        self.surface_width = width;
        self.surface_depth = depth;
        self
    }

    /// Sets the display unit.
    pub fn with_default_unit(mut self, unit: Unit) -> Self {
        self.default_unit = unit;
        self
    }

    /// Sets the item color.
    pub fn with_item_color(mut self, color: impl Into<String>) -> Self {
        self.item_color = color.into();
        self
    }

    /// Sets the container color.
    pub fn with_container_color(mut self, color: impl Into<String>) -> Self {
        self.container_color = color.into();
        self
    }

    /// Checks that the surface bounds are positive.
    pub fn validate(&self) -> Result<()> {
        if self.surface_width <= 0.0 || self.surface_depth <= 0.0 {
            return Err(Error::ConfigError(
                "surface bounds must be positive".into(),
            ));
        }
        Ok(())
    }
}
