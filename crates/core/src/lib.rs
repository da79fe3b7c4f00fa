//! # Gridpack Core
//!
//! Shared foundation types for the gridpack packing geometry engine.
//!
//! This crate provides the error taxonomy, the display/surface configuration
//! and the typed geometric inputs consumed by the layout calculator in
//! `gridpack-layout`.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod geometry;

// Re-exports
pub use config::{Settings, Unit};
pub use error::{Error, Result};
pub use geometry::{Arrangement, Dimensions, GapVector, PackingParameters};
