//! Shared primitive types used across both pipelines.

/// Bolivianos per US dollar.
pub type Rate = f64;

/// A human-readable month label such as `"Mar 2025"`.
pub type MonthLabel = String;

/// The canonical run identifier.
pub type RunId = String;
