//! # Causeway Calculations
//!
//! This module contains the calculation-and-decision core. Each calculator
//! follows the pattern:
//!
//! - Input/result structs - JSON-serializable
//! - A pure top-level function (`calculate`, `estimate`, `analyze`,
//!   `assess`, `score`, `compare`) returning either a result or a
//!   structured `CalcError`
//!
//! The structural calculator is the root of the data flow; its
//! [`structural::StructuralResult`] echoes the input geometry and carries
//! every derived quantity, so the four downstream consumers (cost,
//! optimization, environment, health) and the comparator never re-derive
//! anything from raw input. All calculators are stateless and safe to call
//! in parallel on independent inputs.
//!
//! ## Available Calculations
//!
//! - [`structural`] - Feasibility: loads, foundation pressure, safety margin
//! - [`cost`] - Material pricing with regional multipliers
//! - [`optimization`] - Rule-table cost-saving suggestions
//! - [`environment`] - Carbon footprint and hydraulic impact
//! - [`health`] - Composite 0-100 design health score
//! - [`comparison`] - Baseline-vs-candidate diff

pub mod comparison;
pub mod cost;
pub mod environment;
pub mod health;
pub mod optimization;
pub mod structural;

// Re-export commonly used types
pub use comparison::{compare, ComparisonResult, MaterialDiff};
pub use cost::{estimate, CostEstimate, RateTable, Region};
pub use environment::{assess, EnvRating, EnvironmentalAssessment};
pub use health::{score, HealthRating, HealthScore};
pub use optimization::{analyze, OptimizationReport, OptimizationSuggestion};
pub use structural::{
    calculate, ConstructionMethod, DesignInput, FoundationType, MaterialQuantities,
    Recommendation, StructuralResult,
};

/// Round a value to 2 decimal places for presentation.
///
/// Intermediate math stays in full precision; only result fields are
/// rounded at construction.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
