//! # Optimization Advisor
//!
//! Inspects a computed structural result for over/under-design patterns and
//! emits ranked cost-saving suggestions with risk tags.
//!
//! Despite the name this is a fixed decision table, not a search: rules are
//! evaluated in a stable order and every matching rule emits its suggestion,
//! so the output is exactly reproducible for a given result.
//!
//! ## Gate order
//!
//! 1. Unsafe designs (margin below the required safety factor) get no
//!    cost-saving suggestions at all, only a summary pointing back at the
//!    safety warning.
//! 2. Designs in the balanced band (margin within [1.0x, 1.4x) of the
//!    required factor) are already efficient; the report is empty with an
//!    "already optimized" summary.
//! 3. Everything else runs through the rule table.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use causeway_core::calculations::optimization::analyze;
//! use causeway_core::calculations::structural::{DesignInput, calculate};
//!
//! let input = DesignInput {
//!     length_m: 100.0,
//!     width_m: 8.0,
//!     height_m: 2.0,
//!     water_depth_m: 1.5,
//!     soil_type: "medium".to_string(),
//!     load_class: "vehicular".to_string(),
//!     safety_factor: 2.5,
//! };
//! let result = calculate(&input).unwrap();
//!
//! let report = analyze(&result);
//! for suggestion in &report.suggestions {
//!     println!("[{:?}] {}", suggestion.kind, suggestion.text);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::structural::StructuralResult;

/// Margin-to-factor ratio at and above which a design counts as
/// over-designed (1.4 x the default factor 2.5 = margin 3.5).
///
/// This is also the top of the balanced band, so "no suggestions" and
/// "over-designed" partition the safe designs exactly.
const HIGH_EXCESS_RATIO: f64 = 1.4;

/// Intrinsic steel-to-concrete ratio produced by the takeoff formula (t/m³)
const STEEL_RATIO_BASELINE: f64 = 0.08;

/// Water-depth-to-height ratio below which the deck has excess hydraulic
/// clearance
const HYDRAULIC_CLEARANCE_RATIO: f64 = 0.5;

/// Foundation pressure-to-capacity utilization below which the footprint
/// counts as oversized
const FOUNDATION_UTILIZATION_MIN: f64 = 0.25;

/// Category of a cost-saving suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    CostReduction,
    MaterialOptimization,
    HydraulicOptimization,
    FoundationOptimization,
}

/// Risk of applying a suggestion without further analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    LowRisk,
    MediumRisk,
    HighRisk,
}

/// A single cost-saving suggestion.
///
/// ## JSON Example
///
/// ```json
/// {
///   "kind": "cost_reduction",
///   "text": "Safety margin is 7.3x the required factor; reduce foundation width by ~10%",
///   "potential_savings": "15-20% material cost",
///   "impact": "low_risk"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSuggestion {
    /// Suggestion category
    pub kind: SuggestionKind,

    /// What to change and why
    pub text: String,

    /// Expected savings range (percent, free text)
    pub potential_savings: String,

    /// Risk tag for applying the change
    pub impact: Impact,
}

/// Advisor output: zero or more suggestions plus a one-line summary.
///
/// An empty suggestion list signals an already-efficient (or unsafe)
/// design; the summary says which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Suggestions in fixed rule order
    pub suggestions: Vec<OptimizationSuggestion>,

    /// One-line outcome summary
    pub summary: String,
}

impl OptimizationReport {
    /// True when the advisor found nothing to change
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// Analyze a structural result for cost-saving opportunities.
///
/// Pure function over the already-computed result; nothing is re-derived
/// from the raw input.
pub fn analyze(result: &StructuralResult) -> OptimizationReport {
    let margin_ratio = result.safety_margin / result.safety_factor;

    // Gate 1: never offer savings on an unsafe design.
    if result.safety_margin < result.safety_factor {
        return OptimizationReport {
            suggestions: Vec::new(),
            summary: format!(
                "Design is not safe (margin {:.2} below required factor {:.2}); \
                 revise the design before seeking cost savings",
                result.safety_margin, result.safety_factor
            ),
        };
    }

    // Gate 2: balanced band, nothing worth changing.
    if margin_ratio < HIGH_EXCESS_RATIO {
        return OptimizationReport {
            suggestions: Vec::new(),
            summary: format!(
                "Design is already optimized: safety margin {:.2} sits within \
                 the balanced band for the required factor {:.2}",
                result.safety_margin, result.safety_factor
            ),
        };
    }

    // Rule table, fixed order.
    let mut suggestions = Vec::new();

    // R1: high excess safety margin
    if margin_ratio >= HIGH_EXCESS_RATIO {
        suggestions.push(OptimizationSuggestion {
            kind: SuggestionKind::CostReduction,
            text: format!(
                "Safety margin {:.2} is {:.1}x the required factor; the section \
                 can be slimmed - reduce foundation width by ~10%",
                result.safety_margin, margin_ratio
            ),
            potential_savings: "15-20% material cost".to_string(),
            impact: Impact::LowRisk,
        });
    }

    // R2: steel content above the takeoff baseline. Extensible hook: the
    // current takeoff fixes the ratio at the baseline, so this fires only
    // once variable reinforcement rates exist. The tolerance absorbs
    // presentation rounding of the quantities.
    if result.materials.concrete_m3 > 0.0 {
        let steel_ratio = result.materials.steel_t / result.materials.concrete_m3;
        if steel_ratio > STEEL_RATIO_BASELINE + 1e-3 {
            suggestions.push(OptimizationSuggestion {
                kind: SuggestionKind::MaterialOptimization,
                text: format!(
                    "Steel content {:.3} t/m³ exceeds the {:.3} t/m³ baseline; \
                     review reinforcement layout",
                    steel_ratio, STEEL_RATIO_BASELINE
                ),
                potential_savings: "5-8% steel cost".to_string(),
                impact: Impact::MediumRisk,
            });
        }
    }

    // R3: excess hydraulic clearance
    if result.water_depth_m / result.height_m < HYDRAULIC_CLEARANCE_RATIO {
        suggestions.push(OptimizationSuggestion {
            kind: SuggestionKind::HydraulicOptimization,
            text: format!(
                "Structure height {:.2} m is large relative to the {:.2} m \
                 design water depth; lowering the deck profile reduces volume",
                result.height_m, result.water_depth_m
            ),
            potential_savings: "3-5% total cost".to_string(),
            impact: Impact::MediumRisk,
        });
    }

    // R4: oversized foundation footprint
    let utilization = result.foundation_pressure_kpa / result.soil_bearing_capacity_kpa;
    if utilization < FOUNDATION_UTILIZATION_MIN {
        suggestions.push(OptimizationSuggestion {
            kind: SuggestionKind::FoundationOptimization,
            text: format!(
                "Foundation uses only {:.0}% of the available bearing capacity; \
                 the footprint can shrink",
                utilization * 100.0
            ),
            potential_savings: "8-12% foundation cost".to_string(),
            impact: Impact::LowRisk,
        });
    }

    OptimizationReport {
        summary: format!(
            "{} saving opportunit{} identified",
            suggestions.len(),
            if suggestions.len() == 1 { "y" } else { "ies" }
        ),
        suggestions,
    }
}
