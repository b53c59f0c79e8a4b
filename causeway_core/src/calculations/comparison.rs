//! # Design Comparison
//!
//! Diffs two previously computed structural results - volume, cost, safety,
//! materials - and emits a recommendation.
//!
//! Percent fields are computed as (candidate - baseline) / baseline x 100,
//! so they are relative to the baseline (the first/older design); safety and
//! material deltas are absolute differences. Both designs are costed
//! internally with the shared default rate table and the standard region so
//! the cost comparison is always apples-to-apples.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use causeway_core::calculations::comparison::compare;
//! use causeway_core::calculations::structural::{DesignInput, calculate};
//!
//! let mut input = DesignInput {
//!     length_m: 100.0,
//!     width_m: 8.0,
//!     height_m: 2.0,
//!     water_depth_m: 1.5,
//!     soil_type: "medium".to_string(),
//!     load_class: "vehicular".to_string(),
//!     safety_factor: 2.5,
//! };
//! let baseline = calculate(&input).unwrap();
//!
//! input.height_m = 1.5;
//! let candidate = calculate(&input).unwrap();
//!
//! let diff = compare(&baseline, &candidate).unwrap();
//! println!("Volume: {:+.1}%", diff.volume_diff_pct);
//! println!("{}", diff.recommendation);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::cost::{estimate, Region};
use crate::calculations::round2;
use crate::calculations::structural::StructuralResult;
use crate::errors::{CalcError, CalcResult};

/// Cost increase (percent of baseline) still considered "modest" when the
/// candidate is safer
const COST_TOLERANCE_PCT: f64 = 5.0;

/// Absolute material quantity deltas, candidate minus baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDiff {
    /// Concrete delta (m³)
    pub concrete_m3: f64,
    /// Steel delta (t)
    pub steel_t: f64,
}

/// Results from comparing a candidate design against a baseline.
///
/// ## JSON Example
///
/// ```json
/// {
///   "volume_diff_pct": -25.0,
///   "cost_diff_pct": -24.54,
///   "safety_diff": 2.57,
///   "material_diff": { "concrete_m3": -400.0, "steel_t": -32.0 },
///   "baseline_total_cost": 26155440.0,
///   "candidate_total_cost": 19738080.0,
///   "recommendation": "Candidate improves on both safety and cost; prefer the candidate"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Volume change relative to baseline, percent
    pub volume_diff_pct: f64,

    /// Total cost change relative to baseline, percent
    pub cost_diff_pct: f64,

    /// Safety margin delta, absolute (positive means the candidate is safer)
    pub safety_diff: f64,

    /// Material quantity deltas, absolute
    pub material_diff: MaterialDiff,

    /// Baseline total cost (default rates, standard region)
    pub baseline_total_cost: f64,

    /// Candidate total cost (default rates, standard region)
    pub candidate_total_cost: f64,

    /// Sign/magnitude verdict
    pub recommendation: String,
}

/// Compare a candidate design against a baseline.
///
/// # Arguments
///
/// * `baseline` - The first/older design percent fields are relative to
/// * `candidate` - The design being evaluated
///
/// # Returns
///
/// * `Ok(ComparisonResult)` - Diffs plus a recommendation
/// * `Err(CalcError)` - If either volume is non-positive (cannot occur for
///   results produced by the structural calculator, checked defensively)
pub fn compare(
    baseline: &StructuralResult,
    candidate: &StructuralResult,
) -> CalcResult<ComparisonResult> {
    if baseline.volume_m3 <= 0.0 {
        return Err(CalcError::comparison_failed(
            "baseline volume must be positive",
        ));
    }
    if candidate.volume_m3 <= 0.0 {
        return Err(CalcError::comparison_failed(
            "candidate volume must be positive",
        ));
    }

    // Shared default region keeps the cost diff apples-to-apples.
    let baseline_cost = estimate(&baseline.materials, Region::Standard)?;
    let candidate_cost = estimate(&candidate.materials, Region::Standard)?;

    let volume_diff_pct =
        (candidate.volume_m3 - baseline.volume_m3) / baseline.volume_m3 * 100.0;
    let cost_diff_pct =
        (candidate_cost.total - baseline_cost.total) / baseline_cost.total * 100.0;
    let safety_diff = candidate.safety_margin - baseline.safety_margin;

    let recommendation = verdict(safety_diff, cost_diff_pct);

    Ok(ComparisonResult {
        volume_diff_pct: round2(volume_diff_pct),
        cost_diff_pct: round2(cost_diff_pct),
        safety_diff: round2(safety_diff),
        material_diff: MaterialDiff {
            concrete_m3: round2(
                candidate.materials.concrete_m3 - baseline.materials.concrete_m3,
            ),
            steel_t: round2(candidate.materials.steel_t - baseline.materials.steel_t),
        },
        baseline_total_cost: baseline_cost.total,
        candidate_total_cost: candidate_cost.total,
        recommendation,
    })
}

fn verdict(safety_diff: f64, cost_diff_pct: f64) -> String {
    if safety_diff >= 0.0 && cost_diff_pct <= 0.0 {
        "Candidate improves on both safety and cost; prefer the candidate".to_string()
    } else if safety_diff > 0.0 && cost_diff_pct <= COST_TOLERANCE_PCT {
        "Candidate offers a better balance of safety and economy for a modest \
         cost increase"
            .to_string()
    } else if safety_diff < 0.0 && cost_diff_pct >= 0.0 {
        "Baseline remains preferable: the candidate is less safe and no cheaper"
            .to_string()
    } else {
        "Candidate trades safety against cost; neither design dominates".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::structural::{calculate, DesignInput};

    fn design(height_m: f64) -> StructuralResult {
        calculate(&DesignInput {
            length_m: 100.0,
            width_m: 8.0,
            height_m,
            water_depth_m: 1.5,
            soil_type: "medium".to_string(),
            load_class: "vehicular".to_string(),
            safety_factor: 2.5,
        })
        .unwrap()
    }

    #[test]
    fn test_volume_diff_percent() {
        let diff = compare(&design(2.0), &design(1.5)).unwrap();
        // 1200 vs 1600 m³
        assert!((diff.volume_diff_pct - (-25.0)).abs() < 0.01);
    }

    #[test]
    fn test_slimmer_candidate_wins_both() {
        let diff = compare(&design(2.0), &design(1.5)).unwrap();
        // Less load on the same footprint: safer AND cheaper
        assert!(diff.safety_diff > 0.0);
        assert!(diff.cost_diff_pct < 0.0);
        assert!(diff.recommendation.contains("prefer the candidate"));
    }

    #[test]
    fn test_heavier_candidate_loses() {
        let diff = compare(&design(2.0), &design(3.0)).unwrap();
        assert!(diff.safety_diff < 0.0);
        assert!(diff.cost_diff_pct > 0.0);
        assert!(diff.recommendation.contains("Baseline remains preferable"));
    }

    #[test]
    fn test_material_diff_antisymmetric() {
        let a = design(2.0);
        let b = design(1.5);
        let ab = compare(&a, &b).unwrap();
        let ba = compare(&b, &a).unwrap();

        // Absolute diffs flip sign exactly; percent diffs do not, because
        // their denominators differ.
        assert_eq!(ab.material_diff.concrete_m3, -ba.material_diff.concrete_m3);
        assert_eq!(ab.material_diff.steel_t, -ba.material_diff.steel_t);
        assert_eq!(ab.safety_diff, -ba.safety_diff);
    }

    #[test]
    fn test_self_comparison_is_neutral() {
        let a = design(2.0);
        let diff = compare(&a, &a).unwrap();
        assert_eq!(diff.volume_diff_pct, 0.0);
        assert_eq!(diff.cost_diff_pct, 0.0);
        assert_eq!(diff.safety_diff, 0.0);
        assert_eq!(diff.material_diff.concrete_m3, 0.0);
    }

    #[test]
    fn test_zero_volume_rejected() {
        let a = design(2.0);
        let mut b = design(1.5);
        b.volume_m3 = 0.0;
        let err = compare(&a, &b).unwrap_err();
        assert_eq!(err.error_code(), "COMPARISON_FAILED");

        let err = compare(&b, &a).unwrap_err();
        assert_eq!(err.error_code(), "COMPARISON_FAILED");
    }

    #[test]
    fn test_costs_echoed() {
        let diff = compare(&design(2.0), &design(1.5)).unwrap();
        assert!(diff.baseline_total_cost > diff.candidate_total_cost);
        assert!(diff.baseline_total_cost > 0.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let diff = compare(&design(2.0), &design(1.5)).unwrap();
        let json = serde_json::to_string_pretty(&diff).unwrap();
        assert!(json.contains("volume_diff_pct"));

        let roundtrip: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(diff, roundtrip);
    }
}
