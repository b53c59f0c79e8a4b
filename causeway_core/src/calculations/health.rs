//! # Design Health Score
//!
//! Combines safety, economy, environmental, and structural signals from a
//! computed result into one composite 0-100 score with a rating band and
//! per-category recommendations.
//!
//! Each sub-score is a monotone step function of a single driving metric.
//! Economy is the exception: it is an inverted U that rewards "just enough"
//! safety margin and penalizes over-design as well as under-design.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use causeway_core::calculations::health::score;
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
//! let health = score(&result);
//! println!("Overall: {} ({})", health.overall, health.rating.label());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::structural::StructuralResult;

/// Bending moment above which the structural sub-score is docked (kN·m)
const BENDING_MOMENT_LIMIT_KNM: f64 = 1000.0;

/// Deflection above which the structural sub-score is docked (mm)
const DEFLECTION_LIMIT_MM: f64 = 50.0;

/// Sub-score threshold below which a recommendation is emitted
const RECOMMENDATION_THRESHOLD: f64 = 70.0;

/// Composite rating band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthRating {
    Excellent,
    VeryGood,
    Good,
    Fair,
    NeedsImprovement,
}

impl HealthRating {
    fn from_overall(overall: f64) -> Self {
        if overall >= 90.0 {
            HealthRating::Excellent
        } else if overall >= 80.0 {
            HealthRating::VeryGood
        } else if overall >= 70.0 {
            HealthRating::Good
        } else if overall >= 60.0 {
            HealthRating::Fair
        } else {
            HealthRating::NeedsImprovement
        }
    }

    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            HealthRating::Excellent => "Excellent",
            HealthRating::VeryGood => "Very Good",
            HealthRating::Good => "Good",
            HealthRating::Fair => "Fair",
            HealthRating::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// The four 0-100 sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthSubScores {
    /// Step function of the safety margin (more margin is better)
    pub safety: f64,
    /// Inverted U over the safety margin (optimum at 2.0)
    pub economy: f64,
    /// Step function of volume per meter of crossing (leaner is better)
    pub environmental: f64,
    /// 85 minus penalties for high bending moment and deflection
    pub structural: f64,
}

/// Results from health scoring.
///
/// ## JSON Example
///
/// ```json
/// {
///   "scores": { "safety": 100.0, "economy": 60.0, "environmental": 90.0, "structural": 65.0 },
///   "overall": 79.0,
///   "rating": "Good",
///   "recommendations": [
///     "Economy: the safety margin is far above the requirement; slim the section",
///     "Structural: review span stiffness; bending moment or deflection is high"
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    /// The four sub-scores
    pub scores: HealthSubScores,

    /// Arithmetic mean of the sub-scores, rounded to the nearest integer
    pub overall: f64,

    /// Rating band at 90/80/70/60
    pub rating: HealthRating,

    /// One entry per sub-score below 70
    pub recommendations: Vec<String>,
}

fn safety_score(margin: f64) -> f64 {
    if margin >= 3.5 {
        100.0
    } else if margin >= 3.0 {
        95.0
    } else if margin >= 2.5 {
        85.0
    } else if margin >= 2.0 {
        70.0
    } else if margin >= 1.5 {
        50.0
    } else {
        30.0
    }
}

fn economy_score(margin: f64) -> f64 {
    // Over-design wastes material, under-design risks rework; the optimum
    // is a margin of exactly "enough".
    if margin >= 4.0 {
        60.0
    } else if margin >= 3.5 {
        70.0
    } else if margin >= 3.0 {
        80.0
    } else if margin >= 2.5 {
        90.0
    } else if margin >= 2.0 {
        100.0
    } else if margin >= 1.5 {
        70.0
    } else {
        40.0
    }
}

fn environmental_score(volume_per_m: f64) -> f64 {
    if volume_per_m <= 15.0 {
        100.0
    } else if volume_per_m <= 20.0 {
        90.0
    } else if volume_per_m <= 25.0 {
        80.0
    } else if volume_per_m <= 30.0 {
        70.0
    } else if volume_per_m <= 35.0 {
        60.0
    } else if volume_per_m <= 40.0 {
        50.0
    } else {
        40.0
    }
}

fn structural_score(bending_moment_knm: f64, deflection_mm: f64) -> f64 {
    let mut score: f64 = 85.0;
    if bending_moment_knm > BENDING_MOMENT_LIMIT_KNM {
        score -= 10.0;
    }
    if deflection_mm > DEFLECTION_LIMIT_MM {
        score -= 10.0;
    }
    score.max(50.0)
}

/// Score a computed design's overall health.
///
/// Pure function over the already-computed result; nothing is re-derived
/// from the raw input.
pub fn score(result: &StructuralResult) -> HealthScore {
    let scores = HealthSubScores {
        safety: safety_score(result.safety_margin),
        economy: economy_score(result.safety_margin),
        environmental: environmental_score(result.volume_m3 / result.length_m),
        structural: structural_score(result.bending_moment_knm, result.deflection_mm),
    };

    let overall =
        ((scores.safety + scores.economy + scores.environmental + scores.structural) / 4.0)
            .round();
    let rating = HealthRating::from_overall(overall);

    let mut recommendations = Vec::new();
    if scores.safety < RECOMMENDATION_THRESHOLD {
        recommendations.push(
            "Safety: increase the foundation area or improve bearing conditions \
             to raise the safety margin"
                .to_string(),
        );
    }
    if scores.economy < RECOMMENDATION_THRESHOLD {
        recommendations.push(
            "Economy: the safety margin is far from the optimum; resize the \
             section toward a margin near the required factor"
                .to_string(),
        );
    }
    if scores.environmental < RECOMMENDATION_THRESHOLD {
        recommendations.push(
            "Environmental: reduce material volume per meter of crossing".to_string(),
        );
    }
    if scores.structural < RECOMMENDATION_THRESHOLD {
        recommendations.push(
            "Structural: review span stiffness; bending moment or deflection \
             is high"
                .to_string(),
        );
    }

    HealthScore {
        scores,
        overall,
        rating,
        recommendations,
    }
}
