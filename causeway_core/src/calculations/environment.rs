//! # Environmental Assessment
//!
//! Derives embodied carbon and hydraulic-flow impact from a computed
//! structural result, bands the combined impact into a rating, and emits
//! tier-gated mitigation recommendations.
//!
//! ## Assumptions
//!
//! - Embodied carbon factors: 410 kg CO₂e per m³ of concrete, 1850 kg CO₂e
//!   per t of steel
//! - Flow obstruction approximates the channel as a rectangle of an assumed
//!   width (100 m by default) at the design water depth; callers that model
//!   the channel pass the real width to [`assess_with_channel`]
//! - Scour risk is a bed-material factor applied to the water depth, not a
//!   hydraulic model
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use causeway_core::calculations::environment::assess;
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
//! let assessment = assess(&result);
//! println!("Total CO₂e: {:.0} kg", assessment.carbon.total_kg);
//! println!("Rating: {}", assessment.rating.label());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::round2;
use crate::calculations::structural::StructuralResult;
use crate::errors::{CalcError, CalcResult};

/// Embodied carbon of placed concrete (kg CO₂e per m³)
const CONCRETE_CARBON_KG_M3: f64 = 410.0;

/// Embodied carbon of reinforcing steel (kg CO₂e per t)
const STEEL_CARBON_KG_T: f64 = 1850.0;

/// Assumed channel width when the caller does not model the channel (m)
const DEFAULT_CHANNEL_WIDTH_M: f64 = 100.0;

/// Carbon normalization: kg CO₂e per m² of deck that maps to one point of
/// the 0-100 carbon sub-score
const CARBON_PER_M2_PER_POINT: f64 = 20.0;

/// Weight of the carbon sub-score in the combined impact score
const CARBON_WEIGHT: f64 = 0.6;

/// Weight of the flow-obstruction sub-score in the combined impact score
const FLOW_WEIGHT: f64 = 0.4;

/// Scour factor applied to the water depth, by bed material.
fn scour_factor(soil_type: &str) -> f64 {
    match soil_type.trim().to_ascii_lowercase().as_str() {
        "soft" => 0.6,
        "medium" => 0.4,
        "hard" => 0.2,
        _ => 0.45,
    }
}

/// Environmental rating band. Lower impact score is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnvRating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl EnvRating {
    /// Band an impact score (0-100, lower is better)
    fn from_impact_score(score: f64) -> Self {
        if score < 25.0 {
            EnvRating::Excellent
        } else if score < 45.0 {
            EnvRating::Good
        } else if score < 65.0 {
            EnvRating::Fair
        } else {
            EnvRating::NeedsImprovement
        }
    }

    /// Band a flow-obstruction percentage on its own
    fn from_obstruction_pct(pct: f64) -> Self {
        if pct < 5.0 {
            EnvRating::Excellent
        } else if pct < 15.0 {
            EnvRating::Good
        } else if pct < 30.0 {
            EnvRating::Fair
        } else {
            EnvRating::NeedsImprovement
        }
    }

    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            EnvRating::Excellent => "Excellent",
            EnvRating::Good => "Good",
            EnvRating::Fair => "Fair",
            EnvRating::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Embodied carbon breakdown (kg CO₂e).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonFootprint {
    /// From concrete: volume x 410 kg/m³
    pub concrete_kg: f64,
    /// From steel: tonnage x 1850 kg/t
    pub steel_kg: f64,
    /// Sum of the above
    pub total_kg: f64,
}

/// Hydraulic impact of the causeway on the crossing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterImpact {
    /// Obstructed share of the channel cross-section, percent (clamped
    /// to 100; zero at a dry site)
    pub flow_obstruction_pct: f64,

    /// Estimated local scour depth at the toe (m)
    pub scour_risk_m: f64,

    /// Rating of the hydraulic impact alone
    pub rating: EnvRating,
}

/// Results from the environmental assessment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "carbon": { "concrete_kg": 656000.0, "steel_kg": 236800.0, "total_kg": 892800.0 },
///   "water": { "flow_obstruction_pct": 10.67, "scour_risk_m": 0.6, "rating": "Good" },
///   "impact_score": 37.75,
///   "rating": "Good",
///   "recommendations": [
///     "Consider recycled aggregates and supplementary cementitious materials"
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalAssessment {
    /// Embodied carbon breakdown
    pub carbon: CarbonFootprint,

    /// Hydraulic impact
    pub water: WaterImpact,

    /// Combined impact score (0-100, lower is better):
    /// 0.6 x normalized carbon + 0.4 x flow obstruction
    pub impact_score: f64,

    /// Overall rating band
    pub rating: EnvRating,

    /// Tier-gated mitigation recommendations
    pub recommendations: Vec<String>,
}

/// Assess environmental impact with the default assumed channel width.
pub fn assess(result: &StructuralResult) -> EnvironmentalAssessment {
    // Default width is a positive constant, so this cannot fail.
    assess_impl(result, DEFAULT_CHANNEL_WIDTH_M)
}

/// Assess environmental impact against an explicitly modeled channel width.
pub fn assess_with_channel(
    result: &StructuralResult,
    channel_width_m: f64,
) -> CalcResult<EnvironmentalAssessment> {
    if channel_width_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "channel_width_m",
            channel_width_m.to_string(),
            "Channel width must be positive",
        ));
    }
    Ok(assess_impl(result, channel_width_m))
}

fn assess_impl(result: &StructuralResult, channel_width_m: f64) -> EnvironmentalAssessment {
    let concrete_kg = result.materials.concrete_m3 * CONCRETE_CARBON_KG_M3;
    let steel_kg = result.materials.steel_t * STEEL_CARBON_KG_T;
    let total_kg = concrete_kg + steel_kg;

    // Obstructed share of the channel cross-section, approximated as
    // (width x height) / (channel width x water depth). A dry site
    // obstructs no flow.
    let flow_obstruction_pct = if result.water_depth_m > 0.0 {
        let blocked = result.width_m * result.height_m;
        let channel = channel_width_m * result.water_depth_m;
        (blocked / channel * 100.0).min(100.0)
    } else {
        0.0
    };

    let scour_risk_m = result.water_depth_m * scour_factor(&result.soil_type);

    let carbon_per_m2 = total_kg / result.surface_area_m2;
    let carbon_score = (carbon_per_m2 / CARBON_PER_M2_PER_POINT).min(100.0);
    let impact_score = CARBON_WEIGHT * carbon_score + FLOW_WEIGHT * flow_obstruction_pct;

    let rating = EnvRating::from_impact_score(impact_score);
    let water_rating = EnvRating::from_obstruction_pct(flow_obstruction_pct);

    let mut recommendations = Vec::new();
    if rating > EnvRating::Excellent {
        recommendations.push(
            "Consider recycled aggregates and supplementary cementitious materials \
             to cut embodied carbon"
                .to_string(),
        );
    }
    if rating > EnvRating::Good {
        recommendations.push(
            "Substitute a portion of cement with fly ash or slag".to_string(),
        );
    }
    if rating > EnvRating::Good || flow_obstruction_pct > 20.0 {
        recommendations.push(
            "Add flow openings (culverts) through the causeway to reduce \
             channel obstruction"
                .to_string(),
        );
    }
    if rating == EnvRating::NeedsImprovement {
        recommendations.push(
            "Impact is disproportionate to the crossing; a fundamental redesign \
             of the footprint is recommended"
                .to_string(),
        );
    }

    EnvironmentalAssessment {
        carbon: CarbonFootprint {
            concrete_kg: round2(concrete_kg),
            steel_kg: round2(steel_kg),
            total_kg: round2(total_kg),
        },
        water: WaterImpact {
            flow_obstruction_pct: round2(flow_obstruction_pct),
            scour_risk_m: round2(scour_risk_m),
            rating: water_rating,
        },
        impact_score: round2(impact_score),
        rating,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::structural::{calculate, DesignInput};

    fn reference_result() -> StructuralResult {
        calculate(&DesignInput {
            length_m: 100.0,
            width_m: 8.0,
            height_m: 2.0,
            water_depth_m: 1.5,
            soil_type: "medium".to_string(),
            load_class: "vehicular".to_string(),
            safety_factor: 2.5,
        })
        .unwrap()
    }

    #[test]
    fn test_carbon_footprint() {
        let assessment = assess(&reference_result());
        assert_eq!(assessment.carbon.concrete_kg, 656_000.0);
        assert_eq!(assessment.carbon.steel_kg, 236_800.0);
        assert_eq!(assessment.carbon.total_kg, 892_800.0);
    }

    #[test]
    fn test_flow_obstruction() {
        let assessment = assess(&reference_result());
        // (8 x 2) / (100 x 1.5) = 10.67%
        assert!((assessment.water.flow_obstruction_pct - 10.67).abs() < 0.01);
    }

    #[test]
    fn test_scour_risk_by_soil() {
        let assessment = assess(&reference_result());
        // medium soil: 1.5 x 0.4
        assert!((assessment.water.scour_risk_m - 0.6).abs() < 0.001);
    }

    #[test]
    fn test_dry_site_has_no_flow_impact() {
        let mut result = reference_result();
        result.water_depth_m = 0.0;
        let assessment = assess(&result);
        assert_eq!(assessment.water.flow_obstruction_pct, 0.0);
        assert_eq!(assessment.water.scour_risk_m, 0.0);
        assert_eq!(assessment.water.rating, EnvRating::Excellent);
    }

    #[test]
    fn test_narrow_channel_raises_obstruction() {
        let result = reference_result();
        let wide = assess_with_channel(&result, 200.0).unwrap();
        let narrow = assess_with_channel(&result, 20.0).unwrap();
        assert!(narrow.water.flow_obstruction_pct > wide.water.flow_obstruction_pct);
    }

    #[test]
    fn test_obstruction_clamped_to_100() {
        let result = reference_result();
        let assessment = assess_with_channel(&result, 1.0).unwrap();
        assert_eq!(assessment.water.flow_obstruction_pct, 100.0);
    }

    #[test]
    fn test_invalid_channel_width() {
        let result = reference_result();
        assert!(assess_with_channel(&result, 0.0).is_err());
    }

    #[test]
    fn test_reference_rating_and_recommendations() {
        let assessment = assess(&reference_result());
        // carbon/m² = 892800/800 = 1116 -> capped sub-score 55.8
        // score = 0.6 x 55.8 + 0.4 x 10.67 = 37.75 -> Good
        assert!((assessment.impact_score - 37.75).abs() < 0.05);
        assert_eq!(assessment.rating, EnvRating::Good);
        // Below Excellent: the recycled-aggregates entry must appear
        assert!(assessment
            .recommendations
            .iter()
            .any(|r| r.contains("recycled aggregates")));
    }

    #[test]
    fn test_excellent_design_needs_no_mitigation() {
        // A slim, low causeway in a wide channel
        let result = calculate(&DesignInput {
            length_m: 50.0,
            width_m: 3.0,
            height_m: 0.5,
            water_depth_m: 0.3,
            soil_type: "hard".to_string(),
            load_class: "pedestrian".to_string(),
            safety_factor: 2.5,
        })
        .unwrap();
        let assessment = assess_with_channel(&result, 500.0).unwrap();
        assert_eq!(assessment.rating, EnvRating::Excellent);
        assert!(assessment.recommendations.is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let assessment = assess(&reference_result());
        let json = serde_json::to_string_pretty(&assessment).unwrap();
        assert!(json.contains("flow_obstruction_pct"));

        let roundtrip: EnvironmentalAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(assessment, roundtrip);
    }
}
