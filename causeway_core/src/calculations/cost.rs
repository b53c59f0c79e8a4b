//! # Cost Estimation
//!
//! Prices the material takeoff from a structural result with a configurable
//! rate table and a regional multiplier.
//!
//! ## Assumptions
//!
//! - The regional multiplier scales the material subtotal only
//! - Labor is 35% of the region-adjusted material subtotal
//! - Excavation volume is not part of the structural takeoff; it is
//!   approximated as a fraction of the concrete volume (25% by default,
//!   configurable via [`RateTable::excavation_fraction`])
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use causeway_core::calculations::cost::{estimate, Region};
//! use causeway_core::calculations::structural::MaterialQuantities;
//!
//! let materials = MaterialQuantities {
//!     concrete_m3: 1600.0,
//!     steel_t: 128.0,
//!     formwork_m2: 1232.0,
//! };
//!
//! let cost = estimate(&materials, Region::Standard).unwrap();
//! println!("Total: {:.0}", cost.total);
//! println!("Labor share: {:.1}%", cost.percentages.labor_pct);
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::round2;
use crate::calculations::structural::MaterialQuantities;
use crate::errors::{CalcError, CalcResult};

/// Labor cost as a fraction of the region-adjusted material subtotal
const LABOR_FRACTION: f64 = 0.35;

/// Pricing region.
///
/// Parsing is strict: an unrecognized region string is an error, not a
/// silent default. (The soil-type lookup in the structural calculator is
/// the lenient half of this asymmetry.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Baseline pricing (multiplier 1.00)
    Standard,
    /// Urban congestion premium (multiplier 1.20)
    Urban,
    /// Rural discount (multiplier 0.85)
    Rural,
}

impl Region {
    /// Cost multiplier applied to the material subtotal
    pub fn multiplier(&self) -> f64 {
        match self {
            Region::Standard => 1.00,
            Region::Urban => 1.20,
            Region::Rural => 0.85,
        }
    }

    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Region::Standard => "Standard",
            Region::Urban => "Urban",
            Region::Rural => "Rural",
        }
    }
}

impl FromStr for Region {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Region::Standard),
            "urban" => Ok(Region::Urban),
            "rural" => Ok(Region::Rural),
            _ => Err(CalcError::unknown_region(s)),
        }
    }
}

/// Unit rates for pricing the material takeoff.
///
/// Rates are currency-per-unit and deliberately not hard-coded into the
/// estimator; callers with local pricing pass their own table to
/// [`estimate_with_rates`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "concrete_per_m3": 6500.0,
///   "steel_per_t": 65000.0,
///   "formwork_per_m2": 450.0,
///   "excavation_per_m3": 250.0,
///   "excavation_fraction": 0.25
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Placed structural concrete (per m³)
    pub concrete_per_m3: f64,

    /// Reinforcing steel, supplied and fixed (per t)
    pub steel_per_t: f64,

    /// Formwork, erected and struck (per m²)
    pub formwork_per_m2: f64,

    /// Bed excavation and disposal (per m³)
    pub excavation_per_m3: f64,

    /// Excavation volume as a fraction of concrete volume
    pub excavation_fraction: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable {
            concrete_per_m3: 6500.0,
            steel_per_t: 65_000.0,
            formwork_per_m2: 450.0,
            excavation_per_m3: 250.0,
            excavation_fraction: 0.25,
        }
    }
}

static DEFAULT_RATES: Lazy<RateTable> = Lazy::new(RateTable::default);

/// Shared default rate table used by [`estimate`] and the comparator.
pub fn default_rates() -> &'static RateTable {
    &DEFAULT_RATES
}

/// Region-adjusted cost of each material component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Concrete cost
    pub concrete: f64,
    /// Steel cost
    pub steel: f64,
    /// Formwork cost
    pub formwork: f64,
    /// Excavation cost
    pub excavation: f64,
}

/// Share of the total cost per component, in percent.
///
/// Rounded for display; the shares sum to 100 within rounding tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPercentages {
    pub concrete_pct: f64,
    pub steel_pct: f64,
    pub formwork_pct: f64,
    pub excavation_pct: f64,
    pub labor_pct: f64,
}

/// Results from cost estimation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "region": "standard",
///   "multiplier": 1.0,
///   "materials": {
///     "concrete": 10400000.0,
///     "steel": 8320000.0,
///     "formwork": 554400.0,
///     "excavation": 100000.0
///   },
///   "material_subtotal": 19374400.0,
///   "labor": 6781040.0,
///   "total": 26155440.0,
///   "percentages": {
///     "concrete_pct": 39.76,
///     "steel_pct": 31.81,
///     "formwork_pct": 2.12,
///     "excavation_pct": 0.38,
///     "labor_pct": 25.93
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Pricing region used
    pub region: Region,

    /// Multiplier that was applied to the material subtotal
    pub multiplier: f64,

    /// Region-adjusted cost per material component
    pub materials: CostBreakdown,

    /// Region-adjusted material subtotal
    pub material_subtotal: f64,

    /// Labor = 35% of the adjusted material subtotal
    pub labor: f64,

    /// Total = materials + labor
    pub total: f64,

    /// Component shares of the total
    pub percentages: CostPercentages,
}

/// Estimate construction cost with the shared default rate table.
///
/// # Arguments
///
/// * `materials` - Material takeoff from the structural calculation
/// * `region` - Pricing region (parse strings with `Region::from_str`)
///
/// # Returns
///
/// * `Ok(CostEstimate)` - Full breakdown with percentages
/// * `Err(CalcError)` - If a material quantity is negative
pub fn estimate(materials: &MaterialQuantities, region: Region) -> CalcResult<CostEstimate> {
    estimate_with_rates(materials, region, default_rates())
}

/// Estimate construction cost with an explicit rate table.
pub fn estimate_with_rates(
    materials: &MaterialQuantities,
    region: Region,
    rates: &RateTable,
) -> CalcResult<CostEstimate> {
    validate_quantities(materials)?;

    let multiplier = region.multiplier();
    let excavation_m3 = materials.concrete_m3 * rates.excavation_fraction;

    // The multiplier scales materials only; labor is computed from the
    // already-adjusted subtotal.
    let concrete = materials.concrete_m3 * rates.concrete_per_m3 * multiplier;
    let steel = materials.steel_t * rates.steel_per_t * multiplier;
    let formwork = materials.formwork_m2 * rates.formwork_per_m2 * multiplier;
    let excavation = excavation_m3 * rates.excavation_per_m3 * multiplier;

    let material_subtotal = concrete + steel + formwork + excavation;
    let labor = material_subtotal * LABOR_FRACTION;
    let total = material_subtotal + labor;

    let pct = |component: f64| round2(component / total * 100.0);

    Ok(CostEstimate {
        region,
        multiplier,
        materials: CostBreakdown {
            concrete: round2(concrete),
            steel: round2(steel),
            formwork: round2(formwork),
            excavation: round2(excavation),
        },
        material_subtotal: round2(material_subtotal),
        labor: round2(labor),
        total: round2(total),
        percentages: CostPercentages {
            concrete_pct: pct(concrete),
            steel_pct: pct(steel),
            formwork_pct: pct(formwork),
            excavation_pct: pct(excavation),
            labor_pct: pct(labor),
        },
    })
}

fn validate_quantities(materials: &MaterialQuantities) -> CalcResult<()> {
    let checks = [
        ("concrete_m3", materials.concrete_m3),
        ("steel_t", materials.steel_t),
        ("formwork_m2", materials.formwork_m2),
    ];
    for (field, value) in checks {
        if value < 0.0 {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Material quantity cannot be negative",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_materials() -> MaterialQuantities {
        MaterialQuantities {
            concrete_m3: 1600.0,
            steel_t: 128.0,
            formwork_m2: 1232.0,
        }
    }

    #[test]
    fn test_standard_region_totals() {
        let cost = estimate(&reference_materials(), Region::Standard).unwrap();

        // concrete 1600*6500 + steel 128*65000 + formwork 1232*450
        // + excavation 400*250 = 19,374,400
        assert!((cost.material_subtotal - 19_374_400.0).abs() < 1.0);
        assert!((cost.labor - 6_781_040.0).abs() < 1.0);
        assert!((cost.total - 26_155_440.0).abs() < 1.0);
    }

    #[test]
    fn test_multiplier_scales_materials_not_labor_rate() {
        let standard = estimate(&reference_materials(), Region::Standard).unwrap();
        let urban = estimate(&reference_materials(), Region::Urban).unwrap();

        // Materials scale by 1.2, and labor follows the adjusted subtotal,
        // so the whole estimate scales by 1.2.
        assert!((urban.material_subtotal - standard.material_subtotal * 1.2).abs() < 1.0);
        assert!((urban.labor - standard.labor * 1.2).abs() < 1.0);
        assert!((urban.total - standard.total * 1.2).abs() < 1.0);
    }

    #[test]
    fn test_rural_discount() {
        let standard = estimate(&reference_materials(), Region::Standard).unwrap();
        let rural = estimate(&reference_materials(), Region::Rural).unwrap();
        assert!((rural.total - standard.total * 0.85).abs() < 1.0);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        for region in [Region::Standard, Region::Urban, Region::Rural] {
            let cost = estimate(&reference_materials(), region).unwrap();
            let p = cost.percentages;
            let sum =
                p.concrete_pct + p.steel_pct + p.formwork_pct + p.excavation_pct + p.labor_pct;
            assert!((sum - 100.0).abs() < 0.05, "sum was {sum}");
        }
    }

    #[test]
    fn test_labor_share_is_constant() {
        // labor / total = 0.35 / 1.35 regardless of region
        let cost = estimate(&reference_materials(), Region::Urban).unwrap();
        assert!((cost.percentages.labor_pct - 25.93).abs() < 0.01);
    }

    #[test]
    fn test_unknown_region_rejected() {
        let err = "metro".parse::<Region>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_REGION");
    }

    #[test]
    fn test_region_parse() {
        assert_eq!("standard".parse::<Region>().unwrap(), Region::Standard);
        assert_eq!("Urban".parse::<Region>().unwrap(), Region::Urban);
        assert_eq!(" RURAL ".parse::<Region>().unwrap(), Region::Rural);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut materials = reference_materials();
        materials.steel_t = -1.0;
        assert!(estimate(&materials, Region::Standard).is_err());
    }

    #[test]
    fn test_custom_rate_table() {
        let rates = RateTable {
            excavation_fraction: 0.0,
            ..RateTable::default()
        };
        let cost =
            estimate_with_rates(&reference_materials(), Region::Standard, &rates).unwrap();
        assert_eq!(cost.materials.excavation, 0.0);
        assert!((cost.material_subtotal - 19_274_400.0).abs() < 1.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let cost = estimate(&reference_materials(), Region::Rural).unwrap();
        let json = serde_json::to_string_pretty(&cost).unwrap();
        assert!(json.contains("\"rural\""));

        let roundtrip: CostEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(cost, roundtrip);
    }
}
