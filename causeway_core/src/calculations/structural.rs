//! # Structural Feasibility Calculation
//!
//! Turns raw causeway design parameters into physical quantities: volume,
//! dead/live loads, foundation pressure, safety margin, and material
//! quantities, plus a foundation/construction recommendation.
//!
//! ## Assumptions
//!
//! - Solid rectangular concrete causeway section (length x width x height)
//! - Uniform live load of 5 kN/m² over the deck
//! - Foundation footprint spread 20% beyond the deck plan area
//! - Span quantities (moment, deflection) use a uniform line load over the
//!   full length and the gross uncracked section
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
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
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("Volume: {:.0} m³", result.volume_m3);
//! println!("Safety margin: {:.2}", result.safety_margin);
//! println!("Safe: {}", result.recommendation.is_safe);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::round2;
use crate::errors::{CalcError, CalcResult};

/// Concrete density for dead load (t/m³)
const CONCRETE_DENSITY_T_M3: f64 = 2.4;

/// Uniform live load on the deck (kN/m²)
const LIVE_LOAD_KPA: f64 = 5.0;

/// Foundation footprint spread beyond the deck plan area
const FOUNDATION_SPREAD_FACTOR: f64 = 1.2;

/// Reinforcing steel per m³ of concrete (t/m³)
const STEEL_RATE_T_PER_M3: f64 = 0.08;

/// Foundation pressure above which piles are recommended (kPa)
const PILE_PRESSURE_THRESHOLD_KPA: f64 = 100.0;

/// Water depth above which cofferdam construction is recommended (m)
const COFFERDAM_DEPTH_M: f64 = 2.0;

/// Elastic modulus of structural concrete (kPa)
const CONCRETE_E_KPA: f64 = 3.0e7;

/// Bearing capacity assumed for unrecognized soil types (kPa)
const DEFAULT_BEARING_KPA: f64 = 100.0;

/// Allowable soil bearing capacity by soil type (kPa).
///
/// Lookup is case-insensitive. Unrecognized soil types fall back to
/// [`DEFAULT_BEARING_KPA`] rather than failing - a deliberate lenient
/// policy carried over from field practice where soil descriptions are
/// free-form. Note the asymmetry with the cost estimator, which rejects
/// unknown regions outright.
pub fn soil_bearing_capacity_kpa(soil_type: &str) -> f64 {
    match soil_type.trim().to_ascii_lowercase().as_str() {
        "soft" => 50.0,
        "medium" => 150.0,
        "hard" => 300.0,
        _ => DEFAULT_BEARING_KPA,
    }
}

fn default_safety_factor() -> f64 {
    2.5
}

/// Input parameters for a submersible causeway design.
///
/// All dimensions are in meters. `load_class` is a category tag used only
/// for labeling and reporting; it does not enter any formula.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_m": 100.0,
///   "width_m": 8.0,
///   "height_m": 2.0,
///   "water_depth_m": 1.5,
///   "soil_type": "medium",
///   "load_class": "vehicular",
///   "safety_factor": 2.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// Causeway length along the crossing (m)
    pub length_m: f64,

    /// Deck width (m)
    pub width_m: f64,

    /// Structure height from bed to deck (m)
    pub height_m: f64,

    /// Design water depth at the crossing (m, may be 0 for a dry site)
    pub water_depth_m: f64,

    /// Bed soil description: "soft", "medium", or "hard"
    ///
    /// Unrecognized values fall back to a default bearing capacity of
    /// 100 kPa (see [`soil_bearing_capacity_kpa`]).
    pub soil_type: String,

    /// Traffic/load category tag (labeling only, not used in formulas)
    pub load_class: String,

    /// Required safety factor the margin is checked against (default 2.5)
    #[serde(default = "default_safety_factor")]
    pub safety_factor: f64,
}

impl DesignInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.width_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_m",
                self.width_m.to_string(),
                "Width must be positive",
            ));
        }
        if self.height_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_m",
                self.height_m.to_string(),
                "Height must be positive",
            ));
        }
        if self.water_depth_m < 0.0 {
            return Err(CalcError::invalid_input(
                "water_depth_m",
                self.water_depth_m.to_string(),
                "Water depth cannot be negative",
            ));
        }
        if self.safety_factor <= 0.0 {
            return Err(CalcError::invalid_input(
                "safety_factor",
                self.safety_factor.to_string(),
                "Safety factor must be positive",
            ));
        }
        Ok(())
    }

    /// Concrete volume V = L x W x H (m³)
    pub fn volume_m3(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }

    /// Deck plan area A = L x W (m²)
    pub fn surface_area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// Deck perimeter P = 2(L + W) (m)
    pub fn perimeter_m(&self) -> f64 {
        2.0 * (self.length_m + self.width_m)
    }
}

/// Recommended foundation system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoundationType {
    /// Driven or bored piles (high foundation pressure)
    Pile,
    /// Spread footing on prepared bed
    Spread,
}

impl FoundationType {
    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            FoundationType::Pile => "Pile Foundation",
            FoundationType::Spread => "Spread Footing",
        }
    }
}

/// Recommended construction method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionMethod {
    /// Dewatered cofferdam (deep water)
    Cofferdam,
    /// Direct placement at shallow depth
    Direct,
}

impl ConstructionMethod {
    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            ConstructionMethod::Cofferdam => "Cofferdam Method",
            ConstructionMethod::Direct => "Direct Placement",
        }
    }
}

/// Feasibility recommendation derived from the computed quantities.
///
/// ## JSON Example
///
/// ```json
/// {
///   "is_safe": true,
///   "foundation_type": "Spread",
///   "construction_method": "Direct"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// True when safety_margin >= the caller's safety_factor
    pub is_safe: bool,

    /// Pile when foundation pressure exceeds 100 kPa, else Spread
    pub foundation_type: FoundationType,

    /// Cofferdam when water depth exceeds 2 m, else Direct
    pub construction_method: ConstructionMethod,
}

/// Material quantities for costing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "concrete_m3": 1600.0,
///   "steel_t": 128.0,
///   "formwork_m2": 1232.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantities {
    /// Structural concrete (m³)
    pub concrete_m3: f64,

    /// Reinforcing steel (t)
    pub steel_t: f64,

    /// Formwork contact area: perimeter x height + deck area (m²)
    pub formwork_m2: f64,
}

/// Results from the structural feasibility calculation.
///
/// Input geometry is echoed so downstream consumers (optimization advisor,
/// environmental assessor, health scorer, comparator) never re-derive
/// quantities from the raw input. All fields are rounded to 2 decimal
/// places for presentation; intermediate math used full precision.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_m": 100.0,
///   "width_m": 8.0,
///   "height_m": 2.0,
///   "water_depth_m": 1.5,
///   "soil_type": "medium",
///   "safety_factor": 2.5,
///   "volume_m3": 1600.0,
///   "surface_area_m2": 800.0,
///   "perimeter_m": 216.0,
///   "dead_load_kn": 3840.0,
///   "live_load_kn": 4000.0,
///   "total_load_kn": 7840.0,
///   "foundation_area_m2": 960.0,
///   "soil_bearing_capacity_kpa": 150.0,
///   "foundation_pressure_kpa": 8.17,
///   "safety_margin": 18.37,
///   "bending_moment_knm": 98000.0,
///   "deflection_mm": 638.02,
///   "materials": { "concrete_m3": 1600.0, "steel_t": 128.0, "formwork_m2": 1232.0 },
///   "recommendation": { "is_safe": true, "foundation_type": "Spread", "construction_method": "Direct" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralResult {
    // === Echoed Input ===
    /// Causeway length (m)
    pub length_m: f64,
    /// Deck width (m)
    pub width_m: f64,
    /// Structure height (m)
    pub height_m: f64,
    /// Design water depth (m)
    pub water_depth_m: f64,
    /// Soil description as supplied
    pub soil_type: String,
    /// Required safety factor the margin was checked against
    pub safety_factor: f64,

    // === Geometry ===
    /// Concrete volume (m³)
    pub volume_m3: f64,
    /// Deck plan area (m²)
    pub surface_area_m2: f64,
    /// Deck perimeter (m)
    pub perimeter_m: f64,

    // === Loads ===
    /// Dead load from self-weight: volume x 2.4 t/m³ (kN nominal)
    pub dead_load_kn: f64,
    /// Live load: deck area x 5 kN/m²
    pub live_load_kn: f64,
    /// Total load = dead + live
    pub total_load_kn: f64,

    // === Foundation ===
    /// Foundation footprint: deck area x 1.2 (m²)
    pub foundation_area_m2: f64,
    /// Allowable soil bearing capacity (kPa)
    pub soil_bearing_capacity_kpa: f64,
    /// Foundation pressure = total load / foundation area (kPa)
    pub foundation_pressure_kpa: f64,
    /// Safety margin = bearing capacity / foundation pressure
    pub safety_margin: f64,

    // === Span Behavior ===
    /// Mid-span bending moment M = wL²/8 for w = total load / length (kN·m)
    pub bending_moment_knm: f64,
    /// Elastic deflection d = 5wL⁴/(384EI), gross section (mm)
    pub deflection_mm: f64,

    // === Materials ===
    /// Material quantities for costing
    pub materials: MaterialQuantities,

    // === Recommendation ===
    /// Feasibility recommendation
    pub recommendation: Recommendation,
}

/// Calculate structural feasibility for a causeway design.
///
/// This is a pure function suitable for LLM invocation; it has no side
/// effects and either fully succeeds or fails validation before any
/// computation.
///
/// # Arguments
///
/// * `input` - Design parameters (geometry, site, safety factor)
///
/// # Returns
///
/// * `Ok(StructuralResult)` - All computed quantities plus recommendation
/// * `Err(CalcError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use causeway_core::calculations::structural::{DesignInput, calculate};
///
/// let input = DesignInput {
///     length_m: 100.0,
///     width_m: 8.0,
///     height_m: 2.0,
///     water_depth_m: 1.5,
///     soil_type: "medium".to_string(),
///     load_class: "vehicular".to_string(),
///     safety_factor: 2.5,
/// };
///
/// let result = calculate(&input).expect("Calculation should succeed");
/// assert_eq!(result.volume_m3, 1600.0);
/// assert!(result.recommendation.is_safe);
/// ```
pub fn calculate(input: &DesignInput) -> CalcResult<StructuralResult> {
    input.validate()?;

    // Geometry
    let volume = input.volume_m3();
    let surface_area = input.surface_area_m2();
    let perimeter = input.perimeter_m();

    // Loads
    let dead_load = volume * CONCRETE_DENSITY_T_M3;
    let live_load = surface_area * LIVE_LOAD_KPA;
    let total_load = dead_load + live_load;

    // Foundation check. foundation_area > 0 follows from the input
    // invariants, so the pressure is always finite.
    let foundation_area = surface_area * FOUNDATION_SPREAD_FACTOR;
    let bearing = soil_bearing_capacity_kpa(&input.soil_type);
    let foundation_pressure = total_load / foundation_area;
    let safety_margin = bearing / foundation_pressure;

    // Span behavior: uniform line load over the full length, simply
    // supported, gross rectangular section.
    // M = wL²/8, d = 5wL⁴/(384EI)
    let line_load = total_load / input.length_m;
    let bending_moment = line_load * input.length_m.powi(2) / 8.0;
    let inertia = input.width_m * input.height_m.powi(3) / 12.0;
    let deflection_m = 5.0 * line_load * input.length_m.powi(4)
        / (384.0 * CONCRETE_E_KPA * inertia);
    let deflection_mm = deflection_m * 1000.0;

    // Material takeoff
    let materials = MaterialQuantities {
        concrete_m3: round2(volume),
        steel_t: round2(volume * STEEL_RATE_T_PER_M3),
        formwork_m2: round2(perimeter * input.height_m + surface_area),
    };

    let recommendation = Recommendation {
        is_safe: safety_margin >= input.safety_factor,
        foundation_type: if foundation_pressure > PILE_PRESSURE_THRESHOLD_KPA {
            FoundationType::Pile
        } else {
            FoundationType::Spread
        },
        construction_method: if input.water_depth_m > COFFERDAM_DEPTH_M {
            ConstructionMethod::Cofferdam
        } else {
            ConstructionMethod::Direct
        },
    };

    Ok(StructuralResult {
        length_m: round2(input.length_m),
        width_m: round2(input.width_m),
        height_m: round2(input.height_m),
        water_depth_m: round2(input.water_depth_m),
        soil_type: input.soil_type.clone(),
        safety_factor: input.safety_factor,
        volume_m3: round2(volume),
        surface_area_m2: round2(surface_area),
        perimeter_m: round2(perimeter),
        dead_load_kn: round2(dead_load),
        live_load_kn: round2(live_load),
        total_load_kn: round2(total_load),
        foundation_area_m2: round2(foundation_area),
        soil_bearing_capacity_kpa: bearing,
        foundation_pressure_kpa: round2(foundation_pressure),
        safety_margin: round2(safety_margin),
        bending_moment_knm: round2(bending_moment),
        deflection_mm: round2(deflection_mm),
        materials,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The worked reference design: 100 m x 8 m x 2 m over 1.5 m of water
    /// on medium soil.
    fn reference_design() -> DesignInput {
        DesignInput {
            length_m: 100.0,
            width_m: 8.0,
            height_m: 2.0,
            water_depth_m: 1.5,
            soil_type: "medium".to_string(),
            load_class: "vehicular".to_string(),
            safety_factor: 2.5,
        }
    }

    #[test]
    fn test_reference_geometry() {
        let result = calculate(&reference_design()).unwrap();
        assert_eq!(result.volume_m3, 1600.0);
        assert_eq!(result.surface_area_m2, 800.0);
        assert_eq!(result.perimeter_m, 216.0);
    }

    #[test]
    fn test_reference_loads() {
        let result = calculate(&reference_design()).unwrap();
        assert_eq!(result.dead_load_kn, 3840.0);
        assert_eq!(result.live_load_kn, 4000.0);
        assert_eq!(result.total_load_kn, 7840.0);
    }

    #[test]
    fn test_reference_foundation() {
        let result = calculate(&reference_design()).unwrap();
        assert_eq!(result.foundation_area_m2, 960.0);
        assert_eq!(result.soil_bearing_capacity_kpa, 150.0);
        // 7840 / 960 = 8.1667 -> 8.17
        assert!((result.foundation_pressure_kpa - 8.17).abs() < 0.01);
        // 150 / 8.1667 = 18.367 -> 18.37 (full precision, then rounded)
        assert!((result.safety_margin - 18.37).abs() < 0.02);
    }

    #[test]
    fn test_reference_recommendation() {
        let result = calculate(&reference_design()).unwrap();
        assert!(result.recommendation.is_safe);
        assert_eq!(result.recommendation.foundation_type, FoundationType::Spread);
        assert_eq!(
            result.recommendation.construction_method,
            ConstructionMethod::Direct
        );
    }

    #[test]
    fn test_reference_materials() {
        let result = calculate(&reference_design()).unwrap();
        assert_eq!(result.materials.concrete_m3, 1600.0);
        assert_eq!(result.materials.steel_t, 128.0);
        // 216 * 2 + 800 = 1232
        assert_eq!(result.materials.formwork_m2, 1232.0);
    }

    #[test]
    fn test_cofferdam_boundary() {
        let mut input = reference_design();
        input.water_depth_m = 2.5;
        let result = calculate(&input).unwrap();
        assert_eq!(
            result.recommendation.construction_method,
            ConstructionMethod::Cofferdam
        );

        // Boundary is strictly greater than 2 m
        input.water_depth_m = 2.0;
        let result = calculate(&input).unwrap();
        assert_eq!(
            result.recommendation.construction_method,
            ConstructionMethod::Direct
        );
    }

    #[test]
    fn test_unknown_soil_defaults() {
        let mut input = reference_design();
        input.soil_type = "unknown_typo".to_string();
        let result = calculate(&input).unwrap();
        // Lenient policy: unrecognized soil falls back to 100 kPa
        assert_eq!(result.soil_bearing_capacity_kpa, 100.0);
    }

    #[test]
    fn test_soil_lookup_case_insensitive() {
        assert_eq!(soil_bearing_capacity_kpa("Soft"), 50.0);
        assert_eq!(soil_bearing_capacity_kpa("MEDIUM"), 150.0);
        assert_eq!(soil_bearing_capacity_kpa(" hard "), 300.0);
    }

    #[test]
    fn test_volume_scales_cubically() {
        let base = calculate(&reference_design()).unwrap();

        let mut scaled = reference_design();
        let k = 2.0;
        scaled.length_m *= k;
        scaled.width_m *= k;
        scaled.height_m *= k;
        let result = calculate(&scaled).unwrap();

        assert!((result.volume_m3 - base.volume_m3 * k.powi(3)).abs() < 1e-6);
        assert!((result.surface_area_m2 - base.surface_area_m2 * k.powi(2)).abs() < 1e-6);
    }

    #[test]
    fn test_safety_margin_decreases_with_load() {
        // Taller structure on the same footprint: more load, same
        // foundation area, so the margin must drop.
        let base = calculate(&reference_design()).unwrap();

        let mut heavier = reference_design();
        heavier.height_m = 3.0;
        let result = calculate(&heavier).unwrap();

        assert!(result.total_load_kn > base.total_load_kn);
        assert!(result.safety_margin < base.safety_margin);
    }

    #[test]
    fn test_is_safe_matches_margin() {
        for height in [0.5, 1.0, 2.0, 4.0, 8.0] {
            let mut input = reference_design();
            input.height_m = height;
            let result = calculate(&input).unwrap();
            assert_eq!(
                result.recommendation.is_safe,
                result.safety_margin >= input.safety_factor
            );
        }
    }

    #[test]
    fn test_span_quantities() {
        let result = calculate(&reference_design()).unwrap();
        // w = 7840/100 = 78.4 kN/m, M = 78.4 * 100² / 8 = 98000 kN·m
        assert!((result.bending_moment_knm - 98_000.0).abs() < 1.0);
        // d = 5 * 78.4 * 100⁴ / (384 * 3e7 * 5.333) = 0.638 m
        assert!((result.deflection_mm - 638.02).abs() < 0.5);
    }

    #[test]
    fn test_invalid_geometry() {
        for field in ["length", "width", "height"] {
            let mut input = reference_design();
            match field {
                "length" => input.length_m = 0.0,
                "width" => input.width_m = -3.0,
                _ => input.height_m = 0.0,
            }
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_zero_water_depth_is_valid() {
        let mut input = reference_design();
        input.water_depth_m = 0.0;
        let result = calculate(&input).unwrap();
        assert_eq!(
            result.recommendation.construction_method,
            ConstructionMethod::Direct
        );
    }

    #[test]
    fn test_negative_water_depth_rejected() {
        let mut input = reference_design();
        input.water_depth_m = -0.5;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_safety_factor_default_on_deserialize() {
        let json = r#"{
            "length_m": 10.0,
            "width_m": 4.0,
            "height_m": 1.0,
            "water_depth_m": 0.5,
            "soil_type": "hard",
            "load_class": "pedestrian"
        }"#;
        let input: DesignInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.safety_factor, 2.5);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = calculate(&reference_design()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("safety_margin"));
        assert!(json.contains("foundation_pressure_kpa"));

        let roundtrip: StructuralResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
