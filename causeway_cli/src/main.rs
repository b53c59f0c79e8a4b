//! # Causeway CLI Application
//!
//! Terminal front-end for the causeway feasibility engine. Prompts for the
//! design parameters, runs the full calculation fan-out (structural, cost,
//! optimization, environment, health), and prints a formatted report plus
//! the machine-readable JSON result.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use causeway_core::calculations::cost::{estimate, Region};
use causeway_core::calculations::environment::assess;
use causeway_core::calculations::health::score;
use causeway_core::calculations::optimization::analyze;
use causeway_core::calculations::structural::{calculate, DesignInput};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Causeway CLI - Submersible Causeway Feasibility Calculator");
    println!("==========================================================");
    println!();

    let length_m = prompt_f64("Causeway length (m) [100.0]: ", 100.0);
    let width_m = prompt_f64("Deck width (m) [8.0]: ", 8.0);
    let height_m = prompt_f64("Structure height (m) [2.0]: ", 2.0);
    let water_depth_m = prompt_f64("Water depth (m) [1.5]: ", 1.5);
    let soil_type = prompt_string("Soil type (soft/medium/hard) [medium]: ", "medium");
    let region_input = prompt_string("Cost region (standard/urban/rural) [standard]: ", "standard");
    let safety_factor = prompt_f64("Required safety factor [2.5]: ", 2.5);

    let region = match Region::from_str(&region_input) {
        Ok(region) => region,
        Err(e) => {
            println!("{e}; using standard pricing");
            Region::Standard
        }
    };

    let input = DesignInput {
        length_m,
        width_m,
        height_m,
        water_depth_m,
        soil_type,
        load_class: "vehicular".to_string(),
        safety_factor,
    };

    let result = match calculate(&input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!();
            eprintln!("Calculation error: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  STRUCTURAL FEASIBILITY");
    println!("═══════════════════════════════════════");
    println!();
    println!("Geometry:");
    println!("  Volume:       {:.0} m³", result.volume_m3);
    println!("  Deck area:    {:.0} m²", result.surface_area_m2);
    println!("  Perimeter:    {:.0} m", result.perimeter_m);
    println!();
    println!("Loads:");
    println!("  Dead load:    {:.0} kN", result.dead_load_kn);
    println!("  Live load:    {:.0} kN", result.live_load_kn);
    println!("  Total:        {:.0} kN", result.total_load_kn);
    println!();
    println!("Foundation:");
    println!("  Pressure:     {:.2} kPa", result.foundation_pressure_kpa);
    println!("  Bearing:      {:.0} kPa", result.soil_bearing_capacity_kpa);
    println!("  Margin:       {:.2} (required {:.2})", result.safety_margin, result.safety_factor);
    println!();
    println!("Recommendation:");
    println!("  Safe:         {}", if result.recommendation.is_safe { "yes" } else { "NO" });
    println!("  Foundation:   {}", result.recommendation.foundation_type.label());
    println!("  Construction: {}", result.recommendation.construction_method.label());

    match estimate(&result.materials, region) {
        Ok(cost) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  COST ESTIMATE ({})", cost.region.label());
            println!("═══════════════════════════════════════");
            println!();
            println!("  Concrete:     {:>14.0}", cost.materials.concrete);
            println!("  Steel:        {:>14.0}", cost.materials.steel);
            println!("  Formwork:     {:>14.0}", cost.materials.formwork);
            println!("  Excavation:   {:>14.0}", cost.materials.excavation);
            println!("  Labor:        {:>14.0}  ({:.1}%)", cost.labor, cost.percentages.labor_pct);
            println!("  ─────────────────────────────");
            println!("  Total:        {:>14.0}", cost.total);
        }
        Err(e) => eprintln!("Cost estimate failed: {}", e),
    }

    let report = analyze(&result);
    println!();
    println!("═══════════════════════════════════════");
    println!("  OPTIMIZATION");
    println!("═══════════════════════════════════════");
    println!();
    println!("  {}", report.summary);
    for suggestion in &report.suggestions {
        println!();
        println!("  - {}", suggestion.text);
        println!("    savings: {}", suggestion.potential_savings);
    }

    let environment = assess(&result);
    println!();
    println!("═══════════════════════════════════════");
    println!("  ENVIRONMENT");
    println!("═══════════════════════════════════════");
    println!();
    println!("  CO₂e total:   {:.0} kg", environment.carbon.total_kg);
    println!("  Obstruction:  {:.1}%", environment.water.flow_obstruction_pct);
    println!("  Scour risk:   {:.2} m", environment.water.scour_risk_m);
    println!("  Rating:       {}", environment.rating.label());
    for recommendation in &environment.recommendations {
        println!("  - {}", recommendation);
    }

    let health = score(&result);
    println!();
    println!("═══════════════════════════════════════");
    println!("  HEALTH SCORE");
    println!("═══════════════════════════════════════");
    println!();
    println!("  Safety:        {:>3.0}", health.scores.safety);
    println!("  Economy:       {:>3.0}", health.scores.economy);
    println!("  Environmental: {:>3.0}", health.scores.environmental);
    println!("  Structural:    {:>3.0}", health.scores.structural);
    println!("  ─────────────────");
    println!("  Overall:       {:>3.0}  ({})", health.overall, health.rating.label());
    for recommendation in &health.recommendations {
        println!("  - {}", recommendation);
    }

    println!();
    println!("Full result (JSON):");
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Serialization failed: {}", e),
    }
}
