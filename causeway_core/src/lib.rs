//! # causeway_core - Submersible Causeway Feasibility Engine
//!
//! `causeway_core` is the computational heart of Causeway, turning a small
//! set of geometric and site parameters into structural feasibility and
//! cost/quality metrics with a clean, LLM-friendly API. All inputs and
//! outputs are JSON-serializable, making it ideal for integration with AI
//! assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No Re-derivation**: the structural result carries everything the
//!   downstream calculators need
//!
//! ## Quick Start
//!
//! ```rust
//! use causeway_core::calculations::structural::{DesignInput, calculate};
//! use causeway_core::calculations::{analyze, assess, estimate, score, Region};
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
//! // One structural pass feeds every downstream consumer
//! let result = calculate(&input).unwrap();
//! let cost = estimate(&result.materials, Region::Standard).unwrap();
//! let suggestions = analyze(&result);
//! let environment = assess(&result);
//! let health = score(&result);
//!
//! println!("Safe: {}", result.recommendation.is_safe);
//! println!("Total cost: {:.0}", cost.total);
//! println!("Health: {}/100", health.overall);
//! # let _ = (suggestions, environment);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculation-and-decision core (structural,
//!   cost, optimization, environment, health, comparison)
//! - [`session`] - Saved-design store for history and comparison
//! - [`errors`] - Structured error types
//! - [`file_io`] - Session persistence with atomic saves and locking

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_sessions, save_sessions, FileLock};
pub use session::{DesignSession, SessionStore, SessionSummary};
