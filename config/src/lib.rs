//! # Config Crate
//!
//! Centralized tolerances for the road mesh pipeline. Welding epsilons,
//! degeneracy thresholds and extrusion clamps are defined here so the
//! geometry crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{WeldConfig, POSITION_EPSILON};
//!
//! let weld = WeldConfig::default();
//! assert_eq!(weld.position_epsilon, POSITION_EPSILON);
//! assert!(weld.normal_cos_threshold() > 0.99);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Plain `f64` values, no math crate required
//! - **Validated**: Runtime-tunable values go through checked constructors

pub mod constants;

#[cfg(test)]
mod tests;
