//! # beam_core - Continuous Beam Analysis Engine
//!
//! `beam_core` solves multi-span beams (simple, fixed, cantilever, overhang
//! and continuous configurations) for shear, moment, deflection and support
//! reactions, with a clean, JSON-serializable API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: a solve is a pure function of the model and section
//! - **JSON-First**: models, results and errors implement Serialize/Deserialize
//! - **Exact Queries**: point results come from the analytical solution, not
//!   from reading values off the sampled diagrams
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::analysis::{result_at, solve};
//! use beam_core::materials::{section_properties, Axis};
//! use beam_core::model::{BeamModel, Load};
//!
//! // 6 m simple beam, 10 kN at midspan, H-300x150 about the strong axis
//! let model = BeamModel::simple_span(6.0).with_load(Load::point(10.0, 3.0));
//! let section = section_properties("H-300x150x6.5x9", Axis::Strong).unwrap();
//!
//! let result = solve(&model, &section).unwrap();
//! assert!((result.bounds.max_m_pos - 15.0).abs() < 1e-6);
//!
//! let mid = result_at(3.0, &result, &section, None);
//! assert!((mid.m - 15.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Beam models: spans, supports, loads, section properties
//! - [`analysis`] - The solver pipeline and point queries
//! - [`materials`] - JIS steel catalogue and concrete grades
//! - [`units`] - Unit conversion factors and named tolerances
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod errors;
pub mod materials;
pub mod model;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{result_at, solve, PointResult, SolveResult};
pub use errors::{EngineError, EngineResult};
pub use model::{BeamModel, Load, LoadKind, SectionProperties, SupportType};
