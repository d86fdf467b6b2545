//! # Beam Analysis
//!
//! Continuous-beam solver: multi-span models with pin/roller/fixed/free
//! supports under point, distributed, trapezoid and moment loads.
//!
//! The pipeline in [`solve`] is:
//!
//! 1. Clip global loads into span-local loads ([`loads`])
//! 2. Solve the support-moment compatibility system ([`system`])
//! 3. Sample shear/moment diagrams by superposition ([`diagram`])
//! 4. Double-integrate for deflection ([`deflection`])
//! 5. Extract extrema, reactions and the envelope ([`extrema`])
//!
//! [`query::result_at`] then answers point queries exactly from the raw
//! solution kept on the result.

pub mod deflection;
pub mod diagram;
pub mod extrema;
pub mod flexibility;
pub mod loads;
pub mod query;
pub mod results;
pub mod section;
pub mod solve;
pub mod system;

pub use loads::SpanLoad;
pub use query::{result_at, PointResult};
pub use results::{
    DiagramSample, GlobalBounds, RawSolution, Reaction, SolveResult, SpanBounds,
};
pub use section::{Side, SectionForce};
pub use solve::solve;
