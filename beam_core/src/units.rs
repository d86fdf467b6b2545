//! # Units and Tolerances
//!
//! Unit-conversion factors and the named numeric tolerances used throughout
//! the engine. The solver works in a fixed unit system:
//!
//! - Length: metres (model), millimetres (section properties, deflection)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kN·m)
//! - Elastic modulus: N/mm²
//! - Moment of inertia: mm⁴; section modulus: mm³
//! - Stress: N/mm²
//!
//! Tolerances are grouped here by semantic use rather than scattered as
//! literals through the clipping and comparison logic. The values themselves
//! are load-bearing: changing one changes which samples merge, where jumps
//! are emitted, and how boundary points resolve.

// ============================================================================
// Unit conversion
// ============================================================================

/// kN·m to N·mm (for M / EI curvature in mm units)
pub const KNM_TO_NMM: f64 = 1.0e6;

/// metres to millimetres
pub const M_TO_MM: f64 = 1000.0;

/// cm⁴ to mm⁴ (section database catalogue units)
pub const CM4_TO_MM4: f64 = 1.0e4;

/// cm³ to mm³ (section database catalogue units)
pub const CM3_TO_MM3: f64 = 1.0e3;

/// Elastic modulus of structural steel (N/mm²)
pub const E_STEEL: f64 = 205_000.0;

// ============================================================================
// Position comparison
// ============================================================================

/// Position-equality epsilon (m) for load clipping and span membership
pub const POSITION_EPS: f64 = 1.0e-9;

/// Offset (m) inserted either side of a moment load so the sampled moment
/// diagram shows the jump as two distinct points
pub const JUMP_OFFSET: f64 = 1.0e-6;

/// Minimum dx (m) between consecutive samples worth integrating over
pub const MIN_SAMPLE_DX: f64 = 1.0e-8;

// ============================================================================
// Magnitude significance
// ============================================================================

/// Left/right shear limits closer than this (kN) collapse to one sample
pub const SHEAR_JUMP_TOL: f64 = 1.0e-6;

/// Exact-match tolerance (m) when looking a position up in a sample array
pub const SAMPLE_LOOKUP_TOL: f64 = 1.0e-4;

/// Snap distance (m, = 1 mm) for support-proximity handling in point queries
pub const SUPPORT_SNAP: f64 = 1.0e-3;

// ============================================================================
// Discretization
// ============================================================================

/// Load-term integration: target steps per metre of span
pub const PHI_STEPS_PER_M: usize = 1000;
/// Load-term integration: minimum step count
pub const PHI_MIN_STEPS: usize = 50;
/// Load-term integration: maximum step count (bounds cost on long spans)
pub const PHI_MAX_STEPS: usize = 10_000;

/// Diagram sampling: uniform grid steps per metre of span
pub const GRID_STEPS_PER_M: usize = 200;
/// Diagram sampling: minimum grid steps per span
pub const GRID_MIN_STEPS: usize = 50;
/// Diagram sampling: maximum grid steps per span (rendering cost bound)
pub const GRID_MAX_STEPS: usize = 2000;

/// Coarse scan steps per span when hunting shear zero-crossings
pub const ZERO_CROSS_STEPS: usize = 50;
