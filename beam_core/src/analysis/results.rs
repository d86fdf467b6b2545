//! Solver output types.

use serde::{Deserialize, Serialize};

use crate::analysis::loads::SpanLoad;
use crate::model::SupportType;

/// One point of a sampled diagram: global position (m) against shear (kN),
/// moment (kN·m) or deflection (mm) depending on which array it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramSample {
    pub x: f64,
    pub y: f64,
}

/// Per-span extreme values with the global positions they occur at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanBounds {
    pub span_index: usize,
    pub max_m: f64,
    pub max_m_x: f64,
    pub min_m: f64,
    pub min_m_x: f64,
    pub max_q: f64,
    pub max_q_x: f64,
    pub min_q: f64,
    pub min_q_x: f64,
    pub max_d: f64,
    pub max_d_x: f64,
    pub min_d: f64,
    pub min_d_x: f64,
}

/// Vertical reaction at one participating support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Global position of the support (m)
    pub x: f64,
    /// Upward reaction (kN)
    pub value: f64,
    /// Display label: A for node 0, B for node 1, ...
    pub label: String,
}

/// Whole-beam envelope values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct GlobalBounds {
    /// Largest absolute shear (kN)
    pub max_shear: f64,
    pub max_shear_x: f64,
    /// Largest sagging moment, floored at zero (kN·m)
    pub max_m_pos: f64,
    pub max_m_pos_x: f64,
    /// Largest hogging moment, capped at zero (kN·m)
    pub max_m_neg: f64,
    pub max_m_neg_x: f64,
    /// Largest absolute deflection (mm)
    pub max_deflection: f64,
    pub max_def_x: f64,
    /// Bending stress from max_m_pos (N/mm²)
    pub max_sigma_pos: f64,
    /// Bending stress from max_m_neg (N/mm²)
    pub max_sigma_neg: f64,
}

/// The resolved statics of a solve, kept so point queries can be answered
/// analytically instead of by reading values off the sampled diagrams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSolution {
    pub spans: Vec<f64>,
    pub span_loads: Vec<Vec<SpanLoad>>,
    pub node_moments: Vec<f64>,
    pub supports: Vec<SupportType>,
}

/// Complete output of one solve call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Shear diagram samples; discontinuities appear as two samples at one x
    pub shear: Vec<DiagramSample>,
    /// Bending moment diagram samples
    pub moment: Vec<DiagramSample>,
    /// Deflection samples (mm, downward positive)
    pub deflection: Vec<DiagramSample>,
    pub span_bounds: Vec<SpanBounds>,
    pub reactions: Vec<Reaction>,
    pub bounds: GlobalBounds,
    /// Analytical backing data; `None` for the empty result, which makes
    /// point queries fall back to diagram interpolation
    pub raw: Option<RawSolution>,
}

impl SolveResult {
    /// The result for a model with no participating support: all diagrams
    /// empty, all bounds zero.
    pub fn empty() -> Self {
        Self {
            shear: Vec::new(),
            moment: Vec::new(),
            deflection: Vec::new(),
            span_bounds: Vec::new(),
            reactions: Vec::new(),
            bounds: GlobalBounds::default(),
            raw: None,
        }
    }
}
