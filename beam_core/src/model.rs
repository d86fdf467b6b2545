//! # Beam Model
//!
//! Input types for multi-span beam analysis: spans, support conditions,
//! applied loads and section properties.
//!
//! ## Node/Span Relationship
//!
//! For N spans there are N+1 supports (nodes), numbered left to right:
//!
//! ```text
//! Node 0    Node 1    Node 2    Node 3
//!   |--------|---------|---------|
//!    Span 0    Span 1    Span 2
//! ```
//!
//! Load positions are global metres measured from the left end of the whole
//! beam. Downward forces and clockwise moments are positive.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::model::{BeamModel, Load};
//!
//! // Two-span continuous beam, 5 m + 5 m, uniform 10 kN/m overall
//! let model = BeamModel::continuous2(5.0, 5.0)
//!     .with_load(Load::distributed(10.0, 0.0, 10.0));
//! assert!(model.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};
use crate::units::POSITION_EPS;

// =============================================================================
// SUPPORT TYPE
// =============================================================================

/// Support condition at a node.
///
/// Pin and roller are kinematically equivalent for this solver (both impose a
/// zero-moment boundary condition); they differ only in reaction bookkeeping
/// upstream. `Free` marks a cantilever/overhang end and is only valid at the
/// two ends of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SupportType {
    /// Free end - no restraint (cantilever/overhang tail)
    Free,

    /// Pinned support - restrains displacement, allows rotation
    #[default]
    Pin,

    /// Roller support - same as pinned for vertical beam analysis
    Roller,

    /// Fixed support - restrains displacement and rotation
    Fixed,
}

impl SupportType {
    /// All support types for UI selection
    pub const ALL: [SupportType; 4] = [
        SupportType::Pin,
        SupportType::Roller,
        SupportType::Fixed,
        SupportType::Free,
    ];

    /// Returns true if this support restrains vertical displacement
    pub fn restrains_vertical(&self) -> bool {
        !matches!(self, SupportType::Free)
    }

    /// Returns true if this support restrains rotation
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportType::Fixed)
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportType::Free => "Free",
            SupportType::Pin => "Pin",
            SupportType::Roller => "Roller",
            SupportType::Fixed => "Fixed",
        }
    }
}

impl std::fmt::Display for SupportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// LOADS
// =============================================================================

/// Load shape classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadKind {
    /// Concentrated force at one position (kN)
    Point,
    /// Uniform line load over a length (kN/m)
    Distributed,
    /// Linearly varying line load over a length (kN/m at both ends)
    Trapezoid,
    /// Concentrated couple at one position (kN·m)
    Moment,
}

impl LoadKind {
    /// True for kinds that occupy a single position (zero length)
    pub fn is_concentrated(&self) -> bool {
        matches!(self, LoadKind::Point | LoadKind::Moment)
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::Point => "Point",
            LoadKind::Distributed => "Distributed",
            LoadKind::Trapezoid => "Trapezoid",
            LoadKind::Moment => "Moment",
        }
    }
}

/// A single load applied to the beam.
///
/// `mag` is the magnitude at the load start; `mag_end` is only meaningful for
/// trapezoids (for a uniform load it mirrors `mag`, for concentrated loads it
/// is zero). `pos` is global metres from the left end; `length` is zero for
/// concentrated loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Unique identifier for this load (for UI row management)
    pub id: Uuid,

    /// Load shape
    pub kind: LoadKind,

    /// Magnitude at the load start (kN, kN/m or kN·m depending on kind)
    pub mag: f64,

    /// Magnitude at the load end (trapezoid only)
    pub mag_end: f64,

    /// Global position of the load start (m from left end)
    pub pos: f64,

    /// Loaded length (m); 0 for point and moment loads
    pub length: f64,
}

impl Load {
    /// Create a point load (kN) at a global position (m)
    pub fn point(mag: f64, pos: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: LoadKind::Point,
            mag,
            mag_end: 0.0,
            pos,
            length: 0.0,
        }
    }

    /// Create a uniform distributed load (kN/m) from `pos` over `length`
    pub fn distributed(mag: f64, pos: f64, length: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: LoadKind::Distributed,
            mag,
            mag_end: mag,
            pos,
            length,
        }
    }

    /// Create a trapezoidal load varying from `mag` to `mag_end` (kN/m)
    pub fn trapezoid(mag: f64, mag_end: f64, pos: f64, length: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: LoadKind::Trapezoid,
            mag,
            mag_end,
            pos,
            length,
        }
    }

    /// Create a concentrated moment (kN·m, clockwise positive) at a position
    pub fn moment(mag: f64, pos: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: LoadKind::Moment,
            mag,
            mag_end: 0.0,
            pos,
            length: 0.0,
        }
    }

    /// Global position of the load end (m)
    pub fn end_pos(&self) -> f64 {
        if self.kind.is_concentrated() {
            self.pos
        } else {
            self.pos + self.length
        }
    }
}

// =============================================================================
// SECTION PROPERTIES
// =============================================================================

/// Section and material properties consumed by the solver.
///
/// Internal units: E in N/mm², I in mm⁴, Z in mm³. Databases that catalogue
/// sections in cm units convert on construction (see [`crate::materials`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Modulus of elasticity (N/mm²)
    pub e_nmm2: f64,
    /// Moment of inertia about the bending axis (mm⁴)
    pub i_mm4: f64,
    /// Section modulus about the bending axis (mm³)
    pub z_mm3: f64,
}

impl SectionProperties {
    /// Create from raw values (manual section input)
    pub fn new(e_nmm2: f64, i_mm4: f64, z_mm3: f64) -> Self {
        Self {
            e_nmm2,
            i_mm4,
            z_mm3,
        }
    }

    /// Flexural stiffness EI (N·mm²)
    pub fn ei(&self) -> f64 {
        self.e_nmm2 * self.i_mm4
    }
}

// =============================================================================
// BEAM MODEL
// =============================================================================

/// Immutable input for one solve call.
///
/// A solve is a pure function of this struct plus the section properties: no
/// state survives between calls, and identical inputs produce identical
/// outputs (the sampled diagrams and the exact point queries must agree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamModel {
    /// Span lengths (m), ordered left to right
    pub spans: Vec<f64>,

    /// Support conditions at each node; length must be `spans.len() + 1`
    pub supports: Vec<SupportType>,

    /// Applied loads in global coordinates
    pub loads: Vec<Load>,
}

impl BeamModel {
    /// Create a model with explicit spans and supports
    pub fn new(spans: Vec<f64>, supports: Vec<SupportType>) -> Self {
        Self {
            spans,
            supports,
            loads: Vec::new(),
        }
    }

    /// Simply supported single span
    pub fn simple_span(length: f64) -> Self {
        Self::new(vec![length], vec![SupportType::Pin, SupportType::Roller])
    }

    /// Single span fixed at both ends
    pub fn fixed_fixed(length: f64) -> Self {
        Self::new(vec![length], vec![SupportType::Fixed, SupportType::Fixed])
    }

    /// Cantilever fixed at the left end
    pub fn cantilever(length: f64) -> Self {
        Self::new(vec![length], vec![SupportType::Fixed, SupportType::Free])
    }

    /// Simple span with an overhang beyond the right support
    pub fn overhang_one(center: f64, overhang: f64) -> Self {
        Self::new(
            vec![center, overhang],
            vec![SupportType::Pin, SupportType::Roller, SupportType::Free],
        )
    }

    /// Simple span with overhangs beyond both supports
    pub fn overhang_both(left: f64, center: f64, right: f64) -> Self {
        Self::new(
            vec![left, center, right],
            vec![
                SupportType::Free,
                SupportType::Pin,
                SupportType::Roller,
                SupportType::Free,
            ],
        )
    }

    /// Two-span continuous beam on simple supports
    pub fn continuous2(l1: f64, l2: f64) -> Self {
        Self::new(
            vec![l1, l2],
            vec![SupportType::Pin, SupportType::Roller, SupportType::Roller],
        )
    }

    /// Two-span continuous beam with a right overhang
    pub fn continuous2_overhang(l1: f64, l2: f64, overhang: f64) -> Self {
        Self::new(
            vec![l1, l2, overhang],
            vec![
                SupportType::Pin,
                SupportType::Roller,
                SupportType::Roller,
                SupportType::Free,
            ],
        )
    }

    /// Three-span continuous beam on simple supports
    pub fn continuous3(l1: f64, l2: f64, l3: f64) -> Self {
        Self::new(
            vec![l1, l2, l3],
            vec![
                SupportType::Pin,
                SupportType::Roller,
                SupportType::Roller,
                SupportType::Roller,
            ],
        )
    }

    /// Add a load and return self (builder pattern)
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Add a load to the model
    pub fn add_load(&mut self, load: Load) {
        self.loads.push(load);
    }

    /// Remove a load by ID
    pub fn remove_load(&mut self, id: Uuid) -> Option<Load> {
        self.loads
            .iter()
            .position(|l| l.id == id)
            .map(|idx| self.loads.remove(idx))
    }

    /// Total length of all spans combined (m)
    pub fn total_length(&self) -> f64 {
        self.spans.iter().sum()
    }

    /// Number of spans
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Number of nodes (always span_count + 1)
    pub fn node_count(&self) -> usize {
        self.spans.len() + 1
    }

    /// Cumulative global position of each node (m); length = node_count
    pub fn node_positions(&self) -> Vec<f64> {
        let mut positions = vec![0.0];
        let mut cumulative = 0.0;
        for len in &self.spans {
            cumulative += len;
            positions.push(cumulative);
        }
        positions
    }

    /// Indices of supports that restrain vertical displacement
    pub fn participating_supports(&self) -> Vec<usize> {
        self.supports
            .iter()
            .enumerate()
            .filter(|(_, s)| s.restrains_vertical())
            .map(|(i, _)| i)
            .collect()
    }

    /// Check whether the model has any non-free support
    pub fn has_participating_support(&self) -> bool {
        self.supports.iter().any(|s| s.restrains_vertical())
    }

    /// Validate input consistency.
    ///
    /// A model without any non-free support is *not* an error here: `solve`
    /// returns the empty result for it so front ends can show a "no result"
    /// state without a crash.
    pub fn validate(&self) -> EngineResult<()> {
        if self.spans.is_empty() {
            return Err(EngineError::invalid_input(
                "spans",
                "empty",
                "At least one span is required",
            ));
        }

        for (i, len) in self.spans.iter().enumerate() {
            if !len.is_finite() || *len <= 0.0 {
                return Err(EngineError::invalid_input(
                    format!("spans[{}]", i),
                    len.to_string(),
                    "Span length must be positive",
                ));
            }
        }

        let expected = self.spans.len() + 1;
        if self.supports.len() != expected {
            return Err(EngineError::invalid_input(
                "supports",
                self.supports.len().to_string(),
                format!("Expected {} supports for {} spans", expected, self.spans.len()),
            ));
        }

        // Free supports only make sense as overhang tails at the chain ends
        for (i, s) in self.supports.iter().enumerate() {
            if *s == SupportType::Free && i != 0 && i != self.supports.len() - 1 {
                return Err(EngineError::invalid_input(
                    format!("supports[{}]", i),
                    s.to_string(),
                    "Free supports are only valid at the chain ends",
                ));
            }
        }

        let total = self.total_length();
        for (i, load) in self.loads.iter().enumerate() {
            if load.pos < -POSITION_EPS || load.pos > total + POSITION_EPS {
                return Err(EngineError::invalid_input(
                    format!("loads[{}].pos", i),
                    load.pos.to_string(),
                    "Load position must lie within the beam",
                ));
            }
            if !load.kind.is_concentrated() {
                if load.length < 0.0 {
                    return Err(EngineError::invalid_input(
                        format!("loads[{}].length", i),
                        load.length.to_string(),
                        "Loaded length must not be negative",
                    ));
                }
                if load.pos + load.length > total + POSITION_EPS {
                    return Err(EngineError::invalid_input(
                        format!("loads[{}]", i),
                        format!("{}+{}", load.pos, load.length),
                        "Load must end within the beam",
                    ));
                }
            }
        }

        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_type_restraints() {
        assert!(SupportType::Pin.restrains_vertical());
        assert!(!SupportType::Pin.restrains_rotation());
        assert!(SupportType::Fixed.restrains_rotation());
        assert!(!SupportType::Free.restrains_vertical());
    }

    #[test]
    fn test_presets() {
        let m = BeamModel::continuous3(5.0, 6.0, 5.0);
        assert_eq!(m.span_count(), 3);
        assert_eq!(m.node_count(), 4);
        assert_eq!(m.total_length(), 16.0);
        assert_eq!(m.node_positions(), vec![0.0, 5.0, 11.0, 16.0]);

        let c = BeamModel::cantilever(3.0);
        assert_eq!(
            c.supports,
            vec![SupportType::Fixed, SupportType::Free]
        );
    }

    #[test]
    fn test_load_constructors() {
        let p = Load::point(10.0, 3.0);
        assert_eq!(p.length, 0.0);
        assert_eq!(p.end_pos(), 3.0);

        let d = Load::distributed(5.0, 1.0, 4.0);
        assert_eq!(d.mag_end, 5.0);
        assert_eq!(d.end_pos(), 5.0);

        let t = Load::trapezoid(0.0, 8.0, 0.0, 6.0);
        assert_eq!(t.mag, 0.0);
        assert_eq!(t.mag_end, 8.0);
    }

    #[test]
    fn test_validate_ok() {
        let m = BeamModel::simple_span(6.0).with_load(Load::point(10.0, 3.0));
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_validate_wrong_support_count() {
        let m = BeamModel::new(vec![6.0], vec![SupportType::Pin]);
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_interior_free() {
        let m = BeamModel::new(
            vec![4.0, 4.0],
            vec![SupportType::Pin, SupportType::Free, SupportType::Roller],
        );
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_load_out_of_range() {
        let m = BeamModel::simple_span(6.0).with_load(Load::point(10.0, 7.0));
        assert!(m.validate().is_err());

        let m = BeamModel::simple_span(6.0).with_load(Load::distributed(5.0, 4.0, 3.0));
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_no_participating_support_is_not_a_validation_error() {
        let m = BeamModel::new(vec![6.0], vec![SupportType::Free, SupportType::Free]);
        assert!(m.validate().is_ok());
        assert!(!m.has_participating_support());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let m = BeamModel::overhang_both(2.0, 6.0, 2.0)
            .with_load(Load::distributed(10.0, 0.0, 10.0))
            .with_load(Load::moment(5.0, 4.0));
        let json = serde_json::to_string_pretty(&m).unwrap();
        let parsed: BeamModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
