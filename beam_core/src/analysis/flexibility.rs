//! Load-term flexibility integrals.
//!
//! For each loaded span the compatibility equations need the end rotations
//! of the equivalent simple beam. Rather than carrying closed-form formulas
//! per load shape, the simple-beam moment diagram is integrated numerically
//! with a midpoint rule at a fixed pitch, which handles arbitrary stacked
//! loads uniformly.

use crate::analysis::loads::{simple_reactions, SpanLoad};
use crate::analysis::section::{section_force, Side};
use crate::units::{PHI_MAX_STEPS, PHI_MIN_STEPS, PHI_STEPS_PER_M};

/// Weighted moment-area integrals of a span's simple-beam moment diagram.
///
/// `phi_l` weights toward the left end (`(L-x)/L`), `phi_r` toward the
/// right (`x/L`). Up to the EI factor these are the end rotations used as
/// right-hand-side load terms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhiTerms {
    pub phi_l: f64,
    pub phi_r: f64,
}

/// Integrate the load terms for one span of length `length` (m).
///
/// Step count targets [`PHI_STEPS_PER_M`] per metre, clamped to
/// `[PHI_MIN_STEPS, PHI_MAX_STEPS]` so short spans stay accurate and long
/// spans stay bounded.
pub fn calc_phi(length: f64, loads: &[SpanLoad]) -> PhiTerms {
    let n = ((length * PHI_STEPS_PER_M as f64).ceil() as usize)
        .max(PHI_MIN_STEPS)
        .min(PHI_MAX_STEPS);
    let dx = length / n as f64;
    let (ra, _) = simple_reactions(length, loads);

    let mut phi_l = 0.0;
    let mut phi_r = 0.0;
    for i in 0..n {
        let x = (i as f64 + 0.5) * dx;
        let m = section_force(x, loads, ra, Side::Left).m;
        phi_l += m * (length - x) / length * dx;
        phi_r += m * x / length * dx;
    }
    PhiTerms { phi_l, phi_r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LoadKind;

    #[test]
    fn test_uniform_load_terms() {
        // w over L: phiL = phiR = wL³/24
        let loads = vec![SpanLoad {
            kind: LoadKind::Distributed,
            mag: 10.0,
            mag_end: 10.0,
            pos: 0.0,
            length: 6.0,
        }];
        let phi = calc_phi(6.0, &loads);
        let expected = 10.0 * 6.0f64.powi(3) / 24.0;
        assert!((phi.phi_l - expected).abs() / expected < 1e-4);
        assert!((phi.phi_r - expected).abs() / expected < 1e-4);
    }

    #[test]
    fn test_midspan_point_load_terms() {
        // P at L/2: phiL = phiR = PL²/16
        let loads = vec![SpanLoad {
            kind: LoadKind::Point,
            mag: 10.0,
            mag_end: 0.0,
            pos: 3.0,
            length: 0.0,
        }];
        let phi = calc_phi(6.0, &loads);
        let expected = 10.0 * 36.0 / 16.0;
        assert!((phi.phi_l - expected).abs() / expected < 1e-3);
        assert!((phi.phi_r - expected).abs() / expected < 1e-3);
    }

    #[test]
    fn test_offset_point_load_is_asymmetric() {
        // P at a from the left with a < L/2 weights phi_l harder
        let loads = vec![SpanLoad {
            kind: LoadKind::Point,
            mag: 10.0,
            mag_end: 0.0,
            pos: 1.5,
            length: 0.0,
        }];
        let phi = calc_phi(6.0, &loads);
        assert!(phi.phi_l > phi.phi_r);
    }

    #[test]
    fn test_unloaded_span_is_zero() {
        let phi = calc_phi(4.0, &[]);
        assert_eq!(phi.phi_l, 0.0);
        assert_eq!(phi.phi_r, 0.0);
    }
}
