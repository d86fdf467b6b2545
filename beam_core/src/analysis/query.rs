//! Exact point queries against a solved result.
//!
//! Forces come from the analytical backing data (superposition of the
//! span's simple-beam solution and its end moments), so they are exact
//! rather than read off the sampled diagrams. Deflection is interpolated
//! from the deflection samples and snapped to zero within 1 mm of a
//! participating support.

use serde::{Deserialize, Serialize};

use crate::analysis::loads::simple_reactions;
use crate::analysis::results::{DiagramSample, SolveResult};
use crate::analysis::section::{section_force, Side};
use crate::model::{LoadKind, SectionProperties, SupportType};
use crate::units::{KNM_TO_NMM, POSITION_EPS, SAMPLE_LOOKUP_TOL, SUPPORT_SNAP};

/// Values at one position along the beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PointResult {
    /// Shear force (kN), right limit at discontinuities
    pub q: f64,
    /// Bending moment (kN·m)
    pub m: f64,
    /// Deflection (mm)
    pub deflection: f64,
    /// Absolute bending stress (N/mm²)
    pub sigma: f64,
}

/// Interpolate a diagram at x: exact sample match first, else linear
/// between neighbours, else the nearest end value.
fn sample_at(data: &[DiagramSample], x: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    if let Some(p) = data.iter().find(|p| (p.x - x).abs() < SAMPLE_LOOKUP_TOL) {
        return p.y;
    }
    let low = data.iter().rev().find(|p| p.x <= x);
    let high = data.iter().find(|p| p.x > x);
    match (low, high) {
        (Some(l), Some(h)) => l.y + (h.y - l.y) * ((x - l.x) / (h.x - l.x)),
        (Some(p), None) | (None, Some(p)) => p.y,
        (None, None) => 0.0,
    }
}

fn locate_span(
    spans: &[f64],
    x: f64,
    target_span: Option<usize>,
) -> Option<(usize, f64)> {
    if let Some(target) = target_span {
        if target < spans.len() {
            let current_x: f64 = spans[..target].iter().sum();
            let mut local_x = x - current_x;
            // Clamp sub-millimetre overshoot from accumulated float error
            if local_x < 0.0 && local_x > -SUPPORT_SNAP {
                local_x = 0.0;
            }
            if local_x > spans[target] && local_x < spans[target] + SUPPORT_SNAP {
                local_x = spans[target];
            }
            return Some((target, local_x));
        }
    }

    let mut current_x = 0.0;
    for (i, &len) in spans.iter().enumerate() {
        if x >= current_x - POSITION_EPS && x <= current_x + len + POSITION_EPS {
            let local_x = (x - current_x).clamp(0.0, len);
            return Some((i, local_x));
        }
        current_x += len;
    }
    None
}

/// Query shear, moment, deflection and stress at global position `x` (m).
///
/// `target_span` forces evaluation within a given span, which selects which
/// side of an interior support a query exactly on the node resolves to.
/// Without backing data (empty result) every value falls back to diagram
/// interpolation.
pub fn result_at(
    x: f64,
    results: &SolveResult,
    section: &SectionProperties,
    target_span: Option<usize>,
) -> PointResult {
    if let Some(raw) = &results.raw {
        if let Some((span_index, local_x)) = locate_span(&raw.spans, x, target_span) {
            let len = raw.spans[span_index];
            let loads = &raw.span_loads[span_index];
            let ml = raw.node_moments[span_index];
            let mr = raw.node_moments[span_index + 1];
            let (ra_simple, _) = simple_reactions(len, loads);

            // Right limit so a concentrated load exactly at x is included
            let simple = section_force(local_x, loads, ra_simple, Side::Right);
            let qb = (mr - ml) / len;
            let mb = ml + (mr - ml) * (local_x / len);

            let total_q = simple.q + qb;
            let mut total_m = simple.m + mb;

            // A couple applied exactly at a simply supported or free right
            // end: report the moment just inside the end instead of the
            // post-couple value
            let total_len: f64 = raw.spans.iter().sum();
            let right_support = raw.supports[raw.supports.len() - 1];
            let simple_right_end = matches!(
                right_support,
                SupportType::Free | SupportType::Pin | SupportType::Roller
            );
            if (x - total_len).abs() < SUPPORT_SNAP && simple_right_end {
                let last = raw.spans.len() - 1;
                let last_len = raw.spans[last];
                let end_moment_sum: f64 = raw.span_loads[last]
                    .iter()
                    .filter(|l| {
                        l.kind == LoadKind::Moment && (l.pos - last_len).abs() < SUPPORT_SNAP
                    })
                    .map(|l| l.mag)
                    .sum();
                total_m -= end_moment_sum;
            }

            let mut defl = sample_at(&results.deflection, x);

            // Zero deflection within 1 mm of any participating support
            let mut sup_x = 0.0;
            for (i, s) in raw.supports.iter().enumerate() {
                if *s != SupportType::Free && (x - sup_x).abs() < SUPPORT_SNAP {
                    defl = 0.0;
                    break;
                }
                if i < raw.spans.len() {
                    sup_x += raw.spans[i];
                }
            }

            return PointResult {
                q: total_q,
                m: total_m,
                deflection: defl,
                sigma: (total_m * KNM_TO_NMM / section.z_mm3).abs(),
            };
        }
    }

    let m = sample_at(&results.moment, x);
    PointResult {
        q: sample_at(&results.shear, x),
        m,
        deflection: sample_at(&results.deflection, x),
        sigma: (m * KNM_TO_NMM / section.z_mm3).abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::loads::SpanLoad;
    use crate::analysis::results::RawSolution;

    fn span_load(kind: LoadKind, mag: f64, pos: f64, length: f64) -> SpanLoad {
        SpanLoad {
            kind,
            mag,
            mag_end: if kind == LoadKind::Distributed { mag } else { 0.0 },
            pos,
            length,
        }
    }

    fn simple_result() -> SolveResult {
        // 6 m simple beam, P = 10 kN at midspan, hand-assembled raw data
        SolveResult {
            shear: Vec::new(),
            moment: Vec::new(),
            deflection: vec![
                DiagramSample { x: 0.0, y: 0.0 },
                DiagramSample { x: 3.0, y: -4.5 },
                DiagramSample { x: 6.0, y: 0.0 },
            ],
            span_bounds: Vec::new(),
            reactions: Vec::new(),
            bounds: Default::default(),
            raw: Some(RawSolution {
                spans: vec![6.0],
                span_loads: vec![vec![span_load(LoadKind::Point, 10.0, 3.0, 0.0)]],
                node_moments: vec![0.0, 0.0],
                supports: vec![SupportType::Pin, SupportType::Roller],
            }),
        }
    }

    fn section() -> SectionProperties {
        SectionProperties::new(205_000.0, 7.21e7, 4.81e5)
    }

    #[test]
    fn test_exact_forces_at_midspan() {
        let res = simple_result();
        let p = result_at(3.0, &res, &section(), None);
        assert!((p.m - 15.0).abs() < 1e-9);
        // Right limit: the point load is included
        assert!((p.q + 5.0).abs() < 1e-9);
        assert!((p.sigma - 15.0e6 / 4.81e5).abs() < 1e-6);
    }

    #[test]
    fn test_deflection_interpolated_and_snapped() {
        let res = simple_result();
        let p = result_at(1.5, &res, &section(), None);
        assert!((p.deflection + 2.25).abs() < 1e-9);
        // Within 1 mm of the left support: snapped to zero
        let p = result_at(0.0005, &res, &section(), None);
        assert_eq!(p.deflection, 0.0);
    }

    #[test]
    fn test_target_span_selects_node_side() {
        // Two spans with a step in end moments at the middle node
        let res = SolveResult {
            shear: Vec::new(),
            moment: Vec::new(),
            deflection: Vec::new(),
            span_bounds: Vec::new(),
            reactions: Vec::new(),
            bounds: Default::default(),
            raw: Some(RawSolution {
                spans: vec![5.0, 5.0],
                span_loads: vec![
                    vec![span_load(LoadKind::Distributed, 10.0, 0.0, 5.0)],
                    vec![span_load(LoadKind::Distributed, 10.0, 0.0, 5.0)],
                ],
                node_moments: vec![0.0, -31.25, 0.0],
                supports: vec![SupportType::Pin, SupportType::Roller, SupportType::Roller],
            }),
        };
        let s = section();
        let left = result_at(5.0, &res, &s, Some(0));
        let right = result_at(5.0, &res, &s, Some(1));
        // Moment is continuous at the node, shear is not
        assert!((left.m - right.m).abs() < 1e-9);
        assert!((left.q - right.q).abs() > 1.0);
        // Left span end shear: Ra - wL + Qb = 25 - 50 - 6.25
        assert!((left.q + 31.25).abs() < 1e-9);
        assert!((right.q - 31.25).abs() < 1e-9);
    }

    #[test]
    fn test_end_moment_correction_at_simple_right_end() {
        // Couple applied exactly at the simply supported right end: the
        // query reports the pre-couple moment just inside the end
        let res = SolveResult {
            shear: Vec::new(),
            moment: Vec::new(),
            deflection: Vec::new(),
            span_bounds: Vec::new(),
            reactions: Vec::new(),
            bounds: Default::default(),
            raw: Some(RawSolution {
                spans: vec![6.0],
                span_loads: vec![vec![span_load(LoadKind::Moment, 5.0, 6.0, 0.0)]],
                node_moments: vec![0.0, 0.0],
                supports: vec![SupportType::Pin, SupportType::Roller],
            }),
        };
        let p = result_at(6.0, &res, &section(), None);
        // Inside the beam M(x) = Ra*x with Ra = -5/6, so -5 at the end
        assert!((p.m + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_uses_diagram_interpolation() {
        let mut res = simple_result();
        res.raw = None;
        res.moment = vec![
            DiagramSample { x: 0.0, y: 0.0 },
            DiagramSample { x: 3.0, y: 15.0 },
            DiagramSample { x: 6.0, y: 0.0 },
        ];
        let p = result_at(1.5, &res, &section(), None);
        assert!((p.m - 7.5).abs() < 1e-9);
        assert!((p.sigma - 7.5e6 / 4.81e5).abs() < 1e-6);
    }
}
