//! Per-span extrema, support reactions and the global envelope.

use crate::analysis::loads::{simple_reactions, SpanLoad};
use crate::analysis::results::{DiagramSample, GlobalBounds, Reaction, SpanBounds};
use crate::analysis::section::{section_force, Side};
use crate::model::{BeamModel, SectionProperties};
use crate::units::{KNM_TO_NMM, POSITION_EPS, ZERO_CROSS_STEPS};

/// Per-span extreme values of moment, shear and deflection.
///
/// Candidates come from the diagram samples inside the span, augmented with
/// the moment at every shear zero-crossing found by a coarse sign-change
/// scan, so the true moment peak is captured even when it falls between
/// grid points.
pub fn span_bounds(
    model: &BeamModel,
    span_loads: &[Vec<SpanLoad>],
    node_moments: &[f64],
    shear: &[DiagramSample],
    moment: &[DiagramSample],
    deflection: &[DiagramSample],
) -> Vec<SpanBounds> {
    let mut out = Vec::with_capacity(model.spans.len());
    let mut sx = 0.0;

    for (i, &len) in model.spans.iter().enumerate() {
        let ex = sx + len;
        let loads = &span_loads[i];
        let (ra, _) = simple_reactions(len, loads);
        let ml = node_moments[i];
        let mr = node_moments[i + 1];
        let qb = (mr - ml) / len;

        let mut m_points: Vec<DiagramSample> = moment
            .iter()
            .filter(|d| d.x >= sx - POSITION_EPS && d.x <= ex + POSITION_EPS)
            .copied()
            .collect();
        let q_points: Vec<DiagramSample> = shear
            .iter()
            .filter(|d| d.x >= sx - POSITION_EPS && d.x <= ex + POSITION_EPS)
            .copied()
            .collect();
        let d_points: Vec<DiagramSample> = deflection
            .iter()
            .filter(|d| d.x >= sx - POSITION_EPS && d.x <= ex + POSITION_EPS)
            .copied()
            .collect();

        // Moment candidates where the shear changes sign
        for k in 0..ZERO_CROSS_STEPS {
            let x1 = k as f64 / ZERO_CROSS_STEPS as f64 * len;
            let x2 = (k + 1) as f64 / ZERO_CROSS_STEPS as f64 * len;
            let q1 = section_force(x1, loads, ra, Side::Left).q + qb;
            let q2 = section_force(x2, loads, ra, Side::Left).q + qb;
            if q1 * q2 < 0.0 {
                let x0 = x1 + (0.0 - q1) * (x2 - x1) / (q2 - q1);
                let ms = section_force(x0, loads, ra, Side::Left).m;
                let mb = ml + (mr - ml) * (x0 / len);
                m_points.push(DiagramSample {
                    x: sx + x0,
                    y: ms + mb,
                });
            }
        }

        let pick = |points: &[DiagramSample], max: bool| -> (f64, f64) {
            let val = points
                .iter()
                .map(|d| d.y)
                .fold(if max { f64::NEG_INFINITY } else { f64::INFINITY }, |a, b| {
                    if max {
                        a.max(b)
                    } else {
                        a.min(b)
                    }
                });
            let x = points
                .iter()
                .find(|d| d.y == val)
                .map(|d| d.x)
                .unwrap_or(sx);
            (val, x)
        };

        let (max_m, max_m_x) = pick(&m_points, true);
        let (min_m, min_m_x) = pick(&m_points, false);
        let (max_q, max_q_x) = pick(&q_points, true);
        let (min_q, min_q_x) = pick(&q_points, false);
        let (max_d, max_d_x) = pick(&d_points, true);
        let (min_d, min_d_x) = pick(&d_points, false);

        out.push(SpanBounds {
            span_index: i,
            max_m,
            max_m_x,
            min_m,
            min_m_x,
            max_q,
            max_q_x,
            min_q,
            min_q_x,
            max_d,
            max_d_x,
            min_d,
            min_d_x,
        });
        sx = ex;
    }

    out
}

/// Vertical reactions at the participating supports.
///
/// Each support collects the adjacent-span simple-beam end reaction plus the
/// continuity shear `(MR - ML) / L` from both neighbouring spans.
pub fn reactions(
    model: &BeamModel,
    span_loads: &[Vec<SpanLoad>],
    node_moments: &[f64],
) -> Vec<Reaction> {
    let node_positions = model.node_positions();
    let mut out = Vec::new();

    for idx in model.participating_supports() {
        let mut value = 0.0;

        if idx > 0 {
            let i = idx - 1;
            let len = model.spans[i];
            let (_, rb_simple) = simple_reactions(len, &span_loads[i]);
            let q_mom = (node_moments[i + 1] - node_moments[i]) / len;
            value += rb_simple - q_mom;
        }
        if idx < model.spans.len() {
            let len = model.spans[idx];
            let (ra_simple, _) = simple_reactions(len, &span_loads[idx]);
            let q_mom = (node_moments[idx + 1] - node_moments[idx]) / len;
            value += ra_simple + q_mom;
        }

        out.push(Reaction {
            x: node_positions[idx],
            value,
            label: ((b'A' + idx as u8) as char).to_string(),
        });
    }

    out
}

/// Whole-beam envelope: peak shear, sagging/hogging moments with positions,
/// peak deflection and the resulting bending stresses.
pub fn global_bounds(
    shear: &[DiagramSample],
    moment: &[DiagramSample],
    deflection: &[DiagramSample],
    section: &SectionProperties,
) -> GlobalBounds {
    if shear.is_empty() || moment.is_empty() {
        return GlobalBounds::default();
    }

    let max_shear = shear.iter().map(|d| d.y.abs()).fold(0.0, f64::max);
    let max_m_pos = moment.iter().map(|d| d.y).fold(0.0, f64::max);
    let max_m_neg = moment.iter().map(|d| d.y).fold(0.0, f64::min);
    let max_deflection = deflection.iter().map(|d| d.y.abs()).fold(0.0, f64::max);

    GlobalBounds {
        max_shear,
        max_shear_x: 0.0,
        max_m_pos,
        max_m_pos_x: moment
            .iter()
            .find(|d| d.y == max_m_pos)
            .map(|d| d.x)
            .unwrap_or(0.0),
        max_m_neg,
        max_m_neg_x: moment
            .iter()
            .find(|d| d.y == max_m_neg)
            .map(|d| d.x)
            .unwrap_or(0.0),
        max_deflection,
        max_def_x: deflection
            .iter()
            .find(|d| d.y.abs() == max_deflection)
            .map(|d| d.x)
            .unwrap_or(0.0),
        max_sigma_pos: max_m_pos * KNM_TO_NMM / section.z_mm3,
        max_sigma_neg: max_m_neg * KNM_TO_NMM / section.z_mm3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::diagram::sample_diagrams;
    use crate::analysis::loads::clip_to_spans;
    use crate::model::{BeamModel, Load};

    #[test]
    fn test_simple_beam_reactions_split_evenly() {
        let model = BeamModel::simple_span(6.0).with_load(Load::point(10.0, 3.0));
        let loads = clip_to_spans(&model);
        let r = reactions(&model, &loads, &[0.0, 0.0]);
        assert_eq!(r.len(), 2);
        assert_eq!(r[0].label, "A");
        assert_eq!(r[1].label, "B");
        assert!((r[0].value - 5.0).abs() < 1e-9);
        assert!((r[1].value - 5.0).abs() < 1e-9);
        assert_eq!(r[1].x, 6.0);
    }

    #[test]
    fn test_asymmetric_reactions() {
        // P = 12 kN at 2 m of 6 m: Ra = 8, Rb = 4
        let model = BeamModel::simple_span(6.0).with_load(Load::point(12.0, 2.0));
        let loads = clip_to_spans(&model);
        let r = reactions(&model, &loads, &[0.0, 0.0]);
        assert!((r[0].value - 8.0).abs() < 1e-9);
        assert!((r[1].value - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_continuity_shear_feeds_reactions() {
        // Two-span w = 10, L = 5+5, M_mid = -31.25:
        // middle reaction = 62.5, ends 18.75 each
        let model = BeamModel::continuous2(5.0, 5.0).with_load(Load::distributed(10.0, 0.0, 10.0));
        let loads = clip_to_spans(&model);
        let r = reactions(&model, &loads, &[0.0, -31.25, 0.0]);
        assert!((r[1].value - 62.5).abs() < 1e-9);
        assert!((r[0].value - 18.75).abs() < 1e-9);
        assert!((r[2].value - 18.75).abs() < 1e-9);
        let total: f64 = r.iter().map(|r| r.value).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_span_bounds_find_interior_peak() {
        // Uniform load peak sits mid-span, on the zero-crossing candidate
        let model = BeamModel::simple_span(6.0).with_load(Load::distributed(10.0, 0.0, 6.0));
        let loads = clip_to_spans(&model);
        let (shear, moment) = sample_diagrams(&model.spans, &loads, &[0.0, 0.0]);
        let b = span_bounds(&model, &loads, &[0.0, 0.0], &shear, &moment, &[]);
        assert_eq!(b.len(), 1);
        assert!((b[0].max_m - 45.0).abs() < 1e-6);
        assert!((b[0].max_m_x - 3.0).abs() < 1e-6);
        assert!((b[0].max_q - 30.0).abs() < 1e-9);
        assert!((b[0].min_q + 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_global_bounds_stress() {
        let model = BeamModel::simple_span(6.0).with_load(Load::point(10.0, 3.0));
        let loads = clip_to_spans(&model);
        let (shear, moment) = sample_diagrams(&model.spans, &loads, &[0.0, 0.0]);
        let section = SectionProperties::new(205_000.0, 7.21e7, 4.81e5);
        let g = global_bounds(&shear, &moment, &[], &section);
        assert!((g.max_m_pos - 15.0).abs() < 1e-9);
        assert!((g.max_m_pos_x - 3.0).abs() < 1e-9);
        assert_eq!(g.max_m_neg, 0.0);
        assert!((g.max_shear - 5.0).abs() < 1e-9);
        assert_eq!(g.max_shear_x, 0.0);
        // sigma = M * 1e6 / Z
        assert!((g.max_sigma_pos - 15.0e6 / 4.81e5).abs() < 1e-6);
    }
}
