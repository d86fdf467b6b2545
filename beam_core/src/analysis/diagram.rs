//! Diagram sampling.
//!
//! Produces the shear and moment sample arrays by superposing each span's
//! simple-beam solution with the linear moment field from its end moments.
//! Sample positions are a uniform grid per span plus key points at every
//! load boundary, so jumps and kinks land exactly on samples instead of
//! being smeared between grid points.

use crate::analysis::loads::{simple_reactions, SpanLoad};
use crate::analysis::results::DiagramSample;
use crate::analysis::section::{section_force, Side};
use crate::model::LoadKind;
use crate::units::{GRID_MAX_STEPS, GRID_MIN_STEPS, GRID_STEPS_PER_M, JUMP_OFFSET, SHEAR_JUMP_TOL};

/// Sample positions for one span: key points, jump brackets around moment
/// loads, and a uniform grid, sorted and deduplicated.
fn span_sample_positions(len: f64, loads: &[SpanLoad]) -> Vec<f64> {
    let mut xs = vec![0.0, len];
    for l in loads {
        xs.push(l.pos);
        match l.kind {
            LoadKind::Moment => {
                xs.push((l.pos - JUMP_OFFSET).max(0.0));
                xs.push((l.pos + JUMP_OFFSET).min(len));
            }
            LoadKind::Point => {}
            _ => xs.push(l.pos + l.length),
        }
    }

    let steps = ((len * GRID_STEPS_PER_M as f64).ceil() as usize)
        .max(GRID_MIN_STEPS)
        .min(GRID_MAX_STEPS);
    for k in 0..=steps {
        xs.push(k as f64 * (len / steps as f64));
    }

    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    xs.dedup();
    xs
}

/// Sample the shear and moment diagrams over the whole beam.
///
/// Shear is evaluated from the left limit at every sample; where the right
/// limit differs by more than [`SHEAR_JUMP_TOL`] a second sample at the same
/// x records the jump. Moment is single-valued (moment-load jumps are
/// carried by the bracketing offset samples instead).
pub fn sample_diagrams(
    spans: &[f64],
    span_loads: &[Vec<SpanLoad>],
    node_moments: &[f64],
) -> (Vec<DiagramSample>, Vec<DiagramSample>) {
    let mut shear = Vec::new();
    let mut moment = Vec::new();
    let mut global_x = 0.0;

    for (i, &len) in spans.iter().enumerate() {
        let loads = &span_loads[i];
        let ml = node_moments[i];
        let mr = node_moments[i + 1];
        let (ra, _) = simple_reactions(len, loads);
        let qb = (mr - ml) / len;

        for lx in span_sample_positions(len, loads) {
            let gx = global_x + lx;

            let q_left = section_force(lx, loads, ra, Side::Left).q + qb;
            let q_right = section_force(lx, loads, ra, Side::Right).q + qb;
            shear.push(DiagramSample { x: gx, y: q_left });
            if (q_left - q_right).abs() > SHEAR_JUMP_TOL {
                shear.push(DiagramSample { x: gx, y: q_right });
            }

            let ms = section_force(lx, loads, ra, Side::Left).m;
            let mb = ml + (mr - ml) * (lx / len);
            moment.push(DiagramSample { x: gx, y: ms + mb });
        }
        global_x += len;
    }

    (shear, moment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::loads::clip_to_spans;
    use crate::model::{BeamModel, Load};

    fn moment_at(data: &[DiagramSample], x: f64) -> f64 {
        data.iter()
            .find(|d| (d.x - x).abs() < 1e-9)
            .map(|d| d.y)
            .unwrap()
    }

    #[test]
    fn test_simple_beam_moment_peak() {
        let model = BeamModel::simple_span(6.0).with_load(Load::point(10.0, 3.0));
        let loads = clip_to_spans(&model);
        let (_, moment) = sample_diagrams(&model.spans, &loads, &[0.0, 0.0]);
        assert!((moment_at(&moment, 3.0) - 15.0).abs() < 1e-9);
        assert!(moment_at(&moment, 0.0).abs() < 1e-9);
        assert!(moment_at(&moment, 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_shear_jump_is_two_samples() {
        let model = BeamModel::simple_span(6.0).with_load(Load::point(10.0, 3.0));
        let loads = clip_to_spans(&model);
        let (shear, _) = sample_diagrams(&model.spans, &loads, &[0.0, 0.0]);
        let at_load: Vec<_> = shear.iter().filter(|d| d.x == 3.0).collect();
        assert_eq!(at_load.len(), 2);
        assert!((at_load[0].y - 5.0).abs() < 1e-9);
        assert!((at_load[1].y + 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_moment_load_bracketed_by_offset_samples() {
        let model = BeamModel::simple_span(6.0).with_load(Load::moment(12.0, 3.0));
        let loads = clip_to_spans(&model);
        let (_, moment) = sample_diagrams(&model.spans, &loads, &[0.0, 0.0]);
        let before = moment_at(&moment, 3.0 - JUMP_OFFSET);
        let after = moment_at(&moment, 3.0 + JUMP_OFFSET);
        // The couple shows as a near-12 step across the bracket
        assert!((after - before - 12.0).abs() < 1e-3);
    }

    #[test]
    fn test_end_moments_shift_the_diagram() {
        // Uniform 10 kN/m on one 6 m span with hogging end moments -30:
        // midspan moment drops from 45 to 15
        let model = BeamModel::fixed_fixed(6.0).with_load(Load::distributed(10.0, 0.0, 6.0));
        let loads = clip_to_spans(&model);
        let (_, moment) = sample_diagrams(&model.spans, &loads, &[-30.0, -30.0]);
        assert!((moment_at(&moment, 3.0) - 15.0).abs() < 1e-9);
        assert!((moment_at(&moment, 0.0) + 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_samples_are_sorted_within_span() {
        let model = BeamModel::continuous2(5.0, 5.0).with_load(Load::distributed(10.0, 0.0, 10.0));
        let loads = clip_to_spans(&model);
        let (shear, moment) = sample_diagrams(&model.spans, &loads, &[0.0, -31.25, 0.0]);
        assert!(moment.windows(2).all(|w| w[0].x <= w[1].x));
        assert!(shear.windows(2).all(|w| w[0].x <= w[1].x));
    }
}
