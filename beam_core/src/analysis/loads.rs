//! Load resultants and span clipping.
//!
//! Converts the model's global loads into span-local [`SpanLoad`]s and
//! integrates individual load segments into a resultant force plus moment
//! about the span origin. Splitting a load across a span boundary preserves
//! its total force and moment contribution.

use serde::{Deserialize, Serialize};

use crate::model::{BeamModel, LoadKind, SupportType};
use crate::units::POSITION_EPS;

/// A load clipped to one span's local coordinate frame.
///
/// `pos` is metres from the span start; for trapezoids `mag`/`mag_end` are
/// the line-load values at the clipped start and end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanLoad {
    pub kind: LoadKind,
    pub mag: f64,
    pub mag_end: f64,
    pub pos: f64,
    pub length: f64,
}

/// Resultant of one load segment: total force (kN) and moment of that force
/// about the span origin (kN·m). A pure moment load has zero force and
/// contributes its couple directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadIntegral {
    pub total_force: f64,
    pub moment_about_origin: f64,
}

/// Integrate a single span-local load segment.
///
/// Trapezoid centroid: `L/3 · (w1 + 2w2)/(w1 + w2)` from the segment start,
/// degenerating to `L/2` when `w1 + w2 = 0` (self-cancelling load). A
/// non-positive length yields a zero contribution, not an error.
pub fn load_integral(l: &SpanLoad) -> LoadIntegral {
    match l.kind {
        LoadKind::Point => LoadIntegral {
            total_force: l.mag,
            moment_about_origin: l.mag * l.pos,
        },
        LoadKind::Moment => LoadIntegral {
            total_force: 0.0,
            moment_about_origin: l.mag,
        },
        LoadKind::Distributed | LoadKind::Trapezoid => {
            let w1 = l.mag;
            let w2 = if l.kind == LoadKind::Trapezoid {
                l.mag_end
            } else {
                l.mag
            };
            let len = l.length;
            if len <= 0.0 {
                return LoadIntegral {
                    total_force: 0.0,
                    moment_about_origin: 0.0,
                };
            }
            let force = len * (w1 + w2) / 2.0;
            let centroid = if w1 + w2 == 0.0 {
                len / 2.0
            } else {
                (len / 3.0) * (w1 + 2.0 * w2) / (w1 + w2)
            };
            LoadIntegral {
                total_force: force,
                moment_about_origin: force * (l.pos + centroid),
            }
        }
    }
}

/// Sum of force and origin-moment resultants over a span's loads
pub fn sum_integrals(loads: &[SpanLoad]) -> (f64, f64) {
    let mut sum_p = 0.0;
    let mut sum_m = 0.0;
    for l in loads {
        let r = load_integral(l);
        sum_p += r.total_force;
        sum_m += r.moment_about_origin;
    }
    (sum_p, sum_m)
}

/// Simple-beam end reactions of one span from its clipped loads:
/// `Rb = ΣM/L`, `Ra = ΣP − Rb`.
pub fn simple_reactions(length: f64, loads: &[SpanLoad]) -> (f64, f64) {
    let (sum_p, sum_m) = sum_integrals(loads);
    let rb = sum_m / length;
    (sum_p - rb, rb)
}

/// Clip every model load into per-span local loads.
///
/// A concentrated load sitting exactly on an interior node belongs to the
/// span to its right; on the final node it belongs to the last span. Moment
/// loads applied exactly at a fixed chain end are excluded from the analysis
/// entirely (the fixed support absorbs the couple without deforming the
/// beam).
pub fn clip_to_spans(model: &BeamModel) -> Vec<Vec<SpanLoad>> {
    let total = model.total_length();
    let last_support = model.supports.len() - 1;
    let mut span_loads: Vec<Vec<SpanLoad>> = model.spans.iter().map(|_| Vec::new()).collect();

    let mut span_start = 0.0;
    for (i, &len) in model.spans.iter().enumerate() {
        let sx = span_start;
        let ex = span_start + len;
        let is_last_span = i == model.spans.len() - 1;

        for l in &model.loads {
            if l.kind == LoadKind::Moment
                && l.pos == 0.0
                && model.supports[0] == SupportType::Fixed
            {
                continue;
            }
            if l.kind == LoadKind::Moment
                && l.pos == total
                && model.supports[last_support] == SupportType::Fixed
            {
                continue;
            }

            let l_start = l.pos;
            let l_end = l.end_pos();
            let o_start = sx.max(l_start);
            let o_end = ex.min(l_end);

            let overlaps = o_end > o_start + POSITION_EPS;
            let concentrated_here = l.kind.is_concentrated()
                && l_start >= sx - POSITION_EPS
                && if is_last_span {
                    l_start <= ex + POSITION_EPS
                } else {
                    l_start < ex - POSITION_EPS
                };

            if overlaps || concentrated_here {
                let (mut mag, mut mag_end) = (l.mag, l.mag_end);
                if l.kind == LoadKind::Trapezoid {
                    let slope = (l.mag_end - l.mag) / l.length;
                    mag = l.mag + slope * (o_start - l.pos);
                    mag_end = l.mag + slope * (o_end - l.pos);
                }
                span_loads[i].push(SpanLoad {
                    kind: l.kind,
                    mag,
                    mag_end,
                    pos: o_start - sx,
                    length: o_end - o_start,
                });
            }
        }
        span_start += len;
    }

    span_loads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BeamModel, Load};

    fn span_load(kind: LoadKind, mag: f64, mag_end: f64, pos: f64, length: f64) -> SpanLoad {
        SpanLoad {
            kind,
            mag,
            mag_end,
            pos,
            length,
        }
    }

    #[test]
    fn test_point_integral() {
        let r = load_integral(&span_load(LoadKind::Point, 10.0, 0.0, 3.0, 0.0));
        assert_eq!(r.total_force, 10.0);
        assert_eq!(r.moment_about_origin, 30.0);
    }

    #[test]
    fn test_moment_integral_is_pure_couple() {
        let r = load_integral(&span_load(LoadKind::Moment, 5.0, 0.0, 2.0, 0.0));
        assert_eq!(r.total_force, 0.0);
        assert_eq!(r.moment_about_origin, 5.0);
    }

    #[test]
    fn test_uniform_integral() {
        // 4 kN/m over 3 m starting at 1 m: F = 12 kN, centroid at 2.5 m
        let r = load_integral(&span_load(LoadKind::Distributed, 4.0, 4.0, 1.0, 3.0));
        assert!((r.total_force - 12.0).abs() < 1e-12);
        assert!((r.moment_about_origin - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_centroid() {
        // Triangle 0 -> 6 kN/m over 3 m at origin: F = 9, centroid at 2L/3
        let r = load_integral(&span_load(LoadKind::Trapezoid, 0.0, 6.0, 0.0, 3.0));
        assert!((r.total_force - 9.0).abs() < 1e-12);
        assert!((r.moment_about_origin - 9.0 * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_self_cancelling_trapezoid_uses_midpoint() {
        let r = load_integral(&span_load(LoadKind::Trapezoid, -2.0, 2.0, 0.0, 4.0));
        assert_eq!(r.total_force, 0.0);
        assert_eq!(r.moment_about_origin, 0.0);
    }

    #[test]
    fn test_zero_length_distributed_is_no_contribution() {
        let r = load_integral(&span_load(LoadKind::Distributed, 4.0, 4.0, 1.0, 0.0));
        assert_eq!(r.total_force, 0.0);
        assert_eq!(r.moment_about_origin, 0.0);
    }

    #[test]
    fn test_clip_preserves_totals_across_boundary() {
        // 10 kN/m over the full 10 m of a 5+5 beam
        let model = BeamModel::continuous2(5.0, 5.0).with_load(Load::distributed(10.0, 0.0, 10.0));
        let clipped = clip_to_spans(&model);
        assert_eq!(clipped[0].len(), 1);
        assert_eq!(clipped[1].len(), 1);

        let total: f64 = clipped
            .iter()
            .flatten()
            .map(|l| load_integral(l).total_force)
            .sum();
        assert!((total - 100.0).abs() < 1e-9);
        // Each half carries its own 50 kN starting at local 0
        assert_eq!(clipped[1][0].pos, 0.0);
        assert!((clipped[1][0].length - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_clip_trapezoid_interpolates_at_boundary() {
        // 0 -> 10 kN/m over 10 m on a 5+5 beam: split at 5 kN/m
        let model =
            BeamModel::continuous2(5.0, 5.0).with_load(Load::trapezoid(0.0, 10.0, 0.0, 10.0));
        let clipped = clip_to_spans(&model);
        assert!((clipped[0][0].mag_end - 5.0).abs() < 1e-9);
        assert!((clipped[1][0].mag - 5.0).abs() < 1e-9);
        assert!((clipped[1][0].mag_end - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_interior_node_point_load_goes_right() {
        let model = BeamModel::continuous2(5.0, 5.0).with_load(Load::point(10.0, 5.0));
        let clipped = clip_to_spans(&model);
        assert!(clipped[0].is_empty());
        assert_eq!(clipped[1].len(), 1);
        assert_eq!(clipped[1][0].pos, 0.0);
    }

    #[test]
    fn test_end_node_point_load_stays_on_last_span() {
        let model = BeamModel::simple_span(6.0).with_load(Load::point(10.0, 6.0));
        let clipped = clip_to_spans(&model);
        assert_eq!(clipped[0].len(), 1);
        assert!((clipped[0][0].pos - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_moment_on_fixed_end_is_excluded() {
        let model = BeamModel::fixed_fixed(6.0)
            .with_load(Load::moment(5.0, 0.0))
            .with_load(Load::moment(5.0, 6.0))
            .with_load(Load::moment(5.0, 3.0));
        let clipped = clip_to_spans(&model);
        // Only the midspan moment survives
        assert_eq!(clipped[0].len(), 1);
        assert!((clipped[0][0].pos - 3.0).abs() < 1e-12);

        // On a pin/roller beam the end moments stay in
        let model = BeamModel::simple_span(6.0)
            .with_load(Load::moment(5.0, 0.0))
            .with_load(Load::moment(5.0, 6.0));
        let clipped = clip_to_spans(&model);
        assert_eq!(clipped[0].len(), 2);
    }

    #[test]
    fn test_simple_reactions_balance() {
        let loads = vec![span_load(LoadKind::Point, 10.0, 0.0, 2.0, 0.0)];
        let (ra, rb) = simple_reactions(6.0, &loads);
        assert!((ra + rb - 10.0).abs() < 1e-12);
        // P(L-a)/L = 10*4/6
        assert!((ra - 10.0 * 4.0 / 6.0).abs() < 1e-12);
    }
}
