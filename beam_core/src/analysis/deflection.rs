//! Deflection by double integration of the sampled moment diagram.
//!
//! Curvature is integrated twice with the trapezoidal rule over the moment
//! samples, then the two integration constants are fixed from the support
//! conditions: a fixed first support pins slope and displacement there,
//! two or more supports pin displacement at the first and last, and a lone
//! pin just zeroes its own displacement. Output is in millimetres, downward
//! positive (curvature enters as phi = -M/EI).

use crate::analysis::results::DiagramSample;
use crate::model::{SectionProperties, SupportType};
use crate::units::{KNM_TO_NMM, MIN_SAMPLE_DX, M_TO_MM, SAMPLE_LOOKUP_TOL};

#[derive(Debug, Clone, Copy)]
struct RawPoint {
    x: f64,
    th: f64,
    y: f64,
}

/// Slope/displacement at x, from exact sample match or linear interpolation.
fn raw_at(raw: &[RawPoint], x: f64) -> (f64, f64) {
    if let Some(p) = raw.iter().find(|p| (p.x - x).abs() < SAMPLE_LOOKUP_TOL) {
        return (p.th, p.y);
    }
    let low = raw.iter().rev().find(|p| p.x <= x);
    let high = raw.iter().find(|p| p.x > x);
    match (low, high) {
        (Some(l), Some(h)) => {
            let r = (x - l.x) / (h.x - l.x);
            (l.th + (h.th - l.th) * r, l.y + (h.y - l.y) * r)
        }
        (Some(p), None) | (None, Some(p)) => (p.th, p.y),
        (None, None) => (0.0, 0.0),
    }
}

/// Integrate the moment samples into a deflection curve (mm).
pub fn integrate_deflection(
    moment: &[DiagramSample],
    spans: &[f64],
    supports: &[SupportType],
    section: &SectionProperties,
) -> Vec<DiagramSample> {
    let ei = section.ei();

    let mut raw = vec![RawPoint {
        x: 0.0,
        th: 0.0,
        y: 0.0,
    }];
    let mut cur_th = 0.0;
    let mut cur_y = 0.0;

    for pair in moment.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let dx = p2.x - p1.x;
        if dx < MIN_SAMPLE_DX {
            continue;
        }
        let phi1 = -(p1.y * KNM_TO_NMM) / ei;
        let phi2 = -(p2.y * KNM_TO_NMM) / ei;
        let d_th = (phi1 + phi2) * 0.5 * dx * M_TO_MM;
        let d_y = (cur_th + (cur_th + d_th)) * 0.5 * dx * M_TO_MM;
        cur_th += d_th;
        cur_y += d_y;
        raw.push(RawPoint {
            x: p2.x,
            th: cur_th,
            y: cur_y,
        });
    }

    let mut support_points = Vec::new();
    let mut tx = 0.0;
    for (i, s) in supports.iter().enumerate() {
        if *s != SupportType::Free {
            support_points.push((tx, *s));
        }
        if i < spans.len() {
            tx += spans[i];
        }
    }

    let mut c1 = 0.0;
    let mut c2 = 0.0;
    if let Some(&(first_x, first_type)) = support_points.first() {
        if first_type == SupportType::Fixed {
            let (th, y) = raw_at(&raw, first_x);
            c1 = -th;
            c2 = -y - c1 * first_x;
        } else if support_points.len() >= 2 {
            let (x1, _) = support_points[0];
            let (x2, _) = support_points[support_points.len() - 1];
            let (_, y1) = raw_at(&raw, x1);
            let (_, y2) = raw_at(&raw, x2);
            c1 = -(y2 - y1) / (x2 - x1);
            c2 = -y1 - c1 * x1;
        } else {
            let (_, y) = raw_at(&raw, first_x);
            c2 = -y;
        }
    }

    raw.iter()
        .map(|p| DiagramSample {
            x: p.x,
            y: p.y + c1 * p.x + c2,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::diagram::sample_diagrams;
    use crate::analysis::loads::clip_to_spans;
    use crate::model::{BeamModel, Load};
    use crate::units::E_STEEL;

    fn deflection_at(data: &[DiagramSample], x: f64) -> f64 {
        data.iter()
            .map(|d| (d, (d.x - x).abs()))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .map(|(d, _)| d.y)
            .unwrap()
    }

    fn section() -> SectionProperties {
        // Roughly an H-300x150 about the strong axis
        SectionProperties::new(E_STEEL, 7.21e7, 4.81e5)
    }

    #[test]
    fn test_simple_beam_midspan_deflection() {
        // delta = 5wL^4 / (384 EI), downward positive under phi = -M/EI
        let model = BeamModel::simple_span(6.0).with_load(Load::distributed(10.0, 0.0, 6.0));
        let loads = clip_to_spans(&model);
        let (_, moment) = sample_diagrams(&model.spans, &loads, &[0.0, 0.0]);
        let s = section();
        let defl = integrate_deflection(&moment, &model.spans, &model.supports, &s);

        let w_nmm = 10.0; // kN/m == N/mm
        let l_mm = 6000.0_f64;
        let expected = 5.0 * w_nmm * l_mm.powi(4) / (384.0 * s.ei());
        let got = deflection_at(&defl, 3.0);
        assert!((got - expected).abs() / expected.abs() < 1e-3);
    }

    #[test]
    fn test_zero_deflection_at_both_supports() {
        let model = BeamModel::simple_span(6.0).with_load(Load::point(10.0, 2.0));
        let loads = clip_to_spans(&model);
        let (_, moment) = sample_diagrams(&model.spans, &loads, &[0.0, 0.0]);
        let defl = integrate_deflection(&moment, &model.spans, &model.supports, &section());
        assert!(deflection_at(&defl, 0.0).abs() < 1e-6);
        assert!(deflection_at(&defl, 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_cantilever_tip_deflection() {
        // delta = PL^3 / (3 EI) at the free tip, downward positive
        let model = BeamModel::cantilever(3.0).with_load(Load::point(10.0, 3.0));
        let loads = clip_to_spans(&model);
        // Fixed root carries -PL
        let (_, moment) = sample_diagrams(&model.spans, &loads, &[-30.0, 0.0]);
        let s = section();
        let defl = integrate_deflection(&moment, &model.spans, &model.supports, &s);

        let p_n = 10.0e3;
        let l_mm = 3000.0_f64;
        let expected = p_n * l_mm.powi(3) / (3.0 * s.ei());
        let got = deflection_at(&defl, 3.0);
        assert!((got - expected).abs() / expected.abs() < 1e-3);
        // Root stays put
        assert!(deflection_at(&defl, 0.0).abs() < 1e-6);
    }
}
