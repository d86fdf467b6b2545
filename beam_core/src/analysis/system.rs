//! Support-moment system assembly and solution.
//!
//! The unknowns are the bending moments over the participating supports.
//! Interior rows are three-moment compatibility equations; end rows either
//! pin the moment to its statically known cantilever value (pin, roller) or
//! enforce zero end rotation (fixed). Overhangs outside the supported chain
//! are statically determinate and feed in as known end moments.

use crate::analysis::flexibility::calc_phi;
use crate::analysis::loads::{load_integral, SpanLoad};
use crate::model::{BeamModel, LoadKind, SupportType};

/// Statically determinate end moments from overhang loads.
///
/// Returns `(m_start, m_end)`: the beam moment at the first and last
/// participating support due to loads hanging outside the supported chain.
/// Loads between supports contribute nothing here.
pub fn overhang_moments(
    model: &BeamModel,
    span_loads: &[Vec<SpanLoad>],
    idx_start: usize,
    idx_end: usize,
) -> (f64, f64) {
    let spans = &model.spans;

    let mut m_start = 0.0;
    for i in 0..idx_start {
        let dist_to_support: f64 = spans[i + 1..idx_start].iter().sum();
        for l in &span_loads[i] {
            if l.kind == LoadKind::Moment {
                m_start += l.mag;
            } else {
                let r = load_integral(l);
                let xc = if r.total_force != 0.0 {
                    r.moment_about_origin / r.total_force
                } else {
                    0.0
                };
                let arm = (spans[i] - xc) + dist_to_support;
                m_start -= r.total_force * arm;
            }
        }
    }

    let mut m_end = 0.0;
    for i in idx_end..spans.len() {
        let dist_to_support: f64 = spans[idx_end..i].iter().sum();
        for l in &span_loads[i] {
            if l.kind == LoadKind::Moment {
                m_end -= l.mag;
            } else {
                let r = load_integral(l);
                let xc = if r.total_force != 0.0 {
                    r.moment_about_origin / r.total_force
                } else {
                    0.0
                };
                m_end -= r.total_force * (dist_to_support + xc);
            }
        }
    }

    (m_start, m_end)
}

/// Gaussian elimination with partial pivoting, in place.
pub fn solve_linear_system(a: &mut [Vec<f64>], b: &mut [f64]) -> Vec<f64> {
    let n = b.len();
    for i in 0..n {
        let mut max_el = a[i][i].abs();
        let mut max_row = i;
        for k in i + 1..n {
            if a[k][i].abs() > max_el {
                max_el = a[k][i].abs();
                max_row = k;
            }
        }
        if max_row != i {
            a.swap(i, max_row);
            b.swap(i, max_row);
        }
        for k in i + 1..n {
            let c = -a[k][i] / a[i][i];
            for j in i..n {
                if i == j {
                    a[k][j] = 0.0;
                } else {
                    a[k][j] += c * a[i][j];
                }
            }
            b[k] += c * b[i];
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for k in i + 1..n {
            sum += a[i][k] * x[k];
        }
        x[i] = (b[i] - sum) / a[i][i];
    }
    x
}

/// Solve for the bending moment at every node.
///
/// Returns a vector of `spans.len() + 1` node moments; nodes outside the
/// participating chain stay zero. With a single participating support the
/// moment there is just the sum of both overhang moments.
pub fn node_moments(
    model: &BeamModel,
    span_loads: &[Vec<SpanLoad>],
    idx_start: usize,
    idx_end: usize,
) -> Vec<f64> {
    let spans = &model.spans;
    let (m_start, m_end) = overhang_moments(model, span_loads, idx_start, idx_end);

    let num_nodes = idx_end - idx_start + 1;
    let mut moments = vec![0.0; spans.len() + 1];

    if num_nodes <= 1 {
        moments[idx_start] = m_start + m_end;
        return moments;
    }

    let mut a = vec![vec![0.0; num_nodes]; num_nodes];
    let mut b = vec![0.0; num_nodes];

    for k in 0..num_nodes {
        let node_idx = idx_start + k;
        let support = model.supports[node_idx];

        let phi_from_left = if node_idx > idx_start {
            let left = node_idx - 1;
            calc_phi(spans[left], &span_loads[left]).phi_r
        } else {
            0.0
        };
        let phi_from_right = if node_idx < idx_end {
            calc_phi(spans[node_idx], &span_loads[node_idx]).phi_l
        } else {
            0.0
        };

        if k == 0 {
            if support == SupportType::Fixed {
                a[k][k] = 2.0 * spans[node_idx];
                a[k][k + 1] = spans[node_idx];
                b[k] = -6.0 * phi_from_right;
            } else {
                a[k][k] = 1.0;
                b[k] = m_start;
            }
        } else if k == num_nodes - 1 {
            if support == SupportType::Fixed {
                let len = spans[node_idx - 1];
                a[k][k - 1] = len;
                a[k][k] = 2.0 * len;
                b[k] = -6.0 * phi_from_left;
            } else {
                a[k][k] = 1.0;
                b[k] = m_end;
            }
        } else {
            a[k][k - 1] = spans[node_idx - 1];
            a[k][k] = 2.0 * (spans[node_idx - 1] + spans[node_idx]);
            a[k][k + 1] = spans[node_idx];
            b[k] = -6.0 * (phi_from_left + phi_from_right);
        }
    }

    let solution = solve_linear_system(&mut a, &mut b);
    moments[idx_start..idx_start + num_nodes].copy_from_slice(&solution);
    moments
}
