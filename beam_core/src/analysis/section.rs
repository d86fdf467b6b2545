//! Simple-beam section forces.
//!
//! Evaluates shear and moment of a span treated as an independent simple
//! beam (no end moments), from its clipped loads and left reaction. The
//! [`Side`] flag decides whether a concentrated load sitting exactly at the
//! section is counted, which is what defines the jump convention at
//! discontinuities.

use crate::analysis::loads::{load_integral, SpanLoad};
use crate::model::LoadKind;
use crate::units::POSITION_EPS;

/// Which limit to evaluate at a discontinuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Pre-load value: a point/moment load exactly at x is excluded
    Left,
    /// Post-load value: a point/moment load exactly at x is included
    Right,
}

/// Shear and moment at one section of a simple beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionForce {
    pub q: f64,
    pub m: f64,
}

/// Evaluate `{Q, M}` at local position `x`.
///
/// `ra` is the span's simple-beam left reaction applied at the origin.
/// Distributed and trapezoid loads are clipped to `[pos, min(x, pos+length)]`
/// with the trapezoid end value interpolated at the clip point. Moment loads
/// at or before `x` add their couple directly to `M` and leave `Q` alone.
pub fn section_force(x: f64, loads: &[SpanLoad], ra: f64, side: Side) -> SectionForce {
    let mut q = ra;
    let mut m = ra * x;

    for l in loads {
        if l.pos > x + POSITION_EPS {
            continue;
        }
        if l.kind.is_concentrated() && (l.pos - x).abs() < POSITION_EPS && side == Side::Left {
            continue;
        }

        let end_pos = l.pos + l.length;
        let effective_len = (x.min(end_pos) - l.pos).max(0.0);
        if effective_len < POSITION_EPS && !l.kind.is_concentrated() {
            continue;
        }

        if l.kind == LoadKind::Moment {
            m += l.mag;
        } else {
            let mut clipped = SpanLoad {
                length: effective_len,
                ..l.clone()
            };
            if l.kind == LoadKind::Trapezoid {
                clipped.mag_end = l.mag + (l.mag_end - l.mag) * effective_len / l.length;
            }
            let r = load_integral(&clipped);
            q -= r.total_force;
            m -= x * r.total_force - r.moment_about_origin;
        }
    }

    SectionForce { q, m }
}
