//! Solve orchestration.
//!
//! Runs the full pipeline for one model: clip loads to spans, solve the
//! support-moment system, sample the diagrams, integrate deflection, then
//! derive extrema and reactions. The result is a pure function of the model
//! and section, so repeated solves of the same input agree exactly.

use crate::analysis::deflection::integrate_deflection;
use crate::analysis::diagram::sample_diagrams;
use crate::analysis::extrema::{global_bounds, reactions, span_bounds};
use crate::analysis::loads::clip_to_spans;
use crate::analysis::results::{RawSolution, SolveResult};
use crate::analysis::system::node_moments;
use crate::errors::EngineResult;
use crate::model::{BeamModel, SectionProperties};

/// Solve a beam model for diagrams, extrema and reactions.
///
/// A model with no participating support yields [`SolveResult::empty`]
/// rather than an error, so a front end mid-edit can still render.
pub fn solve(model: &BeamModel, section: &SectionProperties) -> EngineResult<SolveResult> {
    model.validate()?;

    let participating = model.participating_supports();
    let (idx_start, idx_end) = match (participating.first(), participating.last()) {
        (Some(&s), Some(&e)) => (s, e),
        _ => return Ok(SolveResult::empty()),
    };

    let span_loads = clip_to_spans(model);
    let moments = node_moments(model, &span_loads, idx_start, idx_end);
    let (shear, moment) = sample_diagrams(&model.spans, &span_loads, &moments);
    let deflection = integrate_deflection(&moment, &model.spans, &model.supports, section);

    let span_bounds = span_bounds(model, &span_loads, &moments, &shear, &moment, &deflection);
    let reactions = reactions(model, &span_loads, &moments);
    let bounds = global_bounds(&shear, &moment, &deflection, section);

    Ok(SolveResult {
        shear,
        moment,
        deflection,
        span_bounds,
        reactions,
        bounds,
        raw: Some(RawSolution {
            spans: model.spans.clone(),
            span_loads,
            node_moments: moments,
            supports: model.supports.clone(),
        }),
    })
}
