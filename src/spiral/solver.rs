//! Solving for the growth rate.
//!
//! Over one revolution the center-line arc length has the closed form
//!
//! ```text
//! L_c(b) = √(1+b²) · (s_max − s_min)/(2b) · (e^(2πb)+1)/(e^(2πb)−1)
//! ```
//!
//! which decreases strictly from +∞ (b → 0) towards `(s_max − s_min)/2`
//! (b → ∞). Solving `L_c(b) = L` on [`GROWTH_RATE_BRACKET`] gives `b`, and the
//! pitch constraints then fix
//!
//! ```text
//! a     = s_min / (e^(2πb) − 1)
//! θ_end = ln(s_max / s_min) / b
//! ```

use super::{SpiralParams, SpiralSpec};
use crate::errors::{InvalidSpec, SolverError, SpiralError};
use crate::float_types::{Real, TAU, approx_eq_rel};
use crate::roots::{Bracket, Brent, RootFinder};

/// Search interval for `b`. The lower end excludes zero, where `L_c` blows up;
/// the upper end keeps `e^(2πb)` around 535, far from overflow.
pub const GROWTH_RATE_BRACKET: (Real, Real) = (1e-6, 1.0);

/// Sweeps shorter than this (radians) collapse every facet onto a line.
pub const MIN_SWEEP_ANGLE: Real = 1e-9;

/// Sweeps longer than this many revolutions are rejected.
pub const MAX_SWEEP_TURNS: Real = 1000.0;

/// Closed-form one-revolution arc length `L_c(b)` for the given pitches.
///
/// `e^(2πb) − 1` is evaluated with `exp_m1` so small `b` keeps its precision.
pub fn center_arc_length(spec: &SpiralSpec, growth_rate: Real) -> Real {
    let b = growth_rate;
    let growth_m1 = (TAU * b).exp_m1();
    (1.0 + b * b).sqrt() * (spec.max_pitch - spec.min_pitch) / (2.0 * b) * (growth_m1 + 2.0)
        / growth_m1
}

/// Solves the spiral for `(min_pitch, max_pitch, target_arc_length)` with [`Brent`].
///
/// # Example
/// ```
/// let params = logspiral_facets::spiral::solve(12.0, 66.0, 200.0).unwrap();
/// assert!(params.growth_rate() > 0.0 && params.growth_rate() < 1.0);
/// ```
pub fn solve(
    min_pitch: Real,
    max_pitch: Real,
    target_arc_length: Real,
) -> Result<SpiralParams, SpiralError> {
    solve_spec(
        &SpiralSpec::new(min_pitch, max_pitch, target_arc_length),
        &Brent::default(),
    )
}

pub(super) fn solve_spec<R: RootFinder>(
    spec: &SpiralSpec,
    finder: &R,
) -> Result<SpiralParams, SpiralError> {
    validate(spec)?;

    let (lower, upper) = GROWTH_RATE_BRACKET;
    let bracket = Bracket::new(lower, upper)?;
    let growth_rate = finder.find_root(
        |b| center_arc_length(spec, b) - spec.target_arc_length,
        bracket,
    )?;

    let arc_length = center_arc_length(spec, growth_rate);
    if !approx_eq_rel(arc_length, spec.target_arc_length) {
        return Err(SolverError::ArcLengthMismatch {
            growth_rate,
            arc_length,
            target: spec.target_arc_length,
        }
        .into());
    }

    let scale_factor = spec.min_pitch / (TAU * growth_rate).exp_m1();
    let sweep_angle = spec.pitch_ratio().ln() / growth_rate;

    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(SolverError::DegenerateScale {
            growth_rate,
            scale_factor,
        }
        .into());
    }
    if !sweep_angle.is_finite()
        || sweep_angle < MIN_SWEEP_ANGLE
        || sweep_angle > MAX_SWEEP_TURNS * TAU
    {
        return Err(SolverError::DegenerateSweep { sweep_angle }.into());
    }

    tracing::debug!(
        growth_rate,
        scale_factor,
        sweep_angle,
        arc_length,
        bracket_width = bracket.width(),
        "solved spiral"
    );

    Ok(SpiralParams {
        spec: *spec,
        growth_rate,
        scale_factor,
        sweep_angle,
    })
}

fn validate(spec: &SpiralSpec) -> Result<(), InvalidSpec> {
    for (name, value) in [
        ("min_pitch", spec.min_pitch),
        ("max_pitch", spec.max_pitch),
        ("target_arc_length", spec.target_arc_length),
    ] {
        if !value.is_finite() {
            return Err(InvalidSpec::NonFinite { name, value });
        }
    }
    if spec.min_pitch <= 0.0 {
        return Err(InvalidSpec::NonPositivePitch(spec.min_pitch));
    }
    if spec.max_pitch <= spec.min_pitch {
        return Err(InvalidSpec::PitchOrder {
            min_pitch: spec.min_pitch,
            max_pitch: spec.max_pitch,
        });
    }
    if spec.target_arc_length <= 0.0 {
        return Err(InvalidSpec::NonPositiveArcLength(spec.target_arc_length));
    }
    Ok(())
}
