//! Spiral errors

use crate::float_types::Real;

/// Top-level error returned by [`crate::spiral::solve`] and [`crate::facets::sample`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpiralError {
    /// Out-of-domain parameters, detected before any numerical work
    #[error("invalid spiral spec: {0}")]
    InvalidSpec(#[from] InvalidSpec),
    /// The growth rate could not be solved for
    #[error("solver failed: {0}")]
    Solver(#[from] SolverError),
}

/// The offending parameter of a rejected spec.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidSpec {
    /// (NonPositivePitch) `min_pitch` must be > 0
    #[error("(NonPositivePitch) min_pitch must be positive, got {0}")]
    NonPositivePitch(Real),
    /// (PitchOrder) `max_pitch` must exceed `min_pitch`
    #[error("(PitchOrder) max_pitch ({max_pitch}) must be greater than min_pitch ({min_pitch})")]
    PitchOrder { min_pitch: Real, max_pitch: Real },
    /// (NonPositiveArcLength) `target_arc_length` must be > 0
    #[error("(NonPositiveArcLength) target_arc_length must be positive, got {0}")]
    NonPositiveArcLength(Real),
    /// (NonFinite) a parameter is NaN or infinite
    #[error("(NonFinite) {name} is not finite: {value}")]
    NonFinite { name: &'static str, value: Real },
    /// (FacetCount) at least one facet is required
    #[error("(FacetCount) facet_count must be at least 1, got {0}")]
    FacetCount(usize),
}

/// Root-finding failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    /// (NoBracket) the function does not change sign over the bracket
    #[error("(NoBracket) f({lower}) = {f_lower} and f({upper}) = {f_upper} have the same sign")]
    NoBracket {
        lower: Real,
        upper: Real,
        f_lower: Real,
        f_upper: Real,
    },
    /// (NotConverged) iteration budget exhausted or a non-finite evaluation
    #[error("(NotConverged) no root after {iterations} iterations (last estimate {last})")]
    NotConverged { iterations: usize, last: Real },
    /// (ArcLengthMismatch) the returned root does not reproduce the target arc length
    #[error("(ArcLengthMismatch) L_c({growth_rate}) = {arc_length}, expected {target}")]
    ArcLengthMismatch {
        growth_rate: Real,
        arc_length: Real,
        target: Real,
    },
    /// (DegenerateScale) the derived scale factor is not a positive finite radius
    #[error("(DegenerateScale) growth rate {growth_rate} gives scale factor {scale_factor}")]
    DegenerateScale { growth_rate: Real, scale_factor: Real },
    /// (DegenerateSweep) the derived sweep angle is unusable
    #[error("(DegenerateSweep) derived sweep angle {sweep_angle} rad is out of range")]
    DegenerateSweep { sweep_angle: Real },
}
