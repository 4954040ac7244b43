//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use logspiral_facets::{
    facets::FacetSampling,
    float_types::Real,
    spiral::{SpiralParams, SpiralSpec},
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Relative comparison, for quantities in the hundreds of millimeters.
pub fn rel_eq(a: Real, b: Real, rel: Real) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs())
}

/// The reference run: pitch 12 → 66 mm over a 200 mm revolution.
pub fn reference_spec() -> SpiralSpec {
    SpiralSpec::new(12.0, 66.0, 200.0)
}

pub fn reference_params() -> SpiralParams {
    reference_spec().solve().expect("reference spec solves")
}

/// The reference run cut into 12 facets.
pub fn reference_sampling() -> FacetSampling {
    reference_params().sample(12).expect("12 facets")
}
