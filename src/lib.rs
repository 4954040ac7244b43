//! Logarithmic spirals whose radial pitch grows from a minimum to a maximum
//! over a prescribed one-revolution arc length, cut into closed quadrilateral
//! **facets** for plotting and CAD export.
//!
//! The pipeline is two pure functions:
//! 1. [`spiral::solve`] finds the growth rate `b` of `r(θ) = a·e^(bθ)` by
//!    bracketed root finding, then derives `a` and the sweep angle.
//! 2. [`facets::sample`] samples the edge and center curves at equal angular
//!    steps and joins them into `facet_count` closed 5-point outlines.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export/import of facets
//! - **svg-io**: plot facet outlines as SVG
//! - **serde**: JSON run files
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **bin**: the `logspiral` demo binary (pulls in `tracing-subscriber`)

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod facets;
pub mod float_types;
pub mod io;
pub mod roots;
pub mod spiral;

#[cfg(feature = "serde")]
pub mod config;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::SpiralError;
pub use facets::{Facet, FacetSampling, sample};
pub use spiral::{SpiralParams, SpiralSpec, solve};
