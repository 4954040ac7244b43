//! Pitch-constrained logarithmic spirals `r(θ) = a·e^(bθ)`.

use crate::errors::SpiralError;
use crate::float_types::{Real, TAU};
use crate::roots::{Brent, RootFinder};
use std::fmt;

mod solver;

pub use solver::{GROWTH_RATE_BRACKET, MAX_SWEEP_TURNS, MIN_SWEEP_ANGLE, center_arc_length, solve};

/// What the caller asks for: the pitch at the start and end of the sweep and
/// the arc length of one revolution. All lengths are millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpiralSpec {
    pub min_pitch: Real,
    pub max_pitch: Real,
    pub target_arc_length: Real,
}

impl SpiralSpec {
    pub const fn new(min_pitch: Real, max_pitch: Real, target_arc_length: Real) -> Self {
        Self {
            min_pitch,
            max_pitch,
            target_arc_length,
        }
    }

    /// Ratio of the end pitch to the start pitch.
    pub fn pitch_ratio(&self) -> Real {
        self.max_pitch / self.min_pitch
    }

    /// Solves with the default [`Brent`] root finder.
    pub fn solve(&self) -> Result<SpiralParams, SpiralError> {
        self.solve_with(&Brent::default())
    }

    /// Solves with any bracketed root finder.
    pub fn solve_with<R: RootFinder>(
        &self,
        finder: &R,
    ) -> Result<SpiralParams, SpiralError> {
        solver::solve_spec(self, finder)
    }
}

impl Default for SpiralSpec {
    fn default() -> Self {
        Self::new(12.0, 66.0, 200.0)
    }
}

/// Solved shape of the spiral. Only constructed by the solver, so every
/// instance satisfies `center_arc_length(spec, growth_rate) ≈ target_arc_length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    spec: SpiralSpec,
    growth_rate: Real,
    scale_factor: Real,
    sweep_angle: Real,
}

impl SpiralParams {
    /// `b`
    pub const fn growth_rate(&self) -> Real {
        self.growth_rate
    }

    /// `a`, the edge radius at θ = 0.
    pub const fn scale_factor(&self) -> Real {
        self.scale_factor
    }

    /// `θ_end` in radians.
    pub const fn sweep_angle(&self) -> Real {
        self.sweep_angle
    }

    pub const fn spec(&self) -> &SpiralSpec {
        &self.spec
    }

    /// `r_edge(θ) = a·e^(bθ)`
    pub fn edge_radius(&self, theta: Real) -> Real {
        self.scale_factor * (self.growth_rate * theta).exp()
    }

    /// Midline between the edge and the next turn outwards:
    /// `r_center(θ) = ½·(r_edge(θ) + r_edge(θ + 2π))`
    pub fn center_radius(&self, theta: Real) -> Real {
        0.5 * (self.edge_radius(theta) + self.edge_radius(theta + TAU))
    }

    /// Radial distance to the next turn: `r_edge(θ + 2π) − r_edge(θ)`.
    pub fn pitch_at(&self, theta: Real) -> Real {
        self.edge_radius(theta) * (TAU * self.growth_rate).exp_m1()
    }

    /// Re-evaluates the closed-form one-revolution arc length at the solved growth rate.
    pub fn arc_length(&self) -> Real {
        center_arc_length(&self.spec, self.growth_rate)
    }

    /// Number of full revolutions covered by the sweep.
    pub fn turns(&self) -> Real {
        self.sweep_angle / TAU
    }
}

impl fmt::Display for SpiralParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a = {:.4}, b = {:.4}, θ_end = {:.4}",
            self.scale_factor, self.growth_rate, self.sweep_angle
        )
    }
}
