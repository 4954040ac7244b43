//! Discretizing a solved spiral into quadrilateral facets.
//!
//! The sweep `[0, θ_end]` is divided into `facet_count` equal angular steps.
//! At each of the `facet_count + 1` angles the edge curve `r_edge` and the
//! center curve `r_center` are sampled, and consecutive samples are joined
//! into closed panels:
//!
//! ```text
//! edge[i] ── edge[i+1]
//!    │           │
//! center[i] ─ center[i+1]
//! ```

use crate::errors::{InvalidSpec, SpiralError};
use crate::float_types::Real;
use crate::spiral::SpiralParams;
use geo::{Coord, LineString, MultiPolygon, Polygon as GeoPolygon};
use nalgebra::Point2;

/// Vertices per facet outline, including the repeated first vertex.
pub const FACET_VERTICES: usize = 5;

/// One closed panel between two consecutive sample angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub index: usize,
    /// `edge[i], edge[i+1], center[i+1], center[i], edge[i]`
    pub vertices: [Point2<Real>; FACET_VERTICES],
}

impl Facet {
    pub const fn new(
        index: usize,
        edge: (Point2<Real>, Point2<Real>),
        center: (Point2<Real>, Point2<Real>),
    ) -> Self {
        Self {
            index,
            vertices: [edge.0, edge.1, center.1, center.0, edge.0],
        }
    }

    /// The four distinct corners, without the closing vertex.
    pub fn corners(&self) -> &[Point2<Real>] {
        &self.vertices[..FACET_VERTICES - 1]
    }

    /// True when the outline ends on its first vertex.
    pub fn is_closed(&self) -> bool {
        self.vertices[0] == self.vertices[FACET_VERTICES - 1]
    }

    /// Convert to a `geo` polygon (exterior ring only, already closed).
    pub fn to_geo(&self) -> GeoPolygon<Real> {
        let ring: Vec<Coord<Real>> = self
            .vertices
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();
        GeoPolygon::new(LineString::new(ring), vec![])
    }
}

/// Tolerance for comparing two facets vertex by vertex.
impl approx::AbsDiffEq for Facet {
    type Epsilon = <Point2<Real> as approx::AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        <Point2<Real> as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.index == other.index
            && self
                .vertices
                .iter()
                .zip(other.vertices.iter())
                .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

impl approx::RelativeEq for Facet {
    fn default_max_relative() -> Self::Epsilon {
        <Point2<Real> as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.index == other.index
            && self
                .vertices
                .iter()
                .zip(other.vertices.iter())
                .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

/// Everything the sampler produces for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetSampling {
    /// `θ_i = i·θ_end/N`, `i = 0..=N`
    pub angles: Vec<Real>,
    pub edge_points: Vec<Point2<Real>>,
    pub center_points: Vec<Point2<Real>>,
    pub facets: Vec<Facet>,
}

impl FacetSampling {
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// All facets as a `geo` multipolygon, in facet order.
    pub fn to_geo(&self) -> MultiPolygon<Real> {
        MultiPolygon::new(self.facets.iter().map(Facet::to_geo).collect())
    }
}

/// Samples `facet_count + 1` equally spaced angles over the sweep and builds
/// the edge points, center points, and `facet_count` closed facets.
///
/// # Example
/// ```
/// use logspiral_facets::{facets::sample, spiral::solve};
///
/// let params = solve(12.0, 66.0, 200.0).unwrap();
/// let sampling = sample(&params, 12).unwrap();
/// assert_eq!(sampling.edge_points.len(), 13);
/// assert_eq!(sampling.facets.len(), 12);
/// ```
pub fn sample(params: &SpiralParams, facet_count: usize) -> Result<FacetSampling, SpiralError> {
    if facet_count < 1 {
        return Err(InvalidSpec::FacetCount(facet_count).into());
    }

    let sweep = params.sweep_angle();
    let angles: Vec<Real> = (0..=facet_count)
        .map(|i| {
            if i == facet_count {
                sweep
            } else {
                sweep * (i as Real) / (facet_count as Real)
            }
        })
        .collect();

    let polar = |r: Real, theta: Real| Point2::new(r * theta.cos(), r * theta.sin());
    let edge_points: Vec<Point2<Real>> = angles
        .iter()
        .map(|&theta| polar(params.edge_radius(theta), theta))
        .collect();
    let center_points: Vec<Point2<Real>> = angles
        .iter()
        .map(|&theta| polar(params.center_radius(theta), theta))
        .collect();

    let facets: Vec<Facet> = (0..facet_count)
        .map(|i| {
            Facet::new(
                i,
                (edge_points[i], edge_points[i + 1]),
                (center_points[i], center_points[i + 1]),
            )
        })
        .collect();

    tracing::debug!(
        facet_count,
        step = sweep / facet_count as Real,
        "sampled spiral facets"
    );

    Ok(FacetSampling {
        angles,
        edge_points,
        center_points,
        facets,
    })
}

impl SpiralParams {
    /// See [`sample`].
    pub fn sample(&self, facet_count: usize) -> Result<FacetSampling, SpiralError> {
        sample(self, facet_count)
    }
}
