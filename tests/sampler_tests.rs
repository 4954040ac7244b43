mod support;

use approx::assert_relative_eq;
use geo::Area;
use logspiral_facets::{
    errors::{InvalidSpec, SpiralError},
    facets::{FACET_VERTICES, sample},
    float_types::{Real, TAU},
    spiral::solve,
};
use nalgebra::Point2;

#[test]
fn reference_sampling_sizes() {
    let sampling = support::reference_sampling();
    assert_eq!(sampling.angles.len(), 13);
    assert_eq!(sampling.edge_points.len(), 13);
    assert_eq!(sampling.center_points.len(), 13);
    assert_eq!(sampling.facets.len(), 12);
    assert_eq!(sampling.facet_count(), 12);
}

#[test]
fn first_edge_point_is_scale_factor_on_x_axis() {
    let params = support::reference_params();
    let sampling = params.sample(12).unwrap();
    assert_eq!(sampling.edge_points[0], Point2::new(params.scale_factor(), 0.0));
}

#[test]
fn angles_span_the_sweep_evenly() {
    let params = support::reference_params();
    let sampling = params.sample(12).unwrap();
    assert_eq!(sampling.angles[0], 0.0);
    assert_eq!(sampling.angles[12], params.sweep_angle());
    let step = params.sweep_angle() / 12.0;
    for pair in sampling.angles.windows(2) {
        assert!(support::approx_eq(pair[1] - pair[0], step, 1e-12));
    }
}

#[test]
fn points_follow_edge_and_center_radii() {
    let params = support::reference_params();
    let sampling = params.sample(12).unwrap();
    let expansion = (TAU * params.growth_rate()).exp();
    for (i, &theta) in sampling.angles.iter().enumerate() {
        let edge = sampling.edge_points[i];
        let center = sampling.center_points[i];
        let r_edge = params.scale_factor() * (params.growth_rate() * theta).exp();

        assert_relative_eq!(edge.coords.norm(), r_edge, max_relative = 1e-12);
        assert_relative_eq!(
            center.coords.norm(),
            0.5 * r_edge * (1.0 + expansion),
            max_relative = 1e-12
        );
        // same polar angle on both curves
        assert_relative_eq!(
            edge.y.atan2(edge.x).rem_euclid(TAU),
            theta.rem_euclid(TAU),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            center.x * edge.y - center.y * edge.x,
            0.0,
            epsilon = 1e-9
        );
    }
}

#[test]
fn facets_are_closed_and_ordered() {
    let sampling = support::reference_sampling();
    for (i, facet) in sampling.facets.iter().enumerate() {
        assert_eq!(facet.index, i);
        assert_eq!(facet.vertices.len(), FACET_VERTICES);
        assert!(facet.is_closed());
        assert_eq!(facet.vertices[0], facet.vertices[4]);

        assert_eq!(facet.vertices[0], sampling.edge_points[i]);
        assert_eq!(facet.vertices[1], sampling.edge_points[i + 1]);
        assert_eq!(facet.vertices[2], sampling.center_points[i + 1]);
        assert_eq!(facet.vertices[3], sampling.center_points[i]);
        assert_eq!(facet.corners().len(), 4);
    }
}

#[test]
fn adjacent_facets_share_a_side() {
    let sampling = support::reference_sampling();
    for pair in sampling.facets.windows(2) {
        assert_eq!(pair[0].vertices[1], pair[1].vertices[0]);
        assert_eq!(pair[0].vertices[2], pair[1].vertices[3]);
    }
}

#[test]
fn single_facet_spans_full_sweep() {
    let params = support::reference_params();
    let sampling = sample(&params, 1).unwrap();
    assert_eq!(sampling.edge_points.len(), 2);
    assert_eq!(sampling.center_points.len(), 2);
    assert_eq!(sampling.facets.len(), 1);

    let theta = params.sweep_angle();
    let r = params.edge_radius(theta);
    let facet = &sampling.facets[0];
    assert_eq!(facet.vertices[0], Point2::new(params.scale_factor(), 0.0));
    assert_relative_eq!(facet.vertices[1].x, r * theta.cos(), epsilon = 1e-9);
    assert_relative_eq!(facet.vertices[1].y, r * theta.sin(), epsilon = 1e-9);
    assert!(facet.is_closed());
}

#[test]
fn zero_facets_is_invalid() {
    let params = support::reference_params();
    assert_eq!(
        sample(&params, 0).unwrap_err(),
        SpiralError::InvalidSpec(InvalidSpec::FacetCount(0))
    );
}

#[test]
fn facet_counts_scale() {
    let params = support::reference_params();
    for n in [1usize, 2, 7, 12, 100] {
        let sampling = params.sample(n).unwrap();
        assert_eq!(sampling.edge_points.len(), n + 1);
        assert_eq!(sampling.center_points.len(), n + 1);
        assert_eq!(sampling.facets.len(), n);
        assert!(sampling.facets.iter().all(|f| f.is_closed()));
    }
}

#[test]
fn repeated_runs_are_identical() {
    let first = solve(12.0, 66.0, 200.0).unwrap().sample(12).unwrap();
    let second = solve(12.0, 66.0, 200.0).unwrap().sample(12).unwrap();
    assert_eq!(first, second);
    for (a, b) in first.facets.iter().zip(second.facets.iter()) {
        assert_relative_eq!(*a, *b);
    }
}

#[test]
fn finer_sampling_converges_in_area() {
    // Quadrilaterals under-cover the curved panel, so area grows with facet count
    // and settles once the chords hug the curves.
    let params = support::reference_params();
    let area = |n: usize| -> Real { params.sample(n).unwrap().to_geo().unsigned_area() };
    let coarse = area(12);
    let fine = area(240);
    let finer = area(480);
    assert!(coarse > 0.0);
    assert!(fine > coarse);
    assert!(support::rel_eq(fine, finer, 1e-3), "{fine} vs {finer}");
}

#[test]
fn geo_polygon_matches_facet() {
    let sampling = support::reference_sampling();
    let facet = &sampling.facets[3];
    let polygon = facet.to_geo();
    let ring: Vec<_> = polygon.exterior().coords().collect();
    assert_eq!(ring.len(), FACET_VERTICES);
    assert_eq!(ring[0].x, facet.vertices[0].x);
    assert_eq!(ring[2].y, facet.vertices[2].y);
    assert!(polygon.unsigned_area() > 0.0);
}
