#![cfg(feature = "serde")]

mod support;

use logspiral_facets::{
    config::RunConfig,
    errors::{InvalidSpec, SpiralError},
    io::IoError,
    spiral::SpiralSpec,
};

#[test]
fn default_run_matches_reference() {
    let config = RunConfig::default();
    assert_eq!(config.spiral, support::reference_spec());
    assert_eq!(config.facet_count, 12);

    let (params, sampling) = config.run().unwrap();
    assert_eq!(params, support::reference_params());
    assert_eq!(sampling, support::reference_sampling());
}

#[test]
fn json_overrides_fields() {
    let config = RunConfig::from_json(
        r#"{ "spiral": { "min_pitch": 5.0, "max_pitch": 20.0, "target_arc_length": 120.0 },
             "facet_count": 30 }"#,
    )
    .unwrap();
    assert_eq!(config.spiral, SpiralSpec::new(5.0, 20.0, 120.0));
    assert_eq!(config.facet_count, 30);

    let (_, sampling) = config.run().unwrap();
    assert_eq!(sampling.facets.len(), 30);
}

#[test]
fn missing_fields_use_defaults() {
    let config = RunConfig::from_json(r#"{ "facet_count": 4 }"#).unwrap();
    assert_eq!(config.spiral, SpiralSpec::default());
    assert_eq!(config.facet_count, 4);
}

#[test]
fn bad_json_is_reported() {
    let err = RunConfig::from_json("{ facet_count: }").unwrap_err();
    assert!(matches!(err, IoError::Json(_)), "{err}");
}

#[test]
fn invalid_spec_never_reaches_sampler() {
    let config = RunConfig {
        spiral: SpiralSpec::new(10.0, 5.0, 100.0),
        facet_count: 0,
    };
    assert!(matches!(
        config.run().unwrap_err(),
        SpiralError::InvalidSpec(InvalidSpec::PitchOrder { .. })
    ));
}

#[test]
fn zero_facets_fail_after_solving() {
    let config = RunConfig {
        facet_count: 0,
        ..RunConfig::default()
    };
    assert_eq!(
        config.run().unwrap_err(),
        SpiralError::InvalidSpec(InvalidSpec::FacetCount(0))
    );
}
