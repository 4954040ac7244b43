#![cfg(feature = "svg-io")]

mod support;

#[test]
fn one_path_per_facet() {
    let sampling = support::reference_sampling();
    let svg = sampling.to_svg();

    assert!(svg.contains("<svg"), "{svg}");
    assert_eq!(svg.matches("<path").count(), 12);
    assert!(svg.contains("viewBox"));
    assert!(svg.contains("Log spiral in 12 facets"));
    assert!(svg.contains("scale(1,-1)"));
}

#[test]
fn paths_follow_facet_count() {
    let params = support::reference_params();
    for n in [1usize, 3, 40] {
        let svg = params.sample(n).unwrap().to_svg();
        assert_eq!(svg.matches("<path").count(), n);
        assert!(svg.contains(&format!("Log spiral in {n} facets")));
    }
}
