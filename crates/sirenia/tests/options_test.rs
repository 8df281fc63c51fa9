use sirenia::{Error, GeneratorOptions};

#[test]
fn presets() {
    let default = GeneratorOptions::default();
    assert_eq!(default.long_edge_size, 30);
    assert_eq!(default.visible_part_size, 1);
    assert_eq!(default.edge_with_arrow_size, 30);
    assert_eq!(default.cache_size, 100);
    assert_eq!(default.sample_size, 20_000);
    assert!(!default.allows_arrow_conflicts());

    let long = GeneratorOptions::show_long_edges();
    assert_eq!(long.long_edge_size, 1000);
    assert_eq!(long.visible_part_size, 250);
    assert_eq!(long.edge_with_arrow_size, usize::MAX);
    assert_eq!(GeneratorOptions::for_mode(true), long);
    assert_eq!(GeneratorOptions::for_mode(false), default);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let options = GeneratorOptions::from_json_str(r#"{ "long_edge_size": 12 }"#).unwrap();
    assert_eq!(
        options,
        GeneratorOptions {
            long_edge_size: 12,
            ..GeneratorOptions::default()
        }
    );
}

#[test]
fn json_is_validated() {
    assert!(matches!(
        GeneratorOptions::from_json_str(r#"{ "cache_size": 0 }"#),
        Err(Error::InvalidOptions { .. })
    ));
    assert!(matches!(
        GeneratorOptions::from_json_str("{ not json"),
        Err(Error::Json(_))
    ));
}

#[test]
fn tiny_arrow_threshold_allows_conflicts() {
    let options = GeneratorOptions {
        edge_with_arrow_size: 2,
        ..GeneratorOptions::default()
    };
    assert!(options.allows_arrow_conflicts());
}
