use sirenia::graph::{GraphEdge, GraphEdgeType, NormalEdge};
use sirenia::{ArrowDirection, ArrowResolution, EdgePolicy, GeneratorOptions};

fn default_policy() -> EdgePolicy {
    EdgePolicy::new(&GeneratorOptions::default())
}

#[test]
fn short_edges_are_always_visible() {
    let policy = default_policy();
    let edge = GraphEdge::normal(0, 29);
    assert!((0..=29).all(|row| policy.is_edge_visible_in_row(&edge, row)));
    assert_eq!(policy.arrow_type(&edge, 1), ArrowResolution::None);
    assert_eq!(policy.arrow_type(&edge, 28), ArrowResolution::None);
}

#[test]
fn long_edges_keep_only_their_ends() {
    let policy = default_policy();
    let edge = GraphEdge::normal(10, 40);
    assert!(policy.is_edge_visible_in_row(&edge, 11));
    assert!(!policy.is_edge_visible_in_row(&edge, 12));
    assert!(!policy.is_edge_visible_in_row(&edge, 25));
    assert!(!policy.is_edge_visible_in_row(&edge, 38));
    assert!(policy.is_edge_visible_in_row(&edge, 39));

    assert_eq!(
        policy.arrow_type(&edge, 11),
        ArrowResolution::Arrow(ArrowDirection::Down)
    );
    assert_eq!(
        policy.arrow_type(&edge, 39),
        ArrowResolution::Arrow(ArrowDirection::Up)
    );
    assert_eq!(policy.arrow_type(&edge, 25), ArrowResolution::None);
    assert_eq!(policy.arrow_type(&edge, 10), ArrowResolution::None);
}

#[test]
fn show_long_edges_widens_the_visible_part() {
    let policy = EdgePolicy::new(&GeneratorOptions::show_long_edges());
    let edge = GraphEdge::normal(0, 1200);
    assert!(policy.is_edge_visible_in_row(&edge, 250));
    assert!(!policy.is_edge_visible_in_row(&edge, 251));
    assert!(policy.is_edge_visible_in_row(&edge, 950));
    assert_eq!(
        policy.arrow_type(&edge, 250),
        ArrowResolution::Arrow(ArrowDirection::Down)
    );

    let medium = GraphEdge::normal(0, 500);
    assert!(policy.is_edge_visible_in_row(&medium, 250));
    assert_eq!(policy.arrow_type(&medium, 1), ArrowResolution::None);
}

#[test]
fn medium_edges_get_arrows_next_to_their_ends() {
    let policy = EdgePolicy::new(&GeneratorOptions {
        edge_with_arrow_size: 5,
        ..GeneratorOptions::default()
    });
    let edge = NormalEdge::new(0, 10);
    assert!((0..=10).all(|row| policy.is_normal_edge_visible_in_row(edge, row)));
    assert_eq!(
        policy.normal_arrow_type(edge, 1),
        ArrowResolution::Arrow(ArrowDirection::Down)
    );
    assert_eq!(
        policy.normal_arrow_type(edge, 9),
        ArrowResolution::Arrow(ArrowDirection::Up)
    );
    assert_eq!(policy.normal_arrow_type(edge, 5), ArrowResolution::None);
    assert_eq!(
        policy.normal_arrow_type(NormalEdge::new(0, 4), 1),
        ArrowResolution::None
    );
}

#[test]
fn dangling_edges_point_away_from_their_node() {
    let policy = default_policy();

    let down = GraphEdge::dotted_arrow_down(3);
    assert!(!policy.is_edge_visible_in_row(&down, 4));
    assert_eq!(
        policy.arrow_type(&down, 4),
        ArrowResolution::Arrow(ArrowDirection::Down)
    );
    assert_eq!(policy.arrow_type(&down, 5), ArrowResolution::Unresolved);

    let not_loaded = GraphEdge::not_load_commit(3, 99);
    assert_eq!(
        policy.arrow_type(&not_loaded, 4),
        ArrowResolution::Arrow(ArrowDirection::Down)
    );

    let up = GraphEdge::dotted_arrow_up(3);
    assert_eq!(
        policy.arrow_type(&up, 2),
        ArrowResolution::Arrow(ArrowDirection::Up)
    );
    assert_eq!(policy.arrow_type(&up, 0), ArrowResolution::Unresolved);
}

#[test]
fn normal_typed_dangling_edges_are_unresolved() {
    let policy = default_policy();
    let broken = GraphEdge::new(Some(2), None, None, GraphEdgeType::Normal);
    assert!(!policy.is_edge_visible_in_row(&broken, 3));
    assert_eq!(policy.arrow_type(&broken, 3), ArrowResolution::Unresolved);
    assert_eq!(ArrowResolution::Unresolved.direction(), None);
}

#[test]
fn overlapping_thresholds_report_a_conflict() {
    let options = GeneratorOptions {
        long_edge_size: 4,
        visible_part_size: 2,
        ..GeneratorOptions::default()
    };
    assert!(options.allows_arrow_conflicts());
    let policy = EdgePolicy::new(&options);
    let resolution = policy.arrow_type(&GraphEdge::normal(0, 4), 2);
    assert_eq!(resolution, ArrowResolution::Conflict(ArrowDirection::Down));
    assert_eq!(resolution.direction(), Some(ArrowDirection::Down));
}
