use sirenia_graph::alg;
use sirenia_graph::{Error, GraphEdge, GraphLayout, RowGraph, SimpleLayout};

fn two_branches() -> RowGraph {
    // Heads 0 and 1 both merge into 2; 2 continues to 3.
    RowGraph::new(
        4,
        [
            GraphEdge::normal(0, 2),
            GraphEdge::normal(1, 2),
            GraphEdge::normal(2, 3),
            GraphEdge::dotted_arrow_up(1),
        ],
    )
    .unwrap()
}

#[test]
fn up_and_down_nodes() {
    let g = two_branches();
    assert_eq!(alg::up_nodes(&g, 2), vec![0, 1]);
    assert_eq!(alg::down_nodes(&g, 2), vec![3]);
    assert!(alg::up_nodes(&g, 1).is_empty());
    assert!(alg::down_nodes(&g, 3).is_empty());
}

#[test]
fn head_nodes_ignore_dangling_edges() {
    let g = two_branches();
    assert_eq!(alg::head_nodes(&g), vec![0, 1]);
}

#[test]
fn simple_layout_lists_distinct_heads() {
    let layout = SimpleLayout::new(vec![0, 1, 0, 0], vec![0, 1, 0, 0]).unwrap();
    assert_eq!(layout.head_node_indices(), &[0, 1]);
    assert_eq!(layout.layout_index(1), 1);
    assert_eq!(layout.one_of_head_node_index(3), 0);

    let flat = SimpleLayout::flat(3);
    assert_eq!(flat.head_node_indices(), &[0, 1, 2]);
    assert_eq!(flat.layout_index(2), 0);
}

#[test]
fn simple_layout_checks_its_vectors() {
    assert_eq!(
        SimpleLayout::new(vec![0, 1, 0], vec![0, 1]).unwrap_err(),
        Error::LayoutLengthMismatch {
            layout_indices: 3,
            head_of: 2
        }
    );
    assert_eq!(
        SimpleLayout::new(vec![0, 0], vec![0, 2]).unwrap_err(),
        Error::HeadOutOfRange {
            node_index: 1,
            head: 2,
            node_count: 2
        }
    );
}

#[test]
fn simple_layout_defaults_past_its_end() {
    let layout = SimpleLayout::new(vec![3, 3], vec![0, 0]).unwrap();
    assert_eq!(layout.node_count(), 2);
    assert_eq!(layout.layout_index(5), 0);
    assert_eq!(layout.one_of_head_node_index(5), 5);
}
