use sirenia::edges_in_row::{BLOCK_SIZE, EdgesInRowIndex};
use sirenia::graph::{GraphEdge, RowGraph};

fn sorted(edges: Vec<GraphEdge>) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = edges
        .iter()
        .filter_map(|e| e.as_normal_edge())
        .map(|e| (e.up, e.down))
        .collect();
    pairs.sort_unstable();
    pairs
}

fn brute_force(edges: &[GraphEdge], row: usize) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = edges
        .iter()
        .filter_map(|e| e.as_normal_edge())
        .filter(|e| e.passes_through(row))
        .map(|e| (e.up, e.down))
        .collect();
    pairs.sort_unstable();
    pairs
}

fn spread_edges(rows: usize) -> Vec<GraphEdge> {
    let mut edges = Vec::new();
    for up in 0..rows {
        for jump in [1, 3, 17, 150] {
            if up % jump == 0 && up + jump < rows {
                edges.push(GraphEdge::normal(up, up + jump));
            }
        }
        if up % 9 == 0 {
            edges.push(GraphEdge::not_load_commit(up, up));
        }
    }
    edges
}

#[test]
fn matches_brute_force_in_any_query_order() {
    let rows = 5 * BLOCK_SIZE + 13;
    let edges = spread_edges(rows);
    let g = RowGraph::new(rows, edges.clone()).unwrap();
    let index = EdgesInRowIndex::new();

    let mut queries: Vec<usize> = (0..rows).rev().step_by(7).collect();
    queries.extend((0..rows).step_by(5));
    queries.push(rows - 1);
    for row in queries {
        assert_eq!(
            sorted(index.edges_in_row(&g, row)),
            brute_force(&edges, row),
            "row {row}"
        );
    }
}

#[test]
fn adjacent_edges_do_not_pass_through() {
    let g = RowGraph::new(6, [GraphEdge::normal(1, 2), GraphEdge::normal(1, 4)]).unwrap();
    let index = EdgesInRowIndex::new();

    assert!(index.edges_in_row(&g, 1).is_empty());
    assert_eq!(sorted(index.edges_in_row(&g, 2)), vec![(1, 4)]);
    assert_eq!(sorted(index.edges_in_row(&g, 3)), vec![(1, 4)]);
    assert!(index.edges_in_row(&g, 4).is_empty());
}

#[test]
fn checkpoints_fill_up_to_the_queried_block() {
    let rows = 3 * BLOCK_SIZE;
    let g = RowGraph::new(rows, spread_edges(rows)).unwrap();
    let index = EdgesInRowIndex::new();

    index.edges_in_row(&g, 5);
    assert_eq!(index.checkpoint_count(), 1);
    index.edges_in_row(&g, 2 * BLOCK_SIZE + 1);
    assert_eq!(index.checkpoint_count(), 3);
    index.edges_in_row(&g, BLOCK_SIZE);
    assert_eq!(index.checkpoint_count(), 3);
}
