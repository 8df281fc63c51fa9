//! Helper algorithms over any [`LinearGraph`].

use super::{EdgeFilter, LinearGraph};

/// Rows directly above `node_index` connected to it by a normal edge, in adjacency order.
pub fn up_nodes<G: LinearGraph + ?Sized>(g: &G, node_index: usize) -> Vec<usize> {
    g.adjacent_edges(node_index, EdgeFilter::NormalUp)
        .iter()
        .filter_map(|e| e.up_node_index)
        .collect()
}

/// Rows directly below `node_index` connected to it by a normal edge, in adjacency order.
pub fn down_nodes<G: LinearGraph + ?Sized>(g: &G, node_index: usize) -> Vec<usize> {
    g.adjacent_edges(node_index, EdgeFilter::NormalDown)
        .iter()
        .filter_map(|e| e.down_node_index)
        .collect()
}

/// Nodes without a normal edge above them (branch heads), in row order.
pub fn head_nodes<G: LinearGraph + ?Sized>(g: &G) -> Vec<usize> {
    (0..g.node_count())
        .filter(|&ix| g.adjacent_edges(ix, EdgeFilter::NormalUp).is_empty())
        .collect()
}
