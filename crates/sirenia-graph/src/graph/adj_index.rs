//! Adjacency index used by [`RowGraph`](super::RowGraph).
//!
//! Rows query their adjacent edges constantly while the viewport scrolls, so the edge indices of
//! every node are packed into one contiguous buffer addressed by per-node offsets.

use super::GraphEdge;

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct AdjIndex {
    pub(in crate::graph) offsets: Vec<usize>,
    pub(in crate::graph) edges: Vec<usize>,
}

impl AdjIndex {
    pub(in crate::graph) fn build(node_count: usize, edges: &[GraphEdge]) -> Self {
        let mut degree = vec![0usize; node_count];
        for e in edges {
            for ix in endpoints(e) {
                degree[ix] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut total = 0usize;
        offsets.push(0);
        for d in &degree {
            total += d;
            offsets.push(total);
        }

        // Fill in edge insertion order so `adjacent` is stable.
        let mut cursor: Vec<usize> = offsets[..node_count].to_vec();
        let mut packed = vec![0usize; total];
        for (edge_ix, e) in edges.iter().enumerate() {
            for ix in endpoints(e) {
                packed[cursor[ix]] = edge_ix;
                cursor[ix] += 1;
            }
        }

        Self {
            offsets,
            edges: packed,
        }
    }

    pub(in crate::graph) fn adjacent(&self, node_ix: usize) -> &[usize] {
        let start = self.offsets[node_ix];
        let end = self.offsets[node_ix + 1];
        &self.edges[start..end]
    }
}

fn endpoints(e: &GraphEdge) -> impl Iterator<Item = usize> {
    e.up_node_index.into_iter().chain(e.down_node_index)
}
