//! Normal edges crossing a row.
//!
//! The set of crossing edges changes only at node rows, so it is rebuilt from checkpoints taken
//! every [`BLOCK_SIZE`] rows. Checkpoints are filled lazily and in order; a query walks at most
//! `BLOCK_SIZE - 1` rows past the nearest one.

use hashbrown::HashSet;
use rustc_hash::FxBuildHasher;
use sirenia_graph::{EdgeFilter, GraphEdge, LinearGraph};
use std::cell::RefCell;

pub const BLOCK_SIZE: usize = 70;

type EdgeSet = HashSet<GraphEdge, FxBuildHasher>;

#[derive(Debug, Default)]
pub struct EdgesInRowIndex {
    // checkpoints[k] holds the edges crossing row k * BLOCK_SIZE.
    checkpoints: RefCell<Vec<Vec<GraphEdge>>>,
}

impl EdgesInRowIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every normal edge with `up < row < down`, visible or not. Order is unspecified.
    pub fn edges_in_row<G: LinearGraph + ?Sized>(&self, graph: &G, row: usize) -> Vec<GraphEdge> {
        let block = row / BLOCK_SIZE;
        let start = block * BLOCK_SIZE;
        let mut edges: EdgeSet = {
            let mut checkpoints = self.checkpoints.borrow_mut();
            fill_checkpoints(graph, &mut checkpoints, block);
            checkpoints[block].iter().copied().collect()
        };
        for r in start..row {
            step(graph, &mut edges, r);
        }
        edges.into_iter().collect()
    }

    pub fn checkpoint_count(&self) -> usize {
        self.checkpoints.borrow().len()
    }
}

fn fill_checkpoints<G: LinearGraph + ?Sized>(
    graph: &G,
    checkpoints: &mut Vec<Vec<GraphEdge>>,
    block: usize,
) {
    if checkpoints.is_empty() {
        // Nothing crosses the first row.
        checkpoints.push(Vec::new());
    }
    while checkpoints.len() <= block {
        let prev = checkpoints.len() - 1;
        let mut edges: EdgeSet = checkpoints[prev].iter().copied().collect();
        let start = prev * BLOCK_SIZE;
        for r in start..start + BLOCK_SIZE {
            step(graph, &mut edges, r);
        }
        checkpoints.push(edges.into_iter().collect());
    }
}

/// Turns the crossing set of `row` into the crossing set of `row + 1`.
fn step<G: LinearGraph + ?Sized>(graph: &G, edges: &mut EdgeSet, row: usize) {
    let next = row + 1;
    if next < graph.node_count() {
        for e in graph.adjacent_edges(next, EdgeFilter::NormalUp) {
            edges.remove(&e);
        }
    }
    if row < graph.node_count() {
        for e in graph.adjacent_edges(row, EdgeFilter::NormalDown) {
            if e.down_node_index.is_some_and(|down| down > next) {
                edges.insert(e);
            }
        }
    }
}
