//! Lane count estimate for the whole graph.
//!
//! Scanning every row of a large history is too slow for a value that only sizes a column, so
//! the estimate samples a prefix of the graph. Later sampled rows weigh more than earlier ones
//! because histories tend to widen as branches accumulate.

use crate::policy::EdgePolicy;
use crate::print::ArrowDirection;
use hashbrown::HashSet;
use rustc_hash::FxBuildHasher;
use sirenia_graph::{EdgeFilter, GraphEdgeType, LinearGraph, NormalEdge};

/// How much later sampled rows outweigh earlier ones.
pub const K: f64 = 0.1;

/// Recommends a lane count: weighted mean plus one weighted standard deviation of the per-row
/// width over the first `sample_size` rows.
///
/// A row is as wide as the busier of its two sides: upper halves plus up arrows, or lower halves
/// plus down arrows. Every edge counts once on each side.
pub fn recommended_width<G: LinearGraph + ?Sized>(
    graph: &G,
    policy: &EdgePolicy,
    sample_size: usize,
) -> usize {
    let n = sample_size.min(graph.node_count());
    if n == 0 {
        return 0;
    }

    let mut open: HashSet<NormalEdge, FxBuildHasher> = HashSet::default();
    let mut mean = 0.0f64;
    let mut mean_squares = 0.0f64;

    for row in 0..n {
        let mut up_arrows = 0usize;
        let mut down_arrows = 0usize;
        for e in graph.adjacent_edges(row, EdgeFilter::Special) {
            if e.edge_type == GraphEdgeType::DottedArrowUp {
                up_arrows += 1;
            } else {
                down_arrows += 1;
            }
        }

        // Edges cut above this row show up as an up arrow instead of an upper half.
        let before = open
            .iter()
            .filter(|e| {
                policy.is_normal_edge_visible_in_row(**e, row)
                    && policy.normal_arrow_type(**e, row).direction() != Some(ArrowDirection::Up)
            })
            .count();

        for e in graph.adjacent_edges(row, EdgeFilter::NormalAll) {
            let Some(normal) = e.as_normal_edge() else {
                continue;
            };
            if normal.down == row {
                open.remove(&normal);
            } else {
                open.insert(normal);
            }
        }

        let mut after = 0usize;
        for e in &open {
            match policy.normal_arrow_type(*e, row).direction() {
                Some(ArrowDirection::Up) => {
                    up_arrows += 1;
                    after += 1;
                }
                Some(ArrowDirection::Down) => down_arrows += 1,
                None if policy.is_normal_edge_visible_in_row(*e, row) => after += 1,
                None => {}
            }
        }

        let width = (before + up_arrows).max(after + down_arrows) as f64;
        let w = weight(row, n);
        mean += w * width;
        mean_squares += w * width * width;
    }

    let variance = (mean_squares - mean * mean).max(0.0);
    (mean + variance.sqrt()).round() as usize
}

/// Linearly increasing weights over `0..n` that sum to one.
fn weight(row: usize, n: usize) -> f64 {
    if n == 1 {
        return 1.0;
    }
    let t = row as f64 / (n - 1) as f64;
    (1.0 - K + 2.0 * K * t) / n as f64
}
