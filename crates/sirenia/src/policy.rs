//! Which edges are drawn in a row and where direction arrows go.
//!
//! Long edges are cut: only `visible_part_size` rows next to each endpoint keep their segment,
//! and an arrow marks the last visible row on each side. Edges of medium length stay whole but
//! get an arrow one row away from each endpoint.

use crate::options::GeneratorOptions;
use crate::print::ArrowDirection;
use sirenia_graph::{GraphEdge, GraphEdgeType, NormalEdge};

/// Outcome of asking for the arrow of one edge at one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowResolution {
    None,
    Arrow(ArrowDirection),
    /// Both arrows matched; carries the direction that was detected first.
    Conflict(ArrowDirection),
    /// The edge cannot carry an arrow at this row (a dangling edge away from its stub row, or a
    /// normal-typed edge missing an endpoint).
    Unresolved,
}

impl ArrowResolution {
    pub fn direction(self) -> Option<ArrowDirection> {
        match self {
            ArrowResolution::Arrow(d) | ArrowResolution::Conflict(d) => Some(d),
            ArrowResolution::None | ArrowResolution::Unresolved => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePolicy {
    long_edge_size: usize,
    visible_part_size: usize,
    edge_with_arrow_size: usize,
}

impl EdgePolicy {
    pub fn new(options: &GeneratorOptions) -> Self {
        Self {
            long_edge_size: options.long_edge_size,
            visible_part_size: options.visible_part_size,
            edge_with_arrow_size: options.edge_with_arrow_size,
        }
    }

    pub fn is_long_edge(&self, edge: NormalEdge) -> bool {
        edge.span() >= self.long_edge_size
    }

    /// Dangling edges never show a segment through a row.
    pub fn is_edge_visible_in_row(&self, edge: &GraphEdge, row: usize) -> bool {
        edge.as_normal_edge()
            .is_some_and(|e| self.is_normal_edge_visible_in_row(e, row))
    }

    pub fn is_normal_edge_visible_in_row(&self, edge: NormalEdge, row: usize) -> bool {
        if !self.is_long_edge(edge) {
            return true;
        }
        let up_offset = row.abs_diff(edge.up);
        let down_offset = edge.down.abs_diff(row);
        up_offset.min(down_offset) <= self.visible_part_size
    }

    pub fn arrow_type(&self, edge: &GraphEdge, row: usize) -> ArrowResolution {
        if let Some(normal) = edge.as_normal_edge() {
            return self.normal_arrow_type(normal, row);
        }
        match edge.edge_type {
            GraphEdgeType::DottedArrowDown | GraphEdgeType::NotLoadCommit => {
                if row > 0 && edge.up_node_index == Some(row - 1) {
                    ArrowResolution::Arrow(ArrowDirection::Down)
                } else {
                    ArrowResolution::Unresolved
                }
            }
            GraphEdgeType::DottedArrowUp => {
                if edge.down_node_index == Some(row + 1) {
                    ArrowResolution::Arrow(ArrowDirection::Up)
                } else {
                    ArrowResolution::Unresolved
                }
            }
            GraphEdgeType::Normal => ArrowResolution::Unresolved,
        }
    }

    pub fn normal_arrow_type(&self, edge: NormalEdge, row: usize) -> ArrowResolution {
        let part = if self.is_long_edge(edge) {
            self.visible_part_size
        } else if edge.span() >= self.edge_with_arrow_size {
            1
        } else {
            return ArrowResolution::None;
        };

        // Offsets are signed so rows outside the edge never match.
        let up_offset = row as i64 - edge.up as i64;
        let down_offset = edge.down as i64 - row as i64;
        let part = part as i64;
        match (up_offset == part, down_offset == part) {
            (true, true) => ArrowResolution::Conflict(ArrowDirection::Down),
            (true, false) => ArrowResolution::Arrow(ArrowDirection::Down),
            (false, true) => ArrowResolution::Arrow(ArrowDirection::Up),
            (false, false) => ArrowResolution::None,
        }
    }
}
