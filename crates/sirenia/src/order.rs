//! Horizontal order of the elements that share a row.

use sirenia_graph::{GraphEdge, GraphEdgeType, GraphElement, GraphLayout};
use std::cmp::Ordering;

/// A total order over the elements of one row. Position `i` in a row is the `i`-th element in
/// this order.
pub trait ElementOrder {
    fn compare(&self, a: &GraphElement, b: &GraphElement) -> Ordering;
}

impl<F> ElementOrder for F
where
    F: Fn(&GraphElement, &GraphElement) -> Ordering,
{
    fn compare(&self, a: &GraphElement, b: &GraphElement) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by the layout index of the branch they belong to.
///
/// Edges take the larger layout index of their endpoints, so an edge leaving a branch is drawn
/// on the side of the branch it joins. Ties are broken by the row the element hangs from, then
/// by kind (the node first) and the remaining endpoint data, which makes the order total.
#[derive(Debug, Clone)]
pub struct LayoutIndexOrder<L> {
    layout: L,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    layout_index: i32,
    anchor: usize,
    is_edge: bool,
    secondary_layout_index: i32,
    up: usize,
    down: usize,
    edge_type: u8,
    target_id: Option<usize>,
}

impl<L: GraphLayout> LayoutIndexOrder<L> {
    pub fn new(layout: L) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    fn key(&self, element: &GraphElement) -> SortKey {
        match element {
            GraphElement::Node(node) => SortKey {
                layout_index: self.layout.layout_index(node.node_index),
                anchor: node.node_index,
                is_edge: false,
                secondary_layout_index: 0,
                up: 0,
                down: 0,
                edge_type: 0,
                target_id: None,
            },
            GraphElement::Edge(edge) => self.edge_key(edge),
        }
    }

    fn edge_key(&self, edge: &GraphEdge) -> SortKey {
        let up = edge.up_node_index.unwrap_or(usize::MAX);
        let down = edge.down_node_index.unwrap_or(usize::MAX);
        let (layout_index, anchor, secondary_layout_index) = match edge.as_normal_edge() {
            Some(e) => {
                let up_li = self.layout.layout_index(e.up);
                let down_li = self.layout.layout_index(e.down);
                (up_li.max(down_li), e.up, down_li)
            }
            None => {
                let anchor = edge.anchor_node_index().unwrap_or(usize::MAX);
                let li = edge
                    .anchor_node_index()
                    .map_or(i32::MAX, |ix| self.layout.layout_index(ix));
                (li, anchor, li)
            }
        };
        SortKey {
            layout_index,
            anchor,
            is_edge: true,
            secondary_layout_index,
            up,
            down,
            edge_type: edge_type_rank(edge.edge_type),
            target_id: edge.target_id,
        }
    }
}

fn edge_type_rank(edge_type: GraphEdgeType) -> u8 {
    match edge_type {
        GraphEdgeType::Normal => 0,
        GraphEdgeType::DottedArrowUp => 1,
        GraphEdgeType::DottedArrowDown => 2,
        GraphEdgeType::NotLoadCommit => 3,
    }
}

impl<L: GraphLayout> ElementOrder for LayoutIndexOrder<L> {
    fn compare(&self, a: &GraphElement, b: &GraphElement) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}
