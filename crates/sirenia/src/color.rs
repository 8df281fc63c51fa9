//! Color decoration attached to print elements.
//!
//! Colors are opaque ids chosen by the caller. They ride along on the output and never affect
//! which elements are drawn or where.

use sirenia_graph::{GraphElement, GraphLayout, LinearGraph};

pub type ColorId = u32;

/// Picks a color for a node given its id and layout index.
pub trait ColorGetter {
    fn color_id(&self, node_id: usize, layout_index: i32) -> ColorId;
}

/// Colors every node directly from `(node_id, layout_index)`.
pub struct ColorByNode<F> {
    color: F,
}

impl<F> ColorByNode<F>
where
    F: Fn(usize, i32) -> ColorId,
{
    pub fn new(color: F) -> Self {
        Self { color }
    }
}

impl<F> ColorGetter for ColorByNode<F>
where
    F: Fn(usize, i32) -> ColorId,
{
    fn color_id(&self, node_id: usize, layout_index: i32) -> ColorId {
        (self.color)(node_id, layout_index)
    }
}

/// Colors a node by the head of its branch: `(head_id, head_layout_index, layout_index)`.
pub struct ColorByHeadCommit<G, L, F> {
    graph: G,
    layout: L,
    color: F,
}

impl<G, L, F> ColorByHeadCommit<G, L, F>
where
    G: LinearGraph,
    L: GraphLayout,
    F: Fn(usize, i32, i32) -> ColorId,
{
    pub fn new(graph: G, layout: L, color: F) -> Self {
        Self {
            graph,
            layout,
            color,
        }
    }
}

impl<G, L, F> ColorGetter for ColorByHeadCommit<G, L, F>
where
    G: LinearGraph,
    L: GraphLayout,
    F: Fn(usize, i32, i32) -> ColorId,
{
    fn color_id(&self, node_id: usize, layout_index: i32) -> ColorId {
        let Some(node_index) = self.graph.node_index(node_id) else {
            // Unknown nodes are their own head.
            return (self.color)(node_id, layout_index, layout_index);
        };
        let head_index = self.layout.one_of_head_node_index(node_index);
        let head_id = self.graph.node_id(head_index);
        let head_layout_index = self.layout.layout_index(head_index);
        (self.color)(head_id, head_layout_index, layout_index)
    }
}

/// Maps a row element to a color.
pub trait ElementColoring {
    fn color_id(&self, element: &GraphElement) -> ColorId;
}

/// Resolves an element to a `(node, layout index)` pair and asks a [`ColorGetter`].
///
/// Normal edges take the color of the endpoint with the larger layout index (the up endpoint
/// on ties); dangling edges take the color of the node they hang from.
pub struct LayoutColoring<G, L, C> {
    graph: G,
    layout: L,
    getter: C,
}

impl<G, L, C> LayoutColoring<G, L, C>
where
    G: LinearGraph,
    L: GraphLayout,
    C: ColorGetter,
{
    pub fn new(graph: G, layout: L, getter: C) -> Self {
        Self {
            graph,
            layout,
            getter,
        }
    }

    fn color_of_node(&self, node_index: usize) -> ColorId {
        let layout_index = self.layout.layout_index(node_index);
        self.getter
            .color_id(self.graph.node_id(node_index), layout_index)
    }
}

impl<G, L, C> ElementColoring for LayoutColoring<G, L, C>
where
    G: LinearGraph,
    L: GraphLayout,
    C: ColorGetter,
{
    fn color_id(&self, element: &GraphElement) -> ColorId {
        match element {
            GraphElement::Node(node) => self.color_of_node(node.node_index),
            GraphElement::Edge(edge) => match edge.as_normal_edge() {
                Some(e) => {
                    let up_li = self.layout.layout_index(e.up);
                    let down_li = self.layout.layout_index(e.down);
                    if up_li >= down_li {
                        self.color_of_node(e.up)
                    } else {
                        self.color_of_node(e.down)
                    }
                }
                None => match edge.anchor_node_index() {
                    Some(ix) => self.color_of_node(ix),
                    None => self.getter.color_id(usize::MAX, 0),
                },
            },
        }
    }
}
