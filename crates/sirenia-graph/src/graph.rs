//! Linear graph container APIs used by `sirenia`.
//!
//! This module contains the [`LinearGraph`] capability consumed by the row layout engine, the
//! element types it is phrased in, and [`RowGraph`], an immutable in-memory implementation.

mod adj_index;
pub mod alg;
mod edge;

use crate::{Error, Result};
use adj_index::AdjIndex;
use rustc_hash::FxBuildHasher;

pub use edge::{GraphEdge, GraphEdgeType, NormalEdge};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphNode {
    pub node_index: usize,
}

impl GraphNode {
    pub fn new(node_index: usize) -> Self {
        Self { node_index }
    }
}

/// Anything that can occupy a slot in a row: the row's own node or an edge crossing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphElement {
    Node(GraphNode),
    Edge(GraphEdge),
}

impl GraphElement {
    pub fn as_node(&self) -> Option<GraphNode> {
        match self {
            GraphElement::Node(n) => Some(*n),
            GraphElement::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&GraphEdge> {
        match self {
            GraphElement::Node(_) => None,
            GraphElement::Edge(e) => Some(e),
        }
    }
}

impl From<GraphNode> for GraphElement {
    fn from(node: GraphNode) -> Self {
        GraphElement::Node(node)
    }
}

impl From<GraphEdge> for GraphElement {
    fn from(edge: GraphEdge) -> Self {
        GraphElement::Edge(edge)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeFilter {
    All,
    /// Normal edges in both directions.
    NormalAll,
    /// Normal edges whose down endpoint is the queried node.
    NormalUp,
    /// Normal edges whose up endpoint is the queried node.
    NormalDown,
    /// Dangling and not-loaded edges.
    Special,
}

impl EdgeFilter {
    pub fn accepts(self, edge: &GraphEdge, node_index: usize) -> bool {
        match self {
            EdgeFilter::All => true,
            EdgeFilter::NormalAll => edge.as_normal_edge().is_some(),
            EdgeFilter::NormalUp => edge.as_normal_edge().is_some() && edge.is_up_from(node_index),
            EdgeFilter::NormalDown => {
                edge.as_normal_edge().is_some() && edge.is_down_from(node_index)
            }
            EdgeFilter::Special => edge.edge_type.is_special(),
        }
    }
}

/// A topologically ordered graph where node index and row are the same number.
///
/// Implementations must present one consistent snapshot for as long as a consumer holds them.
pub trait LinearGraph {
    fn node_count(&self) -> usize;

    fn graph_node(&self, node_index: usize) -> GraphNode {
        GraphNode::new(node_index)
    }

    fn adjacent_edges(&self, node_index: usize, filter: EdgeFilter) -> Vec<GraphEdge>;

    /// Stable identity of the node at `node_index` (a commit handle, for instance).
    fn node_id(&self, node_index: usize) -> usize {
        node_index
    }

    fn node_index(&self, node_id: usize) -> Option<usize> {
        (node_id < self.node_count()).then_some(node_id)
    }
}

impl<T: LinearGraph + ?Sized> LinearGraph for &T {
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn graph_node(&self, node_index: usize) -> GraphNode {
        (**self).graph_node(node_index)
    }

    fn adjacent_edges(&self, node_index: usize, filter: EdgeFilter) -> Vec<GraphEdge> {
        (**self).adjacent_edges(node_index, filter)
    }

    fn node_id(&self, node_index: usize) -> usize {
        (**self).node_id(node_index)
    }

    fn node_index(&self, node_id: usize) -> Option<usize> {
        (**self).node_index(node_id)
    }
}

/// Immutable [`LinearGraph`] backed by an edge list and a packed adjacency index.
#[derive(Debug, Clone)]
pub struct RowGraph {
    node_count: usize,
    edges: Vec<GraphEdge>,
    adj: AdjIndex,
    // `None` means node ids equal node indices.
    node_ids: Option<Vec<usize>>,
    node_index_by_id: HashMap<usize, usize>,
}

impl RowGraph {
    pub fn new(node_count: usize, edges: impl IntoIterator<Item = GraphEdge>) -> Result<Self> {
        let edges: Vec<GraphEdge> = edges.into_iter().collect();
        validate_edges(node_count, &edges)?;
        let adj = AdjIndex::build(node_count, &edges);
        Ok(Self {
            node_count,
            edges,
            adj,
            node_ids: None,
            node_index_by_id: HashMap::default(),
        })
    }

    /// Builds a graph whose row `i` carries the caller's id `node_ids[i]`.
    pub fn with_node_ids(
        node_ids: Vec<usize>,
        edges: impl IntoIterator<Item = GraphEdge>,
    ) -> Result<Self> {
        let mut graph = Self::new(node_ids.len(), edges)?;
        let mut index: HashMap<usize, usize> = HashMap::default();
        index.reserve(node_ids.len());
        for (ix, &id) in node_ids.iter().enumerate() {
            if index.insert(id, ix).is_some() {
                return Err(Error::DuplicateNodeId { node_id: id });
            }
        }
        graph.node_ids = Some(node_ids);
        graph.node_index_by_id = index;
        Ok(graph)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter()
    }
}

impl LinearGraph for RowGraph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn adjacent_edges(&self, node_index: usize, filter: EdgeFilter) -> Vec<GraphEdge> {
        self.adj
            .adjacent(node_index)
            .iter()
            .map(|&edge_ix| self.edges[edge_ix])
            .filter(|e| filter.accepts(e, node_index))
            .collect()
    }

    fn node_id(&self, node_index: usize) -> usize {
        match &self.node_ids {
            Some(ids) => ids[node_index],
            None => node_index,
        }
    }

    fn node_index(&self, node_id: usize) -> Option<usize> {
        match &self.node_ids {
            Some(_) => self.node_index_by_id.get(&node_id).copied(),
            None => (node_id < self.node_count).then_some(node_id),
        }
    }
}

fn validate_edges(node_count: usize, edges: &[GraphEdge]) -> Result<()> {
    let mut seen: HashMap<GraphEdge, usize> = HashMap::default();
    seen.reserve(edges.len());
    for (edge_index, e) in edges.iter().enumerate() {
        if let Some(&first_index) = seen.get(e) {
            return Err(Error::DuplicateEdge {
                edge_index,
                first_index,
            });
        }
        seen.insert(*e, edge_index);
        for node_index in e.up_node_index.into_iter().chain(e.down_node_index) {
            if node_index >= node_count {
                return Err(Error::EndpointOutOfRange {
                    edge_index,
                    node_index,
                    node_count,
                });
            }
        }
        match (e.up_node_index, e.down_node_index) {
            (None, None) => return Err(Error::DetachedEdge { edge_index }),
            (Some(up), Some(down)) if up >= down => {
                return Err(Error::InvertedEdge {
                    edge_index,
                    up,
                    down,
                });
            }
            (None, _) | (_, None) if !e.edge_type.is_special() => {
                return Err(Error::DanglingNormalEdge { edge_index });
            }
            _ => {}
        }
    }
    Ok(())
}
