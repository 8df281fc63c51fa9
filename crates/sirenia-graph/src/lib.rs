#![forbid(unsafe_code)]

//! Row-ordered commit graph model used by `sirenia`.
//!
//! A linear graph is a DAG whose nodes are already placed in a total display order: node
//! indices are dense (`0..node_count`) and double as row numbers. Edges point from an upper row
//! to a lower row and may dangle when one endpoint is hidden or not loaded.

pub mod error;
pub mod graph;
pub mod layout;

pub use error::{Error, Result};
pub use graph::alg;
pub use graph::{
    EdgeFilter, GraphEdge, GraphEdgeType, GraphElement, GraphNode, LinearGraph, NormalEdge,
    RowGraph,
};
pub use layout::{GraphLayout, SimpleLayout};
