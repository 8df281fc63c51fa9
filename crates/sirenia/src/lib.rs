#![forbid(unsafe_code)]

//! Commit-graph row layout engine.
//!
//! Given a [`LinearGraph`](sirenia_graph::LinearGraph) whose rows are already in display order,
//! [`PrintElementGenerator`] decides for each requested row which edges are drawn, where long
//! edges are cut and marked with arrows, and which horizontal position every node, edge half and
//! arrow takes. Rows are computed on demand and memoized, so a scrolling viewport can ask for
//! them repeatedly.

pub use sirenia_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cache;
pub mod color;
pub mod diagnostics;
pub mod edges_in_row;
pub mod error;
pub mod generator;
pub mod options;
pub mod order;
pub mod policy;
pub mod print;
pub mod width;

pub use color::{
    ColorByHeadCommit, ColorByNode, ColorGetter, ColorId, ElementColoring, LayoutColoring,
};
pub use diagnostics::Diagnostic;
pub use error::{Error, Result};
pub use generator::PrintElementGenerator;
pub use options::GeneratorOptions;
pub use order::{ElementOrder, LayoutIndexOrder};
pub use policy::{ArrowResolution, EdgePolicy};
pub use print::{
    ArrowDirection, EdgeDirection, EdgePrintElement, NodePrintElement, PrintElement,
    TerminalArrowElement,
};
