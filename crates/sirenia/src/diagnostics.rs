//! Non-fatal policy violations observed while building rows.

use sirenia_graph::GraphEdge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// An edge sat on its up and its down arrow row at once. The down arrow was kept.
    ConflictingArrows { row: usize, edge: GraphEdge },
    /// The edge could not be attached to the row and was dropped from it.
    UnresolvedEdge { row: usize, edge: GraphEdge },
}

impl Diagnostic {
    pub fn row(&self) -> usize {
        match self {
            Diagnostic::ConflictingArrows { row, .. } | Diagnostic::UnresolvedEdge { row, .. } => {
                *row
            }
        }
    }
}
