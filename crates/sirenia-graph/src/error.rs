#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("edge #{edge_index} references node {node_index}, but the graph has {node_count} nodes")]
    EndpointOutOfRange {
        edge_index: usize,
        node_index: usize,
        node_count: usize,
    },

    #[error("normal edge #{edge_index} must have both endpoints")]
    DanglingNormalEdge { edge_index: usize },

    #[error("edge #{edge_index} runs upward ({up} -> {down}); the up endpoint must be the earlier row")]
    InvertedEdge {
        edge_index: usize,
        up: usize,
        down: usize,
    },

    #[error("edge #{edge_index} has no endpoints")]
    DetachedEdge { edge_index: usize },

    #[error("node id {node_id} is used by more than one row")]
    DuplicateNodeId { node_id: usize },

    #[error("edge #{edge_index} repeats edge #{first_index}")]
    DuplicateEdge {
        edge_index: usize,
        first_index: usize,
    },

    #[error("layout has {layout_indices} layout indices but {head_of} head entries")]
    LayoutLengthMismatch {
        layout_indices: usize,
        head_of: usize,
    },

    #[error("node {node_index} names head {head}, but the layout covers {node_count} nodes")]
    HeadOutOfRange {
        node_index: usize,
        head: usize,
        node_count: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
