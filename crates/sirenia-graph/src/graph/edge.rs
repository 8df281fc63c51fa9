//! Edge types.
//!
//! Edges always connect an upper row to a lower row. Dangling edge types keep only one concrete
//! endpoint and are drawn as a short stub with an arrow.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphEdgeType {
    Normal,
    /// Dangling edge pointing up from its down endpoint.
    DottedArrowUp,
    /// Dangling edge pointing down from its up endpoint.
    DottedArrowDown,
    /// Edge to a parent commit that has not been loaded yet.
    NotLoadCommit,
}

impl GraphEdgeType {
    pub fn is_special(self) -> bool {
        !matches!(self, GraphEdgeType::Normal)
    }

    /// Whether a dangling edge of this type hangs below its anchor node.
    pub fn points_down(self) -> bool {
        matches!(
            self,
            GraphEdgeType::DottedArrowDown | GraphEdgeType::NotLoadCommit
        )
    }
}

/// An edge with two concrete endpoints, `up < down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalEdge {
    pub up: usize,
    pub down: usize,
}

impl NormalEdge {
    pub fn new(up: usize, down: usize) -> Self {
        debug_assert!(up < down, "normal edge must point down: {up} -> {down}");
        Self { up, down }
    }

    pub fn span(self) -> usize {
        self.down - self.up
    }

    /// Whether `row` lies strictly between the endpoints.
    pub fn passes_through(self, row: usize) -> bool {
        self.up < row && row < self.down
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub up_node_index: Option<usize>,
    pub down_node_index: Option<usize>,
    /// Identity of a hidden or unloaded target, distinguishing dangling edges of one node.
    pub target_id: Option<usize>,
    pub edge_type: GraphEdgeType,
}

impl GraphEdge {
    pub fn new(
        up_node_index: Option<usize>,
        down_node_index: Option<usize>,
        target_id: Option<usize>,
        edge_type: GraphEdgeType,
    ) -> Self {
        Self {
            up_node_index,
            down_node_index,
            target_id,
            edge_type,
        }
    }

    pub fn normal(up: usize, down: usize) -> Self {
        Self::new(Some(up), Some(down), None, GraphEdgeType::Normal)
    }

    pub fn dotted_arrow_up(down: usize) -> Self {
        Self::new(None, Some(down), None, GraphEdgeType::DottedArrowUp)
    }

    pub fn dotted_arrow_down(up: usize) -> Self {
        Self::new(Some(up), None, None, GraphEdgeType::DottedArrowDown)
    }

    pub fn not_load_commit(up: usize, target_id: usize) -> Self {
        Self::new(Some(up), None, Some(target_id), GraphEdgeType::NotLoadCommit)
    }

    pub fn as_normal_edge(&self) -> Option<NormalEdge> {
        if self.edge_type.is_special() {
            return None;
        }
        match (self.up_node_index, self.down_node_index) {
            (Some(up), Some(down)) if up < down => Some(NormalEdge { up, down }),
            _ => None,
        }
    }

    /// The edge leaves `node_index` upward (`node_index` is its down endpoint).
    pub fn is_up_from(&self, node_index: usize) -> bool {
        self.down_node_index == Some(node_index)
    }

    /// The edge leaves `node_index` downward (`node_index` is its up endpoint).
    pub fn is_down_from(&self, node_index: usize) -> bool {
        self.up_node_index == Some(node_index)
    }

    /// The endpoint the edge hangs from: the up endpoint when present, otherwise the down one.
    pub fn anchor_node_index(&self) -> Option<usize> {
        self.up_node_index.or(self.down_node_index)
    }
}

impl From<NormalEdge> for GraphEdge {
    fn from(edge: NormalEdge) -> Self {
        GraphEdge::normal(edge.up, edge.down)
    }
}
