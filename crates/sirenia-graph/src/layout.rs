//! Precomputed horizontal layout information.
//!
//! Assigning layout indices (branch columns) is the job of a separate layout pass; this module
//! only describes what the row engine needs to know about its result.

use crate::{Error, Result};

/// Per-node layout data: a layout index and the head node of the branch a node belongs to.
pub trait GraphLayout {
    fn layout_index(&self, node_index: usize) -> i32;

    fn one_of_head_node_index(&self, node_index: usize) -> usize;

    fn head_node_indices(&self) -> &[usize];
}

impl<T: GraphLayout + ?Sized> GraphLayout for &T {
    fn layout_index(&self, node_index: usize) -> i32 {
        (**self).layout_index(node_index)
    }

    fn one_of_head_node_index(&self, node_index: usize) -> usize {
        (**self).one_of_head_node_index(node_index)
    }

    fn head_node_indices(&self) -> &[usize] {
        (**self).head_node_indices()
    }
}

/// A [`GraphLayout`] built from vectors indexed by node index.
///
/// Nodes past the end of the vectors (a layout built for a shorter graph) get layout index 0 and
/// are their own head.
#[derive(Debug, Clone, Default)]
pub struct SimpleLayout {
    layout_indices: Vec<i32>,
    head_of: Vec<usize>,
    heads: Vec<usize>,
}

impl SimpleLayout {
    /// `head_of[i]` is the head node of the branch node `i` belongs to.
    pub fn new(layout_indices: Vec<i32>, head_of: Vec<usize>) -> Result<Self> {
        if layout_indices.len() != head_of.len() {
            return Err(Error::LayoutLengthMismatch {
                layout_indices: layout_indices.len(),
                head_of: head_of.len(),
            });
        }
        let node_count = head_of.len();
        if let Some((node_index, &head)) =
            head_of.iter().enumerate().find(|(_, h)| **h >= node_count)
        {
            return Err(Error::HeadOutOfRange {
                node_index,
                head,
                node_count,
            });
        }
        let mut heads = head_of.clone();
        heads.sort_unstable();
        heads.dedup();
        Ok(Self {
            layout_indices,
            head_of,
            heads,
        })
    }

    /// Every node shares one layout index and is its own head.
    pub fn flat(node_count: usize) -> Self {
        Self {
            layout_indices: vec![0; node_count],
            head_of: (0..node_count).collect(),
            heads: (0..node_count).collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.head_of.len()
    }
}

impl GraphLayout for SimpleLayout {
    fn layout_index(&self, node_index: usize) -> i32 {
        self.layout_indices.get(node_index).copied().unwrap_or(0)
    }

    fn one_of_head_node_index(&self, node_index: usize) -> usize {
        self.head_of.get(node_index).copied().unwrap_or(node_index)
    }

    fn head_node_indices(&self) -> &[usize] {
        &self.heads
    }
}
