//! Tunable thresholds of a [`PrintElementGenerator`](crate::PrintElementGenerator).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const LONG_EDGE_SIZE: usize = 30;
pub const LONG_EDGE_PART_SIZE: usize = 1;
pub const VERY_LONG_EDGE_SIZE: usize = 1000;
pub const VERY_LONG_EDGE_PART_SIZE: usize = 250;
pub const CACHE_SIZE: usize = 100;
pub const SAMPLE_SIZE: usize = 20_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Edges spanning at least this many rows are truncated.
    pub long_edge_size: usize,
    /// Rows next to each endpoint of a long edge that still show its segment.
    pub visible_part_size: usize,
    /// Shorter edges spanning at least this many rows get a direction arrow next to each end.
    pub edge_with_arrow_size: usize,
    /// Capacity of the protected row cache segment; probation holds twice as many rows.
    pub cache_size: usize,
    /// Rows sampled by the width estimator.
    pub sample_size: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            long_edge_size: LONG_EDGE_SIZE,
            visible_part_size: LONG_EDGE_PART_SIZE,
            edge_with_arrow_size: LONG_EDGE_SIZE,
            cache_size: CACHE_SIZE,
            sample_size: SAMPLE_SIZE,
        }
    }
}

impl GeneratorOptions {
    /// Thresholds for the "show long edges" mode: edges are cut only when very long.
    pub fn show_long_edges() -> Self {
        Self {
            long_edge_size: VERY_LONG_EDGE_SIZE,
            visible_part_size: VERY_LONG_EDGE_PART_SIZE,
            edge_with_arrow_size: usize::MAX,
            ..Self::default()
        }
    }

    pub fn for_mode(show_long_edges: bool) -> Self {
        if show_long_edges {
            Self::show_long_edges()
        } else {
            Self::default()
        }
    }

    /// Parses options from JSON; missing fields take their default value.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |message: &str| Error::InvalidOptions {
            message: message.to_string(),
        };
        if self.long_edge_size == 0 {
            return Err(invalid("long_edge_size must be at least 1"));
        }
        if self.cache_size == 0 {
            return Err(invalid("cache_size must be at least 1"));
        }
        if self.sample_size == 0 {
            return Err(invalid("sample_size must be at least 1"));
        }
        Ok(())
    }

    /// Whether some edge can sit on both of its arrow rows at once.
    pub fn allows_arrow_conflicts(&self) -> bool {
        let long = self.long_edge_size <= self.visible_part_size.saturating_mul(2);
        let short = self.edge_with_arrow_size <= 2 && self.long_edge_size > 2;
        long || short
    }
}
