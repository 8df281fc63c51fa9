//! Drawable output of the row engine.
//!
//! Edges are emitted as half segments: the part of an edge between row `R` and row `R + 1` shows
//! up once in row `R` as a [`EdgeDirection::Down`] half and once in row `R + 1` as an
//! [`EdgeDirection::Up`] half, both carrying the same pair of positions.

use crate::color::ColorId;
use sirenia_graph::GraphElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    Up,
    Down,
}

pub type ArrowDirection = EdgeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePrintElement {
    pub row: usize,
    pub position: usize,
    pub graph_element: GraphElement,
    pub color_id: Option<ColorId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePrintElement {
    pub row: usize,
    /// Position in the upper of the two rows the half segment connects.
    pub up_position: usize,
    /// Position in the lower of the two rows the half segment connects.
    pub down_position: usize,
    pub direction: EdgeDirection,
    pub has_arrow: bool,
    pub graph_element: GraphElement,
    pub color_id: Option<ColorId>,
}

impl EdgePrintElement {
    /// Position of the segment end that lies in `row` itself.
    pub fn position_in_row(&self) -> usize {
        match self.direction {
            EdgeDirection::Up => self.down_position,
            EdgeDirection::Down => self.up_position,
        }
    }
}

/// An arrow glyph where an edge stops being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalArrowElement {
    pub row: usize,
    pub position: usize,
    pub direction: ArrowDirection,
    pub graph_element: GraphElement,
    pub color_id: Option<ColorId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintElement {
    Node(NodePrintElement),
    Edge(EdgePrintElement),
    TerminalArrow(TerminalArrowElement),
}

impl PrintElement {
    pub fn row(&self) -> usize {
        match self {
            PrintElement::Node(e) => e.row,
            PrintElement::Edge(e) => e.row,
            PrintElement::TerminalArrow(e) => e.row,
        }
    }

    pub fn graph_element(&self) -> &GraphElement {
        match self {
            PrintElement::Node(e) => &e.graph_element,
            PrintElement::Edge(e) => &e.graph_element,
            PrintElement::TerminalArrow(e) => &e.graph_element,
        }
    }

    pub fn color_id(&self) -> Option<ColorId> {
        match self {
            PrintElement::Node(e) => e.color_id,
            PrintElement::Edge(e) => e.color_id,
            PrintElement::TerminalArrow(e) => e.color_id,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, PrintElement::Node(_))
    }

    pub fn as_edge(&self) -> Option<&EdgePrintElement> {
        match self {
            PrintElement::Edge(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_terminal_arrow(&self) -> Option<&TerminalArrowElement> {
        match self {
            PrintElement::TerminalArrow(e) => Some(e),
            _ => None,
        }
    }
}
