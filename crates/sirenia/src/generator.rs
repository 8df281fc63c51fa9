//! Per-row print element generation.
//!
//! Rows are requested lazily while a viewport scrolls. Building a row needs the sorted visible
//! elements of the row itself and of both neighbors, so those lists are memoized in a
//! [`SlruCache`] and shared between consecutive requests.

use crate::cache::SlruCache;
use crate::color::{ColorId, ElementColoring};
use crate::diagnostics::Diagnostic;
use crate::edges_in_row::EdgesInRowIndex;
use crate::options::GeneratorOptions;
use crate::order::ElementOrder;
use crate::policy::{ArrowResolution, EdgePolicy};
use crate::print::{
    ArrowDirection, EdgeDirection, EdgePrintElement, NodePrintElement, PrintElement,
    TerminalArrowElement,
};
use crate::width;
use crate::{Error, Result};
use hashbrown::HashMap;
use rustc_hash::FxBuildHasher;
use sirenia_graph::{EdgeFilter, GraphEdge, GraphEdgeType, GraphElement, GraphNode, LinearGraph};
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

type RowElements = Rc<[GraphElement]>;

/// Builds drawable rows for one immutable [`LinearGraph`] snapshot.
///
/// All queries take `&self` and mutate internal caches through `RefCell`, so a generator is
/// meant to be owned by a single thread. Build a new generator when the graph changes.
pub struct PrintElementGenerator<'g, G: LinearGraph + ?Sized, O> {
    graph: &'g G,
    order: O,
    options: GeneratorOptions,
    policy: EdgePolicy,
    edges_in_row: EdgesInRowIndex,
    cache: RefCell<SlruCache<usize, RowElements>>,
    coloring: Option<Box<dyn ElementColoring + 'g>>,
    recommended_width: OnceCell<usize>,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl<'g, G, O> PrintElementGenerator<'g, G, O>
where
    G: LinearGraph + ?Sized,
    O: ElementOrder,
{
    pub fn new(graph: &'g G, order: O, show_long_edges: bool) -> Self {
        Self::build(graph, order, GeneratorOptions::for_mode(show_long_edges))
    }

    pub fn with_options(graph: &'g G, order: O, options: GeneratorOptions) -> Result<Self> {
        options.validate()?;
        if options.allows_arrow_conflicts() {
            tracing::warn!(
                long_edge_size = options.long_edge_size,
                visible_part_size = options.visible_part_size,
                edge_with_arrow_size = options.edge_with_arrow_size,
                "edge thresholds let one edge carry both arrows in a row"
            );
        }
        Ok(Self::build(graph, order, options))
    }

    fn build(graph: &'g G, order: O, options: GeneratorOptions) -> Self {
        Self {
            graph,
            order,
            options,
            policy: EdgePolicy::new(&options),
            edges_in_row: EdgesInRowIndex::new(),
            cache: RefCell::new(SlruCache::with_capacity(options.cache_size)),
            coloring: None,
            recommended_width: OnceCell::new(),
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub fn with_coloring(mut self, coloring: impl ElementColoring + 'g) -> Self {
        self.coloring = Some(Box::new(coloring));
        self
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn policy(&self) -> &EdgePolicy {
        &self.policy
    }

    /// Diagnostics recorded since the last call, oldest first.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Lane count suggested for rendering the whole graph. Computed once.
    pub fn recommended_width(&self) -> usize {
        *self.recommended_width.get_or_init(|| {
            let width =
                width::recommended_width(self.graph, &self.policy, self.options.sample_size);
            tracing::debug!(width, rows = self.graph.node_count(), "recommended graph width");
            width
        })
    }

    /// The row's node plus every edge drawn in it, in horizontal order.
    pub fn sorted_visible_elements(&self, row: usize) -> Result<Vec<GraphElement>> {
        self.check_row(row)?;
        Ok(self.row_elements(row).to_vec())
    }

    /// Drawable elements of `row`: edge halves and arrows in element order, the node last.
    pub fn print_elements(&self, row: usize) -> Result<Vec<PrintElement>> {
        self.check_row(row)?;
        let rows = self.graph.node_count();

        let elements = self.row_elements(row);
        let up = match row.checked_sub(1) {
            Some(up_row) => NeighborPositions::new(up_row, &self.row_elements(up_row)),
            None => NeighborPositions::empty(),
        };
        let down = if row + 1 < rows {
            NeighborPositions::new(row + 1, &self.row_elements(row + 1))
        } else {
            NeighborPositions::empty()
        };

        let mut builder = RowBuilder {
            row,
            up: &up,
            down: &down,
            out: Vec::with_capacity(elements.len() * 2 + 1),
            node: None,
        };

        for (position, element) in elements.iter().enumerate() {
            match element {
                GraphElement::Node(node) => {
                    self.add_node(&mut builder, position, *node);
                }
                GraphElement::Edge(edge) => {
                    self.add_crossing_edge(&mut builder, position, edge);
                }
            }
        }

        Ok(builder.finish())
    }

    fn check_row(&self, row: usize) -> Result<()> {
        let rows = self.graph.node_count();
        if row >= rows {
            return Err(Error::RowOutOfRange { row, rows });
        }
        Ok(())
    }

    fn row_elements(&self, row: usize) -> RowElements {
        if let Some(hit) = self.cache.borrow_mut().get(&row) {
            return hit;
        }
        tracing::trace!(row, "row cache miss");
        let elements = self.compute_row_elements(row);
        self.cache.borrow_mut().put(row, elements.clone());
        elements
    }

    fn compute_row_elements(&self, row: usize) -> RowElements {
        let mut elements = vec![GraphElement::Node(self.graph.graph_node(row))];

        for edge in self.edges_in_row.edges_in_row(self.graph, row) {
            if self.policy.is_edge_visible_in_row(&edge, row) {
                elements.push(GraphElement::Edge(edge));
            }
        }

        // Dangling edges of the neighbors end in this row as a stub with an arrow.
        if let Some(up_row) = row.checked_sub(1) {
            for edge in self.graph.adjacent_edges(up_row, EdgeFilter::Special) {
                if edge.edge_type.points_down() && edge.is_down_from(up_row) {
                    elements.push(GraphElement::Edge(edge));
                }
            }
        }
        let down_row = row + 1;
        if down_row < self.graph.node_count() {
            for edge in self.graph.adjacent_edges(down_row, EdgeFilter::Special) {
                if edge.edge_type == GraphEdgeType::DottedArrowUp && edge.is_up_from(down_row) {
                    elements.push(GraphElement::Edge(edge));
                }
            }
        }

        elements.sort_by(|a, b| self.order.compare(a, b));
        elements.into()
    }

    fn add_node(&self, builder: &mut RowBuilder<'_>, position: usize, node: GraphNode) {
        let row = builder.row;
        for edge in self.graph.adjacent_edges(node.node_index, EdgeFilter::All) {
            if let Some(normal) = edge.as_normal_edge() {
                let side = if normal.up == row {
                    EdgeDirection::Down
                } else {
                    EdgeDirection::Up
                };
                let arrow = self.resolve_arrow(&edge, row);
                builder.add_side(position, &edge, side, arrow, self.color_of(&edge.into()));
            } else if edge.edge_type.is_special() {
                // The arrow belongs to the stub row, not to the node row.
                let side = if edge.edge_type.points_down() {
                    EdgeDirection::Down
                } else {
                    EdgeDirection::Up
                };
                builder.add_side(position, &edge, side, None, self.color_of(&edge.into()));
            } else {
                self.report(Diagnostic::UnresolvedEdge { row, edge });
            }
        }

        let element = GraphElement::Node(node);
        builder.node = Some(NodePrintElement {
            row,
            position,
            graph_element: element,
            color_id: self.color_of(&element),
        });
    }

    fn add_crossing_edge(&self, builder: &mut RowBuilder<'_>, position: usize, edge: &GraphEdge) {
        let row = builder.row;
        let color_id = self.color_of(&GraphElement::Edge(*edge));
        let arrow = self.resolve_arrow(edge, row);

        if edge.as_normal_edge().is_some() {
            builder.add_side(position, edge, EdgeDirection::Up, arrow, color_id);
            builder.add_side(position, edge, EdgeDirection::Down, arrow, color_id);
            return;
        }

        // A stub: connect it back to its node and put the arrow on the open end.
        let anchor_side = if edge.edge_type.points_down() {
            EdgeDirection::Up
        } else {
            EdgeDirection::Down
        };
        builder.add_side(position, edge, anchor_side, None, color_id);
        if let Some(direction) = arrow {
            builder.add_terminal_arrow(position, edge, direction, color_id);
        }
    }

    fn resolve_arrow(&self, edge: &GraphEdge, row: usize) -> Option<ArrowDirection> {
        let resolution = self.policy.arrow_type(edge, row);
        match resolution {
            ArrowResolution::Conflict(_) => {
                self.report(Diagnostic::ConflictingArrows { row, edge: *edge });
            }
            ArrowResolution::Unresolved => {
                self.report(Diagnostic::UnresolvedEdge { row, edge: *edge });
            }
            ArrowResolution::None | ArrowResolution::Arrow(_) => {}
        }
        resolution.direction()
    }

    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::ConflictingArrows { row, edge } => {
                tracing::warn!(row, ?edge, "edge has both an up and a down arrow");
            }
            Diagnostic::UnresolvedEdge { row, edge } => {
                tracing::error!(row, ?edge, "edge cannot be attached to row");
            }
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    fn color_of(&self, element: &GraphElement) -> Option<ColorId> {
        self.coloring.as_ref().map(|c| c.color_id(element))
    }
}

/// Positions of the elements of a neighboring row.
struct NeighborPositions {
    row: Option<usize>,
    positions: HashMap<GraphElement, usize, FxBuildHasher>,
}

impl NeighborPositions {
    fn new(row: usize, elements: &[GraphElement]) -> Self {
        let mut positions = HashMap::with_capacity_and_hasher(elements.len(), FxBuildHasher);
        for (position, element) in elements.iter().enumerate() {
            positions.insert(*element, position);
        }
        Self {
            row: Some(row),
            positions,
        }
    }

    fn empty() -> Self {
        Self {
            row: None,
            positions: HashMap::default(),
        }
    }

    /// Where `edge` continues in this row: the edge itself, or the node it ends at.
    fn position_of(&self, edge: &GraphEdge, endpoint: Option<usize>) -> Option<usize> {
        let row = self.row?;
        if let Some(&position) = self.positions.get(&GraphElement::Edge(*edge)) {
            return Some(position);
        }
        if endpoint == Some(row) {
            return self
                .positions
                .get(&GraphElement::Node(GraphNode::new(row)))
                .copied();
        }
        None
    }
}

struct RowBuilder<'a> {
    row: usize,
    up: &'a NeighborPositions,
    down: &'a NeighborPositions,
    out: Vec<PrintElement>,
    node: Option<NodePrintElement>,
}

impl RowBuilder<'_> {
    /// Emits the half of `edge` on `side`, or a terminal arrow when the edge is cut there.
    fn add_side(
        &mut self,
        position: usize,
        edge: &GraphEdge,
        side: EdgeDirection,
        arrow: Option<ArrowDirection>,
        color_id: Option<ColorId>,
    ) {
        let neighbor = match side {
            EdgeDirection::Up => self.up.position_of(edge, edge.up_node_index),
            EdgeDirection::Down => self.down.position_of(edge, edge.down_node_index),
        };
        let has_arrow = arrow == Some(side);
        let Some(neighbor) = neighbor else {
            if has_arrow {
                self.add_terminal_arrow(position, edge, side, color_id);
            }
            return;
        };
        let (up_position, down_position) = match side {
            EdgeDirection::Up => (neighbor, position),
            EdgeDirection::Down => (position, neighbor),
        };
        self.out.push(PrintElement::Edge(EdgePrintElement {
            row: self.row,
            up_position,
            down_position,
            direction: side,
            has_arrow,
            graph_element: GraphElement::Edge(*edge),
            color_id,
        }));
    }

    fn add_terminal_arrow(
        &mut self,
        position: usize,
        edge: &GraphEdge,
        direction: ArrowDirection,
        color_id: Option<ColorId>,
    ) {
        self.out
            .push(PrintElement::TerminalArrow(TerminalArrowElement {
                row: self.row,
                position,
                direction,
                graph_element: GraphElement::Edge(*edge),
                color_id,
            }));
    }

    fn finish(mut self) -> Vec<PrintElement> {
        // Nodes go last so they paint over edge strokes.
        if let Some(node) = self.node.take() {
            self.out.push(PrintElement::Node(node));
        }
        self.out
    }
}
