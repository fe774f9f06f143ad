//! The rental graph. Every distinct day is a vertex and every rental is a
//! directed edge from its start day to its end day, weighted by its cost.

use indexmap::IndexMap;
use interfaces::{Cost, Day, Rental};
use tracing::debug;

/// A vertex of a [`RentalGraph`]. Only meaningful for the graph that made it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An edge of a [`RentalGraph`]. Only meaningful for the graph that made it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

#[derive(Debug, Clone)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    rental: Rental,
}

impl Edge {
    pub const fn source(&self) -> VertexId {
        self.source
    }

    pub const fn target(&self) -> VertexId {
        self.target
    }

    pub const fn rental(&self) -> &Rental {
        &self.rental
    }

    pub const fn weight(&self) -> Cost {
        self.rental.weight()
    }
}

#[derive(Debug, Clone)]
struct Vertex {
    day: Day,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

/// Directed multigraph of rentals. Parallel edges are kept.
///
/// Vertices are numbered in the order their day first appears. Edge lists
/// keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct RentalGraph {
    /// day -> vertex. A vertex id is its position in this map.
    vertices: IndexMap<Day, Vertex>,
    edges: Vec<Edge>,
}

impl RentalGraph {
    pub fn build(rentals: impl IntoIterator<Item = Rental>) -> Self {
        let mut graph = Self::default();
        for rental in rentals {
            graph.insert_rental(rental);
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built rental graph"
        );

        graph
    }

    fn insert_vertex(&mut self, day: Day) -> VertexId {
        let entry = self.vertices.entry(day);
        let id = VertexId(entry.index());
        entry.or_insert_with(|| Vertex {
            day,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        });
        id
    }

    fn insert_rental(&mut self, rental: Rental) -> EdgeId {
        let source = self.insert_vertex(rental.start_day());
        let target = self.insert_vertex(rental.end_day());

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            rental,
        });

        self.vertices[source.0].outgoing.push(id);
        self.vertices[target.0].incoming.push(id);

        id
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, day: Day) -> Option<VertexId> {
        self.vertices.get_index_of(&day).map(VertexId)
    }

    pub fn day(&self, vertex: VertexId) -> Day {
        self.vertices[vertex.0].day
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.0]
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Edges leaving `vertex`, i.e., rentals that start on its day.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        &self.vertices[vertex.0].outgoing
    }

    /// Edges entering `vertex`, i.e., rentals that end on its day.
    pub fn incoming(&self, vertex: VertexId) -> &[EdgeId] {
        &self.vertices[vertex.0].incoming
    }
}
