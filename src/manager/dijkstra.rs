//! Cheapest costs from one day to every day it can reach.

use std::collections::HashMap;

use interfaces::Cost;
use tracing::trace;

use crate::manager::{
    graph::{EdgeId, RentalGraph, VertexId},
    queue::{AdaptableQueue, HeapQueue},
};

/// Tentative cost of a vertex. Every finite cost orders before `Unreached`,
/// so `Cost::MAX` is still a real, reachable cost.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    Finite(Cost),
    Unreached,
}

/// **map vertex -> cheapest total cost from the source**.
/// Only vertices with a cheapest cost that fits in a [`Cost`] are present.
pub type Distances = HashMap<VertexId, Cost>;

/// **map vertex -> last edge on a cheapest path to it**.
/// The source and unreachable vertices are absent.
pub type ShortestPathTree = HashMap<VertexId, EdgeId>;

/// Dijkstra from `source` using the binary heap queue.
pub fn shortest_distances(graph: &RentalGraph, source: VertexId) -> Distances {
    shortest_distances_with(graph, source, HeapQueue::with_capacity(graph.vertex_count()))
}

/// Dijkstra from `source` using the given (empty) queue.
///
/// Paths whose total would overflow a [`Cost`] are never taken. A vertex that
/// can only be reached that way is left out of the result.
pub fn shortest_distances_with<Q: AdaptableQueue<Distance>>(
    graph: &RentalGraph,
    source: VertexId,
    mut queue: Q,
) -> Distances {
    let vertices: Vec<VertexId> = graph.vertices().collect();

    let mut tentative = vec![Distance::Unreached; vertices.len()];
    tentative[source.index()] = Distance::Finite(0);

    for vertex in &vertices {
        queue.insert(vertex.index(), tentative[vertex.index()]);
    }

    let mut settled = Distances::with_capacity(vertices.len());

    // stops at the first `Unreached`: everything still queued is too
    while let Some((idx, Distance::Finite(distance))) = queue.pop_min() {
        let u = vertices[idx];
        settled.insert(u, distance);
        trace!(day = graph.day(u), distance, "settled");

        for &edge_id in graph.outgoing(u) {
            let edge = graph.edge(edge_id);
            let v = edge.target();

            if settled.contains_key(&v) {
                continue;
            }

            let Some(candidate) = distance.checked_add(edge.weight()) else {
                trace!(from = graph.day(u), to = graph.day(v), "cost overflow");
                continue;
            };

            if Distance::Finite(candidate) < tentative[v.index()] {
                tentative[v.index()] = Distance::Finite(candidate);
                queue.replace_key(v.index(), Distance::Finite(candidate));
                trace!(from = graph.day(u), to = graph.day(v), candidate, "relaxed");
            }
        }
    }

    settled
}

/// For every reachable vertex except `source`, picks an incoming edge that lies
/// on a cheapest path. When several do, the last one in incoming order wins.
pub fn shortest_path_tree(
    graph: &RentalGraph,
    source: VertexId,
    distances: &Distances,
) -> ShortestPathTree {
    let mut tree = ShortestPathTree::new();

    for v in graph.vertices().filter(|&v| v != source) {
        let Some(&to_v) = distances.get(&v) else {
            continue;
        };

        for &edge_id in graph.incoming(v) {
            let edge = graph.edge(edge_id);
            let Some(&to_u) = distances.get(&edge.source()) else {
                continue;
            };

            if to_u.checked_add(edge.weight()) == Some(to_v) {
                tree.insert(v, edge_id);
            }
        }
    }

    tree
}
