//! Which days can be reached from a start day at all, regardless of cost.

use std::collections::{HashMap, HashSet};

use interfaces::Day;

use crate::manager::graph::{EdgeId, RentalGraph, VertexId};

/// The result of a depth-first traversal from one vertex.
#[derive(Debug, Clone)]
pub struct Reachability {
    /// vertices in the order they were first visited, start first
    pub visited: Vec<VertexId>,

    /// **map vertex -> edge it was first reached through**.
    /// Has an entry for every visited vertex except the start.
    pub forest: HashMap<VertexId, EdgeId>,
}

impl Reachability {
    pub fn reaches(&self, vertex: VertexId) -> bool {
        self.visited.contains(&vertex)
    }

    /// The latest day the traversal got to. This is where a chain of rentals
    /// from the start runs out.
    pub fn furthest_day(&self, graph: &RentalGraph) -> Option<Day> {
        self.visited.iter().map(|&v| graph.day(v)).max()
    }
}

/// Depth-first traversal over outgoing edges. Visits vertices in the same
/// order a recursive traversal would, without using the call stack.
pub fn reachable_from(graph: &RentalGraph, start: VertexId) -> Reachability {
    let mut known = HashSet::from([start]);
    let mut visited = vec![start];
    let mut forest = HashMap::new();

    // (vertex, index of the next outgoing edge to look at)
    let mut stack = vec![(start, 0)];

    while let Some((vertex, next)) = stack.last_mut() {
        let Some(&edge_id) = graph.outgoing(*vertex).get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;

        let target = graph.edge(edge_id).target();
        if known.insert(target) {
            visited.push(target);
            forest.insert(target, edge_id);
            stack.push((target, 0));
        }
    }

    Reachability { visited, forest }
}
