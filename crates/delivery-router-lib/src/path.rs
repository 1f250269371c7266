use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Error, Result};
use crate::graph::RouteGraph;
use crate::location::Location;

/// Outcome of a single-pair shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    /// Ordered vertices from source to target inclusive, plus total weight.
    Found {
        steps: Vec<Location>,
        distance: f64,
    },
    /// No connecting route exists between the endpoints.
    Unreachable,
}

impl PathOutcome {
    /// Total weight of the path, `+inf` when unreachable.
    pub fn distance(&self) -> f64 {
        match self {
            PathOutcome::Found { distance, .. } => *distance,
            PathOutcome::Unreachable => f64::INFINITY,
        }
    }

    /// Vertices of the path; empty when unreachable.
    pub fn steps(&self) -> &[Location] {
        match self {
            PathOutcome::Found { steps, .. } => steps,
            PathOutcome::Unreachable => &[],
        }
    }

    /// Extract the path vertices, consuming the outcome.
    pub fn into_steps(self) -> Vec<Location> {
        match self {
            PathOutcome::Found { steps, .. } => steps,
            PathOutcome::Unreachable => Vec::new(),
        }
    }
}

/// Run Dijkstra's algorithm over the graph's current routes and return the
/// minimum-weight path between `source` and `target`.
///
/// The search is recomputed from the adjacency on every call, so results
/// always reflect the latest topology and weights. A query with equal
/// endpoints yields the singleton path with distance zero; disconnected
/// endpoints yield [`PathOutcome::Unreachable`]. Ties between equal-weight
/// paths are broken by location name ordering.
pub fn shortest_path(
    graph: &RouteGraph,
    source: &Location,
    target: &Location,
) -> Result<PathOutcome> {
    let source = resolve(graph, source)?;
    let target = resolve(graph, target)?;

    if source == target {
        return Ok(PathOutcome::Found {
            steps: vec![source.clone()],
            distance: 0.0,
        });
    }

    let mut distances: HashMap<&Location, f64> = HashMap::new();
    let mut parents: HashMap<&Location, Option<&Location>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(source, 0.0);
    parents.insert(source, None);
    queue.push(QueueEntry::new(source, 0.0));

    while let Some(entry) = queue.pop() {
        let Some(&settled) = distances.get(entry.node) else {
            continue;
        };
        if entry.cost.0 > settled {
            // Stale heap entry superseded by a cheaper relaxation.
            continue;
        }

        if entry.node == target {
            return Ok(PathOutcome::Found {
                steps: reconstruct_path(&parents, source, target),
                distance: settled,
            });
        }

        for (next, weight) in graph.neighbours(entry.node) {
            let next_cost = settled + weight;
            if next_cost < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    Ok(PathOutcome::Unreachable)
}

fn resolve<'g>(graph: &'g RouteGraph, location: &Location) -> Result<&'g Location> {
    graph.resolve(location).ok_or_else(|| Error::UnknownLocation {
        name: location.name().to_string(),
    })
}

fn reconstruct_path(
    parents: &HashMap<&Location, Option<&Location>>,
    source: &Location,
    target: &Location,
) -> Vec<Location> {
    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(node) = current {
        path.push(node.clone());
        if node == source {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g Location,
    cost: FloatOrd,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g Location, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> RouteGraph {
        let mut graph = RouteGraph::new();
        for name in ["A", "B", "C", "D"] {
            graph.add_location(Location::new(name)).expect("add vertex");
        }
        graph
            .set_route(&Location::new("A"), &Location::new("B"), 1.0)
            .expect("route A-B");
        graph
            .set_route(&Location::new("B"), &Location::new("C"), 2.0)
            .expect("route B-C");
        graph
    }

    #[test]
    fn equal_endpoints_yield_a_singleton_path() {
        let graph = line_graph();
        let outcome =
            shortest_path(&graph, &Location::new("A"), &Location::new("A")).expect("query");
        assert_eq!(outcome.steps(), &[Location::new("A")]);
        assert_eq!(outcome.distance(), 0.0);
    }

    #[test]
    fn disconnected_endpoints_are_unreachable() {
        let graph = line_graph();
        let outcome =
            shortest_path(&graph, &Location::new("A"), &Location::new("D")).expect("query");
        assert_eq!(outcome, PathOutcome::Unreachable);
        assert!(outcome.distance().is_infinite());
        assert!(outcome.steps().is_empty());
    }

    #[test]
    fn unknown_endpoints_are_an_error() {
        let graph = line_graph();
        let err = shortest_path(&graph, &Location::new("A"), &Location::new("Z")).unwrap_err();
        assert!(matches!(err, Error::UnknownLocation { name } if name == "Z"));
    }

    #[test]
    fn path_weights_accumulate_along_the_line() {
        let graph = line_graph();
        let outcome =
            shortest_path(&graph, &Location::new("A"), &Location::new("C")).expect("query");
        assert_eq!(
            outcome.steps(),
            &[Location::new("A"), Location::new("B"), Location::new("C")]
        );
        assert_eq!(outcome.distance(), 3.0);
    }
}
