use tracing::{info, warn};

use crate::cost::CostModel;
use crate::error::Result;
use crate::graph::RouteGraph;
use crate::location::Location;
use crate::path::shortest_path;

/// Immutable result of one route query: the path from source to target
/// inclusive, its total distance, and the derived cost and time.
///
/// An unreachable target is represented by an empty path with infinite
/// distance, never by an absent path.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    path: Vec<Location>,
    distance: f64,
    cost: f64,
    time: f64,
}

impl RouteResult {
    /// Ordered locations from source to target inclusive; empty when no
    /// route exists.
    pub fn path(&self) -> &[Location] {
        &self.path
    }

    /// Total distance in kilometres; `+inf` when no route exists.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Monetary cost derived from the distance.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Travel time in hours derived from the distance.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Whether a connecting route was found.
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Compute the cheapest route between two locations and derive its monetary
/// cost and travel time from the model's constants.
///
/// The query always runs against the graph's current routes. Unknown
/// endpoints are an error; a disconnected pair is a normal result with an
/// empty path and infinite distance.
pub fn calculate_route(
    graph: &RouteGraph,
    model: &CostModel,
    source: &Location,
    target: &Location,
) -> Result<RouteResult> {
    let outcome = shortest_path(graph, source, target)?;
    let distance = outcome.distance();
    let result = RouteResult {
        path: outcome.into_steps(),
        distance,
        cost: model.cost(distance),
        time: model.time(distance),
    };

    if result.is_reachable() {
        info!(
            source = source.name(),
            target = target.name(),
            path = %format_path(result.path()),
            distance_km = result.distance,
            cost = result.cost,
            time_h = result.time,
            "route calculated"
        );
    } else {
        warn!(
            source = source.name(),
            target = target.name(),
            "no route found"
        );
    }

    Ok(result)
}

/// Render a path as `A -> B -> C` for logs and textual output.
pub fn format_path(path: &[Location]) -> String {
    path.iter()
        .map(Location::name)
        .collect::<Vec<_>>()
        .join(" -> ")
}
