use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::location::Location;

/// Undirected simple weighted graph over [`Location`] vertices.
///
/// Weights are road distances in kilometres. The graph holds no self-loops
/// and at most one route per unordered pair; setting a route for an already
/// connected pair replaces the stored weight.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<Location, HashMap<Location, f64>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location vertex. Re-adding an existing location is a no-op.
    pub fn add_location(&mut self, location: Location) -> Result<()> {
        if location.name().is_empty() {
            return Err(Error::EmptyLocationName);
        }
        self.adjacency.entry(location).or_default();
        Ok(())
    }

    /// Connect two previously added locations with a symmetric route of
    /// `distance` kilometres, overwriting any existing route between them.
    pub fn set_route(&mut self, from: &Location, to: &Location, distance: f64) -> Result<()> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidDistance { distance });
        }
        if from == to {
            return Err(Error::SelfLoop {
                name: from.name().to_string(),
            });
        }
        self.ensure_known(from)?;
        self.ensure_known(to)?;

        for (a, b) in [(from, to), (to, from)] {
            if let Some(edges) = self.adjacency.get_mut(a) {
                edges.insert(b.clone(), distance);
            }
        }
        Ok(())
    }

    /// Whether the graph holds a vertex equal to `location`.
    pub fn contains(&self, location: &Location) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Iterate over the current vertex set. Order is not significant.
    pub fn vertices(&self) -> impl Iterator<Item = &Location> {
        self.adjacency.keys()
    }

    /// Number of locations currently in the graph.
    pub fn location_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of routes currently in the graph.
    pub fn route_count(&self) -> usize {
        // Each route is stored once per endpoint.
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }

    /// Weight of the route between `a` and `b`, if one exists.
    pub fn edge_weight(&self, a: &Location, b: &Location) -> Option<f64> {
        self.adjacency.get(a)?.get(b).copied()
    }

    /// Iterate over the neighbours of `location` with their route weights.
    pub fn neighbours(&self, location: &Location) -> impl Iterator<Item = (&Location, f64)> {
        self.adjacency
            .get(location)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(loc, weight)| (loc, *weight)))
    }

    /// Resolve the graph's stored vertex equal to `location`, so callers can
    /// borrow a key that lives as long as the graph itself.
    pub(crate) fn resolve(&self, location: &Location) -> Option<&Location> {
        self.adjacency.get_key_value(location).map(|(key, _)| key)
    }

    fn ensure_known(&self, location: &Location) -> Result<()> {
        if self.adjacency.contains_key(location) {
            Ok(())
        } else {
            Err(Error::UnknownLocation {
                name: location.name().to_string(),
            })
        }
    }
}
