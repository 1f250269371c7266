//! Built-in delivery network covering the Boyacá road map.
//!
//! Pure data; no I/O. Consumers that need a different network can build
//! their own [`RouteGraph`] directly.

use crate::error::Result;
use crate::graph::RouteGraph;
use crate::location::Location;

/// Towns served by the built-in network.
const TOWNS: [&str; 19] = [
    "Tunja",
    "Duitama",
    "Sogamoso",
    "Chiquinquirá",
    "Ramiriquí",
    "Zipaquirá",
    "Miraflores",
    "Paipa",
    "Samacá",
    "Moniquirá",
    "Barbosa",
    "Tópaga",
    "Nobsa",
    "Villa de Leyva",
    "Motavita",
    "Garagoa",
    "Socotá",
    "Chiscas",
    "Monguí",
];

/// Road segments as (from, to, kilometres).
const ROADS: [(&str, &str, f64); 44] = [
    ("Tunja", "Duitama", 54.5),
    ("Tunja", "Sogamoso", 70.6),
    ("Tunja", "Chiquinquirá", 77.2),
    ("Duitama", "Miraflores", 149.2),
    ("Duitama", "Sogamoso", 18.0),
    ("Sogamoso", "Ramiriquí", 98.8),
    ("Chiquinquirá", "Zipaquirá", 94.5),
    ("Miraflores", "Paipa", 134.8),
    ("Ramiriquí", "Samacá", 51.6),
    ("Paipa", "Samacá", 70.0),
    ("Zipaquirá", "Samacá", 120.6),
    ("Tunja", "Moniquirá", 60.6),
    ("Moniquirá", "Barbosa", 10.1),
    ("Barbosa", "Tópaga", 140.3),
    ("Tópaga", "Nobsa", 17.4),
    ("Nobsa", "Villa de Leyva", 105.5),
    ("Villa de Leyva", "Motavita", 41.8),
    ("Motavita", "Garagoa", 82.4),
    ("Garagoa", "Socotá", 206.4),
    ("Socotá", "Chiscas", 129.5),
    ("Chiscas", "Monguí", 229.1),
    ("Monguí", "Tunja", 83.0),
    ("Sogamoso", "Garagoa", 146.2),
    ("Zipaquirá", "Nobsa", 187.2),
    ("Paipa", "Tópaga", 42.2),
    ("Paipa", "Duitama", 15.0),
    ("Tópaga", "Sogamoso", 12.0),
    ("Miraflores", "Villa de Leyva", 133.2),
    ("Tunja", "Motavita", 8.5),
    ("Tunja", "Samacá", 32.0),
    ("Tunja", "Villa de Leyva", 45.0),
    ("Tunja", "Ramiriquí", 27.3),
    ("Duitama", "Nobsa", 7.2),
    ("Sogamoso", "Monguí", 19.2),
    ("Sogamoso", "Nobsa", 9.8),
    ("Chiquinquirá", "Villa de Leyva", 37.8),
    ("Villa de Leyva", "Samacá", 30.5),
    ("Ramiriquí", "Garagoa", 45.6),
    ("Garagoa", "Miraflores", 25.3),
    ("Moniquirá", "Villa de Leyva", 42.7),
    ("Socotá", "Monguí", 89.4),
    ("Paipa", "Villa de Leyva", 58.3),
    ("Motavita", "Samacá", 25.8),
    ("Monguí", "Tópaga", 15.6),
];

/// Build the built-in delivery network.
pub fn default_network() -> Result<RouteGraph> {
    let mut graph = RouteGraph::new();
    for town in TOWNS {
        graph.add_location(Location::new(town))?;
    }
    for (from, to, distance) in ROADS {
        graph.set_route(&Location::new(from), &Location::new(to), distance)?;
    }
    Ok(graph)
}
