//! Delivery route engine entry points.
//!
//! This crate models a fixed network of named locations as an undirected
//! weighted graph, computes minimum-distance paths with Dijkstra's
//! algorithm, derives monetary cost and travel time from the distance, and
//! keeps a persisted history of computed routes. Higher-level consumers
//! (CLI, UI layers) should only depend on the functions exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod cost;
pub mod error;
pub mod graph;
pub mod history;
pub mod location;
pub mod network;
pub mod path;
pub mod routing;

pub use cost::CostModel;
pub use error::{Error, Result};
pub use graph::RouteGraph;
pub use history::{default_history_path, HistoryStore, RouteHistoryRecord};
pub use location::Location;
pub use network::default_network;
pub use path::{shortest_path, PathOutcome};
pub use routing::{calculate_route, format_path, RouteResult};
