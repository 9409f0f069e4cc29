//! Routegraph
//!
//! A graph library built around exhaustive route search: every simple
//! path between two named nodes is enumerated depth-first, optionally
//! constrained to pass through a set of intermediary nodes, and the
//! best path under a chosen metric is returned. Node values and edge
//! weights are generic; metrics that need arithmetic on them are gated
//! per type before any traversal starts.
//!
//! This is intentionally not a shortest-path library. Enumerating all
//! simple paths is exponential in dense graphs; the trade is support
//! for arbitrary scoring metrics and inclusion constraints that
//! shortest-path algorithms cannot express.
//!
//! # Example Usage
//!
//! ```rust
//! use routegraph::{Graph, Metric, RouteScore};
//!
//! let mut graph: Graph<f64, i64> = Graph::new();
//!
//! // Endpoints are created lazily by connect
//! graph.connect_with_default("A", "B", 2.0, false);
//! graph.connect_with_default("B", "C", 3.0, false);
//! graph.connect_with_default("A", "C", 10.0, false);
//!
//! let route = graph
//!     .get_route(&["A", "C"], false, true, Metric::EdgeWeight)
//!     .unwrap();
//!
//! assert_eq!(route.label, "A-B-C");
//! assert_eq!(route.score, RouteScore::EdgeWeight(5.0));
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{find_route, Metric, Route, RouteError, RouteResult, RouteScore};
pub use graph::{Edge, EdgeSpec, Graph, GraphValue, Node, NodeId};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
