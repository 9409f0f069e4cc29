//! Route search module
//!
//! Exhaustive enumeration of simple paths between two named nodes with
//! metric-based best-path selection. This is deliberately not a
//! shortest-path algorithm: every simple path is visited and scored,
//! which is exponential in the worst case, in exchange for supporting
//! arbitrary metrics and intermediary-node constraints.

mod filter;
mod score;
mod traversal;

use crate::graph::{Graph, GraphValue};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// The numeric function used to score a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Sum of edge weights along the path
    EdgeWeight,
    /// Sum of node values along the path
    NodeValue,
    /// Node-value sum, with edge weights accumulated alongside
    CombinedValue,
    /// Node count of the path
    NumberOfNodes,
}

impl Metric {
    /// Check the metric's arithmetic requirements against the graph's
    /// value types. Resolved per monomorphization; the branch folds to
    /// a constant.
    pub fn supported<W: GraphValue, V: GraphValue>(self) -> bool {
        match self {
            Metric::EdgeWeight => W::ORDERED && W::ACCUMULATES,
            Metric::NodeValue => V::ORDERED && V::ACCUMULATES,
            Metric::CombinedValue => W::ACCUMULATES && V::ORDERED && V::ACCUMULATES,
            Metric::NumberOfNodes => true,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::EdgeWeight => "EdgeWeight",
            Metric::NodeValue => "NodeValue",
            Metric::CombinedValue => "CombinedValue",
            Metric::NumberOfNodes => "NumberOfNodes",
        };
        write!(f, "{}", name)
    }
}

/// Score of a found route, tagged by the metric that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RouteScore<W, V> {
    NumberOfNodes(usize),
    EdgeWeight(W),
    NodeValue(V),
    /// Node-value sum published for the combined metric
    CombinedValue(V),
}

impl<W: GraphValue, V: GraphValue> RouteScore<W, V> {
    /// Compare two scores of the same metric. Scores of different
    /// metrics are unordered.
    pub(crate) fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (RouteScore::NumberOfNodes(a), RouteScore::NumberOfNodes(b)) => Some(a.cmp(b)),
            (RouteScore::EdgeWeight(a), RouteScore::EdgeWeight(b)) => a.compare(b),
            (RouteScore::NodeValue(a), RouteScore::NodeValue(b))
            | (RouteScore::CombinedValue(a), RouteScore::CombinedValue(b)) => a.compare(b),
            _ => None,
        }
    }
}

impl<W: fmt::Display, V: fmt::Display> fmt::Display for RouteScore<W, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteScore::NumberOfNodes(n) => write!(f, "{}", n),
            RouteScore::EdgeWeight(w) => write!(f, "{}", w),
            RouteScore::NodeValue(v) | RouteScore::CombinedValue(v) => write!(f, "{}", v),
        }
    }
}

/// A found route: the path label plus its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<W, V> {
    /// Node names along the path, joined by `-`
    pub label: String,

    /// Metric-specific score of the path
    pub score: RouteScore<W, V>,
}

/// Errors a route query can produce
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// The search completed but no path satisfied the query
    #[error("no route exists")]
    NoRoute,

    /// Source or destination name did not resolve to a node
    #[error("node \"{0}\" does not exist")]
    MissingNode(String),

    /// The graph's value types lack the arithmetic the metric needs
    #[error("metric {0} is not supported by the graph's value types")]
    UnsupportedMetric(Metric),
}

pub type RouteResult<W, V> = Result<Route<W, V>, RouteError>;

/// Find the best route between the first and last of `names`.
///
/// Every simple path from the first name to the last is enumerated
/// depth-first; paths that do not contain all of `names` (in the given
/// order when `preserve_order` is set) are discarded, the rest are
/// scored under `metric`. Ascending queries return the minimum-scoring
/// route, descending the maximum. Ties keep the first route found,
/// which follows node and edge insertion order.
pub fn find_route<W, V, S>(
    graph: &Graph<W, V>,
    names: &[S],
    preserve_order: bool,
    ascending: bool,
    metric: Metric,
) -> RouteResult<W, V>
where
    W: GraphValue,
    V: GraphValue,
    S: AsRef<str>,
{
    let (first, last) = match (names.first(), names.last()) {
        (Some(first), Some(last)) => (first.as_ref(), last.as_ref()),
        _ => return Err(RouteError::NoRoute),
    };

    let source = graph
        .node_id(first)
        .ok_or_else(|| RouteError::MissingNode(first.to_string()))?;
    let destination = graph
        .node_id(last)
        .ok_or_else(|| RouteError::MissingNode(last.to_string()))?;

    if !metric.supported::<W, V>() {
        debug!(%metric, "route query rejected before traversal");
        return Err(RouteError::UnsupportedMetric(metric));
    }

    // Resolve the required names up front; a name absent from the graph
    // can match no path, so the query has no route.
    let mut required = Vec::with_capacity(names.len());
    for name in names {
        match graph.node_id(name.as_ref()) {
            Some(id) => required.push(id),
            None => return Err(RouteError::NoRoute),
        }
    }

    let plan = traversal::SearchPlan {
        graph,
        destination,
        required: &required,
        preserve_order,
        metric,
    };

    enumerate_best(&plan, source, ascending)
}

fn enumerate_best<W: GraphValue, V: GraphValue>(
    plan: &traversal::SearchPlan<'_, W, V>,
    source: crate::graph::NodeId,
    ascending: bool,
) -> RouteResult<W, V> {
    traversal::enumerate(plan, source)
        .into_best(ascending)
        .ok_or(RouteError::NoRoute)
}

impl<W: GraphValue, V: GraphValue> Graph<W, V> {
    /// Route query entry point; see [`find_route`].
    ///
    /// The first element of `names` is the source, the last the
    /// destination, anything in between a required intermediary.
    pub fn get_route(
        &self,
        names: &[impl AsRef<str>],
        preserve_order: bool,
        ascending: bool,
        metric: Metric,
    ) -> RouteResult<W, V> {
        find_route(self, names, preserve_order, ascending, metric)
    }
}
