//! Route scoring and running best-path selection

use super::{Metric, Route, RouteScore};
use crate::graph::{Graph, GraphValue, NodeId};
use std::cmp::Ordering;

/// Score one accepted path under the active metric.
///
/// The label is the node names joined by `-`.
pub(crate) fn score_path<W: GraphValue, V: GraphValue>(
    graph: &Graph<W, V>,
    path: &[NodeId],
    metric: Metric,
) -> Route<W, V> {
    let label = path
        .iter()
        .map(|&id| graph.node_at(id).name.as_str())
        .collect::<Vec<_>>()
        .join("-");

    let score = match metric {
        Metric::NumberOfNodes => RouteScore::NumberOfNodes(path.len()),
        Metric::EdgeWeight => RouteScore::EdgeWeight(edge_weight_sum(graph, path)),
        Metric::NodeValue => RouteScore::NodeValue(node_value_sum(graph, path)),
        Metric::CombinedValue => {
            // Edge weights accumulate here too, but combined routes are
            // ranked and reported by the node-value sum alone.
            let _edge_total = edge_weight_sum(graph, path);
            RouteScore::CombinedValue(node_value_sum(graph, path))
        }
    };

    Route { label, score }
}

fn edge_weight_sum<W: GraphValue, V: GraphValue>(graph: &Graph<W, V>, path: &[NodeId]) -> W {
    let mut total = W::default();

    for pair in path.windows(2) {
        if let Some(edge) = graph.node_at(pair[0]).edge_to(pair[1]) {
            total.accumulate(&edge.weight);
        }
    }

    total
}

fn node_value_sum<W: GraphValue, V: GraphValue>(graph: &Graph<W, V>, path: &[NodeId]) -> V {
    let mut total = V::default();

    for &id in path {
        total.accumulate(&graph.node_at(id).value);
    }

    total
}

/// Running extrema over the routes accepted so far.
///
/// Holds only the current minimum and maximum with their labels; no
/// accepted path is retained beyond that. The first accepted route
/// installs both ends, after that a strictly lower score replaces the
/// minimum and a strictly higher one the maximum, so the first route
/// found keeps a tie.
#[derive(Debug)]
pub(crate) struct BestRoutes<W, V> {
    min: Option<Route<W, V>>,
    max: Option<Route<W, V>>,
    accepted: usize,
}

impl<W: GraphValue, V: GraphValue> BestRoutes<W, V> {
    pub(crate) fn new() -> Self {
        BestRoutes {
            min: None,
            max: None,
            accepted: 0,
        }
    }

    /// Fold one accepted route into the extrema.
    pub(crate) fn record(&mut self, route: Route<W, V>) {
        self.accepted += 1;

        let lower = match &self.min {
            Some(best) => route.score.compare(&best.score) == Some(Ordering::Less),
            None => true,
        };
        if lower {
            self.min = Some(route.clone());
        }

        let higher = match &self.max {
            Some(best) => route.score.compare(&best.score) == Some(Ordering::Greater),
            None => true,
        };
        if higher {
            self.max = Some(route);
        }
    }

    /// Number of routes folded in
    pub(crate) fn accepted(&self) -> usize {
        self.accepted
    }

    /// Minimum for ascending queries, maximum for descending.
    pub(crate) fn into_best(self, ascending: bool) -> Option<Route<W, V>> {
        if ascending {
            self.min
        } else {
            self.max
        }
    }
}
