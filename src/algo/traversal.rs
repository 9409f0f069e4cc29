//! Depth-first route enumeration
//!
//! Recursive backtracking search producing every simple path from the
//! source to the destination. Each completed candidate is filtered and
//! scored on the spot; nothing is batched, only the running extrema
//! survive the search. All per-call configuration travels in a
//! [`SearchPlan`], so a traversal borrows the graph immutably and
//! leaves no state behind.

use super::score::{score_path, BestRoutes};
use super::{filter, Metric};
use crate::graph::{Graph, GraphValue, NodeId};
use rustc_hash::FxHashSet;
use tracing::trace;

/// Call-local configuration for one traversal
pub(crate) struct SearchPlan<'a, W, V> {
    pub graph: &'a Graph<W, V>,
    pub destination: NodeId,
    /// Required nodes: source first, destination last
    pub required: &'a [NodeId],
    pub preserve_order: bool,
    pub metric: Metric,
}

/// Enumerate every simple path from `source` to the plan's destination,
/// folding accepted candidates into the returned extrema.
pub(crate) fn enumerate<W: GraphValue, V: GraphValue>(
    plan: &SearchPlan<'_, W, V>,
    source: NodeId,
) -> BestRoutes<W, V> {
    let mut best = BestRoutes::new();
    let mut stack = Vec::new();
    let mut on_path = FxHashSet::default();

    dfs(plan, source, &mut stack, &mut on_path, &mut best);

    trace!(accepted = best.accepted(), "route enumeration finished");
    best
}

fn dfs<W: GraphValue, V: GraphValue>(
    plan: &SearchPlan<'_, W, V>,
    current: NodeId,
    stack: &mut Vec<NodeId>,
    on_path: &mut FxHashSet<NodeId>,
    best: &mut BestRoutes<W, V>,
) {
    stack.push(current);
    on_path.insert(current);

    for edge in plan.graph.node_at(current).edges() {
        let next = edge.target;

        // Simple-path property: never revisit a node on the stack
        if on_path.contains(&next) {
            continue;
        }

        if next == plan.destination {
            stack.push(next);

            let accepted = if plan.preserve_order {
                filter::contains_in_order(stack, plan.required)
            } else {
                filter::contains_all(stack, plan.required)
            };

            if accepted {
                best.record(score_path(plan.graph, stack, plan.metric));
            }

            stack.pop();
        } else {
            dfs(plan, next, stack, on_path, best);
        }
    }

    stack.pop();
    on_path.remove(&current);
}
