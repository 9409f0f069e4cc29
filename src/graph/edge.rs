//! Edge implementation
//!
//! Edges are directed and owned by their source node. The destination is
//! held as a [`NodeId`] back-reference into the graph arena; the graph,
//! not the edge, owns the destination node.

use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A directed, weighted edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<W> {
    /// Destination node (edge goes TO this node)
    pub target: NodeId,

    /// Weight carried by this edge
    pub weight: W,
}

impl<W> Edge<W> {
    /// Create a new directed edge
    pub fn new(target: NodeId, weight: W) -> Self {
        Edge { target, weight }
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: NodeId) -> bool {
        self.target == node
    }
}
