//! In-memory graph storage
//!
//! The graph owns every node in an arena indexed by [`NodeId`]; a
//! secondary insertion-ordered name index keys nodes by their unique
//! name. Insertion order is observable: it fixes the order in which
//! adjacency is enumerated, and with it which route wins a tie.
//!
//! Mutations signal collisions with a boolean `false` rather than an
//! error; a duplicate name or duplicate directed edge is an idempotent
//! no-op query, not a failure.

use super::node::Node;
use super::types::NodeId;
use super::value::GraphValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry of an edge list accepted by [`Graph::load_edge_list`].
///
/// Node values and the bidirectional flag are optional in serialized
/// form and fall back to their defaults, so a JSON edge list may carry
/// anything from a bare `{a, b, weight}` triple up to the full record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "W: Serialize, V: Serialize",
    deserialize = "W: Deserialize<'de>, V: Deserialize<'de> + Default"
))]
pub struct EdgeSpec<W, V> {
    /// Source node name
    pub a: String,

    /// Value assigned to the source if it is created by this entry
    #[serde(default)]
    pub value_a: V,

    /// Destination node name
    pub b: String,

    /// Value assigned to the destination if it is created by this entry
    #[serde(default)]
    pub value_b: V,

    /// Edge weight
    pub weight: W,

    /// Also add the reverse edge
    #[serde(default)]
    pub bidirectional: bool,
}

impl<W, V: Default> EdgeSpec<W, V> {
    /// Directed edge with defaulted node values
    pub fn new(a: impl Into<String>, b: impl Into<String>, weight: W) -> Self {
        EdgeSpec {
            a: a.into(),
            value_a: V::default(),
            b: b.into(),
            value_b: V::default(),
            weight,
            bidirectional: false,
        }
    }

    /// Request the reverse edge as well
    pub fn bidirectional(mut self) -> Self {
        self.bidirectional = true;
        self
    }

    /// Attach node values to both endpoints
    pub fn with_values(mut self, value_a: V, value_b: V) -> Self {
        self.value_a = value_a;
        self.value_b = value_b;
        self
    }
}

/// In-memory graph keyed by node name
///
/// `W` is the edge weight type, `V` the node value type. Both only need
/// to be storable ([`GraphValue`]); the route metrics check arithmetic
/// capability separately before any traversal.
#[derive(Debug, Clone, Default)]
pub struct Graph<W, V> {
    /// Node arena; a node's `NodeId` is its position here
    nodes: Vec<Node<W, V>>,

    /// Name index, in insertion order
    names: IndexMap<String, NodeId>,
}

impl<W: GraphValue, V: GraphValue> Graph<W, V> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            names: IndexMap::new(),
        }
    }

    /// Create a node carrying the default value.
    ///
    /// Returns false (and changes nothing) when the name is taken.
    pub fn create_node(&mut self, name: impl Into<String>) -> bool {
        self.create_node_with_value(name, V::default())
    }

    /// Create a node carrying an explicit value.
    ///
    /// Returns false (and changes nothing) when the name is taken; the
    /// value from the first successful call is the one that sticks.
    pub fn create_node_with_value(&mut self, name: impl Into<String>, value: V) -> bool {
        let name = name.into();
        if self.names.contains_key(&name) {
            return false;
        }
        self.intern(name, value);
        true
    }

    /// Look up a node by name, creating it when absent.
    fn intern(&mut self, name: String, value: V) -> NodeId {
        if let Some(&id) = self.names.get(&name) {
            return id;
        }
        let id = NodeId::new(self.nodes.len() as u64);
        self.nodes.push(Node::new(id, name.clone(), value));
        self.names.insert(name, id);
        id
    }

    /// Connect two nodes with a directed (optionally bidirectional) edge.
    ///
    /// Missing endpoints are created lazily with the supplied values.
    /// Returns false without adding anything when the requested directed
    /// edge already exists; a bidirectional request demands that BOTH
    /// directions be absent. A bidirectional self-connect adds the
    /// single self-edge once.
    pub fn connect(
        &mut self,
        a: impl Into<String>,
        value_a: V,
        b: impl Into<String>,
        value_b: V,
        weight: W,
        bidirectional: bool,
    ) -> bool {
        let id_a = self.intern(a.into(), value_a);
        let id_b = self.intern(b.into(), value_b);

        if bidirectional {
            let forward = self.nodes[id_a.index()].is_connected_to(id_b);
            let reverse = self.nodes[id_b.index()].is_connected_to(id_a);
            if forward || reverse {
                debug!(a = %self.nodes[id_a.index()].name, b = %self.nodes[id_b.index()].name,
                    "bidirectional connect rejected, edge already present");
                return false;
            }
            self.nodes[id_a.index()].connect_to(id_b, weight.clone());
            if id_a != id_b {
                self.nodes[id_b.index()].connect_to(id_a, weight);
            }
        } else {
            if self.nodes[id_a.index()].is_connected_to(id_b) {
                debug!(a = %self.nodes[id_a.index()].name, b = %self.nodes[id_b.index()].name,
                    "connect rejected, edge already present");
                return false;
            }
            self.nodes[id_a.index()].connect_to(id_b, weight);
        }

        true
    }

    /// [`connect`](Self::connect) with defaulted endpoint values.
    pub fn connect_with_default(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        weight: W,
        bidirectional: bool,
    ) -> bool {
        self.connect(a, V::default(), b, V::default(), weight, bidirectional)
    }

    /// Apply a sequence of connect operations.
    ///
    /// Stops at the first entry that fails and WIPES THE WHOLE GRAPH,
    /// including nodes and edges that existed before this call. This is
    /// a destructive reset, not a rollback to the pre-call state. An empty
    /// list returns false and leaves the graph untouched.
    pub fn load_edge_list<I>(&mut self, edges: I) -> bool
    where
        I: IntoIterator<Item = EdgeSpec<W, V>>,
    {
        let mut loaded = false;

        for spec in edges {
            loaded = self.connect(
                spec.a,
                spec.value_a,
                spec.b,
                spec.value_b,
                spec.weight,
                spec.bidirectional,
            );

            if !loaded {
                debug!("edge list entry rejected, discarding graph");
                self.clear();
                break;
            }
        }

        loaded
    }

    /// Drop every node and edge. The only way nodes leave the graph.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.names.clear();
    }

    /// Resolve a node name to its ID
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Get a node by name
    pub fn get_node(&self, name: &str) -> Option<&Node<W, V>> {
        self.node_id(name).map(|id| &self.nodes[id.index()])
    }

    /// Get a node by ID
    pub fn node(&self, id: NodeId) -> Option<&Node<W, V>> {
        self.nodes.get(id.index())
    }

    /// Get a node by an ID this graph handed out. IDs never dangle:
    /// nodes are only removed wholesale through [`clear`](Self::clear).
    pub(crate) fn node_at(&self, id: NodeId) -> &Node<W, V> {
        &self.nodes[id.index()]
    }

    /// Check for a directed edge between two named nodes
    pub fn is_connected(&self, a: &str, b: &str) -> bool {
        match (self.node_id(a), self.node_id(b)) {
            (Some(id_a), Some(id_b)) => self.nodes[id_a.index()].is_connected_to(id_b),
            _ => false,
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.degree()).sum()
    }

    /// True when the graph holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<W, V>> {
        self.nodes.iter()
    }
}
