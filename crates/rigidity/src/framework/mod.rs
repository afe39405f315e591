//! Bar-joint framework graphs with exact-coordinate embeddings.
//!
//! Purpose
//! - Hold the immutable snapshot the analysis operates on: a node arena with
//!   exact positions, an undirected simple edge list, and adjacency lists.
//!
//! Why an arena
//! - Nodes are identified by their insertion index (`NodeId`), never by their
//!   coordinates. Two joints may coincide in space without colliding in the
//!   graph, and topology stays decoupled from geometry.
//!
//! Ordering
//! - Node and edge enumeration order is insertion order and is stable; every
//!   discovery order the `rigid` module exposes derives from it.
//!
//! Code cross-refs: `special` (canned example frameworks), `rand`
//! (deterministic random frameworks for property tests).

use std::collections::BTreeSet;

use crate::exact::{rat_vec, Rat};

pub mod rand;
pub mod special;

/// Stable index of a node in its framework's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// Set of node indices with deterministic iteration order.
pub type NodeSet = BTreeSet<NodeId>;

/// A pivot joint: an exact position in R^k, k >= the embedding dimension.
#[derive(Clone, Debug)]
pub struct Node {
    pub pos: Vec<Rat>,
}

/// An immutable bar-joint framework: joints plus rigid bars.
///
/// Simple undirected graph; `add_edge` rejects self-loops and duplicates.
#[derive(Clone, Debug, Default)]
pub struct Framework {
    nodes: Vec<Node>,
    edges: Vec<(NodeId, NodeId)>,
    adj: Vec<Vec<NodeId>>,
}

/// An induced subgraph keeping the parent framework's node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InducedSubgraph {
    pub nodes: NodeSet,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Framework {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a joint at an exact position and return its id.
    pub fn add_node(&mut self, pos: Vec<Rat>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { pos });
        self.adj.push(Vec::new());
        id
    }

    /// Convenience: add a joint at integer coordinates.
    pub fn add_node_ints(&mut self, coords: &[i64]) -> NodeId {
        self.add_node(rat_vec(coords))
    }

    /// Add a bar between two distinct joints.
    ///
    /// Returns false (and leaves the framework unchanged) for self-loops,
    /// duplicate bars, or out-of-range ids.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b || a.0 >= self.nodes.len() || b.0 >= self.nodes.len() {
            return false;
        }
        let (lo, hi) = if a.0 < b.0 { (a, b) } else { (b, a) };
        if self.has_edge(lo, hi) {
            return false;
        }
        self.edges.push((lo, hi));
        self.adj[lo.0].push(hi);
        self.adj[hi.0].push(lo);
        true
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Bars in insertion order, endpoints normalized to (smaller, larger).
    #[inline]
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Joints adjacent to `n`, in the order their bars were inserted.
    #[inline]
    pub fn neighbors(&self, n: NodeId) -> &[NodeId] {
        &self.adj[n.0]
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adj.get(a.0).is_some_and(|out| out.contains(&b))
    }

    /// Exact position of a joint.
    #[inline]
    pub fn position(&self, n: NodeId) -> &[Rat] {
        &self.nodes[n.0].pos
    }

    /// Joints adjacent to both endpoints (triangle candidates over a bar).
    pub fn shared_neighbors(&self, a: NodeId, b: NodeId) -> Vec<NodeId> {
        let nb: BTreeSet<NodeId> = self.adj[b.0].iter().copied().collect();
        let mut out: Vec<NodeId> = self.adj[a.0]
            .iter()
            .copied()
            .filter(|n| nb.contains(n))
            .collect();
        out.sort();
        out
    }

    /// Subgraph induced by `set`: the nodes plus every bar with both
    /// endpoints inside, keeping original ids.
    pub fn induced(&self, set: &NodeSet) -> InducedSubgraph {
        let edges = self
            .edges
            .iter()
            .copied()
            .filter(|&(u, v)| set.contains(&u) && set.contains(&v))
            .collect();
        InducedSubgraph {
            nodes: set.clone(),
            edges,
        }
    }
}
