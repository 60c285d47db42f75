//! Hyperedge list with per-edge weights
//!
//! This is the input side of the incidence builder: an insertion-ordered
//! collection of hyperedges, each a sequence of node identifiers with one
//! numeric weight. Insertion order defines the column index of each edge in
//! the resulting matrices.

use hashbrown::HashMap;

/// An insertion-ordered, content-deduplicated hyperedge list
///
/// Edges are keyed by their node sequence: re-adding an existing edge updates
/// its weight and keeps its original index, so edge indices stay stable.
#[derive(Debug, Clone, Default)]
pub struct Hypergraph {
    edges: Vec<Vec<usize>>,
    weights: Vec<f64>,
    index: HashMap<Vec<usize>, usize>,
    max_node: Option<usize>,
}

impl Hypergraph {
    /// Create an empty hypergraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hyperedge with an explicit weight
    ///
    /// Returns the edge index. If an edge with the same node sequence
    /// already exists, its weight is replaced and its index returned.
    pub fn add_edge(&mut self, nodes: &[usize], weight: f64) -> usize {
        if let Some(&idx) = self.index.get(nodes) {
            self.weights[idx] = weight;
            return idx;
        }
        let idx = self.edges.len();
        for &node in nodes {
            self.max_node = Some(self.max_node.map_or(node, |m| m.max(node)));
        }
        self.edges.push(nodes.to_vec());
        self.weights.push(weight);
        self.index.insert(nodes.to_vec(), idx);
        idx
    }

    /// Number of hyperedges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when no hyperedges have been added
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of nodes, inferred as the largest identifier plus one
    pub fn node_count(&self) -> usize {
        self.max_node.map_or(0, |m| m + 1)
    }

    /// Hyperedges in insertion order
    pub fn hyperedges(&self) -> impl Iterator<Item = &[usize]> {
        self.edges.iter().map(Vec::as_slice)
    }

    /// Hyperedges as a slice, aligned with `weights`
    pub fn edges(&self) -> &[Vec<usize>] {
        &self.edges
    }

    /// Edge weights, aligned with edge indices
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight of the edge with this exact node sequence, if present
    pub fn get_weight(&self, nodes: &[usize]) -> Option<f64> {
        self.index.get(nodes).map(|&idx| self.weights[idx])
    }
}
