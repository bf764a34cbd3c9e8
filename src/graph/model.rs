use indexmap::IndexMap;
use petgraph::prelude::NodeIndex;
use petgraph::stable_graph::StableUnGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::error::{MatchingError, Result};

pub type GraphId = String;

/// Weight assumed for edges that carry no explicit weight.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeAttributes {
    pub weight: Option<f64>,
}

impl EdgeAttributes {
    pub fn weighted(weight: f64) -> Self {
        Self {
            weight: Some(weight),
        }
    }

    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_EDGE_WEIGHT)
    }
}

/// Edge snapshot with its weight resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedEdge {
    pub source: GraphId,
    pub target: GraphId,
    pub weight: f64,
}

pub type LabeledGraph = StableUnGraph<GraphId, EdgeAttributes>;

/// Undirected graph keyed by external node ids.
///
/// Node indices stay valid across removals, so a clone can be consumed node by
/// node while the original keeps answering adjacency queries. `node_lookup`
/// preserves insertion order, which is the tie-break order used by the
/// matchers.
#[derive(Debug, Clone, Default)]
pub struct GraphInstance {
    pub graph: LabeledGraph,
    pub node_lookup: IndexMap<GraphId, NodeIndex>,
}

impl GraphInstance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: LabeledGraph::with_capacity(nodes, edges),
            node_lookup: IndexMap::with_capacity(nodes),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.node_lookup.is_empty()
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &GraphId> + '_ {
        self.node_lookup.keys()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_lookup.contains_key(id)
    }

    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        match (self.node_lookup.get(source), self.node_lookup.get(target)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Inserts a node, returning `false` if the id was already present.
    pub fn add_node(&mut self, id: impl Into<GraphId>) -> bool {
        let id = id.into();
        if self.node_lookup.contains_key(&id) {
            return false;
        }
        let idx = self.graph.add_node(id.clone());
        self.node_lookup.insert(id, idx);
        true
    }

    /// Inserts an undirected edge. Returns `Ok(false)` if the edge already
    /// exists; the first occurrence keeps its attributes.
    pub fn add_edge(&mut self, source: &str, target: &str, attrs: EdgeAttributes) -> Result<bool> {
        if let Some(weight) = attrs.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchingError::InvalidGraphInput(format!(
                    "edge ({source}, {target}) has weight {weight}, expected a finite non-negative value"
                )));
            }
        }
        let a = self.resolve(source)?;
        let b = self.resolve(target)?;
        if self.graph.find_edge(a, b).is_some() {
            return Ok(false);
        }
        self.graph.add_edge(a, b, attrs);
        Ok(true)
    }

    /// Removes a node together with its incident edges.
    pub fn remove_node(&mut self, id: &str) -> bool {
        match self.node_lookup.shift_remove(id) {
            Some(idx) => {
                self.graph.remove_node(idx);
                true
            }
            None => false,
        }
    }

    /// Number of distinct neighbors, ignoring self-loops.
    pub fn degree(&self, id: &str) -> usize {
        self.node_lookup
            .get(id)
            .map(|&idx| self.neighbor_indices(idx).count())
            .unwrap_or(0)
    }

    /// Neighbors of `id` in node insertion order, self-loops excluded.
    pub fn neighbors(&self, id: &str) -> Vec<&GraphId> {
        let Some(&idx) = self.node_lookup.get(id) else {
            return Vec::new();
        };
        let mut positioned: Vec<(usize, &GraphId)> = self
            .neighbor_indices(idx)
            .filter_map(|neighbor| {
                let neighbor_id = self.graph.node_weight(neighbor)?;
                let position = self.node_lookup.get_index_of(neighbor_id)?;
                Some((position, neighbor_id))
            })
            .collect();
        positioned.sort_unstable_by_key(|(position, _)| *position);
        positioned.into_iter().map(|(_, id)| id).collect()
    }

    pub fn edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        let a = *self.node_lookup.get(source)?;
        let b = *self.node_lookup.get(target)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph
            .edge_weight(edge)
            .map(EdgeAttributes::effective_weight)
    }

    /// All edges in enumeration order with weights resolved.
    pub fn weighted_edges(&self) -> Vec<WeightedEdge> {
        self.graph
            .edge_references()
            .filter_map(|edge| {
                Some(WeightedEdge {
                    source: self.graph.node_weight(edge.source())?.clone(),
                    target: self.graph.node_weight(edge.target())?.clone(),
                    weight: edge.weight().effective_weight(),
                })
            })
            .collect()
    }

    fn resolve(&self, id: &str) -> Result<NodeIndex> {
        self.node_lookup
            .get(id)
            .copied()
            .ok_or_else(|| MatchingError::UnknownNode(id.to_string()))
    }

    fn neighbor_indices(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        // Parallel edges are rejected on insert, so each neighbor appears once.
        self.graph
            .neighbors(idx)
            .filter(move |&neighbor| neighbor != idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_tail() -> GraphInstance {
        let mut graph = GraphInstance::new();
        for id in ["a", "b", "c", "d"] {
            graph.add_node(id);
        }
        graph.add_edge("a", "b", EdgeAttributes::default()).unwrap();
        graph.add_edge("b", "c", EdgeAttributes::weighted(2.5)).unwrap();
        graph.add_edge("c", "a", EdgeAttributes::default()).unwrap();
        graph.add_edge("c", "d", EdgeAttributes::default()).unwrap();
        graph
    }

    #[test]
    fn degree_and_neighbors_follow_insertion_order() {
        let graph = triangle_with_tail();
        assert_eq!(graph.degree("c"), 3);
        assert_eq!(graph.degree("d"), 1);
        assert_eq!(graph.neighbors("c"), vec!["a", "b", "d"]);
        assert_eq!(graph.degree("missing"), 0);
    }

    #[test]
    fn duplicate_edges_are_ignored() {
        let mut graph = triangle_with_tail();
        let inserted = graph
            .add_edge("b", "a", EdgeAttributes::weighted(9.0))
            .unwrap();
        assert!(!inserted);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge_weight("a", "b"), Some(DEFAULT_EDGE_WEIGHT));
    }

    #[test]
    fn self_loops_do_not_count_towards_degree() {
        let mut graph = triangle_with_tail();
        graph.add_edge("d", "d", EdgeAttributes::default()).unwrap();
        assert_eq!(graph.degree("d"), 1);
        assert_eq!(graph.neighbors("d"), vec!["c"]);
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut graph = triangle_with_tail();
        assert!(graph.remove_node("c"));
        assert!(!graph.remove_node("c"));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge("a", "b"));
        assert!(!graph.contains_edge("c", "d"));
        assert_eq!(graph.degree("d"), 0);
    }

    #[test]
    fn clone_is_independent_of_original() {
        let graph = triangle_with_tail();
        let mut working = graph.clone();
        working.remove_node("a");
        assert!(graph.contains_node("a"));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn rejects_unknown_endpoints_and_bad_weights() {
        let mut graph = triangle_with_tail();
        assert!(matches!(
            graph.add_edge("a", "zz", EdgeAttributes::default()),
            Err(MatchingError::UnknownNode(id)) if id == "zz"
        ));
        assert!(matches!(
            graph.add_edge("a", "d", EdgeAttributes::weighted(-1.0)),
            Err(MatchingError::InvalidGraphInput(_))
        ));
    }

    #[test]
    fn weighted_edges_default_to_unit_weight() {
        let graph = triangle_with_tail();
        let edges = graph.weighted_edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].weight, DEFAULT_EDGE_WEIGHT);
        assert_eq!(edges[1].weight, 2.5);
        assert_eq!((edges[1].source.as_str(), edges[1].target.as_str()), ("b", "c"));
    }
}
