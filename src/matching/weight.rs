use log::trace;

use crate::graph::GraphInstance;
use crate::matching::Matching;

/// Greedy matching by descending edge weight.
///
/// Edges are snapshotted from the caller's graph and stable-sorted, so equal
/// weights keep enumeration order. An edge is accepted while the working copy
/// still contains it, i.e. neither endpoint has been consumed.
pub fn maximum_weight_matching(graph: &GraphInstance) -> Matching {
    let mut edges = graph.weighted_edges();
    edges.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let mut working = graph.clone();
    let mut matching = Matching::with_capacity(graph.node_count() / 2);

    for edge in edges {
        if edge.source == edge.target || !working.contains_edge(&edge.source, &edge.target) {
            continue;
        }
        trace!(
            "Accepting ({}, {}) with weight {}",
            edge.source,
            edge.target,
            edge.weight
        );
        working.remove_node(&edge.source);
        working.remove_node(&edge.target);
        matching.push(edge.source, edge.target);
    }

    matching
}
