use log::trace;

use crate::graph::{GraphId, GraphInstance};
use crate::matching::Matching;

/// Greedy matching driven by node degree.
///
/// Repeatedly takes the remaining node of highest degree (earliest inserted on
/// ties) and pairs it with its earliest inserted remaining neighbor, removing
/// both from a private working copy. The loop stops at the first selected node
/// with no neighbors left rather than skipping it.
pub fn maximum_degree_matching(graph: &GraphInstance) -> Matching {
    let mut working = graph.clone();
    let mut matching = Matching::with_capacity(graph.node_count() / 2);

    while let Some((node, degree)) = max_degree_node(&working) {
        let Some(neighbor) = working.neighbors(&node).first().map(|id| (*id).clone()) else {
            trace!(
                "Node {} has no remaining neighbors, stopping with {} pairs",
                node,
                matching.len()
            );
            break;
        };
        trace!("Matching {} (degree {}) with {}", node, degree, neighbor);
        working.remove_node(&node);
        working.remove_node(&neighbor);
        matching.push(node, neighbor);
    }

    matching
}

fn max_degree_node(graph: &GraphInstance) -> Option<(GraphId, usize)> {
    let mut best: Option<(&GraphId, usize)> = None;
    for id in graph.node_ids() {
        let degree = graph.degree(id);
        if best.map_or(true, |(_, best_degree)| degree > best_degree) {
            best = Some((id, degree));
        }
    }
    best.map(|(id, degree)| (id.clone(), degree))
}
