use std::collections::HashSet;

use crate::error::{MatchingError, Result};
use crate::graph::GraphInstance;
use crate::matching::Matching;

/// Checks that `matching` is a valid matching of `graph`: every pair joins two
/// distinct nodes adjacent in `graph` and no node is used twice.
pub fn verify_matching(graph: &GraphInstance, matching: &Matching) -> Result<()> {
    let mut used: HashSet<&str> = HashSet::with_capacity(matching.len() * 2);

    for (position, (u, v)) in matching.iter().enumerate() {
        if u == v {
            return Err(MatchingError::InvalidMatching(format!(
                "pair {position} matches node {u} with itself"
            )));
        }
        if !graph.contains_edge(u, v) {
            return Err(MatchingError::InvalidMatching(format!(
                "pair {position} ({u}, {v}) is not an edge of the graph"
            )));
        }
        for node in [u, v] {
            if !used.insert(node) {
                return Err(MatchingError::InvalidMatching(format!(
                    "node {node} appears in more than one pair (again at pair {position})"
                )));
            }
        }
    }

    Ok(())
}
