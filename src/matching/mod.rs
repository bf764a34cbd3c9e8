pub mod degree;
pub mod verify;
pub mod weight;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MatchingError;
use crate::graph::{GraphId, GraphInstance};

pub use degree::maximum_degree_matching;
pub use verify::verify_matching;
pub use weight::maximum_weight_matching;

/// Signature shared by every matcher: reads the caller's graph, never mutates it.
pub type MatcherFn = fn(&GraphInstance) -> Matching;

/// Node pairs in the order a matcher accepted them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    pairs: Vec<(GraphId, GraphId)>,
}

impl Matching {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, u: GraphId, v: GraphId) {
        self.pairs.push((u, v));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(GraphId, GraphId)] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(u, v)| (u.as_str(), v.as_str()))
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.pairs.iter().any(|(u, v)| u == id || v == id)
    }

    /// Sum of the matched edges' weights in `graph`; pairs absent from the
    /// graph contribute nothing.
    pub fn total_weight(&self, graph: &GraphInstance) -> f64 {
        self.iter()
            .filter_map(|(u, v)| graph.edge_weight(u, v))
            .sum()
    }
}

impl FromIterator<(GraphId, GraphId)> for Matching {
    fn from_iter<I: IntoIterator<Item = (GraphId, GraphId)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Matching {
    type Item = &'a (GraphId, GraphId);
    type IntoIter = std::slice::Iter<'a, (GraphId, GraphId)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Degree,
    Weight,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Degree, Algorithm::Weight];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Degree => "Degree",
            Algorithm::Weight => "Weight",
        }
    }

    pub fn matcher(self) -> MatcherFn {
        match self {
            Algorithm::Degree => maximum_degree_matching,
            Algorithm::Weight => maximum_weight_matching,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MatchingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degree" => Ok(Algorithm::Degree),
            "weight" => Ok(Algorithm::Weight),
            _ => Err(MatchingError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphLoader;

    #[test]
    fn algorithm_parses_case_insensitively() {
        assert_eq!("Degree".parse::<Algorithm>().unwrap(), Algorithm::Degree);
        assert_eq!("weight".parse::<Algorithm>().unwrap(), Algorithm::Weight);
        assert!(matches!(
            "blossom".parse::<Algorithm>(),
            Err(MatchingError::UnknownAlgorithm(name)) if name == "blossom"
        ));
    }

    #[test]
    fn total_weight_sums_matched_edges() {
        let graph =
            GraphLoader::from_edges([("a", "b", Some(5.0)), ("c", "d", None)]).expect("graph");
        let matching = Algorithm::Weight.matcher()(&graph);
        assert_eq!(matching.total_weight(&graph), 6.0);
        assert!(matching.contains_node("d"));
        assert!(!matching.contains_node("e"));
    }
}
