use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{MatchingError, Result};
use crate::graph::model::{EdgeAttributes, GraphInstance};

/// Erdős–Rényi `G(n, p)` generator: every unordered pair of distinct nodes is
/// joined independently with probability `p`. Node ids are `"0"..="n-1"`.
#[derive(Debug, Clone)]
pub struct RandomGraphGenerator {
    node_count: usize,
    edge_probability: f64,
}

impl RandomGraphGenerator {
    pub fn new(node_count: usize, edge_probability: f64) -> Result<Self> {
        validate_probability(edge_probability)?;
        Ok(Self {
            node_count,
            edge_probability,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    pub fn generate(&self, seed: u64) -> GraphInstance {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        self.generate_with(&mut rng)
    }

    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> GraphInstance {
        let n = self.node_count;
        let capacity = edge_capacity_hint(n, self.edge_probability);
        let mut graph = GraphInstance::with_capacity(n, capacity);
        let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        for id in &ids {
            graph.add_node(id.as_str());
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(self.edge_probability) {
                    graph
                        .add_edge(&ids[i], &ids[j], EdgeAttributes::default())
                        .expect("endpoints exist and the pair is new");
                }
            }
        }

        graph
    }
}

/// Expected edge count of `G(n, p)`, saturating for very large `n`.
fn edge_capacity_hint(node_count: usize, probability: f64) -> usize {
    let pairs = node_count.saturating_mul(node_count.saturating_sub(1)) / 2;
    (pairs as f64 * probability).ceil() as usize
}

pub(crate) fn validate_probability(probability: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(MatchingError::InvalidGraphInput(format!(
            "edge probability {probability} is outside [0, 1]"
        )));
    }
    Ok(())
}
