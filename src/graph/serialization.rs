use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::graph::model::{GraphId, GraphInstance};

/// On-the-wire graph layout shared by [`GraphWriter`] and the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGraph {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNode {
    pub id: GraphId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEdge {
    pub source: GraphId,
    pub target: GraphId,
    #[serde(default)]
    pub attributes: IndexMap<String, Value>,
}

/// Helper for exporting graphs back to JSON compatible with the loader format.
pub struct GraphWriter;

impl GraphWriter {
    pub fn to_raw_graph(graph: &GraphInstance) -> RawGraph {
        let nodes = graph
            .node_ids()
            .map(|id| RawNode { id: id.clone() })
            .collect();

        let edges = graph
            .graph
            .edge_indices()
            .filter_map(|edge| {
                let (a, b) = graph.graph.edge_endpoints(edge)?;
                let attrs = graph.graph.edge_weight(edge)?;
                let mut attributes = IndexMap::new();
                if let Some(number) = attrs.weight.and_then(serde_json::Number::from_f64) {
                    attributes.insert("weight".to_string(), Value::Number(number));
                }
                Some(RawEdge {
                    source: graph.graph.node_weight(a)?.clone(),
                    target: graph.graph.node_weight(b)?.clone(),
                    attributes,
                })
            })
            .collect();

        RawGraph { nodes, edges }
    }

    pub fn to_json_string(graph: &GraphInstance) -> Result<String> {
        let raw = Self::to_raw_graph(graph);
        Ok(serde_json::to_string_pretty(&raw)?)
    }
}
