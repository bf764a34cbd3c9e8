use std::io::Read;

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use crate::error::{MatchingError, Result};
use crate::graph::model::{EdgeAttributes, GraphInstance};
use crate::graph::serialization::RawGraph;

/// High-level loader responsible for turning JSON representations into in-memory graphs.
#[derive(Debug, Default)]
pub struct GraphLoader;

impl GraphLoader {
    /// Parse a JSON string into a graph instance.
    pub fn from_json_str(json: &str) -> Result<GraphInstance> {
        let raw: RawGraph = serde_json::from_str(json)?;
        Self::from_raw_graph(raw)
    }

    /// Read JSON graph data from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<GraphInstance> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json_str(&buf)
    }

    /// Build a graph from `(source, target, weight)` triples, adding nodes as
    /// they are first mentioned.
    pub fn from_edges<'a, I>(edges: I) -> Result<GraphInstance>
    where
        I: IntoIterator<Item = (&'a str, &'a str, Option<f64>)>,
    {
        let mut graph = GraphInstance::new();
        for (source, target, weight) in edges {
            graph.add_node(source);
            graph.add_node(target);
            graph.add_edge(source, target, EdgeAttributes { weight })?;
        }
        Ok(graph)
    }

    pub fn from_raw_graph(raw: RawGraph) -> Result<GraphInstance> {
        let mut graph = GraphInstance::with_capacity(raw.nodes.len(), raw.edges.len());

        for raw_node in raw.nodes {
            if !graph.add_node(raw_node.id.clone()) {
                debug!("Ignoring repeated node id {}", raw_node.id);
            }
        }

        for raw_edge in raw.edges {
            let mut attributes = raw_edge.attributes;
            let weight = extract_weight(&mut attributes)?;
            let inserted = graph.add_edge(
                &raw_edge.source,
                &raw_edge.target,
                EdgeAttributes { weight },
            )?;
            if !inserted {
                debug!(
                    "Ignoring repeated edge ({}, {})",
                    raw_edge.source, raw_edge.target
                );
            }
        }

        Ok(graph)
    }
}

fn extract_weight(attrs: &mut IndexMap<String, Value>) -> Result<Option<f64>> {
    match attrs.shift_remove("weight") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(num)) => Ok(num.as_f64()),
        Some(Value::String(s)) => s.parse::<f64>().map(Some).map_err(|_| {
            MatchingError::InvalidGraphInput(format!("edge weight '{s}' is not a number"))
        }),
        Some(other) => Err(MatchingError::InvalidGraphInput(format!(
            "edge weight {other} is not a number"
        ))),
    }
}
