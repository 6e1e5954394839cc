//! Data models for network documents (nodes, edges, metadata)

use super::element::SelectedElement;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Document metadata carried by every network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocMetadata {
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub locked: bool,
}

/// A node in the network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub high_value_node: bool,
    #[serde(default)]
    pub entry_node: bool,
    #[serde(default = "default_vulnerability")]
    pub vulnerability: f64,
    #[serde(default)]
    pub x_pos: f64,
    #[serde(default)]
    pub y_pos: f64,
}

fn default_vulnerability() -> f64 {
    0.01
}

/// An undirected connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub uuid: String,
    pub node_a: String,
    pub node_b: String,
}

/// A network document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(rename = "_doc_metadata", default)]
    pub doc_metadata: DocMetadata,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Node {
    /// Name to show in lists, falling back to the uuid
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.uuid
        } else {
            &self.name
        }
    }

    /// Short role badge for lists
    pub fn role(&self) -> &'static str {
        match (self.entry_node, self.high_value_node) {
            (true, true) => "entry+hv",
            (true, false) => "entry",
            (false, true) => "high value",
            (false, false) => "",
        }
    }
}

impl Edge {
    pub fn touches(&self, node_id: &str) -> bool {
        self.node_a == node_id || self.node_b == node_id
    }
}

impl Network {
    /// Display name of the network
    pub fn name(&self) -> &str {
        self.doc_metadata
            .name
            .as_deref()
            .unwrap_or(&self.doc_metadata.uuid)
    }

    pub fn node(&self, uuid: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.uuid == uuid)
    }

    pub fn edge(&self, uuid: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.uuid == uuid)
    }

    /// Number of edges touching a node
    pub fn degree(&self, node_id: &str) -> usize {
        self.edges.iter().filter(|e| e.touches(node_id)).count()
    }

    /// Names of the nodes connected to a node
    pub fn neighbours(&self, node_id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.node_a == node_id {
                    Some(e.node_b.as_str())
                } else if e.node_b == node_id {
                    Some(e.node_a.as_str())
                } else {
                    None
                }
            })
            .map(|id| self.node(id).map(|n| n.display_name()).unwrap_or(id))
            .collect()
    }

    /// All selectable elements: nodes in document order, then edges
    pub fn elements(&self) -> Vec<SelectedElement> {
        self.nodes
            .iter()
            .map(|n| SelectedElement::node(n.uuid.clone()))
            .chain(self.edges.iter().map(|e| SelectedElement::edge(e.uuid.clone())))
            .collect()
    }

    /// Remove a node and every edge touching it. Returns false if the node
    /// does not exist.
    pub fn remove_node(&mut self, uuid: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.uuid != uuid);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| !e.touches(uuid));
        true
    }

    pub fn remove_edge(&mut self, uuid: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.uuid != uuid);
        self.edges.len() != before
    }

    /// Check structural consistency of the document
    pub fn validate(&self) -> Result<(), String> {
        let mut node_ids = HashSet::new();
        for node in &self.nodes {
            if node.uuid.is_empty() {
                return Err("node with empty uuid".to_string());
            }
            if !node_ids.insert(node.uuid.as_str()) {
                return Err(format!("duplicate node uuid '{}'", node.uuid));
            }
            if !(0.0..=1.0).contains(&node.vulnerability) {
                return Err(format!(
                    "node '{}' has vulnerability {} outside [0, 1]",
                    node.uuid, node.vulnerability
                ));
            }
        }

        let mut edge_ids = HashSet::new();
        for edge in &self.edges {
            if !edge_ids.insert(edge.uuid.as_str()) {
                return Err(format!("duplicate edge uuid '{}'", edge.uuid));
            }
            for end in [&edge.node_a, &edge.node_b] {
                if !node_ids.contains(end.as_str()) {
                    return Err(format!(
                        "edge '{}' references unknown node '{}'",
                        edge.uuid, end
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::element::ElementKind;

    pub(crate) fn node(uuid: &str, name: &str) -> Node {
        Node {
            uuid: uuid.to_string(),
            name: name.to_string(),
            high_value_node: false,
            entry_node: false,
            vulnerability: 0.5,
            x_pos: 0.0,
            y_pos: 0.0,
        }
    }

    pub(crate) fn edge(uuid: &str, a: &str, b: &str) -> Edge {
        Edge {
            uuid: uuid.to_string(),
            node_a: a.to_string(),
            node_b: b.to_string(),
        }
    }

    /// Triangle a-b-c plus a pendant d hanging off c
    pub(crate) fn sample_network() -> Network {
        Network {
            doc_metadata: DocMetadata {
                uuid: "net-1".to_string(),
                name: Some("office".to_string()),
                ..Default::default()
            },
            nodes: vec![
                node("a", "gateway"),
                node("b", "server"),
                node("c", "switch"),
                node("d", "printer"),
            ],
            edges: vec![
                edge("ab", "a", "b"),
                edge("bc", "b", "c"),
                edge("ca", "c", "a"),
                edge("cd", "c", "d"),
            ],
        }
    }

    #[test]
    fn test_parse_network_json_with_defaults() {
        let json = r#"{
            "_doc_metadata": {"uuid": "n-1", "name": "lab"},
            "nodes": [
                {"uuid": "x", "name": "router", "entry_node": true},
                {"uuid": "y"}
            ],
            "edges": [{"uuid": "xy", "node_a": "x", "node_b": "y"}]
        }"#;

        let network: Network = serde_json::from_str(json).unwrap();
        assert_eq!(network.name(), "lab");
        assert_eq!(network.nodes.len(), 2);
        assert!(network.nodes[0].entry_node);
        assert_eq!(network.nodes[1].display_name(), "y");
        assert_eq!(network.nodes[1].vulnerability, 0.01);
        assert!(network.validate().is_ok());
    }

    #[test]
    fn test_elements_lists_nodes_then_edges() {
        let network = sample_network();
        let elements = network.elements();
        assert_eq!(elements.len(), 8);
        assert!(elements[..4].iter().all(|e| e.kind == ElementKind::Node));
        assert!(elements[4..].iter().all(|e| e.kind == ElementKind::Edge));
        assert_eq!(elements[0].id, "a");
        assert_eq!(elements[4].id, "ab");
    }

    #[test]
    fn test_remove_node_drops_incident_edges() {
        let mut network = sample_network();
        assert!(network.remove_node("c"));
        assert_eq!(network.nodes.len(), 3);
        let remaining: Vec<&str> = network.edges.iter().map(|e| e.uuid.as_str()).collect();
        assert_eq!(remaining, vec!["ab"]);
        assert!(!network.remove_node("c"));
    }

    #[test]
    fn test_remove_edge() {
        let mut network = sample_network();
        assert!(network.remove_edge("cd"));
        assert_eq!(network.degree("d"), 0);
        assert!(!network.remove_edge("cd"));
    }

    #[test]
    fn test_degree_and_neighbours() {
        let network = sample_network();
        assert_eq!(network.degree("c"), 3);
        assert_eq!(network.neighbours("d"), vec!["switch"]);
    }

    #[test]
    fn test_validate_rejects_dangling_edge() {
        let mut network = sample_network();
        network.edges.push(edge("dz", "d", "z"));
        let err = network.validate().unwrap_err();
        assert!(err.contains("unknown node 'z'"), "got: {}", err);
    }

    #[test]
    fn test_validate_rejects_duplicate_nodes() {
        let mut network = sample_network();
        network.nodes.push(node("a", "again"));
        assert!(network.validate().unwrap_err().contains("duplicate node"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_vulnerability() {
        let mut network = sample_network();
        network.nodes[0].vulnerability = 1.5;
        assert!(network.validate().is_err());
    }
}
