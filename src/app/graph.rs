use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::graph::{GraphLink, GraphNode, NodeKind};
use crate::infra::store::Store;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(NodeKind),
}

impl KindFilter {
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(KindFilter::All);
        }
        NodeKind::parse(value).map(KindFilter::Only)
    }

    fn matches(&self, kind: NodeKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(wanted) => *wanted == kind,
        }
    }
}

/// A node with the attributes the explorer draws it with.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedNode {
    #[serde(flatten)]
    pub node: GraphNode,
    pub short_label: String,
    pub color: &'static str,
    pub radius: u32,
    pub x: u32,
    pub y: u32,
}

impl From<&GraphNode> for PlacedNode {
    fn from(node: &GraphNode) -> Self {
        let (x, y) = node.position();
        Self {
            short_label: node.short_label(),
            color: node.kind.color(),
            radius: node.kind.radius(),
            x,
            y,
            node: node.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphView {
    pub nodes: Vec<PlacedNode>,
    pub links: Vec<GraphLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    pub relation: String,
    pub node: GraphNode,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeDetail {
    pub node: PlacedNode,
    pub connections: Vec<Connection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub links: usize,
    pub by_kind: BTreeMap<&'static str, usize>,
}

pub fn filter_nodes<'a>(nodes: &'a [GraphNode], term: &str, kind: KindFilter) -> Vec<&'a GraphNode> {
    let needle = term.to_lowercase();
    nodes
        .iter()
        .filter(|node| node.label.to_lowercase().contains(&needle))
        .filter(|node| kind.matches(node.kind))
        .collect()
}

/// Links touching `node_id` paired with the node on the other end. Links to
/// nodes that do not exist are dropped.
pub fn connections(nodes: &[GraphNode], links: &[GraphLink], node_id: &str) -> Vec<Connection> {
    links
        .iter()
        .filter_map(|link| {
            let other = link.other_end(node_id)?;
            let node = nodes.iter().find(|node| node.id == other)?;
            Some(Connection {
                relation: link.relation.clone(),
                node: node.clone(),
            })
        })
        .collect()
}

#[derive(Clone)]
pub struct GraphService {
    store: Store,
}

impl GraphService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Filtered nodes plus every link; links are drawn regardless of the
    /// node filter, as long as both ends exist.
    pub fn view(&self, term: &str, kind: KindFilter) -> GraphView {
        let tables = self.store.read();
        let nodes = filter_nodes(&tables.graph_nodes, term, kind)
            .into_iter()
            .map(PlacedNode::from)
            .collect();
        let links = tables
            .graph_links
            .iter()
            .filter(|link| {
                let exists = |id: &str| tables.graph_nodes.iter().any(|node| node.id == id);
                exists(&link.source) && exists(&link.target)
            })
            .cloned()
            .collect();
        GraphView { nodes, links }
    }

    pub fn node(&self, id: &str) -> Option<NodeDetail> {
        let tables = self.store.read();
        let node = tables.graph_nodes.iter().find(|node| node.id == id)?;
        Some(NodeDetail {
            node: PlacedNode::from(node),
            connections: connections(&tables.graph_nodes, &tables.graph_links, id),
        })
    }

    pub fn stats(&self) -> GraphStats {
        let tables = self.store.read();
        let mut by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
        for kind in NodeKind::ALL {
            let count = tables.graph_nodes.iter().filter(|node| node.kind == kind).count();
            by_kind.insert(kind_name(kind), count);
        }
        GraphStats {
            nodes: tables.graph_nodes.len(),
            links: tables.graph_links.len(),
            by_kind,
        }
    }
}

fn kind_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Document => "document",
        NodeKind::Topic => "topic",
        NodeKind::Procedure => "procedure",
    }
}
