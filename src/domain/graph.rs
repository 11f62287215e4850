use serde::{Deserialize, Serialize};

const LABEL_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Topic,
    Procedure,
}

impl NodeKind {
    pub const ALL: [NodeKind; 3] = [NodeKind::Document, NodeKind::Topic, NodeKind::Procedure];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "document" => Some(NodeKind::Document),
            "topic" => Some(NodeKind::Topic),
            "procedure" => Some(NodeKind::Procedure),
            _ => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NodeKind::Document => "#3B82F6",
            NodeKind::Topic => "#10B981",
            NodeKind::Procedure => "#F59E0B",
        }
    }

    pub fn radius(&self) -> u32 {
        match self {
            NodeKind::Topic => 20,
            NodeKind::Document => 15,
            NodeKind::Procedure => 12,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub category: String,
}

impl GraphNode {
    /// Static grid cell derived from the numeric id: four columns, 200px apart,
    /// rows 100px apart. Ids that are not numbers land in the first cell.
    pub fn position(&self) -> (u32, u32) {
        let index: u32 = self.id.parse().unwrap_or(0);
        ((index % 4) * 200 + 100, (index / 4) * 100 + 50)
    }

    pub fn short_label(&self) -> String {
        if self.label.chars().count() > LABEL_LIMIT {
            let head: String = self.label.chars().take(LABEL_LIMIT).collect();
            format!("{}...", head)
        } else {
            self.label.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub relation: String,
}

impl GraphLink {
    /// The far end of the link as seen from `node_id`, if the link touches it.
    pub fn other_end(&self, node_id: &str) -> Option<&str> {
        if self.source == node_id {
            Some(&self.target)
        } else if self.target == node_id {
            Some(&self.source)
        } else {
            None
        }
    }
}
