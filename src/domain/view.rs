use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Dashboard,
    Search,
    Documents,
    KnowledgeGraph,
    Upload,
    Notifications,
    Maintenance,
    Operations,
    Compliance,
    Analytics,
    Settings,
}

impl View {
    /// Unrecognised identifiers fall back to the dashboard.
    pub fn from_id(id: &str) -> Self {
        match id {
            "search" => View::Search,
            "documents" => View::Documents,
            "knowledge-graph" => View::KnowledgeGraph,
            "upload" => View::Upload,
            "notifications" => View::Notifications,
            "maintenance" => View::Maintenance,
            "operations" => View::Operations,
            "compliance" => View::Compliance,
            "analytics" => View::Analytics,
            "settings" => View::Settings,
            _ => View::Dashboard,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Search => "search",
            View::Documents => "documents",
            View::KnowledgeGraph => "knowledge-graph",
            View::Upload => "upload",
            View::Notifications => "notifications",
            View::Maintenance => "maintenance",
            View::Operations => "operations",
            View::Compliance => "compliance",
            View::Analytics => "analytics",
            View::Settings => "settings",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            View::Maintenance | View::Operations | View::Compliance | View::Analytics | View::Settings
        )
    }
}
