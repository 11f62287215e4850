use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sop,
    Manual,
    Checklist,
    Policy,
    IncidentReport,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Sop,
        Category::Manual,
        Category::Checklist,
        Category::Policy,
        Category::IncidentReport,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sop" => Some(Category::Sop),
            "manual" => Some(Category::Manual),
            "checklist" => Some(Category::Checklist),
            "policy" => Some(Category::Policy),
            "incident_report" => Some(Category::IncidentReport),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sop => "sop",
            Category::Manual => "manual",
            Category::Checklist => "checklist",
            Category::Policy => "policy",
            Category::IncidentReport => "incident_report",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Sop => "SOP",
            Category::Manual => "Manual",
            Category::Checklist => "Checklist",
            Category::Policy => "Policy",
            Category::IncidentReport => "Incident Report",
        }
    }
}

/// Category selector used by the list filters. `All` disables the check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(CategoryFilter::All);
        }
        Category::parse(value).map(CategoryFilter::Only)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub uploaded_by: String,
    #[serde(with = "iso_date")]
    pub uploaded_at: Date,
    #[serde(with = "iso_date")]
    pub last_modified: Date,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub snippet: String,
    /// Fixed at seed time; nothing recomputes it.
    pub relevance_score: f32,
    pub document: Document,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}
