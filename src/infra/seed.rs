//! Mock records the service starts with.

use time::macros::{date, datetime};

use crate::domain::document::{Category, Document, SearchResult};
use crate::domain::graph::{GraphLink, GraphNode, NodeKind};
use crate::domain::notification::{Notification, NotificationKind, Priority};
use crate::domain::user::Role;

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".into(),
            kind: NotificationKind::Alert,
            title: "System Maintenance Scheduled".into(),
            message: "Scheduled maintenance for Line 2 will begin at 2:00 AM tonight.".into(),
            priority: Priority::High,
            timestamp: datetime!(2024-01-20 10:30 UTC),
            read: false,
            target_roles: vec![Role::MaintenanceEngineer, Role::StationController],
        },
        Notification {
            id: "2".into(),
            kind: NotificationKind::Incident,
            title: "Equipment Alert - Escalator E-23".into(),
            message: "Escalator E-23 at Central Station requires immediate attention.".into(),
            priority: Priority::Critical,
            timestamp: datetime!(2024-01-20 09:15 UTC),
            read: false,
            target_roles: vec![Role::MaintenanceEngineer],
        },
        Notification {
            id: "3".into(),
            kind: NotificationKind::Update,
            title: "New SOP Available".into(),
            message: "Emergency evacuation procedures have been updated.".into(),
            priority: Priority::Medium,
            timestamp: datetime!(2024-01-19 16:45 UTC),
            read: true,
            target_roles: vec![Role::StationController, Role::ComplianceOfficer],
        },
        Notification {
            id: "4".into(),
            kind: NotificationKind::Reminder,
            title: "Monthly Safety Audit Due".into(),
            message: "Monthly safety audit is due next week.".into(),
            priority: Priority::Medium,
            timestamp: datetime!(2024-01-19 14:20 UTC),
            read: false,
            target_roles: vec![Role::ComplianceOfficer],
        },
    ]
}

pub fn documents() -> Vec<Document> {
    vec![
        Document {
            id: "1".into(),
            title: "Emergency Evacuation Procedures".into(),
            content: "Standard operating procedure for emergency evacuation...".into(),
            category: Category::Sop,
            tags: tags(&["emergency", "evacuation", "safety"]),
            uploaded_by: "Safety Team".into(),
            uploaded_at: date!(2024-01-15),
            last_modified: date!(2024-01-15),
            version: "2.1".into(),
            file_url: None,
        },
        Document {
            id: "2".into(),
            title: "Daily Maintenance Checklist".into(),
            content: "Comprehensive checklist for daily maintenance...".into(),
            category: Category::Checklist,
            tags: tags(&["maintenance", "daily", "inspection"]),
            uploaded_by: "Maintenance Team".into(),
            uploaded_at: date!(2024-01-10),
            last_modified: date!(2024-01-10),
            version: "1.5".into(),
            file_url: None,
        },
        Document {
            id: "3".into(),
            title: "Train Operations Manual".into(),
            content: "Complete guide to train operations...".into(),
            category: Category::Manual,
            tags: tags(&["operations", "trains", "procedures"]),
            uploaded_by: "Operations Team".into(),
            uploaded_at: date!(2024-01-05),
            last_modified: date!(2024-01-05),
            version: "3.0".into(),
            file_url: None,
        },
    ]
}

pub fn search_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            id: "1".into(),
            title: "Emergency Evacuation Procedures for Metro Stations".into(),
            snippet: "Standard operating procedure for emergency evacuation including fire, \
                      medical emergencies, and security threats. Updated protocols for crowd \
                      management and coordination with emergency services."
                .into(),
            relevance_score: 0.95,
            document: Document {
                id: "1".into(),
                title: "Emergency Evacuation Procedures for Metro Stations".into(),
                content: "Full document content...".into(),
                category: Category::Sop,
                tags: tags(&["emergency", "evacuation", "safety", "procedures"]),
                uploaded_by: "Safety Team".into(),
                uploaded_at: date!(2024-01-15),
                last_modified: date!(2024-01-15),
                version: "2.1".into(),
                file_url: None,
            },
            feedback: None,
        },
        SearchResult {
            id: "2".into(),
            title: "Daily Maintenance Checklist for Escalators".into(),
            snippet: "Comprehensive checklist for daily inspection and maintenance of \
                      escalators across all metro stations. Includes safety checks, cleaning \
                      procedures, and reporting protocols."
                .into(),
            relevance_score: 0.87,
            document: Document {
                id: "2".into(),
                title: "Daily Maintenance Checklist for Escalators".into(),
                content: "Full document content...".into(),
                category: Category::Checklist,
                tags: tags(&["maintenance", "escalator", "daily", "inspection"]),
                uploaded_by: "Maintenance Team".into(),
                uploaded_at: date!(2024-01-10),
                last_modified: date!(2024-01-10),
                version: "1.5".into(),
                file_url: None,
            },
            feedback: None,
        },
        SearchResult {
            id: "3".into(),
            title: "Train Operations Manual - Section 4: Signal Systems".into(),
            snippet: "Detailed guide on train signal systems, including automated train \
                      control (ATC), communication-based train control (CBTC), and manual \
                      override procedures."
                .into(),
            relevance_score: 0.82,
            document: Document {
                id: "3".into(),
                title: "Train Operations Manual - Section 4: Signal Systems".into(),
                content: "Full document content...".into(),
                category: Category::Manual,
                tags: tags(&["operations", "signals", "ATC", "CBTC", "trains"]),
                uploaded_by: "Operations Team".into(),
                uploaded_at: date!(2024-01-05),
                last_modified: date!(2024-01-05),
                version: "3.0".into(),
                file_url: None,
            },
            feedback: None,
        },
    ]
}

pub fn graph_nodes() -> Vec<GraphNode> {
    [
        ("1", "Emergency Procedures", NodeKind::Topic, "safety"),
        ("2", "Evacuation SOP", NodeKind::Document, "sop"),
        ("3", "Fire Safety", NodeKind::Procedure, "safety"),
        ("4", "Maintenance Manual", NodeKind::Document, "maintenance"),
        ("5", "Daily Inspections", NodeKind::Procedure, "maintenance"),
        ("6", "Equipment Checklist", NodeKind::Document, "checklist"),
        ("7", "Train Operations", NodeKind::Topic, "operations"),
        ("8", "Signal Systems", NodeKind::Procedure, "operations"),
        ("9", "ATC Manual", NodeKind::Document, "manual"),
        ("10", "CBTC Procedures", NodeKind::Document, "sop"),
    ]
    .into_iter()
    .map(|(id, label, kind, category)| GraphNode {
        id: id.into(),
        label: label.into(),
        kind,
        category: category.into(),
    })
    .collect()
}

pub fn graph_links() -> Vec<GraphLink> {
    [
        ("1", "2", "includes"),
        ("1", "3", "relates_to"),
        ("2", "3", "references"),
        ("4", "5", "contains"),
        ("5", "6", "uses"),
        ("7", "8", "includes"),
        ("8", "9", "documented_in"),
        ("8", "10", "implemented_by"),
        ("9", "10", "related_to"),
    ]
    .into_iter()
    .map(|(source, target, relation)| GraphLink {
        source: source.into(),
        target: target.into(),
        relation: relation.into(),
    })
    .collect()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|tag| tag.to_string()).collect()
}
