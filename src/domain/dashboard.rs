use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Blue,
    Green,
    Yellow,
    Red,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn of(change: &str) -> Self {
        if change.starts_with('+') {
            Trend::Up
        } else if change.starts_with('-') {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub tone: Tone,
    pub trend: Trend,
}

impl StatCard {
    pub fn new(title: &'static str, value: &'static str, change: &'static str, tone: Tone) -> Self {
        Self {
            title,
            value,
            change,
            tone,
            trend: Trend::of(change),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub kind: &'static str,
    pub message: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardContent {
    pub stats: Vec<StatCard>,
    pub activities: Vec<Activity>,
}
