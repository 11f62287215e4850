pub mod auth;
pub mod dashboard;
pub mod documents;
pub mod graph;
pub mod notifications;
pub mod search;
pub mod uploads;
pub mod views;
