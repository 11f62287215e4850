pub mod dashboard;
pub mod document;
pub mod graph;
pub mod notification;
pub mod upload;
pub mod user;
pub mod view;
