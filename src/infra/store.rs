use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use crate::domain::document::{Document, SearchResult};
use crate::domain::graph::{GraphLink, GraphNode};
use crate::domain::notification::Notification;
use crate::domain::upload::FileUpload;
use crate::infra::seed;

/// Every collection the service serves, mutated under one lock.
#[derive(Debug, Default)]
pub struct Tables {
    pub notifications: Vec<Notification>,
    pub documents: Vec<Document>,
    pub search_results: Vec<SearchResult>,
    pub graph_nodes: Vec<GraphNode>,
    pub graph_links: Vec<GraphLink>,
    pub uploads: Vec<FileUpload>,
    /// Highest numeric document id ever issued; deleted ids are not reused.
    pub last_document_id: u64,
}

#[derive(Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    pub fn seeded() -> Self {
        let documents = seed::documents();
        let last_document_id = documents
            .iter()
            .filter_map(|doc| doc.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self::new(Tables {
            notifications: seed::notifications(),
            documents,
            search_results: seed::search_results(),
            graph_nodes: seed::graph_nodes(),
            graph_links: seed::graph_links(),
            uploads: Vec::new(),
            last_document_id,
        })
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }
}
