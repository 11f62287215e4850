use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::document::{Category, CategoryFilter, Document};
use crate::infra::store::Store;

/// Title or any tag contains `term` (case-insensitive), within the category.
/// An empty term matches every document.
pub fn search<'a>(documents: &'a [Document], term: &str, category: CategoryFilter) -> Vec<&'a Document> {
    let needle = term.to_lowercase();
    documents
        .iter()
        .filter(|doc| category.matches(doc.category))
        .filter(|doc| {
            doc.title.to_lowercase().contains(&needle)
                || doc.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentStats {
    pub total: usize,
    pub by_category: BTreeMap<&'static str, usize>,
}

pub fn stats(documents: &[Document]) -> DocumentStats {
    let mut by_category: BTreeMap<&'static str, usize> =
        Category::ALL.iter().map(|category| (category.as_str(), 0)).collect();
    for doc in documents {
        *by_category.entry(doc.category.as_str()).or_default() += 1;
    }
    DocumentStats {
        total: documents.len(),
        by_category,
    }
}

#[derive(Clone)]
pub struct DocumentService {
    store: Store,
}

impl DocumentService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn search(&self, term: &str, category: CategoryFilter) -> Vec<Document> {
        let tables = self.store.read();
        search(&tables.documents, term, category)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Document> {
        self.store
            .read()
            .documents
            .iter()
            .find(|doc| doc.id == id)
            .cloned()
    }

    pub fn stats(&self) -> DocumentStats {
        stats(&self.store.read().documents)
    }

    /// Removes the document with `id`. A missing id is not an error; the
    /// return value only reports whether something was removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut tables = self.store.write();
        match tables.documents.iter().position(|doc| doc.id == id) {
            Some(index) => {
                tables.documents.remove(index);
                true
            }
            None => false,
        }
    }
}
