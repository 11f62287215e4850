use std::time::Duration;

use crate::domain::document::{CategoryFilter, Feedback, SearchResult};
use crate::infra::store::Store;

/// Substring match over title, snippet and tags. Blank queries return
/// nothing; results keep their seeded order and static score.
pub fn matching<'a>(
    results: &'a [SearchResult],
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    results
        .iter()
        .filter(|result| {
            result.title.to_lowercase().contains(&needle)
                || result.snippet.to_lowercase().contains(&needle)
                || result
                    .document
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .filter(|result| category.matches(result.document.category))
        .collect()
}

#[derive(Clone)]
pub struct SearchService {
    store: Store,
    latency: Duration,
}

impl SearchService {
    pub fn new(store: Store, latency: Duration) -> Self {
        Self { store, latency }
    }

    pub async fn search(&self, query: &str, category: CategoryFilter) -> Vec<SearchResult> {
        tokio::time::sleep(self.latency).await;

        let tables = self.store.read();
        matching(&tables.search_results, query, category)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Records the latest feedback for a result. Returns the updated result,
    /// or `None` for an unknown id.
    pub fn feedback(&self, id: &str, feedback: Feedback) -> Option<SearchResult> {
        let mut tables = self.store.write();
        let result = tables.search_results.iter_mut().find(|result| result.id == id)?;
        result.feedback = Some(feedback);
        Some(result.clone())
    }
}
