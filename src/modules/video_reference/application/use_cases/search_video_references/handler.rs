use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video_reference::application::ports::VideoReferenceSearchRepository;
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::{query::SearchVideoReferencesQuery, result::SearchVideoReferencesResult};

/// Query handler for searching video references
pub struct SearchVideoReferencesHandler {
    repository: Arc<dyn VideoReferenceSearchRepository>,
}

impl SearchVideoReferencesHandler {
    pub fn new(repository: Arc<dyn VideoReferenceSearchRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query<SearchVideoReferencesQuery, SearchVideoReferencesResult>
    for SearchVideoReferencesHandler
{
    async fn execute(
        &self,
        query: SearchVideoReferencesQuery,
    ) -> AppResult<SearchVideoReferencesResult> {
        // Delegate to repository
        self.repository
            .search(query.search, query.filters, query.sort_by, query.pagination)
            .await
    }
}
