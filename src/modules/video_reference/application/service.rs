use std::sync::Arc;

use crate::modules::video_reference::application::ports::VideoReferenceSearchRepository;
use crate::modules::video_reference::domain::services::similarity;
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::use_cases::{
    SearchVideoReferencesHandler, SearchVideoReferencesQuery, SearchVideoReferencesResult,
};

/// Application facade over the search use case.
pub struct VideoReferenceSearchService {
    search_handler: SearchVideoReferencesHandler,
}

impl VideoReferenceSearchService {
    pub fn new(repository: Arc<dyn VideoReferenceSearchRepository>) -> Self {
        Self {
            search_handler: SearchVideoReferencesHandler::new(repository),
        }
    }

    pub async fn search(
        &self,
        query: SearchVideoReferencesQuery,
    ) -> AppResult<SearchVideoReferencesResult> {
        self.search_handler.execute(query).await
    }

    /// Tune fuzzy-match sensitivity; applies to searches started after the
    /// call returns.
    pub fn set_similarity_threshold(&self, threshold: f32) -> AppResult<()> {
        similarity::set_similarity_threshold(threshold)
    }
}
