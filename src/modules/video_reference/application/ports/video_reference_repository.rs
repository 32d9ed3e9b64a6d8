use async_trait::async_trait;

use crate::modules::video_reference::domain::entities::VideoReferenceDetailed;
use crate::modules::video_reference::domain::value_objects::{SortKey, VideoSearchFilters};
use crate::shared::{
    application::pagination::{PaginatedResult, PaginationParams},
    errors::AppResult,
};

/// Port (interface) for the video reference search surface.
/// Application layer interface - infrastructure provides the implementation.
#[async_trait]
pub trait VideoReferenceSearchRepository: Send + Sync {
    /// Run one search: free text plus filters plus ordering, returning one
    /// page of results with associations pre-loaded.
    async fn search(
        &self,
        search: Option<String>,
        filters: VideoSearchFilters,
        sort_by: Option<SortKey>,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<VideoReferenceDetailed>>;
}
