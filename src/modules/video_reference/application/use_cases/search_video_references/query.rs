use crate::modules::video_reference::domain::value_objects::{SortKey, VideoSearchFilters};
use crate::shared::application::pagination::PaginationParams;

/// Query for searching video references
#[derive(Debug, Clone, Default)]
pub struct SearchVideoReferencesQuery {
    pub search: Option<String>,
    pub filters: VideoSearchFilters,
    pub sort_by: Option<SortKey>,
    pub pagination: PaginationParams,
}

impl SearchVideoReferencesQuery {
    pub fn new(
        search: Option<String>,
        filters: VideoSearchFilters,
        sort_by: Option<SortKey>,
        pagination: PaginationParams,
    ) -> Self {
        Self {
            search,
            filters,
            sort_by,
            pagination,
        }
    }
}
