use crate::modules::video_reference::domain::entities::VideoReferenceDetailed;
use crate::shared::application::pagination::PaginatedResult;

/// Result of searching video references (uses PaginatedResult from shared)
pub type SearchVideoReferencesResult = PaginatedResult<VideoReferenceDetailed>;
