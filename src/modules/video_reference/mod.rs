pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::VideoReferenceSearchService;
pub use application::use_cases::{
    SearchVideoReferencesHandler, SearchVideoReferencesQuery, SearchVideoReferencesResult,
};
pub use application::VideoReferenceSearchRepository;
pub use domain::entities::VideoReferenceDetailed;
pub use domain::value_objects::{
    Pacing, Platform, ProductionLevel, SortKey, VideoSearchFilters,
};
pub use infrastructure::VideoReferenceSearchRepositoryImpl;
