pub mod modules;
pub mod schema;
pub mod shared;

// Re-exports for the most common entry points
pub use modules::video_reference::{
    SearchVideoReferencesHandler, SearchVideoReferencesQuery, SearchVideoReferencesResult,
    VideoReferenceSearchService, VideoSearchFilters,
};
pub use shared::errors::{AppError, AppResult};
pub use shared::Database;

/// Load the environment and bring up logging.
///
/// Call once at process startup, before building a [`Database`].
pub fn init() {
    dotenvy::dotenv().ok();
    shared::utils::logger::init_logger();
}
