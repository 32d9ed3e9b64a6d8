pub mod ports;
pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use ports::VideoReferenceSearchRepository;
pub use service::VideoReferenceSearchService;
pub use use_cases::{
    SearchVideoReferencesHandler, SearchVideoReferencesQuery, SearchVideoReferencesResult,
};
