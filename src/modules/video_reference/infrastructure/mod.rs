pub mod models;
pub mod persistence;

// Re-export repository implementations
pub use persistence::VideoReferenceSearchRepositoryImpl;
