pub mod search_video_references;

pub use search_video_references::{
    SearchVideoReferencesHandler, SearchVideoReferencesQuery, SearchVideoReferencesResult,
};
