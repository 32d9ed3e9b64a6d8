mod handler;
mod query;
mod result;

pub use handler::SearchVideoReferencesHandler;
pub use query::SearchVideoReferencesQuery;
pub use result::SearchVideoReferencesResult;
