pub mod pagination;
pub mod use_case;

pub use pagination::{PaginatedResult, PaginationParams};
pub use use_case::Query;
