pub mod pacing;
pub mod platform;
pub mod production_level;
pub mod search_filters;
pub mod sort_key;

pub use pacing::Pacing;
pub use platform::Platform;
pub use production_level::ProductionLevel;
pub use search_filters::VideoSearchFilters;
pub use sort_key::SortKey;
