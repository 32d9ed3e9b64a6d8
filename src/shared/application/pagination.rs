/// Pagination support for queries
///
/// Standard pagination model used across the search surface
use serde::{Deserialize, Serialize};

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1) as i64) * (self.per_page as i64)
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
    pub last_page: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, params: &PaginationParams) -> Self {
        // An empty result set still reports one (empty) page.
        let last_page = (((total as f64) / (params.per_page as f64)).ceil() as u32).max(1);

        Self {
            items,
            total,
            current_page: params.page,
            per_page: params.per_page,
            last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_starts_at_zero_for_first_page() {
        let params = PaginationParams::new(1, 20);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn offset_advances_by_page_size() {
        let params = PaginationParams::new(3, 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn last_page_rounds_up() {
        let result = PaginatedResult::new(vec![1, 2, 3], 41, &PaginationParams::new(1, 20));
        assert_eq!(result.last_page, 3);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let result: PaginatedResult<i32> =
            PaginatedResult::new(vec![], 0, &PaginationParams::new(1, 20));
        assert_eq!(result.last_page, 1);
        assert_eq!(result.total, 0);
    }
}
