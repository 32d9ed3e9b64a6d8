use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Base trait for queries (query handlers)
///
/// Standard interface for CQRS-style read handlers; the search surface is
/// read-only, so only the query half of the pattern exists here.
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
