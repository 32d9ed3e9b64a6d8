use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Page/per-page bounds for the paginated search surface.
    ///
    /// Upstream request validation enforces these already; re-checking here
    /// turns a bypass into an `InvalidFilter` instead of a silent mis-query.
    pub fn validate_page_request(page: u32, per_page: u32) -> Result<(), AppError> {
        if page < 1 {
            return Err(AppError::InvalidFilter(
                "Page number must be at least 1".to_string(),
            ));
        }
        if per_page < 1 {
            return Err(AppError::InvalidFilter(
                "Page size must be at least 1".to_string(),
            ));
        }
        if per_page > 100 {
            return Err(AppError::InvalidFilter(
                "Page size cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_similarity_threshold(threshold: f32) -> Result<(), AppError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(AppError::InvalidFilter(
                "Similarity threshold must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_source_url(source_url: &str) -> Result<(), AppError> {
        if source_url.is_empty() || source_url.len() > 2048 {
            return Err(AppError::InvalidFilter(
                "Source URL filter must be 1-2048 characters".to_string(),
            ));
        }

        let re = Regex::new(r"^https?://\S+$").unwrap();
        if !re.is_match(source_url) {
            return Err(AppError::InvalidFilter(
                "Source URL filter must be an absolute http(s) URL".to_string(),
            ));
        }
        Ok(())
    }
}
