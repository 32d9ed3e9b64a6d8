use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Requested ordering policy for search results.
///
/// `Relevance` is also the default when no key is requested; without a
/// free-text query it degrades to the rating ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Relevance,
    Rating,
    QualityScore,
    CreatedAt,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Rating => "rating",
            SortKey::QualityScore => "quality_score",
            SortKey::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortKey::Relevance),
            "rating" => Ok(SortKey::Rating),
            "quality_score" => Ok(SortKey::QualityScore),
            "created_at" => Ok(SortKey::CreatedAt),
            other => Err(AppError::InvalidFilter(format!(
                "Unknown sort key: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert_eq!(
            "quality_score".parse::<SortKey>().unwrap(),
            SortKey::QualityScore
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            "popularity".parse::<SortKey>(),
            Err(AppError::InvalidFilter(_))
        ));
    }

    #[test]
    fn defaults_to_relevance() {
        assert_eq!(SortKey::default(), SortKey::Relevance);
    }
}
