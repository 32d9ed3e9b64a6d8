//! Process-wide trigram similarity threshold.
//!
//! Read during predicate construction, set rarely through the explicit
//! setter. Changing it is a non-atomic configuration change, not a
//! per-request parameter.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Minimum trigram similarity (0.0 - 1.0) for a fuzzy match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.3;

static SIMILARITY_THRESHOLD_BITS: AtomicU32 =
    AtomicU32::new(DEFAULT_SIMILARITY_THRESHOLD.to_bits());

/// The threshold applied to `similarity()` comparisons in search predicates.
pub fn similarity_threshold() -> f32 {
    f32::from_bits(SIMILARITY_THRESHOLD_BITS.load(Ordering::Relaxed))
}

/// Adjust fuzzy-match sensitivity for subsequent searches.
pub fn set_similarity_threshold(threshold: f32) -> AppResult<()> {
    Validator::validate_similarity_threshold(threshold)?;
    SIMILARITY_THRESHOLD_BITS.store(threshold.to_bits(), Ordering::Relaxed);
    Ok(())
}
