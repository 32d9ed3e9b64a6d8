use super::{Pacing, Platform, ProductionLevel};

/// Typed filter set for video reference searches.
///
/// Every family is independently optional: `None` means "no constraint",
/// and a present-but-empty list is treated the same way, never as "match
/// nothing". Multi-valued families match any of their listed values; the
/// families themselves combine with AND.
#[derive(Debug, Clone, Default)]
pub struct VideoSearchFilters {
    /// Exact-match identity filter, never folded into the text OR group.
    pub id: Option<i64>,
    /// Exact-match source URL filter, never fuzzy.
    pub source_url: Option<String>,
    /// Selected category ids; root selections cascade to their descendants.
    pub category_ids: Option<Vec<i64>>,
    pub platforms: Option<Vec<Platform>>,
    pub pacing: Option<Vec<Pacing>>,
    pub production_levels: Option<Vec<ProductionLevel>>,
    pub hook_ids: Option<Vec<i64>>,
    pub tag_ids: Option<Vec<i64>>,
    pub has_visual_effects: Option<bool>,
    pub has_3d: Option<bool>,
    pub has_animations: Option<bool>,
    pub has_typography: Option<bool>,
    pub has_sound_design: Option<bool>,
    pub has_ai: Option<bool>,
    /// `true` requires at least one tutorial link, `false` requires none.
    pub has_tutorial: Option<bool>,
}

/// A multi-valued family constrains the query only when it has values.
pub fn non_empty<T>(values: &Option<Vec<T>>) -> Option<&[T]> {
    match values {
        Some(v) if !v.is_empty() => Some(v.as_slice()),
        _ => None,
    }
}

impl VideoSearchFilters {
    /// True when no family constrains the result set.
    pub fn is_unconstrained(&self) -> bool {
        self.id.is_none()
            && self.source_url.is_none()
            && non_empty(&self.category_ids).is_none()
            && non_empty(&self.platforms).is_none()
            && non_empty(&self.pacing).is_none()
            && non_empty(&self.production_levels).is_none()
            && non_empty(&self.hook_ids).is_none()
            && non_empty(&self.tag_ids).is_none()
            && self.has_visual_effects.is_none()
            && self.has_3d.is_none()
            && self.has_animations.is_none()
            && self.has_typography.is_none()
            && self.has_sound_design.is_none()
            && self.has_ai.is_none()
            && self.has_tutorial.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_are_unconstrained() {
        assert!(VideoSearchFilters::default().is_unconstrained());
    }

    #[test]
    fn empty_list_counts_as_absent() {
        let filters = VideoSearchFilters {
            tag_ids: Some(vec![]),
            ..Default::default()
        };
        assert!(filters.is_unconstrained());
        assert_eq!(non_empty(&filters.tag_ids), None);
    }

    #[test]
    fn explicit_false_flag_is_a_constraint() {
        let filters = VideoSearchFilters {
            has_3d: Some(false),
            ..Default::default()
        };
        assert!(!filters.is_unconstrained());
    }
}
