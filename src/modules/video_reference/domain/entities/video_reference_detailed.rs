use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Hook, Tag, TutorialLink};
use crate::modules::video_reference::domain::value_objects::{
    Pacing, Platform, ProductionLevel,
};

/// Video reference with all search-relevant associations pre-loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoReferenceDetailed {
    pub id: i64,
    pub title: String,
    pub source_url: String,
    pub preview_embed: Option<String>,
    pub public_summary: Option<String>,
    pub details_public: Option<serde_json::Value>,
    pub duration_sec: Option<i32>,

    // Filterable attributes
    pub platform: Option<Platform>,
    pub pacing: Option<Pacing>,
    pub production_level: Option<ProductionLevel>,
    pub hook: Option<Hook>,
    pub has_visual_effects: bool,
    pub has_3d: bool,
    pub has_animations: bool,
    pub has_typography: bool,
    pub has_sound_design: bool,
    pub has_ai: bool,

    // Search inputs maintained by the catalog CRUD side
    pub search_profile: String,
    pub search_metadata: Option<String>,

    // Ranking signals
    pub quality_score: i32,
    pub rating: f32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // Associations
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub tutorials: Vec<TutorialLink>,
}

impl VideoReferenceDetailed {
    pub fn has_tutorial(&self) -> bool {
        !self.tutorials.is_empty()
    }
}
