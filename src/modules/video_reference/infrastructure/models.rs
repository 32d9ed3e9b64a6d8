use crate::modules::video_reference::domain::value_objects::{Pacing, Platform, ProductionLevel};
use crate::schema::{
    categories, hooks, tags, tutorial_video_references, tutorials, video_reference_categories,
    video_reference_tags, video_references,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// ================== VIDEO REFERENCE MODELS ==================

/// Main video reference database model
#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = video_references)]
pub struct VideoReferenceModel {
    pub id: i64,
    pub title: String,
    pub source_url: String,
    pub preview_embed: Option<String>,
    pub public_summary: Option<String>,
    pub details_public: Option<serde_json::Value>,
    pub duration_sec: Option<i32>,
    pub platform: Option<Platform>,
    pub pacing: Option<Pacing>,
    pub production_level: Option<ProductionLevel>,
    pub hook_id: Option<i64>,
    pub has_visual_effects: bool,
    pub has_3d: bool,
    pub has_animations: bool,
    pub has_typography: bool,
    pub has_sound_design: bool,
    pub has_ai: bool,
    pub search_profile: String,
    pub search_metadata: Option<String>,
    pub search_tags: Option<String>,
    pub search_categories: Option<String>,
    pub quality_score: i32,
    pub completeness_flags: Option<serde_json::Value>,
    pub rating: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>, // Must be last to match schema
}

/// Insert payload (write side is the catalog CRUD collaborators and tests)
#[derive(Insertable, Debug, Clone, Default)]
#[diesel(table_name = video_references)]
pub struct NewVideoReference {
    pub title: String,
    pub source_url: String,
    pub preview_embed: Option<String>,
    pub public_summary: Option<String>,
    pub details_public: Option<serde_json::Value>,
    pub duration_sec: Option<i32>,
    pub platform: Option<Platform>,
    pub pacing: Option<Pacing>,
    pub production_level: Option<ProductionLevel>,
    pub hook_id: Option<i64>,
    pub has_visual_effects: bool,
    pub has_3d: bool,
    pub has_animations: bool,
    pub has_typography: bool,
    pub has_sound_design: bool,
    pub has_ai: bool,
    pub search_profile: String,
    pub search_metadata: Option<String>,
    pub quality_score: i32,
    pub rating: f32,
}

// ================== CATEGORY MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = categories)]
pub struct CategoryModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i64>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i64>,
    pub display_order: i32,
}

// ============= VIDEO-CATEGORY ASSOCIATION (join) =============

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(VideoReferenceModel, foreign_key = video_reference_id))]
#[diesel(belongs_to(CategoryModel, foreign_key = category_id))]
#[diesel(table_name = video_reference_categories)]
#[diesel(primary_key(video_reference_id, category_id))]
pub struct VideoReferenceCategory {
    pub video_reference_id: i64,
    pub category_id: i64,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = video_reference_categories)]
pub struct NewVideoReferenceCategory {
    pub video_reference_id: i64,
    pub category_id: i64,
}

// ================== TAG MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = tags)]
pub struct TagModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tags)]
pub struct NewTag {
    pub name: String,
}

// ============= VIDEO-TAG ASSOCIATION (join) =============

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(VideoReferenceModel, foreign_key = video_reference_id))]
#[diesel(belongs_to(TagModel, foreign_key = tag_id))]
#[diesel(table_name = video_reference_tags)]
#[diesel(primary_key(video_reference_id, tag_id))]
pub struct VideoReferenceTag {
    pub video_reference_id: i64,
    pub tag_id: i64,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = video_reference_tags)]
pub struct NewVideoReferenceTag {
    pub video_reference_id: i64,
    pub tag_id: i64,
}

// ================== HOOK MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = hooks)]
pub struct HookModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = hooks)]
pub struct NewHook {
    pub name: String,
}

// ================== TUTORIAL MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = tutorials)]
pub struct TutorialModel {
    pub id: i64,
    pub tutorial_url: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tutorials)]
pub struct NewTutorial {
    pub tutorial_url: String,
    pub label: String,
}

// ============= TUTORIAL-VIDEO ASSOCIATION (join, carries offsets) =============

#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(VideoReferenceModel, foreign_key = video_reference_id))]
#[diesel(belongs_to(TutorialModel, foreign_key = tutorial_id))]
#[diesel(table_name = tutorial_video_references)]
#[diesel(primary_key(tutorial_id, video_reference_id))]
pub struct TutorialVideoReference {
    pub tutorial_id: i64,
    pub video_reference_id: i64,
    pub start_sec: Option<i32>,
    pub end_sec: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tutorial_video_references)]
pub struct NewTutorialVideoReference {
    pub tutorial_id: i64,
    pub video_reference_id: i64,
    pub start_sec: Option<i32>,
    pub end_sec: Option<i32>,
}
