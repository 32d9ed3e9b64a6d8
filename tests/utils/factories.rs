/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{DateTime, TimeZone, Utc};
use reelref::modules::video_reference::domain::entities::{
    Category, Hook, Tag, TutorialLink, VideoReferenceDetailed,
};
use reelref::modules::video_reference::domain::value_objects::{
    Pacing, Platform, ProductionLevel,
};

pub struct VideoReferenceFactory {
    id: i64,
    title: String,
    source_url: String,
    platform: Option<Platform>,
    pacing: Option<Pacing>,
    production_level: Option<ProductionLevel>,
    hook: Option<Hook>,
    has_ai: bool,
    quality_score: i32,
    rating: f32,
    created_at: DateTime<Utc>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    tutorials: Vec<TutorialLink>,
}

impl Default for VideoReferenceFactory {
    fn default() -> Self {
        Self {
            id: 1,
            title: "Test Video".to_string(),
            source_url: "https://www.tiktok.com/@creator/video/1".to_string(),
            platform: Some(Platform::Tiktok),
            pacing: None,
            production_level: None,
            hook: None,
            has_ai: false,
            quality_score: 0,
            rating: 0.0,
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
            categories: Vec::new(),
            tags: Vec::new(),
            tutorials: Vec::new(),
        }
    }
}

impl VideoReferenceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = Some(pacing);
        self
    }

    pub fn with_production_level(mut self, level: ProductionLevel) -> Self {
        self.production_level = Some(level);
        self
    }

    pub fn with_hook(mut self, id: i64, name: &str) -> Self {
        self.hook = Some(Hook {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_ai(mut self, has_ai: bool) -> Self {
        self.has_ai = has_ai;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_quality_score(mut self, quality_score: i32) -> Self {
        self.quality_score = quality_score;
        self
    }

    pub fn with_category(mut self, id: i64, name: &str, parent_id: Option<i64>) -> Self {
        self.categories.push(Category {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            parent_id,
            display_order: 0,
        });
        self
    }

    pub fn with_tag(mut self, id: i64, name: &str) -> Self {
        self.tags.push(Tag {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_tutorial(mut self, id: i64, start_sec: Option<i32>, end_sec: Option<i32>) -> Self {
        self.tutorials.push(TutorialLink {
            id,
            tutorial_url: format!("https://www.youtube.com/watch?v=tut{}", id),
            label: format!("Tutorial {}", id),
            start_sec,
            end_sec,
        });
        self
    }

    pub fn build(self) -> VideoReferenceDetailed {
        VideoReferenceDetailed {
            id: self.id,
            title: self.title,
            source_url: self.source_url,
            preview_embed: None,
            public_summary: None,
            details_public: None,
            duration_sec: Some(30),
            platform: self.platform,
            pacing: self.pacing,
            production_level: self.production_level,
            hook: self.hook,
            has_visual_effects: false,
            has_3d: false,
            has_animations: false,
            has_typography: false,
            has_sound_design: false,
            has_ai: self.has_ai,
            search_profile: "test search profile".to_string(),
            search_metadata: None,
            quality_score: self.quality_score,
            rating: self.rating,
            created_at: self.created_at,
            updated_at: self.created_at,
            categories: self.categories,
            tags: self.tags,
            tutorials: self.tutorials,
        }
    }
}
