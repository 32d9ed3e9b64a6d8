//! Database model to domain entity mapping.

use crate::modules::video_reference::domain::entities::{
    Category, Hook, Tag, TutorialLink, VideoReferenceDetailed,
};

use super::super::models::{
    CategoryModel, HookModel, TagModel, TutorialModel, TutorialVideoReference, VideoReferenceModel,
};

pub fn category_to_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
        slug: model.slug,
        parent_id: model.parent_id,
        display_order: model.display_order,
    }
}

pub fn tag_to_entity(model: TagModel) -> Tag {
    Tag {
        id: model.id,
        name: model.name,
    }
}

pub fn hook_to_entity(model: HookModel) -> Hook {
    Hook {
        id: model.id,
        name: model.name,
    }
}

/// The link row carries the per-video second offsets.
pub fn tutorial_to_entity(model: TutorialModel, link: &TutorialVideoReference) -> TutorialLink {
    TutorialLink {
        id: model.id,
        tutorial_url: model.tutorial_url,
        label: model.label,
        start_sec: link.start_sec,
        end_sec: link.end_sec,
    }
}

pub fn video_reference_to_entity(
    model: VideoReferenceModel,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    tutorials: Vec<TutorialLink>,
    hook: Option<Hook>,
) -> VideoReferenceDetailed {
    VideoReferenceDetailed {
        id: model.id,
        title: model.title,
        source_url: model.source_url,
        preview_embed: model.preview_embed,
        public_summary: model.public_summary,
        details_public: model.details_public,
        duration_sec: model.duration_sec,
        platform: model.platform,
        pacing: model.pacing,
        production_level: model.production_level,
        hook,
        has_visual_effects: model.has_visual_effects,
        has_3d: model.has_3d,
        has_animations: model.has_animations,
        has_typography: model.has_typography,
        has_sound_design: model.has_sound_design,
        has_ai: model.has_ai,
        search_profile: model.search_profile,
        search_metadata: model.search_metadata,
        quality_score: model.quality_score,
        rating: model.rating,
        created_at: model.created_at,
        updated_at: model.updated_at,
        categories,
        tags,
        tutorials,
    }
}
