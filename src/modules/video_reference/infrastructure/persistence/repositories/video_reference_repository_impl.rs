use async_trait::async_trait;
use diesel::dsl::{exists, not, sql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Float4, Text};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task;

use crate::modules::video_reference::application::ports::VideoReferenceSearchRepository;
use crate::modules::video_reference::domain::entities::{
    Category, Hook, Tag, TutorialLink, VideoReferenceDetailed,
};
use crate::modules::video_reference::domain::services::category_expander::{
    expand_selection, CategoryEdge,
};
use crate::modules::video_reference::domain::services::query_normalizer::{
    normalize, NormalizedQuery,
};
use crate::modules::video_reference::domain::services::similarity;
use crate::modules::video_reference::domain::value_objects::search_filters::non_empty;
use crate::modules::video_reference::domain::value_objects::{SortKey, VideoSearchFilters};
use crate::modules::video_reference::infrastructure::models::{
    CategoryModel, HookModel, TagModel, TutorialModel, TutorialVideoReference,
    VideoReferenceCategory, VideoReferenceModel, VideoReferenceTag,
};
use crate::schema::{
    categories, hooks, tags, tutorial_video_references, tutorials, video_reference_categories,
    video_reference_tags, video_references,
};
use crate::shared::application::pagination::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::Validator;
use crate::shared::Database;

use super::super::mapper;

type BoxedVideoQuery<'a> = video_references::BoxedQuery<'a, Pg>;

pub struct VideoReferenceSearchRepositoryImpl {
    db: Arc<Database>,
}

impl VideoReferenceSearchRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Attach categories, tags, tutorial links and hooks to a page of rows
    /// with one query per association.
    async fn load_batch_with_relations(
        &self,
        models: Vec<VideoReferenceModel>,
    ) -> AppResult<Vec<VideoReferenceDetailed>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);

        let results = task::spawn_blocking(move || -> AppResult<Vec<VideoReferenceDetailed>> {
            let mut conn = db.get_connection()?;

            let rows_c: Vec<(VideoReferenceCategory, CategoryModel)> =
                VideoReferenceCategory::belonging_to(&models)
                    .inner_join(categories::table)
                    .select((
                        video_reference_categories::all_columns,
                        categories::all_columns,
                    ))
                    .load::<(VideoReferenceCategory, CategoryModel)>(&mut conn)?;
            let grouped_c = rows_c.grouped_by(&models);
            let categories_grouped: HashMap<i64, Vec<Category>> = models
                .iter()
                .zip(grouped_c)
                .map(|(m, pairs)| {
                    let v = pairs
                        .into_iter()
                        .map(|(_, c)| mapper::category_to_entity(c))
                        .collect::<Vec<_>>();
                    (m.id, v)
                })
                .collect();

            let rows_t: Vec<(VideoReferenceTag, TagModel)> =
                VideoReferenceTag::belonging_to(&models)
                    .inner_join(tags::table)
                    .select((video_reference_tags::all_columns, tags::all_columns))
                    .load::<(VideoReferenceTag, TagModel)>(&mut conn)?;
            let grouped_t = rows_t.grouped_by(&models);
            let tags_grouped: HashMap<i64, Vec<Tag>> = models
                .iter()
                .zip(grouped_t)
                .map(|(m, pairs)| {
                    let v = pairs
                        .into_iter()
                        .map(|(_, t)| mapper::tag_to_entity(t))
                        .collect::<Vec<_>>();
                    (m.id, v)
                })
                .collect();

            let rows_l: Vec<(TutorialVideoReference, TutorialModel)> =
                TutorialVideoReference::belonging_to(&models)
                    .inner_join(tutorials::table)
                    .select((
                        tutorial_video_references::all_columns,
                        tutorials::all_columns,
                    ))
                    .load::<(TutorialVideoReference, TutorialModel)>(&mut conn)?;
            let grouped_l = rows_l.grouped_by(&models);
            let tutorials_grouped: HashMap<i64, Vec<TutorialLink>> = models
                .iter()
                .zip(grouped_l)
                .map(|(m, pairs)| {
                    let v = pairs
                        .into_iter()
                        .map(|(link, t)| mapper::tutorial_to_entity(t, &link))
                        .collect::<Vec<_>>();
                    (m.id, v)
                })
                .collect();

            let hook_ids: Vec<i64> = models.iter().filter_map(|m| m.hook_id).collect();
            let hooks_by_id: HashMap<i64, Hook> = if hook_ids.is_empty() {
                HashMap::new()
            } else {
                hooks::table
                    .filter(hooks::id.eq_any(hook_ids))
                    .load::<HookModel>(&mut conn)?
                    .into_iter()
                    .map(|h| (h.id, mapper::hook_to_entity(h)))
                    .collect()
            };

            let out = models
                .into_iter()
                .map(|m| {
                    let cats = categories_grouped.get(&m.id).cloned().unwrap_or_default();
                    let tag_list = tags_grouped.get(&m.id).cloned().unwrap_or_default();
                    let tutorial_links =
                        tutorials_grouped.get(&m.id).cloned().unwrap_or_default();
                    let hook = m.hook_id.and_then(|id| hooks_by_id.get(&id).cloned());
                    mapper::video_reference_to_entity(m, cats, tag_list, tutorial_links, hook)
                })
                .collect::<Vec<_>>();

            Ok(out)
        })
        .await??;

        Ok(results)
    }
}

#[async_trait]
impl VideoReferenceSearchRepository for VideoReferenceSearchRepositoryImpl {
    async fn search(
        &self,
        search: Option<String>,
        filters: VideoSearchFilters,
        sort_by: Option<SortKey>,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<VideoReferenceDetailed>> {
        Validator::validate_page_request(pagination.page, pagination.per_page)?;
        if let Some(source_url) = &filters.source_url {
            Validator::validate_source_url(source_url)?;
        }

        let text = search.as_deref().and_then(normalize);
        let sort_by = sort_by.unwrap_or_default();

        let db = Arc::clone(&self.db);
        let started = std::time::Instant::now();

        let (models, total) = task::spawn_blocking(
            move || -> AppResult<(Vec<VideoReferenceModel>, u64)> {
                let mut conn = db.get_connection()?;

                // Root selections cascade to their descendants; resolve once
                // so the count and the page query see the same effective set.
                let expanded = match non_empty(&filters.category_ids) {
                    Some(requested) => {
                        let edges: Vec<CategoryEdge> = categories::table
                            .select((categories::id, categories::parent_id))
                            .load::<(i64, Option<i64>)>(&mut conn)?
                            .into_iter()
                            .map(|(id, parent_id)| CategoryEdge { id, parent_id })
                            .collect();
                        Some(expand_selection(requested, &edges))
                    }
                    None => None,
                };

                let total: i64 = filtered_catalog(&filters, expanded.as_deref(), text.as_ref())
                    .count()
                    .get_result(&mut conn)?;

                let rows = ordered(
                    filtered_catalog(&filters, expanded.as_deref(), text.as_ref()),
                    sort_by,
                    text.as_ref(),
                )
                .offset(pagination.offset())
                .limit(pagination.limit())
                .load::<VideoReferenceModel>(&mut conn)?;

                Ok((rows, total as u64))
            },
        )
        .await??;

        let items = self.load_batch_with_relations(models).await?;

        if let Some(term) = search.as_deref() {
            LogContext::search_operation(term, Some(items.len()));
        }
        LogContext::performance_metric(
            "video_reference_search",
            started.elapsed().as_millis() as u64,
            None,
        );

        Ok(PaginatedResult::new(items, total, &pagination))
    }
}

/// Build the filtered (unordered) catalog query. Called once for the page
/// and once for the total count so both see identical predicates.
fn filtered_catalog(
    filters: &VideoSearchFilters,
    category_ids: Option<&[i64]>,
    text: Option<&NormalizedQuery>,
) -> BoxedVideoQuery<'static> {
    let mut query = video_references::table.into_boxed();

    match text {
        Some(NormalizedQuery::Contains(term)) => {
            // Stemmers skip very short tokens; substring-match the
            // searchable text columns instead.
            let pattern = format!("%{}%", term);
            query = query.filter(
                sql::<Bool>("(title ILIKE ")
                    .bind::<Text, _>(pattern.clone())
                    .sql(" OR search_profile ILIKE ")
                    .bind::<Text, _>(pattern.clone())
                    .sql(" OR public_summary ILIKE ")
                    .bind::<Text, _>(pattern.clone())
                    .sql(" OR search_tags ILIKE ")
                    .bind::<Text, _>(pattern.clone())
                    .sql(" OR search_categories ILIKE ")
                    .bind::<Text, _>(pattern)
                    .sql(")"),
            );
        }
        Some(NormalizedQuery::Lexical { ts_query, raw }) => {
            // Hybrid text match: stemmed tsquery hit OR a trigram hit on any
            // similarity-bearing aggregate.
            let threshold = similarity::similarity_threshold();
            query = query.filter(
                sql::<Bool>("(search_vector @@ to_tsquery('english', ")
                    .bind::<Text, _>(ts_query.clone())
                    .sql(") OR similarity(title, ")
                    .bind::<Text, _>(raw.clone())
                    .sql(") >= ")
                    .bind::<Float4, _>(threshold)
                    .sql(" OR similarity(search_tags, ")
                    .bind::<Text, _>(raw.clone())
                    .sql(") >= ")
                    .bind::<Float4, _>(threshold)
                    .sql(" OR similarity(search_categories, ")
                    .bind::<Text, _>(raw.clone())
                    .sql(") >= ")
                    .bind::<Float4, _>(threshold)
                    .sql(")"),
            );
        }
        None => {}
    }

    // Identity filters stay strict AND constraints outside the text OR group
    if let Some(id) = filters.id {
        query = query.filter(video_references::id.eq(id));
    }
    if let Some(source_url) = &filters.source_url {
        query = query.filter(video_references::source_url.eq(source_url.clone()));
    }

    if let Some(ids) = category_ids {
        query = query.filter(exists(
            video_reference_categories::table
                .filter(video_reference_categories::video_reference_id.eq(video_references::id))
                .filter(video_reference_categories::category_id.eq_any(ids.to_vec())),
        ));
    }

    if let Some(platforms) = non_empty(&filters.platforms) {
        query = query.filter(video_references::platform.eq_any(platforms.to_vec()));
    }
    if let Some(pacing) = non_empty(&filters.pacing) {
        query = query.filter(video_references::pacing.eq_any(pacing.to_vec()));
    }
    if let Some(levels) = non_empty(&filters.production_levels) {
        query = query.filter(video_references::production_level.eq_any(levels.to_vec()));
    }
    if let Some(hook_ids) = non_empty(&filters.hook_ids) {
        query = query.filter(video_references::hook_id.eq_any(hook_ids.to_vec()));
    }
    if let Some(tag_ids) = non_empty(&filters.tag_ids) {
        query = query.filter(exists(
            video_reference_tags::table
                .filter(video_reference_tags::video_reference_id.eq(video_references::id))
                .filter(video_reference_tags::tag_id.eq_any(tag_ids.to_vec())),
        ));
    }

    if let Some(flag) = filters.has_visual_effects {
        query = query.filter(video_references::has_visual_effects.eq(flag));
    }
    if let Some(flag) = filters.has_3d {
        query = query.filter(video_references::has_3d.eq(flag));
    }
    if let Some(flag) = filters.has_animations {
        query = query.filter(video_references::has_animations.eq(flag));
    }
    if let Some(flag) = filters.has_typography {
        query = query.filter(video_references::has_typography.eq(flag));
    }
    if let Some(flag) = filters.has_sound_design {
        query = query.filter(video_references::has_sound_design.eq(flag));
    }
    if let Some(flag) = filters.has_ai {
        query = query.filter(video_references::has_ai.eq(flag));
    }

    match filters.has_tutorial {
        Some(true) => {
            query = query.filter(exists(
                tutorial_video_references::table.filter(
                    tutorial_video_references::video_reference_id.eq(video_references::id),
                ),
            ));
        }
        Some(false) => {
            query = query.filter(not(exists(
                tutorial_video_references::table.filter(
                    tutorial_video_references::video_reference_id.eq(video_references::id),
                ),
            )));
        }
        None => {}
    }

    query
}

/// Apply the ordering chain for the requested sort key. Later keys break
/// ties of earlier ones, so identical queries always page identically.
fn ordered(
    query: BoxedVideoQuery<'static>,
    sort_by: SortKey,
    text: Option<&NormalizedQuery>,
) -> BoxedVideoQuery<'static> {
    match sort_by {
        SortKey::Rating => query
            .order(video_references::rating.desc())
            .then_order_by(video_references::created_at.desc()),
        SortKey::QualityScore => query
            .order(video_references::quality_score.desc())
            .then_order_by(video_references::rating.desc())
            .then_order_by(video_references::created_at.desc()),
        SortKey::CreatedAt => query
            .order(video_references::created_at.desc())
            .then_order_by(video_references::rating.desc()),
        SortKey::Relevance => match text {
            Some(NormalizedQuery::Lexical { ts_query, raw }) => {
                // The x2 factor biases stemmed hits over fuzzy-only hits.
                let relevance = sql::<Float4>(
                    "(CASE WHEN search_vector @@ to_tsquery('english', ",
                )
                .bind::<Text, _>(ts_query.clone())
                .sql(") THEN ts_rank_cd(search_vector, to_tsquery('english', ")
                .bind::<Text, _>(ts_query.clone())
                .sql(")) * 2 ELSE 0 END + GREATEST(COALESCE(similarity(title, ")
                .bind::<Text, _>(raw.clone())
                .sql("), 0), COALESCE(similarity(search_tags, ")
                .bind::<Text, _>(raw.clone())
                .sql("), 0), COALESCE(similarity(search_categories, ")
                .bind::<Text, _>(raw.clone())
                .sql("), 0)))");
                query
                    .order(relevance.desc())
                    .then_order_by(video_references::rating.desc())
                    .then_order_by(video_references::created_at.desc())
            }
            // Short or absent queries carry no relevance signal; fall back
            // to the default catalog ordering.
            _ => query
                .order(video_references::rating.desc())
                .then_order_by(video_references::created_at.desc()),
        },
    }
}
