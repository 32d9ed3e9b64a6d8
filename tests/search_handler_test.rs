mod utils;

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use reelref::modules::video_reference::application::ports::VideoReferenceSearchRepository;
use reelref::modules::video_reference::domain::entities::VideoReferenceDetailed;
use reelref::modules::video_reference::domain::value_objects::{
    Platform, SortKey, VideoSearchFilters,
};
use reelref::shared::application::pagination::{PaginatedResult, PaginationParams};
use reelref::shared::errors::{AppError, AppResult};
use reelref::{SearchVideoReferencesQuery, VideoReferenceSearchService};

use utils::factories::VideoReferenceFactory;

type ReceivedQuery = (
    Option<String>,
    VideoSearchFilters,
    Option<SortKey>,
    PaginationParams,
);

/// Records what reaches the port and returns a canned catalog page.
struct RecordingRepository {
    received: Mutex<Vec<ReceivedQuery>>,
    catalog: Vec<VideoReferenceDetailed>,
    fail: bool,
}

impl RecordingRepository {
    fn returning(catalog: Vec<VideoReferenceDetailed>) -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            catalog,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            received: Mutex::new(Vec::new()),
            catalog: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl VideoReferenceSearchRepository for RecordingRepository {
    async fn search(
        &self,
        search: Option<String>,
        filters: VideoSearchFilters,
        sort_by: Option<SortKey>,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<VideoReferenceDetailed>> {
        if self.fail {
            return Err(AppError::SearchUnavailable("store offline".to_string()));
        }
        self.received
            .lock()
            .unwrap()
            .push((search, filters, sort_by, pagination));
        Ok(PaginatedResult::new(
            self.catalog.clone(),
            self.catalog.len() as u64,
            &pagination,
        ))
    }
}

#[tokio::test]
async fn service_returns_page_with_metadata() {
    let catalog = vec![
        VideoReferenceFactory::new()
            .with_id(1)
            .with_title("AI dance compilation")
            .with_rating(4.5)
            .with_tag(7, "dance")
            .build(),
        VideoReferenceFactory::new()
            .with_id(2)
            .with_title("Stop motion cooking")
            .with_rating(3.0)
            .with_tutorial(11, Some(5), Some(42))
            .build(),
    ];
    let service =
        VideoReferenceSearchService::new(Arc::new(RecordingRepository::returning(catalog)));

    let result = service
        .search(SearchVideoReferencesQuery::default())
        .await
        .unwrap();

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.total, 2);
    assert_eq!(result.current_page, 1);
    assert_eq!(result.last_page, 1);
    assert_eq!(result.items[0].tags[0].name, "dance");
    assert!(result.items[1].has_tutorial());
}

#[tokio::test]
async fn query_reaches_the_port_unchanged() {
    let repository = Arc::new(RecordingRepository::returning(vec![]));
    let service = VideoReferenceSearchService::new(repository.clone());

    let filters = VideoSearchFilters {
        platforms: Some(vec![Platform::Tiktok, Platform::Youtube]),
        has_ai: Some(true),
        ..Default::default()
    };
    service
        .search(SearchVideoReferencesQuery::new(
            Some("ai dance".to_string()),
            filters,
            Some(SortKey::Rating),
            PaginationParams::new(2, 10),
        ))
        .await
        .unwrap();

    let received = repository.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (search, filters, sort_by, pagination) = &received[0];
    assert_eq!(search.as_deref(), Some("ai dance"));
    assert_eq!(
        filters.platforms,
        Some(vec![Platform::Tiktok, Platform::Youtube])
    );
    assert_eq!(filters.has_ai, Some(true));
    assert_eq!(*sort_by, Some(SortKey::Rating));
    assert_eq!(pagination.page, 2);
    assert_eq!(pagination.per_page, 10);
}

#[tokio::test]
async fn store_failures_surface_as_search_unavailable() {
    let service = VideoReferenceSearchService::new(Arc::new(RecordingRepository::failing()));

    let err = service
        .search(SearchVideoReferencesQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::SearchUnavailable(_)));
}

#[tokio::test]
async fn similarity_threshold_setter_validates_range() {
    let service = VideoReferenceSearchService::new(Arc::new(RecordingRepository::returning(vec![])));

    service.set_similarity_threshold(0.5).unwrap();
    assert!(matches!(
        service.set_similarity_threshold(1.5),
        Err(AppError::InvalidFilter(_))
    ));

    // Restore the default so other tests in this binary see it.
    service.set_similarity_threshold(0.3).unwrap();
}
