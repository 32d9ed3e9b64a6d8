mod video_reference_repository;

pub use video_reference_repository::VideoReferenceSearchRepository;
