mod video_reference_repository_impl;

pub use video_reference_repository_impl::VideoReferenceSearchRepositoryImpl;
