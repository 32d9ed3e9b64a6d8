use serde::{Deserialize, Serialize};

/// Tutorial attached to a video reference, with the optional second range
/// the tutorial covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialLink {
    pub id: i64,
    pub tutorial_url: String,
    pub label: String,
    pub start_sec: Option<i32>,
    pub end_sec: Option<i32>,
}
