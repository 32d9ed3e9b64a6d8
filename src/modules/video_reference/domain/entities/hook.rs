use serde::{Deserialize, Serialize};

/// Attention-hook style referenced by video references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    pub id: i64,
    pub name: String,
}
