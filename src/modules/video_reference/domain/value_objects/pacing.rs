use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editing pace of a video reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::VideoPacing"]
#[serde(rename_all = "lowercase")]
pub enum Pacing {
    Slow,
    Medium,
    Fast,
}

impl Pacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::Slow => "slow",
            Pacing::Medium => "medium",
            Pacing::Fast => "fast",
        }
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
