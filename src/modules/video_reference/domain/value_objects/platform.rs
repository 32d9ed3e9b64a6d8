use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hosting platform a video reference was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::VideoPlatform"]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
    Facebook,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Facebook => "facebook",
        }
    }

    /// Detect the platform from a source URL.
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.to_lowercase();

        if url.contains("instagram.com") {
            return Some(Platform::Instagram);
        }
        if url.contains("tiktok.com") {
            return Some(Platform::Tiktok);
        }
        if url.contains("youtube.com") || url.contains("youtu.be") {
            return Some(Platform::Youtube);
        }
        if url.contains("facebook.com") {
            return Some(Platform::Facebook);
        }

        None
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_platform_from_url() {
        assert_eq!(
            Platform::from_url("https://www.tiktok.com/@user/video/123"),
            Some(Platform::Tiktok)
        );
        assert_eq!(
            Platform::from_url("https://youtu.be/abc123"),
            Some(Platform::Youtube)
        );
        assert_eq!(
            Platform::from_url("https://WWW.Instagram.com/reel/xyz/"),
            Some(Platform::Instagram)
        );
        assert_eq!(Platform::from_url("https://example.com/video"), None);
    }
}
