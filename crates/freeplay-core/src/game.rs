//! Game records as delivered by the catalog API

use serde::{Deserialize, Serialize};

/// One entry of the remote catalog.
///
/// Only the first six fields are required; the rest are filled in by the
/// FreeToGame API but are not guaranteed by a local proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    pub thumbnail: String,
    pub platform: String,
    pub game_url: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub freetogame_profile_url: Option<String>,
}

/// A `<source>` candidate for the hover preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    pub src: String,
    pub mime: &'static str,
}

impl Game {
    /// Preview video candidates, in the order the browser should try them
    pub fn preview_sources(&self) -> [VideoSource; 2] {
        [
            VideoSource {
                src: format!("/g/{}/videoplayback.webm", self.id),
                mime: "video/webm",
            },
            VideoSource {
                src: format!("/g/{}/videoplayback.mp4", self.id),
                mime: "video/mp4",
            },
        ]
    }

    /// Case-insensitive title match. `needle` must already be lowercased.
    pub fn title_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
pub(crate) fn sample(id: i64, title: &str) -> Game {
    Game {
        id,
        title: title.to_string(),
        short_description: format!("{} description", title),
        thumbnail: format!("https://www.freetogame.com/g/{}/thumbnail.jpg", id),
        platform: "PC (Windows)".to_string(),
        game_url: format!("https://www.freetogame.com/open/{}", id),
        genre: None,
        publisher: None,
        developer: None,
        release_date: None,
        freetogame_profile_url: None,
    }
}
