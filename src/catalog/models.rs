use serde::{Deserialize, Serialize};

use crate::utils::{extract_youtube_video_id, tweet_id_from_url};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<String>,
}

/// One scraped tweet, optionally enriched with the video it links to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub url: String,
    #[serde(default)]
    pub full_text: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub youtube_metadata: Option<YoutubeMetadata>,
}

impl Item {
    /// Video identifier handed to the player. Prefers the enriched metadata id
    /// and falls back to parsing the linked URL.
    pub fn media_id(&self) -> Option<String> {
        let metadata = self.youtube_metadata.as_ref()?;
        if let Some(id) = metadata.id.as_deref().map(str::trim) {
            if !id.is_empty() {
                return Some(id.to_string());
            }
        }
        self.video_url
            .as_deref()
            .and_then(extract_youtube_video_id)
    }

    pub fn is_playable(&self) -> bool {
        self.media_id().is_some()
    }

    pub fn tweet_id(&self) -> Option<&str> {
        tweet_id_from_url(&self.url)
    }

    pub fn title(&self) -> &str {
        self.youtube_metadata
            .as_ref()
            .map(|m| m.title.as_str())
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(self.full_text.as_str())
    }
}
