use serde::{Deserialize, Serialize};

use crate::playlist::EntryPoint;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 2000;
pub const DEFAULT_TOAST_EXIT_MS: u64 = 150;
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 100;

/// Player settings stored alongside the playlist snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioConfig {
    #[serde(default)]
    pub entry_point: EntryPoint,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_toast_exit_ms")]
    pub toast_exit_ms: u64,
    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,
    #[serde(default)]
    pub share_base_url: Option<String>,
    #[serde(default = "default_share_message")]
    pub share_message: String,
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_toast_exit_ms() -> u64 {
    DEFAULT_TOAST_EXIT_MS
}

fn default_progress_interval_ms() -> u64 {
    DEFAULT_PROGRESS_INTERVAL_MS
}

fn default_share_message() -> String {
    "Link copied to clipboard".to_string()
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            entry_point: EntryPoint::default(),
            toast_duration_ms: default_toast_duration_ms(),
            toast_exit_ms: default_toast_exit_ms(),
            progress_interval_ms: default_progress_interval_ms(),
            share_base_url: None,
            share_message: default_share_message(),
        }
    }
}

impl RadioConfig {
    /// Poll interval, floored at one frame.
    pub fn poll_interval_ms(&self) -> u64 {
        self.progress_interval_ms.max(16)
    }

    /// Link to share for `media_id` when a fixed base URL is configured.
    pub fn share_link(&self, media_id: &str) -> Option<String> {
        let base = self
            .share_base_url
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())?;
        let separator = if base.contains('?') { '&' } else { '?' };
        Some(format!(
            "{base}{separator}v={}",
            urlencoding::encode(media_id)
        ))
    }
}
