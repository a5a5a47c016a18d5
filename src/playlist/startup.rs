use rand::Rng;

use super::{EntryPoint, Playlist};
use crate::catalog::Item;
use crate::db::{load_snapshot, save_snapshot, SettingsStore};

/// Result of resolving the working order at page load.
#[derive(Debug, Clone, PartialEq)]
pub struct Startup {
    pub playlist: Playlist,
    /// `true` when the working order came from storage.
    pub restored: bool,
}

/// Restores the persisted working order, or shuffles `catalog` when there is
/// none. A `requested_media` id found in the resulting order overrides the
/// position. The result is written back before returning. Storage failures
/// are logged and never abort startup.
pub fn resolve_startup<S, R>(
    catalog: &[Item],
    store: &S,
    requested_media: Option<&str>,
    entry: EntryPoint,
    rng: &mut R,
) -> Startup
where
    S: SettingsStore + ?Sized,
    R: Rng + ?Sized,
{
    let restored = match load_snapshot(store) {
        Ok(Some(snapshot)) => {
            let playlist = Playlist::from_snapshot(snapshot);
            if playlist.is_none() {
                tracing::warn!("persisted playlist is malformed, starting fresh");
            }
            playlist
        }
        Ok(None) => None,
        Err(err) => {
            tracing::warn!("failed to read persisted playlist, starting fresh: {err}");
            None
        }
    };

    let (mut playlist, from_storage) = match restored {
        Some(playlist) => (playlist, true),
        None => (Playlist::shuffled(catalog, entry, rng), false),
    };

    if let Some(media_id) = requested_media.map(str::trim).filter(|id| !id.is_empty()) {
        if playlist.select_media(media_id) {
            tracing::info!(media_id, "resuming at shared item");
        } else {
            tracing::debug!(media_id, "shared item is not in the working order");
        }
    }

    sync_position(store, &playlist);

    tracing::info!(
        items = playlist.len(),
        position = playlist.position(),
        restored = from_storage,
        "playlist ready"
    );

    Startup {
        playlist,
        restored: from_storage,
    }
}

/// Writes the snapshot for the current position and returns the media id the
/// location should carry. A failed write is logged; the location still moves.
/// An empty playlist writes nothing and yields `None`.
pub fn sync_position<S>(store: &S, playlist: &Playlist) -> Option<String>
where
    S: SettingsStore + ?Sized,
{
    let media_id = playlist.current_media_id()?;
    if let Err(err) = save_snapshot(store, &playlist.snapshot()) {
        tracing::warn!("failed to persist playlist: {err}");
    }
    Some(media_id)
}
