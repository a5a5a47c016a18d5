use std::rc::Rc;

use dioxus::prelude::*;

use crate::catalog::catalog;
use crate::components::{
    AppView, PlayerControls, RadioController, Toast, TweetEmbed, VideoPlayer,
};
use crate::db::{load_config, open_store, DetachedStore, SettingsStore};
use crate::playlist::{resolve_startup, sync_position, Radio};

fn platform_store() -> Rc<dyn SettingsStore> {
    match open_store() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            tracing::warn!("storage unavailable, playlist will not be kept: {err}");
            Rc::new(DetachedStore)
        }
    }
}

/// The whole player. `v` is only consulted on first render; afterwards the
/// location follows the playlist.
#[component]
pub fn Station(v: String) -> Element {
    let store = use_hook(platform_store);

    let config = use_signal({
        let store = store.clone();
        move || load_config(store.as_ref())
    });

    let radio = use_signal({
        let store = store.clone();
        move || {
            let entry = config.peek().entry_point;
            let startup = resolve_startup(
                catalog(),
                store.as_ref(),
                Some(v.as_str()),
                entry,
                &mut rand::thread_rng(),
            );
            if !startup.restored {
                tracing::debug!("no stored playlist, started from a fresh shuffle");
            }
            Radio::new(startup.playlist)
        }
    });
    let mut toast = use_signal(|| None::<u64>);

    let controller = RadioController::new(radio, toast, config);
    use_context_provider(|| controller);
    use_context_provider(|| config);

    let stamp = use_memo(move || {
        let radio = radio.read();
        (radio.playlist.position(), radio.playlist.generation())
    });

    // Address bar and stored snapshot move together on every position change.
    use_effect({
        let store = store.clone();
        move || {
            let _ = stamp();
            let location = sync_position(store.as_ref(), &radio.peek().playlist);
            if let Some(media_id) = location {
                navigator().replace(AppView::Station { v: media_id });
            }
        }
    });

    let current = use_memo(move || radio.read().playlist.current().cloned());
    let Some(item) = current() else {
        return rsx! {};
    };
    let settings = config.read().clone();

    rsx! {
        main { class: "station",
            VideoPlayer {}
            TweetEmbed { tweet_url: item.url.clone(), title: item.title().to_string() }
            PlayerControls {}
            if let Some(key) = toast() {
                Toast {
                    key: "{key}",
                    message: settings.share_message.clone(),
                    duration_ms: settings.toast_duration_ms,
                    exit_ms: settings.toast_exit_ms,
                    on_close: move |_| toast.set(None),
                }
            }
        }
    }
}
