//! Embedded video player. Keeps playback side effects out of the render cycle:
//! commands go out through the bridge, polled state comes back as transport actions.

mod bridge;

pub use bridge::{copy_share_link, YoutubeBridge, PLAYER_HOST_ID};

use dioxus::prelude::*;

use crate::components::RadioController;
use crate::config::RadioConfig;
use crate::playback::{EventDecoder, PlaybackBackend};
use crate::utils::delay_ms;

#[component]
pub fn VideoPlayer() -> Element {
    let controller = use_context::<RadioController>();
    let config = use_context::<Signal<RadioConfig>>();
    let radio = controller.radio();

    let media_id = use_memo(move || radio.read().playlist.current_media_id());
    let is_playing = use_memo(move || radio.read().playback.is_playing);

    // One-time setup: install the bridge and poll player state.
    use_effect(move || {
        YoutubeBridge.install();
        let interval = config.peek().poll_interval_ms();

        spawn(async move {
            let mut decoder = EventDecoder::default();
            loop {
                delay_ms(interval).await;

                let Some(snapshot) = YoutubeBridge.snapshot().await else {
                    continue;
                };
                // Ignore reports for the previous item while a new one loads.
                if snapshot.media_id.is_none() || snapshot.media_id != *media_id.peek() {
                    continue;
                }
                for event in decoder.decode(&snapshot) {
                    controller.dispatch(event.into());
                }
            }
        });
    });

    use_effect(move || {
        if let Some(id) = media_id() {
            YoutubeBridge.load(&id, *is_playing.peek());
        }
    });

    use_effect(move || {
        let playing = is_playing();
        YoutubeBridge.set_playing(playing);
    });

    rsx! {
        div { class: "radio-player", id: PLAYER_HOST_ID }
    }
}
