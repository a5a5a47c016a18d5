use dioxus::prelude::*;

use crate::components::video_player::{copy_share_link, YoutubeBridge};
use crate::config::RadioConfig;
use crate::playback::forward;
use crate::playlist::{PlaybackState, Radio, TransportAction};

/// Handle the views use to drive the player. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct RadioController {
    radio: Signal<Radio>,
    toast: Signal<Option<u64>>,
    config: Signal<RadioConfig>,
}

impl RadioController {
    pub fn new(
        radio: Signal<Radio>,
        toast: Signal<Option<u64>>,
        config: Signal<RadioConfig>,
    ) -> Self {
        Self {
            radio,
            toast,
            config,
        }
    }

    pub fn radio(&self) -> Signal<Radio> {
        self.radio
    }

    pub fn playback(&self) -> PlaybackState {
        self.radio.read().playback
    }

    /// Run one reducer step and forward any seek to the player.
    pub fn dispatch(&self, action: TransportAction) {
        let mut radio = self.radio;
        let transition = {
            let mut rng = rand::thread_rng();
            radio.write().apply(action, &mut rng)
        };
        forward(&mut YoutubeBridge, &transition);
    }

    /// Copy the link to the current item; show the toast if the clipboard took it.
    pub fn share(&self) {
        let Some(media_id) = self.radio.peek().playlist.current_media_id() else {
            return;
        };
        let fixed_link = self.config.peek().share_link(&media_id);
        let mut toast = self.toast;

        spawn(async move {
            if copy_share_link(&media_id, fixed_link.as_deref()).await {
                let next = (*toast.peek()).map_or(0, |key| key.wrapping_add(1));
                toast.set(Some(next));
            } else {
                tracing::debug!(%media_id, "clipboard write failed");
            }
        });
    }
}
