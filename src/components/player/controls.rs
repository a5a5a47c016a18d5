use dioxus::prelude::*;

use crate::components::{Icon, IconKind, RadioController};
use crate::playlist::TransportAction;

#[component]
pub(super) fn ShuffleButton() -> Element {
    let controller = use_context::<RadioController>();

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            aria_label: "Shuffle",
            onclick: move |_| controller.dispatch(TransportAction::Shuffle),
            Icon { kind: IconKind::Shuffle }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let controller = use_context::<RadioController>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            aria_label: "Previous",
            onclick: move |_| controller.dispatch(TransportAction::Previous),
            Icon { kind: IconKind::Previous }
        }
    }
}

/// The one button whose look follows playback state.
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let controller = use_context::<RadioController>();
    let playing = controller.playback().is_playing;

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "primary",
            aria_label: if playing { "Pause" } else { "Play" },
            onclick: move |_| controller.dispatch(TransportAction::TogglePlay),
            if playing {
                Icon { kind: IconKind::Pause }
            } else {
                Icon { kind: IconKind::Play }
            }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let controller = use_context::<RadioController>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            aria_label: "Next",
            onclick: move |_| controller.dispatch(TransportAction::Next),
            Icon { kind: IconKind::Next }
        }
    }
}

#[component]
pub(super) fn ShareButton() -> Element {
    let controller = use_context::<RadioController>();

    rsx! {
        button {
            id: "share-btn",
            r#type: "button",
            aria_label: "Copy link",
            onclick: move |_| controller.share(),
            Icon { kind: IconKind::Share }
        }
    }
}
