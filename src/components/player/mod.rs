use dioxus::prelude::*;

use crate::components::RadioController;
use crate::playlist::{TransportAction, MAX_PLAYED_FRACTION};

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton, ShareButton, ShuffleButton};

fn parse_fraction(e: &Event<FormData>) -> Option<f64> {
    e.value().parse::<f64>().ok()
}

#[component]
pub fn PlayerControls() -> Element {
    let controller = use_context::<RadioController>();
    let playback = controller.playback();

    let played = playback.played_fraction;
    let elapsed = playback.elapsed_label();
    let duration = playback.duration_label();
    let percent = (played * 100.0).clamp(0.0, 100.0);
    let track_style = format!(
        "background: linear-gradient(to right, var(--accent) {percent:.3}%, var(--track) {percent:.3}%);"
    );

    // A press that never produces `change` (e.g. released outside the
    // window) must not leave the slider stuck in seeking mode.
    let release = move |_: PointerEvent| {
        let state = controller.playback();
        if state.is_seeking {
            controller.dispatch(TransportAction::SeekEnd(state.played_fraction));
        }
    };

    rsx! {
        div { class: "player-controls",
            div { class: "seek-row",
                span { class: "elapsed", "{elapsed}" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{MAX_PLAYED_FRACTION}",
                    step: "any",
                    aria_label: "Seek",
                    value: "{played}",
                    style: "{track_style}",
                    onpointerdown: move |_| controller.dispatch(TransportAction::SeekBegin),
                    oninput: move |e| {
                        if let Some(value) = parse_fraction(&e) {
                            controller.dispatch(TransportAction::SeekMove(value));
                        }
                    },
                    onchange: move |e| {
                        if let Some(value) = parse_fraction(&e) {
                            controller.dispatch(TransportAction::SeekEnd(value));
                        }
                    },
                    onpointerup: release,
                    onpointercancel: release,
                }
                span { class: "duration", "{duration}" }
            }
            div { class: "transport-row",
                ShuffleButton {}
                PrevButton {}
                PlayPauseButton {}
                NextButton {}
                ShareButton {}
            }
        }
    }
}
