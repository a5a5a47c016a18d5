// JavaScript bridge to the YouTube IFrame player. Runs through `document::eval`
// so the same code drives the browser build and the desktop webview.
use dioxus::prelude::*;

use crate::playback::{PlaybackBackend, PlayerSnapshot};

pub const PLAYER_HOST_ID: &str = "radio-player-host";

const PLAYER_BOOTSTRAP_JS: &str = r#"
(function () {
    if (window.__tweetRadioPlayer) return true;

    const state = { player: null, ready: false, pending: [], mediaId: null };

    const apply = (cmd) => {
        if (!cmd || typeof cmd.type !== "string") return;
        if (cmd.type === "load") state.mediaId = cmd.media_id;
        if (!state.ready || !state.player) {
            state.pending.push(cmd);
            return;
        }
        const player = state.player;
        switch (cmd.type) {
            case "load":
                if (cmd.autoplay) player.loadVideoById(cmd.media_id);
                else player.cueVideoById(cmd.media_id);
                break;
            case "play":
                player.playVideo();
                break;
            case "pause":
                player.pauseVideo();
                break;
            case "seek": {
                const duration = Number(player.getDuration());
                if (Number.isFinite(duration) && duration > 0) {
                    player.seekTo(cmd.fraction * duration, true);
                }
                break;
            }
        }
    };

    const create = () => {
        const host = document.getElementById("radio-player-host");
        if (!host || !window.YT || !window.YT.Player) {
            setTimeout(create, 100);
            return;
        }
        const target = document.createElement("div");
        host.appendChild(target);
        state.player = new window.YT.Player(target, {
            width: "100%",
            height: "100%",
            playerVars: { autoplay: 0, controls: 0, rel: 0, modestbranding: 1, playsinline: 1 },
            events: {
                onReady: () => {
                    state.ready = true;
                    state.pending.splice(0).forEach(apply);
                },
            },
        });
    };

    const snapshot = () => {
        const player = state.player;
        if (!state.ready || !player || typeof player.getCurrentTime !== "function") {
            return { media_id: null, current_time: 0, duration: 0, ended: false };
        }
        const data = typeof player.getVideoData === "function" ? player.getVideoData() : null;
        const currentTime = Number(player.getCurrentTime());
        const duration = Number(player.getDuration());
        return {
            media_id: (data && data.video_id) || state.mediaId,
            current_time: Number.isFinite(currentTime) ? currentTime : 0,
            duration: Number.isFinite(duration) ? duration : 0,
            ended: player.getPlayerState() === 0,
        };
    };

    window.__tweetRadioPlayer = { apply, snapshot };

    if (window.YT && window.YT.Player) {
        create();
    } else {
        const previous = window.onYouTubeIframeAPIReady;
        window.onYouTubeIframeAPIReady = () => {
            if (typeof previous === "function") previous();
            create();
        };
        const tag = document.createElement("script");
        tag.src = "https://www.youtube.com/iframe_api";
        document.head.appendChild(tag);
    }
    return true;
})();
"#;

/// Stateless handle on the page's single embedded player.
#[derive(Debug, Clone, Copy, Default)]
pub struct YoutubeBridge;

impl YoutubeBridge {
    pub fn install(&self) {
        let _ = document::eval(PLAYER_BOOTSTRAP_JS);
    }

    fn command(&self, value: serde_json::Value) {
        self.install();
        let payload = serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string());
        let script = format!(
            r#"(function () {{
                const bridge = window.__tweetRadioPlayer;
                if (!bridge) return false;
                bridge.apply({payload});
                return true;
            }})();"#
        );
        let _ = document::eval(&script);
    }

    pub async fn snapshot(&self) -> Option<PlayerSnapshot> {
        let eval = document::eval(
            r#"return (function () {
                const bridge = window.__tweetRadioPlayer;
                if (!bridge) return { media_id: null, current_time: 0, duration: 0, ended: false };
                return bridge.snapshot();
            })();"#,
        );
        eval.join::<PlayerSnapshot>().await.ok()
    }
}

impl PlaybackBackend for YoutubeBridge {
    fn load(&mut self, media_id: &str, autoplay: bool) {
        self.command(serde_json::json!({
            "type": "load",
            "media_id": media_id,
            "autoplay": autoplay,
        }));
    }

    fn set_playing(&mut self, playing: bool) {
        self.command(serde_json::json!({
            "type": if playing { "play" } else { "pause" },
        }));
    }

    fn seek_to(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            return;
        }
        self.command(serde_json::json!({
            "type": "seek",
            "fraction": fraction.clamp(0.0, 1.0),
        }));
    }
}

/// Write the shareable link for `media_id` to the clipboard. Without a fixed
/// link, the current page URL with its `v` parameter set is used.
pub async fn copy_share_link(media_id: &str, fixed_link: Option<&str>) -> bool {
    let media_json = serde_json::to_string(media_id).unwrap_or_else(|_| "\"\"".to_string());
    let fixed_json = serde_json::to_string(&fixed_link).unwrap_or_else(|_| "null".to_string());
    let script = format!(
        r#"return (async function () {{
            let link = {fixed_json};
            if (!link) {{
                const url = new URL(window.location.href);
                url.searchParams.set("v", {media_json});
                link = url.toString();
            }}
            try {{
                await navigator.clipboard.writeText(link);
                return true;
            }} catch (err) {{
                return false;
            }}
        }})();"#
    );
    document::eval(&script).join::<bool>().await.unwrap_or(false)
}
