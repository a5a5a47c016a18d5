use dioxus::prelude::*;

use crate::utils::tweet_id_from_url;

const EMBED_BASE: &str = "https://platform.twitter.com/embed/Tweet.html";

fn embed_src(tweet_id: &str) -> String {
    format!(
        "{EMBED_BASE}?id={}&theme=light&cards=hidden&conversation=none&align=center&chrome=transparent%20nofooter%20noborders%20noheader",
        urlencoding::encode(tweet_id)
    )
}

/// Read-only card for the tweet the current video came from.
#[component]
pub fn TweetEmbed(tweet_url: String, #[props(default)] title: String) -> Element {
    let Some(tweet_id) = tweet_id_from_url(&tweet_url) else {
        return rsx! {};
    };
    let src = embed_src(tweet_id);

    rsx! {
        div { class: "tweet-embed",
            // Keyed so the iframe is rebuilt when the tweet changes.
            iframe {
                key: "{tweet_id}",
                src: "{src}",
                title: "{title}",
                "loading": "lazy",
                "scrolling": "no",
                frame_border: "0",
            }
        }
    }
}
