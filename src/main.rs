use dioxus::prelude::*;

mod catalog;
mod components;
mod config;
mod db;
mod playback;
mod playlist;
mod utils;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Tweet Radio" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#000000" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
