//! UI for the radio: routing, the station shell, the embedded player and its
//! transport controls.

mod app;
mod app_view;
mod icons;
mod player;
mod radio_controller;
mod toast;
mod tweet_embed;
mod video_player;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use player::*;
pub use radio_controller::*;
pub use toast::*;
pub use tweet_embed::*;
pub use video_player::*;
