//! Routes. The page is a single station whose `v` query parameter names the
//! item on air, which makes the address bar the shareable location.

use dioxus::prelude::*;

use crate::components::Station;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[route("/?:v")]
    Station { v: String },
}
