use dioxus::prelude::*;

use crate::app::components::{NotFoundMessage, TransitionLink};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "c-detail",
            NotFoundMessage { message: format!("Nothing lives at {}", path) }
            TransitionLink { to: "/", class: "c-link c-link--back", "← Home" }
        }
    }
}
