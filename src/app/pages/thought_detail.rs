use dioxus::prelude::*;

use crate::app::components::{NotFoundMessage, PageHeading, Prose, TransitionLink};
use crate::domain::models::find_thought;

#[component]
pub fn ThoughtDetail(thought_id: String) -> Element {
    let Some(thought) = find_thought(&thought_id).filter(|t| !t.visual_only) else {
        return rsx! {
            NotFoundMessage { message: "Thought not found" }
            TransitionLink { to: "/thoughts", class: "c-link c-link--back", "← All thoughts" }
        };
    };

    rsx! {
        article { class: "c-detail",
            PageHeading { title: thought.title.to_string(), subtitle: thought.display_date() }
            Prose { markdown: thought.body.to_string() }
            TransitionLink { to: "/thoughts", class: "c-link c-link--back", "← All thoughts" }
        }
    }
}
