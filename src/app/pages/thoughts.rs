use dioxus::prelude::*;

use crate::app::components::{PageHeading, ThemeImage, Tile, TransitionLink};
use crate::domain::models::{Thought, THOUGHTS, THOUGHT_VISUAL};
use crate::shared::hooks::use_page_tokens;

#[component]
pub fn Thoughts() -> Element {
    let tokens = use_page_tokens();

    rsx! {
        div { class: "c-thoughts",
            PageHeading { title: "Thoughts" }

            div { class: "c-grid c-grid--thoughts",
                for (index, thought) in THOUGHTS.iter().enumerate() {
                    Tile {
                        key: "{thought.id}",
                        size_class: thought.size.class().to_string(),
                        visual: thought.visual_only,
                        style: tokens.enter(index + 1),
                        ThoughtTileBody { thought: thought.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ThoughtTileBody(thought: Thought) -> Element {
    if thought.visual_only {
        return rsx! {
            ThemeImage {
                src: THOUGHT_VISUAL.to_string(),
                alt: "{thought.title}",
                class: "c-tile__image",
            }
        };
    }

    rsx! {
        TransitionLink { to: thought.detail_path(), class: "c-tile__link",
            time { class: "c-tile__meta", "{thought.display_date()}" }
            h2 { class: "c-tile__title", "{thought.title}" }
            p { class: "c-tile__text", "{thought.summary}" }
            ul { class: "c-tags",
                for tag in thought.tags.iter() {
                    li { key: "{tag}", class: "c-tags__item", "{tag}" }
                }
            }
        }
    }
}
