use dioxus::prelude::*;

use crate::app::components::{PageHeading, ThemeImage, Tile};
use crate::domain::models::{RECOMMENDATIONS, RECOMMENDATION_VISUAL};
use crate::shared::hooks::use_page_tokens;

#[component]
pub fn Recommendations() -> Element {
    let tokens = use_page_tokens();

    rsx! {
        div { class: "c-recommendations",
            PageHeading {
                title: "Recommendations",
                subtitle: "Things worth your time".to_string(),
            }

            div { class: "c-grid c-grid--recommendations",
                for (index, item) in RECOMMENDATIONS.iter().enumerate() {
                    Tile {
                        key: "{item.id}",
                        size_class: item.size.class().to_string(),
                        visual: item.visual_only,
                        style: tokens.enter(index + 1),
                        if item.visual_only {
                            ThemeImage {
                                src: RECOMMENDATION_VISUAL.to_string(),
                                alt: "{item.title}",
                                class: "c-tile__image",
                            }
                        } else {
                            a {
                                class: "c-tile__link",
                                href: item.link,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                span { class: "c-tile__meta", "{item.kind.label()}" }
                                h2 { class: "c-tile__title", "{item.title}" }
                                p { class: "c-tile__text", "{item.note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
