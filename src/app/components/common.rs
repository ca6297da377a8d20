use dioxus::prelude::*;

use crate::shared::hooks::use_page_tokens;
use crate::shared::utils::render_markdown;

// Page title block, first in the stagger order
#[component]
pub fn PageHeading(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    let tokens = use_page_tokens();

    rsx! {
        header { class: "c-page__header", style: "{tokens.enter(0)}",
            h1 { class: "{tokens.heading_h1}", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "{tokens.subtitle}", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn TechTags(tech: &'static [&'static str]) -> Element {
    rsx! {
        ul { class: "c-tags",
            for name in tech.iter() {
                li { key: "{name}", class: "c-tags__item", "{name}" }
            }
        }
    }
}

// Markdown body (BEM: c-prose)
#[component]
pub fn Prose(markdown: String) -> Element {
    let html = render_markdown(&markdown);

    rsx! {
        div { class: "c-prose", dangerous_inner_html: "{html}" }
    }
}

#[component]
pub fn NotFoundMessage(message: String) -> Element {
    rsx! {
        div { class: "c-not-found",
            p { class: "c-not-found__text", "{message}" }
        }
    }
}
