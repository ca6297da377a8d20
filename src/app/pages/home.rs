use dioxus::prelude::*;

use crate::app::components::{ThemeImage, TransitionLink};
use crate::config::site_config;
use crate::domain::models::{HOME_VISUAL, SOCIAL_LINKS};
use crate::shared::hooks::use_page_tokens;

#[component]
pub fn Home() -> Element {
    let tokens = use_page_tokens();
    let title = &site_config().site_title;

    rsx! {
        div { class: "c-home",
            section { class: "c-home__intro", style: "{tokens.enter(0)}",
                h1 { class: "{tokens.heading_h1}", "{title}" }
                p { class: "c-home__bio",
                    "Tech-focused Business graduate based in Copenhagen, building full-stack "
                    "applications and exploring the intersection of AI, data, and user experience."
                }
                TransitionLink { to: "/projects", class: "c-home__cta", "See what I build →" }
            }

            section { class: "c-home__visual {tokens.gradient_soft}", style: "{tokens.enter(1)}",
                ThemeImage {
                    src: HOME_VISUAL.to_string(),
                    alt: "Abstract visual",
                    class: "c-home__image",
                }
            }

            footer { class: "c-home__socials", style: "{tokens.enter(2)}",
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.label}",
                        class: "c-home__social",
                        href: link.url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: link.label,
                        "{link.label}"
                    }
                }
            }
        }
    }
}
