use dioxus::prelude::*;

use crate::app::components::{PageHeading, TechTags, ThemeImage, TransitionLink};
use crate::domain::models::OTHER_PROJECTS;
use crate::shared::hooks::use_page_tokens;

#[component]
pub fn OtherProjects() -> Element {
    let tokens = use_page_tokens();

    rsx! {
        div { class: "c-other-projects",
            PageHeading {
                title: "Other Projects",
                subtitle: "Smaller builds and coursework".to_string(),
            }

            for (index, project) in OTHER_PROJECTS.iter().enumerate() {
                section {
                    key: "{project.id}",
                    class: if project.university { "c-summary c-summary--university" } else { "c-summary" },
                    style: "{tokens.enter(index + 1)}",
                    if let Some(path) = project.image_path {
                        ThemeImage { src: path.to_string(), alt: "{project.title}", class: "c-summary__image" }
                    }
                    div { class: "c-summary__body",
                        h2 { class: "{tokens.heading_h2}",
                            TransitionLink { to: project.detail_path(), "{project.title}" }
                        }
                        p { class: "c-summary__text", "{project.description}" }
                        TechTags { tech: project.tech }
                    }
                }
            }

            TransitionLink { to: "/projects", class: "c-link c-link--back", "← All projects" }
        }
    }
}
