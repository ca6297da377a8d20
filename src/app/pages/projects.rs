use dioxus::prelude::*;

use crate::app::components::{PageHeading, TechTags, ThemeImage, Tile, TransitionLink};
use crate::domain::models::{Project, PROJECTS};
use crate::shared::hooks::use_page_tokens;

#[component]
pub fn Projects() -> Element {
    let tokens = use_page_tokens();

    rsx! {
        div { class: "c-projects",
            PageHeading { title: "Projects" }

            div { class: "c-grid c-grid--projects",
                for (index, project) in PROJECTS.iter().enumerate() {
                    Tile {
                        key: "{project.id}",
                        size_class: project.size.class().to_string(),
                        visual: project.image_only,
                        style: tokens.enter(index + 1),
                        ProjectTileBody { project: project.clone() }
                    }
                }
            }

            div { class: "c-projects__more", style: "{tokens.enter(PROJECTS.len() + 1)}",
                TransitionLink { to: "/projects/other", class: "c-link", "Other projects →" }
            }
        }
    }
}

#[component]
fn ProjectTileBody(project: Project) -> Element {
    let image = project.image();

    if project.image_only {
        return rsx! {
            ThemeImage { src: image.clone(), alt: "{project.title}", class: "c-tile__image" }
        };
    }

    rsx! {
        TransitionLink { to: project.detail_path(), class: "c-tile__link",
            if project.has_image {
                ThemeImage { src: image.clone(), alt: "{project.title}", class: "c-tile__image" }
            }
            h2 { class: "c-tile__title", "{project.title}" }
            p { class: "c-tile__text", "{project.description}" }
            TechTags { tech: project.tech }
        }
    }
}
