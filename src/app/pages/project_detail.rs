use dioxus::prelude::*;

use crate::app::components::{NotFoundMessage, PageHeading, Prose, TechTags, TransitionLink};
use crate::domain::models::{find_other_project, find_project};

/// Write-up for one project; ids cover both the main grid and "other projects".
#[component]
pub fn ProjectDetail(project_id: String) -> Element {
    let entry = find_project(&project_id)
        .map(|p| (p.title, p.description, p.tech, p.body))
        .or_else(|| {
            find_other_project(&project_id).map(|p| (p.title, p.description, p.tech, p.body))
        });

    let Some((title, description, tech, body)) = entry else {
        return rsx! {
            NotFoundMessage { message: "Project not found" }
            TransitionLink { to: "/projects", class: "c-link c-link--back", "← All projects" }
        };
    };

    rsx! {
        article { class: "c-detail",
            PageHeading { title: title.to_string(), subtitle: description.to_string() }
            TechTags { tech }
            Prose { markdown: body.to_string() }
            TransitionLink { to: "/projects", class: "c-link c-link--back", "← All projects" }
        }
    }
}
