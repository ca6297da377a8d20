use dioxus::prelude::*;

use crate::app::layouts::TransitionLayout;
use crate::app::pages::{
    Home, NotFound, OtherProjects, ProjectDetail, Projects, Recommendations, ThoughtDetail,
    Thoughts,
};
use crate::shared::hooks::use_theme_provider;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(TransitionLayout)]
        #[route("/")]
        Home {},
        #[route("/projects")]
        Projects {},
        // Before the id route so "other" is never read as a project id
        #[route("/projects/other")]
        OtherProjects {},
        #[route("/projects/:project_id")]
        ProjectDetail { project_id: String },
        #[route("/thoughts")]
        Thoughts {},
        #[route("/thoughts/:thought_id")]
        ThoughtDetail { thought_id: String },
        #[route("/recommendations")]
        Recommendations {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_theme_provider();

    use_effect(|| {
        tracing::info!("Portfolio app initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Router::<Route> {}
    }
}
