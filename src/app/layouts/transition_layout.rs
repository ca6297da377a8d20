use dioxus::prelude::*;

use crate::app::layouts::Sidebar;
use crate::app::pages::routes::Route;
use crate::config::site_config;
use crate::domain::services::TransitionPhase;
use crate::shared::hooks::{use_page_tokens_provider, use_transition_provider};
use crate::shared::logging::log_invalid_route;

/// Shell of every page: sidebar, main card and the transition overlay.
#[component]
pub fn TransitionLayout() -> Element {
    let path = use_route::<Route>().to_string();
    let config = site_config();
    let navigator = use_navigator();

    let transition = use_transition_provider(
        path.clone(),
        config.transition,
        &config.main_scroll_container_id,
        move |target: &str| match target.parse::<Route>() {
            Ok(route) => {
                navigator.push(route);
            }
            Err(e) => log_invalid_route(target, &e.to_string()),
        },
    );
    let tokens = use_page_tokens_provider();

    // Back/forward and immediate navigations only show up here.
    let observer = transition.clone();
    use_effect(use_reactive((&path,), move |(path,)| {
        observer.observe_route(&path);
    }));

    let phase = transition.phase();
    let direction = transition.direction();
    let overlay_class = match phase {
        TransitionPhase::Covering | TransitionPhase::Committed => Some(format!(
            "c-transition-overlay c-transition-overlay--enter-from-{}",
            direction.enter_edge()
        )),
        TransitionPhase::Uncovering => Some(format!(
            "c-transition-overlay c-transition-overlay--exit-to-{}",
            direction.exit_edge()
        )),
        TransitionPhase::Idle => None,
    };
    let overlay_color = transition.overlay_color();
    let page_style = if phase == TransitionPhase::Covering {
        tokens.exit()
    } else {
        String::new()
    };
    let on_animation_end = transition.clone();

    rsx! {
        div { class: "c-layout",
            div { class: "c-layout__frame",
                Sidebar {}

                main {
                    class: "c-layout__main",
                    "data-phase": "{phase.as_str()}",
                    "aria-busy": "{transition.is_transitioning()}",
                    if let Some(class) = overlay_class {
                        div {
                            class: "{class}",
                            style: "background-color: {overlay_color};",
                            "aria-hidden": "true",
                            onanimationend: move |_| on_animation_end.on_overlay_animation_end(),
                        }
                    }

                    div {
                        id: "{config.main_scroll_container_id}",
                        class: "c-layout__scroll",
                        div {
                            class: "c-page",
                            style: "{page_style}",
                            Outlet::<Route> {}
                        }
                    }
                }
            }
        }
    }
}
