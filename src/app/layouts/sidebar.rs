use crate::app::components::{is_nav_active, AtmosphereControl, TransitionLink};
use crate::app::pages::routes::Route;
use crate::domain::models::NAV_ORDER;
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        nav { class: "c-sidebar",
            div { class: "c-sidebar__links",
                for item in NAV_ORDER.iter() {
                    SidebarLink {
                        key: "{item.path}",
                        to: item.path,
                        label: item.display_name,
                        active: is_nav_active(item.path, &path),
                    }
                }
            }
            div { class: "c-sidebar__footer",
                AtmosphereControl {}
            }
        }
    }
}

#[component]
fn SidebarLink(to: &'static str, label: &'static str, active: bool) -> Element {
    let link_class = if active {
        "c-sidebar__link is-active"
    } else {
        "c-sidebar__link"
    };

    rsx! {
        TransitionLink { to: to.to_string(), class: link_class.to_string(),
            span { class: "c-sidebar__label", "{label}" }
            span { class: "c-sidebar__marker",
                span { class: "c-sidebar__dot" }
            }
        }
    }
}
