use dioxus::prelude::*;

use crate::shared::hooks::use_theme;

/// Atmosphere control: switches between the terracotta and scandinavian skins.
/// Sun on the left for terracotta, cloud on the right for scandinavian.
#[component]
pub fn AtmosphereControl() -> Element {
    let theme = use_theme();
    let current = theme.theme();
    let target = current.toggled();
    let tooltip = format!("Switch to {}", target.as_str());

    let toggle_class = if current.is_scandinavian() {
        "c-atmosphere c-atmosphere--scandinavian"
    } else {
        "c-atmosphere"
    };

    rsx! {
        div { class: "{toggle_class}",
            span { class: "c-atmosphere__caption", "atmosphere" }
            button {
                class: "c-atmosphere__button",
                title: "{tooltip}",
                aria_label: "Toggle atmosphere",
                onclick: move |_| theme.toggle(),

                // Gradient layers cross-fade between skins
                div { class: "c-atmosphere__layer c-atmosphere__layer--terracotta" }
                div { class: "c-atmosphere__layer c-atmosphere__layer--scandinavian" }

                span { class: "c-atmosphere__icon c-atmosphere__icon--sun", "☀" }
                span { class: "c-atmosphere__icon c-atmosphere__icon--cloud", "☁" }
                span { class: "c-atmosphere__label", "{current.as_str()}" }
            }
        }
    }
}
