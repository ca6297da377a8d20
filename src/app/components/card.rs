use dioxus::prelude::*;

/// Grid tile used by the projects, thoughts and recommendations pages.
#[component]
pub fn Tile(
    size_class: String,
    #[props(default)] visual: bool,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let visual_class = if visual { "c-tile--visual" } else { "" };

    rsx! {
        article {
            class: "c-tile {size_class} {visual_class}",
            style: "{style}",
            {children}
        }
    }
}
