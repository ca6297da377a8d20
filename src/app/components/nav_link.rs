use dioxus::prelude::*;

use crate::shared::hooks::use_transition;

/// Absolute in-app path: `/thoughts`, not `//cdn.example.com` or `https://…`.
pub fn is_internal_path(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

/// Sidebar highlight rule. Home only matches itself; other entries also
/// match their detail pages.
pub fn is_nav_active(to: &str, current_path: &str) -> bool {
    if to == "/" {
        current_path == to
    } else {
        current_path.starts_with(to)
    }
}

/// Anchor that routes in-app navigation through the page transition.
///
/// External links and modified clicks (new tab, new window) keep the
/// browser's default behaviour.
#[component]
pub fn TransitionLink(
    to: String,
    #[props(default)] class: String,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    let transition = use_transition();
    let internal = is_internal_path(&to);
    let target = to.clone();

    rsx! {
        a {
            href: "{to}",
            class: "{class}",
            title,
            onclick: move |evt: MouseEvent| {
                let modifiers = evt.modifiers();
                if !internal || modifiers.ctrl() || modifiers.meta() || modifiers.shift() {
                    return;
                }
                evt.prevent_default();
                transition.navigate(&target);
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_paths() {
        assert!(is_internal_path("/"));
        assert!(is_internal_path("/projects/42"));
        assert!(!is_internal_path("//cdn.example.com/x.png"));
        assert!(!is_internal_path("https://github.com/lennardkaye"));
        assert!(!is_internal_path("#"));
        assert!(!is_internal_path("mailto:hi@example.com"));
    }

    #[test]
    fn test_nav_active() {
        assert!(is_nav_active("/", "/"));
        assert!(!is_nav_active("/", "/projects"));
        assert!(is_nav_active("/projects", "/projects"));
        assert!(is_nav_active("/projects", "/projects/42"));
        assert!(!is_nav_active("/thoughts", "/projects"));
    }
}
