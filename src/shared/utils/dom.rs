use crate::domain::models::Theme;

/// Scroll the element with `id` back to the top.
#[cfg(target_arch = "wasm32")]
pub fn reset_scroll_top(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    {
        element.set_scroll_top(0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reset_scroll_top(id: &str) {
    let script = format!(
        "const el = document.getElementById('{}'); if (el) {{ el.scrollTop = 0; }}",
        id
    );
    let _ = dioxus::document::eval(&script);
}

/// Reflect the active skin on the document root element.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_1("theme-scandinavian");
    if let Some(class) = theme.root_class() {
        let _ = classes.add_1(class);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme_class(theme: Theme) {
    let script = match theme.root_class() {
        Some(class) => format!("document.documentElement.classList.add('{}');", class),
        None => "document.documentElement.classList.remove('theme-scandinavian');".to_string(),
    };
    let _ = dioxus::document::eval(&script);
}
