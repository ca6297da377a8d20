use pulldown_cmark::{html, Options, Parser};

/// Convert a markdown write-up to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headings_and_lists() {
        let html = render_markdown("## Learnings\n\n- one\n- **two**");
        assert!(html.contains("<h2>Learnings</h2>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<strong>two</strong>"));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(render_markdown(""), "");
    }
}
