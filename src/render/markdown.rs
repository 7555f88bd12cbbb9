//! Markdown rendering via pulldown-cmark

use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert markdown source to an HTML string
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Render a markdown string as formatted HTML
#[component]
pub fn Markdown(source: String) -> impl IntoView {
    view! {
        <div class="markdown-content" inner_html=markdown_to_html(&source)></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_emphasis_render() {
        let html = markdown_to_html("# Findings\n\nSome **bold** text");
        assert!(html.contains("<h1>Findings</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn tables_are_enabled() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn plain_text_becomes_a_paragraph() {
        assert_eq!(markdown_to_html("hello"), "<p>hello</p>\n");
    }
}
