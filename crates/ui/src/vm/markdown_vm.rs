use std::collections::{HashMap, HashSet};

/// Renders slide text. Output is sanitised, so it is safe for `dangerous_inner_html`.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "h2", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td", "del", "sub",
        "sup",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(HashMap::new())
        .generic_attributes(HashSet::new())
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_lists_and_emphasis() {
        let html = markdown_to_html("### Key Points\n\n- **Amplitude**: height\n- *Frequency*");
        assert!(html.contains("<h3>Key Points</h3>"), "{html}");
        assert!(html.contains("<li><strong>Amplitude</strong>: height</li>"), "{html}");
        assert!(html.contains("<em>Frequency</em>"), "{html}");
    }

    #[test]
    fn strips_scripts_and_links() {
        let html = markdown_to_html("<script>alert(1)</script>[x](http://example.com)");
        assert!(!html.contains("script"), "{html}");
        assert!(!html.contains("href"), "{html}");
        assert!(html.contains('x'));
    }

    #[test]
    fn drops_attributes() {
        let html = sanitize_html(r#"<span class="term" onclick="x()">v = fλ</span>"#);
        assert_eq!(html, "<span>v = fλ</span>");
    }

    #[test]
    fn comparison_signs_stay_text() {
        let html = markdown_to_html("ρ_object < ρ_fluid");
        assert!(html.contains("&lt;"), "{html}");
    }
}
