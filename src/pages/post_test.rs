use super::*;

#[test]
fn render_markdown_produces_paragraphs() {
    let html = render_markdown("Hello *world*.");
    assert!(html.contains("<p>"));
    assert!(html.contains("<em>world</em>"));
}

#[test]
fn render_markdown_handles_headings_and_lists() {
    let html = render_markdown("# Title\n\n- one\n- two\n");
    assert!(html.contains("<h1>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn render_markdown_of_empty_source_is_empty() {
    assert_eq!(render_markdown(""), "");
}
