use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = render_preview("# Hello\n\nSome *thoughts*.");
    assert!(html.contains("<h1>Hello</h1>"));
    assert!(html.contains("<em>thoughts</em>"));
}

#[test]
fn renders_tables() {
    let html = render_preview("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(html.contains("<table>"));
}

#[test]
fn drops_raw_html() {
    let html = render_preview("hi <script>alert(1)</script>\n\n<div onclick=\"x\">block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onclick"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_preview(""), "");
}
