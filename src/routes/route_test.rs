use super::*;

#[test]
fn parses_public_routes() {
    assert_eq!(AppRoute::parse("/"), AppRoute::Home);
    assert_eq!(AppRoute::parse(""), AppRoute::Home);
    assert_eq!(AppRoute::parse("/post/post_1a2b"), AppRoute::Post { id: "post_1a2b".into() });
    assert_eq!(AppRoute::parse("/login?from=%2Fadmin"), AppRoute::Login);
    assert_eq!(AppRoute::parse("/register"), AppRoute::Register);
    assert_eq!(AppRoute::parse("/tag/web%20dev"), AppRoute::Tag { tag: "web dev".into() });
}

#[test]
fn parses_search_query() {
    assert_eq!(AppRoute::parse("/search?q=async+rust"), AppRoute::Search { query: "async rust".into() });
    assert_eq!(AppRoute::parse("/search"), AppRoute::Search { query: String::new() });
}

#[test]
fn parses_admin_routes() {
    assert_eq!(AppRoute::parse("/admin"), AppRoute::Admin);
    assert_eq!(AppRoute::parse("/admin/"), AppRoute::Admin);
    assert_eq!(AppRoute::parse("/admin/create"), AppRoute::AdminCreate);
    assert_eq!(AppRoute::parse("/admin/edit/p1"), AppRoute::AdminEdit { id: "p1".into() });
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(AppRoute::parse("/admin/edit"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/post/"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/post/a/b"), AppRoute::NotFound);
}

#[test]
fn paths_encode_segments() {
    assert_eq!(AppRoute::Tag { tag: "c++ & co".into() }.path(), "/tag/c++%20&%20co");
    assert_eq!(AppRoute::Search { query: "a&b".into() }.path(), "/search?q=a%26b");
    assert_eq!(AppRoute::AdminEdit { id: "p1".into() }.to_string(), "/admin/edit/p1");
}

#[test]
fn path_then_parse_is_stable_for_awkward_tags() {
    let route = AppRoute::Tag { tag: "rust/wasm?".into() };
    assert_eq!(AppRoute::parse(&route.path()), route);
}

#[test]
fn only_admin_routes_are_protected() {
    assert_eq!(AppRoute::Admin.access(), Some(Access::Admin));
    assert_eq!(AppRoute::AdminEdit { id: "x".into() }.access(), Some(Access::Admin));
    assert_eq!(AppRoute::Home.access(), None);
    assert_eq!(AppRoute::Post { id: "x".into() }.access(), None);
}

#[test]
fn auth_pages_bounce_signed_in_visitors() {
    assert!(AppRoute::Login.redirects_when_signed_in());
    assert!(AppRoute::Register.redirects_when_signed_in());
    assert!(!AppRoute::Admin.redirects_when_signed_in());
}
