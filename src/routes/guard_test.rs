use super::*;
use crate::testing::user;

fn loading() -> Session {
    Session { user: None, loading: true }
}

fn anonymous() -> Session {
    Session { user: None, loading: false }
}

fn signed_in(is_admin: bool) -> Session {
    Session { user: Some(user("u1", "Ann", is_admin)), loading: false }
}

// =============================================================================
// DECISION TABLE
// =============================================================================

#[test]
fn loading_always_waits() {
    for access in [Access::Authenticated, Access::Admin] {
        assert_eq!(decide(&loading(), access, "/admin"), GuardDecision::Wait);
    }
    let still_loading = Session { user: Some(user("u1", "Ann", true)), loading: true };
    assert_eq!(decide(&still_loading, Access::Admin, "/admin"), GuardDecision::Wait);
}

#[test]
fn anonymous_goes_to_login_with_location() {
    assert_eq!(
        decide(&anonymous(), Access::Admin, "/admin/edit/p1"),
        GuardDecision::RedirectToLogin { from: "/admin/edit/p1".into() }
    );
    assert_eq!(
        decide(&anonymous(), Access::Authenticated, "/drafts"),
        GuardDecision::RedirectToLogin { from: "/drafts".into() }
    );
}

#[test]
fn authenticated_policy_renders_for_any_user() {
    assert_eq!(decide(&signed_in(false), Access::Authenticated, "/x"), GuardDecision::Render);
    assert_eq!(decide(&signed_in(true), Access::Authenticated, "/x"), GuardDecision::Render);
}

#[test]
fn admin_policy_sends_non_admin_home() {
    assert_eq!(decide(&signed_in(false), Access::Admin, "/admin"), GuardDecision::RedirectHome);
    assert_eq!(decide(&signed_in(true), Access::Admin, "/admin"), GuardDecision::Render);
}

// =============================================================================
// REDIRECT TARGETS
// =============================================================================

#[test]
fn redirect_targets() {
    assert_eq!(
        redirect_target(&GuardDecision::RedirectToLogin { from: "/admin/create".into() }).as_deref(),
        Some("/login?from=%2Fadmin%2Fcreate")
    );
    assert_eq!(redirect_target(&GuardDecision::RedirectHome).as_deref(), Some("/"));
    assert_eq!(redirect_target(&GuardDecision::Wait), None);
    assert_eq!(redirect_target(&GuardDecision::Render), None);
}

#[test]
fn login_redirect_drops_unsafe_from() {
    assert_eq!(login_redirect_path("https://evil.example"), "/login");
    assert_eq!(login_redirect_path("/"), "/login");
}

#[test]
fn sanitize_accepts_internal_paths_only() {
    assert_eq!(sanitize_return_path("/admin/edit/p1").as_deref(), Some("/admin/edit/p1"));
    assert_eq!(sanitize_return_path("/search?q=rust").as_deref(), Some("/search?q=rust"));
    assert_eq!(sanitize_return_path("//evil.example"), None);
    assert_eq!(sanitize_return_path("https://evil.example/admin"), None);
    assert_eq!(sanitize_return_path("/\\evil.example"), None);
    assert_eq!(sanitize_return_path("admin"), None);
    assert_eq!(sanitize_return_path("/login?from=%2Fadmin"), None);
    assert_eq!(sanitize_return_path(""), None);
}

#[test]
fn return_path_round_trips_through_login_query() {
    let login = login_redirect_path("/admin/edit/p1");
    let query = login.split_once('?').map(|(_, q)| q).unwrap();
    assert_eq!(return_path_from_query(query).as_deref(), Some("/admin/edit/p1"));
    assert_eq!(return_path_from_query("from=https%3A%2F%2Fevil.example"), None);
}

// =============================================================================
// POST-LOGIN DESTINATION
// =============================================================================

#[test]
fn remembered_location_wins() {
    let ann = user("u1", "Ann", false);
    assert_eq!(post_login_destination(&ann, Some("/post/p1")), "/post/p1");
}

#[test]
fn default_destination_depends_on_role() {
    assert_eq!(post_login_destination(&user("u1", "Ann", false), None), "/");
    assert_eq!(post_login_destination(&user("u2", "Root", true), None), "/admin");
    assert_eq!(post_login_destination(&user("u2", "Root", true), Some("//evil")), "/admin");
}
