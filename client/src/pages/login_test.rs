use super::*;

#[test]
fn google_url_lands_on_admin() {
    assert_eq!(
        google_login_url("https://blog.example"),
        "https://auth.emergentagent.com/?redirect=https%3A%2F%2Fblog.example%2Fadmin"
    );
}

#[test]
fn google_url_ignores_trailing_slash_on_origin() {
    assert_eq!(google_login_url("http://localhost:3000/"), google_login_url("http://localhost:3000"));
}
