use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::*;
use crate::error::ApiError;
use crate::testing::{FakeAuth, user};

// =============================================================================
// INITIAL STATE
// =============================================================================

#[test]
fn new_store_is_loading_without_user() {
    let store = SessionStore::new();
    let s = store.session();
    assert!(s.loading);
    assert!(s.user.is_none());
}

#[test]
fn clones_share_state() {
    let a = SessionStore::new();
    let b = a.clone();
    a.set_session(user("u1", "Ann", false));
    assert_eq!(b.session().user.map(|u| u.id), Some("u1".to_owned()));
}

// =============================================================================
// REFRESH
// =============================================================================

#[tokio::test]
async fn refresh_success_sets_user_and_clears_loading() {
    let store = SessionStore::new();
    let api = FakeAuth::signed_in(user("u1", "Ann", false));

    let got = store.refresh(&api).await;

    assert_eq!(got.as_ref().map(|u| u.name.as_str()), Some("Ann"));
    let s = store.session();
    assert!(!s.loading);
    assert_eq!(s.user, Some(user("u1", "Ann", false)));
}

#[tokio::test]
async fn refresh_failure_means_no_user() {
    let store = SessionStore::new();
    store.set_session(user("u1", "Ann", false));
    let api = FakeAuth::new();
    *api.me.lock().unwrap() = Err(ApiError::Network("offline".into()));

    assert!(store.refresh(&api).await.is_none());
    let s = store.session();
    assert!(!s.loading);
    assert!(s.user.is_none());
}

#[tokio::test]
async fn refresh_is_repeatable_and_never_sets_loading_again() {
    let store = SessionStore::new();
    let api = FakeAuth::signed_in(user("u1", "Ann", true));
    store.refresh(&api).await;
    store.refresh(&api).await;
    assert_eq!(api.count("me"), 2);
    assert!(!store.session().loading);
    assert!(store.session().is_admin());
}

// =============================================================================
// SET / CLEAR
// =============================================================================

#[test]
fn set_session_replaces_user_without_touching_loading() {
    let store = SessionStore::new();
    store.set_session(user("u1", "Ann", false));
    store.set_session(user("u2", "Bob", true));
    let s = store.session();
    assert!(s.loading);
    assert_eq!(s.user.map(|u| u.id), Some("u2".to_owned()));
}

#[tokio::test]
async fn clear_session_clears_user_on_success() {
    let store = SessionStore::new();
    store.set_session(user("u1", "Ann", false));
    let api = FakeAuth::new();
    store.clear_session(&api).await;
    assert!(store.session().user.is_none());
    assert_eq!(api.calls(), vec!["logout".to_owned()]);
}

#[tokio::test]
async fn clear_session_clears_user_even_when_logout_fails() {
    let store = SessionStore::new();
    store.set_session(user("u1", "Ann", false));
    let api = FakeAuth::new();
    *api.logout.lock().unwrap() = Err(ApiError::Status { status: 500 });

    store.clear_session(&api).await;

    assert!(store.session().user.is_none());
}

// =============================================================================
// SUBSCRIBE
// =============================================================================

#[tokio::test]
async fn listeners_see_every_write() {
    let store = SessionStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |s| sink.lock().unwrap().push((s.loading, s.user.clone().map(|u| u.id))));

    let api = FakeAuth::signed_in(user("u1", "Ann", false));
    store.refresh(&api).await;
    store.clear_session(&api).await;

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(false, Some("u1".to_owned())), (false, None)]
    );
}

#[test]
fn multiple_listeners_all_fire() {
    let store = SessionStore::new();
    let hits = Arc::new(AtomicUsize::new(0));
    for _ in 0..3 {
        let hits = Arc::clone(&hits);
        store.subscribe(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        });
    }
    store.set_session(user("u1", "Ann", false));
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}
