use super::*;
use crate::testing::{FakeContent, post};

fn table() -> AdminPosts {
    AdminPosts { posts: vec![post("p1", "One", true), post("p2", "Two", false), post("p3", "Three", true)] }
}

#[test]
fn stats_split_published_and_drafts() {
    assert_eq!(table().stats(), PostStats { total: 3, published: 2, drafts: 1 });
    assert_eq!(AdminPosts::default().stats(), PostStats::default());
}

#[test]
fn local_patch_and_remove() {
    let mut t = table();
    assert!(t.set_published("p2", true));
    assert_eq!(t.stats().drafts, 0);
    assert!(!t.set_published("nope", true));
    assert!(t.remove("p1"));
    assert!(!t.remove("p1"));
    assert_eq!(t.stats().total, 2);
}

#[tokio::test]
async fn load_includes_drafts() {
    let api = FakeContent::with_posts(table().posts);
    let loaded = load(&api).await.unwrap();
    assert_eq!(loaded.stats().drafts, 1);
    assert_eq!(api.queries(), vec![PostQuery::with_drafts(ADMIN_LIMIT)]);
}

#[tokio::test]
async fn toggle_flips_remote_and_local() {
    let api = FakeContent::with_posts(table().posts);
    let mut t = table();

    assert!(!toggle_published(&api, &mut t, "p1").await.unwrap());
    assert!(!t.get("p1").unwrap().published);
    assert!(!api.posts.lock().unwrap()[0].published);
    assert_eq!(publish_message(false), "Post unpublished");
}

#[tokio::test]
async fn failed_toggle_leaves_row_alone() {
    let api = FakeContent::with_posts(table().posts);
    *api.fail_with.lock().unwrap() = Some(ApiError::Status { status: 500 });
    let mut t = table();

    assert!(toggle_published(&api, &mut t, "p2").await.is_err());
    assert!(!t.get("p2").unwrap().published);
}

#[tokio::test]
async fn toggle_unknown_post_is_invalid() {
    let api = FakeContent::with_posts(Vec::new());
    let mut t = AdminPosts::default();
    assert!(matches!(toggle_published(&api, &mut t, "ghost").await, Err(ApiError::Invalid(_))));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn delete_removes_row() {
    let api = FakeContent::with_posts(table().posts);
    let mut t = table();
    delete(&api, &mut t, "p3").await.unwrap();
    assert!(t.get("p3").is_none());
    assert_eq!(api.posts.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn overlapping_delete_and_toggle_both_land_on_live_table() {
    let api = FakeContent::with_posts(table().posts);
    let mut live = table();

    let (deleted, toggled) = tokio::join!(send_delete(&api, "p1"), send_published(&api, "p2", true));
    deleted.unwrap();
    toggled.unwrap();
    live.remove("p1");
    live.set_published("p2", true);

    assert!(live.get("p1").is_none());
    assert!(live.get("p2").unwrap().published);
    assert_eq!(live.stats(), PostStats { total: 2, published: 2, drafts: 0 });
}

#[tokio::test]
async fn send_helpers_do_not_need_a_table() {
    let api = FakeContent::with_posts(table().posts);
    send_published(&api, "p3", false).await.unwrap();
    assert!(!api.posts.lock().unwrap()[2].published);
    assert!(table().published_flag("p3").unwrap());
    assert!(matches!(table().published_flag("ghost"), Err(ApiError::Invalid(_))));
}
