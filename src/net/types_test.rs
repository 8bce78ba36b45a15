use super::*;

// =============================================================================
// UserSummary
// =============================================================================

#[test]
fn user_summary_accepts_plain_id() {
    let json = r#"{"id":"u1","name":"Ann","is_admin":false}"#;
    let user: UserSummary = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "");
    assert!(!user.is_admin);
}

#[test]
fn user_summary_accepts_backend_user_id() {
    let json = r#"{"user_id":"user_abc","email":"a@b.c","name":"Ann","picture":null,"is_admin":true}"#;
    let user: UserSummary = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, "user_abc");
    assert_eq!(user.email, "a@b.c");
    assert!(user.picture.is_none());
    assert!(user.is_admin);
}

#[test]
fn user_summary_missing_admin_flag_defaults_false() {
    let json = r#"{"user_id":"u2","name":"Bo"}"#;
    let user: UserSummary = serde_json::from_str(json).unwrap();
    assert!(!user.is_admin);
}

#[test]
fn session_is_admin_requires_user() {
    assert!(!Session::default().is_admin());
    let session = Session {
        user: Some(UserSummary {
            id: "u".into(),
            name: "N".into(),
            email: String::new(),
            picture: None,
            is_admin: true,
        }),
        loading: false,
    };
    assert!(session.is_admin());
}

// =============================================================================
// AuthResponse
// =============================================================================

#[test]
fn auth_response_with_token() {
    let json = r#"{"token":"jwt.abc","user":{"user_id":"u1","email":"a@b.c","name":"Ann","is_admin":true}}"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.token.as_deref(), Some("jwt.abc"));
    assert!(resp.user.is_admin);
}

// =============================================================================
// Post
// =============================================================================

#[test]
fn post_missing_comment_count_is_zero() {
    let json = r#"{"post_id":"post_1","title":"Hello","content":"x","tags":["rust"],"published":true,
        "created_at":"2025-01-05T10:00:00Z","updated_at":"2025-01-05T10:00:00Z"}"#;
    let post: Post = serde_json::from_str(json).unwrap();
    assert_eq!(post.comment_count, 0);
    assert_eq!(post.tags, vec!["rust".to_owned()]);
    assert_eq!(post.content_html, "");
}

#[test]
fn post_minimal_body_uses_defaults() {
    let post: Post = serde_json::from_str(r#"{"post_id":"p","title":"T"}"#).unwrap();
    assert!(post.published);
    assert!(post.tags.is_empty());
}

#[test]
fn draft_omits_empty_preview() {
    let draft = PostDraft {
        title: "T".into(),
        content: "C".into(),
        preview: None,
        tags: vec![],
        published: false,
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert!(value.get("preview").is_none());
    assert_eq!(value["published"], false);
}

#[test]
fn publish_patch_only_sends_flag() {
    let value = serde_json::to_value(PostPatch::published(true)).unwrap();
    assert_eq!(value, serde_json::json!({ "published": true }));
}

#[test]
fn patch_from_draft_sends_every_field() {
    let draft = PostDraft {
        title: "T".into(),
        content: "C".into(),
        preview: Some("P".into()),
        tags: vec!["a".into()],
        published: true,
    };
    let value = serde_json::to_value(PostPatch::from(draft)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "title": "T", "content": "C", "preview": "P", "tags": ["a"], "published": true })
    );
}

// =============================================================================
// Comments & tags
// =============================================================================

#[test]
fn new_comment_omits_missing_email() {
    let c = NewComment { content: "hi".into(), author_name: "Ann".into(), author_email: None };
    let value = serde_json::to_value(&c).unwrap();
    assert_eq!(value, serde_json::json!({ "content": "hi", "author_name": "Ann" }));
}

#[test]
fn tag_count_deserializes() {
    let tags: Vec<TagCount> = serde_json::from_str(r#"[{"name":"rust","count":3}]"#).unwrap();
    assert_eq!(tags, vec![TagCount { name: "rust".into(), count: 3 }]);
}
