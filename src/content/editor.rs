//! Create/edit post form state.
//!
//! DESIGN
//! ======
//! The editor is plain data plus small mutators so the Leptos pages can keep
//! it in one `RwSignal` and the CLI can fill it from flags. `validate`
//! produces the wire body; create sends it as a `PostDraft`, edit converts it
//! into a full `PostPatch`.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::error::ApiError;
use crate::net::api::ContentApi;
use crate::net::types::{Post, PostDraft, PostPatch};

pub const REQUIRED_FIELDS: &str = "Title and content are required";
pub const CREATE_FAILED: &str = "Failed to create post";
pub const UPDATE_FAILED: &str = "Failed to update post";

/// Keys that commit the pending tag input.
#[must_use]
pub fn is_tag_commit_key(key: &str) -> bool {
    key == "Enter" || key == ","
}

/// Trimmed and lower-cased; `None` when nothing is left.
#[must_use]
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().trim_matches(',').trim().to_lowercase();
    (!tag.is_empty()).then_some(tag)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostEditor {
    pub title: String,
    pub content: String,
    pub preview: String,
    pub tags: Vec<String>,
    pub tag_input: String,
    pub published: bool,
}

impl Default for PostEditor {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            preview: String::new(),
            tags: Vec::new(),
            tag_input: String::new(),
            published: true,
        }
    }
}

impl PostEditor {
    /// Prefill from an existing post for editing.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            preview: post.preview.clone(),
            tags: post.tags.clone(),
            tag_input: String::new(),
            published: post.published,
        }
    }

    /// Handle a key press in the tag input. Returns `true` when the key was
    /// consumed (the caller should suppress its default action).
    pub fn on_tag_key(&mut self, key: &str) -> bool {
        if !is_tag_commit_key(key) {
            return false;
        }
        self.commit_tag();
        true
    }

    /// Move the pending input into the tag list. Duplicates are dropped; the
    /// input is cleared either way.
    pub fn commit_tag(&mut self) {
        let pending = std::mem::take(&mut self.tag_input);
        self.add_tag(&pending);
    }

    pub fn add_tag(&mut self, raw: &str) -> bool {
        match normalize_tag(raw) {
            Some(tag) if !self.tags.contains(&tag) => {
                self.tags.push(tag);
                true
            }
            _ => false,
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// # Errors
    ///
    /// `ApiError::Invalid` when title or content is blank.
    pub fn validate(&self) -> Result<PostDraft, ApiError> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ApiError::Invalid(REQUIRED_FIELDS.to_owned()));
        }
        let preview = self.preview.trim();
        Ok(PostDraft {
            title: title.to_owned(),
            content: content.to_owned(),
            preview: (!preview.is_empty()).then(|| preview.to_owned()),
            tags: self.tags.clone(),
            published: self.published,
        })
    }

    /// # Errors
    ///
    /// Same as `validate`.
    pub fn to_patch(&self) -> Result<PostPatch, ApiError> {
        self.validate().map(PostPatch::from)
    }
}

/// Validate and `POST /posts`.
///
/// # Errors
///
/// Validation or backend error.
pub async fn create<C: ContentApi>(editor: &PostEditor, api: &C) -> Result<Post, ApiError> {
    let draft = editor.validate()?;
    let post = api.create_post(&draft).await?;
    tracing::info!(post_id = %post.post_id, published = post.published, "post created");
    Ok(post)
}

/// Validate and `PUT /posts/:id`.
///
/// # Errors
///
/// Validation or backend error.
pub async fn update<C: ContentApi>(editor: &PostEditor, post_id: &str, api: &C) -> Result<Post, ApiError> {
    let patch = editor.to_patch()?;
    let post = api.update_post(post_id, &patch).await?;
    tracing::info!(%post_id, "post updated");
    Ok(post)
}
