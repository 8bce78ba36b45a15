//! In-memory backend fakes shared by unit tests.

use std::sync::Mutex;

use crate::error::ApiError;
use crate::net::api::{AuthApi, ContentApi, CountQuery, PostQuery};
use crate::net::types::{
    AuthResponse, Comment, LoginRequest, NewComment, Post, PostDraft, PostPatch, RegisterRequest, TagCount,
    UserSummary,
};

pub(crate) fn user(id: &str, name: &str, is_admin: bool) -> UserSummary {
    UserSummary {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        picture: None,
        is_admin,
    }
}

pub(crate) fn unauthorized() -> ApiError {
    ApiError::Unauthorized { status: 401, detail: Some("Not authenticated".to_owned()) }
}

pub(crate) struct FakeAuth {
    pub me: Mutex<Result<UserSummary, ApiError>>,
    pub exchange: Mutex<Result<UserSummary, ApiError>>,
    pub login: Mutex<Result<AuthResponse, ApiError>>,
    pub register: Mutex<Result<AuthResponse, ApiError>>,
    pub logout: Mutex<Result<(), ApiError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeAuth {
    pub(crate) fn new() -> Self {
        Self {
            me: Mutex::new(Err(unauthorized())),
            exchange: Mutex::new(Err(unauthorized())),
            login: Mutex::new(Err(unauthorized())),
            register: Mutex::new(Err(unauthorized())),
            logout: Mutex::new(Ok(())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn signed_in(user: UserSummary) -> Self {
        let fake = Self::new();
        *fake.me.lock().unwrap() = Ok(user);
        fake
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl AuthApi for FakeAuth {
    async fn me(&self) -> Result<UserSummary, ApiError> {
        self.record("me".to_owned());
        tokio::task::yield_now().await;
        self.me.lock().unwrap().clone()
    }

    async fn exchange_session(&self, session_id: &str) -> Result<UserSummary, ApiError> {
        self.record(format!("exchange:{session_id}"));
        tokio::task::yield_now().await;
        self.exchange.lock().unwrap().clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("login:{}", request.email));
        self.login.lock().unwrap().clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.record(format!("register:{}", request.email));
        self.register.lock().unwrap().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout".to_owned());
        self.logout.lock().unwrap().clone()
    }
}

pub(crate) fn post(id: &str, title: &str, published: bool) -> Post {
    Post {
        post_id: id.to_owned(),
        title: title.to_owned(),
        content: format!("# {title}"),
        content_html: format!("<h1>{title}</h1>"),
        preview: title.to_owned(),
        tags: Vec::new(),
        author_id: "u_admin".to_owned(),
        author_name: "Admin".to_owned(),
        published,
        created_at: "2024-05-01T14:30:00+00:00".to_owned(),
        updated_at: "2024-05-01T14:30:00+00:00".to_owned(),
        comment_count: 0,
    }
}

pub(crate) fn comment(id: &str, post_id: &str, author: &str) -> Comment {
    Comment {
        comment_id: id.to_owned(),
        post_id: post_id.to_owned(),
        content: format!("hello from {author}"),
        author_name: author.to_owned(),
        created_at: "2024-05-02T09:05:00+00:00".to_owned(),
    }
}

/// In-memory `ContentApi` over a fixed post list. Newest first.
pub(crate) struct FakeContent {
    pub posts: Mutex<Vec<Post>>,
    pub comments: Mutex<Vec<Comment>>,
    pub fail_with: Mutex<Option<ApiError>>,
    queries: Mutex<Vec<PostQuery>>,
    calls: Mutex<Vec<String>>,
}

impl FakeContent {
    pub(crate) fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            comments: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
            queries: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn queries(&self) -> Vec<PostQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn matching(&self, tag: Option<&String>, search: Option<&String>, drafts: bool) -> Vec<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| drafts || p.published)
            .filter(|p| tag.is_none_or(|t| p.tags.contains(t)))
            .filter(|p| search.is_none_or(|s| p.title.to_lowercase().contains(&s.to_lowercase())))
            .cloned()
            .collect()
    }

    fn not_found() -> ApiError {
        ApiError::Validation { status: 404, detail: "Post not found".to_owned() }
    }
}

impl ContentApi for FakeContent {
    async fn list_posts(&self, query: &PostQuery) -> Result<Vec<Post>, ApiError> {
        self.check("list_posts".to_owned())?;
        self.queries.lock().unwrap().push(query.clone());
        let all = self.matching(query.tag.as_ref(), query.search.as_ref(), query.include_unpublished);
        let limit = query.limit.unwrap_or(10) as usize;
        let skip = (query.page.unwrap_or(1).max(1) as usize - 1) * limit;
        Ok(all.into_iter().skip(skip).take(limit).collect())
    }

    async fn count_posts(&self, query: &CountQuery) -> Result<u64, ApiError> {
        self.check("count_posts".to_owned())?;
        Ok(self.matching(query.tag.as_ref(), query.search.as_ref(), false).len() as u64)
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, ApiError> {
        self.check(format!("get_post:{post_id}"))?;
        self.posts.lock().unwrap().iter().find(|p| p.post_id == post_id).cloned().ok_or_else(Self::not_found)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        self.check("create_post".to_owned())?;
        let mut created = post("post_new", &draft.title, draft.published);
        created.content.clone_from(&draft.content);
        created.tags.clone_from(&draft.tags);
        self.posts.lock().unwrap().insert(0, created.clone());
        Ok(created)
    }

    async fn update_post(&self, post_id: &str, patch: &PostPatch) -> Result<Post, ApiError> {
        self.check(format!("update_post:{post_id}"))?;
        let mut posts = self.posts.lock().unwrap();
        let existing = posts.iter_mut().find(|p| p.post_id == post_id).ok_or_else(Self::not_found)?;
        if let Some(title) = &patch.title {
            existing.title.clone_from(title);
        }
        if let Some(content) = &patch.content {
            existing.content.clone_from(content);
        }
        if let Some(tags) = &patch.tags {
            existing.tags.clone_from(tags);
        }
        if let Some(published) = patch.published {
            existing.published = published;
        }
        Ok(existing.clone())
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), ApiError> {
        self.check(format!("delete_post:{post_id}"))?;
        self.posts.lock().unwrap().retain(|p| p.post_id != post_id);
        Ok(())
    }

    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.check(format!("list_comments:{post_id}"))?;
        Ok(self.comments.lock().unwrap().iter().filter(|c| c.post_id == post_id).cloned().collect())
    }

    async fn create_comment(&self, post_id: &str, new: &NewComment) -> Result<Comment, ApiError> {
        self.check(format!("create_comment:{post_id}"))?;
        let mut created = comment("comment_new", post_id, &new.author_name);
        created.content.clone_from(&new.content);
        Ok(created)
    }

    async fn delete_comment(&self, post_id: &str, comment_id: &str) -> Result<(), ApiError> {
        self.check(format!("delete_comment:{post_id}/{comment_id}"))
    }

    async fn list_tags(&self) -> Result<Vec<TagCount>, ApiError> {
        self.check("list_tags".to_owned())?;
        Ok(Vec::new())
    }
}
