//! `thoughts`: terminal client for the Express/Thoughts blog API.
//!
//! Drives the same session, OAuth, guard and content code the browser client
//! uses, against a live backend. Data goes to stdout as JSON; logs go to
//! stderr through `tracing` (`RUST_LOG=thoughts=debug` for request traces).


use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use thoughts::ApiError;
use thoughts::auth::credentials::{self, LoginForm, RegisterForm};
use thoughts::auth::oauth::{Navigator, OAuthCallback, OAuthOutcome};
use thoughts::auth::AuthBootstrap;
use thoughts::config::{
    ClientConfig, DEFAULT_BACKEND_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, Timeouts,
};
use thoughts::content::comments::{self, CommentForm};
use thoughts::content::editor::{self, PostEditor};
use thoughts::content::{admin, feed};
use thoughts::net::api::ContentApi;
use thoughts::net::http::HttpBackend;
use thoughts::routes::guard::{self, GuardDecision};
use thoughts::routes::AppRoute;
use thoughts::state::SessionStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not signed in; run `thoughts login` or set THOUGHTS_SESSION_TOKEN")]
    NotSignedIn,
    #[error("post {0} not found")]
    PostNotFound(String),
}

#[derive(Parser, Debug)]
#[command(name = "thoughts", about = "Express/Thoughts blog client")]
struct Cli {
    #[arg(long, env = "THOUGHTS_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    #[arg(long, env = "THOUGHTS_SESSION_TOKEN")]
    session_token: Option<String>,

    #[arg(long, env = "THOUGHTS_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout: u64,

    #[arg(long, env = "THOUGHTS_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the startup identity check and print the session.
    Whoami,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Location to return to after login.
        #[arg(long)]
        from: Option<String>,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Posts(PostsCommand),
    Comments(CommentsCommand),
    /// List tags with post counts.
    Tags,
    /// Exchange an OAuth redirect (`https://host/#session_id=...`).
    Callback { url: String },
    /// Show what the route guard decides for a location.
    Route { location: String },
}

#[derive(Args, Debug)]
struct PostsCommand {
    #[command(subcommand)]
    command: PostsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PostsSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, conflicts_with = "search")]
        tag: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        post_id: String,
    },
    Create(PostFields),
    Edit {
        post_id: String,
        #[command(flatten)]
        fields: PostEdits,
    },
    /// Flip a post between published and draft.
    Toggle {
        post_id: String,
    },
    Delete {
        post_id: String,
    },
    /// Dashboard stats, drafts included.
    Stats,
}

#[derive(Args, Debug)]
struct PostFields {
    #[arg(long)]
    title: String,
    #[arg(long)]
    content: String,
    #[arg(long)]
    preview: Option<String>,
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long, default_value_t = false)]
    draft: bool,
}

#[derive(Args, Debug)]
struct PostEdits {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    preview: Option<String>,
    #[arg(long = "tag")]
    add_tags: Vec<String>,
    #[arg(long = "untag")]
    remove_tags: Vec<String>,
}

#[derive(Args, Debug)]
struct CommentsCommand {
    #[command(subcommand)]
    command: CommentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum CommentsSubcommand {
    Add {
        post_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        content: String,
    },
    Delete {
        post_id: String,
        comment_id: String,
    },
}

struct CliContext {
    api: HttpBackend,
    session: SessionStore,
    bootstrap: AuthBootstrap,
}

impl CliContext {
    /// Identity check once per invocation; commands that need a user call this.
    async fn signed_in(&self) -> Result<(), CliError> {
        self.bootstrap.run(&self.session, &self.api).await;
        if self.session.session().user.is_none() {
            return Err(CliError::NotSignedIn);
        }
        Ok(())
    }
}

/// Prints navigations instead of performing them.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate_full(&self, path: &str) {
        tracing::info!(%path, "navigate");
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::new(&cli.backend_url);
    config.timeouts = Timeouts { request_secs: cli.request_timeout, connect_secs: cli.connect_timeout };
    tracing::debug!(api_base = %config.api_base(), "backend configured");

    let ctx = CliContext {
        api: HttpBackend::new(config)?.with_token(cli.session_token),
        session: SessionStore::new(),
        bootstrap: AuthBootstrap::new(),
    };

    match cli.command {
        Command::Whoami => run_whoami(&ctx).await,
        Command::Login { email, password, from } => run_login(&ctx, email, password, from).await,
        Command::Register { name, email, password } => run_register(&ctx, name, email, password).await,
        Command::Logout => {
            ctx.session.clear_session(&ctx.api).await;
            print_json(&ctx.session.session().user)
        }
        Command::Posts(posts) => run_posts(&ctx, posts).await,
        Command::Comments(comments) => run_comments(&ctx, comments).await,
        Command::Tags => print_json(&ctx.api.list_tags().await?),
        Command::Callback { url } => run_callback(&ctx, &url).await,
        Command::Route { location } => run_route(&ctx, &location).await,
    }
}

async fn run_whoami(ctx: &CliContext) -> Result<(), CliError> {
    ctx.bootstrap.run(&ctx.session, &ctx.api).await;
    print_json(&ctx.session.session().user)
}

#[derive(Serialize)]
struct SignedIn<'a> {
    user: &'a thoughts::net::types::UserSummary,
    token: Option<String>,
    next: String,
}

async fn run_login(ctx: &CliContext, email: String, password: String, from: Option<String>) -> Result<(), CliError> {
    let form = LoginForm { email, password };
    let user = credentials::login(&form, &ctx.api, &ctx.session).await?;
    let next = guard::post_login_destination(&user, from.as_deref());
    print_json(&SignedIn { user: &user, token: ctx.api.token(), next })
}

async fn run_register(ctx: &CliContext, name: String, email: String, password: String) -> Result<(), CliError> {
    let form = RegisterForm { name, email, password };
    let user = credentials::register(&form, &ctx.api, &ctx.session).await?;
    let next = guard::post_login_destination(&user, None);
    print_json(&SignedIn { user: &user, token: ctx.api.token(), next })
}

async fn run_posts(ctx: &CliContext, posts: PostsCommand) -> Result<(), CliError> {
    match posts.command {
        PostsSubcommand::List { page, tag, search } => {
            let listed = match (tag, search) {
                (Some(tag), _) => feed::load_tagged(&ctx.api, &tag).await?,
                (None, Some(term)) => feed::search(&ctx.api, &term).await?,
                (None, None) => {
                    let (posts, pager) = feed::load_home(&ctx.api, page).await?;
                    if pager.is_visible() {
                        tracing::info!(label = %pager.label(), "page");
                    }
                    posts
                }
            };
            print_json(&listed)
        }
        PostsSubcommand::Show { post_id } => match comments::load_post(&ctx.api, &post_id).await {
            Ok((post, thread)) => print_json(&serde_json::json!({ "post": post, "comments": thread.comments })),
            Err(e) if e.is_not_found() => Err(CliError::PostNotFound(post_id)),
            Err(e) => Err(e.into()),
        },
        PostsSubcommand::Create(fields) => {
            ctx.signed_in().await?;
            let mut ed = PostEditor {
                title: fields.title,
                content: fields.content,
                preview: fields.preview.unwrap_or_default(),
                published: !fields.draft,
                ..PostEditor::default()
            };
            for tag in &fields.tags {
                ed.add_tag(tag);
            }
            print_json(&editor::create(&ed, &ctx.api).await?)
        }
        PostsSubcommand::Edit { post_id, fields } => {
            ctx.signed_in().await?;
            let existing = ctx.api.get_post(&post_id).await?;
            let ed = apply_edits(PostEditor::from_post(&existing), fields);
            print_json(&editor::update(&ed, &post_id, &ctx.api).await?)
        }
        PostsSubcommand::Toggle { post_id } => {
            ctx.signed_in().await?;
            let mut table = admin::load(&ctx.api).await?;
            let published = admin::toggle_published(&ctx.api, &mut table, &post_id).await?;
            tracing::info!("{}", admin::publish_message(published));
            print_json(&table.get(&post_id))
        }
        PostsSubcommand::Delete { post_id } => {
            ctx.signed_in().await?;
            let mut table = admin::load(&ctx.api).await?;
            admin::delete(&ctx.api, &mut table, &post_id).await?;
            print_json(&table.stats())
        }
        PostsSubcommand::Stats => {
            ctx.signed_in().await?;
            print_json(&admin::load(&ctx.api).await?.stats())
        }
    }
}

fn apply_edits(mut ed: PostEditor, edits: PostEdits) -> PostEditor {
    if let Some(title) = edits.title {
        ed.title = title;
    }
    if let Some(content) = edits.content {
        ed.content = content;
    }
    if let Some(preview) = edits.preview {
        ed.preview = preview;
    }
    for tag in &edits.add_tags {
        ed.add_tag(tag);
    }
    for tag in &edits.remove_tags {
        ed.remove_tag(tag);
    }
    ed
}

async fn run_comments(ctx: &CliContext, comments_cmd: CommentsCommand) -> Result<(), CliError> {
    match comments_cmd.command {
        CommentsSubcommand::Add { post_id, name, content } => {
            let (_, mut thread) = comments::load_post(&ctx.api, &post_id).await?;
            let form = CommentForm { author_name: name, content };
            let created = comments::submit(&ctx.api, &post_id, &form, &mut thread).await?;
            tracing::info!(count = thread.count, "comment added");
            print_json(&created)
        }
        CommentsSubcommand::Delete { post_id, comment_id } => {
            ctx.signed_in().await?;
            let (_, mut thread) = comments::load_post(&ctx.api, &post_id).await?;
            comments::delete(&ctx.api, &post_id, &comment_id, &mut thread).await?;
            print_json(&thread.comments)
        }
    }
}

async fn run_callback(ctx: &CliContext, url: &str) -> Result<(), CliError> {
    let outcome = OAuthCallback::new()
        .handle(fragment_of(url), &ctx.api, &ctx.session, &PrintNavigator)
        .await;
    match outcome {
        OAuthOutcome::SignedIn(user) => print_json(&SignedIn {
            user: &user,
            token: ctx.api.token(),
            next: thoughts::auth::oauth::OAUTH_LANDING_PATH.to_owned(),
        }),
        OAuthOutcome::Failed(e) => Err(e.into()),
        OAuthOutcome::Skipped => Err(ApiError::Invalid("no session_id in URL fragment".to_owned()).into()),
    }
}

async fn run_route(ctx: &CliContext, location: &str) -> Result<(), CliError> {
    ctx.bootstrap.run(&ctx.session, &ctx.api).await;
    let session = ctx.session.session();
    let route = AppRoute::parse(location);
    let decision = match route.access() {
        Some(access) => guard::decide(&session, access, location),
        None => GuardDecision::Render,
    };
    let redirect = match (&session.user, route.redirects_when_signed_in()) {
        (Some(user), true) => {
            let query = location.split_once('?').map_or("", |(_, q)| q);
            let from = guard::return_path_from_query(query);
            Some(guard::post_login_destination(user, from.as_deref()))
        }
        _ => guard::redirect_target(&decision),
    };
    print_json(&serde_json::json!({
        "route": route.path(),
        "decision": describe(&decision),
        "redirect": redirect,
    }))
}

/// Fragment part of a URL (`#...`), or the input when it has none.
fn fragment_of(url: &str) -> &str {
    url.find('#').map_or(url, |at| &url[at..])
}

fn describe(decision: &GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Wait => "wait",
        GuardDecision::Render => "render",
        GuardDecision::RedirectToLogin { .. } => "login",
        GuardDecision::RedirectHome => "home",
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
