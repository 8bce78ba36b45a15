//! Application routes.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::fmt;

use super::guard::Access;
use crate::net::encode;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    #[default]
    Home,
    Post { id: String },
    Login,
    Register,
    Search { query: String },
    Tag { tag: String },
    Admin,
    AdminCreate,
    AdminEdit { id: String },
    NotFound,
}

impl AppRoute {
    /// Parse a location (`/path?query`, fragment already removed).
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<String> = trimmed
            .split('/')
            .skip(1)
            .map(encode::decode_segment)
            .collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["post", id] if !id.is_empty() => Self::Post { id: (*id).to_owned() },
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["search"] => Self::Search { query: query_param(query, "q").unwrap_or_default() },
            ["tag", tag] if !tag.is_empty() => Self::Tag { tag: (*tag).to_owned() },
            ["admin"] => Self::Admin,
            ["admin", "create"] => Self::AdminCreate,
            ["admin", "edit", id] if !id.is_empty() => Self::AdminEdit { id: (*id).to_owned() },
            _ => Self::NotFound,
        }
    }

    /// URL for this route, with path segments and query percent-encoded.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Post { id } => format!("/post/{}", encode::segment(id)),
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Search { query } if query.is_empty() => "/search".to_owned(),
            Self::Search { query } => format!("/search{}", encode::query_string(&[("q", query.clone())])),
            Self::Tag { tag } => format!("/tag/{}", encode::segment(tag)),
            Self::Admin => "/admin".to_owned(),
            Self::AdminCreate => "/admin/create".to_owned(),
            Self::AdminEdit { id } => format!("/admin/edit/{}", encode::segment(id)),
            Self::NotFound => "/404".to_owned(),
        }
    }

    /// Access policy, or `None` for public routes.
    #[must_use]
    pub fn access(&self) -> Option<Access> {
        match self {
            Self::Admin | Self::AdminCreate | Self::AdminEdit { .. } => Some(Access::Admin),
            _ => None,
        }
    }

    /// Login and register bounce visitors who are already signed in.
    #[must_use]
    pub fn redirects_when_signed_in(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// First value of `key` in a raw query string.
#[must_use]
pub fn query_param(query: &str, key: &str) -> Option<String> {
    encode::parse_pairs(query).into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}
