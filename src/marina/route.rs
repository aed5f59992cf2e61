//! # Routes and Query Parameters
//!
//! A [`Route`] is the part of a storefront URL the filter engine cares about:
//! the path and the ordered query parameters. Scheme, host and fragment are
//! dropped.
//!
//! ## Parsing Is Lenient
//!
//! Routes come from pasted links, bookmarks and hand-typed addresses.
//! [`Route::parse`] accepts absolute URLs (`https://host/search?people=4`),
//! absolute paths (`/search/bodrum`) and relative ones (`search?date=…`).
//! Anything that cannot be parsed at all becomes the root route instead of an
//! error; deciding what individual parameters mean is the reconciler's job,
//! and it ignores what it cannot read.
//!
//! ## Canonical Form
//!
//! `Display` renders `path?query` with `application/x-www-form-urlencoded`
//! encoding. Parameter order is preserved, so writing a parameter that is
//! already present updates it in place rather than moving it to the end.
//!
//! ## Search Route and Location Segment
//!
//! The search page lives at a configurable path (default `/search`). A
//! "browse by location" link appends the location name as one more segment,
//! e.g. `/search/Göcek`, which [`Route::location_segment`] decodes.

use percent_encoding::percent_decode_str;
use std::fmt;
use tracing::debug;
use url::{form_urlencoded, Url};

const PARSE_BASE: &str = "http://localhost/";

/// Ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw query string (without the leading `?`).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self {
            pairs: form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` to `value`, keeping its position if already present.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Remove every occurrence of `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    query: QueryParams,
}

impl Default for Route {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        Self {
            path,
            query: QueryParams::new(),
        }
    }

    pub fn set_path(&mut self, path: &str) {
        self.path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Parse a URL or path; never fails.
    pub fn parse(input: &str) -> Self {
        let base = match Url::parse(PARSE_BASE) {
            Ok(base) => base,
            Err(_) => return Self::default(),
        };
        match base.join(input.trim()) {
            Ok(url) => Self {
                path: url.path().to_string(),
                query: QueryParams::parse(url.query().unwrap_or("")),
            },
            Err(e) => {
                debug!(input, error = %e, "unparsable route, using root");
                Self::default()
            }
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }

    /// Whether this route is the search page or one of its location sub-paths.
    pub fn is_search(&self, search_path: &str) -> bool {
        let base = search_path.trim_end_matches('/');
        self.path == base
            || self.path == format!("{}/", base)
            || self.path.starts_with(&format!("{}/", base))
    }

    /// The decoded location name following the search path, if any.
    pub fn location_segment(&self, search_path: &str) -> Option<String> {
        let prefix = format!("{}/", search_path.trim_end_matches('/'));
        let rest = self.path.strip_prefix(&prefix)?;
        let segment = rest.split('/').next().unwrap_or("");
        if segment.is_empty() {
            return None;
        }
        let decoded = percent_decode_str(segment).decode_utf8().ok()?;
        Some(decoded.into_owned())
    }

    /// Resolve against a site URL to get a shareable absolute link.
    pub fn absolute(&self, site_url: &str) -> Option<String> {
        let base = Url::parse(site_url).ok()?;
        base.join(&self.to_string()).ok().map(|u| u.to_string())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query.encode())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_and_query() {
        let route = Route::parse("/search?location=3&date=2025-07-01&people=4");
        assert_eq!(route.path(), "/search");
        assert_eq!(route.query().get("location"), Some("3"));
        assert_eq!(route.query().get("date"), Some("2025-07-01"));
        assert_eq!(route.query().get("people"), Some("4"));
    }

    #[test]
    fn test_parse_absolute_url_drops_origin() {
        let route = Route::parse("https://tekne.example.com/search?people=6#top");
        assert_eq!(route.path(), "/search");
        assert_eq!(route.to_string(), "/search?people=6");
    }

    #[test]
    fn test_parse_relative_path() {
        let route = Route::parse("search?people=2");
        assert_eq!(route.path(), "/search");
    }

    #[test]
    fn test_parse_garbage_falls_back_to_root() {
        let route = Route::parse("http://[::1");
        assert_eq!(route, Route::default());
    }

    #[test]
    fn test_query_preserves_order_and_updates_in_place() {
        let mut query = QueryParams::parse("location=3&people=4");
        query.set("location", "7");
        query.set("date", "2025-07-01");
        assert_eq!(query.encode(), "location=7&people=4&date=2025-07-01");
    }

    #[test]
    fn test_query_set_collapses_duplicates() {
        let mut query = QueryParams::parse("people=2&people=3");
        query.set("people", "5");
        assert_eq!(query.encode(), "people=5");
    }

    #[test]
    fn test_query_remove() {
        let mut query = QueryParams::parse("?location=3&people=4");
        assert!(query.remove("location"));
        assert!(!query.remove("location"));
        assert_eq!(query.encode(), "people=4");
    }

    #[test]
    fn test_display_without_query() {
        assert_eq!(Route::new("search").to_string(), "/search");
    }

    #[test]
    fn test_search_route_detection() {
        assert!(Route::parse("/search").is_search("/search"));
        assert!(Route::parse("/search/").is_search("/search/"));
        assert!(Route::parse("/search/bodrum").is_search("/search"));
        assert!(!Route::parse("/searching").is_search("/search"));
        assert!(!Route::parse("/boats/1").is_search("/search"));
    }

    #[test]
    fn test_location_segment_is_decoded() {
        let route = Route::parse("/search/G%C3%B6cek?people=2");
        assert_eq!(route.location_segment("/search").as_deref(), Some("Göcek"));

        let raw = Route::parse("/search/Göcek");
        assert_eq!(raw.location_segment("/search").as_deref(), Some("Göcek"));

        assert_eq!(Route::parse("/search").location_segment("/search"), None);
        assert_eq!(Route::parse("/search/").location_segment("/search"), None);
    }

    #[test]
    fn test_absolute_link() {
        let route = Route::parse("/search?people=4");
        assert_eq!(
            route.absolute("https://tekne.example.com").as_deref(),
            Some("https://tekne.example.com/search?people=4")
        );
        assert_eq!(route.absolute("not a url"), None);
    }
}
