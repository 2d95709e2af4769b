//! Locale handling for the public campaign site.
//!
//! Every public URL carries a locale prefix. GET requests without one are
//! redirected to the same path under the negotiated locale.

use axum::{
    extract::Request,
    http::{header, Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::AppError;

/// Locales the site is published in.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    De,
    Fr,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::Fr => "fr",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "de" => Some(Locale::De),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the supported locale with the highest quality from an
/// `Accept-Language` header, or `default` when none matches.
pub fn negotiate(accept_language: Option<&str>, default: Locale) -> Locale {
    let Some(header) = accept_language else {
        return default;
    };

    let mut best: Option<(Locale, f32)> = None;
    for item in header.split(',') {
        let mut parts = item.trim().split(';');
        let tag = parts.next().unwrap_or("").trim();
        let quality = parts
            .find_map(|p| p.trim().strip_prefix("q="))
            .and_then(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        if quality <= 0.0 {
            continue;
        }

        let primary = tag.split('-').next().unwrap_or("").to_ascii_lowercase();
        if let Some(locale) = Locale::from_str(&primary) {
            if best.map_or(true, |(_, q)| quality > q) {
                best = Some((locale, quality));
            }
        }
    }

    best.map(|(locale, _)| locale).unwrap_or(default)
}

/// The locale named by the first path segment, if any.
pub fn path_locale(path: &str) -> Option<Locale> {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
    Locale::from_str(first)
}

/// Prefix `uri`'s path with `locale`, keeping the query string. An
/// unsupported locale segment in front is replaced rather than kept.
pub fn localized_location(locale: Locale, uri: &Uri) -> String {
    let path = without_foreign_locale(uri.path());
    let path = if path.is_empty() { "/" } else { path };
    match uri.query() {
        Some(query) => format!("/{}{}?{}", locale, path, query),
        None => format!("/{}{}", locale, path),
    }
}

/// Drop a leading two-letter segment followed by more path, e.g. `/en/lobby/x`
/// becomes `/lobby/x`. A lone `/{xx}` is a region and stays.
fn without_foreign_locale(path: &str) -> &str {
    let Some(rest) = path.strip_prefix('/') else {
        return path;
    };
    match rest.split_once('/') {
        Some((segment, _))
            if segment.len() == 2 && segment.bytes().all(|b| b.is_ascii_lowercase()) =>
        {
            &path[3..]
        }
        _ => path,
    }
}

/// `302 Found` to `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Middleware redirecting unprefixed GET requests to their localized URL.
/// Other methods without a supported locale prefix do not exist.
pub async fn locale_redirect_layer(default: Locale, request: Request, next: Next) -> Response {
    if path_locale(request.uri().path()).is_some() {
        return next.run(request).await;
    }
    if request.method() != Method::GET {
        return AppError::NotFound("Page not found".to_string()).into_response();
    }

    let accept = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = negotiate(accept, default);
    let location = localized_location(locale, request.uri());

    tracing::debug!(from = %request.uri(), to = %location, "Locale redirect");
    found(&location)
}
