//! View resolution from URL parts.
//!
//! Views travel through the URL as one percent-encoded segment. The
//! resolvers decode, [`encode_view`] is their inverse.

use std::borrow::Cow;

/// Extract the view from a raw `location.hash`.
///
/// Returns an empty string for an empty or bare `#` hash; the caller
/// substitutes the default view. `#/view` is accepted as well as `#view`,
/// and only the first segment names the view.
pub fn view_from_hash(hash: &str) -> String {
    let raw = hash.trim();
    if raw.is_empty() || raw == "#" {
        return String::new();
    }
    let segment = raw
        .strip_prefix('#')
        .unwrap_or(raw)
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    decode(segment).into_owned()
}

/// Extract the view from a pathname mounted under `base_url`.
///
/// The base prefix is only stripped on a segment boundary, so base `/admin/`
/// does not eat into `/administration`. A document name such as `index.html`
/// is not a view.
pub fn view_from_path(pathname: &str, base_url: &str, default_view: &str) -> String {
    let prefix = base_url.trim_end_matches('/');
    let mut relative = pathname.trim();
    if relative.is_empty() {
        relative = "/";
    }
    if !prefix.is_empty()
        && let Some(rest) = relative.strip_prefix(prefix)
        && (rest.is_empty() || rest.starts_with('/'))
    {
        relative = rest;
    }

    relative
        .split('/')
        .find(|segment| !segment.is_empty())
        .map(|segment| decode(segment).into_owned())
        .filter(|segment| !is_document(segment))
        .unwrap_or_else(|| default_view.to_string())
}

/// Percent-decode a URL part. Sequences that do not decode to UTF-8 are
/// kept as they are.
pub fn decode(part: &str) -> Cow<'_, str> {
    urlencoding::decode(part).unwrap_or(Cow::Borrowed(part))
}

/// Encode `view` as a single URL segment.
pub fn encode_view(view: &str) -> Cow<'_, str> {
    urlencoding::encode(view)
}

/// Whether a path segment names an HTML document rather than a view.
pub fn is_document(segment: &str) -> bool {
    let lower = segment.to_ascii_lowercase();
    lower.ends_with(".html") || lower.ends_with(".htm")
}

/// A view identifier is a single non-empty path segment that does not name
/// an HTML document.
///
/// `report.html` is excluded because in History mode the last segment of
/// `/app/report.html` is indistinguishable from the shell document.
pub fn is_view_name(view: &str) -> bool {
    !view.is_empty() && !view.contains('/') && !is_document(view)
}
