//! Base URL derivation for History mode.
//!
//! The base URL is the path prefix the shell is served under. It always ends
//! with `/`, so `base_url + view` is a valid canonical URL.

use url::Url;

use crate::browser::{BASE_ATTRIBUTE, Browser};
use crate::error::RouteError;

/// Compute the base URL from the optional `data-base` value and the current
/// location.
///
/// An explicit base is resolved against `href`; if that fails the base is
/// inferred from the current path instead. Never fails, worst case `/`.
pub fn compute_base_url(base_attr: Option<&str>, href: &str) -> String {
    if let Some(base) = base_attr.map(str::trim).filter(|b| !b.is_empty()) {
        match resolve_explicit(base, href) {
            Ok(resolved) => return resolved,
            Err(e) => log::warn!("{e}, inferring base from location"),
        }
    }

    match Url::parse(href) {
        Ok(url) => infer_from_path(url.path()),
        Err(_) => {
            log::warn!("{}, using '/'", RouteError::InvalidLocation(href.to_string()));
            "/".to_string()
        }
    }
}

/// [`compute_base_url`] against a [`Browser`].
pub fn base_url_from_browser(browser: &impl Browser) -> String {
    compute_base_url(
        browser.root_attribute(BASE_ATTRIBUTE).as_deref(),
        &browser.href(),
    )
}

fn resolve_explicit(base: &str, href: &str) -> Result<String, RouteError> {
    let invalid = |reason: String| RouteError::InvalidBase {
        base: base.to_string(),
        reason,
    };
    let location = Url::parse(href).map_err(|e| invalid(e.to_string()))?;
    let resolved = location.join(base).map_err(|e| invalid(e.to_string()))?;
    if resolved.cannot_be_a_base() {
        return Err(invalid("not a hierarchical URL".to_string()));
    }
    Ok(with_trailing_slash(resolved.path()))
}

/// Infer the base from a pathname.
///
/// The last segment is either a document (`index.html`) or an already active
/// view name; in both cases the base is the directory holding it.
pub fn infer_from_path(pathname: &str) -> String {
    let trimmed = pathname.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    let (parent, last) = trimmed.rsplit_once('/').unwrap_or(("", trimmed));
    if last.contains('.') {
        log::debug!("base inferred from document '{last}'");
    } else {
        log::debug!("base inferred from active view '{last}'");
    }
    with_trailing_slash(parent)
}

fn with_trailing_slash(path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    if path.ends_with('/') {
        path
    } else {
        format!("{path}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base() {
        assert_eq!(
            compute_base_url(Some("/admin/"), "http://localhost/admin/users"),
            "/admin/"
        );
        assert_eq!(
            compute_base_url(Some("/admin"), "http://localhost/admin/users"),
            "/admin/"
        );
    }

    #[test]
    fn test_explicit_relative_base() {
        assert_eq!(
            compute_base_url(Some("./"), "http://localhost/app/users"),
            "/app/"
        );
        assert_eq!(
            compute_base_url(Some("console"), "http://localhost/app/users"),
            "/app/console/"
        );
    }

    #[test]
    fn test_blank_base_is_ignored() {
        assert_eq!(
            compute_base_url(Some("   "), "http://localhost/app/index.html"),
            "/app/"
        );
    }

    #[test]
    fn test_unresolvable_base_falls_back_to_inference() {
        assert_eq!(
            compute_base_url(Some("http://[::1"), "http://localhost/app/users"),
            "/app/"
        );
        assert_eq!(
            compute_base_url(Some("mailto:ops@example.com"), "http://localhost/app/users"),
            "/app/"
        );
    }

    #[test]
    fn test_infer_from_document() {
        assert_eq!(
            compute_base_url(None, "http://localhost/app/index.html"),
            "/app/"
        );
        assert_eq!(compute_base_url(None, "http://localhost/index.html"), "/");
    }

    #[test]
    fn test_infer_from_view() {
        assert_eq!(compute_base_url(None, "http://localhost/admin/users"), "/admin/");
        assert_eq!(compute_base_url(None, "http://localhost/users"), "/");
        assert_eq!(
            compute_base_url(None, "http://localhost/admin/users///"),
            "/admin/"
        );
    }

    #[test]
    fn test_root() {
        assert_eq!(compute_base_url(None, "http://localhost/"), "/");
        assert_eq!(compute_base_url(None, "http://localhost"), "/");
        assert_eq!(infer_from_path(""), "/");
        assert_eq!(infer_from_path("////"), "/");
    }

    #[test]
    fn test_invalid_location() {
        assert_eq!(compute_base_url(None, "not a url"), "/");
    }

    #[test]
    fn test_always_ends_with_slash() {
        let paths = [
            "/",
            "/a",
            "/a/",
            "/a/b",
            "/a/b.html",
            "/a.b/c",
            "/deep/nested/path/view",
            "//double//slashes//",
            "/x/y/z/index.htm",
        ];
        for path in paths {
            let href = format!("http://localhost{path}");
            let base = compute_base_url(None, &href);
            assert!(base.ends_with('/'), "{path} -> {base}");
            assert!(base.starts_with('/'), "{path} -> {base}");
            let base = compute_base_url(Some(path), "http://localhost/");
            assert!(base.ends_with('/'), "{path} -> {base}");
        }
    }
}
