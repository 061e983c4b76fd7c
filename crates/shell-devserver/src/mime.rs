use std::path::Path;

const FALLBACK: &str = "application/octet-stream";

const TYPES: &[(&str, &str)] = &[
    ("html", "text/html; charset=utf-8"),
    ("css", "text/css; charset=utf-8"),
    ("js", "text/javascript; charset=utf-8"),
    ("json", "application/json; charset=utf-8"),
    ("wasm", "application/wasm"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("woff2", "font/woff2"),
];

/// `Content-Type` for a file, by case-insensitive extension.
pub fn mime_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FALLBACK;
    };
    TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map_or(FALLBACK, |&(_, mime)| mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(mime_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(mime_type(Path::new("a/b/PHOTO.JPG")), "image/jpeg");
        assert_eq!(mime_type(Path::new("app_bg.wasm")), "application/wasm");
    }

    #[test]
    fn test_unknown_types() {
        assert_eq!(mime_type(Path::new("README")), FALLBACK);
        assert_eq!(mime_type(Path::new("archive.tar.gz")), FALLBACK);
        assert_eq!(mime_type(Path::new(".env")), FALLBACK);
    }
}
