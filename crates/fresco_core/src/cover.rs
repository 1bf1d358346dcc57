//! Cover image marker handling.
//!
//! The backend historically stored the cover image URL inside the background
//! story text as a `[Cover Image: <url>]` marker. Loading splits the marker
//! out so the workflow sees a clean premise and an explicit cover reference;
//! saving re-embeds it for backends that still expect the combined form.

use regex::Regex;
use std::sync::OnceLock;

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\n*\[Cover Image: (?P<url>[^\]]*)\]").expect("valid cover marker pattern")
    })
}

/// Split a `[Cover Image: <url>]` marker out of background text.
///
/// Returns the clean premise text and the cover URL when a marker is
/// present.
///
/// # Examples
///
/// ```
/// use fresco_core::split_cover_marker;
///
/// let raw = "Once upon a time.\n\n[Cover Image: /assets/cover.png]";
/// let (clean, cover) = split_cover_marker(raw);
/// assert_eq!(clean, "Once upon a time.");
/// assert_eq!(cover.as_deref(), Some("/assets/cover.png"));
///
/// let (clean, cover) = split_cover_marker("No marker here");
/// assert_eq!(clean, "No marker here");
/// assert!(cover.is_none());
/// ```
pub fn split_cover_marker(background: &str) -> (String, Option<String>) {
    let pattern = marker_pattern();
    match pattern.captures(background) {
        Some(captures) => {
            let url = captures["url"].to_string();
            let clean = pattern.replace(background, "").trim_end().to_string();
            let cover = if url.trim().is_empty() { None } else { Some(url) };
            (clean, cover)
        }
        None => (background.to_string(), None),
    }
}

/// Re-embed a cover reference into background text for storage.
///
/// With no cover reference the text is returned unchanged.
pub fn with_cover_marker(background: &str, cover_ref: Option<&str>) -> String {
    match cover_ref {
        Some(url) if !url.trim().is_empty() => {
            format!("{}\n\n[Cover Image: {}]", background.trim_end(), url)
        }
        _ => background.to_string(),
    }
}
