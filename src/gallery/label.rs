// SPDX-License-Identifier: MPL-2.0
//! Display labels for gallery entries.
//!
//! A label is resolved once at scan time: an explicit caption wins, then alt
//! text, then the last path segment of the entry URL.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

const ELLIPSIS: char = '…';

/// Longest extension (without the dot) kept intact by [`truncate_label`].
const MAX_KEPT_EXTENSION_CHARS: usize = 5;

/// Derives a label from the trailing path segment of `url`.
///
/// A single trailing slash is stripped first so directory URLs yield the
/// directory name. The segment is percent-decoded; invalid UTF-8 is replaced
/// rather than rejected.
#[must_use]
pub fn derive_label(url: &str) -> String {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    let segment = trimmed.rsplit('/').next().unwrap_or_default();
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Picks the first non-blank of `caption` and `alt`, falling back to
/// [`derive_label`].
#[must_use]
pub fn resolve_label(caption: Option<&str>, alt: Option<&str>, url: &str) -> String {
    [caption, alt]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map_or_else(|| derive_label(url), str::to_owned)
}

/// Shortens `label` to at most `max_chars` characters.
///
/// The middle of the name is elided so a short extension stays visible:
/// `a-very-long-holiday-picture.jpeg` becomes `a-very-long-ho….jpeg`.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> Cow<'_, str> {
    let char_count = label.chars().count();
    if char_count <= max_chars || max_chars == 0 {
        return Cow::Borrowed(label);
    }

    let extension = label
        .rfind('.')
        .filter(|&dot| dot > 0)
        .map(|dot| &label[dot..])
        .filter(|ext| ext.chars().count() - 1 <= MAX_KEPT_EXTENSION_CHARS)
        .unwrap_or_default();

    let extension_chars = extension.chars().count();
    let keep = max_chars.saturating_sub(1 + extension_chars);

    let mut shortened = String::with_capacity(max_chars * 4);
    if keep == 0 {
        shortened.extend(label.chars().take(max_chars - 1));
        shortened.push(ELLIPSIS);
    } else {
        shortened.extend(label.chars().take(keep));
        shortened.push(ELLIPSIS);
        shortened.push_str(extension);
    }
    Cow::Owned(shortened)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_label_decodes_file_name() {
        assert_eq!(
            derive_label("https://example.com/photos/sunset%20view.jpg"),
            "sunset view.jpg"
        );
    }

    #[test]
    fn derive_label_strips_trailing_slash_of_directories() {
        assert_eq!(derive_label("https://example.com/albums/2024/"), "2024");
    }

    #[test]
    fn derive_label_handles_file_urls() {
        assert_eq!(
            derive_label("file:///home/me/Pictures/caf%C3%A9.png"),
            "café.png"
        );
    }

    #[test]
    fn derive_label_degrades_to_empty() {
        assert_eq!(derive_label(""), "");
        assert_eq!(derive_label("/"), "");
    }

    #[test]
    fn derive_label_replaces_invalid_utf8() {
        assert_eq!(derive_label("/a/%FF.jpg"), "\u{FFFD}.jpg");
    }

    #[test]
    fn resolve_label_prefers_caption_then_alt() {
        let url = "file:///g/one.jpg";
        assert_eq!(resolve_label(Some("Caption"), Some("Alt"), url), "Caption");
        assert_eq!(resolve_label(None, Some("Alt"), url), "Alt");
        assert_eq!(resolve_label(Some("   "), Some("Alt"), url), "Alt");
        assert_eq!(resolve_label(Some(""), None, url), "one.jpg");
    }

    #[test]
    fn truncate_label_keeps_short_labels() {
        assert!(matches!(truncate_label("short.jpg", 28), Cow::Borrowed("short.jpg")));
    }

    #[test]
    fn truncate_label_keeps_extension() {
        let shortened = truncate_label("a-very-long-holiday-picture.jpeg", 20);
        assert_eq!(shortened, "a-very-long-ho….jpeg");
        assert_eq!(shortened.chars().count(), 20);
    }

    #[test]
    fn truncate_label_without_extension_cuts_tail() {
        let shortened = truncate_label("abcdefghijklmnopqrstuvwxyz", 10);
        assert_eq!(shortened, "abcdefghi…");
    }

    #[test]
    fn truncate_label_counts_characters_not_bytes() {
        let shortened = truncate_label("ééééééééééééé.png", 10);
        assert_eq!(shortened, "ééééé….png");
    }
}
