// SPDX-License-Identifier: MPL-2.0
//! Gallery scanner.
//!
//! Walks the elements of a listing in document order and turns the ones
//! marked as thumbnail links into addressable [`ThumbnailEntry`] values with
//! stable indices `0..n`. Folder and file groupings are collected alongside
//! so the gallery view can render them.

pub mod label;
pub mod listing;

pub use label::{derive_label, resolve_label, truncate_label};
pub use listing::{list_directory, ElementKind, SourceElement};

use crate::config::SortOrder;
use crate::error::Result;
use std::path::{Path, PathBuf};
use url::Url;

/// A thumbnail link the lightbox can present.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailEntry {
    index: usize,
    source_url: Url,
    alt_text: Option<String>,
    label: String,
    path: PathBuf,
}

impl ThumbnailEntry {
    /// Position of the entry in scan order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    /// Label resolved at scan time (caption, alt text, or URL segment).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A folder or generic file shown in the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupEntry {
    kind: ElementKind,
    name: String,
    url: Url,
    path: PathBuf,
}

impl GroupEntry {
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind == ElementKind::Folder
    }
}

/// Result of scanning one listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    directory: Option<PathBuf>,
    thumbnails: Vec<ThumbnailEntry>,
    folders: Vec<GroupEntry>,
    files: Vec<GroupEntry>,
}

impl Gallery {
    /// Scans `elements` in order. Thumbnails get indices in the order they
    /// appear; other elements never consume an index.
    #[must_use]
    pub fn scan(elements: Vec<SourceElement>) -> Self {
        let mut gallery = Self::default();

        for element in elements {
            match element.kind {
                ElementKind::Thumbnail => {
                    let label = resolve_label(
                        element.caption.as_deref(),
                        element.alt.as_deref(),
                        element.url.as_str(),
                    );
                    gallery.thumbnails.push(ThumbnailEntry {
                        index: gallery.thumbnails.len(),
                        alt_text: element.alt.or(element.caption),
                        source_url: element.url,
                        label,
                        path: element.path,
                    });
                }
                ElementKind::Folder | ElementKind::File => {
                    let name = element
                        .name
                        .filter(|name| !name.trim().is_empty())
                        .unwrap_or_else(|| derive_label(element.url.as_str()));
                    let group = GroupEntry {
                        kind: element.kind,
                        name,
                        url: element.url,
                        path: element.path,
                    };
                    if group.is_folder() {
                        gallery.folders.push(group);
                    } else {
                        gallery.files.push(group);
                    }
                }
            }
        }

        log::debug!(
            "Scanned {} thumbnails, {} folders, {} files",
            gallery.thumbnails.len(),
            gallery.folders.len(),
            gallery.files.len()
        );
        gallery
    }

    /// Lists `directory` and scans the result.
    pub fn from_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let elements = list_directory(directory, sort_order)?;
        let mut gallery = Self::scan(elements);
        gallery.directory = Some(directory.canonicalize()?);
        log::info!(
            "Opened {} ({} images)",
            directory.display(),
            gallery.thumbnails.len()
        );
        Ok(gallery)
    }

    /// Directory the gallery was scanned from, if any.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[ThumbnailEntry] {
        &self.thumbnails
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ThumbnailEntry> {
        self.thumbnails.get(index)
    }

    #[must_use]
    pub fn folders(&self) -> &[GroupEntry] {
        &self.folders
    }

    #[must_use]
    pub fn files(&self) -> &[GroupEntry] {
        &self.files
    }

    /// Number of addressable thumbnails.
    #[must_use]
    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    /// `true` when no thumbnail was found; the gallery then only shows a
    /// placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    /// Index of the last thumbnail, if any.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.thumbnails.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn element(kind: ElementKind, url: &str) -> SourceElement {
        SourceElement {
            kind,
            url: Url::parse(url).expect("valid url"),
            path: PathBuf::from("/unused"),
            caption: None,
            alt: None,
            name: None,
        }
    }

    #[test]
    fn scan_assigns_indices_in_document_order() {
        let gallery = Gallery::scan(vec![
            element(ElementKind::Thumbnail, "file:///g/b.jpg"),
            element(ElementKind::Folder, "file:///g/sub/"),
            element(ElementKind::Thumbnail, "file:///g/a.jpg"),
            element(ElementKind::File, "file:///g/notes.txt"),
            element(ElementKind::Thumbnail, "file:///g/c.jpg"),
        ]);

        let labels: Vec<_> = gallery.thumbnails().iter().map(|t| t.label()).collect();
        let indices: Vec<_> = gallery.thumbnails().iter().map(|t| t.index()).collect();
        assert_eq!(labels, vec!["b.jpg", "a.jpg", "c.jpg"]);
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(gallery.folders().len(), 1);
        assert_eq!(gallery.files().len(), 1);
        assert_eq!(gallery.last_index(), Some(2));
    }

    #[test]
    fn scan_prefers_caption_over_url() {
        let mut captioned = element(ElementKind::Thumbnail, "file:///g/IMG_0001.jpg");
        captioned.caption = Some("Harbour at dawn".to_string());

        let gallery = Gallery::scan(vec![captioned]);
        let entry = gallery.get(0).expect("entry");
        assert_eq!(entry.label(), "Harbour at dawn");
        assert_eq!(entry.alt_text(), Some("Harbour at dawn"));
    }

    #[test]
    fn scan_derives_label_from_percent_encoded_url() {
        let gallery = Gallery::scan(vec![element(
            ElementKind::Thumbnail,
            "https://example.com/photos/sunset%20view.jpg",
        )]);
        assert_eq!(gallery.get(0).map(ThumbnailEntry::label), Some("sunset view.jpg"));
    }

    #[test]
    fn folder_without_name_uses_url_segment() {
        let gallery = Gallery::scan(vec![element(
            ElementKind::Folder,
            "https://example.com/albums/2024/",
        )]);
        assert_eq!(gallery.folders()[0].name(), "2024");
        assert!(gallery.is_empty());
    }

    #[test]
    fn empty_scan_has_no_last_index() {
        let gallery = Gallery::scan(Vec::new());
        assert!(gallery.is_empty());
        assert_eq!(gallery.len(), 0);
        assert_eq!(gallery.last_index(), None);
    }

    #[test]
    fn from_directory_records_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("one.png"), b"fake").expect("write failed");

        let gallery = Gallery::from_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan failed");
        assert_eq!(gallery.len(), 1);
        assert!(gallery.directory().is_some());
    }
}
