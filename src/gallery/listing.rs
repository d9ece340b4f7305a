// SPDX-License-Identifier: MPL-2.0
//! Directory listing that plays the role of the host page.
//!
//! Each directory entry becomes a [`SourceElement`] carrying the marker the
//! scanner looks for: images are thumbnail links, sub-directories are folder
//! groupings and everything else is a generic file grouping.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use url::Url;

/// Image file extensions recognized as thumbnail links.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Marker carried by a listing element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Thumbnail,
    Folder,
    File,
}

/// One element of the host listing, before scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceElement {
    pub kind: ElementKind,
    pub url: Url,
    pub path: PathBuf,
    /// Explicit caption, if the element carries one.
    pub caption: Option<String>,
    /// Alternative text, if the element carries one.
    pub alt: Option<String>,
    /// Display name attribute for folder and file groupings.
    pub name: Option<String>,
}

/// Lists `dir` in document order: folders first, then files, each group
/// sorted according to `sort_order`. Hidden entries are skipped.
pub fn list_directory(dir: &Path, sort_order: SortOrder) -> Result<Vec<SourceElement>> {
    let dir = dir.canonicalize()?;
    let mut folders = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        if path.is_dir() {
            folders.push(path);
        } else if path.is_file() {
            files.push(path);
        }
    }

    sort_paths(&mut folders, sort_order);
    sort_paths(&mut files, sort_order);

    let mut elements = Vec::with_capacity(folders.len() + files.len());
    for path in folders {
        match folder_element(path) {
            Ok(element) => elements.push(element),
            Err(err) => log::debug!("Skipping folder: {}", err),
        }
    }
    for path in files {
        match file_element(path) {
            Ok(element) => elements.push(element),
            Err(err) => log::debug!("Skipping file: {}", err),
        }
    }

    Ok(elements)
}

/// Checks if a path has an image extension.
#[must_use]
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn display_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

fn folder_element(path: PathBuf) -> Result<SourceElement> {
    let url = Url::from_directory_path(&path)
        .map_err(|()| Error::Io(format!("Not an absolute path: {}", path.display())))?;
    Ok(SourceElement {
        kind: ElementKind::Folder,
        url,
        name: display_name(&path),
        path,
        caption: None,
        alt: None,
    })
}

fn file_element(path: PathBuf) -> Result<SourceElement> {
    let url = Url::from_file_path(&path)
        .map_err(|()| Error::Io(format!("Not an absolute path: {}", path.display())))?;

    if is_image(&path) {
        Ok(SourceElement {
            kind: ElementKind::Thumbnail,
            url,
            caption: read_caption(&path),
            path,
            alt: None,
            name: None,
        })
    } else {
        Ok(SourceElement {
            kind: ElementKind::File,
            url,
            name: display_name(&path),
            path,
            caption: None,
            alt: None,
        })
    }
}

/// Reads the EXIF `ImageDescription` tag, used as the explicit caption.
fn read_caption(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    let field = exif.get_field(exif::Tag::ImageDescription, exif::In::PRIMARY)?;
    ascii_text(&field.value)
}

/// Joins the components of an ASCII value, dropping NUL padding and blanks.
fn ascii_text(value: &exif::Value) -> Option<String> {
    let exif::Value::Ascii(components) = value else {
        return None;
    };
    let text = components
        .iter()
        .map(|bytes| String::from_utf8_lossy(bytes.as_slice()))
        .map(|part| part.trim_matches(|c: char| c == '\0' || c.is_whitespace()).to_string())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then_some(text)
}

fn sort_paths(paths: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            paths.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            paths.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake data").expect("failed to write test file");
        path
    }

    #[test]
    fn classifies_entries_by_kind() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "a.jpg");
        touch(temp_dir.path(), "notes.txt");
        fs::create_dir(temp_dir.path().join("albums")).expect("mkdir failed");

        let elements =
            list_directory(temp_dir.path(), SortOrder::Alphabetical).expect("listing failed");
        let kinds: Vec<_> = elements.iter().map(|e| e.kind).collect();

        assert_eq!(
            kinds,
            vec![ElementKind::Folder, ElementKind::Thumbnail, ElementKind::File]
        );
    }

    #[test]
    fn folders_come_first_then_sorted_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "c.png");
        touch(temp_dir.path(), "a.png");
        fs::create_dir(temp_dir.path().join("z-folder")).expect("mkdir failed");
        touch(temp_dir.path(), "b.gif");

        let elements =
            list_directory(temp_dir.path(), SortOrder::Alphabetical).expect("listing failed");
        let names: Vec<_> = elements
            .iter()
            .map(|e| display_name(&e.path).unwrap_or_default())
            .collect();

        assert_eq!(names, vec!["z-folder", "a.png", "b.gif", "c.png"]);
    }

    #[test]
    fn hidden_entries_are_skipped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), ".hidden.jpg");
        fs::create_dir(temp_dir.path().join(".git")).expect("mkdir failed");
        touch(temp_dir.path(), "shown.jpg");

        let elements =
            list_directory(temp_dir.path(), SortOrder::Alphabetical).expect("listing failed");
        assert_eq!(elements.len(), 1);
    }

    #[test]
    fn urls_are_percent_encoded_and_folders_end_with_slash() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "sunset view.jpg");
        fs::create_dir(temp_dir.path().join("2024")).expect("mkdir failed");

        let elements =
            list_directory(temp_dir.path(), SortOrder::Alphabetical).expect("listing failed");

        assert!(elements[0].url.as_str().ends_with("/2024/"));
        assert!(elements[1].url.as_str().ends_with("/sunset%20view.jpg"));
    }

    #[test]
    fn fake_images_have_no_caption() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "plain.jpg");

        let elements =
            list_directory(temp_dir.path(), SortOrder::Alphabetical).expect("listing failed");
        assert_eq!(elements[0].caption, None);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing");
        assert!(list_directory(&missing, SortOrder::Alphabetical).is_err());
    }

    #[test]
    fn is_image_is_case_insensitive() {
        assert!(is_image(Path::new("photo.JPG")));
        assert!(is_image(Path::new("photo.webp")));
        assert!(!is_image(Path::new("clip.mp4")));
        assert!(!is_image(Path::new("README")));
    }

    #[test]
    fn ascii_text_joins_components() {
        let value = exif::Value::Ascii(vec![b"Harbour".to_vec(), b"at dusk\0".to_vec()]);
        assert_eq!(ascii_text(&value).as_deref(), Some("Harbour at dusk"));
    }

    #[test]
    fn ascii_text_rejects_blank_and_non_ascii_values() {
        assert_eq!(ascii_text(&exif::Value::Ascii(vec![b"  ".to_vec()])), None);
        assert_eq!(ascii_text(&exif::Value::Ascii(Vec::new())), None);
        assert_eq!(ascii_text(&exif::Value::Short(vec![1])), None);
    }
}
