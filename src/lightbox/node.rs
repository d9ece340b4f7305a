// SPDX-License-Identifier: MPL-2.0
//! Overlay subtree: container → figure → {image, caption, controls}.
//!
//! Geometry is stored as [`StyleValue`]s written by the layout engine and read
//! by the overlay view.

use crate::gallery::ThumbnailEntry;
use iced::Size;
use std::path::{Path, PathBuf};
use url::Url;

/// Identity of an overlay node attached to the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

impl OverlayId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// A numeric style property. Unset until a finite value is written.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleValue(Option<f32>);

impl StyleValue {
    /// Writes `value` if it is finite. Non-finite values leave the previous
    /// value in place and return `false`.
    pub fn set(&mut self, value: f32) -> bool {
        if value.is_finite() {
            self.0 = Some(value);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    #[must_use]
    pub fn get(self) -> Option<f32> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Close,
    Previous,
    Next,
}

/// Fixed-position overlay control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    kind: ControlKind,
    /// Edge length of the control, compensated for zoom.
    pub size: StyleValue,
}

impl Control {
    #[must_use]
    pub fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            size: StyleValue::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ControlKind {
        self.kind
    }
}

/// Axis that constrains the image in fit-to-screen mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitAxis {
    /// Full available width, height derived from the aspect ratio.
    Width,
    /// Full available height, width derived from the aspect ratio.
    Height,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    source: Url,
    path: PathBuf,
    alt: String,
    natural_size: Option<Size>,
    pub max_width: StyleValue,
    pub max_height: StyleValue,
    pub width: StyleValue,
    pub height: StyleValue,
    pub fit: Option<FitAxis>,
}

impl ImageNode {
    #[must_use]
    pub fn source(&self) -> &Url {
        &self.source
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Intrinsic dimensions, known once the image has loaded.
    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        self.natural_size
    }

    pub fn set_natural_size(&mut self, size: Size) {
        self.natural_size = Some(size);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptionNode {
    text: String,
    pub width: StyleValue,
    pub height: StyleValue,
    pub visible: bool,
}

impl CaptionNode {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub left: StyleValue,
    pub top: StyleValue,
    pub width: StyleValue,
    pub image: ImageNode,
    pub caption: CaptionNode,
}

/// The overlay container and everything inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayNode {
    index: usize,
    visibility: Visibility,
    pub figure: Figure,
    pub close: Control,
    pub previous: Option<Control>,
    pub next: Option<Control>,
}

impl OverlayNode {
    /// Builds the subtree for `entry`. The previous control exists iff the
    /// entry is not the first one, the next control iff it is not the last.
    #[must_use]
    pub fn build(entry: &ThumbnailEntry, last_index: usize) -> Self {
        let index = entry.index();
        let label = entry.label().to_string();

        Self {
            index,
            visibility: Visibility::Hidden,
            figure: Figure {
                left: StyleValue::default(),
                top: StyleValue::default(),
                width: StyleValue::default(),
                image: ImageNode {
                    source: entry.source_url().clone(),
                    path: entry.path().to_path_buf(),
                    alt: entry.alt_text().map_or_else(|| label.clone(), str::to_owned),
                    natural_size: None,
                    max_width: StyleValue::default(),
                    max_height: StyleValue::default(),
                    width: StyleValue::default(),
                    height: StyleValue::default(),
                    fit: None,
                },
                caption: CaptionNode {
                    text: label,
                    width: StyleValue::default(),
                    height: StyleValue::default(),
                    visible: true,
                },
            },
            close: Control::new(ControlKind::Close),
            previous: (index > 0).then(|| Control::new(ControlKind::Previous)),
            next: (index < last_index).then(|| Control::new(ControlKind::Next)),
        }
    }

    /// Index of the thumbnail this overlay presents.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Close, previous and next controls that exist on this node.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        std::iter::once(&self.close)
            .chain(self.previous.as_ref())
            .chain(self.next.as_ref())
    }

    pub fn controls_mut(&mut self) -> impl Iterator<Item = &mut Control> {
        std::iter::once(&mut self.close)
            .chain(self.previous.as_mut())
            .chain(self.next.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ElementKind, Gallery, SourceElement};

    fn gallery(count: usize) -> Gallery {
        Gallery::scan(
            (0..count)
                .map(|i| SourceElement {
                    kind: ElementKind::Thumbnail,
                    url: Url::parse(&format!("file:///g/{i}.jpg")).expect("valid url"),
                    path: PathBuf::from(format!("/g/{i}.jpg")),
                    caption: None,
                    alt: None,
                    name: None,
                })
                .collect(),
        )
    }

    #[test]
    fn style_value_skips_non_finite() {
        let mut value = StyleValue::default();
        assert!(value.set(12.0));
        assert!(!value.set(f32::NAN));
        assert!(!value.set(f32::INFINITY));
        assert_eq!(value.get(), Some(12.0));
        value.clear();
        assert_eq!(value.get(), None);
    }

    #[test]
    fn controls_depend_on_position() {
        let gallery = gallery(3);
        let last = 2;

        let first = OverlayNode::build(gallery.get(0).expect("entry"), last);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let middle = OverlayNode::build(gallery.get(1).expect("entry"), last);
        assert!(middle.has_previous());
        assert!(middle.has_next());

        let end = OverlayNode::build(gallery.get(2).expect("entry"), last);
        assert!(end.has_previous());
        assert!(!end.has_next());
    }

    #[test]
    fn single_entry_has_only_close() {
        let gallery = gallery(1);
        let node = OverlayNode::build(gallery.get(0).expect("entry"), 0);
        let kinds: Vec<_> = node.controls().map(Control::kind).collect();
        assert_eq!(kinds, vec![ControlKind::Close]);
    }

    #[test]
    fn new_node_starts_hidden_with_caption() {
        let gallery = gallery(2);
        let node = OverlayNode::build(gallery.get(1).expect("entry"), 1);
        assert_eq!(node.visibility(), Visibility::Hidden);
        assert_eq!(node.figure.caption.text(), "1.jpg");
        assert_eq!(node.figure.image.alt(), "1.jpg");
        assert!(node.figure.image.natural_size().is_none());
    }
}
