// SPDX-License-Identifier: MPL-2.0
//! Gallery grid: header with toggles, folder tiles, thumbnail tiles and the
//! list of other files.
//!
//! An empty gallery renders a static placeholder and wires nothing else.

use crate::config::{LabelConfig, MAX_LABEL_CHARS, THUMBNAIL_TILE_SIZE};
use crate::gallery::{truncate_label, Gallery, ThumbnailEntry};
use crate::i18n::fluent::I18n;
use crate::lightbox::Shortcut;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::scroll_guard;
use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, image, responsive, scrollable, text, Column, Row, Space,
};
use iced::{Alignment, ContentFit, Element, Length};
use std::borrow::Cow;
use std::path::PathBuf;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub labels: &'a LabelConfig,
    pub fit_to_screen: bool,
    /// Localized warning shown in the header.
    pub warning: Option<String>,
    /// Localized error replacing the grid.
    pub error: Option<String>,
    /// Swallow wheel events on the grid.
    pub suppress_scroll: bool,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailClicked(usize),
    FolderClicked(usize),
    Up,
    Toggle(Shortcut),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Present(usize),
    OpenDirectory(PathBuf),
    Toggle(Shortcut),
}

/// Process a gallery message and return the corresponding event.
pub fn update(message: Message, gallery: &Gallery) -> Event {
    match message {
        Message::ThumbnailClicked(index) => Event::Present(index),
        Message::FolderClicked(position) => gallery
            .folders()
            .get(position)
            .map_or(Event::None, |folder| {
                Event::OpenDirectory(folder.path().to_path_buf())
            }),
        Message::Up => gallery
            .directory()
            .and_then(|dir| dir.parent())
            .map_or(Event::None, |parent| Event::OpenDirectory(parent.to_path_buf())),
        Message::Toggle(shortcut) => Event::Toggle(shortcut),
    }
}

/// Number of tiles per grid row for a given width.
#[must_use]
pub fn column_count(width: f32) -> usize {
    let columns = (width / THUMBNAIL_TILE_SIZE).floor();
    if columns.is_finite() && columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}

/// Label as shown under a tile, honoring the truncation setting.
#[must_use]
pub fn display_label<'a>(label: &'a str, labels: &LabelConfig) -> Cow<'a, str> {
    if labels.truncate_names() {
        truncate_label(label, MAX_LABEL_CHARS)
    } else {
        Cow::Borrowed(label)
    }
}

/// Render the gallery.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = build_header(&ctx);

    let body: Element<'a, Message> = if let Some(error) = ctx.error {
        container(text(error).size(typography::BODY))
            .style(styles::container::error)
            .padding(spacing::LG)
            .into()
    } else if empty_state(ctx.gallery, ctx.labels) == EmptyState::Alone {
        container(text(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
            .center(Length::Fill)
            .into()
    } else {
        let gallery = ctx.gallery;
        let labels = ctx.labels;
        let i18n = ctx.i18n;
        let grid = responsive(move |size| {
            scrollable(build_grid(gallery, labels, i18n, column_count(size.width)))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        });
        scroll_guard(grid, ctx.suppress_scroll).into()
    };

    column![header, body]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// How the "no images" placeholder is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The gallery has images.
    None,
    /// Shown above the folder tiles and file list.
    Inline,
    /// Nothing else to show; the placeholder fills the body.
    Alone,
}

#[must_use]
pub fn empty_state(gallery: &Gallery, labels: &LabelConfig) -> EmptyState {
    if !gallery.is_empty() {
        return EmptyState::None;
    }
    let has_folders = labels.show_folders() && !gallery.folders().is_empty();
    if has_folders || !gallery.files().is_empty() {
        EmptyState::Inline
    } else {
        EmptyState::Alone
    }
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .height(Length::Fixed(sizing::HEADER_HEIGHT));

    let parent = ctx.gallery.directory().and_then(|dir| dir.parent());
    let up = button(text(ctx.i18n.tr("gallery-up")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe(parent.map(|_| Message::Up));
    bar = bar.push(up);

    let title = ctx
        .gallery
        .directory()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    bar = bar.push(text(title).size(typography::TITLE));

    let count = ctx.gallery.len().to_string();
    bar = bar.push(
        text(ctx.i18n.tr_with_args("gallery-image-count", &[("count", count.as_str())]))
            .size(typography::CAPTION),
    );

    if let Some(warning) = ctx.warning.clone() {
        bar = bar.push(
            container(text(warning).size(typography::CAPTION)).style(styles::container::warning),
        );
    }

    bar = bar.push(Space::new().width(Length::Fill));
    bar = bar.push(toggle_button(
        ctx.i18n.tr("toggle-fit-to-screen"),
        ctx.fit_to_screen,
        Shortcut::ToggleFitToScreen,
    ));
    bar = bar.push(toggle_button(
        ctx.i18n.tr("toggle-filenames"),
        ctx.labels.show_filenames(),
        Shortcut::ToggleFilenames,
    ));
    bar = bar.push(toggle_button(
        ctx.i18n.tr("toggle-folders"),
        ctx.labels.show_folders(),
        Shortcut::ToggleFolders,
    ));

    container(bar)
        .padding([0.0, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}

fn toggle_button<'a>(label: String, active: bool, shortcut: Shortcut) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::toggle(active))
        .on_press(Message::Toggle(shortcut))
        .into()
}

fn build_grid<'a>(
    gallery: &'a Gallery,
    labels: &'a LabelConfig,
    i18n: &'a I18n,
    columns: usize,
) -> Element<'a, Message> {
    let mut tiles: Vec<Element<'a, Message>> = Vec::new();

    if labels.show_folders() {
        for (position, folder) in gallery.folders().iter().enumerate() {
            tiles.push(folder_tile(folder.name(), position, labels));
        }
    }
    for entry in gallery.thumbnails() {
        tiles.push(thumbnail_tile(entry, labels));
    }

    let mut grid = Column::new().spacing(spacing::XS).padding(spacing::MD);
    if empty_state(gallery, labels) == EmptyState::Inline {
        grid = grid.push(text(i18n.tr("gallery-empty")).size(typography::BODY));
    }
    let mut tiles = tiles.into_iter().peekable();
    while tiles.peek().is_some() {
        let row = tiles
            .by_ref()
            .take(columns)
            .fold(Row::new().spacing(spacing::XS), |row, tile| row.push(tile));
        grid = grid.push(row);
    }

    if !gallery.files().is_empty() {
        let mut files = Column::new()
            .spacing(spacing::XXS)
            .push(text(i18n.tr("gallery-files-heading")).size(typography::BODY));
        for file in gallery.files() {
            files = files.push(
                text(display_label(file.name(), labels).into_owned()).size(typography::CAPTION),
            );
        }
        grid = grid.push(files);
    }

    grid.into()
}

fn thumbnail_tile<'a>(entry: &'a ThumbnailEntry, labels: &LabelConfig) -> Element<'a, Message> {
    let picture = image(Handle::from_path(entry.path()))
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .content_fit(ContentFit::Cover);

    tile(picture.into(), entry.label(), labels, Message::ThumbnailClicked(entry.index()))
}

fn folder_tile<'a>(name: &'a str, position: usize, labels: &LabelConfig) -> Element<'a, Message> {
    let frame = container(text("/").size(typography::TITLE * 2.0))
        .center(Length::Fixed(sizing::THUMBNAIL))
        .style(styles::container::thumbnail_frame);

    tile(frame.into(), name, labels, Message::FolderClicked(position))
}

fn tile<'a>(
    picture: Element<'a, Message>,
    label: &'a str,
    labels: &LabelConfig,
    on_press: Message,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Alignment::Center)
        .width(Length::Fixed(sizing::THUMBNAIL));

    let caption = labels.show_filenames().then(|| {
        text(display_label(label, labels).into_owned())
            .size(typography::CAPTION)
            .width(Length::Fill)
            .center()
    });

    match caption {
        Some(caption) if labels.names_above() => {
            content = content.push(caption).push(picture);
        }
        Some(caption) => {
            content = content.push(picture).push(caption);
        }
        None => {
            content = content.push(picture);
        }
    }

    button(content)
        .padding(spacing::SM)
        .width(Length::Fixed(THUMBNAIL_TILE_SIZE))
        .style(styles::button::tile)
        .on_press(on_press)
        .into()
}
