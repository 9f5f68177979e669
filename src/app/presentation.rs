// SPDX-License-Identifier: GPL-3.0

use cosmic::{
    Element,
    iced::{Alignment, Length},
    theme,
    widget::{self, image},
};

use crate::{app::Message, utils::capitalize_string};

/// Size of a sprite inside a grid tile
const TILE_IMAGE_SIZE: f32 = 120.0;

/// Sprite widget, a placeholder icon while the image is missing
pub fn sprite<'a>(handle: Option<&image::Handle>, size: f32) -> Element<'a, Message> {
    match handle {
        Some(handle) => widget::Image::new(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        None => widget::icon::from_name("image-missing-symbolic")
            .size(size as u16)
            .icon()
            .into(),
    }
}

/// Clickable tile with the sprite and name of a Pokémon
pub fn pokemon_tile<'a>(
    name: &str,
    handle: Option<&image::Handle>,
    on_press: Message,
) -> Element<'a, Message> {
    let content = widget::column()
        .push(sprite(handle, TILE_IMAGE_SIZE))
        .push(widget::text::body(capitalize_string(name)))
        .align_x(Alignment::Center)
        .spacing(5.0)
        .width(Length::Fill);

    widget::button::custom(content)
        .on_press(on_press)
        .class(theme::Button::Image)
        .width(Length::Fill)
        .into()
}

/// Lays the tiles out in rows of `columns` equally wide cells
pub fn grid<'a>(tiles: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let columns = columns.max(1);

    let mut rows = Vec::new();
    let mut tiles = tiles.into_iter().peekable();

    while tiles.peek().is_some() {
        let mut cells: Vec<Element<'a, Message>> = tiles.by_ref().take(columns).collect();
        while cells.len() < columns {
            cells.push(widget::container(widget::column()).width(Length::Fill).into());
        }

        rows.push(
            widget::row::with_children(cells)
                .spacing(spacing.space_s)
                .width(Length::Fill)
                .into(),
        );
    }

    widget::column::with_children(rows)
        .spacing(spacing.space_s)
        .width(Length::Fill)
        .into()
}

/// Centered message, with an optional action button below
pub fn status<'a>(text: String, action: Option<(String, Message)>) -> Element<'a, Message> {
    let mut content = widget::column()
        .push(widget::text::title4(text))
        .align_x(Alignment::Center)
        .spacing(10.0);

    if let Some((label, message)) = action {
        content = content.push(widget::button::suggested(label).on_press(message));
    }

    widget::container(content).center(Length::Fill).into()
}
