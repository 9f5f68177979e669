// SPDX-License-Identifier: GPL-3.0

use cosmic::{
    Element,
    iced::{Alignment, Length},
    theme,
    widget,
};

use crate::{
    app::{Message, presentation},
    core::{favorites::FavoritesStore, image_cache::ImageCache},
    entities::{ItemDetail, Remote},
    fl,
    utils::capitalize_string,
};

/// Size of the main sprite of the Pokémon
const MAIN_IMAGE_SIZE: f32 = 236.0;
/// Size of the sprites in the gallery
const GALLERY_IMAGE_SIZE: f32 = 115.0;
const GALLERY_COLUMNS: usize = 4;

/// State of the detail screen of a single Pokémon
#[derive(Debug)]
pub struct DetailPage {
    name: String,
    detail: Remote<ItemDetail>,
    is_favorite: bool,
    favorites_error: Option<String>,
}

impl DetailPage {
    /// Opens the page for `name`, the favorite status is read once here
    pub fn new(name: String, favorites: &FavoritesStore) -> Self {
        let (is_favorite, favorites_error) = match favorites.contains(&name) {
            Ok(is_favorite) => (is_favorite, None),
            Err(err) => {
                tracing::error!(%name, "could not read favorites: {err}");
                (false, Some(err.to_string()))
            }
        };

        Self {
            name,
            detail: Remote::Loading,
            is_favorite,
            favorites_error,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detail(&self) -> &Remote<ItemDetail> {
        &self.detail
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn favorites_error(&self) -> Option<&str> {
        self.favorites_error.as_deref()
    }

    /// Whether a detail response fetched for `name` belongs to this page
    pub fn accepts(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn set_detail(&mut self, result: Result<Option<ItemDetail>, String>) {
        self.detail = Remote::from(result);
    }

    pub fn retry(&mut self) {
        self.detail = Remote::Loading;
    }

    /// Adds or removes the Pokémon from the favorites, does nothing until the detail is loaded
    pub fn toggle_favorite(&mut self, favorites: &FavoritesStore) {
        let Remote::Loaded(detail) = &self.detail else {
            return;
        };

        match favorites.toggle(&self.name, detail, self.is_favorite) {
            Ok(is_favorite) => {
                self.is_favorite = is_favorite;
                self.favorites_error = None;
            }
            Err(err) => {
                tracing::error!(name = %self.name, "could not update favorites: {err}");
                self.favorites_error = Some(err.to_string());
            }
        }
    }

    /// Urls of every sprite shown by the page, main image first
    pub fn image_urls(&self) -> Vec<String> {
        let Some(detail) = self.detail.loaded() else {
            return Vec::new();
        };

        detail
            .sprites
            .front_default()
            .into_iter()
            .chain(detail.sprites.gallery())
            .map(String::from)
            .collect()
    }
}

pub fn view<'a>(page: &'a DetailPage, images: &'a ImageCache) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let detail = match page.detail() {
        Remote::Loading => return presentation::status(fl!("loading"), None),
        Remote::Empty => return presentation::status(fl!("pokemon-not-found"), None),
        Remote::Failed(err) => {
            return presentation::status(
                fl!("pokemon-error", error = err.as_str()),
                Some((fl!("retry"), Message::RetryDetail)),
            );
        }
        Remote::Loaded(detail) => detail,
    };

    let mut content = widget::column()
        .spacing(spacing.space_s)
        .padding(spacing.space_m)
        .width(Length::Fill);

    if let Some(url) = detail.sprites.front_default() {
        content = content.push(
            widget::container(presentation::sprite(images.get(url), MAIN_IMAGE_SIZE))
                .center_x(Length::Fill),
        );
    }

    let favorite_icon = if page.is_favorite() {
        "starred-symbolic"
    } else {
        "non-starred-symbolic"
    };

    let favorite_button =
        widget::button::icon(widget::icon::from_name(favorite_icon)).on_press(Message::ToggleFavorite);

    content = content.push(
        widget::row()
            .push(widget::text::title1(capitalize_string(&detail.name)).width(Length::Fill))
            .push(favorite_button)
            .align_y(Alignment::Center),
    );

    if let Some(err) = page.favorites_error() {
        content = content.push(widget::text::body(fl!("favorites-error", error = err)));
    }

    let gallery = detail
        .sprites
        .gallery()
        .into_iter()
        .map(|url| {
            widget::container(presentation::sprite(images.get(url), GALLERY_IMAGE_SIZE))
                .center_x(Length::Fill)
                .into()
        })
        .collect();

    content = content
        .push(widget::text::title4(fl!("sprite-gallery")))
        .push(presentation::grid(gallery, GALLERY_COLUMNS))
        .push(widget::text::title4(fl!("abilities")));

    for ability in detail.ability_names() {
        content = content.push(widget::text::body(capitalize_string(ability)));
    }

    widget::scrollable(content).into()
}
