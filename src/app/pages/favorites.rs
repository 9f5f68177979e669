// SPDX-License-Identifier: GPL-3.0

use cosmic::{Element, iced::Length, theme, widget};

use crate::{
    app::{Message, navigation::Route, presentation},
    core::{config::Config, favorites::FavoritesStore, image_cache::ImageCache},
    entities::FavoriteRecord,
    fl,
};

/// State of the favorites screen, a snapshot of the stored list
#[derive(Debug)]
pub struct FavoritesPage {
    favorites: Result<Vec<FavoriteRecord>, String>,
}

impl FavoritesPage {
    pub fn load(store: &FavoritesStore) -> Self {
        let mut page = Self {
            favorites: Ok(Vec::new()),
        };
        page.reload(store);
        page
    }

    /// Reads the stored list again
    pub fn reload(&mut self, store: &FavoritesStore) {
        self.favorites = store.load().map_err(|err| {
            tracing::error!("could not read favorites: {err}");
            err.to_string()
        });
    }

    pub fn favorites(&self) -> Result<&[FavoriteRecord], &str> {
        self.favorites
            .as_ref()
            .map(Vec::as_slice)
            .map_err(String::as_str)
    }

    pub fn image_urls(&self) -> Vec<String> {
        match &self.favorites {
            Ok(favorites) => favorites.iter().map(FavoriteRecord::image_url).collect(),
            Err(_) => Vec::new(),
        }
    }
}

pub fn view<'a>(
    page: &'a FavoritesPage,
    images: &'a ImageCache,
    config: &Config,
) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let favorites = match page.favorites() {
        Ok(favorites) => favorites,
        Err(err) => {
            return presentation::status(
                fl!("favorites-error", error = err),
                Some((fl!("retry"), Message::ReloadFavorites)),
            );
        }
    };

    if favorites.is_empty() {
        return presentation::status(fl!("no-favorites"), None);
    }

    let tiles = favorites
        .iter()
        .map(|record| {
            presentation::pokemon_tile(
                &record.name,
                images.get(&record.image_url()),
                Message::Navigate(Route::Detail(record.name.clone())),
            )
        })
        .collect();

    widget::scrollable(
        widget::container(presentation::grid(tiles, config.grid_columns()))
            .padding(spacing.space_s)
            .width(Length::Fill),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::{
        navigation::{Navigator, Route},
        pages::DetailPage,
    };
    use crate::core::{
        favorites::FAVORITES_KEY,
        storage::{MemoryStorage, Storage},
    };

    fn store() -> (Arc<MemoryStorage>, FavoritesStore) {
        let storage = Arc::new(MemoryStorage::default());
        (storage.clone(), FavoritesStore::new(storage))
    }

    #[test]
    fn absent_key_shows_empty_grid() {
        let (_, store) = store();
        let page = FavoritesPage::load(&store);

        assert_eq!(page.favorites(), Ok(&[][..]));
        assert!(page.image_urls().is_empty());
    }

    #[test]
    fn tiles_use_the_stored_id() {
        let (storage, store) = store();
        storage
            .set(FAVORITES_KEY, r#"[{"name":"mew","id":151},{"name":"pikachu","id":25}]"#)
            .unwrap();

        let page = FavoritesPage::load(&store);

        assert_eq!(page.favorites().unwrap().len(), 2);
        assert_eq!(
            page.image_urls(),
            vec![
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/151.png",
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            ]
        );
    }

    #[test]
    fn returning_from_detail_shows_the_toggled_favorite() {
        let (_, store) = store();
        let mut navigator = Navigator::default();
        navigator.push(Route::Favorites);
        let mut page = FavoritesPage::load(&store);
        assert_eq!(page.favorites(), Ok(&[][..]));

        navigator.push(Route::Detail(String::from("mew")));
        let mut detail = DetailPage::new(String::from("mew"), &store);
        detail.set_detail(Ok(Some(
            serde_json::from_str(r#"{ "id": 151, "name": "mew" }"#).unwrap(),
        )));
        detail.toggle_favorite(&store);

        let back = navigator.back().unwrap();
        assert!(back.reveals_favorites());
        page.reload(&store);

        assert_eq!(
            page.favorites().unwrap(),
            &[FavoriteRecord {
                name: String::from("mew"),
                id: 151
            }][..]
        );
    }

    #[test]
    fn snapshot_only_changes_on_reload() {
        let (storage, store) = store();
        let mut page = FavoritesPage::load(&store);

        storage
            .set(FAVORITES_KEY, r#"[{"name":"mew","id":151}]"#)
            .unwrap();
        assert!(page.favorites().unwrap().is_empty());

        page.reload(&store);
        assert_eq!(page.favorites().unwrap()[0].name, "mew");
    }

    #[test]
    fn unparsable_list_is_an_error_state() {
        let (storage, store) = store();
        storage.set(FAVORITES_KEY, "not json").unwrap();

        let page = FavoritesPage::load(&store);

        assert!(page.favorites().is_err());
        assert!(page.image_urls().is_empty());
    }
}
