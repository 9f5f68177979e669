// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry},
    theme,
};
use serde::{Deserialize, Serialize};

pub const APP_ID: &str = "dev.pokeshelf.PokeShelf";

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    pub app_theme: AppTheme,
    /// Tiles per row in the Pokémon grids
    pub grid_columns: usize,
    /// Tiles per page in the catalog grid
    pub items_per_page: usize,
    /// `limit` sent with the single catalog request
    pub catalog_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: Default::default(),
            grid_columns: 2,
            items_per_page: 30,
            catalog_limit: 100_000,
        }
    }
}

impl Config {
    pub fn config_handler() -> Option<cosmic_config::Config> {
        cosmic_config::Config::new(APP_ID, Self::VERSION).ok()
    }

    /// Loads the stored configuration, falling back to the defaults for what can not be read
    pub fn config() -> Config {
        match Self::config_handler() {
            Some(config_handler) => {
                Config::get_entry(&config_handler).unwrap_or_else(|(errs, config)| {
                    tracing::info!("errors loading config: {:?}", errs);
                    config
                })
            }
            None => Config::default(),
        }
    }

    pub fn grid_columns(&self) -> usize {
        self.grid_columns.max(1)
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page.max(1)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum AppTheme {
    Dark,
    Light,
    #[default]
    System,
}

impl AppTheme {
    /// Order of the themes in the settings dropdown
    pub const ALL: [AppTheme; 3] = [AppTheme::System, AppTheme::Dark, AppTheme::Light];

    pub fn theme(&self) -> theme::Theme {
        match self {
            Self::Dark => theme::Theme::dark(),
            Self::Light => theme::Theme::light(),
            Self::System => theme::system_preference(),
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|theme| theme == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_two_columns() {
        let config = Config::default();
        assert_eq!(config.grid_columns(), 2);
        assert_eq!(config.catalog_limit, 100_000);
    }

    #[test]
    fn zero_sizes_are_clamped() {
        let config = Config {
            grid_columns: 0,
            items_per_page: 0,
            ..Default::default()
        };
        assert_eq!(config.grid_columns(), 1);
        assert_eq!(config.items_per_page(), 1);
    }

    #[test]
    fn theme_index_round_trip() {
        for theme in AppTheme::ALL {
            assert_eq!(AppTheme::from_index(theme.index()), theme);
        }
        assert_eq!(AppTheme::from_index(42), AppTheme::System);
    }
}
