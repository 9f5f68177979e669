// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use anywho::Error;
use cosmic::cosmic_config;

use crate::core::{
    api::CatalogApi,
    config::{APP_ID, Config},
    storage::{FileStorage, MemoryStorage, Storage},
};

/// Flags given to our COSMIC application to use in it's "init" function.
#[derive(Clone)]
pub struct Flags {
    pub config_handler: Option<cosmic_config::Config>,
    pub config: Config,
    pub api: CatalogApi,
    pub storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flags")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

pub fn flags() -> Result<Flags, Error> {
    let (config_handler, config) = (Config::config_handler(), Config::config());

    let storage: Arc<dyn Storage> = match FileStorage::for_app(APP_ID) {
        Ok(storage) => {
            tracing::info!(path = %storage.root().display(), "using file storage");
            Arc::new(storage)
        }
        Err(err) => {
            tracing::warn!("favorites will not be persisted: {err}");
            Arc::new(MemoryStorage::default())
        }
    };

    Ok(Flags {
        config_handler,
        config,
        api: CatalogApi::new()?,
        storage,
    })
}
