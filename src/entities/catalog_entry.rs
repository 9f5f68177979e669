// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use crate::utils::{id_from_resource_url, sprite_url};

/// One entry of the remote Pokémon list, identified by its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

impl CatalogEntry {
    /// Numeric id encoded in the resource url
    pub fn id(&self) -> Option<i64> {
        id_from_resource_url(&self.url)
    }

    /// Image url of the entry, `None` when the resource url carries no id
    pub fn image_url(&self) -> Option<String> {
        self.id().map(sprite_url)
    }
}
