// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use crate::utils::sprite_url;

/// Minimal projection of a Pokémon kept in the persisted favorites list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub name: String,
    pub id: i64,
}

impl FavoriteRecord {
    /// Image url built from the id captured when the Pokémon was marked as favorite
    pub fn image_url(&self) -> String {
        sprite_url(self.id)
    }
}
