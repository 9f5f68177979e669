// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Full record of a single Pokémon, as returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDetail {
    pub name: String,
    pub id: i64,
    #[serde(default)]
    pub sprites: SpriteSet,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
}

impl ItemDetail {
    /// Names of all the abilities, in the order the api lists them
    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.iter().map(|slot| slot.ability.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// A value of the sprites mapping
#[derive(Debug, Clone, PartialEq)]
pub enum Sprite {
    /// Displayable image url
    Url(String),
    /// The variant exists but has no image
    Missing,
    /// Nested group of variants (`other`, `versions`) or any other non-url value
    Group,
}

impl From<Value> for Sprite {
    fn from(value: Value) -> Self {
        match value {
            Value::String(url) => Sprite::Url(url),
            Value::Null => Sprite::Missing,
            _ => Sprite::Group,
        }
    }
}

/// Sprites of a Pokémon keyed by variant name, kept in the order the api defines them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteSet(Vec<(String, Sprite)>);

impl SpriteSet {
    pub fn get(&self, variant: &str) -> Option<&Sprite> {
        self.0
            .iter()
            .find(|(name, _)| name == variant)
            .map(|(_, sprite)| sprite)
    }

    /// Main image of the Pokémon, if it has one
    pub fn front_default(&self) -> Option<&str> {
        match self.get("front_default") {
            Some(Sprite::Url(url)) => Some(url),
            _ => None,
        }
    }

    /// Every displayable url, in key-definition order
    pub fn gallery(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter_map(|(_, sprite)| match sprite {
                Sprite::Url(url) => Some(url.as_str()),
                Sprite::Missing | Sprite::Group => None,
            })
            .collect()
    }
}

impl FromIterator<(String, Sprite)> for SpriteSet {
    fn from_iter<I: IntoIterator<Item = (String, Sprite)>>(iter: I) -> Self {
        SpriteSet(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for SpriteSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(map
            .into_iter()
            .map(|(variant, value)| (variant, Sprite::from(value)))
            .collect())
    }
}
