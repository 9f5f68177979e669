// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use crate::{
    core::storage::{Storage, StorageError},
    entities::{FavoriteRecord, ItemDetail},
};

/// Storage key holding the serialized favorites list
pub const FAVORITES_KEY: &str = "favorites";

/// Read/write access to the persisted favorites list.
///
/// The list is a single JSON array stored under [`FAVORITES_KEY`], oldest
/// record first. Every change rewrites the whole array.
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore").finish_non_exhaustive()
    }
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Reads the favorites list, an absent key is an empty list
    pub fn load(&self) -> Result<Vec<FavoriteRecord>, StorageError> {
        let Some(raw) = self.storage.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: FAVORITES_KEY.to_string(),
            source,
        })
    }

    /// Whether any stored record has the given name
    pub fn contains(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.load()?.iter().any(|record| record.name == name))
    }

    fn save(&self, favorites: &[FavoriteRecord]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(favorites).map_err(|source| StorageError::Encode {
            key: FAVORITES_KEY.to_string(),
            source,
        })?;

        self.storage.set(FAVORITES_KEY, &raw)
    }

    /// Flips the favorite status of the Pokémon shown under `name` and returns the new status.
    ///
    /// `is_favorite` is the status currently displayed: when set every record named `name`
    /// is removed, otherwise `{ name, id }` of `detail` is appended.
    pub fn toggle(
        &self,
        name: &str,
        detail: &ItemDetail,
        is_favorite: bool,
    ) -> Result<bool, StorageError> {
        let favorites = self.load()?;
        let updated = toggled(favorites, name, detail, is_favorite);
        self.save(&updated)?;

        tracing::info!(name, favorite = !is_favorite, "favorite toggled");
        Ok(!is_favorite)
    }
}

fn toggled(
    mut favorites: Vec<FavoriteRecord>,
    name: &str,
    detail: &ItemDetail,
    is_favorite: bool,
) -> Vec<FavoriteRecord> {
    if is_favorite {
        favorites.retain(|record| record.name != name);
    } else {
        favorites.push(FavoriteRecord {
            name: detail.name.clone(),
            id: detail.id,
        });
    }

    favorites
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::core::storage::MemoryStorage;

    fn detail(name: &str, id: i64) -> ItemDetail {
        serde_json::from_value(serde_json::json!({ "name": name, "id": id })).unwrap()
    }

    fn store() -> (Arc<MemoryStorage>, FavoritesStore) {
        let storage = Arc::new(MemoryStorage::default());
        let store = FavoritesStore::new(storage.clone());
        (storage, store)
    }

    #[test]
    fn absent_key_reads_as_empty_list() {
        let (_, store) = store();

        assert!(store.load().unwrap().is_empty());
        assert!(!store.contains("pikachu").unwrap());
    }

    #[test]
    fn toggling_twice_writes_record_then_empty_array() {
        let (storage, store) = store();
        let pikachu = detail("pikachu", 25);

        let is_favorite = store.toggle("pikachu", &pikachu, false).unwrap();
        assert!(is_favorite);
        assert_eq!(
            storage.get(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"[{"name":"pikachu","id":25}]"#)
        );

        let is_favorite = store.toggle("pikachu", &pikachu, is_favorite).unwrap();
        assert!(!is_favorite);
        assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn toggle_pair_restores_existing_list() {
        let (storage, store) = store();
        let original = r#"[{"name":"bulbasaur","id":1},{"name":"ivysaur","id":2}]"#;
        storage.set(FAVORITES_KEY, original).unwrap();

        let charmander = detail("charmander", 4);
        store.toggle("charmander", &charmander, false).unwrap();
        assert_eq!(store.load().unwrap().len(), 3);
        assert_eq!(store.load().unwrap()[2].name, "charmander");

        store.toggle("charmander", &charmander, true).unwrap();
        assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some(original));
    }

    #[test]
    fn unfavorite_removes_every_record_with_the_name() {
        let (storage, store) = store();
        storage
            .set(
                FAVORITES_KEY,
                r#"[{"name":"eevee","id":133},{"name":"mew","id":151},{"name":"eevee","id":133}]"#,
            )
            .unwrap();

        store.toggle("eevee", &detail("eevee", 133), true).unwrap();

        assert_eq!(
            store.load().unwrap(),
            vec![FavoriteRecord {
                name: String::from("mew"),
                id: 151
            }]
        );
    }

    #[test]
    fn persisted_list_round_trips_byte_for_byte() {
        let (storage, store) = store();
        let raw = r#"[{"name":"mew","id":151},{"name":"abra","id":63}]"#;
        storage.set(FAVORITES_KEY, raw).unwrap();

        let favorites = store.load().unwrap();
        store.save(&favorites).unwrap();

        assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some(raw));
    }

    #[test]
    fn corrupt_value_is_reported_and_left_untouched() {
        let (storage, store) = store();
        storage.set(FAVORITES_KEY, "{not json").unwrap();

        assert!(matches!(store.load(), Err(StorageError::Corrupt { .. })));
        assert!(store.toggle("mew", &detail("mew", 151), false).is_err());
        assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some("{not json"));
    }

    fn unique_records() -> impl Strategy<Value = Vec<FavoriteRecord>> {
        prop::collection::btree_map("[a-z-]{1,10}", 1i64..2000, 0..12).prop_map(|records| {
            records
                .into_iter()
                .map(|(name, id)| FavoriteRecord { name, id })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn toggle_pair_restores_any_list(
            records in unique_records(),
            name in "[a-z-]{1,10}",
            id in 1i64..2000,
        ) {
            prop_assume!(records.iter().all(|record| record.name != name));
            let (storage, store) = store();
            let original = serde_json::to_string(&records).unwrap();
            storage.set(FAVORITES_KEY, &original).unwrap();

            let added = detail(&name, id);
            prop_assert!(store.toggle(&name, &added, false).unwrap());
            prop_assert!(store.contains(&name).unwrap());
            prop_assert!(!store.toggle(&name, &added, true).unwrap());

            prop_assert_eq!(store.load().unwrap(), records);
            prop_assert_eq!(storage.get(FAVORITES_KEY).unwrap(), Some(original));
        }

        #[test]
        fn any_stored_list_round_trips_byte_for_byte(
            records in prop::collection::vec(
                (any::<String>(), any::<i64>()).prop_map(|(name, id)| FavoriteRecord { name, id }),
                0..12,
            ),
        ) {
            let (storage, store) = store();
            let raw = serde_json::to_string(&records).unwrap();
            storage.set(FAVORITES_KEY, &raw).unwrap();

            let loaded = store.load().unwrap();
            store.save(&loaded).unwrap();

            prop_assert_eq!(storage.get(FAVORITES_KEY).unwrap(), Some(raw));
        }
    }
}
