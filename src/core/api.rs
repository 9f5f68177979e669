// SPDX-License-Identifier: GPL-3.0-only

use std::{sync::Arc, time::Duration};

use anywho::{Error, anywho};
use futures::StreamExt;
use reqwest::StatusCode;
use rustemon::client::{
    CacheMode, CacheOptions, MokaManager, RustemonClient, RustemonClientBuilder,
};

use crate::entities::{CatalogEntry, ItemDetail};

const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Max amount of sprites downloaded at the same time
const CONCURRENT_DOWNLOADS: usize = 8;

/// Client for the remote Pokémon catalog (PokéApi) and its image CDN
#[derive(Clone)]
pub struct CatalogApi {
    client: Arc<RustemonClient>,
    http: reqwest::Client,
}

impl std::fmt::Debug for CatalogApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogApi").finish_non_exhaustive()
    }
}

impl CatalogApi {
    pub fn new() -> Result<Self, Error> {
        let client = RustemonClientBuilder::default()
            .with_manager(MokaManager::default())
            .with_mode(CacheMode::NoStore)
            .with_options(CacheOptions {
                shared: true,
                cache_heuristic: 0.1,
                immutable_min_time_to_live: Duration::from_secs(3600),
                ignore_cargo_cult: true,
            })
            .try_build()
            .map_err(|err| anywho!("could not build the api client: {err}"))?;

        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            http,
        })
    }

    /// Fetches one page of the Pokémon list
    pub async fn fetch_catalog(&self, limit: i64, offset: i64) -> Result<Vec<CatalogEntry>, Error> {
        tracing::debug!(limit, offset, "fetching catalog");

        let page =
            rustemon::pokemon::pokemon::get_page_with_param(offset, limit, &self.client).await?;

        Ok(page
            .results
            .into_iter()
            .map(|entry| CatalogEntry {
                name: entry.name,
                url: entry.url,
            })
            .collect())
    }

    /// Fetches the full record of a Pokémon, `None` when the api does not know the name
    pub async fn fetch_detail(&self, name: &str) -> Result<Option<ItemDetail>, Error> {
        let Some(url) = detail_url(name) else {
            tracing::warn!(name, "refusing to fetch detail for an invalid name");
            return Ok(None);
        };

        tracing::debug!(name, "fetching detail");
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let detail = response.error_for_status()?.json::<ItemDetail>().await?;
        Ok(Some(detail))
    }

    /// Downloads a single image
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self.http.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(anywho!(
                "Failed to download image. Status: {}",
                response.status()
            ))
        }
    }

    /// Downloads several images concurrently, every url gets its own result
    pub async fn fetch_images(&self, urls: Vec<String>) -> Vec<(String, Result<Vec<u8>, String>)> {
        futures::stream::iter(urls)
            .map(|url| async move {
                let result = self.fetch_image(&url).await.map_err(|err| {
                    tracing::warn!(%url, "error downloading sprite: {err}");
                    err.to_string()
                });
                (url, result)
            })
            .buffer_unordered(CONCURRENT_DOWNLOADS)
            .collect()
            .await
    }
}

/// Url of the detail endpoint, `None` for names that can not identify a Pokémon.
/// Names are used as given, padded names are not looked up.
fn detail_url(name: &str) -> Option<String> {
    if name.is_empty() || name.trim() != name || name.contains(['/', '?', '#']) {
        return None;
    }

    Some(format!("{POKEAPI_BASE_URL}/pokemon/{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_url_uses_the_name() {
        assert_eq!(
            detail_url("pikachu").as_deref(),
            Some("https://pokeapi.co/api/v2/pokemon/pikachu")
        );
        assert_eq!(
            detail_url("mr-mime").as_deref(),
            Some("https://pokeapi.co/api/v2/pokemon/mr-mime")
        );
    }

    #[test]
    fn detail_url_rejects_blank_or_path_names() {
        assert_eq!(detail_url(""), None);
        assert_eq!(detail_url("   "), None);
        assert_eq!(detail_url("../ability/1"), None);
        assert_eq!(detail_url("pikachu?x=1"), None);
    }

    #[test]
    fn detail_url_rejects_padded_names() {
        assert_eq!(detail_url(" pikachu"), None);
        assert_eq!(detail_url("pikachu "), None);
        assert_eq!(detail_url("\tmew\n"), None);
    }

    #[tokio::test]
    async fn blank_name_settles_as_not_found_without_request() {
        let api = CatalogApi::new().unwrap();
        assert!(api.fetch_detail("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn padded_name_settles_as_not_found_without_request() {
        let api = CatalogApi::new().unwrap();
        assert!(api.fetch_detail(" pikachu").await.unwrap().is_none());
    }
}
