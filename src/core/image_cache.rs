// SPDX-License-Identifier: GPL-3.0-only

use cosmic::widget::image;
use std::collections::HashMap;

enum ImageSlot {
    Pending,
    Ready(image::Handle),
    Failed,
}

/// Session cache of downloaded sprites, keyed by url
#[derive(Default)]
pub struct ImageCache {
    images: HashMap<String, ImageSlot>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of an already downloaded image
    pub fn get(&self, url: &str) -> Option<&image::Handle> {
        match self.images.get(url) {
            Some(ImageSlot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Marks the urls that were never requested as pending and returns them, in order and without duplicates
    pub fn request<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut missing = Vec::new();

        for url in urls {
            if !self.images.contains_key(url) {
                self.images.insert(url.to_string(), ImageSlot::Pending);
                missing.push(url.to_string());
            }
        }

        missing
    }

    /// Stores the outcome of a download, failed urls are not requested again this session
    pub fn insert(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let slot = match result {
            Ok(bytes) => ImageSlot::Ready(image::Handle::from_bytes(bytes)),
            Err(_) => ImageSlot::Failed,
        };

        self.images.insert(url, slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_returns_each_url_once() {
        let mut cache = ImageCache::new();

        let first = cache.request(["a.png", "b.png", "a.png"]);
        assert_eq!(first, vec!["a.png", "b.png"]);
        assert!(cache.get("a.png").is_none());

        let second = cache.request(["b.png", "c.png"]);
        assert_eq!(second, vec!["c.png"]);
    }

    #[test]
    fn downloaded_images_become_available() {
        let mut cache = ImageCache::new();
        cache.request(["a.png", "b.png"]);

        cache.insert(String::from("a.png"), Ok(vec![0x89, 0x50, 0x4e, 0x47]));
        cache.insert(String::from("b.png"), Err(String::from("404")));

        assert!(cache.get("a.png").is_some());
        assert!(cache.get("b.png").is_none());
        assert!(cache.request(["b.png"]).is_empty());
    }
}
