// SPDX-License-Identifier: GPL-3.0

pub mod catalog;
pub mod detail;
pub mod favorites;

pub use catalog::{CatalogPage, PaginationAction};
pub use detail::DetailPage;
pub use favorites::FavoritesPage;
