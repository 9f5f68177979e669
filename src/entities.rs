// SPDX-License-Identifier: GPL-3.0-only

mod catalog_entry;
mod favorite_record;
mod item_detail;
mod remote;

pub use catalog_entry::CatalogEntry;
pub use favorite_record::FavoriteRecord;
pub use item_detail::ItemDetail;
pub use remote::Remote;
