// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod config;
pub mod favorites;
pub mod image_cache;
pub mod localization;
pub mod settings;
pub mod storage;
