// SPDX-License-Identifier: GPL-3.0

use cosmic::{
    Element,
    iced::{Alignment, Length},
    theme,
    widget,
};

use crate::{
    app::{Message, navigation::Route, presentation},
    core::{config::Config, image_cache::ImageCache},
    entities::{CatalogEntry, Remote},
    fl,
};

/// Identifies an action related to Pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    Next,
    Back,
}

/// State of the catalog screen
#[derive(Debug, Default)]
pub struct CatalogPage {
    entries: Remote<Vec<CatalogEntry>>,
    keyword: String,
    page: usize,
}

impl CatalogPage {
    pub fn entries(&self) -> &Remote<Vec<CatalogEntry>> {
        &self.entries
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Stores the outcome of the catalog request, an empty listing settles as [`Remote::Empty`]
    pub fn set_entries(&mut self, result: Result<Vec<CatalogEntry>, String>) {
        self.entries = match result {
            Ok(entries) if entries.is_empty() => Remote::Empty,
            Ok(entries) => Remote::Loaded(entries),
            Err(err) => Remote::Failed(err),
        };
        self.page = 0;
    }

    pub fn retry(&mut self) {
        self.entries = Remote::Loading;
    }

    pub fn search(&mut self, keyword: String) {
        self.keyword = keyword;
        self.page = 0;
    }

    /// Entries matching the current keyword, nothing while the catalog is not loaded
    pub fn filtered(&self) -> Vec<&CatalogEntry> {
        match self.entries.loaded() {
            Some(entries) => filter_by_keyword(entries, &self.keyword),
            None => Vec::new(),
        }
    }

    pub fn page_count(&self, per_page: usize) -> usize {
        self.filtered().len().div_ceil(per_page.max(1))
    }

    /// Entries of the current page
    pub fn visible(&self, per_page: usize) -> Vec<&CatalogEntry> {
        let per_page = per_page.max(1);

        self.filtered()
            .into_iter()
            .skip(self.page * per_page)
            .take(per_page)
            .collect()
    }

    pub fn paginate(&mut self, action: PaginationAction, per_page: usize) {
        let last_page = self.page_count(per_page).saturating_sub(1);

        self.page = match action {
            PaginationAction::Next => (self.page + 1).min(last_page),
            PaginationAction::Back => self.page.saturating_sub(1),
        };
    }

    /// Image urls of the entries on the current page
    pub fn image_urls(&self, per_page: usize) -> Vec<String> {
        self.visible(per_page)
            .into_iter()
            .filter_map(CatalogEntry::image_url)
            .collect()
    }
}

/// Subsequence of `entries` whose name contains `keyword`, ignoring case.
/// An empty keyword keeps every entry.
pub fn filter_by_keyword<'a>(entries: &'a [CatalogEntry], keyword: &str) -> Vec<&'a CatalogEntry> {
    if keyword.is_empty() {
        return entries.iter().collect();
    }

    let keyword = keyword.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&keyword))
        .collect()
}

pub fn view<'a>(
    page: &'a CatalogPage,
    images: &'a ImageCache,
    config: &Config,
) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let content: Element<'a, Message> = match page.entries() {
        Remote::Loading => presentation::status(fl!("loading"), None),
        Remote::Failed(err) => presentation::status(
            fl!("catalog-error", error = err.as_str()),
            Some((fl!("retry"), Message::RetryCatalog)),
        ),
        Remote::Empty => presentation::status(fl!("catalog-empty"), None),
        Remote::Loaded(_) => {
            let per_page = config.items_per_page();
            let visible = page.visible(per_page);

            if visible.is_empty() {
                presentation::status(fl!("no-results", keyword = page.keyword()), None)
            } else {
                let tiles = visible
                    .into_iter()
                    .map(|entry| {
                        let handle = entry.image_url().and_then(|url| images.get(&url));
                        presentation::pokemon_tile(
                            &entry.name,
                            handle,
                            Message::Navigate(Route::Detail(entry.name.clone())),
                        )
                    })
                    .collect();

                let pagination = widget::row()
                    .push(
                        widget::button::standard(fl!("previous"))
                            .on_press_maybe((page.page() > 0).then_some(Message::CatalogPage(
                                PaginationAction::Back,
                            ))),
                    )
                    .push(widget::text::body(fl!(
                        "page-of",
                        page = page.page() + 1,
                        total = page.page_count(per_page)
                    )))
                    .push(
                        widget::button::standard(fl!("next")).on_press_maybe(
                            (page.page() + 1 < page.page_count(per_page))
                                .then_some(Message::CatalogPage(PaginationAction::Next)),
                        ),
                    )
                    .align_y(Alignment::Center)
                    .spacing(spacing.space_s);

                widget::scrollable(
                    widget::column()
                        .push(presentation::grid(tiles, config.grid_columns()))
                        .push(
                            widget::container(pagination)
                                .center_x(Length::Fill)
                                .padding(spacing.space_xs),
                        )
                        .spacing(spacing.space_s),
                )
                .into()
            }
        }
    };

    let search = widget::search_input(fl!("search"), page.keyword())
        .on_input(Message::Search)
        .on_clear(Message::Search(String::new()))
        .width(Length::Fill);

    widget::column()
        .push(search)
        .push(content)
        .spacing(spacing.space_s)
        .padding(spacing.space_s)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
