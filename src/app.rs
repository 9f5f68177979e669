// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use cosmic::app::{Core, context_drawer};
use cosmic::cosmic_config;
use cosmic::iced::{Subscription, Task};
use cosmic::widget::{self, about::About, menu};
use cosmic::{Application, ApplicationExt, Apply, Element};

use crate::core::{
    api::CatalogApi,
    config::{APP_ID, AppTheme, Config},
    favorites::FavoritesStore,
    image_cache::ImageCache,
};
use crate::entities::{CatalogEntry, ItemDetail};
use crate::fl;
use crate::flags::Flags;

use app_menu::MenuAction;
use context_page::ContextPage;
use navigation::{Navigator, Route};
use pages::{CatalogPage, DetailPage, FavoritesPage, PaginationAction};

mod app_menu;
mod context_page;
mod navigation;
mod pages;
mod presentation;

const POKEAPI_URL: &str = "https://pokeapi.co";

/// This is the struct that represents your application.
/// It is used to define the data that will be used by your application.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// Contains items assigned to the about page
    about: About,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Handler to write the application configuration
    config_handler: Option<cosmic_config::Config>,
    /// Application configuration
    config: Config,
    /// Labels of the theme dropdown, same order as [`AppTheme::ALL`]
    theme_labels: Vec<String>,
    /// Client of the remote catalog
    api: CatalogApi,
    /// Persisted favorites
    favorites: FavoritesStore,
    /// Sprites downloaded during this session
    images: ImageCache,
    /// Screens the user went through
    navigator: Navigator,
    /// Catalog screen, always at the bottom of the navigation stack
    catalog: CatalogPage,
    /// Detail screen, while open
    detail: Option<DetailPage>,
    /// Favorites screen, while open
    favorites_page: Option<FavoritesPage>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    MenuAction(MenuAction),
    UpdateConfig(Config),
    UpdateTheme(usize),

    Navigate(Route),
    NavigateBack,

    CatalogLoaded(Result<Vec<CatalogEntry>, String>),
    RetryCatalog,
    Search(String),
    CatalogPage(PaginationAction),

    DetailLoaded(String, Result<Option<ItemDetail>, String>),
    RetryDetail,
    ToggleFavorite,

    ReloadFavorites,

    ImagesLoaded(Vec<(String, Result<Vec<u8>, String>)>),
}

impl Application for AppModel {
    type Executor = cosmic::executor::Default;

    type Flags = Flags;

    type Message = Message;

    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .version(env!("CARGO_PKG_VERSION"))
            .license(env!("CARGO_PKG_LICENSE"))
            .links([(fl!("pokeapi"), POKEAPI_URL)]);

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            key_binds: HashMap::new(),
            config_handler: flags.config_handler,
            config: flags.config,
            theme_labels: vec![fl!("match-desktop"), fl!("dark"), fl!("light")],
            api: flags.api,
            favorites: FavoritesStore::new(flags.storage),
            images: ImageCache::new(),
            navigator: Navigator::default(),
            catalog: CatalogPage::default(),
            detail: None,
            favorites_page: None,
        };

        let tasks = Task::batch([
            app.update_title(),
            cosmic::command::set_theme(app.config.app_theme.theme()),
            app.fetch_catalog(),
        ]);

        (app, tasks)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![
                    menu::Item::Button(fl!("about"), None, MenuAction::About),
                    menu::Item::Button(fl!("settings"), None, MenuAction::Settings),
                ],
            ),
        )]);

        let mut elements = vec![menu_bar.into()];

        if self.navigator.can_go_back() {
            elements.push(
                widget::button::icon(widget::icon::from_name("go-previous-symbolic"))
                    .on_press(Message::NavigateBack)
                    .into(),
            );
        }

        elements
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        match self.navigator.current() {
            Route::Catalog => vec![
                widget::button::icon(widget::icon::from_name("starred-symbolic"))
                    .on_press(Message::Navigate(Route::Favorites))
                    .into(),
            ],
            Route::Detail(_) | Route::Favorites => Vec::new(),
        }
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        self.context_page.display(self)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        match self.navigator.current() {
            Route::Catalog => pages::catalog::view(&self.catalog, &self.images, &self.config),
            Route::Detail(_) => match &self.detail {
                Some(page) => pages::detail::view(page, &self.images),
                None => presentation::status(fl!("pokemon-not-found"), None),
            },
            Route::Favorites => match &self.favorites_page {
                Some(page) => pages::favorites::view(page, &self.images, &self.config),
                None => presentation::status(fl!("loading"), None),
            },
        }
    }

    /// Watches the configuration so edits made elsewhere are applied live.
    fn subscription(&self) -> Subscription<Self::Message> {
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| {
                for why in update.errors {
                    tracing::error!(?why, "app config error");
                }

                Message::UpdateConfig(update.config)
            })
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::LaunchUrl(url) => {
                if let Err(err) = open::that_detached(&url) {
                    tracing::error!(%url, "failed to open url: {err}");
                }
            }
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    // Close the context drawer if the toggled context page is the same.
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    // Open the context drawer to display the requested context page.
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }
            Message::MenuAction(action) => match action {
                MenuAction::About => {
                    return self.update(Message::ToggleContextPage(ContextPage::About));
                }
                MenuAction::Settings => {
                    return self.update(Message::ToggleContextPage(ContextPage::Settings));
                }
            },
            Message::UpdateConfig(config) => {
                let theme_changed = config.app_theme != self.config.app_theme;
                self.config = config;

                let theme = if theme_changed {
                    cosmic::command::set_theme(self.config.app_theme.theme())
                } else {
                    Task::none()
                };
                return Task::batch([theme, self.load_images()]);
            }
            Message::UpdateTheme(index) => {
                let app_theme = AppTheme::from_index(index);

                match &self.config_handler {
                    Some(handler) => {
                        if let Err(err) = self.config.set_app_theme(handler, app_theme) {
                            tracing::error!("failed to save the theme: {err}");
                        }
                    }
                    None => self.config.app_theme = app_theme,
                }

                return cosmic::command::set_theme(self.config.app_theme.theme());
            }

            Message::Navigate(route) => return self.navigate(route),
            Message::NavigateBack => return self.navigate_back(),

            Message::CatalogLoaded(result) => {
                match &result {
                    Ok(entries) => tracing::info!(count = entries.len(), "catalog loaded"),
                    Err(err) => tracing::error!("failed to load the catalog: {err}"),
                }

                self.catalog.set_entries(result);
                return self.load_images();
            }
            Message::RetryCatalog => {
                self.catalog.retry();
                return self.fetch_catalog();
            }
            Message::Search(keyword) => {
                self.catalog.search(keyword);
                return self.load_images();
            }
            Message::CatalogPage(action) => {
                self.catalog.paginate(action, self.config.items_per_page());
                return self.load_images();
            }

            Message::DetailLoaded(name, result) => {
                match self.detail.as_mut() {
                    Some(page) if page.accepts(&name) => {
                        if let Err(err) = &result {
                            tracing::error!(%name, "failed to load the detail: {err}");
                        }
                        page.set_detail(result);
                    }
                    _ => {
                        tracing::debug!(%name, "discarding detail of a closed page");
                        return Task::none();
                    }
                }

                return self.load_images();
            }
            Message::RetryDetail => {
                if let Some(page) = self.detail.as_mut() {
                    page.retry();
                    let name = page.name().to_string();
                    return self.fetch_detail(name);
                }
            }
            Message::ToggleFavorite => {
                if let Some(page) = self.detail.as_mut() {
                    page.toggle_favorite(&self.favorites);
                }
            }

            Message::ReloadFavorites => {
                if let Some(page) = self.favorites_page.as_mut() {
                    page.reload(&self.favorites);
                }
                return self.load_images();
            }

            Message::ImagesLoaded(results) => {
                for (url, result) in results {
                    self.images.insert(url, result);
                }
            }
        }

        Task::none()
    }
}

impl AppModel {
    /// Settings page of the context drawer
    pub fn settings(&self) -> Element<'_, Message> {
        widget::settings::view_column(vec![
            widget::settings::section()
                .title(fl!("appearance"))
                .add(
                    widget::settings::item::builder(fl!("theme")).control(widget::dropdown(
                        self.theme_labels.as_slice(),
                        Some(self.config.app_theme.index()),
                        Message::UpdateTheme,
                    )),
                )
                .into(),
        ])
        .into()
    }

    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let header_title = match self.navigator.current() {
            Route::Catalog => fl!("catalog-title"),
            Route::Detail(_) => fl!("detail-title"),
            Route::Favorites => fl!("favorites-title"),
        };

        let window_title = window_title(&header_title);
        self.set_header_title(header_title);

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    fn fetch_catalog(&self) -> Task<cosmic::Action<Message>> {
        let api = self.api.clone();
        let limit = self.config.catalog_limit;

        Task::perform(
            async move {
                api.fetch_catalog(limit, 0)
                    .await
                    .map_err(|err| err.to_string())
            },
            |result| cosmic::Action::App(Message::CatalogLoaded(result)),
        )
    }

    fn fetch_detail(&self, name: String) -> Task<cosmic::Action<Message>> {
        let api = self.api.clone();

        Task::perform(
            async move {
                let result = api.fetch_detail(&name).await.map_err(|err| err.to_string());
                (name, result)
            },
            |(name, result)| cosmic::Action::App(Message::DetailLoaded(name, result)),
        )
    }

    /// Downloads the sprites of the current screen that were never requested
    fn load_images(&mut self) -> Task<cosmic::Action<Message>> {
        let urls = match self.navigator.current() {
            Route::Catalog => self.catalog.image_urls(self.config.items_per_page()),
            Route::Detail(_) => self
                .detail
                .as_ref()
                .map(DetailPage::image_urls)
                .unwrap_or_default(),
            Route::Favorites => self
                .favorites_page
                .as_ref()
                .map(FavoritesPage::image_urls)
                .unwrap_or_default(),
        };

        let missing = self.images.request(urls.iter().map(String::as_str));
        if missing.is_empty() {
            return Task::none();
        }

        let api = self.api.clone();
        Task::perform(
            async move { api.fetch_images(missing).await },
            |results| cosmic::Action::App(Message::ImagesLoaded(results)),
        )
    }

    /// Opens a screen, every screen reads its data when it is opened
    fn navigate(&mut self, route: Route) -> Task<cosmic::Action<Message>> {
        if !self.navigator.push(route.clone()) {
            return Task::none();
        }

        let fetch = match route {
            Route::Catalog => Task::none(),
            Route::Detail(name) => {
                self.detail = Some(DetailPage::new(name.clone(), &self.favorites));
                self.fetch_detail(name)
            }
            Route::Favorites => {
                self.favorites_page = Some(FavoritesPage::load(&self.favorites));
                Task::none()
            }
        };

        Task::batch([fetch, self.update_title(), self.load_images()])
    }

    /// Closes the current screen. A favorites screen that becomes visible again reads the
    /// stored list again, so toggles made in the closed detail screen show up.
    fn navigate_back(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(back) = self.navigator.back() else {
            return Task::none();
        };

        match back.closed {
            Route::Detail(_) => self.detail = None,
            Route::Favorites => self.favorites_page = None,
            Route::Catalog => {}
        }

        if back.reveals_favorites() {
            if let Some(page) = self.favorites_page.as_mut() {
                page.reload(&self.favorites);
            }
        }

        Task::batch([self.update_title(), self.load_images()])
    }
}

/// Title of the main window while `page` is shown
fn window_title(page: &str) -> String {
    fl!("window-title", app = fl!("app-title"), page = page)
}
