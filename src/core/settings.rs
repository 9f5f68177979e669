// SPDX-License-Identifier: GPL-3.0-only

use cosmic::{
    app::Settings,
    iced::{Limits, Size},
};

pub fn init() -> Settings {
    init_logging();
    get_app_settings()
}

pub fn get_app_settings() -> Settings {
    let mut settings = Settings::default();

    settings = settings.size_limits(Limits::NONE.min_width(420.0).min_height(300.0));
    settings = settings.size(Size::new(900.0, 800.0));
    settings = settings.debug(false);
    settings
}

/// Installs the log subscriber, filtered by `RUST_LOG` (defaults to `warn,pokeshelf=info`)
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,pokeshelf=info"));

    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("failed to install the log subscriber: {err}");
    }
}
