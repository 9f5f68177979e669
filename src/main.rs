// SPDX-License-Identifier: GPL-3.0-only

mod app;
mod core;
mod entities;
mod flags;
mod utils;

fn main() -> Result<(), anywho::Error> {
    let settings = core::settings::init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    core::localization::init(&requested_languages);

    let flags = flags::flags()?;

    // Starts the application's event loop with the flags.
    cosmic::app::run::<app::AppModel>(settings, flags)
        .map_err(|err| anywho::anywho!("application error: {err}"))
}
