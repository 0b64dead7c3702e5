#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};
use directories::ProjectDirs;

use api::RowStoreConfig;
use ui::dashboard::{register_config, DashboardController, DashboardSource};
use ui::views::Dashboard;
use ui::THEME_CSS;

fn main() {
    let config_path = config_file();
    let config = match &config_path {
        Some(path) => RowStoreConfig::from_file_and_env(path),
        None => RowStoreConfig::from_env(),
    };
    let level = config.as_ref().map(|c| c.log_level).unwrap_or(Level::INFO);
    dioxus_logger::init(level).expect("failed to init logger");

    match &config {
        Ok(config) => info!(?config, path = ?config_path, "row store configured"),
        Err(err) => error!(error = %err, path = ?config_path, "row store is not configured"),
    }
    register_config(config);

    launch_app();
}

/// `config.toml` in the platform config directory, e.g.
/// `~/.config/bernalytics/config.toml` on Linux.
fn config_file() -> Option<PathBuf> {
    ProjectDirs::from("dev", "Bernalytics", "bernalytics")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(feature = "desktop")]
fn launch_app() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Bernalytics – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code signal; the header updates it on selection.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    let controller = use_hook(|| {
        let controller = DashboardController::new(DashboardSource::registered());
        controller.initialize();
        controller
    });
    use_context_provider(|| controller);

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline the embedded theme (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS}" }

        // Keyed on the language so the whole dashboard remounts with fresh strings.
        div {
            key: "{lang_code()}",
            Dashboard {}
        }
    }
}
