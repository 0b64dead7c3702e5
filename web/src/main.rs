use dioxus::prelude::*;
use dioxus_logger::tracing::{error, Level};

use api::RowStoreConfig;
use ui::dashboard::{register_config, DashboardController, DashboardSource};
use ui::views::Dashboard;
use ui::THEME_CSS;

fn main() {
    // In the browser only the values baked in at build time are visible.
    let config = RowStoreConfig::from_env();
    let level = config.as_ref().map(|c| c.log_level).unwrap_or(Level::INFO);
    dioxus_logger::init(level).expect("failed to init logger");

    if let Err(err) = &config {
        error!(error = %err, "row store is not configured");
    }
    register_config(config);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; the header writes it, the keyed wrapper below remounts on change.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    let controller = use_hook(|| {
        let controller = DashboardController::new(DashboardSource::registered());
        controller.initialize();
        controller
    });
    use_context_provider(|| controller);

    rsx! {
        document::Title { "Bernalytics" }
        document::Style { "{THEME_CSS}" }

        div {
            key: "{lang_code()}",
            Dashboard {}
        }
    }
}
