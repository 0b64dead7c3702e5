use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use tracing::warn;

/// Page header: brand, tagline, refresh control and the locale switcher.
/// Only rendered once a load has settled; `Loading` takes over the whole page.
///
/// The language switch goes through the `Signal<String>` language code the host
/// provides as context. Hosts key their subtree on that signal, so every
/// localized string is re-rendered after a switch.
#[component]
pub fn AppHeader(on_refresh: EventHandler<MouseEvent>) -> Element {
    i18n::init();

    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current_lang = lang_code_ctx
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string());

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(lang = %val, error = %err, "language switch failed"),
        }
    };

    rsx! {
        header { id: "app-header", class: "app-header",
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    h1 { class: "app-header__title", {t!("app-title")} }
                    span { class: "app-header__tagline", {t!("tagline")} }
                }

                div { class: "app-header__actions",
                    if show_switcher {
                        div { class: "app-header__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("header-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang}",
                                oninput: on_change,
                                for code in langs().into_iter() {
                                    option { key: "{code}", value: "{code}", selected: code == current_lang, "{code}" }
                                }
                            }
                        }
                    }
                    button {
                        class: "app-header__refresh",
                        r#type: "button",
                        onclick: move |evt| on_refresh.call(evt),
                        {t!("header-refresh")}
                    }
                }
            }
        }
    }
}
