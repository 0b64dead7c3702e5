//! Localization for `bernalytics-ui`.
//!
//! Fluent bundles are embedded at compile time with `rust-embed` and looked up
//! through the shared [`LOADER`]:
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/bernalytics-ui.ftl   (fallback/reference)
//!   de-DE/bernalytics-ui.ftl
//! ```
//!
//! Call [`init`] once before rendering (it is idempotent), then use `t!`:
//! ```ignore
//! let title = t!("app-title");
//! let badge = t!("card-week-of", date = "Jan 8, 2024");
//! ```
//!
//! To add a locale, copy `en-US/bernalytics-ui.ftl` to `i18n/<lang-id>/`,
//! translate every value keeping IDs and placeholders identical, and run the
//! completeness tests.
//!
//! Desktop requests the OS locale list; the web build asks `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Translation macro routing every lookup through [`LOADER`].
///
/// ```ignore
/// t!("header-refresh")
/// t!("chart-displaying", weeks = 12)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; every locale ships `i18n/<lang>/{DOMAIN}.ftl`.
const DOMAIN: &str = "bernalytics-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, langid!("en-US")));

static INIT: Once = Once::new();

/// Load bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "couldn't select requested languages, using fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert_eq!(langs, vec!["de-DE".to_string(), "en-US".to_string()]);
    }

    fn loader_for(lang: LanguageIdentifier) -> FluentLanguageLoader {
        let loader = FluentLanguageLoader::new(DOMAIN, langid!("en-US"));
        i18n_embed::select(&loader, &Localizations, &[lang]).expect("select bundle");
        loader
    }

    #[test]
    fn fallback_bundle_resolves_keys() {
        let loader = loader_for(langid!("en-US"));
        assert_eq!(loader.get("app-title"), "> BERNALYTICS_");
    }

    #[test]
    fn german_bundle_translates_labels() {
        let loader = loader_for(langid!("de-DE"));
        assert_eq!(loader.get("header-refresh"), "> DATEN_AKTUALISIEREN");
        assert_eq!(loader.get("table-sum"), "SUMME");
    }

    #[test]
    fn unparseable_tag_is_ignored() {
        init();
        assert!(set_language("not a tag!").is_ok());
    }
}
