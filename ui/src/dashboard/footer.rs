use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{core::format::format_sync_stamp, t};

/// `last_sync` is the newest row's collection time; absent when nothing is loaded.
#[component]
pub fn SyncFooter(last_sync: Option<OffsetDateTime>) -> Element {
    let sync = last_sync.map(|stamp| t!("footer-last-sync", stamp = format_sync_stamp(stamp)));

    rsx! {
        footer { class: "sync-footer",
            p { class: "sync-footer__title", {t!("footer-title")} }
            p { class: "sync-footer__status",
                {t!("footer-auto-update")}
                if let Some(sync) = sync {
                    " · {sync}"
                }
            }
            p { class: "sync-footer__credits", {t!("footer-credits")} }
        }
    }
}
