use api::HistoryBound;
use dioxus::prelude::*;

use crate::t;

/// Where the numbers come from and which weeks are shown.
#[component]
pub fn InfoBanner(bound: HistoryBound) -> Element {
    let range = match bound {
        HistoryBound::SinceOneYear => t!("banner-range-year"),
        HistoryBound::LatestWeeks(weeks) => t!("banner-range-weeks", weeks = weeks),
    };

    rsx! {
        section { class: "info-banner",
            div { class: "info-banner__box info-banner__box--blue",
                span { class: "info-banner__title", {t!("banner-source-title")} }
                p { class: "info-banner__body", {t!("banner-source-body")} }
                p { class: "info-banner__detail", {t!("banner-source-detail")} }
            }
            div { class: "info-banner__box info-banner__box--green",
                span { class: "info-banner__title", {t!("banner-postings-title")} }
                p { class: "info-banner__body", {t!("banner-postings-body")} }
                p { class: "info-banner__detail", {t!("banner-postings-detail")} }
            }
            div { class: "info-banner__box info-banner__box--amber",
                span { class: "info-banner__title", {t!("banner-range-title")} }
                p { class: "info-banner__body", "{range}" }
                p { class: "info-banner__detail", {t!("banner-range-detail")} }
            }
        }
    }
}
