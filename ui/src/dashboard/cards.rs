use api::WeeklyJobRow;
use dioxus::prelude::*;

use crate::{
    core::{
        format,
        metrics::{self, SummaryCard},
    },
    dashboard::{category_title, category_tone},
    t,
};

/// Latest value per category with its week-over-week change, when there is one.
#[component]
pub fn SummaryCards(rows: Vec<WeeklyJobRow>) -> Element {
    let cards = metrics::summary_cards(&rows);

    rsx! {
        section { class: "summary-cards",
            for card in cards.into_iter() {
                {render_card(card)}
            }
        }
    }
}

fn render_card(card: SummaryCard) -> Element {
    let SummaryCard {
        category,
        value,
        change,
        week,
    } = card;

    let title = category_title(category);
    let tone = category_tone(category);
    let badge = t!("card-week-of", date = format::format_week_long(week));
    let delta = change.map(|wow| {
        let direction = if wow.is_increase() { "up" } else { "down" };
        (direction, format::format_change(&wow))
    });

    rsx! {
        article { key: "{tone}", class: "summary-card summary-card--{tone}",
            h3 { class: "summary-card__title", "{title}" }
            div { class: "summary-card__figures",
                strong { class: "summary-card__value", "{value}" }
                if let Some((direction, text)) = delta {
                    span { class: "summary-card__delta summary-card__delta--{direction}", "{text}" }
                }
            }
            span { class: "summary-card__badge", "{badge}" }
        }
    }
}
