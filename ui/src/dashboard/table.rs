use api::WeeklyJobRow;
use dioxus::prelude::*;

use crate::{
    core::{format, metrics},
    t,
};

/// Every returned week, newest first, with the three-category sum.
#[component]
pub fn WeeklyTable(rows: Vec<WeeklyJobRow>) -> Element {
    let entries = metrics::table_rows(&rows);

    rsx! {
        section { class: "dashboard-card weekly-table",
            div { class: "dashboard-card__header dashboard-card__header--blue",
                h2 { {t!("table-title")} }
            }
            div { class: "weekly-table__scroll",
                table { class: "weekly-table__grid",
                    thead {
                        tr {
                            th { class: "weekly-table__head weekly-table__head--green", {t!("table-week")} }
                            th { class: "weekly-table__head weekly-table__head--blue", {t!("table-data-engineer")} }
                            th { class: "weekly-table__head weekly-table__head--green", {t!("table-junior")} }
                            th { class: "weekly-table__head weekly-table__head--amber", {t!("table-senior")} }
                            th { class: "weekly-table__head weekly-table__head--purple", {t!("table-sum")} }
                        }
                    }
                    tbody {
                        for entry in entries.into_iter() {
                            tr {
                                key: "{entry.id}",
                                class: if entry.is_latest { "weekly-table__row weekly-table__row--latest" } else { "weekly-table__row" },
                                td { class: "weekly-table__cell", "{format::format_week_long(entry.week)}" }
                                td { class: "weekly-table__cell weekly-table__cell--blue", "{entry.data_engineer}" }
                                td { class: "weekly-table__cell weekly-table__cell--green", "{entry.junior}" }
                                td { class: "weekly-table__cell weekly-table__cell--amber", "{entry.senior}" }
                                td { class: "weekly-table__cell weekly-table__cell--purple", "{entry.sum}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
