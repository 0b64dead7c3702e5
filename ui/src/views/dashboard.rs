use dioxus::prelude::*;

use crate::{
    components::AppHeader,
    core::view_state::ViewState,
    dashboard::{
        DashboardController, EmptyPanel, ErrorPanel, InfoBanner, LoadingPanel, SummaryCards,
        SyncFooter, TrendChart, WeeklyTable,
    },
};

/// The whole page. Loading and Error replace everything; Empty and Populated
/// sit inside the header, banner and footer.
#[component]
pub fn Dashboard() -> Element {
    let controller = use_context::<DashboardController>();
    let view = controller.view();

    let retry = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.refresh()
    };
    let refresh = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.refresh()
    };

    match view {
        ViewState::Loading => rsx! {
            LoadingPanel {}
        },
        ViewState::Error(failure) => rsx! {
            ErrorPanel { message: failure.message, on_retry: retry }
        },
        ViewState::Empty => rsx! {
            div { class: "dashboard",
                AppHeader { on_refresh: refresh }
                InfoBanner { bound: controller.bound() }
                main { class: "dashboard__main",
                    EmptyPanel {}
                }
                SyncFooter { last_sync: None }
            }
        },
        ViewState::Populated(rows) => {
            let last_sync = rows.first().map(|row| row.collected_at);
            let (card_rows, chart_rows) = (rows.clone(), rows.clone());
            rsx! {
                div { class: "dashboard",
                    AppHeader { on_refresh: refresh }
                    InfoBanner { bound: controller.bound() }
                    main { class: "dashboard__main",
                        SummaryCards { rows: card_rows }
                        TrendChart { rows: chart_rows }
                        WeeklyTable { rows }
                    }
                    SyncFooter { last_sync }
                }
            }
        }
    }
}
