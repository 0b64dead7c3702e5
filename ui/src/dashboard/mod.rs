//! The Bernalytics dashboard: row loading, the controller that owns view state,
//! and the components that render each state.

mod banner;
mod cards;
mod chart;
mod footer;
pub mod loader;
mod panels;
pub mod source;
mod table;
mod utils;

use std::rc::Rc;

use api::HistoryBound;
use dioxus::prelude::*;
use tracing::debug;

use crate::core::view_state::{DashboardState, ViewState};

pub use banner::InfoBanner;
pub use cards::SummaryCards;
pub use chart::TrendChart;
pub use footer::SyncFooter;
pub use panels::{EmptyPanel, ErrorPanel, LoadingPanel, INGEST_COMMAND};
pub use source::{register_config, DashboardSource};
pub use table::WeeklyTable;
pub(crate) use utils::*;

/// Owns the dashboard's view state and starts loads.
///
/// Hosts build one at the root, call [`DashboardController::initialize`] once,
/// and provide it as context for [`crate::views::Dashboard`].
#[derive(Clone)]
pub struct DashboardController {
    state: Signal<DashboardState>,
    source: Rc<DashboardSource>,
}

impl DashboardController {
    /// Must be called inside a component scope (the state is a signal).
    pub fn new(source: DashboardSource) -> Self {
        Self {
            state: Signal::new(DashboardState::default()),
            source: Rc::new(source),
        }
    }

    /// Kick off the first load.
    pub fn initialize(&self) {
        self.refresh();
    }

    /// Back to `Loading` and fetch again. Ignored while a load is in flight.
    pub fn refresh(&self) {
        let mut state = self.state;
        let Some(ticket) = state.with_mut(DashboardState::begin_load) else {
            debug!("refresh ignored, a load is already in flight");
            return;
        };

        let source = Rc::clone(&self.source);
        // Root-scoped so the load survives the view subtree remounting on a language switch.
        spawn_forever(async move {
            let query = source.query_for(loader::today());
            let outcome = loader::load_rows(&*source, &query).await;
            if !state.with_mut(|state| state.finish(ticket, outcome)) {
                debug!(?ticket, "discarded a stale load result");
            }
        });
    }

    pub fn state(&self) -> Signal<DashboardState> {
        self.state
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> ViewState {
        self.state.read().view().clone()
    }

    pub fn bound(&self) -> HistoryBound {
        self.source.bound()
    }
}
