//! The four-way display state and the load bookkeeping around it.
//!
//! Loads are serialized: while one is in flight, further refresh requests are
//! ignored. Each load also carries a ticket, and only the current ticket may
//! resolve, so a stale completion can never overwrite newer state.

use api::{LoadError, WeeklyJobRow};

/// User-facing load failure. Only the message survives to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub message: String,
}

impl LoadFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<LoadError> for LoadFailure {
    fn from(err: LoadError) -> Self {
        Self::new(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(LoadFailure),
    Empty,
    /// Always at least one row, newest first.
    Populated(Vec<WeeklyJobRow>),
}

impl ViewState {
    pub fn from_outcome(outcome: Result<Vec<WeeklyJobRow>, LoadFailure>) -> Self {
        match outcome {
            Ok(rows) if rows.is_empty() => Self::Empty,
            Ok(rows) => Self::Populated(rows),
            Err(failure) => Self::Error(failure),
        }
    }

    pub fn rows(&self) -> &[WeeklyJobRow] {
        match self {
            Self::Populated(rows) => rows,
            _ => &[],
        }
    }
}

/// Identifies one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    view: ViewState,
    current: u64,
    in_flight: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            view: ViewState::Loading,
            current: 0,
            in_flight: false,
        }
    }
}

impl DashboardState {
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ViewState::Loading)
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Enter `Loading` and hand out a ticket, unless a load is already running.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.in_flight {
            return None;
        }
        self.current += 1;
        self.in_flight = true;
        self.view = ViewState::Loading;
        Some(LoadTicket(self.current))
    }

    /// Apply a load outcome. Returns `false` if the ticket was stale and nothing changed.
    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<WeeklyJobRow>, LoadFailure>,
    ) -> bool {
        if !self.in_flight || ticket.0 != self.current {
            return false;
        }
        self.in_flight = false;
        self.view = ViewState::from_outcome(outcome);
        true
    }
}
