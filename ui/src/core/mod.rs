//! Platform-agnostic dashboard logic: derived metrics, chart geometry,
//! formatting and the view state machine.

pub mod chart;
pub mod format;
pub mod metrics;
pub mod view_state;
