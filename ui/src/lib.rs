//! Shared UI crate for Bernalytics: the dashboard, its derived metrics and the
//! localized page chrome. Host crates (web, desktop) only configure and launch.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_header;
    pub use app_header::AppHeader;
}

/// Terminal theme shared by every host, inlined through `document::Style`.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");
