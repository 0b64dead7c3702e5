#![cfg(test)]
//! Theme selector lint for the desktop build.
//!
//! The desktop window inlines `ui/assets/theme/main.css`, so a renamed or dropped
//! class only shows up as missing styling at runtime. This checks that every
//! structural class the dashboard components emit still has a rule.
//!
//! When you rename a class in a component, update the markup, the theme and
//! `REQUIRED_SELECTORS` together.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".visually-hidden",
    ".dashboard__main",
    // Header
    ".app-header__title",
    ".app-header__tagline",
    ".app-header__refresh",
    ".app-header__locale",
    // Banner
    ".info-banner__box--blue",
    ".info-banner__box--green",
    ".info-banner__box--amber",
    // Load states
    ".state-panel--loading",
    ".state-panel--error",
    ".state-panel__spinner",
    ".state-panel__button",
    ".state-panel__command",
    // Summary cards
    ".summary-card__value",
    ".summary-card__delta--up",
    ".summary-card__delta--down",
    ".summary-card__badge",
    // Trend chart
    ".trend-chart__grid",
    ".trend-chart__line",
    ".trend-chart__series--blue",
    ".trend-chart__series--green",
    ".trend-chart__series--amber",
    ".trend-chart__tooltip",
    ".trend-chart__legend-swatch--blue",
    ".trend-chart__empty",
    // Weekly table
    ".weekly-table__grid",
    ".weekly-table__row--latest",
    ".weekly-table__cell--purple",
    // Footer
    ".sync-footer__status",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn every_category_tone_is_styled_everywhere() {
    for tone in ["blue", "green", "amber"] {
        for block in ["summary-card", "trend-chart__series", "weekly-table__cell"] {
            let selector = format!(".{block}--{tone}");
            assert!(THEME_CSS.contains(&selector), "missing {selector}");
        }
    }
}

#[test]
fn tooltips_only_show_on_hover() {
    assert!(THEME_CSS.contains(".trend-chart__point:hover .trend-chart__tooltip"));
}
