use api::WeeklyJobRow;
use dioxus::prelude::*;

use crate::{
    core::chart::{label_stride, nice_step, y_ceiling, ChartLayout, TrendData},
    dashboard::{category_tone, series_label},
    t,
};

#[derive(Clone, PartialEq)]
struct SeriesView {
    tone: &'static str,
    label: String,
    path: String,
    points: Vec<PointView>,
}

#[derive(Clone, PartialEq)]
struct PointView {
    cx: String,
    cy: String,
    tooltip: String,
}

/// Time-series panel: one line per category, oldest week on the left.
#[component]
pub fn TrendChart(rows: Vec<WeeklyJobRow>) -> Element {
    let weeks_shown = rows.len();
    let trend = TrendData::from_rows(&rows);

    rsx! {
        section { class: "dashboard-card trend-chart",
            div { class: "dashboard-card__header",
                h2 { {t!("chart-title")} }
                span { class: "dashboard-card__meta", {t!("chart-displaying", weeks = weeks_shown)} }
            }
            ul { class: "trend-chart__notes",
                li { {t!("chart-note-points")} }
                li { {t!("chart-note-collection")} }
                li { {t!("chart-note-trend")} }
            }

            if trend.is_empty() {
                div { class: "trend-chart__empty", {t!("chart-no-data")} }
            } else {
                {render_plot(&trend)}
            }
        }
    }
}

fn render_plot(trend: &TrendData) -> Element {
    let layout = ChartLayout::default();
    let step = nice_step(trend.max_value());
    let ceiling = y_ceiling(step);
    let count = trend.weeks.len();
    let stride = label_stride(count);

    let view_box = format!("0 0 {} {}", layout.width, layout.height);
    let plot_left = format!("{:.1}", layout.left);
    let plot_right = format!("{:.1}", layout.width - layout.right);
    let tick_x = format!("{:.1}", layout.left - 8.0);
    let axis_y = layout.top + layout.plot_height();

    let gridlines: Vec<(u64, String)> = layout
        .y_ticks(step)
        .into_iter()
        .map(|(value, y)| (value, format!("{y:.1}")))
        .collect();

    let x_labels: Vec<(String, String)> = trend
        .labels
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx % stride == 0)
        .map(|(idx, label)| {
            let x = layout.x(idx, count);
            let y = axis_y + 16.0;
            (format!("translate({x:.1},{y:.1}) rotate(-45)"), label.clone())
        })
        .collect();

    let lines: Vec<SeriesView> = trend
        .series
        .iter()
        .map(|series| {
            let label = series_label(series.category);
            let points = series
                .values
                .iter()
                .enumerate()
                .map(|(idx, &value)| PointView {
                    cx: format!("{:.1}", layout.x(idx, count)),
                    cy: format!("{:.1}", layout.y(value, ceiling)),
                    tooltip: t!("chart-tooltip", series = label.clone(), value = value),
                })
                .collect();
            SeriesView {
                tone: category_tone(series.category),
                label,
                path: layout.path(&series.values, ceiling),
                points,
            }
        })
        .collect();

    let axis_label_transform = format!(
        "translate(16,{:.1}) rotate(-90)",
        layout.top + layout.plot_height() / 2.0
    );

    rsx! {
        svg {
            class: "trend-chart__svg",
            view_box: "{view_box}",
            preserve_aspect_ratio: "xMidYMid meet",
            role: "img",

            g { class: "trend-chart__grid",
                for (value, y) in gridlines.into_iter() {
                    line { x1: "{plot_left}", x2: "{plot_right}", y1: "{y}", y2: "{y}" }
                    text {
                        class: "trend-chart__tick",
                        x: "{tick_x}",
                        y: "{y}",
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        "{value}"
                    }
                }
            }

            text {
                class: "trend-chart__axis-label",
                transform: "{axis_label_transform}",
                text_anchor: "middle",
                {t!("chart-axis-label")}
            }

            g { class: "trend-chart__weeks",
                for (transform, label) in x_labels.into_iter() {
                    text { class: "trend-chart__tick", transform: "{transform}", text_anchor: "end", "{label}" }
                }
            }

            for line in lines.iter() {
                g { class: "trend-chart__series trend-chart__series--{line.tone}",
                    path { class: "trend-chart__line", d: "{line.path}" }
                    for point in line.points.iter() {
                        g { class: "trend-chart__point",
                            circle { cx: "{point.cx}", cy: "{point.cy}", r: "4" }
                            text {
                                class: "trend-chart__tooltip",
                                x: "{point.cx}",
                                y: "{point.cy}",
                                dy: "-12",
                                text_anchor: "middle",
                                "{point.tooltip}"
                            }
                        }
                    }
                }
            }
        }

        div { class: "trend-chart__legend",
            for line in lines.iter() {
                span { class: "trend-chart__legend-item",
                    span { class: "trend-chart__legend-swatch trend-chart__legend-swatch--{line.tone}" }
                    "[ {line.label} ]"
                }
            }
        }
    }
}
