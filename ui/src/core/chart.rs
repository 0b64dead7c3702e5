//! Chart-ready series and plot geometry for the trend chart.
//!
//! Rows arrive newest first; the chart reads left to right in time, so the
//! series here are built from the reversed sequence.

use api::{JobCategory, WeeklyJobRow};
use time::Date;

use super::format::format_week_axis;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub category: JobCategory,
    pub values: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendData {
    /// Oldest week first.
    pub weeks: Vec<Date>,
    pub labels: Vec<String>,
    pub series: Vec<TrendSeries>,
}

impl TrendData {
    pub fn from_rows(rows_newest_first: &[WeeklyJobRow]) -> Self {
        let chronological: Vec<&WeeklyJobRow> = rows_newest_first.iter().rev().collect();

        let weeks = chronological.iter().map(|row| row.week_starting).collect::<Vec<_>>();
        let labels = weeks.iter().copied().map(format_week_axis).collect();
        let series = JobCategory::ALL
            .iter()
            .map(|&category| TrendSeries {
                category,
                values: chronological.iter().map(|row| category.count(row)).collect(),
            })
            .collect();

        Self {
            weeks,
            labels,
            series,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn max_value(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Number of horizontal intervals on the y axis (five gridlines including zero).
pub const Y_INTERVALS: u32 = 4;

/// Top of the y axis for `step`. Widened so the largest counts still fit.
pub fn y_ceiling(step: u32) -> u64 {
    u64::from(step) * u64::from(Y_INTERVALS)
}

/// Smallest "round" step so that `Y_INTERVALS * step >= max`.
pub fn nice_step(max: u32) -> u32 {
    let raw = f64::from(max) / f64::from(Y_INTERVALS);
    if raw <= 1.0 {
        return 1;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    for factor in [1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0] {
        let step = (factor * magnitude).ceil();
        if step >= raw {
            return step as u32;
        }
    }
    (10.0 * magnitude) as u32
}

/// Pixel layout of the plot area inside the SVG viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            left: 64.0,
            right: 24.0,
            top: 20.0,
            bottom: 80.0,
        }
    }
}

impl ChartLayout {
    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    /// A lone point sits in the middle.
    pub fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            self.left + self.plot_width() / 2.0
        } else {
            self.left + self.plot_width() * index as f64 / (count - 1) as f64
        }
    }

    pub fn y(&self, value: u32, ceiling: u64) -> f64 {
        self.y_at(f64::from(value), ceiling)
    }

    fn y_at(&self, value: f64, ceiling: u64) -> f64 {
        self.top + self.plot_height() * (1.0 - value / ceiling.max(1) as f64)
    }

    /// SVG path data for one series.
    pub fn path(&self, values: &[u32], ceiling: u64) -> String {
        values
            .iter()
            .enumerate()
            .map(|(idx, &value)| {
                let cmd = if idx == 0 { 'M' } else { 'L' };
                format!(
                    "{cmd}{:.1},{:.1}",
                    self.x(idx, values.len()),
                    self.y(value, ceiling)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `(value, y)` for each gridline, zero first.
    pub fn y_ticks(&self, step: u32) -> Vec<(u64, f64)> {
        let ceiling = y_ceiling(step);
        (0..=u64::from(Y_INTERVALS))
            .map(|i| {
                let value = u64::from(step) * i;
                (value, self.y_at(value as f64, ceiling))
            })
            .collect()
    }
}

/// Show every n-th x label so roughly a dozen fit.
pub fn label_stride(count: usize) -> usize {
    count.div_ceil(13).max(1)
}
