// src/ui/charts.rs
use anyhow::{bail, Result};
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::analysis::normalize::{CategoryBreakdown, SentimentDistribution};
use crate::analysis::TrendSeries;
use super::color;

const CHART_HEIGHT: f32 = 220.0;

pub fn sentiment_chart(ui: &mut egui::Ui, distribution: &SentimentDistribution) -> Result<()> {
    if distribution.entries.is_empty() {
        bail!("no sentiment labels configured");
    }

    // One chart per label so the legend names each color
    let charts: Vec<BarChart> = distribution.entries.iter()
        .enumerate()
        .map(|(i, entry)| {
            let bar = Bar::new(i as f64, entry.count as f64)
                .name(entry.label.as_str())
                .width(0.6);
            BarChart::new(vec![bar])
                .name(entry.label.as_str())
                .color(color(entry.label.rgb()))
        })
        .collect();

    Plot::new("sentiment_distribution")
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .show_axes([false, true])
        .legend(Legend::default())
        .include_y(0.0)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });

    ui.horizontal_wrapped(|ui| {
        for entry in &distribution.entries {
            ui.colored_label(color(entry.label.rgb()), format!("{}: {}", entry.label, entry.count));
        }
    });

    Ok(())
}

pub fn category_chart(ui: &mut egui::Ui, breakdown: &CategoryBreakdown) -> Result<()> {
    if breakdown.defaulted {
        ui.weak("No category data in this analysis.");
    } else if breakdown.entries.is_empty() {
        ui.weak("No categories reported.");
    }

    let charts: Vec<BarChart> = breakdown.entries.iter()
        .enumerate()
        .map(|(i, share)| {
            let bar = Bar::new(i as f64, share.percent)
                .name(&share.name)
                .width(0.6);
            BarChart::new(vec![bar])
                .name(&share.name)
                .color(color(share.color))
        })
        .collect();

    Plot::new("feedback_categories")
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .show_axes([false, true])
        .legend(Legend::default())
        .include_y(0.0)
        .include_y(100.0)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });

    ui.add_space(8.0);
    for share in &breakdown.entries {
        ui.horizontal(|ui| {
            ui.colored_label(color(share.color), "■");
            ui.add_sized([140.0, 18.0], egui::Label::new(&share.name));
            ui.add(
                egui::ProgressBar::new((share.percent / 100.0) as f32)
                    .fill(color(share.color))
                    .text(format!("{:.1}%", share.percent)),
            );
        });
    }

    Ok(())
}

/// Stacked bars, one bucket per date, one layer per sentiment label.
pub fn trend_chart(ui: &mut egui::Ui, trend: &TrendSeries) -> Result<()> {
    if !trend.is_aligned() {
        bail!("trend series do not line up with {} date buckets", trend.dates.len());
    }
    if trend.is_empty() {
        ui.weak("No trend data for this period.");
        return Ok(());
    }

    let mut charts: Vec<BarChart> = Vec::with_capacity(trend.series.len());
    for (label, values) in &trend.series {
        let bars = values.iter()
            .zip(&trend.dates)
            .enumerate()
            .map(|(i, (count, date))| {
                Bar::new(i as f64, *count as f64)
                    .name(date)
                    .width(0.8)
            })
            .collect();

        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(label.as_str())
            .color(color(label.rgb()))
            .stack_on(&below);
        charts.push(chart);
    }

    Plot::new("sentiment_trends")
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .legend(Legend::default())
        .include_y(0.0)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });

    if let (Some(first), Some(last)) = (trend.dates.first(), trend.dates.last()) {
        ui.horizontal(|ui| {
            ui.weak(first);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(last);
            });
        });
    }

    Ok(())
}
