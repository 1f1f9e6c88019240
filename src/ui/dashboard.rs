use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::data::aggregate::{self, Summary};
use crate::state::AppState;

/// Window used by the trend metric card.
const TREND_WINDOW_DAYS: u32 = 30;

/// How many records the recent-feedback feed shows.
const RECENT_FEED_LEN: usize = 5;

// ---------------------------------------------------------------------------
// Central panel – metric cards, charts, recent feedback
// ---------------------------------------------------------------------------

/// Render the dashboard in the central panel.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let summary = aggregate::summarize(&state.feedback, &state.visible);

    metric_row(ui, state, &summary);
    ui.separator();

    if state.visible.is_empty() {
        ui.add_space(12.0);
        ui.label("No feedback data to display for this filter.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Ratings Over Time");
            ratings_over_time(ui, state);
            ui.add_space(8.0);

            ui.heading("Feedback by Service");
            service_bars(ui, state);
            ui.add_space(8.0);

            ui.heading("Recent Feedback");
            recent_feed(ui, state);
        });
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

fn metric_row(ui: &mut Ui, state: &AppState, summary: &Summary) {
    let trend = aggregate::trend_vs_previous(&state.feedback, &state.visible, TREND_WINDOW_DAYS);
    let trend_text = match trend {
        Some(pct) => format!("{pct:+.0}%"),
        None => "—".to_string(),
    };

    ui.columns(4, |cols: &mut [Ui]| {
        metric_card(
            &mut cols[0],
            "Average Rating",
            format!("{:.1} ★", summary.average_rating),
        );
        metric_card(&mut cols[1], "Feedback Received", summary.count.to_string());
        metric_card(&mut cols[2], "NPS", summary.net_promoter_score.to_string());
        metric_card(&mut cols[3], "Trend (30 days)", trend_text);
    });
}

fn metric_card(ui: &mut Ui, title: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(title).small().weak());
            ui.label(RichText::new(value).size(22.0).strong());
        });
    });
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

fn ratings_over_time(ui: &mut Ui, state: &AppState) {
    let series = aggregate::ratings_by_date(&state.feedback, &state.visible);

    let points: PlotPoints = series
        .iter()
        .map(|&(date, mean)| [date_to_x(date), mean])
        .collect();

    Plot::new("ratings_over_time")
        .height(220.0)
        .y_axis_label("Mean rating")
        .include_y(2.5)
        .include_y(5.2)
        .x_axis_formatter(|mark, _range| x_to_date_label(mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).color(Color32::LIGHT_BLUE).width(1.5));
        });
}

fn service_bars(ui: &mut Ui, state: &AppState) {
    let series = aggregate::ratings_by_service(&state.feedback, &state.visible);

    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, (service, mean))| {
            Bar::new(i as f64, *mean)
                .width(0.6)
                .fill(state.colors.color_for(service))
                .name(service)
        })
        .collect();

    let labels: Vec<String> = series.iter().map(|(service, _)| service.clone()).collect();

    Plot::new("service_bars")
        .height(220.0)
        .y_axis_label("Mean rating")
        .include_y(0.0)
        .include_y(5.2)
        .x_axis_formatter(move |mark, _range| {
            // Only integer positions carry a bar.
            let i = mark.value.round();
            if i < 0.0 || (mark.value - i).abs() > 0.05 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn date_to_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn x_to_date_label(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Recent feedback feed
// ---------------------------------------------------------------------------

fn recent_feed(ui: &mut Ui, state: &AppState) {
    let recent = aggregate::top_recent(&state.feedback, &state.visible, RECENT_FEED_LEN);

    for idx in recent {
        let record = &state.feedback.records[idx];
        ui.group(|ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.label(
                    RichText::new(&record.service)
                        .strong()
                        .color(state.colors.color_for(&record.service)),
                );
                ui.label(record.date.format("%Y-%m-%d").to_string());
                ui.label(
                    RichText::new("★".repeat(record.rating as usize)).color(Color32::GOLD),
                );
            });
            ui.label(RichText::new(&record.comment).italics());
        });
    }
}
