use anyhow::Context as _;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::data::aggregate::{ratings_by_service, summarize};
use crate::data::export;
use crate::data::model::FeedbackSet;
use crate::state::{AppState, DateFilterMode};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered) ----
    let logo = egui::include_image!("../../assets/logo.png");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(logo)
                .max_width(ui.available_width() * 0.8)
                .max_height(80.0)
                .rounding(4.0),
        );
    });
    ui.add_space(4.0);

    ui.heading("Filters");
    ui.separator();

    // Clone the index so we can mutate state inside the loop.
    let services = state.feedback.services.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Service filter ----
            let n_selected = state.filters.services.len();
            let header_text = format!("Service  ({n_selected}/{})", services.len());

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_services();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_services();
                        }
                    });

                    for service in &services {
                        let mut checked = state.filters.services.contains(service);
                        let text =
                            RichText::new(service).color(state.colors.color_for(service));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_service(service);
                        }
                    }
                });

            ui.separator();

            // ---- Date range ----
            ui.strong("Date range");
            let mut dates_changed = false;

            egui::ComboBox::from_id_salt("date_mode")
                .selected_text(mode_label(state.date_mode))
                .show_ui(ui, |ui: &mut Ui| {
                    for mode in [
                        DateFilterMode::AllDates,
                        DateFilterMode::SingleDay,
                        DateFilterMode::Between,
                    ] {
                        if ui
                            .selectable_label(state.date_mode == mode, mode_label(mode))
                            .clicked()
                        {
                            state.date_mode = mode;
                            dates_changed = true;
                        }
                    }
                });

            match state.date_mode {
                DateFilterMode::AllDates => {}
                DateFilterMode::SingleDay => {
                    dates_changed |= ui
                        .add(DatePickerButton::new(&mut state.start_pick).id_salt("single_day"))
                        .changed();
                }
                DateFilterMode::Between => {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label("From");
                        dates_changed |= ui
                            .add(
                                DatePickerButton::new(&mut state.start_pick)
                                    .id_salt("start_date"),
                            )
                            .changed();
                    });
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label("To");
                        dates_changed |= ui
                            .add(DatePickerButton::new(&mut state.end_pick).id_salt("end_date"))
                            .changed();
                    });
                }
            }

            if dates_changed {
                state.refilter();
            }

            ui.separator();

            // ---- Mock data ----
            ui.strong("Mock data");
            ui.add(egui::Slider::new(&mut state.config.records, 10..=200).text("records"));
            if ui.button("Regenerate").clicked() {
                state.regenerate();
            }
        });
}

fn mode_label(mode: DateFilterMode) -> &'static str {
    match mode {
        DateFilterMode::AllDates => "All dates",
        DateFilterMode::SingleDay => "Single day",
        DateFilterMode::Between => "Between",
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export CSV…").clicked() {
                export_csv_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export JSON report…").clicked() {
                export_report_dialog(state);
                ui.close_menu();
            }
            if ui.button("Import CSV…").clicked() {
                import_csv_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Regenerate data").clicked() {
                state.regenerate();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} records, {} shown",
            state.feedback.len(),
            state.visible.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn export_csv_dialog(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export feedback report")
        .set_file_name("feedback_report.csv")
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return;
    };

    let result = export::to_csv(&state.feedback, &state.visible)
        .and_then(|csv| std::fs::write(&path, csv).context("writing report file"));
    match result {
        Ok(()) => {
            log::info!(
                "exported {} records to {}",
                state.visible.len(),
                path.display()
            );
            state.status_message = None;
        }
        Err(e) => {
            log::error!("CSV export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn export_report_dialog(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Export JSON report")
        .set_file_name("feedback_report.json")
        .add_filter("JSON", &["json"])
        .save_file()
    else {
        return;
    };

    let summary = summarize(&state.feedback, &state.visible);
    let by_service = ratings_by_service(&state.feedback, &state.visible);
    let result = export::report_json(&summary, &by_service)
        .and_then(|json| std::fs::write(&path, json).context("writing report file"));
    match result {
        Ok(()) => {
            log::info!("exported JSON report to {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("JSON report export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn import_csv_dialog(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Import feedback CSV")
        .add_filter("CSV", &["csv"])
        .pick_file()
    else {
        return;
    };

    let result = std::fs::read_to_string(&path)
        .context("reading CSV file")
        .and_then(|text| export::from_csv(&text).map_err(anyhow::Error::from));
    match result {
        Ok(records) => {
            log::info!("imported {} records from {}", records.len(), path.display());
            state.set_feedback(FeedbackSet::from_records(records));
        }
        Err(e) => {
            log::error!("Failed to import file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
