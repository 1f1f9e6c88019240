use chrono::Local;
use eframe::egui;

use feedback_insights::app::FeedbackApp;
use feedback_insights::data::generate::MockConfig;
use feedback_insights::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(MockConfig::default(), 42, Local::now().date_naive());

    eframe::run_native(
        "Feedback & Insights Dashboard",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the sidebar logo.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(FeedbackApp::new(state)))
        }),
    )
}
