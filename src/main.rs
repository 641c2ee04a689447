use mochi_madadgar::app::MochiApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([390.0, 780.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Mochi Madadgar",
        options,
        Box::new(|cc| Ok(Box::new(MochiApp::new(cc)))),
    )
}
