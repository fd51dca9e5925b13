mod ui;
mod engine;
mod model;

use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn game_rng() -> StdRng {
    match std::env::var("INSIDER_SEED").ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => {
            info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = ui::settings_io::load_settings();
    let rng = game_rng();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Insider")
            .with_inner_size([440.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Insider",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ui::app::InsiderApp::new(settings, rng)))
        }),
    )
}
