use feescope::config::Config;
use feescope::interfaces::dashboard::ChargeDashboard;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Starting feescope {}", env!("CARGO_PKG_VERSION"));

    // 2. Load Config
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: max revenue {}, {} samples, strategy {}, period {}",
        config.max_revenue, config.sample_count, config.strategy, config.period
    );

    // 3. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Service Charge Analysis Tool"),
        ..Default::default()
    };

    eframe::run_native(
        "Service Charge Analysis Tool",
        native_options,
        Box::new(|cc| {
            feescope::interfaces::ui::configure_style(&cc.egui_ctx);
            Ok(Box::new(ChargeDashboard::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
