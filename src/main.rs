use std::panic;

use anyhow::{Context, Result};
use clap::Parser;

use index_trend::{ChartRenderer, Cli, MetricsEngine, NativeChartSink, fetch_price_data};

fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("index_trend"), my_code_level)
        .parse_default_env() // RUST_LOG wins when set
        .init();

    // A. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // Reject bad windows before spending a network round trip
    let engine = MetricsEngine::new(args.metrics_config())?;
    #[cfg(debug_assertions)]
    log::info!("Metrics config: {:?}", engine.config());

    // B. Data Loading (Blocking)
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;
    let (series, _signature) = rt.block_on(fetch_price_data(&args))?;

    // C. Metrics
    let augmented = engine.augment(&series);

    // D. Charts, one window at a time
    ChartRenderer::default().render_all(&augmented, &mut NativeChartSink)?;

    log::info!("👋 All charts closed, exiting.");
    Ok(())
}
