use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize console telemetry.
///
/// Honors `RUST_LOG` when set; defaults to info-level output with debug
/// detail for the fresco crates.
///
/// # Returns
///
/// Result indicating success or failure of initialization.
pub fn init_console_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fresco=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
