use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for the application.
///
/// Sets up structured logging at info level by default, honoring `RUST_LOG`
/// when set. `WINAMP_PRESENCE_LOG_FORMAT=json` switches the console output
/// to JSON.
///
/// # Errors
/// Returns an error if subscriber initialization fails.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = env::var("WINAMP_PRESENCE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_owned());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_target(true).with_level(true))
                .try_init()?;
        }
        _ => {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()?;
        }
    }

    Ok(())
}
