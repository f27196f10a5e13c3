//! winamp-presence binary - wires the Win32 player client, the local
//! presence endpoint and the sync engine together and polls forever.

#[cfg(windows)]
mod windows_main {
    use std::error::Error;
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;
    use tracing::info;
    use winamp_presence::config::{Config, ConfigPaths};
    use winamp_presence::services::presence::{
        AssetResolver, DefaultCaption, DiscordIpc, SyncEngine,
    };
    use winamp_presence::services::winamp::{Win32Connection, WinampClient};
    use winamp_presence::tracing_config;

    /// Bridge a running Winamp instance to Discord Rich Presence.
    #[derive(Parser, Debug)]
    #[command(name = "winamp-presence", version)]
    struct Args {
        /// Path to the settings file (defaults to the XDG/APPDATA config dir).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the poll interval in seconds.
        #[arg(long)]
        interval: Option<u64>,

        /// Run a single poll tick and exit.
        #[arg(long)]
        once: bool,
    }

    pub async fn run() -> Result<(), Box<dyn Error>> {
        tracing_config::init()?;
        let args = Args::parse();

        let settings_path = match args.config {
            Some(path) => path,
            None => ConfigPaths::settings_file()?,
        };
        let config = Config::load_or_create(&settings_path)?;

        let poll_interval = Duration::from_secs(
            args.interval
                .unwrap_or(config.general.poll_interval_secs)
                .max(1),
        );

        let mut client = WinampClient::new(
            Win32Connection::new(),
            ConfigPaths::playlist_dump_file()?,
        );
        client.connect()?;
        info!(version = client.version()?, "connected to Winamp");

        let resolver = AssetResolver::load(
            config.assets.custom_assets,
            &ConfigPaths::album_covers_file()?,
            &ConfigPaths::album_exceptions_file()?,
            config.assets.default_key.clone(),
            DefaultCaption::from_config(&config.assets.default_text),
        );

        let presence = DiscordIpc::connect(&config.presence.client_id)?;

        let mut engine = SyncEngine::new(
            client,
            presence,
            resolver,
            config.presence.small_asset_key.clone(),
            config.presence.small_asset_text.clone(),
        );

        if args.once {
            engine.tick().await?;
            return Ok(());
        }

        info!(
            poll_interval_secs = poll_interval.as_secs(),
            "starting presence sync loop"
        );
        engine.run(poll_interval).await?;
        Ok(())
    }
}

#[cfg(windows)]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    windows_main::run().await
}

#[cfg(not(windows))]
fn main() {
    eprintln!("winamp-presence drives the Winamp Win32 message API and only runs on Windows");
    std::process::exit(1);
}
