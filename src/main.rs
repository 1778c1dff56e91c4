//! # calcline Main Entry Point

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use calcline::{
    calc::io::{TerminalEventStream, TerminalRenderStream},
    cmd_args::CommandLineArgs,
    config::{get_config_path, CalcSettings, LOG_LEVEL_ENV_VAR},
    run_script, AppController,
};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    init_tracing_subscriber(args.log_file())?;

    let config_path = args
        .config()
        .map(str::to_string)
        .unwrap_or_else(get_config_path);
    let mut settings = CalcSettings::load(&config_path)?;
    settings.apply_args(&args)?;
    tracing::debug!("Settings: {:?}", settings);

    match args.keys() {
        Some(script) => {
            let snapshot = run_script(&settings, script);
            if args.json() {
                println!("{}", serde_json::to_string(&snapshot)?);
            } else {
                println!("{}", snapshot.display);
            }
            Ok(())
        }
        None => {
            let mut app = AppController::with_io_streams(
                &settings,
                TerminalEventStream::new(),
                TerminalRenderStream::new(),
            )?;
            app.run()
        }
    }
}

fn env_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_env(LOG_LEVEL_ENV_VAR)
        .add_directive("crossterm=warn".parse()?)
        .add_directive("tracing_subscriber=warn".parse()?))
}

fn init_tracing_subscriber(log_file: Option<&str>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_timer(ChronoLocal::rfc_3339());

    let installed = match log_file {
        Some(path) => {
            let path = shellexpand::tilde(path);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path.as_ref())
                .with_context(|| format!("Failed to open log file '{path}'"))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}
