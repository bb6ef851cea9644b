// src/main.rs

use std::process::ExitCode;

use ansi_palette::cli::{self, Conversion};
use ansi_palette::config::{Config, CONFIG, DEFAULT_LOG_LEVEL};
use anyhow::Context; // For context on Results
use log::{debug, warn};

/// Main entry point for the `ansi-palette` tool.
fn main() -> anyhow::Result<ExitCode> {
    // Load the configuration before the logger so it can pick the log level;
    // a load failure is reported once the logger is up.
    let loaded = Config::load();
    let level = match &loaded {
        Ok(config) => config.logging.level.as_str(),
        Err(_) => DEFAULT_LOG_LEVEL,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_micros()
        .init();
    let config = loaded.unwrap_or_else(|e| {
        warn!("{:#}. Using default configuration.", e);
        Config::default()
    });
    let config = CONFIG.get_or_init(|| config);

    let mut args = std::env::args_os();
    let prog = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ansi-palette".to_string());
    let args: Vec<_> = args.collect();

    let request = match cli::parse_os_args(&prog, &args) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!("Request: {:?}, output format: {:?}", request, config.output.format);

    let conversion = Conversion::run(request);
    let line = conversion
        .render(config.output.format)
        .context("Failed to render conversion result")?;
    println!("{}", line);
    Ok(ExitCode::SUCCESS)
}
