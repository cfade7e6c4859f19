// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context};
use std::env;
use string_analysis::config::consts::CONFIG_PATH_ENV;
use string_analysis::config::{load_and_validate_config, Config, RuntimeBuilder};
use string_analysis::shell::run_session;
use tokio::io::{self, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolve the config path from `--config <file>`, then the environment.
fn config_path(args: &[String]) -> anyhow::Result<Option<String>> {
    match args {
        [] => Ok(env::var(CONFIG_PATH_ENV).ok()),
        [flag, path] if flag == "--config" => Ok(Some(path.clone())),
        _ => bail!("Usage: string-analysis [--config <file>]"),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured filter;
/// output goes to stderr so stdout carries only responses.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.get_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.logging.ansi),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let path = config_path(&args)?;

    let config = match &path {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load configuration '{}'", path))?,
        None => Config::default(),
    };

    init_tracing(&config);
    if let Some(path) = &path {
        config.log_loaded(path);
    }
    tracing::info!(config = path.as_deref().unwrap_or("<defaults>"), "Starting string-analysis");

    let service =
        RuntimeBuilder::from_config(&config).context("Failed to build the record store")?;

    let stdin = BufReader::new(io::stdin());
    run_session(&service, stdin, io::stdout(), config.output.pretty)
        .await
        .context("Session I/O failed")?;

    Ok(())
}
