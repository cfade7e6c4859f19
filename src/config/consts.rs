/// Default `tracing` filter directive when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_PATH_ENV: &str = "STRING_ANALYSIS_CONFIG";
