use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

pub const DEFAULT_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Parser)]
#[command(name = "recipebox", about = "Terminal client for a recipe REST service")]
pub struct ClientConfig {
    /// Base URL of the recipe service (the client appends /recipes)
    #[arg(long, env = "RECIPEBOX_SERVER_URL", default_value = DEFAULT_URL)]
    pub server_url: String,

    /// Diagnostic log file. The terminal belongs to the UI, so logs go here.
    #[arg(long, env = "RECIPEBOX_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("recipebox.log"))
    }

    /// Route `tracing` output to the log file. `RUST_LOG` overrides the
    /// default filter.
    pub fn init_logging(&self) -> Result<PathBuf> {
        let path = self.log_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("recipebox=info,recipebox_tui=info,recipebox_service=info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_flag_is_read() {
        let config =
            ClientConfig::try_parse_from(["recipebox", "--server-url", "http://recipes.local:9000"])
                .unwrap();
        assert_eq!(config.server_url, "http://recipes.local:9000");
    }

    #[test]
    fn explicit_log_file_wins() {
        let config =
            ClientConfig::try_parse_from(["recipebox", "--log-file", "/tmp/rb-test.log"]).unwrap();
        assert_eq!(config.log_path(), PathBuf::from("/tmp/rb-test.log"));
    }

    #[test]
    fn default_log_file_is_in_temp_dir() {
        let config = ClientConfig {
            server_url: DEFAULT_URL.into(),
            log_file: None,
        };
        assert_eq!(config.log_path(), std::env::temp_dir().join("recipebox.log"));
    }
}
