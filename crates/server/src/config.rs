use clap::Parser;
use mapi_core::*;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Serve predictions from a model artifact over HTTP.
#[derive(Debug, Clone, Parser)]
#[command(name = "backend", version)]
pub struct Config {
    /// Model artifact to load at startup
    #[arg(long, env = "MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,
    /// Listen address
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,
    /// HTTP worker threads (defaults to one per physical core)
    #[arg(long, env = "WORKERS")]
    pub workers: Option<NonZeroUsize>,
    /// Validate the artifact, print its schema, and exit
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "backend",
            "--model",
            "artifacts/credit.json",
            "--bind",
            "127.0.0.1:9000",
            "--workers",
            "2",
            "--check",
        ])
        .unwrap();
        assert_eq!(config.model, PathBuf::from("artifacts/credit.json"));
        assert_eq!(config.bind, "127.0.0.1:9000");
        assert_eq!(config.workers, NonZeroUsize::new(2));
        assert!(config.check);
    }
    #[test]
    fn rejects_non_numeric_workers() {
        assert!(Config::try_parse_from(["backend", "--workers", "many"]).is_err());
    }
    #[test]
    fn rejects_zero_workers() {
        assert!(Config::try_parse_from(["backend", "--workers", "0"]).is_err());
    }
}
