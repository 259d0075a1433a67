//! Core aliases and constants for the model API.
//!
//! Everything the other crates agree on lives here: the scalar types that
//! flow through scoring, the service defaults, and the logging bootstrap.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Encoded feature values and raw model margins.
pub type Score = f64;
/// Class membership probabilities.
pub type Probability = f64;

// ============================================================================
// SCORING PARAMETERS
// ============================================================================
/// Probability at or above which a binary classifier emits its positive class.
pub const DECISION_THRESHOLD: Probability = 0.5;
/// Global bias of a booster whose artifact omits `base_score`.
pub const DEFAULT_BASE_SCORE: Score = 0.5;

// ============================================================================
// SERVICE DEFAULTS
// ============================================================================
/// Acknowledgment returned by the root route.
pub const HEALTH_MESSAGE: &str = "Model API is running";
/// Artifact location when neither `--model` nor `MODEL_PATH` is given.
pub const DEFAULT_MODEL_PATH: &str = "model.json";
/// Listen address when neither `--bind` nor `BIND_ADDR` is given.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
/// Directory for log files when `LOG_DIR` is unset.
pub const DEFAULT_LOG_DIR: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with a timestamped log file.
/// Writes DEBUG to `$LOG_DIR/<unix-seconds>.log` and INFO to the terminal.
#[cfg(feature = "server")]
pub fn log() -> std::io::Result<()> {
    let dir = std::env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    std::fs::create_dir_all(&dir)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let path = std::path::Path::new(&dir).join(format!("{}.log", time));
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(path)?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).map_err(std::io::Error::other)
}
