//! Logging System
//!
//! Structured logging implementation using the `tracing` crate. Provides configurable
//! log levels, encodings, and destinations.

use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt as tfmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Log record encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogEncoding {
    #[default]
    Text,
    Json,
}

impl LogEncoding {
    /// Every encoding the subscriber can be built with
    pub fn supported() -> [LogEncoding; 2] {
        [LogEncoding::Text, LogEncoding::Json]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogEncoding::Text => "TEXT",
            LogEncoding::Json => "JSON",
        }
    }
}

impl FromStr for LogEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogEncoding::supported()
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = LogEncoding::supported().iter().map(|e| e.as_str()).collect();
                format!(
                    "Invalid encoding type: {}. Valid encoding types are: {:?}",
                    s, valid
                )
            })
    }
}

impl TryFrom<String> for LogEncoding {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LogEncoding> for String {
    fn from(value: LogEncoding) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for LogEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Install a subscriber at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Record encoding: TEXT or JSON
    #[serde(default)]
    pub encoding: LogEncoding,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Enable colored output (TEXT encoding, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output() -> String {
    // stdout carries command output
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            encoding: LogEncoding::default(),
            level: default_log_level(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        parse_level(&self.level).map_err(|e| e.to_string())?;
        parse_output_destination(&self.output)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (WIZARD_AUTOGEN_LOG, WIZARD_AUTOGEN_LOG_ENCODING, ...)
/// 2. The given config (CLI flags are folded into it by the binary)
/// 3. Defaults
///
/// A subscriber that is already installed is reported as an error rather than
/// replaced.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), GenerationError> {
    if config.map(|c| !c.enabled).unwrap_or(false) {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let encoding = determine_encoding(config)?;
    let output = determine_output(config)?;

    let use_color = config.map(|c| c.color).unwrap_or(true) && output != OutputDestination::File;

    let writer = match output {
        OutputDestination::Stdout => BoxMakeWriter::new(std::io::stdout),
        OutputDestination::Stderr => BoxMakeWriter::new(std::io::stderr),
        OutputDestination::File => {
            let path = config
                .and_then(|c| c.file.clone())
                .unwrap_or_else(|| resolve_log_file_path(None, None, None));
            BoxMakeWriter::new(Mutex::new(open_log_file(&path)?))
        }
    };

    let registry = Registry::default().with(filter);
    let result = match encoding {
        LogEncoding::Json => registry
            .with(
                tfmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogEncoding::Text => registry
            .with(
                tfmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| GenerationError::ConfigError(format!("Failed to install logger: {}", e)))
}

/// Resolve the log file path
///
/// Precedence: CLI path, configured path, per-user data directory, then a
/// file in the docs directory (or the current directory).
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    docs_dir: Option<&Path>,
) -> PathBuf {
    if let Some(path) = cli_file.or(config_file) {
        return path;
    }
    if let Some(dirs) = directories::ProjectDirs::from("", "", "wizard-autogen") {
        return dirs.data_local_dir().join("wizard-autogen.log");
    }
    docs_dir
        .unwrap_or_else(|| Path::new("."))
        .join("wizard-autogen.log")
}

fn open_log_file(path: &Path) -> Result<std::fs::File, GenerationError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            GenerationError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            GenerationError::ConfigError(format!("Failed to open log file {:?}: {}", path, e))
        })
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, GenerationError> {
    if let Ok(filter) = EnvFilter::try_from_env("WIZARD_AUTOGEN_LOG") {
        return Ok(filter);
    }

    let level = parse_level(config.map(|c| c.level.as_str()).unwrap_or("info"))?;
    let mut filter = EnvFilter::try_new(level.to_string())
        .map_err(|e| GenerationError::ConfigError(format!("Invalid log level: {}", e)))?;
    if level == LevelFilter::OFF {
        return Ok(filter);
    }

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(directive.parse().map_err(|e| {
                GenerationError::ConfigError(format!("Invalid log directive: {}", e))
            })?);
        }
    }

    if let Ok(modules_str) = std::env::var("WIZARD_AUTOGEN_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    GenerationError::ConfigError(format!("Invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}

/// Parse a bare level name (trace, debug, info, warn, error, off)
///
/// A bare word is also a valid `EnvFilter` target directive, so it is checked
/// against the level names first.
fn parse_level(level: &str) -> Result<LevelFilter, GenerationError> {
    level.trim().parse::<LevelFilter>().map_err(|_| {
        GenerationError::ConfigError(format!(
            "Invalid log level: {} (must be one of trace, debug, info, warn, error, off)",
            level
        ))
    })
}

/// Determine encoding from environment or config
fn determine_encoding(config: Option<&LoggingConfig>) -> Result<LogEncoding, GenerationError> {
    if let Ok(encoding) = std::env::var("WIZARD_AUTOGEN_LOG_ENCODING") {
        return encoding.parse().map_err(GenerationError::ConfigError);
    }
    Ok(config.map(|c| c.encoding).unwrap_or_default())
}

/// Output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputDestination {
    Stdout,
    Stderr,
    File,
}

/// Determine output destination from environment or config
fn determine_output(config: Option<&LoggingConfig>) -> Result<OutputDestination, GenerationError> {
    if let Ok(output) = std::env::var("WIZARD_AUTOGEN_LOG_OUTPUT") {
        return parse_output_destination(&output);
    }
    let output = config.map(|c| c.output.as_str()).unwrap_or("stderr");
    parse_output_destination(output)
}

fn parse_output_destination(output: &str) -> Result<OutputDestination, GenerationError> {
    match output {
        "stdout" => Ok(OutputDestination::Stdout),
        "stderr" => Ok(OutputDestination::Stderr),
        "file" => Ok(OutputDestination::File),
        _ => Err(GenerationError::ConfigError(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        ))),
    }
}
