use std::path::PathBuf;

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, LogSpecification, Logger, LoggerHandle, Naming,
    opt_format,
};

/// Rotate log files once they reach 10 MB.
const ROTATE_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;

/// `[logging]` table of the config file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log specification such as `"info"` or `"warn,othello_canon::ai=debug"`;
    /// `RUST_LOG` takes precedence when set
    pub level: String,
    /// Write rotated log files here instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl LoggingConfig {
    /// Check that `level` is a well-formed log specification.
    pub fn parse_level(&self) -> Result<LogSpecification, FlexiLoggerError> {
        LogSpecification::parse(&self.level)
    }
}

/// Start the global logger. Keep the returned handle alive for the lifetime
/// of the program; dropping it flushes and stops file output.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(&config.level)?.format(opt_format);
    let logger = match &config.directory {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .rotate(
                Criterion::Size(ROTATE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEEP_LOG_FILES),
            ),
        None => logger.log_to_stderr(),
    };
    logger.start()
}
