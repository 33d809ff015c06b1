use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

// Same shape as the old println helpers: [timestamp][LEVEL] message
const PATTERN: &str = "[{d(%Y-%m-%d %H:%M:%S%.3f)}][{l}] {m}{n}";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid logger configuration: {0}")]
    Config(#[from] ConfigErrors),

    #[error("a logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

// Logs to stdout and to the given file. The file's parent directories are created if needed.
pub fn configure_logger(path: &str) -> Result<log4rs::Handle, LoggingError> {
    configure_logger_with_level(path, LevelFilter::Info)
}

pub fn configure_logger_with_level(
    path: &str,
    level: LevelFilter,
) -> Result<log4rs::Handle, LoggingError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(level),
        )?;

    let handle = log4rs::init_config(config)?;
    log::debug!("Logger configured, writing to {}", path);
    Ok(handle)
}
