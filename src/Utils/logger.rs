use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::str::FromStr;

/// environment variable with the log level: off, error, warn, info, debug, trace
pub const LOG_LEVEL_VAR: &str = "LRE_LOG";

/// Level from `LRE_LOG`, `Warn` when the variable is absent or not a level name
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Terminal logger, plus a file logger at debug level if `log_file` is given
pub fn init_logger(level: LevelFilter, log_file: Option<&str>) -> Result<(), String> {
    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        term_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(file_name) = log_file {
        loggers.push(file_logger(file_name)?);
    }
    CombinedLogger::init(loggers).map_err(|e| format!("Failed to initialize logger: {}", e))
}

/// Debug level logger writing to a newly created `file_name`
pub fn file_logger(file_name: &str) -> Result<Box<dyn SharedLogger>, String> {
    let file = File::create(file_name)
        .map_err(|e| format!("Failed to create log file '{}': {}", file_name, e))?;
    let logger: Box<dyn SharedLogger> =
        WriteLogger::new(LevelFilter::Debug, Config::default(), file);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};
    use tempfile::tempdir;

    #[test]
    fn test_file_logger_writes_debug_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lre.log");
        let logger = file_logger(path.to_str().unwrap()).unwrap();
        assert_eq!(logger.level(), LevelFilter::Debug);
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .args(format_args!("channel dp computed"))
                .build(),
        );
        logger.flush();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("channel dp computed"));
    }

    #[test]
    fn test_file_logger_reports_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("lre.log");
        let file_name = path.to_str().unwrap();
        let err = file_logger(file_name).err().unwrap();
        assert!(err.starts_with(&format!("Failed to create log file '{}': ", file_name)));
        // fails before the global logger is touched
        let err = init_logger(LevelFilter::Off, Some(file_name)).unwrap_err();
        assert!(err.starts_with("Failed to create log file"));
    }
}
