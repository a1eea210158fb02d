//! Some utilities

use std::path::{Path, PathBuf};

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Sets up `ftlog` to write into `logs_dir`.
///
/// The log for a run goes to `<logs_dir>/<file_name>.log` and is rotated
/// daily. Warnings raised by the appender itself go to
/// `<logs_dir>/<file_name>.err.log`.
///
/// The returned guard must stay alive until the program exits.
///
/// # Errors
///
/// - If `logs_dir` cannot be created.
/// - If a global logger was already installed.
pub fn configure_logger(
    logs_dir: &Path,
    file_name: &str,
    max_level: LevelFilter,
) -> Result<(LoggerGuard, PathBuf), String> {
    if !logs_dir.exists() {
        std::fs::create_dir_all(logs_dir).map_err(|e| format!("Failed to create {logs_dir:?}: {e}"))?;
    }
    let logs_dir = logs_dir.canonicalize().map_err(|e| e.to_string())?;
    let log_path = logs_dir.join(format!("{file_name}.log"));
    let err_path = log_path.with_extension("err.log");

    let guard = ftlog::Builder::new()
        .max_log_level(max_level)
        .root(FileAppender::builder().path(&log_path).rotate(Period::Day).build())
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}

/// The name of the log file for an input path.
pub fn log_name(inp_path: &Path) -> String {
    let stem = inp_path
        .file_stem()
        .map_or_else(|| "input".to_string(), |s| s.to_string_lossy().to_string());
    format!("center-star-{stem}")
}
