use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Output goes to a file because the terminal
/// is owned by the UI; returns the file in use, or `None` when logging is off.
pub fn init(config: &LoggingConfig, data_dir: Option<&Path>) -> Option<PathBuf> {
    let path = resolve_log_path(config, data_dir)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}

pub fn resolve_log_path(config: &LoggingConfig, data_dir: Option<&Path>) -> Option<PathBuf> {
    let file = config.file.as_ref()?;
    if file.is_absolute() {
        return Some(file.clone());
    }
    Some(match data_dir {
        Some(dir) => dir.join(file),
        None => file.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(file: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            level: "debug".to_string(),
            file: file.map(PathBuf::from),
        }
    }

    #[test]
    fn relative_file_lands_in_data_dir() {
        let path = resolve_log_path(&logging(Some("gr-fields.log")), Some(Path::new("/data")));
        assert_eq!(path, Some(PathBuf::from("/data/gr-fields.log")));
    }

    #[test]
    fn absolute_file_is_kept() {
        let path = resolve_log_path(&logging(Some("/var/log/gr.log")), Some(Path::new("/data")));
        assert_eq!(path, Some(PathBuf::from("/var/log/gr.log")));
    }

    #[test]
    fn no_file_disables_logging() {
        assert_eq!(resolve_log_path(&logging(None), Some(Path::new("/data"))), None);
    }
}
