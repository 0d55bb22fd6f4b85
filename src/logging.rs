use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

use crate::common::project_data_dir;

#[derive(Default)]
pub struct Logging {
    file_name: Option<PathBuf>,
    verbose: bool,
}

impl Logging {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: None,
            verbose: false,
        }
    }

    /// Log into `file_name` under the project data directory instead of stderr.
    /// Absolute paths are used as-is.
    #[must_use]
    pub fn with_file<P>(mut self, file_name: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, enable: bool) -> Self {
        self.verbose = enable;
        self
    }

    fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn start(&self) -> Result<()> {
        let mut b = env_logger::builder();
        b.filter_level(self.level());

        if let Some(file_name) = &self.file_name {
            let log_file = get_log_file_path(file_name)?;

            let fd = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .with_context(|| format!("Unable to open {} for writing", log_file.display()))?;

            b.target(Target::Pipe(Box::new(fd)));
        }

        b.try_init().context("Logger already initialized")?;

        Ok(())
    }
}

fn get_log_file_path(file_name: &Path) -> Result<PathBuf> {
    if file_name.is_absolute() {
        return Ok(file_name.to_path_buf());
    }
    Ok(project_data_dir()?.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_default_is_quiet() {
        let logging = Logging::new();
        assert!(!logging.verbose);
        assert_eq!(logging.level(), LevelFilter::Info);
    }

    #[test]
    fn test_logging_verbose_raises_level() {
        let logging = Logging::new().with_verbose(true);
        assert_eq!(logging.level(), LevelFilter::Debug);
    }

    #[test]
    fn test_logging_builder_chaining() {
        let logging = Logging::new().with_file("install.log").with_verbose(false);

        assert!(!logging.verbose);
        assert_eq!(
            logging.file_name.unwrap().to_string_lossy(),
            "install.log"
        );
    }

    #[test]
    fn test_absolute_log_path_is_kept() {
        let temp_dir = tempfile::tempdir().unwrap();
        let absolute = temp_dir.path().join("install.log");

        let path = get_log_file_path(&absolute).unwrap();
        assert_eq!(path, absolute);
    }
}
