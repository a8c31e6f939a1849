use crate::error::{Error, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Default location of the parliament database, relative to the working
/// directory. Run from the demo project root; the database lives in the
/// sibling `data/` directory.
pub const DEFAULT_DB_PATH: &str = "../data/database/parlamento.db";

/// Default directory the demo reads its JSON from, relative to the working
/// directory (the demo project root).
pub const DEFAULT_OUTPUT_DIR: &str = "backend/functions/parliamentdata";

/// Legislators count as active when they voted on or after this date
pub const DEFAULT_VOTE_CUTOFF: &str = "2024-01-01";

/// Label reported as the legislative period in metadata
pub const DEFAULT_PERIOD_LABEL: &str = "2022-2026";

/// Configuration for an export run
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub output_dir: PathBuf,
    /// ISO date (`YYYY-MM-DD`), compared as text against session dates
    pub vote_cutoff: String,
    pub recent_vote_limit: usize,
    pub title_max_chars: usize,
    pub subject_tag_limit: usize,
    pub period_label: String,
}

impl Config {
    /// Create a configuration with default caps for the given paths
    pub fn new(db_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            output_dir: output_dir.into(),
            vote_cutoff: DEFAULT_VOTE_CUTOFF.to_string(),
            recent_vote_limit: 20,
            title_max_chars: 100,
            subject_tag_limit: 100,
            period_label: DEFAULT_PERIOD_LABEL.to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.db_path.exists() {
            return Err(Error::Config(format!(
                "Database does not exist: {}",
                self.db_path.display()
            )));
        }

        if !self.db_path.is_file() {
            return Err(Error::Config(format!(
                "Database path is not a file: {}",
                self.db_path.display()
            )));
        }

        if NaiveDate::parse_from_str(&self.vote_cutoff, "%Y-%m-%d").is_err() {
            return Err(Error::Config(format!(
                "Invalid vote cutoff '{}': expected YYYY-MM-DD",
                self.vote_cutoff
            )));
        }

        for (name, value) in [
            ("recent_vote_limit", self.recent_vote_limit),
            ("title_max_chars", self.title_max_chars),
            ("subject_tag_limit", self.subject_tag_limit),
        ] {
            if value == 0 {
                return Err(Error::Config(format!("{} must be greater than zero", name)));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH, DEFAULT_OUTPUT_DIR)
    }
}

/// Builder for creating configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source database path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Set the activity cutoff date
    pub fn vote_cutoff(mut self, date: impl Into<String>) -> Self {
        self.config.vote_cutoff = date.into();
        self
    }

    /// Set how many recent votes are kept per legislator
    pub fn recent_vote_limit(mut self, limit: usize) -> Self {
        self.config.recent_vote_limit = limit;
        self
    }

    /// Set the length after which recent-vote titles are cut
    pub fn title_max_chars(mut self, max: usize) -> Self {
        self.config.title_max_chars = max;
        self
    }

    /// Set how many subject tags are listed in metadata
    pub fn subject_tag_limit(mut self, limit: usize) -> Self {
        self.config.subject_tag_limit = limit;
        self
    }

    /// Set the legislative period label
    pub fn period_label(mut self, label: impl Into<String>) -> Self {
        self.config.period_label = label.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
