use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Whole-run roster minimum for a regeneration. The allocator needs
    /// 2 per slot; operations want headroom above that.
    #[serde(default = "default_min_workers")]
    pub min_workers: usize,
    /// Synthesize report skeletons for future shifts too (the handover
    /// dashboard pre-fills the whole month).
    #[serde(default = "default_include_future_reports")]
    pub include_future_reports: bool,
    /// Fixed seed for the placeholder report content. None = vary per run.
    #[serde(default)]
    pub report_seed: Option<u64>,
}

fn default_min_workers() -> usize {
    4
}

fn default_include_future_reports() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            min_workers: default_min_workers(),
            include_future_reports: default_include_future_reports(),
            report_seed: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dutyrota")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".dutyrota")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dutyrota.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("dutyrota.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files.
    /// With `is_test` set only the database is touched, never the config.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                fs::create_dir_all(&dir)?;
                dir.join(p)
            }
        } else {
            fs::create_dir_all(&dir)?;
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save()?;
        }

        Ok(db_path)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Sanity-check the loaded values; returns the list of findings.
    pub fn check(&self) -> Vec<String> {
        let mut findings = Vec::new();

        if self.database.trim().is_empty() {
            findings.push("database path is empty".to_string());
        }
        if self.min_workers < 2 {
            findings.push(format!(
                "min_workers = {} is below the hard floor of 2",
                self.min_workers
            ));
        }

        findings
    }
}
