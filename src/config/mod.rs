use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the local SQLite database.
    pub database: String,
    /// Account id used to key the remote document collections.
    /// `None` means guest mode (local-only operation).
    #[serde(default)]
    pub user: Option<String>,
    /// Root directory of the remote document store.
    #[serde(default)]
    pub remote_root: Option<String>,
    /// Maximum bookable hours per day.
    #[serde(default = "default_daily_budget")]
    pub daily_budget: f64,
}

fn default_daily_budget() -> f64 {
    8.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            user: None,
            remote_root: None,
            daily_budget: default_daily_budget(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklogger")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".worklogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worklogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file falls back to defaults with a warning rather than
    /// aborting, so a broken config never locks the user out of local data.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        crate::ui::messages::warning(format!(
                            "Failed to parse {}: {} — using defaults.",
                            path.display(),
                            e
                        ));
                        Config::default()
                    }
                },
                Err(e) => {
                    crate::ui::messages::warning(format!(
                        "Failed to read {}: {} — using defaults.",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode so test runs never touch
        // the real user config)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Check the on-disk config file for missing fields.
    /// Returns the list of keys absent from the YAML document.
    pub fn missing_fields() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let doc: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("parse config: {e}")))?;

        let mut missing = Vec::new();
        for key in ["database", "user", "remote_root", "daily_budget"] {
            if doc.get(key).is_none() {
                missing.push(key);
            }
        }
        Ok(missing)
    }

    /// True when an account is configured and the remote root is set.
    /// This is the CLI rendition of "authenticated": guest mode is simply
    /// the absence of an account.
    pub fn has_account(&self) -> bool {
        self.user.is_some() && self.remote_root.is_some()
    }
}
