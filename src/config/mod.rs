use crate::errors::{AppError, AppResult};
use crate::models::schedule::ScheduleKind;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub state_file: String,
    #[serde(default = "default_schedule")]
    pub default_schedule: String,
    #[serde(default = "default_show_seconds")]
    pub show_seconds: bool,
}

fn default_schedule() -> String {
    ScheduleKind::Full.sk_as_str().to_string()
}
fn default_show_seconds() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: Self::state_file().to_string_lossy().to_string(),
            default_schedule: default_schedule(),
            show_seconds: default_show_seconds(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeclock")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtimeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    /// Return the full path of the JSON state file
    pub fn state_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.json")
    }

    /// Load configuration from file, or return defaults if not found or
    /// unreadable (a broken config must not block the tracker).
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    crate::ui::messages::warning(format!(
                        "Could not parse config file ({}), using defaults",
                        e
                    ));
                    Config::default()
                }),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration directory and file
    pub fn init_all(custom_state: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // State file path: user provided or default
        let state_path = if let Some(name) = custom_state {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::state_file()
        };

        let config = Config {
            state_file: state_path.to_string_lossy().to_string(),
            default_schedule: default_schedule(),
            show_seconds: default_show_seconds(),
        };

        // Write config file (skipped in test mode)
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ State file:  {:?}", state_path);

        Ok(())
    }
}
