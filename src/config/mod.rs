use crate::errors::{AppError, AppResult};
use crate::models::travel_table::{DEFAULT_TRAVEL_MINUTES, LocationTravelTable, TravelTableFile};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One day; larger offsets always clamp to the ceiling anyway.
pub const MAX_FREE_TIME_OFFSET: u32 = 24 * 60;

pub mod migrate;

/// How the free-time anchor treats the minute part of "last activity + offset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreeTimeMinutes {
    /// 10:40 + 1h -> 11:00
    #[default]
    Zero,
    /// 10:40 + 1h -> 11:40
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_region: String,
    pub default_time: String,

    pub breakfast_keywords: Vec<String>,
    pub lunch_keywords: Vec<String>,
    pub dinner_keywords: Vec<String>,

    pub free_time_keywords: Vec<String>,
    pub departure_keywords: Vec<String>,
    pub skip_departure_days: bool,
    pub free_time_label: String,
    pub free_time_offset_minutes: u32,
    pub free_time_ceiling_hour: u32,
    pub free_time_minutes: FreeTimeMinutes,

    pub travel_label: String,
    pub travel_default_minutes: u32,
    pub travel_table: Option<String>,

    pub wrap_width: usize,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_region: String::new(),
            default_time: "09:00".to_string(),
            breakfast_keywords: words(&["조식", "breakfast"]),
            lunch_keywords: words(&["중식", "점심", "lunch"]),
            dinner_keywords: words(&["석식", "dinner"]),
            free_time_keywords: words(&["자유시간", "자유 시간", "자율"]),
            departure_keywords: words(&["공항", "출국", "귀국", "departure"]),
            skip_departure_days: true,
            free_time_label: "자유시간".to_string(),
            free_time_offset_minutes: 60,
            free_time_ceiling_hour: 22,
            free_time_minutes: FreeTimeMinutes::Zero,
            travel_label: "이동".to_string(),
            travel_default_minutes: DEFAULT_TRAVEL_MINUTES,
            travel_table: None,
            wrap_width: 72,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtripagenda")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtripagenda.conf")
    }

    /// Resolve `--config` (if any) against the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if the file is missing.
    /// Keys absent from the file take their default value.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.free_time_ceiling_hour > 23 {
            return Err(AppError::Config(format!(
                "free_time_ceiling_hour must be 0..=23, got {}",
                self.free_time_ceiling_hour
            )));
        }
        if self.free_time_offset_minutes > MAX_FREE_TIME_OFFSET {
            return Err(AppError::Config(format!(
                "free_time_offset_minutes must be 0..={MAX_FREE_TIME_OFFSET}, got {}",
                self.free_time_offset_minutes
            )));
        }
        if crate::utils::time::parse_time(&self.default_time).is_none() {
            return Err(AppError::Config(format!(
                "default_time must be HH:MM, got '{}'",
                self.default_time
            )));
        }
        Ok(())
    }

    /// Write a default configuration file at `path`, creating parent dirs.
    pub fn init_at(path: &Path) -> AppResult<Config> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        fs::write(path, serde_yaml::to_string(&config)?)?;
        Ok(config)
    }

    /// The travel table in effect: the configured file, or the built-in one.
    pub fn travel_table(&self) -> AppResult<LocationTravelTable> {
        let Some(p) = &self.travel_table else {
            return Ok(LocationTravelTable::builtin(self.travel_default_minutes));
        };

        let path = expand_tilde(p);
        let content = fs::read_to_string(&path)?;
        let file: TravelTableFile = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };

        let table = file.into_table(self.travel_default_minutes);
        debug!(path = %path.display(), origins = table.routes.len(), "loaded travel table");
        Ok(table)
    }
}
