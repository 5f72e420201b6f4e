use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TASKS_FILE: &str = "tasks.json";
const DEFAULT_KEYWORD: &str = "report";

/// Configuration for tsk, stored as config.json in the platform config dir
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TskConfig {
    /// Tasks document to load when no path is given on the command line
    #[serde(default = "default_tasks_file")]
    pub tasks_file: String,

    /// Keyword searched for in the report's keyword section
    #[serde(default = "default_keyword")]
    pub keyword: String,
}

fn default_tasks_file() -> String {
    DEFAULT_TASKS_FILE.to_string()
}

fn default_keyword() -> String {
    DEFAULT_KEYWORD.to_string()
}

impl Default for TskConfig {
    fn default() -> Self {
        Self {
            tasks_file: default_tasks_file(),
            keyword: default_keyword(),
        }
    }
}

impl TskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: TskConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TskConfig::default();
        assert_eq!(config.tasks_file, "tasks.json");
        assert_eq!(config.keyword, "report");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = TskConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, TskConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = TskConfig::default();
        config.keyword = "invoice".to_string();
        config.save(temp_dir.path()).unwrap();

        let loaded = TskConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.keyword, "invoice");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"keyword": "launch"}"#,
        )
        .unwrap();

        let config = TskConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.keyword, "launch");
        assert_eq!(config.tasks_file, "tasks.json");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = TskConfig {
            tasks_file: "work.json".to_string(),
            keyword: "meeting".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TskConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
