use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProfile {
    pub name: String,
    pub base_url: String,
}

impl ApiProfile {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Profile used before the user has configured anything. The base URL
    /// can be overridden with `ARRC_API_URL`.
    pub fn default_profile() -> Self {
        Self {
            name: "Default".to_string(),
            base_url: std::env::var("ARRC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub profiles: Vec<ApiProfile>,
    pub last_profile_index: Option<usize>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            profiles: vec![],
            last_profile_index: None,
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::new())
        }
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("arrc-admin").join("config.json"))
    }

    /// The profile the client should talk to: the last one picked in the
    /// settings dialog, or the built-in default.
    pub fn active_profile(&self) -> ApiProfile {
        self.last_profile_index
            .and_then(|idx| self.profiles.get(idx))
            .cloned()
            .unwrap_or_else(ApiProfile::default_profile)
    }

    pub fn get_profile(&self, index: usize) -> Option<&ApiProfile> {
        self.profiles.get(index)
    }

    pub fn add_profile(&mut self, profile: ApiProfile) {
        self.profiles.push(profile);
    }

    pub fn update_profile(&mut self, index: usize, profile: ApiProfile) {
        if index < self.profiles.len() {
            self.profiles[index] = profile;
        }
    }

    pub fn delete_profile(&mut self, index: usize) {
        if index < self.profiles.len() {
            self.profiles.remove(index);

            if let Some(last_idx) = self.last_profile_index {
                if last_idx == index {
                    self.last_profile_index = None;
                } else if last_idx > index {
                    self.last_profile_index = Some(last_idx - 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_profiles_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::new();
        config.add_profile(ApiProfile {
            name: "Staging".to_string(),
            base_url: "https://staging.example.com/api".to_string(),
        });
        config.last_profile_index = Some(0);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.profiles.len(), 1);
        assert_eq!(loaded.profiles[0].name, "Staging");
        assert_eq!(loaded.last_profile_index, Some(0));
    }

    #[test]
    fn missing_file_yields_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert!(config.profiles.is_empty());
        assert!(config.last_profile_index.is_none());
    }

    #[test]
    fn delete_shifts_last_profile_index() {
        let mut config = Config::new();
        config.add_profile(ApiProfile::new());
        config.add_profile(ApiProfile::new());
        config.add_profile(ApiProfile::new());
        config.last_profile_index = Some(2);

        config.delete_profile(0);
        assert_eq!(config.last_profile_index, Some(1));

        config.delete_profile(1);
        assert_eq!(config.last_profile_index, None);
    }

    #[test]
    fn active_profile_falls_back_to_default() {
        let config = Config::new();
        let profile = config.active_profile();
        assert_eq!(profile.name, "Default");
        assert!(!profile.base_url.is_empty());
    }
}
