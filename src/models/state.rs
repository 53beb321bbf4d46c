use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Categories,
    CategoryItems,
    Users,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Categories, Screen::CategoryItems, Screen::Users];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Categories => "Categories",
            Screen::CategoryItems => "Category Items",
            Screen::Users => "Users",
        }
    }
}

/// UI state persisted across runs: the screen being viewed and the chosen
/// page size. Load errors fall back to defaults, save errors are ignored by
/// the caller.
#[derive(Serialize, Deserialize)]
pub struct UiState {
    pub screen: Screen,
    pub rows_per_page: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::Categories,
            rows_per_page: 10,
        }
    }
}

impl UiState {
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::state_path()?)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::state_path()?)
    }

    fn state_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("arrc-admin").join("state.json"))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let state: UiState = serde_json::from_str(&content)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let state = UiState {
            screen: Screen::Users,
            rows_per_page: 50,
        };
        state.save_to(&path).unwrap();

        let loaded = UiState::load_from(&path).unwrap();
        assert_eq!(loaded.screen, Screen::Users);
        assert_eq!(loaded.rows_per_page, 50);
    }

    #[test]
    fn load_fails_without_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(UiState::load_from(&dir.path().join("absent.json")).is_err());
    }
}
