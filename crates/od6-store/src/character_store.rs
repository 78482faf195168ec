//! Character persistence: one pretty-printed JSON file per character.

use std::path::{Path, PathBuf};

use od6_core::Character;
use tokio::fs;

use crate::error::{StoreError, StoreResult};
use crate::file_name;

/// Saves and loads characters under `<root>/characters/`.
#[derive(Debug, Clone)]
pub struct CharacterStore {
    dir: PathBuf,
}

impl CharacterStore {
    /// Create a store rooted at `root`. No I/O happens until first use.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join("characters"),
        }
    }

    /// Write a character, creating the directory on first use. Overwrites
    /// a previous save of the same name.
    pub async fn save(&self, character: &Character) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(character)?;
        fs::write(self.path_for(&character.name), json).await?;
        Ok(())
    }

    /// Load a character by name.
    pub async fn load(&self, name: &str) -> StoreResult<Character> {
        let path = self.path_for(name);
        if !fs::try_exists(&path).await? {
            return Err(StoreError::NotFound(name.to_string()));
        }
        let json = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// All saved characters sorted by file name. Entries that are not
    /// readable JSON are skipped.
    pub async fn list(&self) -> StoreResult<Vec<Character>> {
        let mut characters = Vec::new();
        if !fs::try_exists(&self.dir).await? {
            return Ok(characters);
        }
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        for path in paths {
            let Ok(json) = fs::read_to_string(&path).await else {
                continue;
            };
            if let Ok(character) = serde_json::from_str::<Character>(&json) {
                characters.push(character);
            }
        }
        Ok(characters)
    }

    /// Delete a saved character by name.
    pub async fn delete(&self, name: &str) -> StoreResult<()> {
        let path = self.path_for(name);
        if !fs::try_exists(&path).await? {
            return Err(StoreError::NotFound(name.to_string()));
        }
        fs::remove_file(path).await?;
        Ok(())
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_name::sanitize(name)))
    }
}
