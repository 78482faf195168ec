//! Template persistence: one pretty-printed JSON file per template.

use std::path::{Path, PathBuf};

use od6_core::Template;
use tokio::fs;

use crate::builtin;
use crate::error::{StoreError, StoreResult};
use crate::file_name;

/// Saves and loads templates under `<root>/templates/`.
///
/// Built-in base templates are served from code and never written to
/// disk; `save` and `delete` reject their names.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at `root`. No I/O happens until first use.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join("templates"),
        }
    }

    /// Write a template, creating the directory on first use. Overwrites
    /// a previous save of the same name.
    pub async fn save(&self, template: &Template) -> StoreResult<()> {
        if builtin::is_builtin(&template.name) {
            return Err(StoreError::BuiltinTemplate(template.name.clone()));
        }
        fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(template)?;
        fs::write(self.path_for(&template.name), json).await?;
        Ok(())
    }

    /// Load a template by name. Built-in names resolve without touching
    /// the disk.
    pub async fn load(&self, name: &str) -> StoreResult<Template> {
        if let Some(template) = builtin::by_name(name) {
            return Ok(template);
        }
        let path = self.path_for(name);
        if !fs::try_exists(&path).await? {
            return Err(StoreError::NotFound(name.to_string()));
        }
        let json = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// All templates: the built-ins in book order, then saved custom
    /// templates sorted by file name.
    pub async fn list(&self) -> StoreResult<Vec<Template>> {
        let mut templates = builtin::all();
        templates.extend(self.custom().await?);
        Ok(templates)
    }

    /// Saved custom templates only. Entries that are not readable JSON
    /// are skipped rather than failing the whole listing.
    pub async fn custom(&self) -> StoreResult<Vec<Template>> {
        let mut templates = Vec::new();
        if !fs::try_exists(&self.dir).await? {
            return Ok(templates);
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
            if let Ok(template) = serde_json::from_str::<Template>(&json) {
                templates.push(template);
            }
        }
        Ok(templates)
    }

    /// Delete a saved template by name.
    pub async fn delete(&self, name: &str) -> StoreResult<()> {
        if builtin::is_builtin(name) {
            return Err(StoreError::BuiltinTemplate(name.to_string()));
        }
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
