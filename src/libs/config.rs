//! Key/value application settings stored in the `ConfigItems` table.
//!
//! Keys are matched case-insensitively. Settings drive the export file names
//! and remember whether first-run setup has completed.
//!
//! ## Well-known keys
//!
//! - `export.json.title`, `export.csv.title`: export file stem (default `dewit_tasks`)
//! - `setup.completed`: set to `true` once `dewit setup` has run
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dewit::db::{db::Db, repository::SqliteRepository};
//! use dewit::libs::config::{ConfigurationService, EXPORT_JSON_TITLE};
//!
//! let db = Db::new()?;
//! let config = ConfigurationService::new(SqliteRepository::new(&db.conn));
//! config.set_value(EXPORT_JSON_TITLE, "backup")?;
//! assert_eq!(config.get_value("EXPORT.JSON.TITLE")?.as_deref(), Some("backup"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::error::{DewitError, Result};
use crate::db::repository::Repository;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const EXPORT_JSON_TITLE: &str = "export.json.title";
pub const EXPORT_CSV_TITLE: &str = "export.csv.title";
pub const SETUP_COMPLETED: &str = "setup.completed";

pub const DEFAULT_EXPORT_TITLE: &str = "dewit_tasks";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigItem {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ConfigItem {
    pub fn new(key: &str, value: &str) -> Self {
        let now = Local::now().naive_local();
        ConfigItem {
            id: 0,
            key: key.to_string(),
            value: value.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

pub struct ConfigurationService<R> {
    repository: R,
}

impl<R: Repository<ConfigItem>> ConfigurationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        Ok(self.find(key)?.map(|item| item.value))
    }

    /// Inserts or overwrites `key`. Whitespace-only keys are rejected.
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(DewitError::InvalidInput("Configuration key cannot be empty".to_string()));
        }

        match self.find(key)? {
            Some(mut item) => {
                item.value = value.to_string();
                item.updated_at = Local::now().naive_local();
                self.repository.update(&item)?;
            }
            None => {
                let mut item = ConfigItem::new(key, value);
                self.repository.add(&mut item)?;
            }
        }

        debug!(key, "stored config value");
        Ok(())
    }

    pub fn delete_value(&self, key: &str) -> Result<()> {
        if let Some(item) = self.find(key)? {
            self.repository.remove(&item)?;
            debug!(key, "deleted config value");
        }
        Ok(())
    }

    pub fn key_exists(&self, key: &str) -> Result<bool> {
        Ok(self.find(key)?.is_some())
    }

    /// All `(key, value)` pairs ordered by key.
    pub fn get_all(&self) -> Result<Vec<(String, String)>> {
        let mut pairs: Vec<(String, String)> =
            self.repository.list()?.into_iter().map(|item| (item.key, item.value)).collect();
        pairs.sort();
        Ok(pairs)
    }

    /// Export file stem for the given extension, e.g. `json`.
    pub fn export_title(&self, extension: &str) -> Result<String> {
        let key = format!("export.{extension}.title");
        Ok(self
            .get_value(&key)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPORT_TITLE.to_string()))
    }

    fn find(&self, key: &str) -> Result<Option<ConfigItem>> {
        let key = key.trim();
        Ok(self.repository.list()?.into_iter().find(|item| item.key.eq_ignore_ascii_case(key)))
    }
}
