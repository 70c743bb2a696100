use super::repository::Entity;
use crate::libs::config::ConfigItem;
use rusqlite::{types::ToSql, Row};

impl Entity for ConfigItem {
    const TABLE: &'static str = "ConfigItems";
    const COLUMNS: &'static [&'static str] = &["Key", "Value", "CreatedAt", "UpdatedAt"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(ConfigItem {
            id: row.get(0)?,
            key: row.get(1)?,
            value: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![&self.key, &self.value, &self.created_at, &self.updated_at]
    }
}
