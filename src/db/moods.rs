use super::repository::Entity;
use crate::libs::mood::{MoodDescriptorItem, MoodEntry};
use rusqlite::{types::ToSql, Row};

impl Entity for MoodEntry {
    const TABLE: &'static str = "MoodEntries";
    const COLUMNS: &'static [&'static str] = &["Mood", "Descriptors", "Date"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(MoodEntry {
            id: row.get(0)?,
            mood: row.get(1)?,
            descriptors: row.get(2)?,
            date: row.get(3)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![&self.mood, &self.descriptors, &self.date]
    }
}

impl Entity for MoodDescriptorItem {
    const TABLE: &'static str = "MoodDescriptors";
    const COLUMNS: &'static [&'static str] = &["Mood", "Descriptors"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(MoodDescriptorItem {
            id: row.get(0)?,
            mood: row.get(1)?,
            descriptors: row.get(2)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![&self.mood, &self.descriptors]
    }
}
