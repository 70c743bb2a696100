use super::repository::Entity;
use crate::libs::task::TaskItem;
use rusqlite::{types::ToSql, Row};

impl Entity for TaskItem {
    const TABLE: &'static str = "Tasks";
    const COLUMNS: &'static [&'static str] = &["TaskDescription", "Status", "Tags", "AddedOn", "CompletedOn"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(TaskItem {
            id: row.get(0)?,
            description: row.get(1)?,
            status: row.get(2)?,
            tags: row.get(3)?,
            added_on: row.get(4)?,
            completed_on: row.get(5)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![&self.description, &self.status, &self.tags, &self.added_on, &self.completed_on]
    }
}
