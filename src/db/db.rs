use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

pub const DB_FILE_NAME: &str = "dewit_tasks.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the user's database, honoring `DEWIT_DB`, and migrates it.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().db_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path).with_context(|| format!("Failed to open database at {}", path.display()))?;
        debug!(path = %path.display(), "opened database");

        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// In-memory database with the full schema applied.
    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
