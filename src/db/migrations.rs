//! Versioned schema migrations.
//!
//! Every registered migration has a version number; the highest applied
//! version is recorded in the `migrations` table. Opening a database runs the
//! pending ones inside a single transaction, so a failure leaves the schema
//! untouched.
//!
//! ## Usage
//!
//! ```rust
//! use dewit::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;
use rusqlite::{params, Connection, Transaction};
use tracing::{debug, error, info};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

pub struct MigrationManager {
    /// Kept in ascending version order.
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: tasks and key/value settings
        self.add_migration(1, "create_tasks_and_config", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS Tasks (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        TaskDescription TEXT NOT NULL,
        Status TEXT NOT NULL,
        Tags TEXT NOT NULL DEFAULT '',
        AddedOn TIMESTAMP NOT NULL,
        CompletedOn TIMESTAMP
    )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS ConfigItems (
        Id INTEGER PRIMARY KEY AUTOINCREMENT,
        Key TEXT NOT NULL,
        Value TEXT NOT NULL,
        CreatedAt TIMESTAMP NOT NULL,
        UpdatedAt TIMESTAMP NOT NULL
    )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_added_on ON Tasks(AddedOn)", [])?;
            Ok(())
        });

        // Version 2: one mood entry per calendar date
        self.add_migration(2, "add_mood_entries", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS MoodEntries (
                    Id INTEGER PRIMARY KEY AUTOINCREMENT,
                    Mood TEXT NOT NULL,
                    Descriptors TEXT NOT NULL DEFAULT '',
                    Date DATE NOT NULL
                )",
                [],
            )?;
            tx.execute("CREATE UNIQUE INDEX IF NOT EXISTS idx_mood_entries_date ON MoodEntries(Date)", [])?;
            Ok(())
        });

        // Version 3: editable descriptor suggestions per mood
        self.add_migration(3, "add_mood_descriptors", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS MoodDescriptors (
                    Id INTEGER PRIMARY KEY AUTOINCREMENT,
                    Mood TEXT NOT NULL UNIQUE,
                    Descriptors TEXT NOT NULL DEFAULT ''
                )",
                [],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            debug!(version = current_version, "database is up to date");
            return Ok(());
        }

        info!(count = pending.len(), "applying pending migrations");

        let tx = conn.transaction()?;

        for migration in pending {
            info!(version = migration.version, name = migration.name, "running migration");

            if let Err(e) = (migration.up)(&tx) {
                error!(version = migration.version, error = %e, "migration failed");
                return Err(e);
            }

            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }

        tx.commit()?;
        info!("all migrations applied");

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// `(version, name, applied_at)` rows, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
