//! Generic CRUD over any persisted entity.
//!
//! Every table follows the same shape: an autoincrement `Id` column followed
//! by the entity's own columns. [`Entity`] describes that shape and the row
//! mapping, and [`SqliteRepository`] generates the SQL from it, so adding an
//! entity type means implementing one trait rather than writing another
//! hand-rolled store.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dewit::db::db::Db;
//! use dewit::db::repository::{Repository, SqliteRepository};
//! use dewit::libs::config::ConfigItem;
//!
//! let db = Db::new()?;
//! let repo = SqliteRepository::<ConfigItem>::new(&db.conn);
//! let mut item = ConfigItem::new("export.json.title", "backup");
//! repo.add(&mut item)?;
//! assert!(item.id > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::libs::error::{DewitError, Result};
use rusqlite::{params, types::ToSql, Connection, OptionalExtension, Row};
use std::marker::PhantomData;
use tracing::debug;

/// A row type stored in its own table.
pub trait Entity: Sized {
    const TABLE: &'static str;
    /// Columns after `Id`, in the order used by [`Entity::from_row`] and
    /// [`Entity::values`].
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);

    /// Maps a row selected as `Id, COLUMNS...`.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Current field values, one per entry of `COLUMNS`.
    fn values(&self) -> Vec<&dyn ToSql>;
}

/// Persistence contract used by the services.
///
/// Each call commits on its own; there is no transaction spanning calls.
pub trait Repository<T> {
    fn list(&self) -> Result<Vec<T>>;
    fn get_by_id(&self, id: i64) -> Result<Option<T>>;
    /// Stores `item` under a fresh id and writes that id back into it.
    fn add(&self, item: &mut T) -> Result<()>;
    fn update(&self, item: &T) -> Result<()>;
    fn remove(&self, item: &T) -> Result<()>;
}

pub struct SqliteRepository<'c, T> {
    conn: &'c Connection,
    _entity: PhantomData<T>,
}

impl<'c, T: Entity> SqliteRepository<'c, T> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn, _entity: PhantomData }
    }

    fn select_sql() -> String {
        format!("SELECT Id, {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
    }

    fn missing(id: i64) -> DewitError {
        debug!(table = T::TABLE, id, "no row affected");
        DewitError::Persistence(rusqlite::Error::QueryReturnedNoRows)
    }
}

impl<T: Entity> Repository<T> for SqliteRepository<'_, T> {
    fn list(&self) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(&Self::select_sql())?;
        let rows = stmt.query_map([], T::from_row)?;

        let mut items = Vec::new();
        for item in rows {
            items.push(item?);
        }
        Ok(items)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<T>> {
        let sql = format!("{} WHERE Id = ?1", Self::select_sql());
        let item = self.conn.query_row(&sql, params![id], T::from_row).optional()?;
        Ok(item)
    }

    fn add(&self, item: &mut T) -> Result<()> {
        let placeholders = (1..=T::COLUMNS.len()).map(|i| format!("?{i}")).collect::<Vec<_>>().join(", ");
        let sql = format!("INSERT INTO {} ({}) VALUES ({})", T::TABLE, T::COLUMNS.join(", "), placeholders);

        self.conn.execute(&sql, item.values().as_slice())?;
        let id = self.conn.last_insert_rowid();
        item.set_id(id);

        debug!(table = T::TABLE, id, "inserted row");
        Ok(())
    }

    fn update(&self, item: &T) -> Result<()> {
        let assignments = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE Id = ?{}", T::TABLE, assignments, T::COLUMNS.len() + 1);

        let id = item.id();
        let mut values = item.values();
        values.push(&id);

        if self.conn.execute(&sql, values.as_slice())? == 0 {
            return Err(Self::missing(id));
        }
        debug!(table = T::TABLE, id, "updated row");
        Ok(())
    }

    fn remove(&self, item: &T) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE Id = ?1", T::TABLE);
        let id = item.id();

        if self.conn.execute(&sql, params![id])? == 0 {
            return Err(Self::missing(id));
        }
        debug!(table = T::TABLE, id, "removed row");
        Ok(())
    }
}
