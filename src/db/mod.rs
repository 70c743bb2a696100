//! SQLite persistence.
//!
//! [`db::Db`] owns the single connection of an invocation and migrates the
//! schema when it opens. Tables are accessed through the generic
//! [`repository::SqliteRepository`]; each entity module only maps its table
//! and columns.
//!
//! ```rust
//! use dewit::db::{db::Db, repository::{Repository, SqliteRepository}};
//! use dewit::libs::task::TaskItem;
//!
//! let db = Db::open_in_memory()?;
//! let tasks = SqliteRepository::<TaskItem>::new(&db.conn);
//! assert!(tasks.list()?.is_empty());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;

/// Versioned schema changes applied on open.
pub mod migrations;

pub mod repository;

pub mod config_items;
pub mod moods;
pub mod tasks;
