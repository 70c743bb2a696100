//! Core library modules for dewit.
//!
//! - **Domain services**: tasks, moods, configuration
//! - **Pure helpers**: tag sanitizing, date parsing, calendar ranges
//! - **Interchange**: JSON/CSV conversion
//! - **Presentation**: messages, table views, formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dewit::db::{db::Db, repository::SqliteRepository};
//! use dewit::libs::task::{TaskService, TaskStatus};
//!
//! let db = Db::new()?;
//! let tasks = TaskService::new(SqliteRepository::new(&db.conn));
//! let task = tasks.add_task("Implement feature", TaskStatus::Later, Some("work"))?;
//! tasks.complete_task(task.id, None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod calendar;
pub mod config;
pub mod converter;
pub mod data_storage;
pub mod date_parser;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod mood;
pub mod sanitizer;
pub mod tags;
pub mod task;
pub mod view;
