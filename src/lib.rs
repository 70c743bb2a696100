//! # dewit
//!
//! A personal command-line task and mood tracker backed by a local SQLite
//! database.
//!
//! - **Tasks**: add now/later, complete, edit titles and tags, filter and sort
//! - **Moods**: one entry per day with descriptors, shown as a calendar
//! - **Settings**: key/value configuration and an editable descriptor catalog
//! - **Interchange**: JSON and CSV export/import of tasks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clap::Parser;
//! use dewit::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::parse().execute()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
