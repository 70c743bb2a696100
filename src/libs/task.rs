//! Task lifecycle and the list query pipeline.
//!
//! A task is created as `Doing` ("now") or `Later`, may have its title and
//! tags edited, and is eventually completed (`Done`) or deleted. Listing runs
//! a fixed pipeline: duration window, status, free-text search, tags, sort.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dewit::db::{db::Db, repository::SqliteRepository};
//! use dewit::libs::task::{TaskDuration, TaskQuery, TaskService, TaskStatus};
//!
//! let db = Db::new()?;
//! let service = TaskService::new(SqliteRepository::new(&db.conn));
//! service.add_task("Write the release notes", TaskStatus::Doing, Some("docs,release"))?;
//!
//! let query = TaskQuery { duration: TaskDuration::All, ..TaskQuery::default() };
//! for task in service.get_tasks(&query)? {
//!     println!("{} {}", task.id, task.description);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::{
    date_parser,
    error::{DewitError, Result},
    sanitizer::sanitize_tags,
    tags::Tags,
};
use crate::db::repository::Repository;
use chrono::{Duration, Local, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum TaskStatus {
    Doing,
    Done,
    Later,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Doing => "Doing",
            TaskStatus::Done => "Done",
            TaskStatus::Later => "Later",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = DewitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "doing" => Ok(TaskStatus::Doing),
            "done" => Ok(TaskStatus::Done),
            "later" => Ok(TaskStatus::Later),
            _ => Err(DewitError::InvalidInput(format!("Unknown task status '{s}'. Use doing, done or later."))),
        }
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(rename = "taskDescription", alias = "TaskDescription", alias = "description")]
    pub description: String,
    #[serde(alias = "Status")]
    pub status: TaskStatus,
    #[serde(default, alias = "Tags")]
    pub tags: Tags,
    #[serde(alias = "AddedOn")]
    pub added_on: NaiveDateTime,
    #[serde(default, alias = "CompletedOn")]
    pub completed_on: Option<NaiveDateTime>,
}

impl TaskItem {
    pub fn new(description: &str, status: TaskStatus, tags: Tags) -> Self {
        TaskItem {
            id: 0,
            description: description.to_string(),
            status,
            tags,
            added_on: Local::now().naive_local(),
            completed_on: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TaskSort {
    #[default]
    Date,
    Status,
}

impl FromStr for TaskSort {
    type Err = DewitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(TaskSort::Date),
            "status" => Ok(TaskSort::Status),
            _ => Err(DewitError::InvalidInput(format!("Unknown sort '{s}'. Use date or status."))),
        }
    }
}

/// Rolling window, measured from the current local date, that a task's
/// `added_on` must fall into. Windows count whole days, so `Week` is today
/// plus the six days before it and `Yesterday` is today only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TaskDuration {
    #[default]
    Today,
    Yesterday,
    Week,
    Month,
    All,
}

impl TaskDuration {
    fn days_back(&self) -> Option<i64> {
        match self {
            TaskDuration::Yesterday => Some(1),
            TaskDuration::Week => Some(7),
            TaskDuration::Month => Some(30),
            TaskDuration::Today | TaskDuration::All => None,
        }
    }

    fn matches(&self, added_on: NaiveDateTime, now: NaiveDateTime) -> bool {
        let today = now.date();
        match self {
            TaskDuration::All => true,
            TaskDuration::Today => added_on.date() == today,
            window => match window.days_back() {
                Some(days) => added_on.date() > today - Duration::days(days),
                None => true,
            },
        }
    }
}

impl FromStr for TaskDuration {
    type Err = DewitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(TaskDuration::Today),
            "yesterday" => Ok(TaskDuration::Yesterday),
            "week" => Ok(TaskDuration::Week),
            "month" => Ok(TaskDuration::Month),
            "all" => Ok(TaskDuration::All),
            _ => Err(DewitError::InvalidInput(format!(
                "Unknown duration '{s}'. Use today, yesterday, week, month or all."
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub sort: TaskSort,
    pub duration: TaskDuration,
    pub status: Option<TaskStatus>,
    /// Comma-separated; every tag must appear in the task's tag string.
    pub tags: Option<String>,
    /// Case-insensitive substring of the description.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub add_tags: Option<String>,
    pub remove_tags: Option<String>,
    /// Clears all tags; `add_tags` and `remove_tags` are ignored when set.
    pub reset_tags: bool,
}

pub struct TaskService<R> {
    repository: R,
}

impl<R: Repository<TaskItem>> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn get_task(&self, id: i64) -> Result<Option<TaskItem>> {
        self.repository.get_by_id(id)
    }

    pub fn get_tasks(&self, query: &TaskQuery) -> Result<Vec<TaskItem>> {
        let now = Local::now().naive_local();
        let mut tasks: Vec<TaskItem> =
            self.repository.list()?.into_iter().filter(|t| query.duration.matches(t.added_on, now)).collect();

        if let Some(status) = query.status {
            tasks.retain(|t| t.status == status);
        }

        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            tasks.retain(|t| t.description.to_lowercase().contains(&needle));
        }

        if let Some(tags) = query.tags.as_deref().filter(|s| !s.is_empty()) {
            let sanitized = sanitize_tags(tags);
            let requested: Vec<&str> = sanitized.split(',').filter(|t| !t.is_empty()).collect();
            tasks.retain(|t| {
                let csv = t.tags.to_csv();
                requested.iter().all(|tag| csv.contains(tag))
            });
        }

        match query.sort {
            TaskSort::Status => tasks.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
            TaskSort::Date => tasks.sort_by(|a, b| b.added_on.cmp(&a.added_on)),
        }

        debug!(count = tasks.len(), ?query, "listed tasks");
        Ok(tasks)
    }

    pub fn add_task(&self, title: &str, status: TaskStatus, tags: Option<&str>) -> Result<TaskItem> {
        if title.trim().is_empty() {
            return Err(DewitError::InvalidInput("Task title cannot be empty".to_string()));
        }

        let tags = tags.map(Tags::from_user_input).unwrap_or_default();
        let mut task = TaskItem::new(title, status, tags);
        self.repository.add(&mut task)?;

        debug!(id = task.id, %status, "added task");
        Ok(task)
    }

    pub fn delete_task(&self, id: i64) -> Result<()> {
        let task = self.require(id)?;
        self.repository.remove(&task)
    }

    /// Marks the task `Done`, stamping `completed_at` or the current time.
    pub fn complete_task(&self, id: i64, completed_at: Option<&str>) -> Result<TaskItem> {
        let mut task = self.require(id)?;

        task.completed_on = Some(match completed_at.filter(|s| !s.trim().is_empty()) {
            Some(raw) => date_parser::parse_timestamp(raw)?,
            None => Local::now().naive_local(),
        });
        task.status = TaskStatus::Done;

        self.repository.update(&task)?;
        Ok(task)
    }

    pub fn update_task_details(&self, id: i64, update: &TaskUpdate) -> Result<TaskItem> {
        let mut task = self.require(id)?;

        if let Some(title) = update.title.as_deref().filter(|t| !t.is_empty()) {
            task.description = title.to_string();
        }

        if update.reset_tags {
            task.tags.clear();
        } else {
            if let Some(add) = update.add_tags.as_deref().filter(|t| !t.is_empty()) {
                task.tags.merge(&Tags::from_user_input(add));
            }
            if let Some(remove) = update.remove_tags.as_deref().filter(|t| !t.is_empty()) {
                task.tags.remove_all(&Tags::from_user_input(remove));
            }
        }

        self.repository.update(&task)?;
        Ok(task)
    }

    /// Inserts a task read from an interchange file without validating it.
    /// The store assigns a new id.
    pub fn import_task(&self, mut task: TaskItem) -> Result<TaskItem> {
        self.repository.add(&mut task)?;
        Ok(task)
    }

    fn require(&self, id: i64) -> Result<TaskItem> {
        self.repository
            .get_by_id(id)?
            .ok_or_else(|| DewitError::NotFound(format!("Task with ID {id} does not exist")))
    }
}
