//! Ordered tag set attached to a task.
//!
//! Tags live as a `Vec<String>` inside the program and are only flattened to
//! the `a,b,c` form when they hit the database or an interchange file.

use super::sanitizer::{deduplicate_tags, sanitize_tags};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Tags(Vec<String>);

impl Tags {
    /// Builds a set from an already-normalized CSV string.
    ///
    /// Empty tokens and repeats are dropped; no character filtering happens.
    pub fn from_csv(csv: &str) -> Self {
        Self(deduplicate_tags(csv).split(',').filter(|t| !t.is_empty()).map(str::to_string).collect())
    }

    /// Runs raw user input through the sanitizer before building the set.
    pub fn from_user_input(input: &str) -> Self {
        Self::from_csv(&deduplicate_tags(&sanitize_tags(input)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Appends every tag of `other` that is not present yet.
    pub fn merge(&mut self, other: &Tags) {
        for tag in other.iter() {
            if !self.contains(tag) {
                self.0.push(tag.to_string());
            }
        }
    }

    /// Removes exact token matches.
    pub fn remove_all(&mut self, other: &Tags) {
        self.0.retain(|t| !other.contains(t));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn to_csv(&self) -> String {
        self.0.join(",")
    }
}

impl Display for Tags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv())
    }
}

impl From<String> for Tags {
    fn from(csv: String) -> Self {
        Self::from_csv(&csv)
    }
}

impl From<Tags> for String {
    fn from(tags: Tags) -> Self {
        tags.to_csv()
    }
}

impl ToSql for Tags {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(Value::Text(self.to_csv())))
    }
}

impl FromSql for Tags {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(Self::from_csv)
    }
}
