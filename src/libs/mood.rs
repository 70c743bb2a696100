//! Daily mood entries and the per-mood descriptor catalog.
//!
//! One entry per calendar date is allowed. Descriptors are free-form words
//! ("calm", "drained") explaining a mood; the catalog holds the suggestions
//! offered by the interactive prompts and can be edited or reset to the
//! built-in defaults.

use super::error::{DewitError, Result};
use crate::db::repository::Repository;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    VeryHappy,
    Happy,
    Meh,
    Down,
    ExtraDown,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::VeryHappy, Mood::Happy, Mood::Meh, Mood::Down, Mood::ExtraDown];

    /// Stored label, e.g. `VeryHappy`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::VeryHappy => "VeryHappy",
            Mood::Happy => "Happy",
            Mood::Meh => "Meh",
            Mood::Down => "Down",
            Mood::ExtraDown => "ExtraDown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::VeryHappy => "Very Happy",
            Mood::Happy => "Happy",
            Mood::Meh => "Meh",
            Mood::Down => "Down",
            Mood::ExtraDown => "Extra Down",
        }
    }

    pub fn default_descriptors(&self) -> &'static str {
        match self {
            Mood::VeryHappy => "inspired,valued,grateful,energized,confident,creative,loved,motivated,joyful,accomplished",
            Mood::Happy => "content,optimistic,relaxed,appreciated,hopeful,calm,focused,productive,cheerful,connected",
            Mood::Meh => "indifferent,tired,bored,distracted,unmotivated,neutral,restless,uncertain,disconnected,sluggish",
            Mood::Down => "stressed,anxious,frustrated,overwhelmed,lonely,disappointed,irritable,drained,worried,sad",
            Mood::ExtraDown => "hopeless,defeated,exhausted,depressed,empty,isolated,despairing,numb,worthless,broken",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `VeryHappy`, `veryhappy` and `very happy` alike.
impl FromStr for Mood {
    type Err = DewitError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase();
        match normalized.as_str() {
            "veryhappy" => Ok(Mood::VeryHappy),
            "happy" => Ok(Mood::Happy),
            "meh" => Ok(Mood::Meh),
            "down" => Ok(Mood::Down),
            "extradown" => Ok(Mood::ExtraDown),
            _ => Err(DewitError::InvalidInput(format!(
                "Unknown mood '{s}'. Valid moods: VeryHappy, Happy, Meh, Down, ExtraDown."
            ))),
        }
    }
}

impl ToSql for Mood {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Mood {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: i64,
    pub mood: Mood,
    /// Comma-separated, e.g. `inspired,valued`.
    pub descriptors: String,
    pub date: NaiveDate,
}

impl MoodEntry {
    pub fn new(mood: Mood, descriptors: &str, date: NaiveDate) -> Self {
        MoodEntry {
            id: 0,
            mood,
            descriptors: descriptors.to_string(),
            date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodDescriptorItem {
    pub id: i64,
    pub mood: Mood,
    pub descriptors: String,
}

pub struct MoodService<E, D> {
    entries: E,
    descriptors: D,
}

impl<E, D> MoodService<E, D>
where
    E: Repository<MoodEntry>,
    D: Repository<MoodDescriptorItem>,
{
    pub fn new(entries: E, descriptors: D) -> Self {
        Self { entries, descriptors }
    }

    pub fn get_entry_for_date(&self, date: NaiveDate) -> Result<Option<MoodEntry>> {
        Ok(self.entries.list()?.into_iter().find(|e| e.date == date))
    }

    /// Entries with `from <= date <= to`, oldest first.
    pub fn get_entries_in_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<MoodEntry>> {
        let mut entries: Vec<MoodEntry> =
            self.entries.list()?.into_iter().filter(|e| e.date >= from && e.date <= to).collect();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    pub fn add_entry(&self, mood: Mood, descriptors: &str, date: NaiveDate) -> Result<MoodEntry> {
        if self.get_entry_for_date(date)?.is_some() {
            return Err(DewitError::Conflict(format!(
                "A mood entry already exists for {date}. Use 'mood update' to change it."
            )));
        }

        let mut entry = MoodEntry::new(mood, descriptors, date);
        self.entries.add(&mut entry)?;

        debug!(id = entry.id, %mood, %date, "added mood entry");
        Ok(entry)
    }

    /// Replaces only the fields that are `Some`.
    pub fn update_entry(&self, date: NaiveDate, mood: Option<Mood>, descriptors: Option<&str>) -> Result<MoodEntry> {
        let mut entry = self.get_entry_for_date(date)?.ok_or_else(|| {
            DewitError::NotFound(format!("No mood entry found for {date}. Use 'mood add' to create one."))
        })?;

        if let Some(mood) = mood {
            entry.mood = mood;
        }
        if let Some(descriptors) = descriptors {
            entry.descriptors = descriptors.to_string();
        }

        self.entries.update(&entry)?;
        Ok(entry)
    }

    /// Catalog tokens for a mood label, matched case-insensitively.
    /// An unknown label or missing row yields an empty list.
    pub fn get_descriptors(&self, mood: &str) -> Result<Vec<String>> {
        let label = mood.trim();
        let row = self.descriptors.list()?.into_iter().find(|d| d.mood.as_str().eq_ignore_ascii_case(label));

        Ok(row
            .map(|d| d.descriptors.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_string).collect())
            .unwrap_or_default())
    }

    pub fn get_all_descriptors(&self) -> Result<Vec<MoodDescriptorItem>> {
        let mut items = self.descriptors.list()?;
        items.sort_by(|a, b| a.mood.as_str().cmp(b.mood.as_str()));
        Ok(items)
    }

    pub fn set_descriptors(&self, mood: Mood, descriptors: &str) -> Result<()> {
        match self.descriptors.list()?.into_iter().find(|d| d.mood == mood) {
            Some(mut existing) => {
                existing.descriptors = descriptors.to_string();
                self.descriptors.update(&existing)
            }
            None => {
                let mut item = MoodDescriptorItem {
                    id: 0,
                    mood,
                    descriptors: descriptors.to_string(),
                };
                self.descriptors.add(&mut item)
            }
        }
    }

    pub fn reset_descriptors(&self, mood: &str) -> Result<()> {
        let mood: Mood = mood.parse()?;
        self.set_descriptors(mood, mood.default_descriptors())
    }

    /// Fills an empty catalog with the defaults. Returns the number of rows added.
    pub fn seed_default_descriptors(&self) -> Result<usize> {
        if !self.descriptors.list()?.is_empty() {
            return Ok(0);
        }

        for mood in Mood::ALL {
            let mut item = MoodDescriptorItem {
                id: 0,
                mood,
                descriptors: mood.default_descriptors().to_string(),
            };
            self.descriptors.add(&mut item)?;
        }

        debug!("seeded default mood descriptors");
        Ok(Mood::ALL.len())
    }
}
