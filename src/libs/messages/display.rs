//! Text for every user-facing [`Message`].
//!
//! All wording lives here so commands only pick a variant and its parameters.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Added task #{}", id),
            Message::TaskCompleted(id) => format!("Task #{} marked as done", id),
            Message::TaskUpdated(id) => format!("Updated task #{}", id),
            Message::TaskDeleted(id) => format!("Deleted task #{}", id),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({})", count),

            // === EXPORT / IMPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Exported tasks to {}", path),
            Message::ImportCompleted(count, path) => format!("Imported {} task(s) from {}", count, path),
            Message::ImportFileEmpty(path) => format!("No tasks found in {}", path),
            Message::ImportFormatUnknown(path) => {
                format!("Cannot infer the format of {}. Pass --format json or --format csv.", path)
            }

            // === MOOD MESSAGES ===
            Message::MoodAdded(date) => format!("Mood recorded for {}", date),
            Message::MoodUpdated(date) => format!("Mood updated for {}", date),
            Message::MoodAlreadyExists(date) => format!("You already logged your mood for {}", date),
            Message::MoodNotUpdated => "Existing mood entry left unchanged".to_string(),
            Message::MoodEntriesNotFound => "No mood entries in this period".to_string(),
            Message::PromptSelectMood => "How are you feeling today?".to_string(),
            Message::PromptSelectDescriptors(mood) => {
                format!("What describes feeling {}? (space to select, enter to confirm)", mood)
            }
            Message::ConfirmUpdateMood(date) => format!("Update the entry for {} instead?", date),
            Message::MoodCurrentEntry(date, mood, descriptors) => {
                format!("Current entry for {}: {} | {}", date, mood, descriptors)
            }
            Message::PromptKeepMood => "Keep current mood?".to_string(),
            Message::PromptKeepDescriptors => "Keep current descriptors?".to_string(),
            Message::PromptSelectNewMood => "Select new mood".to_string(),
            Message::CalendarLegend => "Legend:".to_string(),

            // === CONFIG MESSAGES ===
            Message::ConfigValueSet(key, value) => format!("Set {} = {}", key, value),
            Message::ConfigValueDeleted(key) => format!("Removed {}", key),
            Message::ConfigEmpty => "No configuration values set".to_string(),
            Message::DescriptorsUpdated(mood) => format!("Descriptors updated for {}", mood),
            Message::DescriptorsReset(mood) => format!("Descriptors for {} reset to defaults", mood),
            Message::DescriptorsResetAll => "All mood descriptors reset to defaults".to_string(),
            Message::DescriptorsEmpty => "No mood descriptors configured. Run 'dewit setup'.".to_string(),

            // === SETUP MESSAGES ===
            Message::FirstRunDetected => "Detected that dewit is running for the first time".to_string(),
            Message::SetupRunning => "Configuring dewit for first time use".to_string(),
            Message::SetupCompleted => "dewit has been configured! Run 'dewit --help' for usage information".to_string(),
            Message::DescriptorsSeeded(count) => format!("Added default descriptors for {} moods", count),

            // === GENERAL ===
            Message::CausedBy(cause) => format!("  caused by: {}", cause),
        };
        write!(f, "{}", s)
    }
}
