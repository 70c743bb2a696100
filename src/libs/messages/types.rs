#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(i64),
    TaskCompleted(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TasksNotFound,
    TasksHeader(usize),

    // === EXPORT / IMPORT MESSAGES ===
    ExportCompleted(String), // path
    ImportCompleted(usize, String), // count, path
    ImportFileEmpty(String),
    ImportFormatUnknown(String),

    // === MOOD MESSAGES ===
    MoodAdded(String), // date
    MoodUpdated(String),
    MoodAlreadyExists(String),
    MoodNotUpdated,
    MoodEntriesNotFound,
    PromptSelectMood,
    PromptSelectDescriptors(String), // mood name
    ConfirmUpdateMood(String),
    MoodCurrentEntry(String, String, String), // date, mood, descriptors
    PromptKeepMood,
    PromptKeepDescriptors,
    PromptSelectNewMood,
    CalendarLegend,

    // === CONFIG MESSAGES ===
    ConfigValueSet(String, String), // key, value
    ConfigValueDeleted(String),
    ConfigEmpty,
    DescriptorsUpdated(String),
    DescriptorsReset(String),
    DescriptorsResetAll,
    DescriptorsEmpty,

    // === SETUP MESSAGES ===
    FirstRunDetected,
    SetupRunning,
    SetupCompleted,
    DescriptorsSeeded(usize),

    // === GENERAL ===
    CausedBy(String),
}
