use super::AppContext;
use crate::{
    libs::{
        calendar::{self, CalendarSpan},
        date_parser,
        formatter::format_date,
        messages::Message,
        mood::Mood,
        sanitizer::normalize_descriptors,
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect, Select};

#[derive(Debug, Args)]
pub struct MoodArgs {
    #[command(subcommand)]
    command: MoodCommand,
}

#[derive(Debug, Subcommand)]
enum MoodCommand {
    /// Log your mood for today
    Add {
        /// veryhappy, happy, meh, down or extradown
        #[arg(short, long)]
        mood: Option<String>,
        /// Comma-separated descriptors, e.g. calm,focused
        #[arg(short, long)]
        descriptors: Option<String>,
    },
    /// Change an existing mood entry
    Update {
        /// today, yesterday, last monday, YYYY-MM-DD or MM-DD; defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(short, long)]
        mood: Option<String>,
        #[arg(short, long)]
        descriptors: Option<String>,
    },
    /// Show your mood calendar
    View {
        #[arg(short, long, value_enum, default_value_t = CalendarSpan::Week)]
        duration: CalendarSpan,
        /// YYYY-MM for month, YYYY-Q# for quarter, YYYY for year; defaults to the current one
        #[arg(short, long)]
        period: Option<String>,
    },
}

pub fn cmd(ctx: &AppContext, args: MoodArgs) -> Result<()> {
    match args.command {
        MoodCommand::Add { mood, descriptors } => handle_add(ctx, mood, descriptors),
        MoodCommand::Update { date, mood, descriptors } => handle_update(ctx, date, mood, descriptors),
        MoodCommand::View { duration, period } => handle_view(ctx, duration, period),
    }
}

fn handle_add(ctx: &AppContext, mood: Option<String>, descriptors: Option<String>) -> Result<()> {
    let service = ctx.moods();
    let today = Local::now().date_naive();

    if let Some(existing) = service.get_entry_for_date(today)? {
        msg_warning!(Message::MoodAlreadyExists(format_date(&today)));
        View::mood_entries(&[existing]);

        let update = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmUpdateMood(format_date(&today)).to_string())
            .default(true)
            .interact()?;
        if !update {
            msg_info!(Message::MoodNotUpdated);
            return Ok(());
        }

        let mood = resolve_mood(mood.as_deref())?;
        let descriptors = resolve_descriptors(ctx, mood, descriptors.as_deref())?;
        service.update_entry(today, Some(mood), Some(&descriptors))?;
        msg_success!(Message::MoodUpdated(format_date(&today)));
        return Ok(());
    }

    let mood = resolve_mood(mood.as_deref())?;
    let descriptors = resolve_descriptors(ctx, mood, descriptors.as_deref())?;
    let entry = service.add_entry(mood, &descriptors, today)?;

    msg_success!(Message::MoodAdded(format_date(&entry.date)));
    View::mood_entries(&[entry]);
    Ok(())
}

fn handle_update(ctx: &AppContext, date: Option<String>, mood: Option<String>, descriptors: Option<String>) -> Result<()> {
    let service = ctx.moods();
    let date = match date.as_deref() {
        Some(raw) => date_parser::parse(raw)?,
        None => Local::now().date_naive(),
    };

    let existing = service.get_entry_for_date(date)?;
    if let Some(existing) = &existing {
        msg_print!(Message::MoodCurrentEntry(
            format_date(&date),
            existing.mood.display_name().to_string(),
            existing.descriptors.clone()
        ));
    }

    let mood = match mood.as_deref() {
        Some(raw) => Some(raw.parse::<Mood>()?),
        None if existing.is_some() && !confirm(Message::PromptKeepMood)? => Some(select_mood(Message::PromptSelectNewMood)?),
        None => None,
    };

    let descriptors = match descriptors.as_deref() {
        Some(raw) => Some(normalize_descriptors(raw)),
        None => match &existing {
            Some(entry) if !confirm(Message::PromptKeepDescriptors)? => {
                Some(select_descriptors(ctx, mood.unwrap_or(entry.mood))?)
            }
            _ => None,
        },
    };

    let entry = service.update_entry(date, mood, descriptors.as_deref())?;
    msg_success!(Message::MoodUpdated(format_date(&entry.date)));
    View::mood_entries(&[entry]);
    Ok(())
}

fn handle_view(ctx: &AppContext, span: CalendarSpan, period: Option<String>) -> Result<()> {
    let range = calendar::resolve(span, period.as_deref(), Local::now().date_naive())?;
    let entries = ctx.moods().get_entries_in_range(range.from, range.to)?;

    View::calendar(&range, &entries);
    if entries.is_empty() {
        msg_info!(Message::MoodEntriesNotFound);
    }
    Ok(())
}

fn resolve_mood(input: Option<&str>) -> Result<Mood> {
    match input {
        Some(raw) => Ok(raw.parse()?),
        None => select_mood(Message::PromptSelectMood),
    }
}

fn resolve_descriptors(ctx: &AppContext, mood: Mood, input: Option<&str>) -> Result<String> {
    match input {
        Some(raw) => Ok(normalize_descriptors(raw)),
        None => select_descriptors(ctx, mood),
    }
}

fn select_mood(prompt: Message) -> Result<Mood> {
    let names: Vec<&str> = Mood::ALL.iter().map(|m| m.display_name()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&names)
        .default(1)
        .interact()?;
    Ok(Mood::ALL[index])
}

/// Empty when the catalog has nothing for `mood`.
fn select_descriptors(ctx: &AppContext, mood: Mood) -> Result<String> {
    let available = ctx.moods().get_descriptors(mood.as_str())?;
    if available.is_empty() {
        return Ok(String::new());
    }

    let selected = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectDescriptors(mood.display_name().to_string()).to_string())
        .items(&available)
        .interact()?;

    Ok(selected.into_iter().map(|i| available[i].as_str()).collect::<Vec<_>>().join(","))
}

fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(true)
        .interact()?)
}
