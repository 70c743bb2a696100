use super::AppContext;
use crate::{
    libs::{
        messages::Message,
        mood::Mood,
        sanitizer::normalize_descriptors,
        view::View,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Show all settings
    List,
    /// Set a value, e.g. `config set export.json.title backup`
    Set { key: String, value: String },
    /// Remove a setting
    Delete { key: String },
    /// Manage the descriptors offered for each mood
    Descriptors {
        #[command(subcommand)]
        command: DescriptorsCommand,
    },
}

#[derive(Debug, Subcommand)]
enum DescriptorsCommand {
    /// Show descriptors for every mood
    List,
    /// Replace the descriptors of one mood
    Set {
        mood: String,
        /// Comma-separated descriptors
        descriptors: String,
    },
    /// Restore the built-in descriptors
    Reset {
        #[arg(required_unless_present = "all")]
        mood: Option<String>,
        /// Reset every mood
        #[arg(long, conflicts_with = "mood")]
        all: bool,
    },
}

pub fn cmd(ctx: &AppContext, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::List => handle_list(ctx),
        ConfigCommand::Set { key, value } => handle_set(ctx, key, value),
        ConfigCommand::Delete { key } => handle_delete(ctx, key),
        ConfigCommand::Descriptors { command } => match command {
            DescriptorsCommand::List => handle_descriptors_list(ctx),
            DescriptorsCommand::Set { mood, descriptors } => handle_descriptors_set(ctx, mood, descriptors),
            DescriptorsCommand::Reset { mood, all } => handle_descriptors_reset(ctx, mood, all),
        },
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let items = ctx.config().get_all()?;

    if items.is_empty() {
        msg_info!(Message::ConfigEmpty);
        return Ok(());
    }

    View::config(&items);
    Ok(())
}

fn handle_set(ctx: &AppContext, key: String, value: String) -> Result<()> {
    ctx.config().set_value(&key, &value)?;
    msg_success!(Message::ConfigValueSet(key.trim().to_string(), value));
    Ok(())
}

fn handle_delete(ctx: &AppContext, key: String) -> Result<()> {
    ctx.config().delete_value(&key)?;
    msg_success!(Message::ConfigValueDeleted(key));
    Ok(())
}

fn handle_descriptors_list(ctx: &AppContext) -> Result<()> {
    let items = ctx.moods().get_all_descriptors()?;

    if items.is_empty() {
        msg_info!(Message::DescriptorsEmpty);
        return Ok(());
    }

    View::descriptors(&items);
    Ok(())
}

fn handle_descriptors_set(ctx: &AppContext, mood: String, descriptors: String) -> Result<()> {
    let mood: Mood = mood.parse()?;
    let descriptors = normalize_descriptors(&descriptors);

    ctx.moods().set_descriptors(mood, &descriptors)?;
    msg_success!(Message::DescriptorsUpdated(mood.display_name().to_string()));
    Ok(())
}

fn handle_descriptors_reset(ctx: &AppContext, mood: Option<String>, all: bool) -> Result<()> {
    let service = ctx.moods();

    if all {
        for mood in Mood::ALL {
            service.reset_descriptors(mood.as_str())?;
        }
        msg_success!(Message::DescriptorsResetAll);
        return Ok(());
    }

    // clap requires a mood whenever --all is absent
    if let Some(label) = mood {
        let mood: Mood = label.parse()?;
        service.reset_descriptors(mood.as_str())?;
        msg_success!(Message::DescriptorsReset(mood.display_name().to_string()));
    }
    Ok(())
}
