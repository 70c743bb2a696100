pub mod config;
pub mod export;
pub mod import;
pub mod mood;
pub mod setup;
pub mod task;

use crate::{
    db::{db::Db, repository::SqliteRepository},
    libs::{
        config::{ConfigItem, ConfigurationService, SETUP_COMPLETED},
        messages::Message,
        mood::{MoodDescriptorItem, MoodEntry, MoodService},
        task::{TaskItem, TaskService},
    },
    msg_info,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Add, complete, edit, list, export and import tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Log and review your daily mood", arg_required_else_help = true)]
    Mood(mood::MoodArgs),
    #[command(about = "View and change settings and mood descriptors", arg_required_else_help = true)]
    Config(config::ConfigArgs),
    #[command(about = "Create the database and default mood descriptors")]
    Setup,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Print diagnostic logs and full error causes
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Everything a command handler needs for one invocation.
pub struct AppContext {
    pub db: Db,
    pub verbose: bool,
}

impl AppContext {
    pub fn new(db: Db, verbose: bool) -> Self {
        Self { db, verbose }
    }

    pub fn tasks(&self) -> TaskService<SqliteRepository<'_, TaskItem>> {
        TaskService::new(SqliteRepository::new(&self.db.conn))
    }

    pub fn moods(&self) -> MoodService<SqliteRepository<'_, MoodEntry>, SqliteRepository<'_, MoodDescriptorItem>> {
        MoodService::new(SqliteRepository::new(&self.db.conn), SqliteRepository::new(&self.db.conn))
    }

    pub fn config(&self) -> ConfigurationService<SqliteRepository<'_, ConfigItem>> {
        ConfigurationService::new(SqliteRepository::new(&self.db.conn))
    }
}

impl Cli {
    /// Opens the user's database and runs the parsed command against it.
    pub fn execute(self) -> Result<()> {
        let ctx = AppContext::new(Db::new()?, self.verbose);
        run(&ctx, self.command)
    }
}

pub fn run(ctx: &AppContext, command: Commands) -> Result<()> {
    if !matches!(command, Commands::Setup) && !ctx.config().key_exists(SETUP_COMPLETED)? {
        msg_info!(Message::FirstRunDetected);
        setup::cmd(ctx)?;
    }

    match command {
        Commands::Task(args) => task::cmd(ctx, args),
        Commands::Mood(args) => mood::cmd(ctx, args),
        Commands::Config(args) => config::cmd(ctx, args),
        Commands::Setup => setup::cmd(ctx),
    }
}
