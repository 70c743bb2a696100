use super::{export, import, AppContext};
use crate::{
    libs::{
        messages::Message,
        task::{TaskDuration, TaskQuery, TaskSort, TaskStatus, TaskUpdate},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task you are doing right now
    Now(AddArgs),
    /// Add a task to do later
    Later(AddArgs),
    /// Mark a task as done
    Done {
        /// Task ID
        id: i64,
        /// Completion time, e.g. "2026-02-19 14:30"; defaults to now
        #[arg(long)]
        completed_at: Option<String>,
    },
    /// Change the title or tags of a task
    Edit {
        /// Task ID
        id: i64,
        #[arg(long)]
        title: Option<String>,
        /// Comma-separated tags to add
        #[arg(long)]
        add_tags: Option<String>,
        /// Comma-separated tags to remove
        #[arg(long)]
        remove_tags: Option<String>,
        /// Remove all tags
        #[arg(long)]
        reset_tags: bool,
    },
    /// List tasks
    List(ListArgs),
    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
    },
    /// Export all tasks to a file
    Export(export::ExportArgs),
    /// Import tasks from a file
    Import(import::ImportArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// What you are working on
    #[arg(required = true)]
    title: String,
    /// Comma-separated tags
    #[arg(short, long)]
    tags: Option<String>,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long, value_enum, default_value_t = TaskSort::Date)]
    sort: TaskSort,
    #[arg(short, long, value_enum, default_value_t = TaskDuration::Today)]
    duration: TaskDuration,
    #[arg(long, value_enum)]
    status: Option<TaskStatus>,
    /// Only tasks carrying all of these comma-separated tags
    #[arg(short, long)]
    tags: Option<String>,
    /// Case-insensitive text to look for in the title
    #[arg(short, long)]
    search: Option<String>,
}

pub fn cmd(ctx: &AppContext, args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Now(add) => handle_add(ctx, add, TaskStatus::Doing),
        TaskCommand::Later(add) => handle_add(ctx, add, TaskStatus::Later),
        TaskCommand::Done { id, completed_at } => handle_done(ctx, id, completed_at),
        TaskCommand::Edit {
            id,
            title,
            add_tags,
            remove_tags,
            reset_tags,
        } => {
            let update = TaskUpdate {
                title,
                add_tags,
                remove_tags,
                reset_tags,
            };
            handle_edit(ctx, id, update)
        }
        TaskCommand::List(list) => handle_list(ctx, list),
        TaskCommand::Delete { id } => handle_delete(ctx, id),
        TaskCommand::Export(export) => export::cmd(ctx, export),
        TaskCommand::Import(import) => import::cmd(ctx, import),
    }
}

fn handle_add(ctx: &AppContext, args: AddArgs, status: TaskStatus) -> Result<()> {
    let task = ctx.tasks().add_task(&args.title, status, args.tags.as_deref())?;
    msg_success!(Message::TaskAdded(task.id));
    Ok(())
}

fn handle_done(ctx: &AppContext, id: i64, completed_at: Option<String>) -> Result<()> {
    let task = ctx.tasks().complete_task(id, completed_at.as_deref())?;
    msg_success!(Message::TaskCompleted(task.id));
    View::tasks(&[task]);
    Ok(())
}

fn handle_edit(ctx: &AppContext, id: i64, update: TaskUpdate) -> Result<()> {
    let task = ctx.tasks().update_task_details(id, &update)?;
    msg_success!(Message::TaskUpdated(task.id));
    View::tasks(&[task]);
    Ok(())
}

fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let query = TaskQuery {
        sort: args.sort,
        duration: args.duration,
        status: args.status,
        tags: args.tags,
        search: args.search,
    };
    let tasks = ctx.tasks().get_tasks(&query)?;

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(tasks.len()), true);
    View::tasks(&tasks);
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: i64) -> Result<()> {
    ctx.tasks().delete_task(id)?;
    msg_success!(Message::TaskDeleted(id));
    Ok(())
}
