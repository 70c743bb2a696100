use super::AppContext;
use crate::{
    libs::{
        converter::{DataConverter, DataFormat},
        messages::Message,
        task::{TaskDuration, TaskQuery},
    },
    msg_success,
};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Directory to write the file into; defaults to the current directory
    #[arg(short, long)]
    path: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = DataFormat::Json)]
    format: DataFormat,
}

pub fn cmd(ctx: &AppContext, args: ExportArgs) -> Result<()> {
    let query = TaskQuery {
        duration: TaskDuration::All,
        ..TaskQuery::default()
    };
    let mut tasks = ctx.tasks().get_tasks(&query)?;
    tasks.sort_by(|a, b| a.added_on.cmp(&b.added_on).then(a.id.cmp(&b.id)));

    let stem = ctx.config().export_title(args.format.extension())?;
    let dir = args.path.unwrap_or_default();
    let output = DataConverter::output_path(&dir, &stem, args.format)?;

    DataConverter::export_to_file(&tasks, &output, args.format)
        .with_context(|| format!("Failed to export tasks to {}", output.display()))?;

    msg_success!(Message::ExportCompleted(output.display().to_string()));
    Ok(())
}
