use super::AppContext;
use crate::{
    libs::{
        converter::{DataConverter, DataFormat},
        messages::Message,
        task::TaskItem,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// File to import
    path: PathBuf,
    /// Defaults to the file extension
    #[arg(short, long, value_enum)]
    format: Option<DataFormat>,
}

pub fn cmd(ctx: &AppContext, args: ImportArgs) -> Result<()> {
    let format = match args.format.or_else(|| DataFormat::from_extension(&args.path)) {
        Some(format) => format,
        None => msg_bail_anyhow!(Message::ImportFormatUnknown(args.path.display().to_string())),
    };

    let records: Vec<TaskItem> = DataConverter::import_from_file(&args.path, format)
        .with_context(|| format!("Failed to import tasks from {}", args.path.display()))?;

    if records.is_empty() {
        msg_info!(Message::ImportFileEmpty(args.path.display().to_string()));
        return Ok(());
    }

    let service = ctx.tasks();
    let mut imported = Vec::with_capacity(records.len());
    for record in records {
        imported.push(service.import_task(record)?);
    }

    msg_success!(Message::ImportCompleted(imported.len(), args.path.display().to_string()));
    View::tasks(&imported);
    Ok(())
}
