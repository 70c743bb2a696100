use super::AppContext;
use crate::{
    db::migrations::MigrationManager,
    libs::{config::SETUP_COMPLETED, messages::Message},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;

/// Seeds the descriptor catalog and marks setup as done. Safe to run again.
pub fn cmd(ctx: &AppContext) -> Result<()> {
    msg_info!(Message::SetupRunning);

    let seeded = ctx.moods().seed_default_descriptors()?;
    if seeded > 0 {
        msg_info!(Message::DescriptorsSeeded(seeded));
    }

    if ctx.verbose {
        for (version, name, applied_at) in MigrationManager::new().get_migration_history(&ctx.db.conn)? {
            msg_print!(format!("  v{}: {} (applied: {})", version, name, applied_at));
        }
    }

    ctx.config().set_value(SETUP_COMPLETED, "true")?;
    msg_success!(Message::SetupCompleted);
    Ok(())
}
