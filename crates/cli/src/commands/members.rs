//! Member roster commands.

use super::{CommandError, open_store};

/// List registered members.
pub fn list() -> Result<(), CommandError> {
    let (_, store) = open_store()?;
    let members = store.members();

    if members.is_empty() {
        tracing::info!("No members registered");
        return Ok(());
    }

    for member in &members {
        tracing::info!(
            "{} <{}> {} {} joined {}",
            member.name,
            member.email,
            member.rank,
            member.contribution,
            member.joined_at
        );
    }
    tracing::info!("{} member(s)", members.len());
    Ok(())
}
