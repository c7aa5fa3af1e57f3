//! Audit log command

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(
    storage: &Storage,
    limit: usize,
    entity: Option<String>,
) -> LedgerResult<()> {
    let entity_type = entity
        .map(|e| e.parse::<EntityType>().map_err(LedgerError::Validation))
        .transpose()?;

    let entries = storage.audit().read_recent(limit, entity_type)?;
    if entries.is_empty() {
        println!("No changes recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
