//! Audit logging
//!
//! Every create, update and delete of a transaction, income record or
//! category is appended to a line-delimited JSON log (JSONL) with before and
//! after snapshots.
//!
//! - `AuditEntry`: one operation on one entity
//! - `AuditLogger`: appends entries to and reads them back from the log file
//! - `generate_diff`: `field: old -> new` summary for updates

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
