//! Snapshot output encoding: ISO-8601 timestamps and the JSON writer.

use std::io::Write;

use crate::error::SnapshotResult;
use crate::types::StackSetRecord;

/// Timestamp serialization as ISO-8601 text (`2024-01-01T00:00:00`, with a
/// fractional part only when non-zero), never a numeric epoch.
pub mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn serialize_opt<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(timestamp) => serialize(timestamp, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Write the merged records as a single JSON array.
///
/// Nothing is written until the caller has a complete snapshot in hand, so
/// a failed run never leaves partial output behind.
pub fn write_snapshot<W: Write>(writer: W, records: &[StackSetRecord]) -> SnapshotResult<()> {
    serde_json::to_writer(writer, records)?;
    Ok(())
}
