use common::EntryId;

/// A persisted row of the `entries` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub data: String,
}
