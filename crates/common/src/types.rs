use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage-assigned identifier of a persisted entry.
///
/// Backed by a PostgreSQL `SERIAL` column, so the database is the only
/// source of new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i32);

impl EntryId {
    /// Wraps a raw identifier read back from storage.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EntryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Opaque payload stored in each entry.
///
/// Always freshly generated from a random (v4) UUID and never taken from
/// user input. Renders as the canonical lowercase hyphenated form, e.g.
/// `67e55044-10b1-426f-9247-bb680e5fe0c8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryData(Uuid);

impl EntryData {
    /// Generates a new random payload.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for EntryData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for EntryData {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_creates_unique_payloads() {
        let a = EntryData::generate();
        let b = EntryData::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_payload_is_random_v4() {
        let data = EntryData::generate();
        assert_eq!(data.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn display_is_canonical_hyphenated_lowercase() {
        let uuid = Uuid::parse_str("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        let data = EntryData::from(uuid);
        assert_eq!(data.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn display_parses_back_to_same_uuid() {
        let data = EntryData::generate();
        let text = data.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(Uuid::parse_str(&text).unwrap(), data.as_uuid());
    }

    #[test]
    fn entry_id_serializes_as_plain_integer() {
        let id = EntryId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn entry_id_from_raw_preserves_value() {
        let id = EntryId::from(7);
        assert_eq!(id.as_i32(), 7);
        assert_eq!(id, EntryId::new(7));
    }

    #[test]
    fn entry_id_orders_by_value() {
        assert!(EntryId::new(1) < EntryId::new(2));
    }
}
