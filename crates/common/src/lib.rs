pub mod types;

pub use types::{EntryData, EntryId};
