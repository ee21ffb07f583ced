pub mod entries;
pub mod metrics;
pub mod status;
