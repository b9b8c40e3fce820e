//! Stats: per-kind object counts.

use serde::{Deserialize, Serialize};

/// Number of stored objects of each kind, keyed by collection name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub amenities: u64,
    pub cities: u64,
    pub places: u64,
    pub reviews: u64,
    pub states: u64,
    pub users: u64,
}
