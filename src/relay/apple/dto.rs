//! iTunes lookup API Data Transfer Objects
//!
//! These types match what `https://itunes.apple.com/lookup` returns.
//! DO NOT use these types outside the apple module - convert to domain types.
//!
//! Every result field is optional: the endpoint mixes track, collection and
//! artist "wrapper types" in one list and omits whatever does not apply.

use serde::{Deserialize, Serialize};

/// Lookup response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// Number of entries in `results`, as reported by the API
    pub result_count: u64,
    #[serde(default)]
    pub results: Vec<LookupResult>,
}

/// A single lookup result
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// "track", "collection" or "artist"
    pub wrapper_type: Option<String>,
    /// Media kind, e.g. "song"
    pub kind: Option<String>,
    pub track_id: Option<u64>,
    pub collection_id: Option<u64>,
    pub track_name: Option<String>,
    /// Album title
    pub collection_name: Option<String>,
    pub artist_name: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
