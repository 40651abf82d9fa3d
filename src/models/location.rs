use serde::Deserialize;

/// One resolved identifier/name pair, exactly what lands in the CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRecord {
    pub id: u32,
    pub name: String,
}

/// Outcome of a single location lookup. `Missing` covers every response
/// shape without a usable `data.name`; transport and decode failures are
/// errors, not variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationLookup {
    Found(LocationRecord),
    Missing,
}

/// `data` payload of a location lookup. Every field is optional so that a
/// sparse body stays a miss instead of a decode error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    pub name: Option<String>,
    pub external_id: Option<String>,
    pub location_status: Option<String>,
}
