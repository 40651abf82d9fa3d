use serde::Deserialize;

// API response envelopes

/// Lookup envelope. Only `data` is consulted; status codes and the error
/// fields the API also sends never decide found-vs-missing.
#[derive(Debug, Deserialize)]
pub struct LocationResponse {
    #[serde(default)]
    pub data: Option<crate::models::LocationData>,
}

#[derive(Debug, Deserialize)]
pub struct MachinesResponse {
    pub data: Vec<crate::models::MachineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub currency: String,
    pub balance_cents: u32,
}
