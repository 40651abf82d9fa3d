use serde::Deserialize;

/// Login exchange response. A body without `login.token` fails to
/// deserialize, which aborts the run before any lookup is issued.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub error_code: u32,
    pub error_description: String,
    pub server_time: u64,
    pub login: LoginInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInfo {
    pub email: String,
    pub username: String,
    pub language: String,
    pub token: String,
}
