use crate::models::*;
use crate::{API_BASE_URL, API_LOG_FILE, USER_AGENT};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, REFERER, USER_AGENT as USER_AGENT_HEADER};
use std::fs::OpenOptions;
use std::io::Write;

#[derive(Clone)]
pub struct AppWashClient {
    client: reqwest::Client,
    pub token: String,
    api_logging: bool,
}

impl AppWashClient {
    /// Exchange credentials for a session token and build the client that
    /// carries the session header set on every subsequent call.
    pub async fn login(email: &str, password: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
        headers.insert("language", HeaderValue::from_static("en"));
        headers.insert("platform", HeaderValue::from_static("appWash"));

        let login_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        let url = format!("{}/login", API_BASE_URL);
        let payload = serde_json::json!({
            "email": email,
            "password": password
        });
        let response = login_client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Login failed with status {}: {}", status, error_body).into());
        }

        // Credential bodies stay out of the API log.
        let login_response: LoginResponse = response.json().await?;
        Ok(Self::with_token(login_response.login.token))
    }

    /// Build a client around an already obtained session token.
    pub fn with_token(token: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static("https://appwash.com/"));
        headers.insert("token", HeaderValue::from_str(&token).unwrap());
        headers.insert("language", HeaderValue::from_static("NO"));
        headers.insert("platform", HeaderValue::from_static("appWash"));
        headers.insert("dnt", HeaderValue::from_static("1"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        AppWashClient {
            client,
            token,
            api_logging: false,
        }
    }

    pub fn set_api_logging(&mut self, logging: bool) {
        self.api_logging = logging;
    }

    fn log_api_call(&self, method: &str, url: &str, response_status: u16, response_body: &str) {
        if !self.api_logging {
            return;
        }

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "[{}] {} {} -> {}\n{}\n",
            timestamp, method, url, response_status, response_body
        );

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(API_LOG_FILE)
        {
            let _ = file.write_all(log_entry.as_bytes());
        }
    }

    // Location operations
    /// Look up a single location id. The status code is not consulted: a
    /// body that parses as JSON but lacks `data.name` is a miss, a body
    /// that is not JSON is an error.
    pub async fn get_location(&self, location_id: u32) -> Result<LocationLookup, Box<dyn std::error::Error>> {
        let url = format!("{}/locations/split/{}", API_BASE_URL, location_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();

        let response_text = response.text().await?;
        self.log_api_call("GET", &url, status, &response_text);

        let location_response: LocationResponse = serde_json::from_str(&response_text)?;
        match location_response.data.and_then(|data| data.name) {
            Some(name) => Ok(LocationLookup::Found(LocationRecord { id: location_id, name })),
            None => Ok(LocationLookup::Missing),
        }
    }

    // Account operations
    pub async fn get_balance(&self) -> Result<(u32, String), Box<dyn std::error::Error>> {
        let url = format!("{}/account/getprepaid", API_BASE_URL);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(format!("Balance request failed with status: {}", response.status()).into());
        }

        let balance_response: BalanceResponse = response.json().await?;
        Ok((balance_response.balance_cents / 100, balance_response.currency))
    }

    // Machine operations
    pub async fn get_machines(&self, location_id: u32) -> Result<Vec<MachineData>, Box<dyn std::error::Error>> {
        let url = format!("{}/location/{}/connectorsv2", API_BASE_URL, location_id);
        let payload = serde_json::json!({
            "serviceType": "WASHING_MACHINE"
        });
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(format!("Machine list failed with status {}: {}", status, error_body).into());
        }

        let machines_response: MachinesResponse = response.json().await?;
        Ok(machines_response.data)
    }
}
