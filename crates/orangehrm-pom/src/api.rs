// Auxiliary REST client
//
// Thin bearer-token client used for data lookups that are awkward through the
// UI, currently the project-admins listing. Configured entirely from the
// environment; not part of the page-object core.

use serde_json::Value;

use crate::error::{Error, Result};

/// Bearer-token-authenticated JSON client for the auxiliary lookup API.
pub struct ApiClient {
    http: reqwest::Client,
    api_url: String,
    bearer_token: String,
}

impl ApiClient {
    pub fn new(api_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            bearer_token: bearer_token.into(),
        }
    }

    /// Builds a client from `API_URL` and `BEARER_TOKEN` (a `.env` file is
    /// honored).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let api_url = std::env::var("API_URL")
            .map_err(|_| Error::Config("API_URL is not set".to_string()))?;
        let bearer_token = std::env::var("BEARER_TOKEN")
            .map_err(|_| Error::Config("BEARER_TOKEN is not set".to_string()))?;
        Ok(Self::new(api_url, bearer_token))
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        let response = self
            .http
            .get(self.endpoint_url(endpoint))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn post(&self, endpoint: &str, body: &Value) -> Result<Value> {
        let response = self
            .http
            .post(self.endpoint_url(endpoint))
            .bearer_auth(&self.bearer_token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn put(&self, endpoint: &str, body: &Value) -> Result<Value> {
        let response = self
            .http
            .put(self.endpoint_url(endpoint))
            .bearer_auth(&self.bearer_token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, endpoint: &str) -> Result<u16> {
        let response = self
            .http
            .delete(self.endpoint_url(endpoint))
            .bearer_auth(&self.bearer_token)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.status().as_u16())
    }

    /// Lists the employees available as project admins.
    pub async fn list_project_admins(&self) -> Result<Value> {
        self.get("project-admins").await
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let client = ApiClient::new("https://api.example.com/", "token");
        assert_eq!(
            client.endpoint_url("project-admins"),
            "https://api.example.com/project-admins"
        );

        let client = ApiClient::new("https://api.example.com", "token");
        assert_eq!(
            client.endpoint_url("project-admins"),
            "https://api.example.com/project-admins"
        );
    }
}
