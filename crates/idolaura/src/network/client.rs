//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes
//! USER_AGENT and timeout configuration, attaches per-request headers,
//! and maps non-2xx responses to `SiteError::Backend`.

use crate::config::network::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, SiteError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new client with default Idolaura settings
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
            .build()?;
        Ok(Self { inner })
    }

    /// GET a URL and deserialize the JSON response
    pub fn get_json<T: DeserializeOwned>(&self, url: &str, headers: &[(&str, &str)]) -> Result<T> {
        let mut req = self.inner.get(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let resp = check_status(req.send()?)?;
        Ok(resp.json::<T>()?)
    }

    /// POST a JSON body and deserialize the JSON response
    pub fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &impl Serialize,
    ) -> Result<T> {
        let mut req = self.inner.post(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let resp = check_status(req.json(body).send()?)?;
        Ok(resp.json::<T>()?)
    }

    /// POST a JSON body, discarding the response body
    pub fn post_unit(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &impl Serialize,
    ) -> Result<()> {
        let mut req = self.inner.post(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        check_status(req.json(body).send()?)?;
        Ok(())
    }

    /// DELETE a URL, discarding the response body
    pub fn delete(&self, url: &str, headers: &[(&str, &str)]) -> Result<()> {
        let mut req = self.inner.delete(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        check_status(req.send()?)?;
        Ok(())
    }
}

/// Turn an error response into `SiteError::Backend`, keeping the body
/// (PostgREST and the auth endpoint both put the reason there)
fn check_status(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().unwrap_or_default();
    Err(SiteError::Backend {
        status: status.as_u16(),
        message: if message.trim().is_empty() {
            status.to_string()
        } else {
            message
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_get_json_unresolvable_host() {
        let client = HttpClient::new().unwrap();
        let result: Result<serde_json::Value> =
            client.get_json("http://invalid.invalid.invalid", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_unresolvable_host() {
        let client = HttpClient::new().unwrap();
        let result = client.delete("http://invalid.invalid.invalid", &[("apikey", "x")]);
        assert!(result.is_err());
    }
}
