use std::collections::HashMap;
use std::time::Duration;

use super::{client::DnsApiClient, models::*, payload::record_payload};
use crate::config::Config;
use crate::error::{DdnsError, Result};
use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::{header, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Cloudflare v4 client.
///
/// docs: https://developers.cloudflare.com/api/resources/dns/subresources/records/
pub struct CloudflareClient {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
    zone_mapping: HashMap<String, String>,
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    fn zone_id(&self, zone_name: &str) -> Result<String> {
        self.zone_mapping
            .get(zone_name)
            .cloned()
            .ok_or_else(|| DdnsError::ZoneNotFound(zone_name.to_string()))
    }

    async fn get_dns_records(
        &self,
        zone_id: &str,
        filters: &RecordFilters,
    ) -> Result<Vec<DnsRecord>> {
        let request = self
            .client
            .get(self.url(&format!("zones/{}/dns_records", zone_id)))
            .query(&filters.to_query());

        self.send(request).await
    }

    async fn update_dns_record(
        &self,
        zone_id: &str,
        record: &DnsRecord,
    ) -> Result<serde_json::Value> {
        let body = record_payload(record)?;
        let request = self
            .client
            .put(self.url(&format!("zones/{}/dns_records/{}", zone_id, record.id)))
            .body(body);

        let (status_code, text) = self.execute(request).await?;
        if text.trim().is_empty() {
            info!("Successfully updated {}", record.name);
            return Ok(serde_json::Value::Null);
        }

        let value: serde_json::Value = serde_json::from_str(&text)?;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_value(value.clone())?;
        if !envelope.success {
            return Err(Self::reported_failure(status_code, &envelope.errors));
        }

        info!("Successfully updated {}", record.name);
        Ok(value)
    }
}

impl CloudflareClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_token: config.api_token.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            zone_mapping: HashMap::new(),
        })
    }

    /// Fetches every zone visible to the token and remembers name -> id.
    pub async fn init_zones(mut self) -> Result<Self> {
        let zones = self.list_zones().await?;
        debug!("Loaded {} zones", zones.len());

        self.zone_mapping = zones.into_iter().map(|zone| (zone.name, zone.id)).collect();
        Ok(self)
    }

    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.send(self.client.get(self.url("zones"))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends the request and unwraps the `result` envelope.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let (status_code, text) = self.execute(request).await?;
        let parsed: ApiResponse<T> = serde_json::from_str(&text)?;

        if !parsed.success {
            return Err(Self::reported_failure(status_code, &parsed.errors));
        }

        parsed
            .result
            .ok_or_else(|| DdnsError::api(status_code, "response is missing result"))
    }

    /// Performs an authenticated call and returns status and body of a 2xx
    /// response. Any other status becomes `DdnsError::Api`.
    async fn execute(&self, request: RequestBuilder) -> Result<(u16, String)> {
        let response = request.bearer_auth(&self.api_token).send().await?;
        let status = response.status();
        debug!("{} {}", status, response.url());

        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok((status.as_u16(), response.text().await?))
    }

    async fn api_error(response: Response) -> DdnsError {
        let status_code = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();

        Self::reported_failure(status_code, &body.errors)
    }

    /// Logs every provider error and keeps the first message.
    fn reported_failure(status_code: u16, errors: &[ApiMessage]) -> DdnsError {
        for e in errors {
            error!("Cloudflare error {}: {}", e.code, e.message);
        }

        let message = errors.first().map(|e| e.message.clone()).unwrap_or_default();
        DdnsError::api(status_code, message)
    }
}
