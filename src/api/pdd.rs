use std::time::Duration;

use super::{client::DnsApiClient, error::ApiError, models::*};
use crate::config::Config;
use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;

const TOKEN_HEADER: &str = "PddToken";

/// Client for the Yandex PDD admin DNS API.
pub struct PddClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

#[async_trait]
impl DnsApiClient for PddClient {
    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>, ApiError> {
        let list: RecordList = self
            .call(Method::GET, "list", &[("domain", domain.to_string())])
            .await?;

        debug!("Provider returned {} records for {}", list.records.len(), domain);
        Ok(list.records)
    }

    async fn create_record(
        &self,
        domain: &str,
        request: &RecordRequest,
    ) -> Result<DnsRecord, ApiError> {
        let created: CreatedRecord = self
            .call(
                Method::POST,
                "add",
                &[
                    ("domain", domain.to_string()),
                    ("type", request.record_type.clone()),
                    ("content", request.content.clone()),
                    ("ttl", request.ttl.to_string()),
                    ("subdomain", request.subdomain.clone()),
                ],
            )
            .await?;

        created
            .record
            .ok_or(ApiError::Incomplete("created record missing from response"))
    }

    async fn delete_record(&self, domain: &str, record_id: i64) -> Result<(), ApiError> {
        let _: Deleted = self
            .call(
                Method::POST,
                "del",
                &[
                    ("domain", domain.to_string()),
                    ("record_id", record_id.to_string()),
                ],
            )
            .await?;

        Ok(())
    }
}

impl PddClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        action: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/api2/admin/dns/{}", self.base_url, action);
        debug!("{} {}", method, url);

        let response = self
            .client
            .request(method, &url)
            .header(TOKEN_HEADER, &self.api_token)
            .query(query)
            .send()
            .await?;

        // The body is drained before decoding so the connection goes back to the pool.
        let text = response.text().await?;

        decode_response(text)
    }
}
