use crate::api::{filter_by_content, ApiError, DnsApiClient, DnsRecord, RecordRequest};
use log::{debug, info};
use std::fmt;
use thiserror::Error;

pub const CHALLENGE_RECORD_TYPE: &str = "TXT";
pub const CHALLENGE_LABEL: &str = "_acme-challenge";

#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Acme dns record with content {content} not found for domain {domain}")]
    NotFound { domain: String, content: String },

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}

/// Hook stages this tool acts on. Every other stage name is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DeployChallenge,
    CleanChallenge,
}

impl Stage {
    pub fn from_hook_name(name: &str) -> Option<Self> {
        match name {
            "deploy_challenge" => Some(Stage::DeployChallenge),
            "clean_challenge" => Some(Stage::CleanChallenge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::DeployChallenge => "deploy_challenge",
            Stage::CleanChallenge => "clean_challenge",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum HookOutcome {
    Deployed(Vec<DnsRecord>),
    Cleaned(DnsRecord),
    Skipped,
}

pub struct ChallengeHook<C> {
    client: C,
    record_ttl: u32,
}

impl<C: DnsApiClient> ChallengeHook<C> {
    pub fn new(client: C, record_ttl: u32) -> Self {
        Self { client, record_ttl }
    }

    pub async fn handle(
        &self,
        stage_name: &str,
        domain: &str,
        token: &str,
    ) -> Result<HookOutcome, HookError> {
        let Some(stage) = Stage::from_hook_name(stage_name) else {
            debug!("Ignoring hook stage {:?}", stage_name);
            return Ok(HookOutcome::Skipped);
        };

        if domain.is_empty() {
            return Err(HookError::MissingArgument("domain"));
        }
        if token.is_empty() {
            return Err(HookError::MissingArgument("token"));
        }

        match stage {
            Stage::DeployChallenge => self
                .deploy_challenge(domain, token)
                .await
                .map(HookOutcome::Deployed),
            Stage::CleanChallenge => self
                .clean_challenge(domain, token)
                .await
                .map(HookOutcome::Cleaned),
        }
    }

    pub async fn deploy_challenge(
        &self,
        domain: &str,
        token: &str,
    ) -> Result<Vec<DnsRecord>, HookError> {
        let request = RecordRequest {
            record_type: CHALLENGE_RECORD_TYPE.to_string(),
            content: token.to_string(),
            ttl: self.record_ttl,
            subdomain: format!("{}.{}", CHALLENGE_LABEL, domain),
        };

        info!("Creating {} record {}", request.record_type, request.subdomain);
        let record = self.client.create_record(domain, &request).await?;
        info!("Created record {} for {}", record.id, domain);

        Ok(vec![record])
    }

    /// Deletes the first record whose content equals `token`. The provider's
    /// ordering decides which one when several match.
    pub async fn clean_challenge(&self, domain: &str, token: &str) -> Result<DnsRecord, HookError> {
        let records = self.client.list_records(domain).await?;

        let record = filter_by_content(records, &[token])
            .into_iter()
            .next()
            .ok_or_else(|| HookError::NotFound {
                domain: domain.to_string(),
                content: token.to_string(),
            })?;

        info!("Deleting record {} for {}", record.id, domain);
        self.client.delete_record(domain, record.id).await?;
        info!("Record deleted");

        Ok(record)
    }
}
