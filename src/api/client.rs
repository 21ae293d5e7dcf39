use super::{error::ApiError, models::*};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    /// Every record the provider holds for `domain`, in provider order.
    async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>, ApiError>;

    async fn create_record(
        &self,
        domain: &str,
        request: &RecordRequest,
    ) -> Result<DnsRecord, ApiError>;

    async fn delete_record(&self, domain: &str, record_id: i64) -> Result<(), ApiError>;
}
