use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    /// Resolves a zone name through the mapping built at initialization.
    fn zone_id(&self, zone_name: &str) -> Result<String>;

    async fn get_dns_records(
        &self,
        zone_id: &str,
        filters: &RecordFilters,
    ) -> Result<Vec<DnsRecord>>;

    /// Overwrites the record identified by `record.id` and returns the raw
    /// response body.
    async fn update_dns_record(
        &self,
        zone_id: &str,
        record: &DnsRecord,
    ) -> Result<serde_json::Value>;
}
