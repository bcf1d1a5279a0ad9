use super::models::DnsRecord;

/// JSON body for a full-record PUT.
pub fn record_payload(record: &DnsRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}
