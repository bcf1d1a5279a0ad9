pub mod client;
pub mod cloudflare;
pub mod models;
pub mod payload;

pub use client::DnsApiClient;
pub use cloudflare::CloudflareClient;
pub use models::{DnsRecord, RecordFilters, Zone};
