use std::net::Ipv4Addr;

use crate::api::{DnsApiClient, DnsRecord, RecordFilters, Zone};
use crate::error::{DdnsError, Result};
use log::{debug, error, info};

/// Outcome of an `update_all` pass, by record name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
}

/// Brings a zone's A records in line with a target address.
pub struct DdnsUpdater<'a, C: DnsApiClient> {
    client: &'a C,
}

impl<'a, C: DnsApiClient> DdnsUpdater<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Every record of the zone, in provider order. Read only.
    pub async fn list(&self, zone_name: &str, filters: &RecordFilters) -> Result<Vec<DnsRecord>> {
        let zone_id = self.client.zone_id(zone_name)?;
        let records = self.client.get_dns_records(&zone_id, filters).await?;
        debug!("Fetched {} records for {}", records.len(), zone_name);

        Ok(records)
    }

    /// Records of each given zone, queried by zone id. Read only.
    pub async fn inventory(&self, zones: &[Zone]) -> Result<Vec<(Zone, Vec<DnsRecord>)>> {
        let mut inventory = Vec::with_capacity(zones.len());
        for zone in zones {
            let records = self
                .client
                .get_dns_records(&zone.id, &RecordFilters::default())
                .await?;
            debug!("Fetched {} records for {}", records.len(), zone.name);
            inventory.push((zone.clone(), records));
        }

        Ok(inventory)
    }

    /// Points one A record at `ip`, whether or not it already does.
    ///
    /// Names are compared exactly. When the zone holds several A records with
    /// the same name, the first one returned by the provider is updated.
    pub async fn update_one(
        &self,
        zone_name: &str,
        record_name: &str,
        ip: Ipv4Addr,
    ) -> Result<DnsRecord> {
        let zone_id = self.client.zone_id(zone_name)?;
        let records = self
            .client
            .get_dns_records(&zone_id, &RecordFilters::default())
            .await?;

        let record = records
            .iter()
            .filter(|record| record.is_a_record())
            .find(|record| record.name == record_name)
            .ok_or_else(|| DdnsError::RecordNotFound {
                zone: zone_name.to_string(),
                name: record_name.to_string(),
            })?;

        info!("Updating {} to {}", record_name, ip);
        let updated = record.with_content(ip.to_string());
        self.client.update_dns_record(&zone_id, &updated).await?;

        Ok(updated)
    }

    /// Updates every A record of the zone whose content differs from `ip`.
    ///
    /// Records already pointing at `ip` are skipped. The first failed update
    /// stops the pass and is returned; records before it stay updated.
    pub async fn update_all(
        &self,
        zone_name: &str,
        ip: Ipv4Addr,
        comment: Option<&str>,
    ) -> Result<UpdateReport> {
        let zone_id = self.client.zone_id(zone_name)?;
        let filters = RecordFilters::default()
            .with_type("A")
            .with_comment(comment.map(str::to_string));

        let records = self.client.get_dns_records(&zone_id, &filters).await?;
        let target = ip.to_string();
        let mut report = UpdateReport::default();

        for record in records.iter().filter(|record| record.is_a_record()) {
            if record.content == target {
                info!(
                    "Skipping {} as it already has the correct IP address",
                    record.name
                );
                report.skipped.push(record.name.clone());
                continue;
            }

            info!("Updating {} to {}", record.name, target);
            let updated = record.with_content(target.as_str());
            if let Err(e) = self.client.update_dns_record(&zone_id, &updated).await {
                error!("Failed to update {}: {}", record.name, e);
                return Err(e);
            }
            report.updated.push(record.name.clone());
        }

        Ok(report)
    }
}
