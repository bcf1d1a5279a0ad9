use std::{
    net::{IpAddr, Ipv4Addr},
    str::FromStr,
    time::Duration,
};

use crate::error::{DdnsError, Result};
use log::debug;

/// Asks a plain-text "what is my IP" service for the caller's address.
/// A non-2xx answer aborts the run, there is no fallback service.
///
/// The connection is bound to IPv4 so dual-stack hosts report the address
/// an A record needs.
pub async fn discover_public_ip(url: &str, timeout: Duration) -> Result<Ipv4Addr> {
    let client = reqwest::Client::builder()
        .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
        .timeout(timeout)
        .build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(DdnsError::IpLookup(format!("{} returned {}", url, status)));
    }

    let body = response.text().await?;
    debug!("IP service answered: {:?}", body);

    parse_ipv4(body.trim())
}

fn parse_ipv4(text: &str) -> Result<Ipv4Addr> {
    match IpAddr::from_str(text) {
        Ok(IpAddr::V4(ip)) => Ok(ip),
        Ok(IpAddr::V6(ip)) => Err(DdnsError::IpLookup(format!(
            "service returned IPv6 address {}, A records need IPv4",
            ip
        ))),
        Err(e) => Err(DdnsError::IpLookup(format!(
            "{:?} is not an IP address: {}",
            text, e
        ))),
    }
}
