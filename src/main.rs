use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clouddns_sync::{
    api::CloudflareClient,
    cli::{Action, Cli},
    config::Config,
    ddns::DdnsUpdater,
    ip::discover_public_ip,
};
use env_logger::Env;
use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Resolve the target address before touching the provider.
    let ip = match (cli.action.needs_ip(), cli.ip_address) {
        (false, _) => None,
        (true, Some(ip)) => Some(ip),
        (true, None) => {
            let timeout = Duration::from_secs(config.timeout_secs);
            let ip = discover_public_ip(&config.ip_service_url, timeout).await?;
            info!("Current IP: {}", ip);
            Some(ip)
        }
    };

    let client = CloudflareClient::new(&config)?.init_zones().await?;
    let updater = DdnsUpdater::new(&client);

    if cli.action == Action::Zones {
        let zones = client.list_zones().await?;
        for (zone, records) in updater.inventory(&zones).await? {
            println!("Zone: {}, ID: {}", zone.name, zone.id);
            for record in records {
                println!("  {}, {}, {}", record.name, record.r#type, record.content);
            }
        }
        return Ok(());
    }

    let zone_name = cli
        .zone_name
        .as_deref()
        .context("--zone-name is required")?;

    match (cli.action, ip) {
        (Action::List, _) => {
            let records = updater.list(zone_name, &cli.list_filters()).await?;
            println!("DNS Records for {}:", zone_name);
            for record in records {
                println!(
                    "Name: {}, Type: {}, Content: {}",
                    record.name, record.r#type, record.content
                );
            }
        }
        (Action::UpdateOne, Some(ip)) => {
            let record_name = cli
                .record_name
                .as_deref()
                .context("--record-name is required for update-one")?;
            updater.update_one(zone_name, record_name, ip).await?;
        }
        (Action::UpdateAll, Some(ip)) => {
            let report = updater
                .update_all(zone_name, ip, cli.comment.as_deref())
                .await?;
            info!(
                "Done: {} updated, {} already current",
                report.updated.len(),
                report.skipped.len()
            );
        }
        (action, _) => anyhow::bail!("no target IP resolved for {:?}", action),
    }

    Ok(())
}
