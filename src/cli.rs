use std::{net::Ipv4Addr, path::PathBuf};

use clap::{Parser, ValueEnum};

use crate::api::RecordFilters;

/// Keep Cloudflare A records pointed at this machine's public IP.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "clouddns-sync")]
pub struct Cli {
    #[arg(value_enum)]
    pub action: Action,

    /// Zone name, i.e. domain name. Not used by `zones`.
    #[arg(
        long,
        required_if_eq_any([
            ("action", "list"),
            ("action", "update-one"),
            ("action", "update-all"),
        ])
    )]
    pub zone_name: Option<String>,

    /// Record to update with `update-one`
    #[arg(long, required_if_eq("action", "update-one"))]
    pub record_name: Option<String>,

    /// Address to publish. Looked up from the IP service when omitted.
    #[arg(long)]
    pub ip_address: Option<Ipv4Addr>,

    /// Only consider records carrying this comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Record type filter for `list`
    #[arg(long = "type")]
    pub record_type: Option<String>,

    #[arg(long)]
    pub order: Option<String>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long)]
    pub per_page: Option<u32>,

    /// Path to a YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    List,
    UpdateOne,
    UpdateAll,
    /// Every zone on the account with its records
    Zones,
}

impl Action {
    pub fn needs_ip(self) -> bool {
        matches!(self, Action::UpdateOne | Action::UpdateAll)
    }
}

impl Cli {
    /// Provider-side filters for the `list` action.
    pub fn list_filters(&self) -> RecordFilters {
        RecordFilters {
            comment: self.comment.clone(),
            content: None,
            r#type: self.record_type.clone(),
            order: self.order.clone(),
            page: self.page,
            per_page: self.per_page,
        }
    }
}
