//! Project IP access list (`/groups/{GROUP-ID}/whitelist`).

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Link;
use crate::serde_helpers::{lenient_datetime, lenient_ip, lenient_u64, serialize_opt_datetime};

/// An access list entry. Atlas fills either `ipAddress` or only `cidrBlock`.
///
/// Address and usage fields are parsed leniently: values that do not parse
/// become `None` instead of failing the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistEntry {
    #[serde(default)]
    pub cidr_block: Option<String>,
    #[serde(default, deserialize_with = "lenient_ip")]
    pub ip_address: Option<IpAddr>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub last_used: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_ip")]
    pub last_used_address: Option<IpAddr>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl WhitelistEntry {
    /// The value that addresses this entry in `/whitelist/{entry}`.
    pub fn entry_key(&self) -> Option<String> {
        self.ip_address
            .map(|ip| ip.to_string())
            .or_else(|| self.cidr_block.clone())
    }

    /// Whether `ip` is covered by this entry.
    pub fn contains(&self, ip: IpAddr) -> bool {
        if self.ip_address == Some(ip) {
            return true;
        }
        self.cidr_block
            .as_deref()
            .and_then(parse_cidr)
            .is_some_and(|(network, prefix)| in_network(network, prefix, ip))
    }
}

fn parse_cidr(block: &str) -> Option<(IpAddr, u8)> {
    let (addr, prefix) = block.trim().split_once('/')?;
    let addr: IpAddr = addr.parse().ok()?;
    let prefix: u8 = prefix.parse().ok()?;
    let max = if addr.is_ipv4() { 32 } else { 128 };
    (prefix <= max).then_some((addr, prefix))
}

fn in_network(network: IpAddr, prefix: u8, ip: IpAddr) -> bool {
    match (network, ip) {
        (IpAddr::V4(net), IpAddr::V4(ip)) => {
            let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
            u32::from(net) & mask == u32::from(ip) & mask
        }
        (IpAddr::V6(net), IpAddr::V6(ip)) => {
            let mask = u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);
            u128::from(net) & mask == u128::from(ip) & mask
        }
        _ => false,
    }
}

/// An entry to add with `POST /whitelist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWhitelistEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewWhitelistEntry {
    pub fn ip(ip: IpAddr, comment: impl Into<String>) -> Self {
        Self {
            ip_address: Some(ip.to_string()),
            cidr_block: None,
            comment: Some(comment.into()),
        }
    }

    pub fn cidr(block: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            ip_address: None,
            cidr_block: Some(block.into()),
            comment: Some(comment.into()),
        }
    }
}
