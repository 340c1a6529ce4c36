//! ResourceDisplay implementations for client models.
//!
//! Adding a new resource type means implementing `identifier()` for it; the
//! document side comes from the model's own `Serialize` implementation.

use atlas_client::models::{
    Alert, ClusterConfig, DatabaseUser, Host, MaintenanceWindow, Organization, Project,
    WhitelistEntry,
};
use serde::Serialize;

/// Uniform display hook for Atlas models.
pub trait ResourceDisplay: Serialize {
    /// The value `--format short` prints, usually what `--id` accepts.
    fn identifier(&self) -> String;
}

impl ResourceDisplay for Organization {
    fn identifier(&self) -> String {
        self.id.clone()
    }
}

impl ResourceDisplay for Project {
    fn identifier(&self) -> String {
        self.id.clone()
    }
}

impl ResourceDisplay for ClusterConfig {
    fn identifier(&self) -> String {
        self.name.clone()
    }
}

impl ResourceDisplay for DatabaseUser {
    fn identifier(&self) -> String {
        self.username.clone()
    }
}

impl ResourceDisplay for Alert {
    fn identifier(&self) -> String {
        self.id.clone()
    }
}

impl ResourceDisplay for Host {
    fn identifier(&self) -> String {
        self.process_id()
    }
}

impl ResourceDisplay for WhitelistEntry {
    fn identifier(&self) -> String {
        self.entry_key().unwrap_or_else(|| "-".to_string())
    }
}

impl ResourceDisplay for MaintenanceWindow {
    fn identifier(&self) -> String {
        match (self.day_of_week, self.hour_of_day) {
            (Some(day), Some(hour)) => format!("{day:?} {hour:02}:00"),
            (Some(day), None) => format!("{day:?}"),
            _ => "unscheduled".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_client::models::Weekday;
    use serde_json::json;

    #[test]
    fn test_process_identifier_is_host_and_port() {
        let host: Host = serde_json::from_value(json!({
            "id": "cluster0-shard-00-00.abcde.mongodb.net:27017",
            "hostname": "cluster0-shard-00-00.abcde.mongodb.net",
            "port": 27017
        }))
        .unwrap();
        assert_eq!(
            host.identifier(),
            "cluster0-shard-00-00.abcde.mongodb.net:27017"
        );
    }

    #[test]
    fn test_whitelist_identifier_prefers_ip() {
        let entry: WhitelistEntry = serde_json::from_value(json!({
            "ipAddress": "203.0.113.10",
            "cidrBlock": "203.0.113.10/32"
        }))
        .unwrap();
        assert_eq!(entry.identifier(), "203.0.113.10");

        let empty: WhitelistEntry = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.identifier(), "-");
    }

    #[test]
    fn test_maintenance_window_identifier() {
        let window = MaintenanceWindow {
            day_of_week: Some(Weekday::Tuesday),
            hour_of_day: Some(4),
            number_of_deferrals: None,
            start_asap: None,
        };
        assert_eq!(window.identifier(), "Tuesday 04:00");

        let unscheduled = MaintenanceWindow {
            day_of_week: None,
            hour_of_day: None,
            number_of_deferrals: None,
            start_asap: None,
        };
        assert_eq!(unscheduled.identifier(), "unscheduled");
    }
}
