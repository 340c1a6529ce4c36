//! Property-based tests for lenient decoding and page requests.
//!
//! # Test Coverage
//! - Whitelist entries decode whatever Atlas puts in the usage fields
//! - CIDR membership agrees with the block's own network address
//! - Page requests inside the documented bounds are always accepted
//! - Unknown enum strings round-trip unchanged

use atlas_client::PageRequest;
use atlas_client::models::{ClusterState, InstanceSizeName, WhitelistEntry};
use atlas_client::testing::strategies::{cidr_block, valid_page_request, whitelist_entry_json};
use proptest::prelude::*;

proptest! {
    #[test]
    fn whitelist_entries_always_decode(doc in whitelist_entry_json()) {
        let entry: WhitelistEntry = serde_json::from_value(doc.clone()).unwrap();
        prop_assert_eq!(entry.cidr_block.as_deref(), doc["cidrBlock"].as_str());
        if let Some(count) = doc["count"].as_u64() {
            prop_assert_eq!(entry.count, Some(count));
        }
    }

    #[test]
    fn cidr_contains_its_network_address(block in cidr_block()) {
        let entry: WhitelistEntry =
            serde_json::from_value(serde_json::json!({ "cidrBlock": block })).unwrap();
        let (addr, _) = block.split_once('/').unwrap();
        prop_assert!(entry.contains(addr.parse().unwrap()));
    }

    #[test]
    fn valid_page_requests_are_accepted((page_num, items) in valid_page_request()) {
        let page = PageRequest::new(page_num, items).unwrap();
        prop_assert_eq!(page.page_num(), page_num);
        prop_assert_eq!(page.items_per_page(), items);
        prop_assert!(page.next().page_num() >= page_num);
    }

    #[test]
    fn unknown_enum_values_round_trip(value in "[A-Z][A-Z_]{2,20}") {
        let state = ClusterState::from(value.as_str());
        prop_assert_eq!(state.as_str(), value.as_str());
        let json = serde_json::to_string(&state).unwrap();
        let back: ClusterState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, state);

        let size: InstanceSizeName = value.parse().unwrap();
        prop_assert_eq!(size.to_string(), value);
    }
}
