//! Proptest strategies producing Atlas-shaped JSON documents.
//!
//! Documents deliberately mix well-formed and junk values for the fields the
//! models decode leniently.

use proptest::prelude::*;
use serde_json::{Value, json};

/// An IPv4 address as Atlas prints it.
pub fn ipv4() -> impl Strategy<Value = String> {
    any::<[u8; 4]>().prop_map(|[a, b, c, d]| format!("{a}.{b}.{c}.{d}"))
}

/// A CIDR block with a prefix of 8..=32.
pub fn cidr_block() -> impl Strategy<Value = String> {
    (ipv4(), 8u8..=32).prop_map(|(ip, prefix)| format!("{ip}/{prefix}"))
}

/// Either a real value or something the API should never send.
fn maybe_junk(valid: BoxedStrategy<Value>) -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => valid,
        1 => Just(Value::Null),
        1 => "[a-z ]{0,12}".prop_map(Value::String),
    ]
}

/// A whitelist entry document with optionally broken usage fields.
pub fn whitelist_entry_json() -> impl Strategy<Value = Value> {
    let timestamp = (2015i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| Value::String(format!("{y:04}-{m:02}-{d:02}T10:00:00Z")))
        .boxed();
    let count = prop_oneof![
        any::<u32>().prop_map(|n| json!(n)),
        any::<u32>().prop_map(|n| Value::String(n.to_string())),
    ]
    .boxed();
    let address = ipv4().prop_map(Value::String).boxed();

    (
        cidr_block(),
        maybe_junk(timestamp),
        maybe_junk(count),
        maybe_junk(address),
        "[a-zA-Z0-9 ]{0,20}",
    )
        .prop_map(|(cidr, last_used, count, address, comment)| {
            json!({
                "cidrBlock": cidr,
                "groupId": "5b1e2b8e0f2912c1a6e1c8a7",
                "comment": comment,
                "lastUsed": last_used,
                "count": count,
                "lastUsedAddress": address,
            })
        })
}

/// Page requests Atlas accepts: `(page_num, items_per_page)`.
pub fn valid_page_request() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=u32::MAX, 1u32..=2000)
}
