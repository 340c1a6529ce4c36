//! URL encoding utilities for constructing safe API paths.
//!
//! Cluster names, database user names, whitelist entries and host names are
//! interpolated into Atlas paths. Whitelist entries in CIDR notation contain a
//! slash, which Atlas expects as `%2F` inside a single path segment.
//!
//! # Example
//!
//! ```
//! use atlas_client::endpoints::encode_path_segment;
//!
//! let encoded = encode_path_segment("10.0.0.0/24");
//! assert_eq!(encoded, "10.0.0.0%2F24");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 delimiters plus characters that would split the
/// segment, start a query or fragment, or be double-decoded.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// ```
/// use atlas_client::endpoints::encode_path_segment;
///
/// assert_eq!(encode_path_segment("Cluster0"), "Cluster0");
/// assert_eq!(encode_path_segment("app user"), "app%20user");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("Cluster0"), "Cluster0");
        assert_eq!(encode_path_segment("my-cluster_1"), "my-cluster_1");
    }

    #[test]
    fn test_encode_cidr_block() {
        assert_eq!(encode_path_segment("192.168.0.0/16"), "192.168.0.0%2F16");
    }

    #[test]
    fn test_ipv6_and_host_port_pass_through() {
        assert_eq!(encode_path_segment("fe80::1"), "fe80::1");
        assert_eq!(
            encode_path_segment("cluster0-shard-00-00.abcde.mongodb.net:27017"),
            "cluster0-shard-00-00.abcde.mongodb.net:27017"
        );
    }

    #[test]
    fn test_encode_percent_prevents_double_decoding() {
        assert_eq!(encode_path_segment("user%20name"), "user%2520name");
    }

    #[test]
    fn test_encode_query_and_fragment_delimiters() {
        assert_eq!(encode_path_segment("user?x"), "user%3Fx");
        assert_eq!(encode_path_segment("user#x"), "user%23x");
        assert_eq!(encode_path_segment("a+b"), "a%2Bb");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("us\u{00e9}r"), "us%C3%A9r");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_path_segment(""), "");
    }
}
