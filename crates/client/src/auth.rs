//! HTTP digest authentication with an Atlas programmatic API key pair.
//!
//! Atlas authenticates API keys with RFC 2617 digest auth: the public key is
//! the username and the private key the password. The server's challenge is
//! cached after the first handshake so later requests can authenticate up
//! front with an incrementing nonce count.

use atlas_config::ApiKeyPair;
use reqwest::header::HeaderValue;
use secrecy::ExposeSecret;
use std::sync::Mutex;

use crate::error::{ClientError, Result};

/// Digest hash algorithm announced by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Md5Sess,
}

/// Parsed `WWW-Authenticate: Digest ...` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestChallenge {
    pub realm: String,
    pub nonce: String,
    pub opaque: Option<String>,
    pub algorithm: DigestAlgorithm,
    /// True when the server offered `qop=auth`.
    pub qop_auth: bool,
    pub stale: bool,
}

impl DigestChallenge {
    /// Parse a `WWW-Authenticate` header value.
    pub fn parse(header: &str) -> Result<Self> {
        let rest = header
            .trim()
            .strip_prefix("Digest")
            .or_else(|| header.trim().strip_prefix("digest"))
            .ok_or_else(|| ClientError::AuthChallenge("not a Digest challenge".into()))?;

        let mut realm = None;
        let mut nonce = None;
        let mut opaque = None;
        let mut algorithm = DigestAlgorithm::Md5;
        let mut qop_auth = false;
        let mut stale = false;

        for (key, value) in parse_params(rest) {
            match key.to_ascii_lowercase().as_str() {
                "realm" => realm = Some(value),
                "nonce" => nonce = Some(value),
                "opaque" => opaque = Some(value),
                "algorithm" => {
                    algorithm = match value.to_ascii_uppercase().as_str() {
                        "MD5" => DigestAlgorithm::Md5,
                        "MD5-SESS" => DigestAlgorithm::Md5Sess,
                        other => {
                            return Err(ClientError::AuthChallenge(format!(
                                "unsupported algorithm {other}"
                            )));
                        }
                    }
                }
                "qop" => qop_auth = value.split(',').any(|q| q.trim() == "auth"),
                "stale" => stale = value.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }

        Ok(Self {
            realm: realm.unwrap_or_default(),
            nonce: nonce.ok_or_else(|| ClientError::AuthChallenge("missing nonce".into()))?,
            opaque,
            algorithm,
            qop_auth,
            stale,
        })
    }
}

/// Split `k1="v1", k2=v2` into pairs, honoring commas inside quotes.
fn parse_params(input: &str) -> Vec<(String, String)> {
    let mut params = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace() || *c == ',') {
            chars.next();
        }
        let key: String = chars
            .by_ref()
            .take_while(|c| *c != '=')
            .collect::<String>()
            .trim()
            .to_string();
        if key.is_empty() {
            break;
        }

        let mut value = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            let mut escaped = false;
            for c in chars.by_ref() {
                match (escaped, c) {
                    (false, '\\') => escaped = true,
                    (false, '"') => break,
                    _ => {
                        value.push(c);
                        escaped = false;
                    }
                }
            }
        } else {
            while let Some(c) = chars.peek() {
                if *c == ',' {
                    break;
                }
                value.push(*c);
                chars.next();
            }
            value = value.trim().to_string();
        }
        params.push((key, value));
    }
    params
}

fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

#[derive(Debug)]
struct CachedChallenge {
    challenge: DigestChallenge,
    nonce_count: u32,
}

/// Digest credentials plus the last challenge seen from the server.
#[derive(Debug)]
pub struct DigestAuth {
    keys: ApiKeyPair,
    cached: Mutex<Option<CachedChallenge>>,
}

impl DigestAuth {
    pub fn new(keys: ApiKeyPair) -> Self {
        Self {
            keys,
            cached: Mutex::new(None),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.keys.public_key
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<CachedChallenge>> {
        self.cached.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Authorization header built from the cached challenge, if there is one.
    pub fn preemptive_header(&self, method: &str, uri: &str) -> Option<HeaderValue> {
        let mut guard = self.lock();
        let cached = guard.as_mut()?;
        cached.nonce_count += 1;
        let cnonce = new_cnonce();
        let value = self.authorization(&cached.challenge, method, uri, cached.nonce_count, &cnonce);
        HeaderValue::from_str(&value).ok()
    }

    /// Answer a fresh challenge and cache it for later requests.
    pub fn answer(&self, www_authenticate: &str, method: &str, uri: &str) -> Result<HeaderValue> {
        let challenge = DigestChallenge::parse(www_authenticate)?;
        let cnonce = new_cnonce();
        let value = self.authorization(&challenge, method, uri, 1, &cnonce);
        *self.lock() = Some(CachedChallenge {
            challenge,
            nonce_count: 1,
        });
        HeaderValue::from_str(&value)
            .map_err(|e| ClientError::AuthChallenge(format!("invalid header value: {e}")))
    }

    /// Forget the cached challenge.
    pub fn reset(&self) {
        *self.lock() = None;
    }

    pub fn has_cached_challenge(&self) -> bool {
        self.lock().is_some()
    }

    /// Compute the `Authorization` header value for one request.
    pub fn authorization(
        &self,
        challenge: &DigestChallenge,
        method: &str,
        uri: &str,
        nonce_count: u32,
        cnonce: &str,
    ) -> String {
        let username = &self.keys.public_key;
        let mut ha1 = md5_hex(&format!(
            "{username}:{}:{}",
            challenge.realm,
            self.keys.private_key.expose_secret()
        ));
        if challenge.algorithm == DigestAlgorithm::Md5Sess {
            ha1 = md5_hex(&format!("{ha1}:{}:{cnonce}", challenge.nonce));
        }
        let ha2 = md5_hex(&format!("{method}:{uri}"));
        let nc = format!("{nonce_count:08x}");

        let response = if challenge.qop_auth {
            md5_hex(&format!("{ha1}:{}:{nc}:{cnonce}:auth:{ha2}", challenge.nonce))
        } else {
            md5_hex(&format!("{ha1}:{}:{ha2}", challenge.nonce))
        };

        let algorithm = match challenge.algorithm {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Md5Sess => "MD5-sess",
        };
        let mut header = format!(
            "Digest username=\"{username}\", realm=\"{}\", nonce=\"{}\", uri=\"{uri}\", algorithm={algorithm}, response=\"{response}\"",
            challenge.realm, challenge.nonce
        );
        if challenge.qop_auth {
            header.push_str(&format!(", qop=auth, nc={nc}, cnonce=\"{cnonce}\""));
        }
        if let Some(opaque) = &challenge.opaque {
            header.push_str(&format!(", opaque=\"{opaque}\""));
        }
        header
    }
}

fn new_cnonce() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
