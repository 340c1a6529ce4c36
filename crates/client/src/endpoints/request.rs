//! Request helper shared by every endpoint.
//!
//! Sends one request, answers a digest challenge if the server issues one,
//! and maps non-success statuses to [`ClientError`] variants. Nothing is
//! retried: a second send only happens to complete the digest handshake.

use reqwest::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::DigestAuth;
use crate::error::{ApiErrorBody, ClientError, Result};

/// Request-URI as digest auth hashes it: path plus query.
fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

fn digest_challenge(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(WWW_AUTHENTICATE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| {
            value
                .trim_start()
                .get(..6)
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case("digest"))
        })
        .map(str::to_string)
}

/// Send a request with digest authentication and check its status.
///
/// # Errors
///
/// Returns the status-specific [`ClientError`] variant for any non-2xx
/// response, or `ClientError::HttpError` for transport failures.
pub async fn send_request(
    http: &Client,
    auth: &DigestAuth,
    builder: RequestBuilder,
) -> Result<Response> {
    let mut request = builder.build()?;
    let method = request.method().as_str().to_string();
    let uri = request_uri(request.url());
    let resend = request.try_clone();

    if let Some(header) = auth.preemptive_header(&method, &uri) {
        request.headers_mut().insert(AUTHORIZATION, header);
    }

    debug!(%method, %uri, "Sending Atlas request");
    let mut response = http.execute(request).await?;

    if response.status() == StatusCode::UNAUTHORIZED
        && let Some(challenge) = digest_challenge(&response)
        && let Some(mut second) = resend
    {
        debug!(%uri, "Answering digest challenge");
        let header = auth.answer(&challenge, &method, &uri)?;
        second.headers_mut().insert(AUTHORIZATION, header);
        response = http.execute(second).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            auth.reset();
        }
    }

    check_status(response).await
}

/// Pass 2xx responses through; turn anything else into an error.
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let code = status.as_u16();
    let url = response.url().to_string();
    let raw = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let body = ApiErrorBody::parse(code, &raw);

    warn!(
        status = code,
        %url,
        error_code = body.error_code.as_deref().unwrap_or("-"),
        "Atlas request failed"
    );
    Err(ClientError::from_status(code, body))
}

/// Decode a JSON response body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to decode response: {e}")))
}

/// Send a request and decode its JSON body.
pub async fn send_json<T: DeserializeOwned>(
    http: &Client,
    auth: &DigestAuth,
    builder: RequestBuilder,
) -> Result<T> {
    let response = send_request(http, auth, builder).await?;
    read_json(response).await
}

/// Send a request whose response body is irrelevant (e.g. 202/204).
pub async fn send_no_content(http: &Client, auth: &DigestAuth, builder: RequestBuilder) -> Result<()> {
    send_request(http, auth, builder).await?;
    Ok(())
}
