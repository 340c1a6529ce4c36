//! Error types for the Atlas client.
//!
//! Every non-success HTTP status maps to exactly one variant. Bad requests and
//! forbidden responses are refined by the Atlas `errorCode` when it names a
//! more specific condition.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error document returned by the Atlas Admin API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiErrorBody {
    /// HTTP status echoed by Atlas in the `error` field.
    #[serde(rename = "error")]
    pub status: u16,
    pub error_code: Option<String>,
    pub detail: Option<String>,
    pub reason: Option<String>,
    pub parameters: Vec<serde_json::Value>,
}

impl ApiErrorBody {
    /// Parse an error body, falling back to the raw text as `detail`.
    pub fn parse(status: u16, raw: &str) -> Self {
        let mut body = serde_json::from_str::<Self>(raw).unwrap_or_else(|_| Self {
            detail: (!raw.trim().is_empty()).then(|| raw.trim().to_string()),
            ..Self::default()
        });
        if body.status == 0 {
            body.status = status;
        }
        body
    }

    fn has_code(&self, codes: &[&str]) -> bool {
        self.error_code
            .as_deref()
            .is_some_and(|code| codes.contains(&code))
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(reason) = &self.reason {
            write!(f, " {reason}")?;
        }
        if let Some(code) = &self.error_code {
            write!(f, " [{code}]")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

/// Which page-size rule a [`crate::PageRequest`] broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationLimit {
    PageNumTooSmall { page_num: u32 },
    ItemsPerPageOutOfRange { items_per_page: u32, min: u32, max: u32 },
}

impl fmt::Display for PaginationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageNumTooSmall { page_num } => {
                write!(f, "pageNum can't be smaller than 1 (got {page_num})")
            }
            Self::ItemsPerPageOutOfRange {
                items_per_page,
                min,
                max,
            } => write!(
                f,
                "itemsPerPage can't be smaller than {min} and greater than {max} (got {items_per_page})"
            ),
        }
    }
}

/// Errors that can occur during Atlas client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Something was wrong with the client request: {0}")]
    BadRequest(ApiErrorBody),

    #[error("A cluster with this name already exists: {0}")]
    DuplicateClusterName(ApiErrorBody),

    #[error("The job could not be found: {0}")]
    JobError(ApiErrorBody),

    #[error("Backup operation rejected: {0}")]
    BackupError(ApiErrorBody),

    #[error("Maintenance window operation rejected: {0}")]
    MaintenanceError(ApiErrorBody),

    #[error("Authentication is required: {0}")]
    Unauthorized(ApiErrorBody),

    #[error("Access to the specified resource is not permitted: {0}")]
    Forbidden(ApiErrorBody),

    #[error("This organization requires access through a whitelist of ip ranges: {0}")]
    ForbiddenWhitelist(ApiErrorBody),

    #[error("The requested resource does not exist: {0}")]
    NotFound(ApiErrorBody),

    #[error("The HTTP method is not supported for the specified resource: {0}")]
    MethodNotAllowed(ApiErrorBody),

    #[error("The request conflicts with another request in progress: {0}")]
    Conflict(ApiErrorBody),

    #[error("Something unexpected went wrong: {0}")]
    ServerError(ApiErrorBody),

    /// A destructive call was made without its approval flag.
    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    #[error("Pagination limits exceeded: {0}")]
    PaginationLimits(PaginationLimit),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// A snapshot restore request that cannot succeed, caught before sending.
    #[error("Invalid restore request: {0}")]
    InvalidRestore(String),

    #[error("No project (group) id configured for a project-scoped call")]
    MissingGroupId,

    #[error("No API key pair configured")]
    MissingCredentials,

    #[error("Digest authentication challenge could not be answered: {0}")]
    AuthChallenge(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to serialize request body: {0}")]
    InvalidRequestBody(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-success status and its error document to a variant.
    pub fn from_status(status: u16, body: ApiErrorBody) -> Self {
        match status {
            400 if body.has_code(&["DUPLICATE_CLUSTER_NAME"]) => Self::DuplicateClusterName(body),
            400 if body.has_code(&["RESOURCE_NOT_FOUND_FOR_JOB"]) => Self::JobError(body),
            400 if body.has_code(&["CANNOT_CANCEL_AUTOMATED_RESTORE"]) => Self::BackupError(body),
            400 if body.has_code(&[
                "ATLAS_MAINTENANCE_ALREADY_SCHEDULED",
                "ATLAS_NUM_MAINTENANCE_DEFERRALS_EXCEEDED",
            ]) =>
            {
                Self::MaintenanceError(body)
            }
            400 => Self::BadRequest(body),
            401 => Self::Unauthorized(body),
            403 if body.has_code(&["ORG_REQUIRES_WHITELIST"]) => Self::ForbiddenWhitelist(body),
            403 => Self::Forbidden(body),
            404 => Self::NotFound(body),
            405 => Self::MethodNotAllowed(body),
            409 => Self::Conflict(body),
            _ => Self::ServerError(body),
        }
    }

    /// The Atlas error document, for variants produced by an HTTP response.
    pub fn atlas_response(&self) -> Option<(u16, &ApiErrorBody)> {
        match self {
            Self::BadRequest(body)
            | Self::DuplicateClusterName(body)
            | Self::JobError(body)
            | Self::BackupError(body)
            | Self::MaintenanceError(body)
            | Self::Unauthorized(body)
            | Self::Forbidden(body)
            | Self::ForbiddenWhitelist(body)
            | Self::NotFound(body)
            | Self::MethodNotAllowed(body)
            | Self::Conflict(body)
            | Self::ServerError(body) => Some((body.status, body)),
            _ => None,
        }
    }

    /// HTTP status of the response behind this error, if any.
    pub fn status(&self) -> Option<u16> {
        self.atlas_response().map(|(status, _)| status)
    }

    /// Whether this is any bad-request variant, refined or not.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::BadRequest(_)
                | Self::DuplicateClusterName(_)
                | Self::JobError(_)
                | Self::BackupError(_)
                | Self::MaintenanceError(_)
        )
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized(_) | Self::AuthChallenge(_) | Self::MissingCredentials
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(status: u16, code: Option<&str>) -> ApiErrorBody {
        ApiErrorBody {
            status,
            error_code: code.map(str::to_string),
            ..ApiErrorBody::default()
        }
    }

    #[test]
    fn test_status_families() {
        assert!(matches!(
            ClientError::from_status(400, body(400, None)),
            ClientError::BadRequest(_)
        ));
        assert!(matches!(
            ClientError::from_status(401, body(401, None)),
            ClientError::Unauthorized(_)
        ));
        assert!(matches!(
            ClientError::from_status(403, body(403, None)),
            ClientError::Forbidden(_)
        ));
        assert!(matches!(
            ClientError::from_status(404, body(404, None)),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            ClientError::from_status(405, body(405, None)),
            ClientError::MethodNotAllowed(_)
        ));
        assert!(matches!(
            ClientError::from_status(409, body(409, None)),
            ClientError::Conflict(_)
        ));
        assert!(matches!(
            ClientError::from_status(500, body(500, None)),
            ClientError::ServerError(_)
        ));
        assert!(matches!(
            ClientError::from_status(418, body(418, None)),
            ClientError::ServerError(_)
        ));
    }

    #[test]
    fn test_error_code_refinements() {
        let cases = [
            ("DUPLICATE_CLUSTER_NAME", "DuplicateClusterName"),
            ("RESOURCE_NOT_FOUND_FOR_JOB", "JobError"),
            ("CANNOT_CANCEL_AUTOMATED_RESTORE", "BackupError"),
            ("ATLAS_MAINTENANCE_ALREADY_SCHEDULED", "MaintenanceError"),
            ("ATLAS_NUM_MAINTENANCE_DEFERRALS_EXCEEDED", "MaintenanceError"),
        ];
        for (code, expected) in cases {
            let err = ClientError::from_status(400, body(400, Some(code)));
            let name = format!("{err:?}");
            assert!(name.starts_with(expected), "{code} mapped to {name}");
            assert!(err.is_bad_request());
        }

        let err = ClientError::from_status(403, body(403, Some("ORG_REQUIRES_WHITELIST")));
        assert!(matches!(err, ClientError::ForbiddenWhitelist(_)));
    }

    #[test]
    fn test_refinement_only_applies_to_its_status() {
        let err = ClientError::from_status(409, body(409, Some("DUPLICATE_CLUSTER_NAME")));
        assert!(matches!(err, ClientError::Conflict(_)));
    }

    #[test]
    fn test_parse_atlas_error_document() {
        let raw = r#"{"detail":"No cluster named c1 exists in group g1.","error":404,"errorCode":"CLUSTER_NOT_FOUND","parameters":["c1","g1"],"reason":"Not Found"}"#;
        let parsed = ApiErrorBody::parse(404, raw);
        assert_eq!(parsed.status, 404);
        assert_eq!(parsed.error_code.as_deref(), Some("CLUSTER_NOT_FOUND"));
        assert_eq!(parsed.reason.as_deref(), Some("Not Found"));
        assert_eq!(parsed.parameters.len(), 2);
        assert_eq!(
            parsed.to_string(),
            "HTTP 404 Not Found [CLUSTER_NOT_FOUND]: No cluster named c1 exists in group g1."
        );
    }

    #[test]
    fn test_parse_non_json_body_keeps_text() {
        let parsed = ApiErrorBody::parse(502, "<html>Bad Gateway</html>");
        assert_eq!(parsed.status, 502);
        assert_eq!(parsed.detail.as_deref(), Some("<html>Bad Gateway</html>"));
        assert!(parsed.error_code.is_none());

        let empty = ApiErrorBody::parse(500, "  ");
        assert!(empty.detail.is_none());
    }

    #[test]
    fn test_atlas_response_accessor() {
        let err = ClientError::from_status(404, body(404, Some("GROUP_NOT_FOUND")));
        let (status, doc) = err.atlas_response().unwrap();
        assert_eq!(status, 404);
        assert_eq!(doc.error_code.as_deref(), Some("GROUP_NOT_FOUND"));
        assert!(err.is_not_found());

        let err = ClientError::ConfirmationRequired("delete cluster".into());
        assert!(err.atlas_response().is_none());
        assert!(err.status().is_none());
    }

    #[test]
    fn test_pagination_limit_messages() {
        let err = ClientError::PaginationLimits(PaginationLimit::PageNumTooSmall { page_num: 0 });
        assert!(err.to_string().contains("pageNum can't be smaller than 1"));

        let err = ClientError::PaginationLimits(PaginationLimit::ItemsPerPageOutOfRange {
            items_per_page: 5000,
            min: 1,
            max: 2000,
        });
        assert!(
            err.to_string()
                .contains("itemsPerPage can't be smaller than 1 and greater than 2000")
        );
    }

    #[test]
    fn test_is_auth_error() {
        assert!(ClientError::from_status(401, body(401, None)).is_auth_error());
        assert!(ClientError::AuthChallenge("bad".into()).is_auth_error());
        assert!(!ClientError::from_status(403, body(403, None)).is_auth_error());
    }
}
