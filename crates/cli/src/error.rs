//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Configuration failures (including a missing key pair) exit with 1.

use atlas_client::ClientError;

/// Structured exit codes for atlascli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure, bad configuration.
    GeneralError = 1,

    /// Authentication failure - the key pair was rejected.
    ///
    /// Scripts should check the API key and its access list.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Resource not found - cluster, user, project, etc.
    NotFound = 4,

    /// Validation error - the request was rejected as malformed.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - the key lacks the role for this resource.
    PermissionDenied = 6,

    /// Conflict - another change to the resource is in progress.
    Conflict = 7,

    /// Server error - Atlas answered with a 5xx status.
    ServerError = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Unauthorized(_)
            | ClientError::AuthChallenge(_)
            | ClientError::MissingCredentials => ExitCode::AuthenticationFailed,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }

            ClientError::NotFound(_) => ExitCode::NotFound,

            ClientError::BadRequest(_)
            | ClientError::DuplicateClusterName(_)
            | ClientError::JobError(_)
            | ClientError::BackupError(_)
            | ClientError::MaintenanceError(_)
            | ClientError::ConfirmationRequired(_)
            | ClientError::PaginationLimits(_)
            | ClientError::InvalidRole(_)
            | ClientError::InvalidRestore(_)
            | ClientError::MissingGroupId
            | ClientError::InvalidResponse(_)
            | ClientError::InvalidRequestBody(_) => ExitCode::ValidationError,

            ClientError::Forbidden(_) | ClientError::ForbiddenWhitelist(_) => {
                ExitCode::PermissionDenied
            }

            ClientError::Conflict(_) => ExitCode::Conflict,

            ClientError::ServerError(_) => ExitCode::ServerError,

            ClientError::MethodNotAllowed(_) | ClientError::HttpError(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
