//! Status code interpretation shared by every device operation.
//!
//! The table below is the single place that decides what a status code means
//! for a caller. It performs no I/O and never looks at the response body.

use http::StatusCode;

use crate::{DeviceError, DeviceResult};

/// Broad category of an interpreted response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    ClientError,
    ServerError,
    Unexpected,
}

/// What a single response status means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: StatusCode,
    pub kind: OutcomeKind,
    /// Short reason phrase for known codes.
    pub reason: Option<&'static str>,
    /// Whether a JSON body should be decoded.
    pub has_body: bool,
}

const KNOWN_STATUSES: &[(u16, OutcomeKind, &str, bool)] = &[
    (200, OutcomeKind::Success, "OK", true),
    (201, OutcomeKind::Success, "Created", true),
    (204, OutcomeKind::Success, "No Content", false),
    (400, OutcomeKind::ClientError, "Bad Request", false),
    (401, OutcomeKind::ClientError, "Unauthorized", false),
    (404, OutcomeKind::ClientError, "Not Found", false),
];

/// Maps a status code to its outcome.
///
/// Known codes come from a fixed table. Anything at or above 500 is a server
/// error; everything else is unexpected, including 2xx codes that are not
/// listed.
pub fn interpret(status: StatusCode) -> Outcome {
    if let Some(&(_, kind, reason, has_body)) =
        KNOWN_STATUSES.iter().find(|(code, ..)| *code == status.as_u16())
    {
        return Outcome {
            status,
            kind,
            reason: Some(reason),
            has_body,
        };
    }

    let kind = if status.is_server_error() || status.as_u16() >= 600 {
        OutcomeKind::ServerError
    } else {
        OutcomeKind::Unexpected
    };

    Outcome {
        status,
        kind,
        reason: None,
        has_body: false,
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }

    /// Human-readable line describing the outcome.
    pub fn message(&self) -> String {
        let code = self.status.as_u16();
        match (self.kind, self.reason) {
            (OutcomeKind::Success, Some("No Content")) => {
                format!("Success ({code} No Content): the resource was removed, nothing to return")
            }
            (OutcomeKind::Success, Some(reason)) => {
                format!("Success ({code} {reason}): the request completed")
            }
            (OutcomeKind::ClientError, Some(reason)) => {
                format!("Error ({code} {reason}): the request was rejected")
            }
            (OutcomeKind::ServerError, _) => {
                format!("Server error ({code}): the server failed to handle the request")
            }
            _ => format!("Unexpected error. Status code: {code}"),
        }
    }

    /// Emits the outcome line at a level matching its kind.
    pub(crate) fn log(&self) {
        let message = self.message();
        match self.kind {
            OutcomeKind::Success => log::info!("{message}"),
            OutcomeKind::ClientError | OutcomeKind::Unexpected => log::warn!("{message}"),
            OutcomeKind::ServerError => log::error!("{message}"),
        }
    }

    /// Converts a failed outcome into the matching error.
    pub(crate) fn into_result(self) -> DeviceResult<Self> {
        match self.kind {
            OutcomeKind::Success => Ok(self),
            OutcomeKind::ClientError => Err(DeviceError::ClientError {
                status: self.status,
                reason: self.reason.unwrap_or_default().to_string(),
            }),
            OutcomeKind::ServerError => Err(DeviceError::ServerError {
                status: self.status,
            }),
            OutcomeKind::Unexpected => Err(DeviceError::UnexpectedStatus(self.status)),
        }
    }
}
