// Submission orchestration: assemble → preflight validate → transport.
// The transport is an external collaborator behind a trait; this crate never
// performs network I/O itself. A document that fails preflight is never
// handed to the transport — the caller gets the full validation report and
// routes the user back to a correction step.

use thiserror::Error;

use crate::assemble::assemble;
use crate::raw::RawSurveyState;
use crate::request::CanonicalAssessmentRequest;
use crate::validate::{validate, ValidationResult};

/// Failure surface of the transport collaborator.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("assessment service unreachable: {0}")]
    Connection(String),

    #[error("assessment service returned status {status}: {body}")]
    Service { status: u16, body: String },

    #[error("request timed out after {0}s")]
    Timeout(u64),
}

#[derive(Error, Debug)]
pub enum SubmitError {
    /// The assembled document failed preflight; nothing was transmitted.
    #[error("request failed preflight validation with {} error(s)", .0.errors.len())]
    Rejected(ValidationResult),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Hands an already-validated request to the assessment service and returns
/// the service's JSON response. Implemented by the application's HTTP layer;
/// mocked in tests.
pub trait AssessmentTransport {
    fn submit(
        &self,
        request: &CanonicalAssessmentRequest,
    ) -> Result<serde_json::Value, TransportError>;
}

/// Run the full outbound pipeline on the current survey state.
///
/// Pure up to the transport call: retrying after a transport failure re-runs
/// assembly and validation on the current state, which is safe to repeat.
pub fn submit_assessment(
    raw: &RawSurveyState,
    transport: &dyn AssessmentTransport,
) -> Result<serde_json::Value, SubmitError> {
    let request = assemble(raw);
    let report = validate(&request);
    if !report.ok {
        return Err(SubmitError::Rejected(report));
    }
    tracing::debug!(top_concern = %request.top_concern.top_concern, "Submitting assessment request");
    Ok(transport.submit(&request)?)
}
