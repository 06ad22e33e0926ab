// Assessment intake canonicalization core.
//
// The intake wizard accumulates loosely-structured answers (display labels,
// legacy spellings, shape-ambiguous storage) across its steps; the
// assessment service demands a strictly-typed, enumerated request document.
// This crate is the bridge: a total, pure assembly pipeline
//
//   RawSurveyState → assemble() → CanonicalAssessmentRequest → validate()
//
// followed by an independent preflight check before the document is handed
// to the transport collaborator. Rendering, navigation, persistence, and the
// network itself all live outside this crate.

pub mod assemble;
pub mod category;
pub mod conditions;
pub mod normalize;
pub mod raw;
pub mod request;
pub mod submit;
pub mod tokens;
pub mod validate;


pub use assemble::assemble;
pub use category::{map_category, resolve_top_concern};
pub use conditions::map_conditions;
pub use normalize::normalize_token;
pub use raw::RawSurveyState;
pub use request::CanonicalAssessmentRequest;
pub use submit::{submit_assessment, AssessmentTransport, SubmitError, TransportError};
pub use tokens::ConcernCategory;
pub use validate::{validate, ValidationError, ValidationResult};
