// Loosely-typed survey state accumulated across wizard steps. The wizard
// persists whatever each screen produced, so several answers are
// shape-ambiguous (array-or-scalar, string-or-object, string-or-number).
// Those arrive as explicit tagged unions here; the assembler does exhaustive
// case analysis instead of sniffing shapes at runtime.
//
// Every field is defaulted: a half-completed wizard still deserializes, and
// assembly of the missing sections falls back per-field.

use serde::{Deserialize, Serialize};

use crate::request::LabResults;

/// The full accumulated answer set, keyed by wizard section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSurveyState {
    pub basic_info: RawBasicInfo,
    pub period_pattern: RawPeriodPattern,
    pub cycle_details: RawCycleDetails,
    pub health_concerns: RawHealthConcerns,
    pub top_concern: Option<RawTopConcern>,
    pub diagnosed_conditions: RawDiagnosedConditions,
    pub lab_results: Option<LabResults>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBasicInfo {
    pub name: Option<String>,
    pub age: Option<RawAge>,
}

/// Age as stored by the wizard: a text-input string or an already-parsed
/// number, depending on the app version that wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAge {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPeriodPattern {
    /// Legacy key written by older wizard releases.
    pub pattern: Option<String>,
    pub period_pattern: Option<String>,
    pub birth_control: Option<RawBirthControl>,
}

/// Birth control as stored: multi-select array, or a single scalar. A stray
/// single character (corrupted storage of a scalar) also arrives as `One`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawBirthControl {
    Many(Vec<String>),
    One(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCycleDetails {
    pub last_period_date: Option<String>,
    pub date_not_sure: bool,
    pub cycle_length: Option<String>,
    /// Legacy averaged-range field, resolved via `LEGACY_CYCLE_RANGES`.
    pub average_cycle_length: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawHealthConcerns {
    #[serde(alias = "period")]
    pub period_concerns: Vec<String>,
    #[serde(alias = "body")]
    pub body_concerns: Vec<String>,
    #[serde(alias = "skin_hair")]
    pub skin_hair_concerns: Vec<String>,
    #[serde(alias = "mental")]
    pub mental_health_concerns: Vec<String>,
    pub others: Option<String>,
    pub none: bool,
}

/// Top concern as stored: a bare label, or a `{ top_concern: ... }` section
/// object, depending on whether the screen was auto-skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTopConcern {
    Label(String),
    Section { top_concern: Option<String> },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDiagnosedConditions {
    pub conditions: Vec<String>,
    #[serde(alias = "others")]
    pub others_input: Option<String>,
}
