// Preflight validation: an independent second opinion on the assembled
// document, run once before it is handed to the transport. The allow-lists
// below are deliberately re-declared rather than imported from `tokens` —
// if the assembler and its tables ever drift from what the service accepts,
// this layer is the last chance to catch it before transmission.
//
// All violations are collected (no short-circuit), ordered by field path
// appearance in the document.

use serde::Serialize;

use crate::request::CanonicalAssessmentRequest;

const PERIOD_PATTERNS: &[&str] = &[
    "regular",
    "irregular",
    "occasional_skips",
    "no_periods",
    "not_sure",
];
const BIRTH_CONTROL: &[&str] = &["hormonal_pills", "hormonal_iud", "copper_iud", "none"];
const CYCLE_LENGTHS: &[&str] = &["<21", "21-25", "26-30", "31-35", "35+", "not_sure"];
const PERIOD_CONCERNS: &[&str] = &[
    "irregular_periods",
    "painful_periods",
    "light_periods",
    "heavy_periods",
];
const BODY_CONCERNS: &[&str] = &[
    "bloating",
    "hot_flashes",
    "nausea",
    "weight_difficulty",
    "recent_weight_gain",
    "menstrual_headaches",
];
const SKIN_HAIR_CONCERNS: &[&str] = &["hirsutism", "hair_thinning", "adult_acne"];
const MENTAL_HEALTH_CONCERNS: &[&str] = &["mood_swings", "stress", "fatigue"];
const DIAGNOSES: &[&str] = &[
    "pcos",
    "pcod",
    "endometriosis",
    "dysmenorrhea",
    "amenorrhea",
    "menorrhagia",
    "metrorrhagia",
    "pms",
    "pmdd",
    "hashimotos",
    "hypothyroidism",
];

const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 40;

/// One conformance violation: the offending field path plus a message
/// suitable for the correction flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Outcome of preflight validation. `errors` is empty iff `ok`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<ValidationError>,
}

/// Check the assembled document against the service's allow-lists.
pub fn validate(request: &CanonicalAssessmentRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.basic_info.name.trim().is_empty() {
        push(&mut errors, "basic_info.name", "Name is required");
    }
    if !(MIN_AGE..=MAX_AGE).contains(&request.basic_info.age) {
        push(
            &mut errors,
            "basic_info.age",
            "Age must be between 18 and 40",
        );
    }

    if !PERIOD_PATTERNS.contains(&request.period_pattern.period_pattern.as_str()) {
        push(
            &mut errors,
            "period_pattern.period_pattern",
            "Select a valid period pattern",
        );
    }
    if !BIRTH_CONTROL.contains(&request.period_pattern.birth_control.as_str()) {
        push(
            &mut errors,
            "period_pattern.birth_control",
            "Choose a valid birth control option",
        );
    }

    if !CYCLE_LENGTHS.contains(&request.cycle_details.cycle_length.as_str()) {
        push(
            &mut errors,
            "cycle_details.cycle_length",
            "Choose a valid cycle length",
        );
    }

    check_subset(
        &mut errors,
        &request.health_concerns.period_concerns,
        PERIOD_CONCERNS,
        "health_concerns.period_concerns",
    );
    check_subset(
        &mut errors,
        &request.health_concerns.body_concerns,
        BODY_CONCERNS,
        "health_concerns.body_concerns",
    );
    check_subset(
        &mut errors,
        &request.health_concerns.skin_hair_concerns,
        SKIN_HAIR_CONCERNS,
        "health_concerns.skin_hair_concerns",
    );
    check_subset(
        &mut errors,
        &request.health_concerns.mental_health_concerns,
        MENTAL_HEALTH_CONCERNS,
        "health_concerns.mental_health_concerns",
    );

    for condition in &request.diagnosed_conditions.conditions {
        if !DIAGNOSES.contains(&condition.as_str()) {
            push(
                &mut errors,
                "diagnosed_conditions.conditions",
                &format!("Invalid diagnosis: {condition}"),
            );
        }
    }

    if !errors.is_empty() {
        tracing::warn!(
            error_count = errors.len(),
            first_field = %errors[0].field,
            "Preflight validation failed"
        );
    }

    ValidationResult {
        ok: errors.is_empty(),
        errors,
    }
}

fn push(errors: &mut Vec<ValidationError>, field: &str, message: &str) {
    errors.push(ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    });
}

fn check_subset(
    errors: &mut Vec<ValidationError>,
    values: &[String],
    allowed: &[&str],
    field: &str,
) {
    for value in values {
        if !allowed.contains(&value.as_str()) {
            push(errors, field, &format!("Invalid value: {value}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;
    use crate::raw::RawSurveyState;

    fn valid_request() -> CanonicalAssessmentRequest {
        assemble(&RawSurveyState::default())
    }

    #[test]
    fn default_assembly_passes() {
        let report = validate(&valid_request());
        assert!(report.ok);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn unknown_period_pattern_rejected_with_field_path() {
        let mut request = valid_request();
        request.period_pattern.period_pattern = "xyz".into();
        let report = validate(&request);
        assert!(!report.ok);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "period_pattern.period_pattern");
    }

    #[test]
    fn all_violations_collected_in_field_order() {
        let mut request = valid_request();
        request.basic_info.name = "  ".into();
        request.basic_info.age = 17;
        request.period_pattern.birth_control = "implant".into();
        request.cycle_details.cycle_length = "35_plus".into();
        request
            .health_concerns
            .skin_hair_concerns
            .push("dandruff".into());
        request
            .diagnosed_conditions
            .conditions
            .push("fibroids".into());

        let report = validate(&request);
        assert!(!report.ok);
        let fields: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "basic_info.name",
                "basic_info.age",
                "period_pattern.birth_control",
                "cycle_details.cycle_length",
                "health_concerns.skin_hair_concerns",
                "diagnosed_conditions.conditions",
            ]
        );
    }

    #[test]
    fn age_bounds_inclusive() {
        for age in [18, 40] {
            let mut request = valid_request();
            request.basic_info.age = age;
            assert!(validate(&request).ok, "age {age} is valid");
        }
        for age in [17, 41, 0] {
            let mut request = valid_request();
            request.basic_info.age = age;
            assert!(!validate(&request).ok, "age {age} is invalid");
        }
    }

    #[test]
    fn each_bad_array_element_reported() {
        let mut request = valid_request();
        request.health_concerns.body_concerns =
            vec!["bloating".into(), "zzz".into(), "yyy".into()];
        let report = validate(&request);
        assert_eq!(report.errors.len(), 2);
        assert!(report
            .errors
            .iter()
            .all(|e| e.field == "health_concerns.body_concerns"));
        assert!(report.errors[0].message.contains("zzz"));
        assert!(report.errors[1].message.contains("yyy"));
    }

    #[test]
    fn lab_results_never_validated() {
        let mut request = valid_request();
        request.lab_results = Some(crate::request::LabResults {
            tsh: Some(-999.0),
            ..Default::default()
        });
        assert!(validate(&request).ok);
    }
}
