// Schema assembler: accumulated wizard answers → canonical request document.
// Total by design: every field has a defaulting or clamping rule, so malformed
// upstream data degrades to a schema-conformant document instead of an error.
// Assembly is a pure function of the raw state; re-running it on unchanged
// input produces an identical document.

use chrono::NaiveDate;

use crate::category::{map_category, resolve_top_concern};
use crate::conditions::map_conditions;
use crate::raw::{
    RawAge, RawBirthControl, RawCycleDetails, RawSurveyState, RawTopConcern,
};
use crate::request::{
    BasicInfo, CanonicalAssessmentRequest, CycleDetails, DiagnosedConditions, HealthConcerns,
    PeriodPattern, TopConcern,
};
use crate::tokens::{
    member, ConcernCategory, BIRTH_CONTROL, CYCLE_LENGTHS, DEFAULT_CYCLE_LENGTH,
    LEGACY_CYCLE_RANGES, PERIOD_PATTERNS,
};

/// Placeholder when the name answer is blank or missing.
const DEFAULT_NAME: &str = "User";

/// Fallback age when the answer is unparseable or out of bounds.
const DEFAULT_AGE: u32 = 25;

const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 40;

/// A birth-control scalar shorter than this is corrupted single-character
/// storage from an old wizard bug and is forced to `"none"`.
const MIN_BIRTH_CONTROL_LEN: usize = 5;

/// Build the canonical request from the accumulated survey state.
pub fn assemble(raw: &RawSurveyState) -> CanonicalAssessmentRequest {
    let concerns = &raw.health_concerns;
    CanonicalAssessmentRequest {
        basic_info: BasicInfo {
            name: assemble_name(raw.basic_info.name.as_deref()),
            age: assemble_age(raw.basic_info.age.as_ref()),
        },
        period_pattern: PeriodPattern {
            period_pattern: assemble_period_pattern(&raw.period_pattern).to_string(),
            birth_control: assemble_birth_control(raw.period_pattern.birth_control.as_ref())
                .to_string(),
        },
        cycle_details: assemble_cycle_details(&raw.cycle_details),
        health_concerns: HealthConcerns {
            period_concerns: owned(map_category(
                &concerns.period_concerns,
                ConcernCategory::Period,
            )),
            body_concerns: owned(map_category(&concerns.body_concerns, ConcernCategory::Body)),
            skin_hair_concerns: owned(map_category(
                &concerns.skin_hair_concerns,
                ConcernCategory::SkinHair,
            )),
            mental_health_concerns: owned(map_category(
                &concerns.mental_health_concerns,
                ConcernCategory::Mental,
            )),
            others: trimmed_text(concerns.others.as_deref()),
            none: concerns.none,
        },
        top_concern: TopConcern {
            top_concern: assemble_top_concern(raw.top_concern.as_ref()).to_string(),
        },
        diagnosed_conditions: DiagnosedConditions {
            conditions: owned(map_conditions(&raw.diagnosed_conditions.conditions)),
            others_input: trimmed_text(raw.diagnosed_conditions.others_input.as_deref()),
        },
        lab_results: raw.lab_results.clone(),
    }
}

fn owned(tokens: Vec<&'static str>) -> Vec<String> {
    tokens.into_iter().map(str::to_string).collect()
}

/// Trimmed free text, with blank collapsing to absent.
fn trimmed_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn assemble_name(name: Option<&str>) -> String {
    match trimmed_text(name) {
        Some(name) => name,
        None => DEFAULT_NAME.to_string(),
    }
}

fn assemble_age(age: Option<&RawAge>) -> u32 {
    let parsed = match age {
        Some(RawAge::Integer(n)) => Some(*n),
        Some(RawAge::Decimal(f)) if f.fract() == 0.0 => Some(*f as i64),
        // A fractional age is not a valid integer answer.
        Some(RawAge::Decimal(_)) => None,
        Some(RawAge::Text(s)) => s.trim().parse::<i64>().ok(),
        None => None,
    };
    match parsed {
        Some(n) if (i64::from(MIN_AGE)..=i64::from(MAX_AGE)).contains(&n) => n as u32,
        _ => DEFAULT_AGE,
    }
}

fn assemble_period_pattern(pattern: &crate::raw::RawPeriodPattern) -> &'static str {
    // Legacy `pattern` key wins when present, matching what the wizard wrote.
    let answer = pattern
        .pattern
        .as_deref()
        .or(pattern.period_pattern.as_deref())
        .unwrap_or("");
    member(PERIOD_PATTERNS, answer).unwrap_or("regular")
}

fn assemble_birth_control(answer: Option<&RawBirthControl>) -> &'static str {
    match answer {
        None => "none",
        Some(RawBirthControl::Many(values)) => values
            .iter()
            .find_map(|v| member(BIRTH_CONTROL, v))
            .unwrap_or("none"),
        Some(RawBirthControl::One(value)) => {
            if value.len() < MIN_BIRTH_CONTROL_LEN {
                // Corrupted single-character storage.
                "none"
            } else {
                member(BIRTH_CONTROL, value).unwrap_or("none")
            }
        }
    }
}

fn assemble_cycle_details(details: &RawCycleDetails) -> CycleDetails {
    let last_period_date = details
        .last_period_date
        .as_deref()
        .and_then(parse_iso_date);
    CycleDetails {
        last_period_date,
        date_not_sure: details.date_not_sure || last_period_date.is_none(),
        cycle_length: assemble_cycle_length(details).to_string(),
    }
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::debug!(value = %trimmed, "unparseable last-period date dropped");
            None
        }
    }
}

/// Explicit answer first, then the legacy averaged-range field; either is
/// accepted verbatim when canonical or translated through the legacy table.
fn assemble_cycle_length(details: &RawCycleDetails) -> &'static str {
    let answer = details
        .cycle_length
        .as_deref()
        .or(details.average_cycle_length.as_deref())
        .unwrap_or("");
    if let Some(token) = member(CYCLE_LENGTHS, answer) {
        return token;
    }
    LEGACY_CYCLE_RANGES
        .iter()
        .find(|(legacy, _)| *legacy == answer)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(DEFAULT_CYCLE_LENGTH)
}

fn assemble_top_concern(answer: Option<&RawTopConcern>) -> &'static str {
    match answer {
        None => "none",
        Some(RawTopConcern::Label(label)) => resolve_top_concern(label),
        Some(RawTopConcern::Section { top_concern }) => match top_concern {
            Some(label) => resolve_top_concern(label),
            None => "none",
        },
    }
}
