// The canonical assessment request: the exact JSON shape the assessment
// service accepts. Constructed once per submission attempt by the assembler;
// every enumerated field holds a member of its allow-list by construction.
// Fields stay as plain strings (not enums) so the preflight validator can
// re-check membership independently of how the document was built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalAssessmentRequest {
    pub basic_info: BasicInfo,
    pub period_pattern: PeriodPattern,
    pub cycle_details: CycleDetails,
    pub health_concerns: HealthConcerns,
    pub top_concern: TopConcern,
    pub diagnosed_conditions: DiagnosedConditions,
    pub lab_results: Option<LabResults>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodPattern {
    pub period_pattern: String,
    pub birth_control: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleDetails {
    pub last_period_date: Option<NaiveDate>,
    pub date_not_sure: bool,
    pub cycle_length: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthConcerns {
    pub period_concerns: Vec<String>,
    pub body_concerns: Vec<String>,
    pub skin_hair_concerns: Vec<String>,
    pub mental_health_concerns: Vec<String>,
    pub others: Option<String>,
    pub none: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopConcern {
    pub top_concern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosedConditions {
    pub conditions: Vec<String>,
    pub others_input: Option<String>,
}

/// Manually-entered lab values. Passed through unchanged — never token
/// mapped, never interpreted medically. Field names are fixed by the
/// service's schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabResults {
    pub total_testosterone: Option<f64>,
    pub free_testosterone: Option<f64>,
    pub dhea_s: Option<f64>,
    pub lh: Option<f64>,
    pub fsh: Option<f64>,
    pub tsh: Option<f64>,
    pub free_t3: Option<f64>,
    pub free_t4: Option<f64>,
    pub fasting_insulin: Option<f64>,
    pub hba1c: Option<f64>,
    pub fasting_glucose: Option<f64>,
    pub am_cortisol: Option<f64>,
    pub estradiol: Option<f64>,
    pub progesterone: Option<f64>,
    pub shbg: Option<f64>,
}
