// Closed token sets understood by the downstream assessment service, plus
// the synonym and legacy lookup tables used to reach them. Everything here
// is process-wide, immutable, and defined once; mappers borrow these tables
// and never copy or mutate them.

/// Valid `period_pattern.period_pattern` literals.
pub const PERIOD_PATTERNS: &[&str] = &[
    "regular",
    "irregular",
    "occasional_skips",
    "no_periods",
    "not_sure",
];

/// Valid `period_pattern.birth_control` literals.
pub const BIRTH_CONTROL: &[&str] = &["hormonal_pills", "hormonal_iud", "copper_iud", "none"];

/// Valid `cycle_details.cycle_length` literals.
pub const CYCLE_LENGTHS: &[&str] = &["<21", "21-25", "26-30", "31-35", "35+", "not_sure"];

/// Valid `diagnosed_conditions.conditions` tokens.
pub const DIAGNOSES: &[&str] = &[
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

/// Legacy averaged-cycle-range values (older wizard versions stored these)
/// mapped to the canonical cycle-length literals.
pub const LEGACY_CYCLE_RANGES: &[(&str, &str)] = &[
    ("<21", "<21"),
    ("21_25", "21-25"),
    ("26_30", "26-30"),
    ("31_35", "31-35"),
    ("35_plus", "35+"),
    ("35+", "35+"),
    ("not_sure", "not_sure"),
];

/// Fallback when neither an explicit nor a legacy cycle length resolves.
pub const DEFAULT_CYCLE_LENGTH: &str = "26-30";

/// The four multi-select health-concern categories of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcernCategory {
    Period,
    Body,
    SkinHair,
    Mental,
}

impl ConcernCategory {
    pub const ALL: [ConcernCategory; 4] = [
        ConcernCategory::Period,
        ConcernCategory::Body,
        ConcernCategory::SkinHair,
        ConcernCategory::Mental,
    ];

    /// Section key of this category inside `health_concerns`.
    pub fn key(self) -> &'static str {
        match self {
            ConcernCategory::Period => "period_concerns",
            ConcernCategory::Body => "body_concerns",
            ConcernCategory::SkinHair => "skin_hair_concerns",
            ConcernCategory::Mental => "mental_health_concerns",
        }
    }

    /// Closed token set of this category.
    pub fn allowed(self) -> &'static [&'static str] {
        match self {
            ConcernCategory::Period => &[
                "irregular_periods",
                "painful_periods",
                "light_periods",
                "heavy_periods",
            ],
            ConcernCategory::Body => &[
                "bloating",
                "hot_flashes",
                "nausea",
                "weight_difficulty",
                "recent_weight_gain",
                "menstrual_headaches",
            ],
            ConcernCategory::SkinHair => &["hirsutism", "hair_thinning", "adult_acne"],
            ConcernCategory::Mental => &["mood_swings", "stress", "fatigue"],
        }
    }

    /// Alternate normalized phrasings (UI wording drift across wizard
    /// versions) mapped to this category's canonical tokens.
    pub fn synonyms(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ConcernCategory::Period => &[("light_periods_spotting", "light_periods")],
            ConcernCategory::Body => &[
                (
                    "difficulty_losing_weight_stubborn_belly_fat",
                    "weight_difficulty",
                ),
                ("menstrual_headache", "menstrual_headaches"),
            ],
            ConcernCategory::SkinHair => &[("thinning_of_hair", "hair_thinning")],
            ConcernCategory::Mental => &[],
        }
    }
}

/// Exact membership lookup returning the interned canonical token.
pub fn member(set: &'static [&'static str], value: &str) -> Option<&'static str> {
    set.iter().copied().find(|token| *token == value)
}
