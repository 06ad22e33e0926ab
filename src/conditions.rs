// Condition mapper: diagnosis answers → the 11-token diagnosis set.
// The wizard shows decorated clinical labels ("Dysmenorrhea (painful
// periods)"); older versions stored their normalized forms with the
// parenthetical text still embedded. Both spellings resolve here.

use crate::normalize::{normalize_token, strip_parenthetical};
use crate::tokens::{member, DIAGNOSES};

/// Decorated display labels as the wizard renders them, mapped directly to
/// canonical tokens. Checked before any normalization.
const DIRECT_LABELS: &[(&str, &str)] = &[
    ("PCOS", "pcos"),
    ("PCOD", "pcod"),
    ("Endometriosis", "endometriosis"),
    ("Dysmenorrhea (painful periods)", "dysmenorrhea"),
    ("Dysmenorrhea", "dysmenorrhea"),
    ("Amenorrhea (absence of periods)", "amenorrhea"),
    ("Amenorrhea", "amenorrhea"),
    ("Menorrhagia (prolonged/heavy bleeding)", "menorrhagia"),
    ("Menorrhagia", "menorrhagia"),
    ("Metrorrhagia (irregular bleeding)", "metrorrhagia"),
    ("Metrorrhagia", "metrorrhagia"),
    ("Premenstrual Syndrome (PMS)", "pms"),
    ("PMS", "pms"),
    ("Premenstrual Dysphoric Disorder (PMDD)", "pmdd"),
    ("PMDD", "pmdd"),
    ("Hashimotos (thyroid autoimmunity)", "hashimotos"),
    ("Hashimotos", "hashimotos"),
    ("Hypothyroidism", "hypothyroidism"),
];

/// Legacy normalized forms of the decorated labels (parenthetical text kept
/// and snake_cased by an earlier wizard release).
const SHORT_FORMS: &[(&str, &str)] = &[
    ("dysmenorrhea_painful_periods", "dysmenorrhea"),
    ("amenorrhea_absence_of_periods", "amenorrhea"),
    ("menorrhagia_prolonged_heavy_bleeding", "menorrhagia"),
    ("metrorrhagia_irregular_bleeding", "metrorrhagia"),
    ("premenstrual_syndrome_pms", "pms"),
    ("premenstrual_dysphoric_disorder_pmdd", "pmdd"),
    ("hashimotos_thyroid_autoimmunity", "hashimotos"),
];

/// Resolve one diagnosis answer: direct label → legacy short form of the
/// parenthetical-stripped normalization → bare membership → drop.
pub fn resolve_condition(label: &str) -> Option<&'static str> {
    if let Some(&(_, token)) = DIRECT_LABELS.iter().find(|(l, _)| *l == label) {
        return Some(token);
    }
    let base = normalize_token(&strip_parenthetical(label));
    if let Some((_, token)) = SHORT_FORMS.iter().find(|(form, _)| *form == base) {
        return member(DIAGNOSES, token);
    }
    member(DIAGNOSES, &base)
}

/// Map diagnosis answers to canonical tokens, unique in first-seen order.
/// Unmappable labels are dropped silently (debug-logged).
pub fn map_conditions(labels: &[String]) -> Vec<&'static str> {
    let mut mapped = Vec::new();
    for label in labels {
        match resolve_condition(label) {
            Some(token) => {
                if !mapped.contains(&token) {
                    mapped.push(token);
                }
            }
            None => {
                tracing::debug!(value = %label, "unmappable diagnosis answer dropped");
            }
        }
    }
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn direct_label_targets_are_valid_tokens() {
        for (label, token) in DIRECT_LABELS {
            assert!(
                member(DIAGNOSES, token).is_some(),
                "label {label} maps to unknown token {token}"
            );
        }
        for (form, token) in SHORT_FORMS {
            assert!(
                member(DIAGNOSES, token).is_some(),
                "short form {form} maps to unknown token {token}"
            );
        }
    }

    #[test]
    fn decorated_labels_resolve() {
        assert_eq!(
            map_conditions(&strings(&["Dysmenorrhea (painful periods)"])),
            vec!["dysmenorrhea"]
        );
        assert_eq!(
            map_conditions(&strings(&["Premenstrual Syndrome (PMS)"])),
            vec!["pms"]
        );
        assert_eq!(
            map_conditions(&strings(&["Hashimotos (thyroid autoimmunity)"])),
            vec!["hashimotos"]
        );
    }

    #[test]
    fn legacy_short_forms_resolve() {
        assert_eq!(
            map_conditions(&strings(&["menorrhagia_prolonged_heavy_bleeding"])),
            vec!["menorrhagia"]
        );
        assert_eq!(
            map_conditions(&strings(&["premenstrual_dysphoric_disorder_pmdd"])),
            vec!["pmdd"]
        );
    }

    #[test]
    fn case_and_whitespace_insensitive_dedup() {
        assert_eq!(
            map_conditions(&strings(&["PCOS", "pcos", "PCOS "])),
            vec!["pcos"]
        );
    }

    #[test]
    fn bare_tokens_pass_through() {
        for token in DIAGNOSES {
            assert_eq!(map_conditions(&strings(&[*token])), vec![*token]);
        }
    }

    #[test]
    fn unknown_condition_dropped() {
        assert!(map_conditions(&strings(&["Fibromyalgia"])).is_empty());
        assert!(map_conditions(&strings(&[""])).is_empty());
    }

    #[test]
    fn order_of_first_occurrence_preserved() {
        assert_eq!(
            map_conditions(&strings(&["Endometriosis", "PCOS", "endometriosis"])),
            vec!["endometriosis", "pcos"]
        );
    }
}
