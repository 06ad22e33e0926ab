// Token normalization for free-form survey answers.
// Canonical tokens are lowercase snake_case; the wizard stores whatever the
// UI displayed, so everything funnels through here before table lookups.

use std::sync::LazyLock;

use regex::Regex;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// Normalize a free-form answer into snake_case token form: trim, lowercase,
/// collapse every run of non-alphanumeric characters to a single underscore,
/// strip leading/trailing underscores.
///
/// Total function — empty input yields an empty string, never an error.
pub fn normalize_token(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for c in raw.trim().chars() {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Remove parenthetical annotations from a clinical display label,
/// e.g. "Dysmenorrhea (painful periods)" → "Dysmenorrhea ".
pub fn strip_parenthetical(raw: &str) -> String {
    PARENTHETICAL.replace_all(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_to_token() {
        assert_eq!(normalize_token("Light periods / Spotting"), "light_periods_spotting");
        assert_eq!(normalize_token("Heavy periods"), "heavy_periods");
        assert_eq!(normalize_token("Mood swings"), "mood_swings");
    }

    #[test]
    fn already_canonical_unchanged() {
        assert_eq!(normalize_token("hormonal_iud"), "hormonal_iud");
        assert_eq!(normalize_token("pcos"), "pcos");
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(normalize_token("  hot -- / flashes!! "), "hot_flashes");
        assert_eq!(normalize_token("___stress___"), "stress");
    }

    #[test]
    fn uppercase_and_whitespace() {
        assert_eq!(normalize_token(" PCOS "), "pcos");
        assert_eq!(normalize_token("ADULT ACNE"), "adult_acne");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize_token(""), "");
        assert_eq!(normalize_token("   "), "");
        assert_eq!(normalize_token("?!/"), "");
    }

    #[test]
    fn parenthetical_stripped() {
        assert_eq!(
            normalize_token(&strip_parenthetical("Amenorrhea (absence of periods)")),
            "amenorrhea"
        );
        assert_eq!(
            normalize_token(&strip_parenthetical("Premenstrual Syndrome (PMS)")),
            "premenstrual_syndrome"
        );
    }

    #[test]
    fn strip_parenthetical_without_parens_is_noop() {
        assert_eq!(strip_parenthetical("Hypothyroidism"), "Hypothyroidism");
    }
}
