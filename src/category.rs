// Category mapper: free-form or display-label answers → a category's closed
// token set. Resolution order per value: exact membership → normalized form
// → synonym table → drop. Dropping is deliberate: the outbound document must
// satisfy the service's closed literals, so unmappable selections are
// omitted rather than carried as error markers.

use crate::normalize::normalize_token;
use crate::tokens::{member, ConcernCategory};

/// Resolve a single answer against one category's allow-list.
pub fn resolve_concern(value: &str, category: ConcernCategory) -> Option<&'static str> {
    let allowed = category.allowed();
    if let Some(token) = member(allowed, value) {
        return Some(token);
    }
    let normalized = normalize_token(value);
    if let Some(token) = member(allowed, &normalized) {
        return Some(token);
    }
    category
        .synonyms()
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .and_then(|(_, target)| member(allowed, target))
}

/// Map a multi-select answer list to canonical tokens, unique in first-seen
/// order. Unmappable values are dropped silently from the result; each drop
/// is reported on the diagnostic channel at debug level.
pub fn map_category(values: &[String], category: ConcernCategory) -> Vec<&'static str> {
    let mut mapped = Vec::new();
    for value in values {
        match resolve_concern(value, category) {
            Some(token) => {
                if !mapped.contains(&token) {
                    mapped.push(token);
                }
            }
            None => {
                tracing::debug!(
                    category = category.key(),
                    value = %value,
                    "unmappable concern answer dropped"
                );
            }
        }
    }
    mapped
}

/// Resolve the top-concern answer against the union of all four concern
/// categories plus `"none"`. Falls back to `"none"` when nothing matches —
/// the top concern must always be present in the document.
pub fn resolve_top_concern(value: &str) -> &'static str {
    if value == "none" {
        return "none";
    }
    for category in ConcernCategory::ALL {
        if let Some(token) = resolve_concern(value, category) {
            return token;
        }
    }
    tracing::debug!(value = %value, "unmappable top concern defaulted to none");
    "none"
}
