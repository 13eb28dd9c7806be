//! Genericity detection.
//!
//! Decides whether a parsed plan is too shallow to hand to downstream
//! agents. The check serializes the plan to one lowercase string and scans
//! for an enumerated table of placeholder phrases. It is intentionally
//! over-broad: a false positive only triggers enhancement, which is
//! idempotent and safe to over-apply.

use super::document::PlanDocument;

/// Phrases that mark boilerplate the model emits when it has nothing
/// specific to say. All lowercase; matching is case-insensitive.
const PLACEHOLDER_PHRASES: &[&str] = &[
    "to be defined based on goal",
    "to be determined",
    "modern web technologies",
    "main content",
    "content area",
    "basic functionality",
    "lorem ipsum",
];

/// Whether any placeholder phrase occurs anywhere in the plan.
pub fn is_generic(plan: &PlanDocument) -> bool {
    let Ok(serialized) = serde_json::to_string(plan) else {
        return false;
    };
    let haystack = serialized.to_lowercase();
    PLACEHOLDER_PHRASES
        .iter()
        .any(|phrase| haystack.contains(phrase))
}
