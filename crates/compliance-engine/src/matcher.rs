//! Fuzzy step matching between free-text event actions and rule text.
//!
//! Event actions come from a separate extraction step and never match rule
//! text exactly. The policy here is a bounded-prefix substring test: cheap,
//! deterministic, and auditable, unlike edit-distance similarity.

/// Number of leading characters used as the containment probe.
pub const MATCH_PREFIX_CHARS: usize = 15;

/// Case-insensitive containment test in either direction, restricted to the
/// first [`MATCH_PREFIX_CHARS`] characters of each side. Empty or
/// whitespace-only text never matches, so blank rules read as "not found"
/// and lean toward flagging.
pub fn step_matches(candidate_action: &str, step_description: &str) -> bool {
    let action = candidate_action.trim().to_lowercase();
    let step = step_description.trim().to_lowercase();

    if action.is_empty() || step.is_empty() {
        return false;
    }

    let action_prefix: String = action.chars().take(MATCH_PREFIX_CHARS).collect();
    let step_prefix: String = step.chars().take(MATCH_PREFIX_CHARS).collect();

    action.contains(&step_prefix) || step.contains(&action_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_identical_text() {
        assert!(step_matches("Hearing opened", "Hearing opened"));
    }

    #[test]
    fn test_matches_case_insensitively() {
        assert!(step_matches("HEARING OPENED", "hearing opened"));
    }

    #[test]
    fn test_matches_when_action_elaborates_on_step() {
        // The step prefix appears inside the longer action text.
        assert!(step_matches(
            "Hearing opened by the presiding judge at 9am",
            "Hearing opened"
        ));
    }

    #[test]
    fn test_matches_when_step_elaborates_on_action() {
        assert!(step_matches(
            "Rights reading",
            "Rights reading performed for the defendant"
        ));
    }

    #[test]
    fn test_rejects_unrelated_text() {
        assert!(!step_matches("Witness sworn in", "Security deposit returned"));
    }

    #[test]
    fn test_empty_text_never_matches() {
        assert!(!step_matches("", "Hearing opened"));
        assert!(!step_matches("Hearing opened", ""));
        assert!(!step_matches("   ", "Hearing opened"));
        assert!(!step_matches("", ""));
    }

    #[test]
    fn test_divergence_past_prefix_still_matches() {
        // Only the first 15 characters are probed; trailing differences are
        // tolerated paraphrase.
        assert!(step_matches(
            "Decision announced orally",
            "Decision announced in writing"
        ));
    }

    #[test]
    fn test_multibyte_text_does_not_panic() {
        assert!(step_matches("Décision annoncée", "Décision annoncée au greffe"));
    }
}
