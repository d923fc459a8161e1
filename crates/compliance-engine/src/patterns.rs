//! Keyword vocabularies shared by the compliance checks.

/// Keywords marking an event as decision-like.
pub const DECISION_KEYWORDS: &[&str] = &["decision", "ruling"];

/// Keywords marking an event as evidence-handling.
pub const EVIDENCE_KEYWORDS: &[&str] = &["evidence", "review"];

/// Case-insensitive test for any keyword occurring in `text`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let text_lower = text.to_lowercase();
    keywords.iter().any(|kw| text_lower.contains(kw))
}
