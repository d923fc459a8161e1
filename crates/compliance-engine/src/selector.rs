//! Case-type resolution when the caller does not name one.

use case_types::{CaseTypeDefinition, ProcedureEvent};

use crate::matcher::step_matches;

/// Pick the catalog entry whose required steps best cover the observed
/// events. Score = count of (event, required step) matching pairs.
///
/// Ties are broken by catalog iteration order: the first candidate reaching
/// the best score wins. Returns `None` for an empty catalog or when no
/// candidate scores above zero; callers must then run only the
/// type-independent checks.
pub fn select_case_type<'a>(
    events: &[ProcedureEvent],
    catalog: &'a [CaseTypeDefinition],
) -> Option<&'a CaseTypeDefinition> {
    let mut best: Option<(&CaseTypeDefinition, usize)> = None;

    for candidate in catalog {
        let score = match_score(events, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.filter(|(_, score)| *score > 0).map(|(def, _)| def)
}

fn match_score(events: &[ProcedureEvent], candidate: &CaseTypeDefinition) -> usize {
    events
        .iter()
        .map(|event| {
            candidate
                .required_steps
                .iter()
                .filter(|step| step_matches(&event.action, step))
                .count()
        })
        .sum()
}
