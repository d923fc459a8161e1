//! Descriptive statistics over the peer-case population.
//!
//! These are triage signals, not inferential claims: standard deviation
//! uses the population formula (divide by n, not n-1).

use case_types::CaseSummary;

/// Maximum number of peers considered, taken from the front of the
/// most-recent-first input.
pub const PEER_CAP: usize = 50;

/// Minimum scored peers for the z-score analysis.
pub const MIN_STATISTICAL_SAMPLE: usize = 5;

/// Minimum peers for the event-count and official-subset comparisons.
pub const MIN_COMPARISON_SAMPLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    pub mean: f64,
    pub std_dev: f64,
    pub n: usize,
}

/// Mean and population standard deviation of peer compliance scores.
/// Returns `None` below [`MIN_STATISTICAL_SAMPLE`] scored peers; callers
/// treat that as "insufficient data", never as an error.
pub fn compute_score_stats(peers: &[CaseSummary]) -> Option<PopulationStats> {
    let scores: Vec<f64> = capped(peers)
        .iter()
        .filter_map(|p| p.compliance_score)
        .map(f64::from)
        .collect();

    if scores.len() < MIN_STATISTICAL_SAMPLE {
        return None;
    }

    let n = scores.len();
    let mean = scores.iter().sum::<f64>() / n as f64;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;

    Some(PopulationStats {
        mean,
        std_dev: variance.sqrt(),
        n,
    })
}

/// Plain average of peer compliance scores, for comparisons that only need
/// a baseline mean and not a dispersion. Gated at the looser
/// [`MIN_COMPARISON_SAMPLE`], unlike [`compute_score_stats`].
pub fn average_score(peers: &[CaseSummary]) -> Option<f64> {
    let scores: Vec<f64> = capped(peers)
        .iter()
        .filter_map(|p| p.compliance_score)
        .map(f64::from)
        .collect();

    if scores.len() < MIN_COMPARISON_SAMPLE {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Average event count across peers; `None` below
/// [`MIN_COMPARISON_SAMPLE`].
pub fn average_event_count(peers: &[CaseSummary]) -> Option<f64> {
    let peers = capped(peers);
    if peers.len() < MIN_COMPARISON_SAMPLE {
        return None;
    }
    let total: u64 = peers.iter().map(|p| u64::from(p.event_count)).sum();
    Some(total as f64 / peers.len() as f64)
}

/// Average compliance score of scored peers sharing at least one of the
/// given officials, with the qualifying sample size. `None` below
/// [`MIN_COMPARISON_SAMPLE`] qualifying scored peers.
pub fn official_subset_average(
    peers: &[CaseSummary],
    officials: &[String],
) -> Option<(f64, usize)> {
    let scores: Vec<f64> = capped(peers)
        .iter()
        .filter(|p| p.officials.iter().any(|o| officials.contains(o)))
        .filter_map(|p| p.compliance_score)
        .map(f64::from)
        .collect();

    if scores.len() < MIN_COMPARISON_SAMPLE {
        return None;
    }
    let n = scores.len();
    Some((scores.iter().sum::<f64>() / n as f64, n))
}

fn capped(peers: &[CaseSummary]) -> &[CaseSummary] {
    &peers[..peers.len().min(PEER_CAP)]
}
