//! Cross-case bias and anomaly detection.
//!
//! Three independent sub-analyses compare the current case against its peer
//! population; each may emit one indicator. Indicators compound through
//! confidence-weighted deviation into an overall risk, so several
//! simultaneous weak flags outweigh one isolated flag.

use case_types::{BiasAnalysisResult, BiasIndicator, BiasKind, CaseSummary, ProcedureEvent};
use serde_json::json;

use crate::stats::{
    average_event_count, average_score, compute_score_stats, official_subset_average,
    PopulationStats,
};

const Z_SCORE_THRESHOLD: f64 = 2.0;
const EVENT_SHORTFALL_THRESHOLD_PCT: f64 = 40.0;
const OFFICIAL_SCORE_GAP_THRESHOLD: f64 = 15.0;

/// Run all three sub-analyses and aggregate the result. Sub-analyses with
/// insufficient peer samples are skipped silently; absence of signal is a
/// normal outcome.
pub fn analyze_bias(
    current_score: u8,
    events: &[ProcedureEvent],
    peers: &[CaseSummary],
) -> BiasAnalysisResult {
    let mut flags = Vec::new();

    flags.extend(statistical_anomaly(current_score, peers));
    flags.extend(procedural_inconsistency(events.len(), peers));
    flags.extend(official_pattern(events, peers));

    let overall_bias_risk = aggregate_risk(&flags);

    BiasAnalysisResult {
        comparison_summary: compose_comparison_summary(&flags, peers.len()),
        is_anomaly: overall_bias_risk > 50,
        overall_bias_risk,
        flags,
    }
}

/// Z-score of the current compliance score against the peer population.
/// Needs at least 5 scored peers; a zero standard deviation yields z = 0
/// and never flags.
fn statistical_anomaly(current_score: u8, peers: &[CaseSummary]) -> Option<BiasIndicator> {
    let PopulationStats { mean, std_dev, n } = compute_score_stats(peers)?;

    let z = if std_dev == 0.0 {
        0.0
    } else {
        (f64::from(current_score) - mean).abs() / std_dev
    };

    if z <= Z_SCORE_THRESHOLD {
        return None;
    }

    Some(BiasIndicator {
        kind: BiasKind::Regional,
        description: format!(
            "Compliance score {} deviates {:.1} standard deviations from the \
             institutional peer mean of {:.1}",
            current_score, z, mean
        ),
        confidence: (0.5 + (z - Z_SCORE_THRESHOLD) * 0.15).min(0.95),
        deviation_score: z,
        comparison_data: json!({
            "peer_mean": mean,
            "peer_std_dev": std_dev,
            "peer_count": n,
            "current_score": current_score,
            "z_score": z,
        }),
    })
}

/// Flags cases with markedly fewer recorded events than peers, suggesting
/// skipped procedure. Needs at least 3 peers.
fn procedural_inconsistency(current_events: usize, peers: &[CaseSummary]) -> Option<BiasIndicator> {
    let avg_events = average_event_count(peers)?;
    if avg_events <= 0.0 || current_events == 0 {
        return None;
    }

    let percent_diff = (avg_events - current_events as f64) / avg_events * 100.0;
    if percent_diff <= EVENT_SHORTFALL_THRESHOLD_PCT {
        return None;
    }

    Some(BiasIndicator {
        kind: BiasKind::Political,
        description: format!(
            "Case recorded {} procedural event(s) against a peer average of \
             {:.1}, a {:.0}% shortfall",
            current_events, avg_events, percent_diff
        ),
        confidence: (0.5 + percent_diff / 100.0 * 0.4).min(0.85),
        deviation_score: percent_diff / 20.0,
        comparison_data: json!({
            "peer_average_events": avg_events,
            "current_events": current_events,
            "percent_difference": percent_diff,
        }),
    })
}

/// One-directional official check: flags when peers handled by the same
/// officials average more than 15 points below the full peer population.
/// Higher-than-average officials are never flagged.
fn official_pattern(events: &[ProcedureEvent], peers: &[CaseSummary]) -> Option<BiasIndicator> {
    let officials = distinct_speakers(events);
    if officials.is_empty() {
        return None;
    }

    let (subset_avg, subset_n) = official_subset_average(peers, &officials)?;
    let population_avg = average_score(peers)?;

    let gap = population_avg - subset_avg;
    if gap <= OFFICIAL_SCORE_GAP_THRESHOLD {
        return None;
    }

    Some(BiasIndicator {
        kind: BiasKind::Personal,
        description: format!(
            "Cases handled by the same official(s) average {:.1} compliance, \
             {:.1} points below the institutional average of {:.1}",
            subset_avg, gap, population_avg
        ),
        confidence: (0.5 + (gap - OFFICIAL_SCORE_GAP_THRESHOLD) * 0.01).min(0.9),
        deviation_score: gap / 10.0,
        comparison_data: json!({
            "officials": officials,
            "official_average": subset_avg,
            "official_case_count": subset_n,
            "population_average": population_avg,
            "score_gap": gap,
        }),
    })
}

fn distinct_speakers(events: &[ProcedureEvent]) -> Vec<String> {
    let mut speakers: Vec<String> = events
        .iter()
        .filter_map(|e| e.speaker.as_deref())
        .map(str::to_owned)
        .collect();
    speakers.sort();
    speakers.dedup();
    speakers
}

/// `min(round(Σ confidence·deviation·20), 100)`. Low-confidence,
/// low-deviation flags contribute negligibly; co-occurring flags compound.
fn aggregate_risk(flags: &[BiasIndicator]) -> u8 {
    let total: f64 = flags
        .iter()
        .map(|f| f.confidence * f.deviation_score * 20.0)
        .sum();
    total.round().min(100.0) as u8
}

fn compose_comparison_summary(flags: &[BiasIndicator], peer_count: usize) -> String {
    if flags.is_empty() {
        format!(
            "Compared against {} peer case(s) from the same institution; \
             no bias indicators flagged.",
            peer_count
        )
    } else {
        format!(
            "Compared against {} peer case(s) from the same institution; \
             {} bias indicator(s) flagged.",
            peer_count,
            flags.len()
        )
    }
}
