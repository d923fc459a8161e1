pub mod detector;
pub mod stats;

pub use detector::analyze_bias;
pub use stats::{
    average_event_count, average_score, compute_score_stats, official_subset_average,
    PopulationStats, MIN_COMPARISON_SAMPLE, MIN_STATISTICAL_SAMPLE, PEER_CAP,
};
