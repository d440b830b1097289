//! Prometheus counters for dataset access

use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

use crate::services::iptv_org::Dataset;

lazy_static! {
    /// Dataset downloads by outcome ("ok" | "error")
    pub static ref DATASET_FETCH_TOTAL: IntCounterVec = register_int_counter_vec!(
        "iptv_dataset_fetch_total",
        "Dataset downloads from the iptv-org endpoints",
        &["dataset", "outcome"]
    )
    .unwrap();

    /// Dataset reads served from the in-memory cache
    pub static ref DATASET_CACHE_HITS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "iptv_dataset_cache_hits_total",
        "Dataset reads served from memory",
        &["dataset"]
    )
    .unwrap();
}

pub fn record_fetch(dataset: Dataset, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    DATASET_FETCH_TOTAL
        .with_label_values(&[dataset.as_str(), outcome])
        .inc();
}

pub fn record_cache_hit(dataset: Dataset) {
    DATASET_CACHE_HITS_TOTAL
        .with_label_values(&[dataset.as_str()])
        .inc();
}
