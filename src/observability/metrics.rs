//! Metric recording helpers.
//!
//! # Metrics
//! - `render_cache_hits_total` / `render_cache_misses_total` (counters)
//! - `render_cache_entries` (gauge): current cache size
//! - `renders_total{outcome}` (counter): ok / error / panic
//! - `pool_workers_idle` (gauge): workers available without waiting
//! - `route_table_swaps_total` (counter)
//!
//! The crate only records against the `metrics` facade; wiring an
//! exporter is the embedder's concern.

pub fn record_cache_hit() {
    metrics::counter!("render_cache_hits_total").increment(1);
}

pub fn record_cache_miss() {
    metrics::counter!("render_cache_misses_total").increment(1);
}

pub fn record_cache_size(entries: usize) {
    metrics::gauge!("render_cache_entries").set(entries as f64);
}

pub fn record_render(outcome: &'static str) {
    metrics::counter!("renders_total", "outcome" => outcome).increment(1);
}

pub fn record_pool_idle(workers: usize) {
    metrics::gauge!("pool_workers_idle").set(workers as f64);
}

pub fn record_route_table_swap() {
    metrics::counter!("route_table_swaps_total").increment(1);
}
