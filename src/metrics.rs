// src/metrics.rs
use metrics::{describe_counter, describe_gauge};
use once_cell::sync::OnceCell;

/// One-time metrics registration (so series show up once a recorder is installed).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "sniper_fetch_errors_total",
            "Source fetches that returned no data."
        );
        describe_counter!(
            "sniper_candidates_total",
            "Table rows that passed the keyword filter."
        );
        describe_counter!(
            "sniper_new_entries_total",
            "Rows not seen in any earlier run."
        );
        describe_counter!(
            "sniper_delivery_total",
            "Notification attempts by outcome."
        );
        describe_gauge!("sniper_last_run_ts", "Unix ts when the last run finished.");
    });
}
