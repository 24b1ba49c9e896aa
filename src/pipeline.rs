//! # Run pipeline
//! One linear pass: load history, fetch and filter every source, diff against
//! the snapshot, notify, then append the new rows. Meant to be started by an
//! external scheduler; nothing but the history file survives between runs.

use metrics::{counter, gauge};

use crate::config::{HistoryPolicy, SniperConfig};
use crate::diff::new_entries;
use crate::filter::LineFilter;
use crate::history::HistoryStore;
use crate::ingest::gather_candidates;
use crate::ingest::types::DocumentSource;
use crate::metrics::ensure_metrics_described;
use crate::notify::{DeliveryOutcome, Notifier, Report};

#[derive(Debug)]
pub struct RunSummary {
    pub sources_total: usize,
    pub sources_failed: usize,
    pub candidates: usize,
    pub new_entries: Vec<String>,
    pub delivery: DeliveryOutcome,
    /// Rows written to history this run; 0 when the append was withheld or failed.
    pub history_appended: usize,
}

pub async fn run_once(
    cfg: &SniperConfig,
    fetcher: &dyn DocumentSource,
    notifier: &dyn Notifier,
) -> RunSummary {
    ensure_metrics_described();
    tracing::info!(sources = cfg.sources.len(), "internship sniper run started");

    let store = HistoryStore::new(&cfg.history_path);
    let seen = store.load().await;
    tracing::debug!(known = seen.len(), path = %store.path().display(), "history loaded");

    let filter = LineFilter::new(&cfg.keywords, &cfg.block_keywords)
        .with_replace_delimiters(cfg.replace_delimiters);
    let gathered = gather_candidates(&cfg.sources, fetcher, &filter).await;

    let fresh = new_entries(&gathered.candidates, &seen);
    counter!("sniper_new_entries_total").increment(fresh.len() as u64);
    if fresh.is_empty() {
        tracing::info!("no new freshman/early programs found");
    } else {
        tracing::info!(count = fresh.len(), "found new opportunities");
    }

    let report = Report::new(fresh);
    let delivery = notifier.deliver(&report).await;
    counter!("sniper_delivery_total", "outcome" => delivery.label()).increment(1);

    let history_appended = record(&store, cfg.history_policy, &delivery, &report.entries).await;

    let summary = RunSummary {
        sources_total: cfg.sources.len(),
        sources_failed: gathered.sources_failed,
        candidates: gathered.candidates.len(),
        new_entries: report.entries,
        delivery,
        history_appended,
    };

    gauge!("sniper_last_run_ts").set(chrono::Utc::now().timestamp().max(0) as f64);
    tracing::info!(
        sources = summary.sources_total,
        failed = summary.sources_failed,
        candidates = summary.candidates,
        new = summary.new_entries.len(),
        delivery = summary.delivery.label(),
        recorded = summary.history_appended,
        "run finished"
    );
    summary
}

async fn record(
    store: &HistoryStore,
    policy: HistoryPolicy,
    delivery: &DeliveryOutcome,
    entries: &[String],
) -> usize {
    if policy == HistoryPolicy::UnlessFailed && delivery.is_failed() {
        tracing::warn!(
            withheld = entries.len(),
            "delivery failed, new entries left out of history so the next run reports them again"
        );
        return 0;
    }
    match store.append(entries).await {
        Ok(()) => entries.len(),
        Err(e) => {
            tracing::warn!("history append failed: {e:#}");
            0
        }
    }
}
