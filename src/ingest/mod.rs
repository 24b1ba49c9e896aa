// src/ingest/mod.rs
pub mod http;
pub mod types;

use crate::filter::LineFilter;
use crate::ingest::types::DocumentSource;
use crate::metrics::ensure_metrics_described;
use metrics::counter;

/// Filtered rows from every source, in source order, plus the failure count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gathered {
    pub candidates: Vec<String>,
    pub sources_failed: usize,
}

/// Fetch each source in turn and run its body through the filter.
/// A failing source is logged and contributes nothing.
pub async fn gather_candidates<S: AsRef<str>>(
    sources: &[S],
    fetcher: &dyn DocumentSource,
    filter: &LineFilter,
) -> Gathered {
    ensure_metrics_described();

    let mut out = Gathered::default();
    for source in sources {
        let source = source.as_ref();
        match fetcher.fetch(source).await {
            Ok(doc) => {
                let rows = filter.filter(&doc.text);
                tracing::info!(
                    source,
                    lines = doc.text.lines().count(),
                    matched = rows.len(),
                    "source scanned"
                );
                counter!("sniper_candidates_total").increment(rows.len() as u64);
                out.candidates.extend(rows);
            }
            Err(e) => {
                tracing::warn!(source, kind = e.kind(), error = %e, "fetch failed");
                counter!("sniper_fetch_errors_total", "kind" => e.kind()).increment(1);
                out.sources_failed += 1;
            }
        }
    }
    out
}
