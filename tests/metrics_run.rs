// tests/metrics_run.rs
#![cfg(feature = "strict-metrics")]
use internship_sniper::ingest::types::{DocumentSource, FetchError, RawDocument};
use internship_sniper::{run_once, NoopNotifier, SniperConfig};
use metrics_exporter_prometheus::PrometheusBuilder;

struct OneDoc;

#[async_trait::async_trait]
impl DocumentSource for OneDoc {
    async fn fetch(&self, source: &str) -> Result<RawDocument, FetchError> {
        if source == "down" {
            return Err(FetchError::Timeout("deadline".into()));
        }
        Ok(RawDocument {
            source: source.to_string(),
            text: "| Acme | Freshman Program |\n".to_string(),
        })
    }
}

#[tokio::test]
async fn metrics_exposed_after_run() {
    // Install a local recorder for the test
    let handle = PrometheusBuilder::new().install_recorder().expect("recorder");

    let dir = tempfile::tempdir().unwrap();
    let cfg = SniperConfig {
        sources: vec!["up".into(), "down".into()],
        keywords: vec!["Freshman".into()],
        history_path: dir.path().join("seen_jobs.txt"),
        ..SniperConfig::default()
    };
    let _ = run_once(&cfg, &OneDoc, &NoopNotifier).await;

    // Scrape metrics text and check series presence by substring
    let out = handle.render();
    assert!(out.contains("sniper_fetch_errors_total"));
    assert!(out.contains("sniper_candidates_total"));
    assert!(out.contains("sniper_new_entries_total"));
    assert!(out.contains("sniper_delivery_total"));
    assert!(out.contains("sniper_last_run_ts"));
}
