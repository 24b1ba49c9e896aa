//! Internship Sniper: binary entrypoint.
//! Runs one scan and exits. Schedule it externally (cron, CI timer).

use internship_sniper::{init_tracing, run_once, EmailNotifier, HttpFetcher, SniperConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when the variables come from the scheduler.
    let _ = dotenvy::dotenv();
    init_tracing();

    tracing::info!(started_at = %chrono::Local::now(), "internship sniper starting");

    let cfg = SniperConfig::load_default()?;
    if cfg.delivery.is_none() {
        tracing::info!("EMAIL_SENDER/EMAIL_PASSWORD unset, results will only be logged");
    }

    let fetcher = HttpFetcher::new().with_timeout(cfg.fetch_timeout_secs);
    let notifier = EmailNotifier::from_config(&cfg);

    let summary = run_once(&cfg, &fetcher, &notifier).await;
    for entry in &summary.new_entries {
        tracing::info!("new: {entry}");
    }
    Ok(())
}
