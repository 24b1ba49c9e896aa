//! Sends one sample report through the configured email channel, to check
//! credentials and SMTP settings without touching the history file.

use internship_sniper::{init_tracing, EmailNotifier, Notifier, Report, SniperConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = SniperConfig::load_default()?;
    let notifier = EmailNotifier::from_config(&cfg);

    let report = Report::new(vec![
        "| Acme Capital | Freshman Discovery Program | New York, NY | Oct 14 |".to_string(),
        "| Beta Markets | Early Insight Week | Remote | Oct 14 |".to_string(),
    ]);
    let outcome = notifier.deliver(&report).await;

    println!("notify-demo done: {}", outcome.label());
    Ok(())
}
