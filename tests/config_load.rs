// tests/config_load.rs
use internship_sniper::config::{HistoryPolicy, SniperConfig};
use std::path::PathBuf;
use std::{env, fs};

const VARS: [&str; 4] = [
    "SNIPER_CONFIG_PATH",
    "EMAIL_SENDER",
    "EMAIL_PASSWORD",
    "EMAIL_RECEIVER",
];

fn clear_env() {
    for v in VARS {
        env::remove_var(v);
    }
}

#[test]
fn load_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("sniper.toml");
    fs::write(
        &p,
        r#"
sources = ["https://example.com/README.md", " https://example.com/README.md "]
keywords = ["Freshman", "Sophomore"]
block_keywords = ["Closed"]
history_path = "state/seen.txt"
notify_when_empty = false
history_policy = "always"
fetch_timeout_secs = 20
"#,
    )
    .unwrap();

    let cfg = SniperConfig::load_from(&p).unwrap();
    assert_eq!(cfg.sources, vec!["https://example.com/README.md".to_string()]);
    assert_eq!(cfg.keywords, vec!["Freshman".to_string(), "Sophomore".into()]);
    assert_eq!(cfg.block_keywords, vec!["Closed".to_string()]);
    assert_eq!(cfg.history_path, PathBuf::from("state/seen.txt"));
    assert!(!cfg.notify_when_empty);
    assert_eq!(cfg.history_policy, HistoryPolicy::Always);
    assert_eq!(cfg.fetch_timeout_secs, Some(20));
    assert!(cfg.delivery.is_none());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("sniper.toml");
    fs::write(&p, "keywords = \"not a list\"").unwrap();
    assert!(SniperConfig::load_from(&p).is_err());
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Run in a scratch CWD so the repo's own config/ is not picked up.
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    // 1) Nothing on disk -> built-in defaults, no delivery
    let cfg = SniperConfig::load_default().unwrap();
    assert_eq!(cfg.sources.len(), 3);
    assert!(cfg.keywords.iter().any(|k| k == "Freshman"));
    assert!(cfg.delivery.is_none());

    // 2) Fallback config/sniper.toml
    fs::create_dir_all(tmp.path().join("config")).unwrap();
    fs::write(
        tmp.path().join("config/sniper.toml"),
        r#"keywords = ["Sophomore"]"#,
    )
    .unwrap();
    let cfg = SniperConfig::load_default().unwrap();
    assert_eq!(cfg.keywords, vec!["Sophomore".to_string()]);

    // 3) Env path wins; a dangling one is an error
    let p_env = tmp.path().join("other.toml");
    fs::write(&p_env, r#"keywords = ["Quant"]"#).unwrap();
    env::set_var("SNIPER_CONFIG_PATH", p_env.display().to_string());
    let cfg = SniperConfig::load_default().unwrap();
    assert_eq!(cfg.keywords, vec!["Quant".to_string()]);

    env::set_var("SNIPER_CONFIG_PATH", tmp.path().join("missing.toml"));
    assert!(SniperConfig::load_default().is_err());

    clear_env();
    env::set_current_dir(&old).unwrap();
}

#[serial_test::serial]
#[test]
fn credentials_come_from_env() {
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    clear_env();

    env::set_var("EMAIL_SENDER", "bot@example.com");
    env::set_var("EMAIL_PASSWORD", "app-password");
    env::set_var("EMAIL_RECEIVER", "student@example.com");
    let creds = SniperConfig::load_default().unwrap().delivery.unwrap();
    assert_eq!(creds.sender, "bot@example.com");
    assert_eq!(creds.receiver, "student@example.com");

    env::remove_var("EMAIL_PASSWORD");
    assert!(SniperConfig::load_default().unwrap().delivery.is_none());

    clear_env();
    env::set_current_dir(&old).unwrap();
}
