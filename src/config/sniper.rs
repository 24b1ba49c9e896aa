// src/config/sniper.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "SNIPER_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/sniper.toml";
pub const DEFAULT_HISTORY_PATH: &str = "seen_jobs.txt";

pub const ENV_EMAIL_SENDER: &str = "EMAIL_SENDER";
pub const ENV_EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
pub const ENV_EMAIL_RECEIVER: &str = "EMAIL_RECEIVER";

const DEFAULT_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/SimplifyJobs/Summer2026-Internships/dev/README.md",
    "https://raw.githubusercontent.com/codicate/underclassmen-internships/main/README.md",
    "https://raw.githubusercontent.com/northwesternfintech/2026QuantInternships/main/README.md",
];

const DEFAULT_KEYWORDS: &[&str] = &[
    "Freshman",
    "First Year",
    "1st Year",
    "Early",
    "Discovery",
    "Summit",
    "Insight",
    "Explore",
    "2026",
    "Quantitative",
    "Trader",
    "Analyst",
    "Product",
    "Data",
    "Finance",
    "Business",
    "Goldman",
    "Sachs",
    "Morgan",
    "Stanley",
    "Chase",
    "Capital One",
];

// Listing READMEs mark closed applications with a lock.
const DEFAULT_BLOCK_KEYWORDS: &[&str] = &["🔒"];

/// What to do with new entries when delivery did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryPolicy {
    /// Record new entries after every run, whatever the delivery outcome.
    Always,
    /// Record unless delivery failed; failed entries are reported again next run.
    #[default]
    UnlessFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 465,
        }
    }
}

/// Sender identity, secret and recipient. Only ever read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct DeliveryCredentials {
    pub sender: String,
    pub password: String,
    pub receiver: String,
}

// Keep the secret out of logs.
impl std::fmt::Debug for DeliveryCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryCredentials")
            .field("sender", &self.sender)
            .field("password", &"<redacted>")
            .field("receiver", &self.receiver)
            .finish()
    }
}

impl DeliveryCredentials {
    /// `None` when the sender or the password is unset or blank.
    /// A missing receiver falls back to the sender address.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let sender = non_blank(ENV_EMAIL_SENDER)?;
        let password = non_blank(ENV_EMAIL_PASSWORD)?;
        let receiver = non_blank(ENV_EMAIL_RECEIVER).unwrap_or_else(|| sender.clone());

        Some(Self {
            sender,
            password,
            receiver,
        })
    }
}

/// Everything one run needs. Built once at startup and passed down by reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SniperConfig {
    pub sources: Vec<String>,
    pub keywords: Vec<String>,
    pub block_keywords: Vec<String>,
    pub history_path: PathBuf,
    /// Replace `|` with spaces in reported rows.
    pub replace_delimiters: bool,
    /// Send a "nothing new today" mail when a run finds nothing.
    pub notify_when_empty: bool,
    pub history_policy: HistoryPolicy,
    /// Per-request timeout; the HTTP client default applies when unset.
    pub fetch_timeout_secs: Option<u64>,
    pub smtp: SmtpSettings,
    #[serde(skip)]
    pub delivery: Option<DeliveryCredentials>,
}

impl Default for SniperConfig {
    fn default() -> Self {
        Self {
            sources: to_strings(DEFAULT_SOURCES),
            keywords: to_strings(DEFAULT_KEYWORDS),
            block_keywords: to_strings(DEFAULT_BLOCK_KEYWORDS),
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            replace_delimiters: false,
            notify_when_empty: true,
            history_policy: HistoryPolicy::default(),
            fetch_timeout_secs: None,
            smtp: SmtpSettings::default(),
            delivery: None,
        }
    }
}

impl SniperConfig {
    /// Parse a TOML config file. Credentials are not part of the file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $SNIPER_CONFIG_PATH
    /// 2) config/sniper.toml
    /// 3) built-in defaults
    ///
    /// Delivery credentials are then taken from the environment.
    ///
    /// This is the one error that stops the binary: a config file that is
    /// present but unreadable or malformed, or a dangling $SNIPER_CONFIG_PATH.
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            Self::load_from(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_p.exists() {
                Self::load_from(&default_p)?
            } else {
                Self::default()
            }
        };
        cfg.delivery = DeliveryCredentials::from_env();
        Ok(cfg)
    }

    fn parse(s: &str) -> Result<Self> {
        let mut cfg: SniperConfig = toml::from_str(s)?;
        cfg.sources = clean_list(cfg.sources);
        cfg.keywords = clean_list(cfg.keywords);
        cfg.block_keywords = clean_list(cfg.block_keywords);
        Ok(cfg)
    }

    pub fn with_delivery(mut self, delivery: Option<DeliveryCredentials>) -> Self {
        self.delivery = delivery;
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Trim, drop blanks, drop repeats; first occurrence keeps its position.
fn clean_list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for it in items {
        let t = it.trim();
        if !t.is_empty() && !out.iter().any(|o| o == t) {
            out.push(t.to_string());
        }
    }
    out
}
