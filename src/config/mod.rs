// src/config/mod.rs
pub mod sniper;

pub use sniper::{DeliveryCredentials, HistoryPolicy, SmtpSettings, SniperConfig};
