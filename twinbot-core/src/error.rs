//! Error taxonomy for the bot.
//!
//! `Config` and `Fetch` are startup errors: the process must refuse to serve
//! without a loaded CV. `Classification` and `Generation` are per-message errors
//! recovered by the response policy via the fallback path. `Delivery` is logged
//! by callers and never retried here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwinError {
    /// No CV source configured; fatal at startup.
    #[error("Config error: {0}")]
    Config(String),

    /// CV source configured but unreachable or unreadable; fatal at startup.
    #[error("CV fetch error: {0}")]
    Fetch(String),

    /// Topic classifier call failed; recovered via fallback.
    #[error("Classification error: {0}")]
    Classification(String),

    /// Main responder call failed; recovered via fallback.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Outbound transport send failed; logged, not retried.
    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TwinError>;
