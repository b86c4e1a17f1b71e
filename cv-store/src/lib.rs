//! # cv-store
//!
//! Loads the CV as plain text from the first available source: inline env text,
//! a local PDF file, or a remote PDF URL. The loaded [`CvDocument`] is built
//! once at startup and immutable thereafter.
//!
//! Error contract: no source configured is a `Config` error; a configured but
//! unreachable/unreadable source is a `Fetch` error and is never silently
//! treated as "no CV".

mod config;
mod document;
mod loader;

pub use config::CvConfig;
pub use document::{CvDocument, CvSource};
pub use loader::{load, FETCH_TIMEOUT};
