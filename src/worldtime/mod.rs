use thiserror::Error;

pub mod client;
pub mod events;
pub mod models;

/// Failures talking to the remote time service.
///
/// The UI never shows these directly; they collapse to one of the two
/// user-facing messages in [`models`] while the detail goes to the log.
#[derive(Debug, Error)]
pub enum WorldTimeError {
    #[error("time service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unparseable timestamp from time service: {0:?}")]
    InvalidTimestamp(String),
}
