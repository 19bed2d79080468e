use thiserror::Error;

/// Errors raised while reading session configuration.
///
/// The per-frame simulation has no failure path; only configuration input
/// supplied from outside (URL parameters, embedding pages) can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown control `{0}` (expected turn-left, turn-right, forward, backward or hold)")]
    UnknownControl(String),
    #[error("malformed binding `{0}` (expected control=KeyCode)")]
    MalformedBinding(String),
    #[error("empty key code for control `{0}`")]
    EmptyKey(String),
}
