//! Trait abstraction for URI navigation to enable mocking in tests

use thiserror::Error;

/// Failure to start the handler for a URI
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to open URI with the system handler: {0}")]
    Open(#[source] std::io::Error),
    #[error("failed to run launcher `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Asks the host to open a URI with whatever handler is registered for it
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Start the handler. Success only means the handler was started.
    fn navigate(&mut self, uri: &str) -> Result<(), LaunchError>;
}
