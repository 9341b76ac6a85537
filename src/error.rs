use crate::context::Interrupted;
use std::fmt;
use std::net::SocketAddr;
use thiserror::Error;

/// Result type for notifier operations
pub type Result<T> = std::result::Result<T, NotifierError>;

/// Errors reported by a device protocol client
#[derive(Error, Debug)]
pub enum DeviceError {
    /// I/O error on the underlying transport
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection to the device was closed
    #[error("Connection closed")]
    ConnectionClosed,

    /// The device did not answer in time
    #[error("Request timeout")]
    Timeout,

    /// The device answered with an error
    #[error("Device rejected request: {0}")]
    Rejected(String),

    /// Lookup returned nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other client-specific failure
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Device command that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetVolume,
    QuitApp,
    MediaControl,
    GetStatus,
    LoadMedia,
    Stop,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::SetVolume => "set volume",
            Command::QuitApp => "quit app",
            Command::MediaControl => "open media channel",
            Command::GetStatus => "get media status",
            Command::LoadMedia => "load media",
            Command::Stop => "stop media",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when talking to a receiver
#[derive(Error, Debug)]
pub enum NotifierError {
    /// Host name could not be resolved to any address
    #[error("Failed to resolve {host}: {source}")]
    Resolution {
        host: String,
        #[source]
        source: DeviceError,
    },

    /// Handshake with the device failed
    #[error("Failed to connect to {address}: {source}")]
    Connection {
        address: SocketAddr,
        #[source]
        source: DeviceError,
    },

    /// A device command failed
    #[error("{command} failed: {source}")]
    Command {
        command: Command,
        #[source]
        source: DeviceError,
    },

    /// The session was already closed
    #[error("Session closed")]
    Closed,

    /// The caller's context was cancelled
    #[error("Operation cancelled")]
    Cancelled,

    /// The caller's context deadline passed
    #[error("Deadline exceeded")]
    DeadlineExceeded,
}

impl NotifierError {
    /// The failed command, if this is a command error
    pub fn command(&self) -> Option<Command> {
        match self {
            NotifierError::Command { command, .. } => Some(*command),
            _ => None,
        }
    }
}

impl From<Interrupted> for NotifierError {
    fn from(interrupted: Interrupted) -> Self {
        match interrupted {
            Interrupted::Cancelled => NotifierError::Cancelled,
            Interrupted::DeadlineExceeded => NotifierError::DeadlineExceeded,
        }
    }
}
