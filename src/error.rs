//! Error types for chat-transcript.
//!
//! Two layers of errors exist:
//! - [`FetchError`] is what a [`ChannelSource`](crate::source::ChannelSource)
//!   reports when a remote lookup fails. The renderer classifies it as either
//!   a soft failure (render a fallback) or a hard failure (abort the export).
//! - [`TranscriptError`] is the error returned to callers of the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by the external message/member/channel collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The requested resource does not exist (deleted or never existed).
    #[error("{resource} {id} not found")]
    NotFound {
        /// Kind of resource ("message", "channel", ...).
        resource: String,
        /// Identifier that was looked up.
        id: String,
    },

    /// The collaborator lacks permission to read the resource.
    #[error("access to {resource} {id} is forbidden")]
    Forbidden {
        /// Kind of resource.
        resource: String,
        /// Identifier that was looked up.
        id: String,
    },

    /// A transport-level failure with an HTTP status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response message.
        message: String,
    },

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Create a not-found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Whether this failure means the resource no longer exists.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Primary error type for transcript rendering.
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// A member required by a member-added/removed notice could not be fetched.
    #[error("Member {user_id} required by message {message_id} could not be fetched")]
    MemberNotFound {
        /// User whose membership was looked up.
        user_id: String,
        /// Message that needed the member.
        message_id: String,
    },

    /// A member notice carried no mentioned user.
    #[error("Message {message_id} is a member notice without a mentioned user")]
    MissingMention {
        /// Offending message.
        message_id: String,
    },

    /// Fetching a message failed in a way that cannot be rendered around.
    #[error("Failed to fetch message {message_id} in channel {channel_id}")]
    MessageFetch {
        /// Channel the message was requested from.
        channel_id: String,
        /// Requested message.
        message_id: String,
        /// Collaborator error.
        #[source]
        source: FetchError,
    },

    /// Fetching a channel failed.
    #[error("Failed to fetch channel {channel_id}")]
    ChannelFetch {
        /// Requested channel.
        channel_id: String,
        /// Collaborator error.
        #[source]
        source: FetchError,
    },

    /// Timezone name is not a known IANA zone.
    #[error("Unknown timezone: {name}")]
    InvalidTimezone {
        /// The rejected zone name.
        name: String,
    },

    /// Timestamp could not be parsed.
    #[error("Invalid timestamp '{value}'")]
    InvalidTimestamp {
        /// The rejected value.
        value: String,
    },

    /// Archive or input JSON could not be parsed.
    #[error("Failed to parse {context}: {message}")]
    ParseError {
        /// What was being parsed.
        context: String,
        /// Human-readable error message.
        message: String,
        /// Underlying serde_json error, if available.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// I/O error.
    #[error("I/O error: {context}")]
    IoError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {context}")]
    SerializationError {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Human-readable error message.
        message: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },

    /// Invalid argument.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the invalid argument.
        name: String,
        /// Reason why the argument is invalid.
        reason: String,
    },

    /// Unsupported operation or feature.
    #[error("Unsupported: {feature}")]
    Unsupported {
        /// Name of the unsupported feature.
        feature: String,
    },
}

impl TranscriptError {
    /// Create a new parse error with source.
    #[must_use]
    pub fn parse_with_source(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ParseError {
            context: context.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            context: context.into(),
            source,
        }
    }

    /// Create a new invalid argument error.
    #[must_use]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ParseError { .. } | Self::InvalidTimestamp { .. } => exit_codes::EXIT_DATA_ERROR,
            Self::FileNotFound { .. } => exit_codes::EXIT_FILE_NOT_FOUND,
            Self::ConfigError { .. } | Self::InvalidConfig { .. } | Self::InvalidTimezone { .. } => {
                exit_codes::EXIT_CONFIG_ERROR
            }
            Self::MemberNotFound { .. }
            | Self::MissingMention { .. }
            | Self::MessageFetch { .. }
            | Self::ChannelFetch { .. } => exit_codes::EXIT_RENDER_ERROR,
            Self::InvalidArgument { .. } => exit_codes::EXIT_USAGE_ERROR,
            Self::IoError { .. } => exit_codes::EXIT_IO_ERROR,
            _ => exit_codes::EXIT_GENERAL_ERROR,
        }
    }

    /// Check if retrying the export could succeed.
    ///
    /// Collaborator failures other than "not found" are transient from the
    /// renderer's point of view; retry policy itself belongs to the caller.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::MessageFetch { source, .. } | Self::ChannelFetch { source, .. } => {
                !source.is_not_found()
            }
            _ => false,
        }
    }
}

/// Result type alias for chat-transcript operations.
pub type Result<T> = std::result::Result<T, TranscriptError>;

impl From<std::io::Error> for TranscriptError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TranscriptError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}

/// Exit codes for CLI operations.
pub mod exit_codes {
    /// Operation completed successfully.
    pub const EXIT_SUCCESS: i32 = 0;
    /// General/unspecified error.
    pub const EXIT_GENERAL_ERROR: i32 = 1;
    /// Input file not found.
    pub const EXIT_FILE_NOT_FOUND: i32 = 3;
    /// Invalid configuration.
    pub const EXIT_CONFIG_ERROR: i32 = 5;
    /// Rendering aborted on a hard failure.
    pub const EXIT_RENDER_ERROR: i32 = 6;
    /// Invalid command-line usage (BSD standard).
    pub const EXIT_USAGE_ERROR: i32 = 64;
    /// Input data format error (BSD standard).
    pub const EXIT_DATA_ERROR: i32 = 65;
    /// I/O error (BSD standard).
    pub const EXIT_IO_ERROR: i32 = 74;
}
