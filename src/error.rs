use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `idbctl`.
///
/// Each layer defines its own error type. The entry point matches on these to
/// pick a process exit code; everything below it just propagates with `?`.
#[derive(Debug, Error)]
pub enum IdbError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Command ─────────────────────────────────────────────────────────
    #[error(transparent)]
    Command(#[from] CommandError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IdbError {
    /// Process exit status for this failure (sysexits-style for client faults).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => exit_code::CONFIG,
            Self::Command(err) => err.exit_code(),
            Self::Other(_) => exit_code::SOFTWARE,
        }
    }
}

impl From<ClientError> for IdbError {
    fn from(err: ClientError) -> Self {
        Self::Command(CommandError::Client(err))
    }
}

/// Exit statuses used by the binary.
pub mod exit_code {
    /// `url` requested without `--scheme`.
    pub const MISSING_SCHEME: u8 = 1;
    pub const NO_DEVICE: u8 = 68;
    pub const UNAVAILABLE: u8 = 69;
    pub const SOFTWARE: u8 = 70;
    pub const IO: u8 = 74;
    pub const TEMP_FAIL: u8 = 75;
    pub const CONFIG: u8 = 78;
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unknown client backend \"{0}\". Valid: simctl, dry-run")]
    UnknownBackend(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Command errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("You need to specify --scheme when approving url permissions")]
    MissingScheme,

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CommandError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingScheme => exit_code::MISSING_SCHEME,
            Self::Client(err) => err.exit_code(),
        }
    }
}

// ─── Device control client errors ────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("{command} timed out after {}s", .timeout.as_secs())]
    Timeout { command: String, timeout: Duration },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("device {udid} not found: {reason}")]
    DeviceNotFound { udid: String, reason: String },

    #[error("TCC database not found at {}", .path.display())]
    TccDatabaseMissing { path: PathBuf },

    #[error("TCC database {}: {source}", .path.display())]
    TccDatabase {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },
}

impl ClientError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Spawn { .. } => exit_code::UNAVAILABLE,
            Self::CommandFailed { .. } | Self::InvalidRequest(_) => exit_code::SOFTWARE,
            Self::Timeout { .. } => exit_code::TEMP_FAIL,
            Self::DeviceNotFound { .. } | Self::TccDatabaseMissing { .. } => exit_code::NO_DEVICE,
            Self::TccDatabase { .. } => exit_code::IO,
        }
    }
}
