use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, warn};

/// Everything that can go wrong while checking a router list.
///
/// None of these abort a run. IO failures degrade the input to whatever was
/// read before the failure; the rest become diagnostic lines in the report.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Unable to read router list '{}': {}", .path.display(), .source)]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ERROR: Indefinite answer. Check if the server with host name ''{hostname}'' on IP Address ''{ip_address}'' has already been patched.")]
    IndefinitePatchStatus {
        hostname: String,
        ip_address: String,
    },

    #[error("The server with host name ''{hostname}'' on IP Address ''{ip_address}'' does not have a valid OS version.\nIf the OS version is less than {minimum}, it should not be patched.")]
    InvalidOsVersion {
        hostname: String,
        ip_address: String,
        minimum: f64,
    },

    #[error("ERROR: Row {line} has {fields} field(s); expected 4 or 5.")]
    MalformedRow { line: usize, fields: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Recoverable, // record-level problems reported inline
    Degraded,    // input could not be fully read
}

impl CheckError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CheckError::IoUnavailable { .. } => ErrorSeverity::Degraded,
            _ => ErrorSeverity::Recoverable,
        }
    }

    pub fn log(&self) {
        match self.severity() {
            ErrorSeverity::Degraded => error!("{}", self),
            ErrorSeverity::Recoverable => warn!("{}", self),
        }
    }

    /// Text placed in the report ahead of the eligible routers.
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }
}
