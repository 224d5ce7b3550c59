//! Exit code definitions for the s3policy CLI
//!
//! Scripts only need to distinguish success from failure, so every error,
//! including argument errors and panics, exits with the same code.

/// Exit codes for the s3policy CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// Configuration, argument or operation failure
    GeneralError = 1,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get a human-readable description of the exit code
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "Operation completed successfully",
            Self::GeneralError => "Operation failed",
        }
    }
}

impl From<&s3policy_core::Error> for ExitCode {
    fn from(_: &s3policy_core::Error) -> Self {
        Self::GeneralError
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}
