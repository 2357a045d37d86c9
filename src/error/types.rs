//! Error types
//!
//! Defines domain-specific error types for each module of the sandbox.

use std::fmt;
use std::io;

/// Path normalization errors
///
/// Every variant is treated by the policy as a denial, never surfaced to
/// scripts as a fault.
#[derive(Debug)]
pub enum PathError {
    /// Input cannot be made absolute: empty, embedded NUL, or no component
    /// of it resolves on the filesystem.
    Malformed(String),
    /// A `..` component would traverse a directory that does not exist, so
    /// the result cannot be resolved against the real filesystem.
    Traversal(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Malformed(msg) => write!(f, "Malformed path: {}", msg),
            PathError::Traversal(p) => {
                write!(f, "Parent traversal through missing directory: {}", p)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Registry module errors
#[derive(Debug)]
pub enum RegistryError {
    DuplicateMod(String),
    InvalidModName(String),
    IoError(io::Error),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateMod(name) => {
                write!(f, "Mod already registered: {}", name)
            }
            RegistryError::InvalidModName(name) => write!(f, "Invalid mod name: {}", name),
            RegistryError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<io::Error> for RegistryError {
    fn from(error: io::Error) -> Self {
        RegistryError::IoError(error)
    }
}

/// Script-visible errors raised by the guarded filesystem operations.
///
/// `PermissionDenied` renders as a constant string: scripts learn neither
/// the attempted absolute path nor why the request was refused.
#[derive(Debug)]
pub enum GuardError {
    PermissionDenied,
    IoError(io::Error),
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::PermissionDenied => write!(f, "permission denied"),
            GuardError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GuardError {}

impl From<io::Error> for GuardError {
    fn from(error: io::Error) -> Self {
        GuardError::IoError(error)
    }
}

/// General sandbox error that encompasses all error types
#[derive(Debug)]
pub enum SandboxError {
    Path(PathError),
    Registry(RegistryError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::Path(e) => write!(f, "Path error: {}", e),
            SandboxError::Registry(e) => write!(f, "Registry error: {}", e),
            SandboxError::Config(e) => write!(f, "Configuration error: {}", e),
            SandboxError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SandboxError {}

impl From<PathError> for SandboxError {
    fn from(error: PathError) -> Self {
        SandboxError::Path(error)
    }
}

impl From<RegistryError> for SandboxError {
    fn from(error: RegistryError) -> Self {
        SandboxError::Registry(error)
    }
}

impl From<config::ConfigError> for SandboxError {
    fn from(error: config::ConfigError) -> Self {
        SandboxError::Config(error)
    }
}

impl From<io::Error> for SandboxError {
    fn from(error: io::Error) -> Self {
        SandboxError::IoError(error)
    }
}
