//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `ScanError`, so functions can simply return `Result<T>`.
use crate::error::ScanError;

/// Workspace-wide `Result` alias with `ScanError` as the default error.
pub type Result<T, E = ScanError> = std::result::Result<T, E>;
