//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (SkelError) for the entire application
//! - Structured error variants with context for better debugging
//! - No panic/unwrap - all errors are recoverable or surface at the CLI

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },
}

pub type Result<T> = std::result::Result<T, SkelError>;
