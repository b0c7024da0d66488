//! Structured logging facility for the token list generator
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Log output always goes to stderr; stdout is reserved for the progress
//! lines printed by the CLI.
//!
//! # Usage
//!
//! ```rust
//! use tokenlist_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile, LOG_FORMAT_ENV};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
