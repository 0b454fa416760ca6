//! Error types for the Marquee booking directory.
//!
//! This crate provides the foundation error types used throughout the
//! Marquee workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Wrapped errors use `#[track_caller]` for automatic location capture
//!
//! The one exception is [`ValidationError`], which accumulates per-field
//! messages for re-rendering a rejected form rather than pointing at a
//! source location.
//!
//! # Examples
//!
//! ```
//! use marquee_error::{MarqueeResult, ServerError, ServerErrorKind};
//!
//! fn read_port() -> MarqueeResult<u16> {
//!     Err(ServerError::new(ServerErrorKind::Configuration(
//!         "PORT is not set".to_string(),
//!     )))?
//! }
//!
//! match read_port() {
//!     Ok(port) => println!("Listening on {}", port),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "database")]
mod database;
mod error;
mod server;
mod validation;

#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{MarqueeError, MarqueeErrorKind, MarqueeResult};
pub use server::{ServerError, ServerErrorKind};
pub use validation::{FieldError, ValidationError};
