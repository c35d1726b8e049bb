//! # causetrace-error
//!
//! Error values that remember where they were made.
//!
//! ## Design Philosophy
//!
//! - **Message + cause**: every error is one link of a finite chain,
//!   built once and immutable afterwards
//! - **Cheap capture, lazy decode**: a small fixed-size buffer of raw
//!   instruction pointers is filled at construction; symbol resolution
//!   only happens if someone actually prints the detailed report
//! - **Pluggable rendering**: the [`Printer`] capability receives the
//!   message and frames; the chain walk itself lives in the companion
//!   `causetrace-report` crate
//!
//! ## Usage
//!
//! ```rust
//! use causetrace_error::Error;
//!
//! let err = Error::new("disk offline");
//! assert_eq!(err.to_string(), "disk offline");
//! ```
//!
//! ## Principles
//!
//! - Construction never fails; an empty frame capture is valid
//! - Wrapping never mutates the wrapped value
//! - Foreign errors ride along as plain causes without leaking raw types

mod error;
mod frame;
pub mod internal;
mod printer;

pub use error::{Cause, Error};
pub use frame::{Frame, FrameSymbol, FRAME_CAPACITY};
pub use printer::Printer;

/// Result type alias using causetrace Error
pub type Result<T> = std::result::Result<T, Error>;

/// Install the extra-depth constructor into the process-wide hook.
///
/// `causetrace-report`'s wrapping entry point reaches this crate's
/// constructor only through the hook, so call this once during program
/// initialization, before the first wrap. Idempotent: the first
/// installation wins and later calls are no-ops.
pub fn init() {
    internal::install(|message, cause| {
        // The extra skip level omits the bridging call that resolved
        // the hook, so frames still start at its caller.
        Error::with_frame(message, cause, Frame::capture(error::EXTRA_DEPTH_SKIP))
    });
}
