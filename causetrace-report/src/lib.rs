//! # causetrace-report
//!
//! Rendering for causetrace errors: concrete printers plus the driver
//! that walks a cause chain through the `format_error` contract.
//!
//! The crate also hosts [`wrap`], the wrapping constructor that goes
//! through the process-wide hook owned by `causetrace-error`, so the
//! captured frame skips the bridging call and still starts at the
//! caller.
//!
//! ## Usage
//!
//! ```rust
//! use causetrace_error::Error;
//! use causetrace_report::{render_detail, render_short, wrap};
//!
//! causetrace_report::init();
//!
//! let err = wrap("load config", Error::new("missing file"));
//! assert_eq!(render_short(&err), "load config: missing file");
//!
//! let report = render_detail(&err);
//! assert_eq!(report.lines().next(), Some("load config"));
//! ```

mod driver;
mod printers;
mod wrap;

pub use driver::{drive, render_detail, render_short};
pub use printers::{DetailPrinter, ShortPrinter};
pub use wrap::wrap;

// Re-exported so consumers can initialize the hook without naming the
// lower crate.
pub use causetrace_error::init;
