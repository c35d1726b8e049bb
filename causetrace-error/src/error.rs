//! The chain-forming error value.

use crate::frame::Frame;
use crate::printer::Printer;
use std::fmt;

/// Capture skip for the direct constructor: omit `Frame::capture` and
/// `Error::new` so the recorded frames start at the caller.
pub(crate) const DIRECT_SKIP: usize = 2;

/// Capture skip for the hook-installed constructor: one more level to
/// omit the bridging call as well.
pub(crate) const EXTRA_DEPTH_SKIP: usize = 3;

/// One link of a cause chain.
///
/// Carries a message, an optional wrapped cause, and a [`Frame`]
/// captured at the construction site. Built once, immutable afterwards,
/// and the exclusive owner of its cause, so chains are finite
/// singly-linked lists by construction.
///
/// # Example
///
/// ```rust
/// use causetrace_error::Error;
///
/// let root = Error::new("connection refused");
/// assert_eq!(root.to_string(), "connection refused");
/// assert!(root.cause().is_none());
/// ```
pub struct Error {
    message: String,
    cause: Option<Cause>,
    frame: Frame,
}

/// What an [`Error`] wraps.
///
/// `Detailed` causes support the frame-printing format contract;
/// `Plain` causes are foreign errors that only have a short rendering.
/// The report driver checks the variant per node, so chains may mix
/// both freely.
pub enum Cause {
    /// A cause that supports detailed formatting
    Detailed(Box<Error>),
    /// A foreign error wrapped without leaking its concrete type
    Plain(anyhow::Error),
}

impl Error {
    /// Create a new error with the given message, capturing the
    /// caller's stack location.
    pub fn new(message: impl Into<String>) -> Self {
        // Capture here, not in a helper: the skip depth counts the
        // capture routine and this constructor, nothing else.
        Self::with_frame(message.into(), None, Frame::capture(DIRECT_SKIP))
    }

    pub(crate) fn with_frame(message: String, cause: Option<Cause>, frame: Frame) -> Self {
        Error {
            message,
            cause,
            frame,
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the wrapped cause (if any)
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Get the frame captured at construction
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Detailed-format contract: write this node into `printer` and
    /// hand the cause back as "next" for the driver to continue with.
    ///
    /// The frame is skipped entirely when the capture was empty. The
    /// node itself never recurses; walking the chain belongs to the
    /// report driver, so chains can mix detailed and plain links.
    pub fn format_error(&self, printer: &mut dyn Printer) -> Option<&Cause> {
        printer.print(&self.message);
        if !self.frame.is_empty() {
            printer.print_frame(&self.frame);
        }
        self.cause.as_ref()
    }
}

impl Cause {
    /// Wrap a foreign error that has no detailed-format support.
    pub fn plain<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Cause::Plain(err.into())
    }
}

impl From<Error> for Cause {
    fn from(err: Error) -> Self {
        Cause::Detailed(Box::new(err))
    }
}

impl From<anyhow::Error> for Cause {
    fn from(err: anyhow::Error) -> Self {
        Cause::Plain(err)
    }
}

// =============================================================================
// Display - the short, single-line rendering
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Detailed(err) => write!(f, "{}", err),
            // Alternate form joins anyhow's own source chain.
            Cause::Plain(err) => write!(f, "{:#}", err),
        }
    }
}

// =============================================================================
// Debug - compact; the full report lives behind the Printer protocol
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .field("frame", &self.frame)
            .finish()
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Detailed(err) => fmt::Debug::fmt(err, f),
            Cause::Plain(err) => write!(f, "Plain({})", err),
        }
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.cause {
            Some(Cause::Detailed(err)) => Some(err.as_ref()),
            Some(Cause::Plain(err)) => {
                Some(err.as_ref() as &(dyn std::error::Error + 'static))
            }
            None => None,
        }
    }
}
