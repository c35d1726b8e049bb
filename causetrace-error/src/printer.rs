//! The capability detailed rendering writes into.

use crate::frame::Frame;

/// Sink for detailed error reports.
///
/// [`Error::format_error`](crate::Error::format_error) writes one
/// node's message and frame into the printer; the report driver then
/// asks [`Printer::detail`] whether to keep walking the cause chain.
/// A printer that answers `false` ends the walk after the current node,
/// which is how the short single-line view reuses the same contract
/// without decoding a single frame.
pub trait Printer {
    /// Write a piece of message text. Called once per chain node.
    fn print(&mut self, text: &str);

    /// Write a captured frame, decoding it to function/file/line.
    fn print_frame(&mut self, frame: &Frame);

    /// Whether the driver should keep descending into causes.
    fn detail(&self) -> bool;
}
