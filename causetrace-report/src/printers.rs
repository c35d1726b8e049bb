//! Concrete printers for the two render modes.

use causetrace_error::{Frame, Printer};
use std::fmt::Write;

/// Accumulates the full multi-line report: every message in the chain,
/// each cause one level deeper, with decoded frame lines under their
/// message.
///
/// Layout:
///
/// ```text
/// outer message
///   at outer_fn (src/main.rs:10)
///   caused by: inner message
///     at inner_fn (src/lib.rs:4)
/// ```
pub struct DetailPrinter {
    out: String,
    nodes: usize,
}

impl DetailPrinter {
    /// Create an empty detail printer
    pub fn new() -> Self {
        DetailPrinter {
            out: String::new(),
            nodes: 0,
        }
    }

    /// The accumulated report
    pub fn into_string(self) -> String {
        self.out
    }

    fn indent(&mut self, levels: usize) {
        for _ in 0..levels {
            self.out.push_str("  ");
        }
    }
}

impl Default for DetailPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer for DetailPrinter {
    fn print(&mut self, text: &str) {
        if self.nodes > 0 {
            self.out.push('\n');
            self.indent(self.nodes);
            self.out.push_str("caused by: ");
        }
        self.out.push_str(text);
        self.nodes += 1;
    }

    fn print_frame(&mut self, frame: &Frame) {
        for symbol in frame.symbolize() {
            self.out.push('\n');
            self.indent(self.nodes);
            let _ = write!(self.out, "{}", symbol);
        }
    }

    fn detail(&self) -> bool {
        true
    }
}

/// Accumulates only message text and always tells the driver to stop
/// descending, so any chain renders as its single joined line without
/// decoding a frame.
pub struct ShortPrinter {
    out: String,
}

impl ShortPrinter {
    /// Create an empty short printer
    pub fn new() -> Self {
        ShortPrinter { out: String::new() }
    }

    /// The accumulated line
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for ShortPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer for ShortPrinter {
    fn print(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn print_frame(&mut self, _frame: &Frame) {}

    fn detail(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_printer_indents_per_level() {
        let mut printer = DetailPrinter::new();
        printer.print("outer");
        printer.print("middle");
        printer.print("inner");
        assert_eq!(
            printer.into_string(),
            "outer\n  caused by: middle\n    caused by: inner"
        );
    }

    #[test]
    fn test_detail_printer_frame_lines_sit_under_message() {
        let mut printer = DetailPrinter::new();
        printer.print("boom");
        let frame = Frame::capture(0);
        printer.print_frame(&frame);
        let out = printer.into_string();
        assert_eq!(out.lines().count(), 1 + frame.len());
        for line in out.lines().skip(1) {
            assert!(line.starts_with("  at "));
        }
    }

    #[test]
    fn test_short_printer_never_descends() {
        let printer = ShortPrinter::new();
        assert!(!printer.detail());
    }

    #[test]
    fn test_short_printer_ignores_frames() {
        let mut printer = ShortPrinter::new();
        printer.print("only");
        printer.print_frame(&Frame::capture(0));
        assert_eq!(printer.into_string(), "only");
    }
}
