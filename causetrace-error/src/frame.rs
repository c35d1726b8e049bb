//! Call-stack snapshots captured at error construction time.

use std::fmt;
use std::os::raw::c_void;

/// Number of instruction pointers a [`Frame`] can hold.
///
/// The buffer is a fixed-size array so capture stays allocation-free;
/// three entries are enough to show the construction site and its
/// immediate callers.
pub const FRAME_CAPACITY: usize = 3;

/// A bounded snapshot of stack locations.
///
/// Holds raw instruction pointers only. Turning them into function,
/// file and line happens in [`Frame::symbolize`], so an error that is
/// never printed in detail never pays for symbol resolution.
#[derive(Clone, Copy)]
pub struct Frame {
    ips: [usize; FRAME_CAPACITY],
    len: usize,
}

impl Frame {
    /// Capture up to [`FRAME_CAPACITY`] frames, omitting the innermost
    /// `skip` stack levels so the recorded frames start at the caller
    /// of the logical constructor.
    ///
    /// An empty capture (stack shallower than `skip`) is valid; it
    /// renders as "no frame information" rather than failing.
    pub fn capture(skip: usize) -> Self {
        let mut ips = [0usize; FRAME_CAPACITY];
        let mut len = 0;
        let mut skipped = 0;
        backtrace::trace(|frame| {
            if skipped < skip {
                skipped += 1;
                return true;
            }
            ips[len] = frame.ip() as usize;
            len += 1;
            len < FRAME_CAPACITY
        });
        Frame { ips, len }
    }

    /// Number of valid entries actually filled.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the capture recorded nothing.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Decode the valid entries to function/file/line, best effort.
    ///
    /// Entries the resolver cannot symbolize come back with the
    /// "unknown" placeholder instead of aborting the render. Entries
    /// beyond [`Frame::len`] are never decoded.
    pub fn symbolize(&self) -> Vec<FrameSymbol> {
        self.ips[..self.len]
            .iter()
            .map(|&ip| FrameSymbol::resolve(ip))
            .collect()
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame").field("len", &self.len).finish()
    }
}

/// A decoded stack location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSymbol {
    /// Resolved function name, or `"unknown"`
    pub function: String,
    /// Source file, when debug info is available
    pub file: Option<String>,
    /// Line number, when debug info is available
    pub line: Option<u32>,
}

impl FrameSymbol {
    fn resolve(ip: usize) -> Self {
        let mut resolved = None;
        backtrace::resolve(ip as *mut c_void, |symbol| {
            // First symbol wins; inlined callees are noise here.
            if resolved.is_some() {
                return;
            }
            resolved = Some(FrameSymbol {
                function: symbol
                    .name()
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                file: symbol.filename().map(|path| path.display().to_string()),
                line: symbol.lineno(),
            });
        });
        resolved.unwrap_or_else(|| FrameSymbol {
            function: "unknown".to_string(),
            file: None,
            line: None,
        })
    }
}

impl fmt::Display for FrameSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "at {} ({}:{})", self.function, file, line),
            (Some(file), None) => write!(f, "at {} ({})", self.function, file),
            _ => write!(f, "at {}", self.function),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_respects_capacity() {
        let frame = Frame::capture(0);
        assert!(frame.len() <= FRAME_CAPACITY);
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_oversized_skip_yields_empty_capture() {
        let frame = Frame::capture(10_000);
        assert_eq!(frame.len(), 0);
        assert!(frame.is_empty());
    }

    #[test]
    fn test_symbolize_empty_capture() {
        let frame = Frame::capture(10_000);
        assert!(frame.symbolize().is_empty());
    }

    #[test]
    fn test_symbolize_one_entry_per_frame() {
        let frame = Frame::capture(0);
        let symbols = frame.symbolize();
        assert_eq!(symbols.len(), frame.len());
        for symbol in &symbols {
            // Resolution may fail, but the placeholder still renders.
            assert!(!symbol.function.is_empty());
        }
    }

    #[test]
    fn test_symbol_display_without_file_info() {
        let symbol = FrameSymbol {
            function: "unknown".to_string(),
            file: None,
            line: None,
        };
        assert_eq!(symbol.to_string(), "at unknown");
    }
}
