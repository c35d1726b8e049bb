//! The chain-walking print driver.

use causetrace_error::{Cause, Error, Printer};

use crate::printers::{DetailPrinter, ShortPrinter};

/// Walk state. The walk ends `Stopped` (printer declined to descend)
/// or `Done` (chain exhausted, or a plain cause printed its short
/// form).
enum State {
    Continuing,
    Stopped,
    Done,
}

/// Drive `printer` over the cause chain starting at `top`.
///
/// Each detailed node contributes exactly one `format_error` step; a
/// plain cause contributes its short rendering and ends the walk.
/// After any node, a printer answering `detail() == false` moves the
/// driver to `Stopped`: it appends `": "` plus the short rendering of
/// whatever remains, so the output is still the complete joined
/// message even though no further node was visited.
pub fn drive(top: &Error, printer: &mut dyn Printer) {
    let mut next = top.format_error(printer);
    let mut state = if printer.detail() {
        State::Continuing
    } else {
        State::Stopped
    };

    loop {
        match state {
            State::Continuing => match next {
                None => state = State::Done,
                Some(Cause::Detailed(err)) => {
                    next = err.format_error(printer);
                    if !printer.detail() {
                        state = State::Stopped;
                    }
                }
                Some(Cause::Plain(err)) => {
                    printer.print(&format!("{:#}", err));
                    state = State::Done;
                }
            },
            State::Stopped => {
                if let Some(rest) = next {
                    printer.print(&format!(": {}", rest));
                }
                return;
            }
            State::Done => return,
        }
    }
}

/// Render the full multi-line report for `err`.
pub fn render_detail(err: &Error) -> String {
    let mut printer = DetailPrinter::new();
    drive(err, &mut printer);
    printer.into_string()
}

/// Render the single-line joined message through the printer protocol.
///
/// Equivalent to `err.to_string()`, but exercises the same
/// `format_error` contract the detailed mode uses while decoding no
/// frames.
pub fn render_short(err: &Error) -> String {
    let mut printer = ShortPrinter::new();
    drive(err, &mut printer);
    printer.into_string()
}
