//! Module of helper functions for integration tests.
//!
//! Those tests should only test public API surface in general, with some exceptions as provided by
//! this module.
use std::cell::Cell;

thread_local! {
    /// Buffer of all debugging output logged internally by metascrape.
    pub static OUTPUT: Cell<String> = Cell::default();
}

/// Simple debug logger for tests.
///
/// The fixture harness in `tests/fixtures.rs` cannot capture stdout (it runs on libtest-mimic), so
/// interpreter transitions are written here and dumped when a fixture fails. Every line is also
/// forwarded to the `log` facade at trace level.
pub fn trace_log(msg: &str) {
    log::trace!("{}", msg);

    OUTPUT.with(|cell| {
        let mut buf = cell.take();
        buf.push_str(msg);
        buf.push('\n');

        if buf.len() > 4 * 1024 * 1024 {
            buf.clear();
            buf.push_str("[truncated output]\n");
        }

        cell.set(buf);
    });
}

/// Take everything logged on this thread so far, leaving the buffer empty.
pub fn take_output() -> String {
    OUTPUT.with(Cell::take)
}
