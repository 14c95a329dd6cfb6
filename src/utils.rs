/// Whether `tag_name` is an HTML void element, which has no end tag and no content.
pub(crate) fn is_void_element(tag_name: &str) -> bool {
    matches!(
        tag_name,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Lowercased tag name, borrowed when it is already lowercase.
pub(crate) fn tag_name(raw: &[u8]) -> std::borrow::Cow<'_, str> {
    if raw.iter().any(u8::is_ascii_uppercase) {
        std::borrow::Cow::Owned(String::from_utf8_lossy(raw).to_ascii_lowercase())
    } else {
        String::from_utf8_lossy(raw)
    }
}

// having this be a macro keeps the format!() call (and its allocation) out of release builds
// entirely. rustc does not reliably optimize away code like this:
//
// ```rust
// fn noop(s: &str) {}
//
// noop(&format!("foo"));
// ```
macro_rules! trace_log {
    ($($tt:tt)*) => {{
        #[cfg(debug_assertions)]
        crate::testutils::trace_log(&format!($($tt)*));
    }};
}

pub(crate) use trace_log;
