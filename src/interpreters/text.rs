//! Title and body text.
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::trace_log;
use crate::AttrMap;

use super::Interpreter;

static LINE_FEEDS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r]+").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse the whitespace of extracted text.
///
/// Runs of line feeds become a single `\n` first, then every run of whitespace (including those
/// newlines) becomes a single space, and the ends are trimmed. The result is a single line.
/// Normalizing twice yields the same string as normalizing once.
pub fn normalize_text(text: &str) -> String {
    let text = LINE_FEEDS_RE.replace_all(text, "\n");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_owned()
}

/// Extracts the page title and the text content of the body, minus scripts.
#[derive(Debug, Default)]
pub struct TextInterpreter {
    in_title: bool,
    in_body: bool,
    in_script: bool,
    title: String,
    buf: String,
    text: String,
}

impl TextInterpreter {
    /// The text of the last title text node seen so far.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The normalized body text. Empty until [Interpreter::finish] has been called.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the interpreter, returning `(title, text)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.text)
    }

    fn set_region(&mut self, tag_name: &str, inside: bool) {
        match tag_name {
            "title" => self.in_title = inside,
            "body" => self.in_body = inside,
            "script" => self.in_script = inside,
            _ => (),
        }
    }
}

impl Interpreter for TextInterpreter {
    fn handle_start(&mut self, tag_name: &str, _attrs: &AttrMap) {
        self.set_region(tag_name, true);
    }

    fn handle_end(&mut self, tag_name: &str) {
        self.set_region(tag_name, false);
    }

    fn handle_text(&mut self, text: &[u8]) {
        if self.in_title {
            self.title = String::from_utf8_lossy(text).into_owned();
            trace_log!("text: title = {:?}", self.title);
        } else if self.in_body && !self.in_script {
            self.buf.push_str(&String::from_utf8_lossy(text));
        }
    }

    fn finish(&mut self) {
        self.text = normalize_text(&self.buf);
        self.buf.clear();
    }
}
