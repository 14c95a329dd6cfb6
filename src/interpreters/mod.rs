//! [Interpreter] is a "visitor" on the tokenizer's event stream.
//!
//! When metascrape reads a document, [crate::Page] walks the tokens once and forwards every start
//! tag, end tag and text event to a list of interpreters through a [Dispatcher]. Each interpreter
//! keeps its own private state and owns whatever it produces; the page collects the results after
//! [Interpreter::finish] has been called.
//!
//! The following interpreters are built in:
//!
//! * [text::TextInterpreter] collects the title and the visible body text.
//! * [meta::MetaInterpreter] groups the `<meta>` tags of the document head.
//! * [microdata::MicrodataInterpreter] builds the tree of schema.org item scopes in the body.
//!
//! Implement [Interpreter] yourself and pass it to [crate::Page::read_with] to extract something
//! else during the same pass.
pub mod dispatcher;
pub mod meta;
pub mod microdata;
pub mod text;

pub use dispatcher::Dispatcher;

use crate::AttrMap;

/// A lightweight SAX-style handler for the events in a token stream.
///
/// Interpreters are plain state machines: none of these methods can fail.
pub trait Interpreter {
    /// Called for a start tag or a self-closing tag. It is always called before
    /// [Interpreter::handle_end] for the same tag.
    ///
    /// `tag_name` is lowercase.
    fn handle_start(&mut self, tag_name: &str, attrs: &AttrMap);

    /// Called for an end tag, and right after [Interpreter::handle_start] for a self-closing tag.
    fn handle_end(&mut self, tag_name: &str);

    /// Called for a run of character data. The slice is only valid for the duration of the call,
    /// copy it if you need to hang on to it.
    fn handle_text(&mut self, text: &[u8]);

    /// Called once when the token stream ends, successfully or not.
    fn finish(&mut self) {}
}

impl<I: Interpreter + ?Sized> Interpreter for &mut I {
    fn handle_start(&mut self, tag_name: &str, attrs: &AttrMap) {
        (**self).handle_start(tag_name, attrs);
    }

    fn handle_end(&mut self, tag_name: &str) {
        (**self).handle_end(tag_name);
    }

    fn handle_text(&mut self, text: &[u8]) {
        (**self).handle_text(text);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}
