//! Fan-out of one event stream to several interpreters.
use crate::AttrMap;

use super::Interpreter;

/// An [Interpreter] that forwards every event to a list of interpreters.
///
/// Events reach the interpreters strictly in the order they were pushed, and every interpreter
/// sees every event. [crate::Page] relies on this to register the title/text interpreter first.
#[derive(Default)]
pub struct Dispatcher<'a> {
    interpreters: Vec<&'a mut dyn Interpreter>,
}

impl<'a> Dispatcher<'a> {
    /// An empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Dispatcher::default()
    }

    /// Register `interpreter` after the ones already present.
    pub fn push(&mut self, interpreter: &'a mut dyn Interpreter) {
        self.interpreters.push(interpreter);
    }

    /// Number of registered interpreters.
    pub fn len(&self) -> usize {
        self.interpreters.len()
    }

    /// Whether no interpreter is registered.
    pub fn is_empty(&self) -> bool {
        self.interpreters.is_empty()
    }
}

impl<'a> FromIterator<&'a mut dyn Interpreter> for Dispatcher<'a> {
    fn from_iter<T: IntoIterator<Item = &'a mut dyn Interpreter>>(iter: T) -> Self {
        Dispatcher {
            interpreters: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<&'a mut dyn Interpreter> for Dispatcher<'a> {
    fn extend<T: IntoIterator<Item = &'a mut dyn Interpreter>>(&mut self, iter: T) {
        self.interpreters.extend(iter);
    }
}

impl Interpreter for Dispatcher<'_> {
    fn handle_start(&mut self, tag_name: &str, attrs: &AttrMap) {
        for interpreter in &mut self.interpreters {
            interpreter.handle_start(tag_name, attrs);
        }
    }

    fn handle_end(&mut self, tag_name: &str) {
        for interpreter in &mut self.interpreters {
            interpreter.handle_end(tag_name);
        }
    }

    fn handle_text(&mut self, text: &[u8]) {
        for interpreter in &mut self.interpreters {
            interpreter.handle_text(text);
        }
    }

    fn finish(&mut self) {
        for interpreter in &mut self.interpreters {
            interpreter.finish();
        }
    }
}

impl std::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("interpreters", &self.interpreters.len())
            .finish()
    }
}
