//! Schema.org microdata from the document body.
//!
//! See <https://schema.org/docs/gs.html> for the vocabulary.
use serde::{Deserialize, Serialize};

use crate::utils::{is_void_element, trace_log};
use crate::AttrMap;

use super::Interpreter;

/// A schema.org `itemscope`.
///
/// An `ItemScope` may itself be a complex property of its parent scope, in which case
/// `item_prop` names that property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemScope {
    /// The tag name of the element carrying `itemscope`.
    pub tag_name: String,
    /// The `itemtype` attribute.
    pub item_type: String,
    /// The `itemprop` attribute, set when this scope is a property of its parent.
    pub item_prop: String,
    /// Simple properties of this scope, in document order.
    pub props: Vec<ItemProp>,
    /// Nested scopes, in document order.
    pub children: Vec<ItemScope>,
}

/// A simple schema.org `itemprop`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemProp {
    /// The tag name of the element carrying `itemprop`.
    pub tag_name: String,
    /// The `itemprop` attribute.
    pub item_prop: String,
    /// The text content, or the `content` attribute when the element has no text.
    pub content: String,
    /// The `href` attribute, if any.
    pub href: String,
    /// The `datetime` attribute, if any.
    pub date_time: String,
}

/// One open element.
#[derive(Debug)]
struct Frame {
    tag_name: String,
    /// Whether this element opened an [ItemScope] that must be closed with it.
    is_scope: bool,
}

/// Builds the forest of [ItemScope]s found in the body of a document.
///
/// Besides the stack of open scopes, a frame is kept for every open element, marking whether that
/// element is a scope. Scopes are only popped when their own frame is, so any amount of unrelated
/// markup may sit between a scope's start and end tags.
#[derive(Debug, Default)]
pub struct MicrodataInterpreter {
    items: Vec<ItemScope>,
    scopes: Vec<ItemScope>,
    frames: Vec<Frame>,
    inside_prop: bool,
    in_head: bool,
}

impl MicrodataInterpreter {
    /// The top-level scopes closed so far, in document order.
    pub fn items(&self) -> &[ItemScope] {
        &self.items
    }

    /// Consume the interpreter, returning the top-level scopes.
    pub fn into_items(self) -> Vec<ItemScope> {
        self.items
    }

    /// Number of scopes and frames still open, in that order.
    pub fn depth(&self) -> (usize, usize) {
        (self.scopes.len(), self.frames.len())
    }

    fn open_scope(&mut self, tag_name: &str, attrs: &AttrMap) {
        let scope = ItemScope {
            tag_name: tag_name.to_owned(),
            item_type: attrs.get("itemtype").to_owned(),
            item_prop: attrs.get("itemprop").to_owned(),
            ..ItemScope::default()
        };
        trace_log!(
            "microdata: open scope {:?} at depth {}",
            scope.item_type,
            self.scopes.len()
        );
        self.scopes.push(scope);
    }

    fn close_scope(&mut self) {
        let Some(scope) = self.scopes.pop() else {
            return;
        };
        trace_log!("microdata: close scope {:?}", scope.item_type);
        match self.scopes.last_mut() {
            Some(parent) => parent.children.push(scope),
            None => self.items.push(scope),
        }
    }

    fn pop_frame(&mut self) {
        if let Some(frame) = self.frames.pop() {
            if frame.is_scope {
                self.close_scope();
            }
        }
    }
}

impl Interpreter for MicrodataInterpreter {
    fn handle_start(&mut self, tag_name: &str, attrs: &AttrMap) {
        if tag_name == "head" {
            self.in_head = true;
        }
        if self.in_head {
            return;
        }

        let is_scope = attrs.contains("itemscope");
        if is_scope {
            self.open_scope(tag_name, attrs);
        } else if attrs.contains("itemprop") {
            if let Some(scope) = self.scopes.last_mut() {
                scope.props.push(ItemProp {
                    tag_name: tag_name.to_owned(),
                    item_prop: attrs.get("itemprop").to_owned(),
                    content: attrs.get("content").to_owned(),
                    href: attrs.get("href").to_owned(),
                    date_time: attrs.get("datetime").to_owned(),
                });
                // `<meta itemprop=.. content=..>` and friends only have attribute values
                self.inside_prop = !is_void_element(tag_name);
            }
        }

        self.frames.push(Frame {
            tag_name: tag_name.to_owned(),
            is_scope,
        });
    }

    fn handle_end(&mut self, tag_name: &str) {
        if self.in_head {
            if tag_name == "head" {
                self.in_head = false;
            }
            return;
        }

        self.inside_prop = false;

        // Frames are matched by name instead of popping exactly one per end tag. Void elements
        // written without a trailing slash never get an end tag, so the matching frame is not
        // necessarily on top. Stray end tags match nothing and are dropped. On well-formed input
        // this pops the top frame only.
        if let Some(position) = self.frames.iter().rposition(|f| f.tag_name == tag_name) {
            while self.frames.len() > position {
                self.pop_frame();
            }
        } else {
            trace_log!("microdata: stray end tag {:?}", tag_name);
        }
    }

    fn handle_text(&mut self, text: &[u8]) {
        if !self.inside_prop {
            return;
        }
        if let Some(prop) = self.scopes.last_mut().and_then(|s| s.props.last_mut()) {
            prop.content = String::from_utf8_lossy(text).into_owned();
        }
    }

    fn finish(&mut self) {
        // Truncated documents leave elements open; close them so every scope lands in the tree.
        while !self.frames.is_empty() {
            self.pop_frame();
        }
        while !self.scopes.is_empty() {
            self.close_scope();
        }
        self.inside_prop = false;
    }
}
