//! Structured metadata from the `<meta>` tags of the document head.
use serde::{Deserialize, Serialize};

use crate::utils::trace_log;
use crate::AttrMap;

use super::Interpreter;

/// A `meta` tag in the head of an HTML document.
///
/// Structured properties are written as a run of `meta` tags where the follow-up tags extend the
/// property of the first one with a `:` suffix:
///
/// ```html
/// <meta property="og:image" content="http://example.com/rock.jpg" />
/// <meta property="og:image:width" content="300" />
/// <meta property="og:image:height" content="300" />
/// ```
///
/// The follow-up tags end up in the `extra` list of the first one. This nesting is at most one
/// level deep: entries of `extra` never have an `extra` of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    /// The tag's `property` attribute, if any.
    pub property: String,
    /// The tag's `content` attribute, or its text content.
    pub content: String,
    /// The tag's `name` attribute, if any.
    pub name: String,
    /// Subsequent adjacent tags whose property extends this one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Meta>,
}

impl Meta {
    fn from_attrs(attrs: &AttrMap) -> Self {
        Meta {
            // `property` is not a standard attribute of the meta tag in HTML5, but OpenGraph and
            // friends use it everywhere.
            property: attrs.get("property").to_owned(),
            content: attrs.get("content").to_owned(),
            name: attrs.get("name").to_owned(),
            extra: Vec::new(),
        }
    }

    /// Whether `property` is a structured extension of this tag's property, such as
    /// `og:image:width` for `og:image`.
    fn is_extended_by(&self, property: &str) -> bool {
        !property.is_empty()
            && property
                .strip_prefix(self.property.as_str())
                .is_some_and(|rest| rest.starts_with(':'))
    }
}

/// Which entry the currently open `meta` element was stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenMeta {
    /// The last top-level entry.
    TopLevel,
    /// The last `extra` entry of the last top-level entry.
    Extra,
}

/// Groups the `meta` tags of the document head into [Meta] values.
///
/// `meta` tags outside of `<head>` are not considered.
#[derive(Debug, Default)]
pub struct MetaInterpreter {
    items: Vec<Meta>,
    open: Option<OpenMeta>,
    in_head: bool,
}

impl MetaInterpreter {
    /// The top-level metadata collected so far, in document order.
    pub fn items(&self) -> &[Meta] {
        &self.items
    }

    /// Consume the interpreter, returning the collected metadata.
    pub fn into_items(self) -> Vec<Meta> {
        self.items
    }

    fn open_meta(&mut self, meta: Meta) {
        match self.items.last_mut() {
            Some(previous) if previous.is_extended_by(&meta.property) => {
                trace_log!("meta: {:?} extends {:?}", meta.property, previous.property);
                previous.extra.push(meta);
                self.open = Some(OpenMeta::Extra);
            }
            _ => {
                trace_log!("meta: new item {:?}", meta);
                self.items.push(meta);
                self.open = Some(OpenMeta::TopLevel);
            }
        }
    }

    fn current_mut(&mut self) -> Option<&mut Meta> {
        let last = self.items.last_mut()?;
        match self.open? {
            OpenMeta::TopLevel => Some(last),
            OpenMeta::Extra => last.extra.last_mut(),
        }
    }
}

impl Interpreter for MetaInterpreter {
    fn handle_start(&mut self, tag_name: &str, attrs: &AttrMap) {
        // `meta` is a void element: whatever starts next is not inside it, end tag or not. With a
        // closing `</meta>` or a self-closing slash this changes nothing.
        self.open = None;
        match tag_name {
            "head" => self.in_head = true,
            "meta" if self.in_head => self.open_meta(Meta::from_attrs(attrs)),
            _ => (),
        }
    }

    fn handle_end(&mut self, tag_name: &str) {
        match tag_name {
            "head" => self.in_head = false,
            "meta" => self.open = None,
            _ => (),
        }
    }

    fn handle_text(&mut self, text: &[u8]) {
        // Meta tags are typically self-closing. If the author gave the content as a text node
        // instead of a content attribute, the text is used, but never over an attribute.
        // Indentation after an unclosed `<meta ...>` is not content.
        if !self.in_head || text.iter().all(u8::is_ascii_whitespace) {
            return;
        }
        if let Some(meta) = self.current_mut() {
            if meta.content.is_empty() {
                meta.content = String::from_utf8_lossy(text).into_owned();
            }
        }
    }
}
