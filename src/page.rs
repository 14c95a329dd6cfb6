use std::convert::Infallible;
use std::io;

use html5gum::{DefaultEmitter, IoReader, Token, Tokenizer};
use serde::{Deserialize, Serialize};

use crate::interpreters::meta::{Meta, MetaInterpreter};
use crate::interpreters::microdata::{ItemScope, MicrodataInterpreter};
use crate::interpreters::text::TextInterpreter;
use crate::interpreters::{Dispatcher, Interpreter};
use crate::utils::{tag_name, trace_log};
use crate::{AttrMap, Error};

/// An HTML document together with what was extracted from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    /// The page's URL, when it was fetched from one.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// The page's raw HTML, when it was fetched from a URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub html: String,
    /// The text of the `<title>` element.
    pub title: String,
    /// The text content of the body, without markup and scripts.
    ///
    /// Runs of whitespace are collapsed to a single space.
    pub text: String,
    /// The `meta` tags of the document head.
    pub metadata: Vec<Meta>,
    /// The schema.org items of the document body.
    pub microdata: Vec<ItemScope>,
}

impl Page {
    /// Extract a page from an HTML string.
    ///
    /// ```
    /// let page = metascrape::Page::parse("<title>Hi</title><body><p>Hello <b>world</b></p></body>");
    /// assert_eq!(page.title, "Hi");
    /// assert_eq!(page.text, "Hello world");
    /// ```
    pub fn parse(html: &str) -> Page {
        Page::parse_with(html, &mut [])
    }

    /// Like [Page::parse], but also drive the given interpreters over the same token stream.
    ///
    /// They receive every event after the built-in interpreters have.
    pub fn parse_with(html: &str, extra: &mut [&mut dyn Interpreter]) -> Page {
        let (page, result) = interpret(Tokenizer::new_with_emitter(html, emitter()), extra);
        match result {
            Ok(()) => page,
            Err(never) => match never {},
        }
    }

    /// Extract a page from a reader.
    ///
    /// If the reader fails, the error carries whatever had been extracted before the failure.
    pub fn read<R: io::Read>(reader: R) -> Result<Page, Error> {
        Page::read_with(reader, &mut [])
    }

    /// Like [Page::read], but also drive the given interpreters over the same token stream.
    pub fn read_with<R: io::Read>(
        reader: R,
        extra: &mut [&mut dyn Interpreter],
    ) -> Result<Page, Error> {
        let mut reader = ErrorLatch {
            inner: reader,
            error: None,
        };
        let tokens = Tokenizer::new_with_emitter(IoReader::new(&mut reader), emitter());
        let (page, result) = interpret(tokens, extra);
        match reader.error.map_or(result, Err) {
            Ok(()) => Ok(page),
            Err(source) => Err(Error::Read {
                source,
                partial: Box::new(page),
            }),
        }
    }

    /// The metadata found in the document head.
    pub fn metadata(&self) -> &[Meta] {
        &self.metadata
    }

    /// The schema.org items found in the document body.
    pub fn microdata(&self) -> &[ItemScope] {
        &self.microdata
    }
}

impl std::str::FromStr for Page {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Page::parse(s))
    }
}

/// Turns the first read error into end of input and keeps the error for later.
///
/// html5gum bails out on a reader error without emitting the token it was building, so the
/// text or tag right before the failure would never reach the interpreters.
struct ErrorLatch<R> {
    inner: R,
    error: Option<io::Error>,
}

impl<R: io::Read> io::Read for ErrorLatch<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.error.is_some() {
            return Ok(0);
        }
        loop {
            match self.inner.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    trace_log!("page: read failed, treating as end of input: {}", e);
                    self.error = Some(e);
                    return Ok(0);
                }
                ok => return ok,
            }
        }
    }
}

/// Tokens inside `<title>`, `<script>` and friends are raw text. Without a tree builder the
/// tokenizer has to be told about those by looking at the last start tag.
fn emitter() -> DefaultEmitter {
    let mut emitter = DefaultEmitter::default();
    emitter.naively_switch_states(true);
    emitter
}

/// Drive the built-in interpreters, followed by `extra`, over `tokens` until the stream ends or
/// fails.
///
/// The interpreters are finished either way, so the returned page is complete on success and
/// best-effort on failure.
fn interpret<E>(
    tokens: impl IntoIterator<Item = Result<Token, E>>,
    extra: &mut [&mut dyn Interpreter],
) -> (Page, Result<(), E>) {
    let mut text = TextInterpreter::default();
    let mut meta = MetaInterpreter::default();
    let mut microdata = MicrodataInterpreter::default();

    let result = {
        let mut dispatcher: Dispatcher<'_> = Dispatcher::new();
        dispatcher.push(&mut text);
        dispatcher.push(&mut meta);
        dispatcher.push(&mut microdata);
        dispatcher.extend(extra.iter_mut().map(|i| i as &mut dyn Interpreter));

        let result = dispatch(tokens, &mut dispatcher);
        dispatcher.finish();
        result
    };

    let (title, text) = text.into_parts();
    let page = Page {
        title,
        text,
        metadata: meta.into_items(),
        microdata: microdata.into_items(),
        ..Page::default()
    };
    trace_log!(
        "page: {} meta items, {} item scopes",
        page.metadata.len(),
        page.microdata.len()
    );
    (page, result)
}

fn dispatch<E>(
    tokens: impl IntoIterator<Item = Result<Token, E>>,
    interpreter: &mut impl Interpreter,
) -> Result<(), E> {
    for token in tokens {
        match token? {
            Token::StartTag(tag) => {
                let name = tag_name(&tag.name);
                let attrs = AttrMap::build(
                    !tag.attributes.is_empty(),
                    tag.attributes
                        .iter()
                        .map(|(name, value)| (name.as_slice(), value.as_slice())),
                );
                interpreter.handle_start(&name, &attrs);
                if tag.self_closing {
                    interpreter.handle_end(&name);
                }
            }
            Token::EndTag(tag) => interpreter.handle_end(&tag_name(&tag.name)),
            Token::String(text) => interpreter.handle_text(text.as_slice()),
            Token::Error(error) => log::trace!("recovered from parse error: {:?}", error),
            _ => (),
        }
    }

    Ok(())
}
