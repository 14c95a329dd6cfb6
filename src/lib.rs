#![deny(missing_docs)]
// HTML is untrusted input from the internet.
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod attributes;
mod error;
#[cfg(feature = "fetch")]
mod fetch;
pub mod interpreters;
mod page;
#[doc(hidden)]
pub mod testutils;
mod utils;

pub use attributes::AttrMap;
pub use error::Error;
#[cfg(feature = "fetch")]
pub use fetch::fetch;
pub use interpreters::meta::Meta;
pub use interpreters::microdata::{ItemProp, ItemScope};
pub use interpreters::text::normalize_text;
pub use interpreters::{Dispatcher, Interpreter};
pub use page::Page;
