//! # linemark-engine
//!
//! Line-oriented markdown rendering. Input is read one line at a time and
//! every recognized construct is emitted straight to a [`Sink`]; there is no
//! syntax tree and no grammar, only priority-ordered matchers.
//!
//! ## Module Structure
//!
//! ```text
//! linemark-engine/
//! ├── lib.rs      # This file - convert entry points
//! ├── error.rs    # ConvertError
//! ├── source.rs   # LineSource: lines with one line of pushback
//! ├── matcher.rs  # Matcher, MatcherSet, the standard matchers
//! ├── inline.rs   # Inline spans within one line
//! ├── block/      # Line dispatch and multi-line handlers
//! └── sink/       # Sink trait, HTML and plain-text writers
//! ```
//!
//! ## Quick Start
//!
//! ```
//! let html = linemark_engine::to_html("# hello\n\n*world*").unwrap();
//! assert_eq!(html, "\n<h1>hello</h1>\n<p><em>world</em></p>\n");
//! ```
//!
//! Streaming into any sink:
//!
//! ```
//! use linemark_engine::{PlainWriter, Sink, convert};
//!
//! let mut sink = PlainWriter::new();
//! convert("- one\n- two\n".as_bytes(), &mut sink).unwrap();
//! sink.close();
//! assert_eq!(sink.into_string(), "\n* one\n* two\n");
//! ```

pub mod block;
pub mod error;
pub mod inline;
pub mod matcher;
pub mod sink;
pub mod source;

use std::io::BufRead;

pub use block::{MAX_LIST_DEPTH, RenderContext};
pub use error::ConvertError;
pub use inline::render_inline;
pub use matcher::{BlockKind, InlineKind, Match, Matcher, MatcherSet};
pub use sink::{Align, CellStyle, Handle, HtmlWriter, ListMode, PlainWriter, Sink, Style};
pub use source::LineSource;

/// Renders all of `input` into `sink` with the standard matchers.
///
/// The sink is left open so callers can append to it; call
/// [`Sink::close`] when the document is complete.
pub fn convert<R: BufRead, S: Sink + ?Sized>(input: R, sink: &mut S) -> Result<(), ConvertError> {
    RenderContext::new(MatcherSet::standard(), input, sink).run()
}

/// Renders a complete document held in memory and closes the sink.
pub fn convert_str<S: Sink + ?Sized>(text: &str, sink: &mut S) -> Result<(), ConvertError> {
    convert(text.as_bytes(), sink)?;
    sink.close();
    Ok(())
}

/// Renders `text` to an HTML fragment.
pub fn to_html(text: &str) -> Result<String, ConvertError> {
    let mut writer = HtmlWriter::new();
    convert_str(text, &mut writer)?;
    Ok(writer.into_string())
}

/// Renders `text` to plain text.
pub fn to_plain(text: &str) -> Result<String, ConvertError> {
    let mut writer = PlainWriter::new();
    convert_str(text, &mut writer)?;
    Ok(writer.into_string())
}
