//! # Output Sinks
//!
//! The engine never builds a tree. It calls into a [`Sink`] as it scans:
//! leaves (headings, rules, images, checkboxes) are emitted whole, regions
//! (paragraphs, links, lists, tables, ...) are *opened* and later *ended*.
//!
//! ## Handles
//!
//! Opening a region returns a [`Handle`]. Passing it to [`Sink::end`] closes
//! that region **and everything opened after it**, innermost first. This
//! lets a handler unwind several levels at once, e.g. a list ending while an
//! item is still open:
//!
//! ```
//! use linemark_engine::{HtmlWriter, ListMode, Sink};
//!
//! let mut w = HtmlWriter::new();
//! let list = w.list(ListMode::Unordered);
//! w.list_item();
//! w.write("item");
//! w.end(list); // closes </li> then </ul>
//! assert_eq!(w.into_string(), "<ul>\n<li>item</li>\n</ul>\n");
//! ```
//!
//! Handles are plain stack depths. A region's handle is lower than any handle
//! issued while it is open, and ending an already closed handle does nothing.
//! The bookkeeping lives in [`CloseStack`], shared by the bundled writers.

mod html;
mod plain;

pub use html::HtmlWriter;
pub use plain::PlainWriter;

/// Opaque token identifying an open region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(usize);

impl Handle {
    /// Below every region; ending it closes everything.
    pub const ROOT: Handle = Handle(0);
    /// Returned by leaves; ending it is a no-op.
    pub const CLOSED: Handle = Handle(usize::MAX);
}

/// Bullet vs numbered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Unordered,
    Ordered,
}

/// Column alignment from a table separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    /// CSS `text-align` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        }
    }
}

/// Alignment and header flag for one table cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub align: Option<Align>,
    pub header: bool,
}

/// Styling for a run of highlighted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style<'a> {
    /// Style class, e.g. `code_key`.
    pub class: &'a str,
    /// Optional explicit color.
    pub color: Option<&'a str>,
}

impl<'a> Style<'a> {
    pub fn class(class: &'a str) -> Self {
        Self { class, color: None }
    }
}

/// Receiver of structural events from the engine.
///
/// Leaf methods return [`Handle::CLOSED`]. Region methods return a handle
/// that must eventually reach [`end`](Sink::end), directly or through an
/// enclosing region's handle, or [`close`](Sink::close).
pub trait Sink {
    fn heading(&mut self, text: &str, level: usize) -> Handle;
    fn horizontal_rule(&mut self) -> Handle;
    fn image(&mut self, url: &str, title: &str, alt: &str) -> Handle;
    fn checkbox(&mut self, checked: bool) -> Handle;

    fn paragraph(&mut self) -> Handle;
    fn link(&mut self, url: &str, title: &str) -> Handle;
    fn strike(&mut self) -> Handle;
    fn strong(&mut self) -> Handle;
    fn emphasis(&mut self) -> Handle;
    fn inline_code(&mut self) -> Handle;
    fn quote_block(&mut self) -> Handle;
    fn list(&mut self, mode: ListMode) -> Handle;
    fn list_item(&mut self) -> Handle;
    fn table(&mut self) -> Handle;
    fn table_row(&mut self) -> Handle;
    fn table_cell(&mut self, style: CellStyle) -> Handle;
    fn code_block(&mut self, language: &str, title: &str) -> Handle;

    /// Writes literal text, escaped for the target format.
    fn write(&mut self, text: &str);
    /// Writes text tagged with a highlighting style.
    fn write_styled(&mut self, text: &str, style: Style<'_>);
    /// Closes `handle` and every region opened after it.
    fn end(&mut self, handle: Handle);
    /// Closes everything still open. Call once at the end of a document.
    fn close(&mut self) {
        self.end(Handle::ROOT);
    }
}

/// Stack of pending close markers for a writer.
#[derive(Debug, Default)]
pub struct CloseStack {
    tags: Vec<String>,
}

impl CloseStack {
    /// Records the text that closes a newly opened region.
    pub fn push(&mut self, close: impl Into<String>) -> Handle {
        self.tags.push(close.into());
        Handle(self.tags.len() - 1)
    }

    /// Pops close markers down to and including `handle`, innermost first,
    /// appending them to `out`.
    pub fn unwind(&mut self, handle: Handle, out: &mut String) {
        while self.tags.len() > handle.0 {
            if let Some(tag) = self.tags.pop() {
                out.push_str(&tag);
            }
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.tags.len()
    }
}
