//! # Block Rendering
//!
//! A single pass over the input, one line at a time. Each line is offered to
//! the block matchers in priority order; the first hit hands control to that
//! construct's handler, which may pull further lines from the source and
//! push back the first line it does not own. Lines no matcher claims are
//! paragraph text.
//!
//! ```text
//! scan ─┬─ block match? ── close paragraph, "\n", handler (may scan/retry)
//!       ├─ empty line   ── close paragraph
//!       └─ otherwise    ── open paragraph (or "\n" separator), inline text
//! ```
//!
//! ## Modules
//!
//! - **`kinds`**: handlers for multi-line constructs (quotes, code fences,
//!   tables, lists, plugin blocks)
//!
//! ## Key Invariants
//!
//! - At most one line is ever pushed back
//! - Handlers end every region they open before returning
//! - A paragraph left open at end of input is closed by the sink's `close()`

mod kinds;

use std::io::BufRead;

use crate::error::ConvertError;
use crate::inline::render_inline;
use crate::matcher::{BlockKind, Match, Matcher, MatcherSet};
use crate::sink::{Handle, Sink};
use crate::source::LineSource;

/// Nesting limit for lists. Deeper items render as siblings.
pub const MAX_LIST_DEPTH: usize = 32;

/// State for one conversion: matchers, input lines and the output sink.
pub struct RenderContext<'m, 's, R, S: ?Sized> {
    matchers: &'m MatcherSet,
    source: LineSource<R>,
    sink: &'s mut S,
}

impl<'m, 's, R: BufRead, S: Sink + ?Sized> RenderContext<'m, 's, R, S> {
    pub fn new(matchers: &'m MatcherSet, input: R, sink: &'s mut S) -> Self {
        Self {
            matchers,
            source: LineSource::new(input),
            sink,
        }
    }

    /// Renders every remaining line. Does not close the sink.
    pub fn run(&mut self) -> Result<(), ConvertError> {
        let matchers = self.matchers;
        let mut paragraph: Option<Handle> = None;

        while self.source.scan()? {
            if let Some((matcher, found)) = matchers.match_block(self.source.text()) {
                if let Some(p) = paragraph.take() {
                    self.sink.end(p);
                }
                self.sink.write("\n");
                log::debug!(
                    "line {}: {:?}",
                    self.source.line_number(),
                    matcher.kind()
                );
                self.dispatch(matcher, found)?;
                continue;
            }

            if self.source.text().is_empty() {
                if let Some(p) = paragraph.take() {
                    self.sink.end(p);
                }
                continue;
            }

            match paragraph {
                Some(_) => self.sink.write("\n"),
                None => paragraph = Some(self.sink.paragraph()),
            }
            render_inline(matchers, self.source.text(), &mut *self.sink);
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        matcher: &Matcher<BlockKind>,
        found: Match,
    ) -> Result<(), ConvertError> {
        match matcher.kind() {
            BlockKind::Heading => {
                self.sink.heading(found.param(2), found.param(1).len());
            }
            BlockKind::Quote => self.quote_block(matcher, &found)?,
            BlockKind::CodeFence => self.code_fence(matcher, &found)?,
            BlockKind::Table => self.table(matcher, &found)?,
            BlockKind::List => self.list(matcher, found, 0)?,
            BlockKind::Rule => {
                self.sink.horizontal_rule();
            }
            BlockKind::Plugin => self.plugin_block(found.param(1))?,
            BlockKind::LinkDefinition | BlockKind::Comment => {}
            BlockKind::Checkbox => {
                self.sink.checkbox(found.param(1) != " ");
                self.inline(found.param(2));
            }
        }
        Ok(())
    }

    fn inline(&mut self, text: &str) {
        render_inline(self.matchers, text, &mut *self.sink);
    }
}
