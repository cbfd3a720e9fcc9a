use std::io::BufRead;

use crate::block::RenderContext;
use crate::error::ConvertError;
use crate::matcher::{BlockKind, Match, Matcher};
use crate::sink::Sink;

impl<R: BufRead, S: Sink + ?Sized> RenderContext<'_, '_, R, S> {
    /// Quote region running until the first blank line.
    ///
    /// Continuation lines lose their leading `>` markers when present; lazy
    /// continuation lines without markers are quoted as-is. Nested quotes
    /// flatten into one region.
    pub(in crate::block) fn quote_block(
        &mut self,
        matcher: &Matcher<BlockKind>,
        found: &Match,
    ) -> Result<(), ConvertError> {
        let quote = self.sink.quote_block();
        self.inline(&format!("{}\n", found.param(1)));

        while self.source.scan()? {
            let line = self.source.text();
            if line.is_empty() {
                self.source.retry();
                break;
            }
            let text = match matcher.try_match(line) {
                Some(m) => format!("{}\n", m.param(1)),
                None => format!("{line}\n"),
            };
            self.inline(&text);
        }

        self.sink.end(quote);
        Ok(())
    }
}
