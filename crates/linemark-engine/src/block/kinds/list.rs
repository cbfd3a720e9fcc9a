use std::io::BufRead;

use crate::block::{MAX_LIST_DEPTH, RenderContext};
use crate::error::ConvertError;
use crate::matcher::{BlockKind, Match, Matcher};
use crate::sink::{ListMode, Sink};

/// Splits a leading `[ ] ` / `[x] ` task marker off an item.
fn task_marker(text: &str) -> Option<(bool, &str)> {
    let rest = text.strip_prefix('[')?;
    let (mark, rest) = rest.split_at_checked(1)?;
    let rest = rest.strip_prefix("] ")?;
    match mark {
        " " => Some((false, rest)),
        "x" | "X" => Some((true, rest)),
        _ => None,
    }
}

impl<R: BufRead, S: Sink + ?Sized> RenderContext<'_, '_, R, S> {
    /// List starting at `first`, plus any lists nested in its items.
    ///
    /// Captures are `[line, indent, bullet, text]`. The first item's indent
    /// fixes the list's level: deeper items open a nested list inside the
    /// current item, shallower items and non-item lines are pushed back and
    /// end the list.
    pub(in crate::block) fn list(
        &mut self,
        matcher: &Matcher<BlockKind>,
        first: Match,
        depth: usize,
    ) -> Result<(), ConvertError> {
        let mode = if first.param(2).ends_with('.') {
            ListMode::Ordered
        } else {
            ListMode::Unordered
        };
        let indent = first.param(1).len();
        let list = self.sink.list(mode);

        let mut item = first;
        'items: loop {
            let li = self.sink.list_item();
            self.list_item_content(item.param(3));

            loop {
                if !self.source.scan()? {
                    break 'items;
                }
                let Some(next) = matcher.try_match(self.source.text()) else {
                    self.source.retry();
                    break 'items;
                };
                let next_indent = next.param(1).len();
                if next_indent < indent {
                    self.source.retry();
                    break 'items;
                }
                if next_indent > indent && depth + 1 < MAX_LIST_DEPTH {
                    self.list(matcher, next, depth + 1)?;
                    continue;
                }
                if next_indent > indent {
                    log::warn!(
                        "line {}: list nesting deeper than {MAX_LIST_DEPTH} levels, rendering as sibling",
                        self.source.line_number()
                    );
                }
                self.sink.end(li);
                item = next;
                continue 'items;
            }
        }

        self.sink.end(list);
        Ok(())
    }

    fn list_item_content(&mut self, text: &str) {
        let text = match task_marker(text) {
            Some((checked, rest)) => {
                self.sink.checkbox(checked);
                rest
            }
            None => text,
        };
        self.inline(text);
    }
}
