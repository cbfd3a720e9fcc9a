use std::io::BufRead;

use crate::block::RenderContext;
use crate::error::ConvertError;
use crate::matcher::{BlockKind, Match, Matcher};
use crate::sink::{Align, CellStyle, Sink};

/// Column alignments from a separator row such as `:--|:-:|--:`.
///
/// Returns `None` when any cell holds something other than `-`, `:` and
/// whitespace, i.e. the row is data rather than a separator.
fn separator_alignment(row: &str) -> Option<Vec<Option<Align>>> {
    row.split('|')
        .map(|cell| {
            let cell = cell.trim();
            if !cell.chars().all(|c| c == '-' || c == ':' || c.is_whitespace()) {
                return None;
            }
            Some(match (cell.starts_with(':'), cell.ends_with(':')) {
                (true, true) => Some(Align::Center),
                (true, false) => Some(Align::Left),
                (false, true) => Some(Align::Right),
                (false, false) => None,
            })
        })
        .collect()
}

impl<R: BufRead, S: Sink + ?Sized> RenderContext<'_, '_, R, S> {
    /// Table of `|`-delimited rows. A separator row directly after the
    /// first row makes it a header and sets column alignment.
    pub(in crate::block) fn table(
        &mut self,
        matcher: &Matcher<BlockKind>,
        found: &Match,
    ) -> Result<(), ConvertError> {
        let mut aligns = Vec::new();
        let mut header = false;
        if self.source.scan()? {
            let separator = matcher
                .try_match(self.source.text())
                .and_then(|m| separator_alignment(m.param(1)));
            match separator {
                Some(found) => {
                    aligns = found;
                    header = true;
                }
                None => self.source.retry(),
            }
        }

        let table = self.sink.table();
        let mut row = found.param(1).to_string();
        loop {
            let tr = self.sink.table_row();
            for (i, cell) in row.split('|').enumerate() {
                let style = CellStyle {
                    align: aligns.get(i).copied().flatten(),
                    header,
                };
                let td = self.sink.table_cell(style);
                self.inline(cell);
                self.sink.end(td);
            }
            self.sink.end(tr);
            header = false;

            if !self.source.scan()? {
                break;
            }
            match matcher.try_match(self.source.text()) {
                Some(next) => row = next.param(1).to_string(),
                None => {
                    self.source.retry();
                    break;
                }
            }
        }
        self.sink.end(table);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_html;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("-|-", Some(vec![None, None]))]
    #[case(":--|--:|:-:", Some(vec![Some(Align::Left), Some(Align::Right), Some(Align::Center)]))]
    #[case(" :- | -: ", Some(vec![Some(Align::Left), Some(Align::Right)]))]
    #[case("- -|-", Some(vec![None, None]))]
    #[case(": - :|-", Some(vec![Some(Align::Center), None]))]
    #[case("a|-", None)]
    #[case("1|2", None)]
    fn separator_rows(#[case] row: &str, #[case] expected: Option<Vec<Option<Align>>>) {
        assert_eq!(separator_alignment(row), expected);
    }

    #[test]
    fn header_row_with_separator() {
        let html = to_html("|a|b|\n|-|-|\n|1|2|\n").unwrap();
        assert_eq!(
            html.trim(),
            "<table>\n<tr><th>a</th><th>b</th></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>"
        );
    }

    #[test]
    fn separator_cells_may_contain_spaces() {
        let html = to_html("|a|b|\n|- -|-|\n|1|2|\n").unwrap();
        assert_eq!(
            html.trim(),
            "<table>\n<tr><th>a</th><th>b</th></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>"
        );
    }

    #[test]
    fn no_separator_means_no_header() {
        let html = to_html("|a|b|\n|1|2|\n").unwrap();
        assert_eq!(
            html.trim(),
            "<table>\n<tr><td>a</td><td>b</td></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>"
        );
    }

    #[test]
    fn single_row_at_end_of_input() {
        let html = to_html("|only|").unwrap();
        assert_eq!(html.trim(), "<table>\n<tr><td>only</td></tr>\n</table>");
    }

    #[test]
    fn aligned_columns() {
        let html = to_html("|l|r|\n|:-|-:|\n|1|2|").unwrap();
        assert_eq!(
            html.trim(),
            "<table>\n\
             <tr><th style='text-align:left'>l</th><th style='text-align:right'>r</th></tr>\n\
             <tr><td style='text-align:left'>1</td><td style='text-align:right'>2</td></tr>\n\
             </table>"
        );
    }

    #[test]
    fn non_row_line_ends_table() {
        let html = to_html("|a|\ntext").unwrap();
        assert_eq!(html.trim(), "<table>\n<tr><td>a</td></tr>\n</table>\n<p>text</p>");
    }

    #[test]
    fn cells_render_inline() {
        let html = to_html("|**x**|`y`|").unwrap();
        assert_eq!(
            html.trim(),
            "<table>\n<tr><td><strong>x</strong></td><td><code>y</code></td></tr>\n</table>"
        );
    }
}
