use html_escape::{encode_single_quoted_attribute, encode_text};

use super::{CellStyle, CloseStack, Handle, ListMode, Sink, Style};

/// Renders sink events as an HTML fragment.
///
/// Output is buffered; call [`close`](Sink::close) before
/// [`into_string`](Self::into_string) to flush any region still open.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    closes: CloseStack,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered document so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn open(&mut self, tag: &str, close: &str) -> Handle {
        self.out.push_str(tag);
        self.closes.push(close)
    }

    /// Appends ` name='value'` unless `value` is empty.
    fn attr(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("='");
        self.out.push_str(&encode_single_quoted_attribute(value));
        self.out.push('\'');
    }
}

impl Sink for HtmlWriter {
    fn heading(&mut self, text: &str, level: usize) -> Handle {
        let level = level.clamp(1, 6);
        self.out.push_str(&format!("<h{level}>"));
        self.out.push_str(&encode_text(text));
        self.out.push_str(&format!("</h{level}>\n"));
        Handle::CLOSED
    }

    fn horizontal_rule(&mut self) -> Handle {
        self.out.push_str("<hr/>\n");
        Handle::CLOSED
    }

    fn image(&mut self, url: &str, title: &str, alt: &str) -> Handle {
        self.out.push_str("<img src='");
        self.out.push_str(&encode_single_quoted_attribute(url));
        self.out.push('\'');
        self.out.push_str(" alt='");
        self.out.push_str(&encode_single_quoted_attribute(alt));
        self.out.push('\'');
        self.attr("title", title);
        self.out.push_str("/>");
        Handle::CLOSED
    }

    fn checkbox(&mut self, checked: bool) -> Handle {
        if checked {
            self.out.push_str("<input type='checkbox' checked='checked'/>");
        } else {
            self.out.push_str("<input type='checkbox'/>");
        }
        Handle::CLOSED
    }

    fn paragraph(&mut self) -> Handle {
        self.open("<p>", "</p>\n")
    }

    fn link(&mut self, url: &str, title: &str) -> Handle {
        self.out.push_str("<a href='");
        self.out.push_str(&encode_single_quoted_attribute(url));
        self.out.push('\'');
        self.attr("title", title);
        self.open(">", "</a>")
    }

    fn strike(&mut self) -> Handle {
        self.open("<strike>", "</strike>")
    }

    fn strong(&mut self) -> Handle {
        self.open("<strong>", "</strong>")
    }

    fn emphasis(&mut self) -> Handle {
        self.open("<em>", "</em>")
    }

    fn inline_code(&mut self) -> Handle {
        self.open("<code>", "</code>")
    }

    fn quote_block(&mut self) -> Handle {
        self.open("<blockquote>", "</blockquote>\n")
    }

    fn list(&mut self, mode: ListMode) -> Handle {
        match mode {
            ListMode::Unordered => self.open("<ul>\n", "</ul>\n"),
            ListMode::Ordered => self.open("<ol>\n", "</ol>\n"),
        }
    }

    fn list_item(&mut self) -> Handle {
        self.open("<li>", "</li>\n")
    }

    fn table(&mut self) -> Handle {
        self.open("<table>\n", "</table>\n")
    }

    fn table_row(&mut self) -> Handle {
        self.open("<tr>", "</tr>\n")
    }

    fn table_cell(&mut self, style: CellStyle) -> Handle {
        let tag = if style.header { "th" } else { "td" };
        self.out.push('<');
        self.out.push_str(tag);
        if let Some(align) = style.align {
            self.out.push_str(" style='text-align:");
            self.out.push_str(align.as_css());
            self.out.push('\'');
        }
        self.open(">", &format!("</{tag}>"))
    }

    fn code_block(&mut self, language: &str, title: &str) -> Handle {
        self.out.push_str("<pre><code");
        if !language.is_empty() {
            self.attr("class", &format!("lang_{language}"));
        }
        self.attr("title", title);
        self.open(">", "</code></pre>\n")
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(&encode_text(text));
    }

    fn write_styled(&mut self, text: &str, style: Style<'_>) {
        self.out.push_str("<span");
        self.attr("class", style.class);
        if let Some(color) = style.color {
            self.attr("style", &format!("color:{color}"));
        }
        self.out.push('>');
        self.write(text);
        self.out.push_str("</span>");
    }

    fn end(&mut self, handle: Handle) {
        self.closes.unwind(handle, &mut self.out);
    }
}
