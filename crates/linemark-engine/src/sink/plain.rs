use super::{CellStyle, CloseStack, Handle, ListMode, Sink, Style};

struct ListFrame {
    handle: Handle,
    mode: ListMode,
    next: usize,
}

/// Renders sink events as readable plain text.
///
/// Markup is dropped: links show their text, images their alt text, and
/// nothing is escaped. Lists are indented two spaces per nesting level and
/// numbered when ordered.
#[derive(Default)]
pub struct PlainWriter {
    out: String,
    closes: CloseStack,
    lists: Vec<ListFrame>,
    row_cells: usize,
}

impl PlainWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    /// Starts a new line unless already at the start of one.
    fn line_start(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }
}

impl Sink for PlainWriter {
    fn heading(&mut self, text: &str, _level: usize) -> Handle {
        self.line_start();
        self.out.push_str(text);
        self.out.push('\n');
        Handle::CLOSED
    }

    fn horizontal_rule(&mut self) -> Handle {
        self.line_start();
        self.out.push_str("----\n");
        Handle::CLOSED
    }

    fn image(&mut self, _url: &str, _title: &str, alt: &str) -> Handle {
        self.out.push_str(alt);
        Handle::CLOSED
    }

    fn checkbox(&mut self, checked: bool) -> Handle {
        self.out.push_str(if checked { "[x] " } else { "[ ] " });
        Handle::CLOSED
    }

    fn paragraph(&mut self) -> Handle {
        self.line_start();
        self.closes.push("\n")
    }

    fn link(&mut self, _url: &str, _title: &str) -> Handle {
        self.closes.push("")
    }

    fn strike(&mut self) -> Handle {
        self.closes.push("")
    }

    fn strong(&mut self) -> Handle {
        self.closes.push("")
    }

    fn emphasis(&mut self) -> Handle {
        self.closes.push("")
    }

    fn inline_code(&mut self) -> Handle {
        self.closes.push("")
    }

    fn quote_block(&mut self) -> Handle {
        self.line_start();
        self.closes.push("")
    }

    fn list(&mut self, mode: ListMode) -> Handle {
        self.line_start();
        let handle = self.closes.push("");
        self.lists.push(ListFrame {
            handle,
            mode,
            next: 1,
        });
        handle
    }

    fn list_item(&mut self) -> Handle {
        self.line_start();
        let depth = self.lists.len().saturating_sub(1);
        self.out.push_str(&"  ".repeat(depth));
        match self.lists.last_mut() {
            Some(ListFrame {
                mode: ListMode::Ordered,
                next,
                ..
            }) => {
                self.out.push_str(&format!("{next}. "));
                *next += 1;
            }
            _ => self.out.push_str("* "),
        }
        self.closes.push("\n")
    }

    fn table(&mut self) -> Handle {
        self.line_start();
        self.closes.push("")
    }

    fn table_row(&mut self) -> Handle {
        self.line_start();
        self.row_cells = 0;
        self.closes.push("\n")
    }

    fn table_cell(&mut self, _style: CellStyle) -> Handle {
        if self.row_cells > 0 {
            self.out.push('\t');
        }
        self.row_cells += 1;
        self.closes.push("")
    }

    fn code_block(&mut self, _language: &str, _title: &str) -> Handle {
        self.line_start();
        self.closes.push("")
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn write_styled(&mut self, text: &str, _style: Style<'_>) {
        self.out.push_str(text);
    }

    fn end(&mut self, handle: Handle) {
        // Close markers are empty or a line break; breaks from nested
        // regions collapse into one.
        let mut closed = String::new();
        self.closes.unwind(handle, &mut closed);
        if !closed.is_empty() {
            self.line_start();
        }
        while self.lists.last().is_some_and(|frame| frame.handle >= handle) {
            self.lists.pop();
        }
    }
}
