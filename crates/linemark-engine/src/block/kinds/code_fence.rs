use std::io::BufRead;

use linemark_syntax::{TokenClass, Tokenizer};

use crate::block::RenderContext;
use crate::error::ConvertError;
use crate::matcher::{BlockKind, Match, Matcher};
use crate::sink::{Sink, Style};

/// Style class for a highlighted token; `None` means plain text.
fn style_class(class: TokenClass) -> Option<&'static str> {
    match class {
        TokenClass::Keyword => Some("code_key"),
        TokenClass::Number => Some("code_num"),
        TokenClass::String => Some("code_str"),
        TokenClass::Comment => Some("code_comment"),
        TokenClass::Ident => Some("code_ident"),
        TokenClass::Unclassified => None,
    }
}

impl<R: BufRead, S: Sink + ?Sized> RenderContext<'_, '_, R, S> {
    /// Code block up to the next fence line. Contents are raw: no block or
    /// inline matching, only per-line syntax highlighting.
    pub(in crate::block) fn code_fence(
        &mut self,
        matcher: &Matcher<BlockKind>,
        found: &Match,
    ) -> Result<(), ConvertError> {
        let language = found.param(1);
        let opened_at = self.source.line_number();
        let block = self.sink.code_block(language, found.param(2));
        let tokenizer = Tokenizer::new(language);

        let mut terminated = false;
        while self.source.scan()? {
            let line = self.source.text();
            if matcher.try_match(line).is_some() {
                terminated = true;
                break;
            }
            if !tokenizer.is_supported() {
                self.sink.write(line);
                self.sink.write("\n");
                continue;
            }
            for (class, token) in tokenizer.tokens(line) {
                match style_class(class) {
                    Some(class) => self.sink.write_styled(token, Style::class(class)),
                    None => self.sink.write(token),
                }
            }
            self.sink.write("\n");
        }

        if !terminated {
            log::warn!("code fence opened at line {opened_at} is never closed");
        }
        self.sink.end(block);
        Ok(())
    }
}
