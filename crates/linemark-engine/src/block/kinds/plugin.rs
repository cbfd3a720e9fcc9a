use std::io::BufRead;

use crate::block::RenderContext;
use crate::error::ConvertError;
use crate::sink::Sink;

impl<R: BufRead, S: Sink + ?Sized> RenderContext<'_, '_, R, S> {
    /// Skips a `&name{ ... }` plugin block through its closing `}` line.
    /// Plugins are recognized but not rendered.
    pub(in crate::block) fn plugin_block(&mut self, name: &str) -> Result<(), ConvertError> {
        let opened_at = self.source.line_number();
        while self.source.scan()? {
            if self.source.text() == "}" {
                log::debug!(
                    "skipped plugin {name:?} at lines {opened_at}-{}",
                    self.source.line_number()
                );
                return Ok(());
            }
        }
        log::warn!("plugin {name:?} opened at line {opened_at} is never closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::to_html;
    use pretty_assertions::assert_eq;

    #[test]
    fn plugin_body_is_skipped() {
        let html = to_html("&dummy_plugin{\ndummy\n}").unwrap();
        assert_eq!(html.trim(), "");
    }

    #[test]
    fn text_after_plugin_renders() {
        let html = to_html("&p{\nbody\n}\nafter").unwrap();
        assert_eq!(html.trim(), "<p>after</p>");
    }

    #[test]
    fn unclosed_plugin_swallows_rest() {
        let html = to_html("&p{\n# gone\n").unwrap();
        assert_eq!(html.trim(), "");
    }
}
