use crate::matcher::{InlineKind, Match, MatcherSet};
use crate::sink::Sink;

/// Renders one run of inline text into `sink`.
///
/// Scans left to right. A backslash makes the following character literal
/// and is itself dropped; a trailing lone backslash stays. At every other
/// position whose byte can start an inline matcher, the matchers are tried
/// in priority order. A match flushes the pending text, renders the
/// construct (recursively for spans that contain markup) and scanning
/// resumes right after it.
pub fn render_inline<S: Sink + ?Sized>(matchers: &MatcherSet, text: &str, sink: &mut S) {
    let mut rest = text;
    let mut pos = 0;

    while let Some(c) = rest[pos..].chars().next() {
        if c == '\\' {
            if let Some(escaped) = rest[pos + 1..].chars().next() {
                flush(sink, &rest[..pos]);
                rest = &rest[pos + 1..];
                pos = escaped.len_utf8();
                continue;
            }
            break;
        }

        if c.is_ascii() && matchers.can_start_inline(c as u8) {
            if let Some((m, found)) = matchers.match_inline(&rest[pos..]) {
                log::trace!("inline {:?}: {:?}", m.kind(), &rest[pos..pos + found.len]);
                flush(sink, &rest[..pos]);
                render_match(matchers, m.kind(), &found, sink);
                rest = &rest[pos + found.len..];
                pos = 0;
                continue;
            }
        }

        pos += c.len_utf8();
    }

    flush(sink, rest);
}

fn flush<S: Sink + ?Sized>(sink: &mut S, text: &str) {
    if !text.is_empty() {
        sink.write(text);
    }
}

fn render_match<S: Sink + ?Sized>(
    matchers: &MatcherSet,
    kind: InlineKind,
    found: &Match,
    sink: &mut S,
) {
    let handle = match kind {
        InlineKind::Strike => {
            let h = sink.strike();
            render_inline(matchers, found.param(0), sink);
            h
        }
        InlineKind::Strong => {
            let h = sink.strong();
            render_inline(matchers, found.param(0), sink);
            h
        }
        InlineKind::Emphasis => {
            let h = sink.emphasis();
            render_inline(matchers, found.param(0), sink);
            h
        }
        InlineKind::Code => {
            let h = sink.inline_code();
            sink.write(found.param(0));
            h
        }
        InlineKind::Image => {
            let (url, title) = split_title(found.param(1));
            sink.image(url, title, found.param(0))
        }
        InlineKind::Link => {
            let (url, title) = split_title(found.param(1));
            let h = sink.link(url, title);
            render_inline(matchers, found.param(0), sink);
            h
        }
        InlineKind::Autolink => {
            let url = found.param(0);
            let h = sink.link(url, "");
            sink.write(url);
            h
        }
    };
    sink.end(handle);
}

/// Splits `url "title"` on the first space. The title loses surrounding
/// quotes and spaces.
pub fn split_title(target: &str) -> (&str, &str) {
    match target.split_once(' ') {
        Some((url, title)) => (url, title.trim_matches(|c| c == '"' || c == ' ')),
        None => (target, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::HtmlWriter;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn html(text: &str) -> String {
        let mut w = HtmlWriter::new();
        render_inline(MatcherSet::standard(), text, &mut w);
        w.close();
        w.into_string()
    }

    #[rstest]
    #[case("plain words", "plain words")]
    #[case("a < b & c", "a &lt; b &amp; c")]
    #[case("aaa ** bbb", "aaa ** bbb")]
    #[case("*unterminated", "*unterminated")]
    #[case("~~**hello**~~", "<strike><strong>hello</strong></strike>")]
    #[case("__strong__ *em*", "<strong>strong</strong> <em>em</em>")]
    #[case("``this is `code`.``", "<code>this is `code`.</code>")]
    #[case("`**raw**`", "<code>**raw**</code>")]
    #[case("`<tag>`", "<code>&lt;tag&gt;</code>")]
    fn spans(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(html(text), expected);
    }

    #[rstest]
    #[case(r"\*escaped*", "*escaped*")]
    #[case(r"a\\b", r"a\b")]
    #[case(r"\\*em*", r"\<em>em</em>")]
    #[case(r"trailing\", r"trailing\")]
    #[case(r"\é*x*", "é<em>x</em>")]
    #[case(r"\[not](link)", "[not](link)")]
    fn backslash_escapes(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(html(text), expected);
    }

    #[test]
    fn autolink() {
        assert_snapshot!(
            html("url: http://www.example.com/?hello"),
            @"url: <a href='http://www.example.com/?hello'>http://www.example.com/?hello</a>"
        );
    }

    #[test]
    fn link_with_title() {
        assert_eq!(
            html("[link](test.png \"test\")"),
            "<a href='test.png' title='test'>link</a>"
        );
    }

    #[test]
    fn link_text_is_rendered_inline() {
        assert_eq!(
            html("[**bold** text](u)"),
            "<a href='u'><strong>bold</strong> text</a>"
        );
    }

    #[test]
    fn image_with_title() {
        assert_eq!(
            html("![img](test.png \"test\")"),
            "<img src='test.png' alt='img' title='test'/>"
        );
    }

    #[test]
    fn images_nested_in_link() {
        assert_snapshot!(
            html("[![img](test.png) ![img](test.png)](test)"),
            @"<a href='test'><img src='test.png' alt='img'/> <img src='test.png' alt='img'/></a>"
        );
    }

    #[test]
    fn multibyte_text_passes_through() {
        assert_eq!(html("日本語 *強調* テキスト"), "日本語 <em>強調</em> テキスト");
    }

    #[rstest]
    #[case("test.png", ("test.png", ""))]
    #[case("test.png \"test\"", ("test.png", "test"))]
    #[case("a.png \"two words\" ", ("a.png", "two words"))]
    #[case("a.png  spaced", ("a.png", "spaced"))]
    fn title_splitting(#[case] target: &str, #[case] expected: (&str, &str)) {
        assert_eq!(split_title(target), expected);
    }

    #[test]
    fn rendering_is_deterministic() {
        let text = "**a** [b](c) `d` ~~e~~ http://f.g";
        assert_eq!(html(text), html(text));
    }
}
