//! # Matchers
//!
//! A matcher recognizes one construct at the start of a string and reports
//! how many bytes it consumed plus the captured parameters. Three shapes
//! cover every construct:
//!
//! | Shape       | Used for                         | `params`                     |
//! |-------------|----------------------------------|------------------------------|
//! | `Delimited` | `~~x~~`, `**x**`, `*x*`, `` `x` `` | `[inner]`                    |
//! | `Pattern`   | autolinks, every block construct | `[whole, group1, group2, ..]` |
//! | `Link`      | `[text](url)`, `![alt](url)`     | `[text, url]`                |
//!
//! Each matcher carries a kind tag that selects how a match is rendered.
//! Matchers are always tried in the order of their [`MatcherSet`]; the first
//! match wins.

use std::sync::LazyLock;

use regex::Regex;

/// Inline constructs, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Strike,
    Strong,
    Emphasis,
    Code,
    Image,
    Link,
    Autolink,
}

/// Line-level constructs, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Quote,
    CodeFence,
    Table,
    List,
    Rule,
    LinkDefinition,
    Plugin,
    Comment,
    Checkbox,
}

/// A successful match: bytes consumed and captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub len: usize,
    pub params: Vec<String>,
}

impl Match {
    /// Parameter `i`, or `""` when absent.
    pub fn param(&self, i: usize) -> &str {
        self.params.get(i).map_or("", String::as_str)
    }
}

#[derive(Debug, Clone)]
pub enum Matcher<K> {
    /// Fixed start and end strings; matches up to the nearest end.
    Delimited {
        start: &'static str,
        end: &'static str,
        kind: K,
    },
    /// Anchored regular expression behind a literal fast-reject prefix.
    Pattern {
        prefix: &'static str,
        pattern: Regex,
        kind: K,
    },
    /// Bracketed text followed by a parenthesized url.
    Link { start: &'static str, kind: K },
}

impl<K: Copy> Matcher<K> {
    pub fn delimited(start: &'static str, end: &'static str, kind: K) -> Self {
        Matcher::Delimited { start, end, kind }
    }

    /// Builds a pattern matcher. `pattern` should be anchored with `^`.
    ///
    /// # Panics
    /// If `pattern` is not a valid regular expression.
    pub fn pattern(prefix: &'static str, pattern: &str, kind: K) -> Self {
        let pattern = Regex::new(pattern).expect("matcher pattern must compile");
        Matcher::Pattern {
            prefix,
            pattern,
            kind,
        }
    }

    pub fn link(start: &'static str, kind: K) -> Self {
        Matcher::Link { start, kind }
    }

    /// Literal text every match starts with (possibly empty).
    pub fn prefix(&self) -> &'static str {
        match self {
            Matcher::Delimited { start, .. } => *start,
            Matcher::Pattern { prefix, .. } => *prefix,
            Matcher::Link { start, .. } => *start,
        }
    }

    pub fn kind(&self) -> K {
        match self {
            Matcher::Delimited { kind, .. }
            | Matcher::Pattern { kind, .. }
            | Matcher::Link { kind, .. } => *kind,
        }
    }

    /// Tries to match at the very start of `text`.
    ///
    /// Returns `None` unless at least one byte is consumed.
    pub fn try_match(&self, text: &str) -> Option<Match> {
        if !text.starts_with(self.prefix()) {
            return None;
        }
        let m = match self {
            Matcher::Delimited { start, end, .. } => match_delimited(start, end, text),
            Matcher::Pattern { pattern, .. } => match_pattern(pattern, text),
            Matcher::Link { start, .. } => match_link(start, text),
        }?;
        (m.len > 0).then_some(m)
    }
}

fn match_delimited(start: &str, end: &str, text: &str) -> Option<Match> {
    let rest = text.get(start.len()..)?;
    let p = rest.find(end)?;
    if p == 0 {
        return None;
    }
    Some(Match {
        len: start.len() + p + end.len(),
        params: vec![rest[..p].to_string()],
    })
}

fn match_pattern(pattern: &Regex, text: &str) -> Option<Match> {
    let caps = pattern.captures(text)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 {
        return None;
    }
    let params = caps
        .iter()
        .map(|g| g.map_or(String::new(), |g| g.as_str().to_string()))
        .collect();
    Some(Match {
        len: whole.end(),
        params,
    })
}

/// Finds `](`, skipping past inner `](` pairs while an image opener sits
/// between the current start and the candidate, so `[![a](b)](c)` links to
/// `c`.
fn match_link(start: &str, line: &str) -> Option<Match> {
    let mut close = line.find("](")?;
    let mut from = start.len();
    while line.get(from..close).is_some_and(|s| s.contains("![")) {
        match line.get(close + 1..).and_then(|rest| rest.find("](")) {
            Some(p) => {
                from = close;
                close += p + 1;
            }
            None => break,
        }
    }
    let paren = close + line.get(close..)?.find(')')?;
    let text = line.get(start.len()..close)?;
    let url = line.get(close + 2..paren)?;
    Some(Match {
        len: paren + 1,
        params: vec![text.to_string(), url.to_string()],
    })
}

/// Inline and block matchers in priority order.
#[derive(Debug, Clone)]
pub struct MatcherSet {
    inline: Vec<Matcher<InlineKind>>,
    block: Vec<Matcher<BlockKind>>,
    /// First bytes that can start some inline matcher.
    inline_starts: [bool; 256],
}

static STANDARD: LazyLock<MatcherSet> = LazyLock::new(|| {
    use BlockKind as B;
    use InlineKind as I;

    let inline = vec![
        Matcher::delimited("~~", "~~", I::Strike),
        Matcher::delimited("**", "**", I::Strong),
        Matcher::delimited("*", "*", I::Emphasis),
        Matcher::delimited("``", "``", I::Code),
        Matcher::delimited("`", "`", I::Code),
        Matcher::delimited("__", "__", I::Strong),
        Matcher::link("![", I::Image),
        Matcher::link("[", I::Link),
        Matcher::pattern("http", r#"^https?:[^\s"'\)<>]+"#, I::Autolink),
    ];
    let block = vec![
        Matcher::pattern("#", r"^(#{1,4})\s*(.*)", B::Heading),
        Matcher::pattern(">", r"^>+\s?(.*)", B::Quote),
        Matcher::pattern("```", r"^```\s*(\w*)(?::(.*))?$", B::CodeFence),
        Matcher::pattern("|", r"^\|(.+)\|$", B::Table),
        Matcher::pattern("", r"^(\s*)(-|\*|\+|\d+\.)\s(.+)$", B::List),
        Matcher::pattern("", r"^([-_]\s?){3,}$", B::Rule),
        Matcher::pattern(
            "[",
            r"^\[([^\]]+)\]:\s+(\S+)(?:\s+(.*))?$",
            B::LinkDefinition,
        ),
        Matcher::pattern("&", r"^&(\w+)[{]*$", B::Plugin),
        Matcher::pattern("//", r"^//.*", B::Comment),
        Matcher::pattern("[", r"^\[([ xX])\]\s(.*)$", B::Checkbox),
    ];
    MatcherSet::new(inline, block)
});

impl MatcherSet {
    pub fn new(inline: Vec<Matcher<InlineKind>>, block: Vec<Matcher<BlockKind>>) -> Self {
        let mut inline_starts = [false; 256];
        for m in &inline {
            match m.prefix().as_bytes().first() {
                Some(&b) => inline_starts[b as usize] = true,
                None => inline_starts = [true; 256],
            }
        }
        Self {
            inline,
            block,
            inline_starts,
        }
    }

    /// The built-in matcher set, compiled once per process.
    pub fn standard() -> &'static MatcherSet {
        &STANDARD
    }

    /// Whether some inline matcher could start with `byte`.
    pub fn can_start_inline(&self, byte: u8) -> bool {
        self.inline_starts[byte as usize]
    }

    /// First inline matcher that matches at the start of `text`.
    pub fn match_inline(&self, text: &str) -> Option<(&Matcher<InlineKind>, Match)> {
        self.inline
            .iter()
            .find_map(|m| m.try_match(text).map(|found| (m, found)))
    }

    /// First block matcher that matches `line`.
    pub fn match_block(&self, line: &str) -> Option<(&Matcher<BlockKind>, Match)> {
        self.block
            .iter()
            .find_map(|m| m.try_match(line).map(|found| (m, found)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn inline_kind(text: &str) -> Option<(InlineKind, Vec<String>)> {
        MatcherSet::standard()
            .match_inline(text)
            .map(|(m, found)| (m.kind(), found.params))
    }

    fn block_kind(line: &str) -> Option<BlockKind> {
        MatcherSet::standard()
            .match_block(line)
            .map(|(m, _)| m.kind())
    }

    #[rstest]
    #[case("~~gone~~ rest", InlineKind::Strike, "gone", 8)]
    #[case("**bold**", InlineKind::Strong, "bold", 8)]
    #[case("*em* and *more*", InlineKind::Emphasis, "em", 4)]
    #[case("``a ` b``", InlineKind::Code, "a ` b", 9)]
    #[case("`x`", InlineKind::Code, "x", 3)]
    #[case("__under__", InlineKind::Strong, "under", 9)]
    fn delimited_matches(
        #[case] text: &str,
        #[case] kind: InlineKind,
        #[case] inner: &str,
        #[case] len: usize,
    ) {
        let (m, found) = MatcherSet::standard().match_inline(text).unwrap();
        assert_eq!(m.kind(), kind);
        assert_eq!(found.params, vec![inner.to_string()]);
        assert_eq!(found.len, len);
    }

    #[rstest]
    #[case("** bbb")]
    #[case("****")]
    #[case("**")]
    #[case("*")]
    #[case("``")]
    #[case("~~open")]
    fn empty_or_unterminated_delimiters_do_not_match(#[case] text: &str) {
        assert_eq!(inline_kind(text), None);
    }

    #[test]
    fn link_captures_text_and_url() {
        let m = Matcher::link("[", InlineKind::Link);
        let found = m.try_match("[link](test.png \"test\") after").unwrap();
        assert_eq!(found.params, vec!["link", "test.png \"test\""]);
        assert_eq!(found.len, "[link](test.png \"test\")".len());
    }

    #[test]
    fn link_skips_nested_images() {
        let line = "[![img](test.png) ![img](test.png)](test)";
        let m = Matcher::link("[", InlineKind::Link);
        let found = m.try_match(line).unwrap();
        assert_eq!(found.param(0), "![img](test.png) ![img](test.png)");
        assert_eq!(found.param(1), "test");
        assert_eq!(found.len, line.len());
    }

    #[rstest]
    #[case("[no close")]
    #[case("[text](no paren")]
    #[case("plain")]
    fn link_rejects(#[case] text: &str) {
        assert_eq!(Matcher::link("[", InlineKind::Link).try_match(text), None);
    }

    #[test]
    fn image_before_link() {
        let (kind, params) = inline_kind("![alt](a.png)").unwrap();
        assert_eq!(kind, InlineKind::Image);
        assert_eq!(params, vec!["alt", "a.png"]);
    }

    #[rstest]
    #[case("http://www.example.com/?hello rest", "http://www.example.com/?hello")]
    #[case("https://a.b/c)", "https://a.b/c")]
    #[case("http://x.y/<b>", "http://x.y/")]
    fn autolink_stops_at_terminators(#[case] text: &str, #[case] url: &str) {
        let (kind, params) = inline_kind(text).unwrap();
        assert_eq!(kind, InlineKind::Autolink);
        assert_eq!(params[0], url);
    }

    #[test]
    fn bare_scheme_is_not_autolink() {
        assert_eq!(inline_kind("http: nothing"), None);
        assert_eq!(inline_kind("httpx"), None);
    }

    #[rstest]
    #[case("# hello", Some(BlockKind::Heading))]
    #[case("#### deep", Some(BlockKind::Heading))]
    #[case("> quoted", Some(BlockKind::Quote))]
    #[case("```go", Some(BlockKind::CodeFence))]
    #[case("```", Some(BlockKind::CodeFence))]
    #[case("|a|b|", Some(BlockKind::Table))]
    #[case("- item", Some(BlockKind::List))]
    #[case("  12. item", Some(BlockKind::List))]
    #[case("---", Some(BlockKind::Rule))]
    #[case("_ _ _", Some(BlockKind::Rule))]
    #[case("[dummy]: # (dummy ref)", Some(BlockKind::LinkDefinition))]
    #[case("[id]: http://x", Some(BlockKind::LinkDefinition))]
    #[case("&dummy_plugin{", Some(BlockKind::Plugin))]
    #[case("// note", Some(BlockKind::Comment))]
    #[case("[x] done", Some(BlockKind::Checkbox))]
    #[case("[ ] todo", Some(BlockKind::Checkbox))]
    #[case("plain text", None)]
    #[case("", None)]
    #[case("-item", None)]
    #[case("--", None)]
    fn block_dispatch(#[case] line: &str, #[case] expected: Option<BlockKind>) {
        assert_eq!(block_kind(line), expected);
    }

    #[test]
    fn pattern_params_include_whole_match_and_groups() {
        let (_, found) = MatcherSet::standard().match_block("## Title here").unwrap();
        assert_eq!(found.params, vec!["## Title here", "##", "Title here"]);
    }

    #[test]
    fn unmatched_groups_are_empty() {
        let (m, found) = MatcherSet::standard().match_block("```").unwrap();
        assert_eq!(m.kind(), BlockKind::CodeFence);
        assert_eq!(found.param(1), "");
        assert_eq!(found.param(2), "");
    }

    #[test]
    fn code_fence_title_excludes_colon() {
        let (_, found) = MatcherSet::standard().match_block("```rb:a.rb").unwrap();
        assert_eq!(found.param(1), "rb");
        assert_eq!(found.param(2), "a.rb");
    }

    #[test]
    fn fast_reject_table() {
        let set = MatcherSet::standard();
        for b in [b'~', b'*', b'`', b'_', b'!', b'[', b'h'] {
            assert!(set.can_start_inline(b), "{}", b as char);
        }
        assert!(!set.can_start_inline(b'a'));
        assert!(!set.can_start_inline(b' '));
    }

    #[test]
    fn empty_prefix_disables_fast_reject() {
        let set = MatcherSet::new(
            vec![Matcher::pattern("", r"^\d+", InlineKind::Code)],
            vec![],
        );
        assert!(set.can_start_inline(b'7'));
        assert!(set.can_start_inline(b'a'));
    }
}
