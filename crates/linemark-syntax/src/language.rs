//! # Language Registry
//!
//! The fixed set of languages the tokenizer knows how to classify. A language
//! is a keyword set plus a comment style; everything else about tokenizing is
//! shared.
//!
//! | Names | Comments |
//! |-------|----------|
//! | `go`, `rust`, `php`, `c`, `cpp`, `js` | `//` and `/* */` |
//! | `ruby`, `rb`, `perl`, `pl` | `#` to end of line |
//!
//! Keyword sets are stored as groups so derived languages (`cpp` on top of
//! `c`, `js` on top of `c`) share the base list instead of copying it.

/// How a language writes comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// line` and `/* block */`
    CStyle,
    /// `# line`
    Hash,
}

/// A supported language: its keywords and comment syntax.
#[derive(Debug)]
pub struct Language {
    pub name: &'static str,
    keywords: &'static [&'static [&'static str]],
    pub comments: CommentStyle,
}

impl Language {
    /// Returns true if `word` is one of this language's keywords.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords
            .iter()
            .any(|group| group.contains(&word))
    }

    /// Looks up a language by the name used on a code fence.
    ///
    /// Returns `None` for unknown names; callers fall back to unclassified
    /// tokens.
    pub fn lookup(name: &str) -> Option<&'static Language> {
        LANGUAGES
            .iter()
            .find(|(names, _)| names.contains(&name))
            .map(|(_, lang)| lang)
    }
}

const RUBY: &[&str] = &[
    "class",
    "def",
    "if",
    "else",
    "unless",
    "do",
    "next",
    "begin",
    "end",
    "ensure",
    "new",
    "attr_accessor",
    "return",
    "require",
    "require_relative",
];

const PERL: &[&str] = &[
    "for", "foreach", "if", "else", "elsif", "do", "while", "next", "last", "return", "sub", "my",
    "qw", "local", "require", "use",
];

const C: &[&str] = &[
    "void", "int", "char", "float", "double", "long", "short", "signed", "unsigned", "volatile",
    "static", "const", "auto", "for", "if", "else", "do", "while", "continue", "break", "return",
    "switch", "case", "default", "typedef", "enum", "struct",
];

const CPP_EXTRA: &[&str] = &[
    "class",
    "public",
    "private",
    "protected",
    "namespace",
    "using",
    "bool",
    "new",
    "delete",
];

const JS_EXTRA: &[&str] = &["var", "function", "new"];

const GO: &[&str] = &[
    "package", "import", "var", "type", "for", "if", "else", "continue", "break", "return", "func",
    "switch", "case", "default", "int", "string", "map", "float",
];

const PHP: &[&str] = &[
    "for", "foreach", "if", "else", "elseif", "do", "while", "continue", "break", "new", "class",
    "return", "catch", "try", "global", "public", "private", "function", "switch", "case",
];

const RUST: &[&str] = &[
    "fn", "let", "enum", "mod", "struct", "trait", "type", "use", "impl", "box", "crate", "where",
    "true", "false", "self", "super", "if", "else", "match", "for", "loop", "while", "break",
    "continue", "return", "as", "in", "const", "static", "pub", "mut", "move", "ref", "unsafe",
    "extern",
];

static LANGUAGES: &[(&[&str], Language)] = &[
    (
        &["go"],
        Language {
            name: "go",
            keywords: &[GO],
            comments: CommentStyle::CStyle,
        },
    ),
    (
        &["ruby", "rb"],
        Language {
            name: "ruby",
            keywords: &[RUBY],
            comments: CommentStyle::Hash,
        },
    ),
    (
        &["rust"],
        Language {
            name: "rust",
            keywords: &[RUST],
            comments: CommentStyle::CStyle,
        },
    ),
    (
        &["php"],
        Language {
            name: "php",
            keywords: &[PHP],
            comments: CommentStyle::CStyle,
        },
    ),
    (
        &["perl", "pl"],
        Language {
            name: "perl",
            keywords: &[PERL],
            comments: CommentStyle::Hash,
        },
    ),
    (
        &["c"],
        Language {
            name: "c",
            keywords: &[C],
            comments: CommentStyle::CStyle,
        },
    ),
    (
        &["cpp"],
        Language {
            name: "cpp",
            keywords: &[C, CPP_EXTRA],
            comments: CommentStyle::CStyle,
        },
    ),
    (
        &["js"],
        Language {
            name: "js",
            keywords: &[C, JS_EXTRA],
            comments: CommentStyle::CStyle,
        },
    ),
];
