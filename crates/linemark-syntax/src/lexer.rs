//! # Lexer - Classifying Code Block Lines
//!
//! This module splits one line of source code into classified tokens using
//! the [Logos] lexer generator. The classes drive syntax highlighting in the
//! rendered code block; nothing here tries to *understand* the code.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte of the line appears in exactly one token. Whitespace and
//! punctuation come back as [`TokenClass::Unclassified`] rather than being
//! skipped, so writing the token texts back to back reproduces the line:
//!
//! ```
//! use linemark_syntax::Tokenizer;
//!
//! let line = "func main() { // entry";
//! let tokenizer = Tokenizer::new("go");
//! let rebuilt: String = tokenizer.tokens(line).map(|(_, text)| text).collect();
//! assert_eq!(rebuilt, line);
//! ```
//!
//! ## Two Token Enums
//!
//! `RawToken` is what Logos derives on: it only knows the *shape* of a
//! token (identifier, number, quoted literal, comment opener). [`TokenClass`]
//! is the public result after the language has been consulted: an identifier
//! becomes a keyword only if the language says so, and `//` is a comment only
//! in C-family languages.
//!
//! ## Per-Line Tokenizing
//!
//! Each line is lexed on its own. A `/*` that is not closed on the same line
//! is not a comment; the remainder is emitted as ordinary tokens. Code blocks
//! are rendered line by line, so there is no state to carry.

use logos::Logos;

use crate::language::{CommentStyle, Language};

/// Token shapes recognized by Logos.
///
/// Nothing is skipped: whitespace and any character not covered by another
/// rule are tokens too.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// Runs of whitespace
    #[regex(r"\s+")]
    Whitespace,

    /// Identifiers and keywords
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    /// Decimal, float and hex literals
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    Number,

    /// Double, single and backtick quoted literals
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    #[regex(r"`[^`]*`")]
    Quoted,

    /// `// ...` to end of line
    #[regex(r"//[^\n]*")]
    LineComment,

    /// `/* ... */` closed on the same line
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// `#`, a comment opener in script languages
    #[token("#")]
    Hash,

    /// Any other single character
    #[regex(r"[^\sA-Za-z0-9_#]")]
    Punct,
}

/// The class of a token after language rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Keyword,
    Number,
    String,
    Comment,
    Ident,
    /// Whitespace, punctuation, and every token of an unsupported language.
    Unclassified,
}

/// Tokenizer configured for one code block's language.
///
/// Unknown languages are accepted; they produce only
/// [`TokenClass::Unclassified`] tokens so the code renders verbatim.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    language: Option<&'static Language>,
}

impl Tokenizer {
    /// Creates a tokenizer for the language named on a code fence.
    pub fn new(name: &str) -> Self {
        let language = Language::lookup(name);
        match language {
            Some(_) => log::trace!("tokenizing code as {name:?}"),
            None if !name.is_empty() => {
                log::trace!("no tokenizer rules for language {name:?}, rendering verbatim")
            }
            None => {}
        }
        Self { language }
    }

    /// Returns true if the language is in the registry.
    pub fn is_supported(&self) -> bool {
        self.language.is_some()
    }

    /// Tokenizes a single line (without its newline).
    ///
    /// The iterator ending is the end-of-line marker.
    pub fn tokens<'s>(&self, line: &'s str) -> Tokens<'s> {
        Tokens {
            lexer: RawToken::lexer(line),
            language: self.language,
        }
    }
}

/// Iterator over `(class, text)` pairs for one line.
pub struct Tokens<'s> {
    lexer: logos::Lexer<'s, RawToken>,
    language: Option<&'static Language>,
}

impl<'s> Iterator for Tokens<'s> {
    type Item = (TokenClass, &'s str);

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lexer.next()?;
        let text = self.lexer.slice();

        let Some(lang) = self.language else {
            return Some((TokenClass::Unclassified, text));
        };

        let class = match raw {
            Ok(RawToken::Ident) if lang.is_keyword(text) => TokenClass::Keyword,
            Ok(RawToken::Ident) => TokenClass::Ident,
            Ok(RawToken::Number) => TokenClass::Number,
            Ok(RawToken::Quoted) => TokenClass::String,
            Ok(RawToken::LineComment | RawToken::BlockComment) => match lang.comments {
                CommentStyle::CStyle => TokenClass::Comment,
                CommentStyle::Hash => TokenClass::Unclassified,
            },
            Ok(RawToken::Hash) if lang.comments == CommentStyle::Hash => {
                // The comment runs to the end of the line.
                let rest = self.lexer.remainder().len();
                self.lexer.bump(rest);
                return Some((TokenClass::Comment, self.lexer.slice()));
            }
            // Logos errors are characters no rule covers; keep them as text.
            Ok(RawToken::Whitespace | RawToken::Hash | RawToken::Punct) | Err(()) => {
                TokenClass::Unclassified
            }
        };

        Some((class, text))
    }
}
