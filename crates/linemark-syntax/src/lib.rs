//! # linemark-syntax
//!
//! Syntax highlighting support for fenced code blocks: a per-line tokenizer
//! built on [Logos] and a small registry of languages.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Where It Fits
//!
//! ```text
//! fence line "go"  → Tokenizer::new("go")
//! func main() {    → Tokenizer::tokens → (class, text) pairs
//!                                          ↓
//!                          sink.write_styled / sink.write
//! ```
//!
//! The tokenizer knows nothing about rendering. The engine maps each
//! [`TokenClass`] to a style class for the output sink.
//!
//! ## Module Structure
//!
//! ```text
//! linemark-syntax/
//! ├── lib.rs       # This file - public API
//! ├── language.rs  # Supported languages: keywords + comment style
//! └── lexer.rs     # Logos token shapes and classification
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use linemark_syntax::{TokenClass, Tokenizer};
//!
//! let tokenizer = Tokenizer::new("rust");
//! let first = tokenizer.tokens("fn main() {}").next();
//! assert_eq!(first, Some((TokenClass::Keyword, "fn")));
//! ```

pub mod language;
pub mod lexer;

pub use language::{CommentStyle, Language};
pub use lexer::{TokenClass, Tokenizer, Tokens};
