use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Low-level lexemes produced by [`logos`]. These know nothing about the registry; the
/// [`tokenize`](super::tokenize) pass classifies them into [`TokenKind`]s.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum RawKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Caret,

    #[token("=")]
    Equals,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[a-zA-Z]+")]
    Name,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("|")]
    Pipe,

    /// Catch-all for anything the language has no use for.
    #[regex(r".", priority = 0)]
    Symbol,
}

/// The kinds of tokens understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal, possibly negative.
    Number,

    /// One of `+`, `-`, `*`, `/`, `^`.
    Operator,

    /// A name not registered as a function or constant.
    Variable,

    /// A name registered as a constant.
    Constant,

    /// A name registered as a function.
    Function,

    /// `(` or `)`.
    Parenthesis,

    /// `|`, delimiting an absolute-value region.
    ModulusDelimiter,

    /// `=`.
    Equals,

    /// Anything else. Unknown tokens are kept in the stream so the parser can point at them.
    Unknown,
}

/// A token, along with its kind and where it was found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The region of the source the token occupies.
    pub span: Range<usize>,

    /// The token's classification.
    pub kind: TokenKind,

    /// The token's text. For merged negative literals this covers the sign and the digits.
    pub lexeme: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, lexeme: impl Into<String>, span: Range<usize>) -> Token {
        Token {
            span,
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}
