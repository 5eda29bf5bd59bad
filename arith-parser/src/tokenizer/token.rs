use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Tokens are whitespace-delimited: every maximal run of non-whitespace characters is exactly one
/// token, and its kind is decided by the whole run.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A variable name: a letter followed by letters, digits or underscores, such as `x`, `rate`
    /// or `x_2`. A token like `x)` or `x+1` is a [`TokenKind::Word`].
    #[regex(r"\p{L}[\p{L}\p{N}_]*")]
    Name,

    /// An integer with an optional sign, such as `12` or `-5`.
    #[regex(r"[-+]?[0-9]+")]
    Int,

    /// Any other run of non-whitespace characters.
    #[regex(r"[^\s]+", priority = 0)]
    Word,
}

impl TokenKind {
    /// Classifies a single pre-split token.
    ///
    /// The lexeme is expected to contain no whitespace. If it does, it cannot be one token, and
    /// [`TokenKind::Word`] is returned.
    pub fn classify(lexeme: &str) -> Self {
        let mut lexer = TokenKind::lexer(lexeme);
        match (lexer.next(), lexer.span(), lexer.next()) {
            (Some(Ok(kind)), span, None) if span == (0..lexeme.len()) => kind,
            _ => TokenKind::Word,
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl<'source> Token<'source> {
    /// Classifies a sequence of pre-split tokens.
    ///
    /// Each token is given the span it would have if the tokens were joined by a single space,
    /// so that errors can be reported against `words.join(" ")`.
    pub fn from_words<S: AsRef<str>>(words: &'source [S]) -> Vec<Token<'source>> {
        let mut start = 0;
        words.iter()
            .map(|word| {
                let lexeme = word.as_ref();
                let span = start..start + lexeme.len();
                start = span.end + 1;
                Token {
                    span,
                    kind: TokenKind::classify(lexeme),
                    lexeme,
                }
            })
            .collect()
    }
}
