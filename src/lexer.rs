// Copyright (c) 2025 Lina Butler
// SPDX-License-Identifier: Apache-2.0 OR MIT

use logos::Logos;

use super::error::{LexicalError, SpannedError};

/// A token produced by the [`Lexer`].
#[derive(Clone, Debug, Logos, PartialEq)]
pub enum Token<'input> {
    #[token("EvalPath")]
    EvalPath,
    #[token("Id")]
    Id,
    #[token("Const")]
    Const,
    #[token("Default")]
    Default,
    #[token("Lambda")]
    Lambda,
    #[token("Drop")]
    Drop,
    #[token("Keep")]
    Keep,
    #[token("Obj")]
    Obj,
    #[token("Arr")]
    Arr,
    #[token("Field")]
    Field,
    #[token("Get")]
    Get,
    #[token("At")]
    At,
    #[token("Traverse")]
    Traverse,
    #[token("Nothing")]
    Nothing,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[token("*")]
    Star,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    /// Floating-point number; always carries a `.` or an exponent, which is
    /// what distinguishes it from [`Token::Int`].
    #[regex(r"-?(?:0|[1-9][0-9]*)\.[0-9]+(?:[eE][+-]?[0-9]+)?", |lex| lex.slice())]
    #[regex(r"-?(?:0|[1-9][0-9]*)[eE][+-]?[0-9]+", |lex| lex.slice())]
    Double(&'input str),

    /// Integer number.
    #[regex(r"-?(?:0|[1-9][0-9]*)", |lex| lex.slice())]
    Int(&'input str),

    /// Double-quoted string, surrounding quotes included; the parser
    /// unquotes and unescapes it.
    #[regex(r#""(?:[^"\\]|\\.)*""#, |lex| lex.slice())]
    String(&'input str),

    /// A string that reaches the end of the input without a closing quote.
    /// Only matches when [`Token::String`] can't.
    #[regex(r#""(?:[^"\\]|\\.)*"#, |lex| lex.slice())]
    Unterminated(&'input str),

    /// Unquoted identifier.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice())]
    Ident(&'input str),

    /// Skipped whitespace or invalid token.
    #[regex(r"[[:space:]]+", logos::skip)]
    #[error]
    Error,
}

/// A lexer for the `docpath` grammar, adapting [`logos`] output to the
/// `(start, token, end)` triples the parser consumes.
pub struct Lexer<'input> {
    inner: logos::Lexer<'input, Token<'input>>,
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Result<(usize, Token<'input>, usize), SpannedError<LexicalError>>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let span = self.inner.span();

        match token {
            Token::Error => Some(Err(SpannedError {
                error: LexicalError::Unexpected(self.inner.slice().to_owned()),
                location: (span.start, span.end),
            })),
            Token::Unterminated(_) => Some(Err(SpannedError {
                error: LexicalError::UnterminatedString,
                location: (span.start, span.end),
            })),
            token => Some(Ok((span.start, token, span.end))),
        }
    }
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Lexer {
            inner: Token::lexer(input),
        }
    }
}
