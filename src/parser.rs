// Copyright (c) 2025 Lina Butler
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;

use lalrpop_util::{lalrpop_mod, ParseError as LalrpopParseError};

use crate::ast::Location;
use crate::error::{ErrorList, LexicalError, SpannedError};

use super::ast::Expression;
use super::lexer::{Lexer, Token};

lalrpop_mod!(docpath);

/// Parses a string containing a path expression into an AST, collecting
/// any diagnostics along the way.
///
/// Parsing always returns a [`Driver`]: on success it holds the AST, and
/// on failure it holds the diagnostics instead. The caller decides whether
/// to proceed when [`Driver::errors`] is non-empty.
///
/// ## Examples
///
/// ```rust
/// # use docpath::{build, parse};
/// let driver = parse("EvalPath (Default 4) Nothing");
/// assert!(!driver.errors().has_errors());
/// assert_eq!(
///     driver.into_ast(),
///     Some(build::eval_path(build::default_path(4), build::nothing())),
/// );
/// ```
pub fn parse(input: &str) -> Driver {
    let lexer = Lexer::new(input);
    let parser = docpath::ExprParser::new();
    let mut driver = Driver::default();
    match parser.parse(input, lexer) {
        Ok(ast) => driver.set_ast(ast),
        Err(err) => report(&mut driver, input, err),
    }
    driver
}

/// Records a parse failure in the driver's error list.
fn report(
    driver: &mut Driver,
    input: &str,
    err: LalrpopParseError<usize, Token<'_>, SpannedError<LexicalError>>,
) {
    let errors = driver.errors_mut();
    match err {
        LalrpopParseError::ExtraToken {
            token: (start, _, end),
        } => errors.append(
            "parser",
            "unexpected trailing input",
            Location::new(start, end),
        ),
        LalrpopParseError::InvalidToken { location: start } => {
            errors.append("parser", "invalid token", Location::new(start, input.len()))
        }
        LalrpopParseError::UnrecognizedEOF {
            location: start, ..
        } => errors.append(
            "parser",
            "unexpected end of input",
            Location::new(start, input.len()),
        ),
        LalrpopParseError::UnrecognizedToken {
            token: (start, _, end),
            ..
        } => errors.append("parser", "unexpected token", Location::new(start, end)),
        LalrpopParseError::User { error } => {
            let (start, end) = error.location;
            errors.append("lexer", error.error.to_string(), Location::new(start, end))
        }
    }
}

/// Holds the result of a parse: the AST, if one was produced, and the
/// ordered list of diagnostics.
#[derive(Debug, Default)]
pub struct Driver {
    ast: Option<Expression>,
    errors: ErrorList,
}

impl Driver {
    pub fn set_ast(&mut self, ast: Expression) {
        self.ast = Some(ast);
    }

    pub fn ast(&self) -> Option<&Expression> {
        self.ast.as_ref()
    }

    pub fn into_ast(self) -> Option<Expression> {
        self.ast
    }

    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut ErrorList {
        &mut self.errors
    }
}

/// Removes surrounding quotes from, and expands escape sequences in,
/// a string literal.
pub fn unquote(s: &str) -> Result<Cow<'_, str>, SpannedError<BadEscapeError>> {
    if !s.contains('\\') {
        // If the string doesn't contain any escape sequences,
        // we can just drop the surrounding quotes and
        // return the contents.
        return Ok(Cow::Borrowed(&s[1..s.len() - 1]));
    }
    let contents = &s[1..s.len() - 1];
    let mut string = String::with_capacity(contents.len());
    let mut chars = contents.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        match c {
            '\\' => {
                let c = match chars.peek() {
                    // Note: we don't support `\b`, `\f`, or `\uHHHH`
                    // escape sequences.
                    Some((_, 'n')) => '\n',
                    Some((_, 'r')) => '\r',
                    Some((_, 't')) => '\t',
                    Some((_, '\\')) => '\\',
                    Some((_, '"')) => '"',
                    Some(&(end, c)) => {
                        return Err(SpannedError {
                            error: BadEscapeError(c),
                            location: (start, end),
                        })
                    }
                    None => {
                        return Err(SpannedError {
                            error: BadEscapeError('\\'),
                            location: (start, contents.len()),
                        })
                    }
                };
                chars.next();
                string.push(c);
            }
            c => string.push(c),
        }
    }
    Ok(string.into())
}

pub(crate) fn parse_int(
    s: &str,
    location: (usize, usize),
) -> Result<i32, SpannedError<LexicalError>> {
    s.parse().map_err(|_| SpannedError {
        error: NumberError::NotInt.into(),
        location,
    })
}

pub(crate) fn parse_double(
    s: &str,
    location: (usize, usize),
) -> Result<f64, SpannedError<LexicalError>> {
    s.parse().map_err(|_| SpannedError {
        error: NumberError::NotDouble.into(),
        location,
    })
}

pub(crate) fn parse_string(
    s: &str,
    location: (usize, usize),
) -> Result<String, SpannedError<LexicalError>> {
    unquote(s)
        .map(Cow::into_owned)
        .map_err(|err| SpannedError {
            error: LexicalError::BadEscape(err.error),
            location,
        })
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported escape sequence `\\{0}`")]
pub struct BadEscapeError(pub char);

#[derive(Debug, thiserror::Error)]
pub enum NumberError {
    #[error("integer literal out of range")]
    NotInt,
    #[error("can't parse this value as a number")]
    NotDouble,
}
