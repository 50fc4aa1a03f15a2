// Copyright (c) 2025 Lina Butler
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use super::ast::Location;
use super::parser::{BadEscapeError, NumberError};

/// An error that includes source location information.
#[derive(Debug, thiserror::Error)]
#[error("{error} at {}-{}", .location.0, .location.1.saturating_sub(1))]
pub struct SpannedError<T> {
    /// The underlying error.
    pub error: T,

    /// The `[start, end)` byte offsets in the input where the error occurred.
    pub location: (usize, usize),
}

impl<T> SpannedError<T> {
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> SpannedError<U> {
        SpannedError {
            error: transform(self.error),
            location: self.location,
        }
    }
}

/// The error type produced when an expression fails to lex.
#[derive(Debug, thiserror::Error)]
pub enum LexicalError {
    #[error("`{0}` can't be used here")]
    Unexpected(String),
    #[error("unterminated string; did you forget a closing `\"`?")]
    UnterminatedString,
    #[error(transparent)]
    BadEscape(#[from] BadEscapeError),
    #[error(transparent)]
    NotNumber(#[from] NumberError),
}

/// A single parse-time diagnostic: where it came from, what went wrong,
/// and where in the input.
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    source: String,
    message: String,
    location: Location,
}

impl Error {
    pub fn new(source: impl Into<String>, message: impl Into<String>, location: Location) -> Self {
        Error {
            source: source.into(),
            message: message.into(),
            location,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.source, self.location, self.message)
    }
}

/// An append-only, ordered log of parse-time diagnostics.
///
/// Parsing never panics and never throws: the driver records what went
/// wrong here and still returns, and the caller decides whether to
/// proceed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorList {
    errors: Vec<Error>,
}

impl ErrorList {
    pub fn append(
        &mut self,
        source: impl Into<String>,
        message: impl Into<String>,
        location: Location,
    ) {
        self.errors.push(Error::new(source, message, location));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} errors.", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}
