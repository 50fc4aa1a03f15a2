// Copyright (c) 2025 Lina Butler
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ergonomic constructors for building expressions programmatically.
//!
//! Every path variant has a constructor of the same shape here, and the
//! value-taking ones accept anything convertible into a [`Value`] or an
//! [`Expression`] — raw scalars, scalar vectors, objects, or existing
//! values and expressions. Locations default to unknown, which structural
//! equality ignores.
//!
//! ## Examples
//!
//! ```rust
//! # use docpath::{build, evaluate};
//! let expr = build::eval_path(build::field("a", build::const_path(7)), build::nothing());
//! assert_eq!(evaluate(&expr).to_string(), "{\"a\": 7}");
//! ```

use crate::ast::{Expression, Location, Path};
use crate::value::Value;

/// Converts anything value-like into a [`Value`].
pub fn value(value: impl Into<Value>) -> Value {
    value.into()
}

/// The absent value.
pub fn nothing() -> Value {
    Value::Nothing
}

/// Wraps anything value-like into a constant expression.
pub fn expr(value: impl Into<Expression>) -> Expression {
    value.into()
}

/// Applies `path` to the value of `expr`.
pub fn eval_path(path: Path, expr: impl Into<Expression>) -> Expression {
    Expression::eval_path(path, expr.into(), Location::default())
}

pub fn id() -> Path {
    Path::Id
}

pub fn const_path(expr: impl Into<Expression>) -> Path {
    Path::Const(Box::new(expr.into()))
}

pub fn default_path(expr: impl Into<Expression>) -> Path {
    Path::Default(Box::new(expr.into()))
}

pub fn lambda(expr: impl Into<Expression>) -> Path {
    Path::Lambda(Box::new(expr.into()))
}

pub fn drop(names: impl IntoIterator<Item = impl Into<String>>) -> Path {
    Path::Drop(names.into_iter().map(Into::into).collect())
}

pub fn keep(names: impl IntoIterator<Item = impl Into<String>>) -> Path {
    Path::Keep(names.into_iter().map(Into::into).collect())
}

pub fn obj() -> Path {
    Path::Obj
}

pub fn arr() -> Path {
    Path::Arr
}

pub fn field(name: impl Into<String>, path: Path) -> Path {
    Path::Field(name.into(), Box::new(path))
}

pub fn get(name: impl Into<String>, path: Path) -> Path {
    Path::Get(name.into(), Box::new(path))
}

pub fn at(index: i32, path: Path) -> Path {
    Path::At(index, Box::new(path))
}

pub fn traverse(path: Path) -> Path {
    Path::Traverse(Box::new(path))
}

pub fn compose(left: Path, right: Path) -> Path {
    Path::Compose(Box::new(left), Box::new(right))
}
