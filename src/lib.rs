// Copyright (c) 2025 Lina Butler
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # `docpath`: An algebra of path-based document transformations
//!
//! `docpath` is a library for transforming JSON-like documents with a small,
//! closed algebra of composable *paths*. A path is applied to an input value
//! and rewrites it — extracting fields, supplying defaults, dropping or
//! keeping fields, traversing arrays — and every miss (a missing field, a
//! type mismatch, an out-of-range index) is the ordinary value `Nothing`
//! rather than an error, so evaluation is total.
//!
//! Expressions can be built programmatically with the [`build`] module, or
//! parsed from the textual form that the AST and value printers emit:
//!
//! ```rust
//! # use docpath::{evaluate, parse};
//! let driver = parse(r#"EvalPath (Field "a" Const 7) {b:7}"#);
//! let expr = driver.into_ast().unwrap();
//! assert_eq!(evaluate(&expr).to_string(), r#"{"b": 7, "a": 7}"#);
//! ```

pub mod ast;
pub mod build;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::{Expression, Location, Path};
pub use error::{Error, ErrorList};
pub use eval::evaluate;
pub use parser::{parse, Driver};
pub use value::{Field, Object, Scalar, Value};
