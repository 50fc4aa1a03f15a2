// Copyright (c) 2025 Lina Butler
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use crate::value::{write_quoted, Object, Scalar, Value};

/// The `[start, end)` byte offsets of a node in the source text.
///
/// Locations are metadata for diagnostics: the evaluator ignores them, and
/// structural equality of expressions does too, so builder-constructed and
/// parser-constructed trees compare equal. The default location is the
/// unknown (empty) span.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Location {
    pub start: usize,
    pub end: usize,
}

impl Location {
    pub fn new(start: usize, end: usize) -> Self {
        Location { start, end }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end.saturating_sub(1))
    }
}

/// An expression: either a constant value, or a path applied to the value
/// of another expression.
///
/// ## Examples
///
/// ```rust
/// # use docpath::{build, parse};
/// let expr = parse("EvalPath Id 5").into_ast().unwrap();
/// assert_eq!(expr, build::eval_path(build::id(), 5));
/// ```
#[derive(Clone, Debug)]
pub enum Expression {
    /// A literal value.
    Constant(Value, Location),

    /// `EvalPath <path> <expr>`: applies `path` to the value of the inner
    /// expression.
    EvalPath(Path, Box<Expression>, Location),
}

impl Expression {
    pub fn constant(value: Value, location: Location) -> Self {
        Self::Constant(value, location)
    }

    pub fn eval_path(path: Path, expr: Expression, location: Location) -> Self {
        Self::EvalPath(path, Box::new(expr), location)
    }

    pub fn location(&self) -> Location {
        match self {
            Self::Constant(_, location) => *location,
            Self::EvalPath(_, _, location) => *location,
        }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Constant(value, _), Self::Constant(other, _)) => value == other,
            (Self::EvalPath(path, expr, _), Self::EvalPath(other_path, other_expr, _)) => {
                path == other_path && expr == other_expr
            }
            _ => false,
        }
    }
}

/// A path: a combinator that rewrites an input value into an output value.
///
/// Paths form a closed algebra; [`evaluate`](crate::evaluate) gives each
/// variant its meaning. Composition is written `l * q` in the surface
/// syntax and applies left-to-right.
#[derive(Clone, Debug, PartialEq)]
pub enum Path {
    /// The identity rewrite.
    Id,

    /// Replaces the input with the value of the expression.
    Const(Box<Expression>),

    /// Substitutes the value of the expression when the input is `Nothing`;
    /// the identity otherwise.
    Default(Box<Expression>),

    /// Recognised syntactically; its runtime semantics are not yet
    /// specified, and applying it yields `Nothing`.
    Lambda(Box<Expression>),

    /// Removes the named fields from an object input; the identity on
    /// everything else.
    Drop(Vec<String>),

    /// Keeps only the named fields of an object input, in their existing
    /// order; the identity on everything else.
    Keep(Vec<String>),

    /// The input if it is an object, else `Nothing`.
    Obj,

    /// The input if it is an array, else `Nothing`.
    Arr,

    /// Rewrites (or creates) one field of an object.
    Field(String, Box<Path>),

    /// Extracts a field's value and continues with the sub-path.
    Get(String, Box<Path>),

    /// Extracts an array element by index and continues with the sub-path.
    At(i32, Box<Path>),

    /// Maps the sub-path over array elements, recursing through nested
    /// arrays and filtering out `Nothing` results.
    Traverse(Box<Path>),

    /// Applies the left path, then the right.
    Compose(Box<Path>, Box<Path>),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value, _) => write!(f, "{value}"),
            Self::EvalPath(path, expr, _) => write!(f, "EvalPath {path} {expr}"),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => write!(f, "Id"),
            Self::Const(expr) => write!(f, "(Const {expr})"),
            Self::Default(expr) => write!(f, "(Default {expr})"),
            Self::Lambda(expr) => write!(f, "(Lambda {expr})"),
            Self::Drop(names) => {
                write!(f, "(Drop ")?;
                write_names(f, names)?;
                write!(f, ")")
            }
            Self::Keep(names) => {
                write!(f, "(Keep ")?;
                write_names(f, names)?;
                write!(f, ")")
            }
            Self::Obj => write!(f, "Obj"),
            Self::Arr => write!(f, "Arr"),
            Self::Field(name, path) => {
                write!(f, "(Field ")?;
                write_quoted(f, name)?;
                write!(f, " {path})")
            }
            Self::Get(name, path) => {
                write!(f, "(Get ")?;
                write_quoted(f, name)?;
                write!(f, " {path})")
            }
            Self::At(index, path) => write!(f, "(At {index} {path})"),
            Self::Traverse(path) => write!(f, "(Traverse {path})"),
            Self::Compose(left, right) => write!(f, "({left} * {right})"),
        }
    }
}

fn write_names(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    for (index, name) in names.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write_quoted(f, name)?;
    }
    Ok(())
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Self::Constant(value, Location::default())
    }
}

impl From<Scalar> for Expression {
    fn from(scalar: Scalar) -> Self {
        Self::from(Value::from(scalar))
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Self::from(Value::from(value))
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        Self::from(Value::from(value))
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::from(Value::from(value))
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Self::from(Value::from(value))
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Self::from(Value::from(value))
    }
}

impl From<Object> for Expression {
    fn from(object: Object) -> Self {
        Self::from(Value::from(object))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Expression {
    fn from(values: Vec<T>) -> Self {
        Self::from(Value::from(values))
    }
}
