// Copyright (c) 2025 Lina Butler
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

/// A dynamically-shaped document value.
///
/// A value is either the distinguished absent value [`Nothing`](Value::Nothing),
/// a [`Scalar`], an ordered array of values, or an [`Object`] with ordered,
/// named fields. Equality is structural, and order-sensitive for arrays and
/// objects.
///
/// ## Examples
///
/// ```rust
/// # use docpath::Value;
/// assert_eq!(Value::Nothing, Value::Nothing);
/// assert_eq!(Value::from(5), Value::from(5));
/// assert_ne!(Value::from(vec![1, 2]), Value::from(vec![2, 1]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absent value. Equal only to itself.
    Nothing,

    /// A boolean, integer, double, or string.
    Scalar(Scalar),

    /// An ordered, finite sequence of values.
    Array(Vec<Value>),

    /// An ordered sequence of named fields.
    Object(Object),
}

impl Value {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

/// A scalar document value.
///
/// Scalars compare by variant and value: `Int(1)` is *not* equal to
/// `Double(1.0)`. Doubles use IEEE equality, so `NaN != NaN`; the printer
/// follows the same convention.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i32),
    Double(f64),
    String(String),
}

/// A named field of an [`Object`].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Field {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered association list of named fields.
///
/// Field order is semantically observable, so the representation is a
/// sequence, not a map; name lookup is linear. The mutating operations
/// maintain two invariants for values built by the evaluator: field names
/// are pairwise distinct, and no field holds `Nothing` (such a field is
/// removed instead).
///
/// ## Examples
///
/// ```rust
/// # use docpath::{Object, Value};
/// let mut object = Object::default();
/// object.set_value("a", Value::from(1));
/// object.set_value("b", Value::from(2));
/// assert_eq!(object.get_value("a"), Value::from(1));
///
/// // Storing `Nothing` removes the field.
/// object.set_value("a", Value::Nothing);
/// assert!(!object.has_field("a"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    fields: Vec<Field>,
}

impl Object {
    pub fn new(fields: Vec<Field>) -> Self {
        Object { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns a copy of the named field's value, or `Nothing` if the
    /// object has no such field.
    pub fn get_value(&self, name: &str) -> Value {
        match self.get(name) {
            Some(field) => field.value.clone(),
            None => Value::Nothing,
        }
    }

    /// Stores `value` under `name`.
    ///
    /// Storing `Nothing` removes any field of that name. Storing into an
    /// existing field replaces its value in place, keeping its position;
    /// otherwise, the new field is appended at the end.
    pub fn set_value(&mut self, name: &str, value: Value) {
        if value.is_nothing() {
            self.fields.retain(|field| field.name != name);
            return;
        }

        match self.get_mut(name) {
            Some(field) => field.value = value,
            None => self.fields.push(Field::new(name, value)),
        }
    }

    /// Removes every field whose name appears in `names`, preserving the
    /// relative order of the survivors.
    pub fn drop_fields(&mut self, names: &[String]) {
        self.fields.retain(|field| !names.contains(&field.name));
    }

    /// Removes every field whose name does *not* appear in `names`,
    /// preserving the relative order of the survivors.
    pub fn keep_fields(&mut self, names: &[String]) {
        self.fields.retain(|field| names.contains(&field.name));
    }

    fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name == name)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Double(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::String(value))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => write!(f, "Nothing"),
            Self::Scalar(scalar) => write!(f, "{scalar}"),
            Self::Array(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            Self::Object(object) => write!(f, "{object}"),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            // `{:?}` always keeps a `.` or exponent, so a reparsed double
            // stays a double.
            Self::Double(value) => write!(f, "{value:?}"),
            Self::String(value) => write_quoted(f, value),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.name)?;
        write!(f, ": {}", self.value)
    }
}

/// Writes `s` double-quoted, escaping the characters that the lexer's
/// string escapes cover, so that the output reparses to the same string.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "\"")
}
