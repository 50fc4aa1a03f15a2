// Copyright (c) 2025 Lina Butler
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The evaluator: a path-directed rewrite over values.
//!
//! Evaluation is pure and total: every well-formed expression evaluates to
//! a value, and every "failure" — a missing field, a type mismatch, an
//! out-of-range index — is the ordinary value `Nothing`.

use crate::ast::{Expression, Path};
use crate::value::{Object, Value};

/// Evaluates an expression to a value.
///
/// ## Examples
///
/// ```rust
/// # use docpath::{build, evaluate};
/// let expr = build::eval_path(build::default_path(4), build::nothing());
/// assert_eq!(evaluate(&expr), build::value(4));
/// ```
pub fn evaluate(expr: &Expression) -> Value {
    match expr {
        Expression::Constant(value, _) => value.clone(),
        Expression::EvalPath(path, expr, _) => apply(path, evaluate(expr)),
    }
}

/// Applies a path to an input value.
fn apply(path: &Path, value: Value) -> Value {
    match path {
        Path::Id => value,
        Path::Const(expr) => evaluate(expr),
        Path::Default(expr) => {
            if value.is_nothing() {
                evaluate(expr)
            } else {
                value
            }
        }
        // TODO: give `Lambda` a meaning once binding semantics are settled.
        Path::Lambda(_) => Value::Nothing,
        Path::Drop(names) => match value {
            Value::Object(mut object) => {
                object.drop_fields(names);
                Value::Object(object)
            }
            value => value,
        },
        Path::Keep(names) => match value {
            Value::Object(mut object) => {
                object.keep_fields(names);
                Value::Object(object)
            }
            value => value,
        },
        Path::Obj => {
            if value.is_object() {
                value
            } else {
                Value::Nothing
            }
        }
        Path::Arr => {
            if value.is_array() {
                value
            } else {
                Value::Nothing
            }
        }
        Path::Field(name, path) => match value {
            Value::Object(mut object) => {
                let inner = apply(path, object.get_value(name));
                object.set_value(name, inner);
                Value::Object(object)
            }
            value => {
                let inner = apply(path, Value::Nothing);
                if inner.is_nothing() {
                    // No object to rewrite and nothing to store: leave the
                    // input untouched.
                    value
                } else {
                    let mut object = Object::default();
                    object.set_value(name, inner);
                    Value::Object(object)
                }
            }
        },
        Path::Get(name, path) => {
            let inner = match value {
                Value::Object(object) => object.get_value(name),
                _ => Value::Nothing,
            };
            apply(path, inner)
        }
        Path::At(index, path) => {
            let inner = match value {
                Value::Array(values) if *index >= 0 => values
                    .into_iter()
                    .nth(*index as usize)
                    .unwrap_or(Value::Nothing),
                _ => Value::Nothing,
            };
            apply(path, inner)
        }
        Path::Traverse(inner) => match value {
            Value::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    // Dive into nested arrays with the whole traversal;
                    // apply the sub-path to everything else.
                    let out = if element.is_array() {
                        apply(path, element)
                    } else {
                        apply(inner, element)
                    };
                    if !out.is_nothing() {
                        values.push(out);
                    }
                }
                Value::Array(values)
            }
            value => apply(inner, value),
        },
        Path::Compose(left, right) => apply(right, apply(left, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{
        arr, at, compose, const_path, default_path, drop, eval_path, field, get, id, keep, lambda,
        nothing, obj, traverse, value,
    };
    use crate::value::Field;

    fn object(fields: Vec<(&str, Value)>) -> Object {
        Object::new(
            fields
                .into_iter()
                .map(|(name, value)| Field::new(name, value))
                .collect(),
        )
    }

    #[test]
    fn test_constant_object() {
        let constant = value(object(vec![
            ("hello", value(5)),
            ("ab.cd", value("da")),
            ("5", value(100)),
        ]));
        let expr = crate::build::expr(constant.clone());
        assert_eq!(evaluate(&expr), constant);
    }

    #[test]
    fn test_id_is_identity() {
        assert_eq!(evaluate(&eval_path(id(), 5)), value(5));
        assert_eq!(
            evaluate(&eval_path(id(), value(object(vec![("foo", value(2))])))),
            value(object(vec![("foo", value(2))]))
        );
        assert_eq!(evaluate(&eval_path(id(), nothing())), nothing());
    }

    #[test]
    fn test_const_ignores_input() {
        assert_eq!(evaluate(&eval_path(const_path(5), 7)), value(5));
        assert_eq!(
            evaluate(&eval_path(const_path(5), value(object(vec![("foo", value(2))])))),
            value(5)
        );
        assert_eq!(evaluate(&eval_path(const_path(5), nothing())), value(5));

        let a1 = value(object(vec![("a", value(1))]));
        assert_eq!(evaluate(&eval_path(const_path(a1.clone()), 7)), a1);
        assert_eq!(evaluate(&eval_path(const_path(a1.clone()), nothing())), a1);
    }

    #[test]
    fn test_const_nothing_is_nothing() {
        assert_eq!(evaluate(&eval_path(const_path(nothing()), 7)), nothing());
    }

    #[test]
    fn test_default_fires_only_on_nothing() {
        assert_eq!(evaluate(&eval_path(default_path(4), nothing())), value(4));
        assert_eq!(evaluate(&eval_path(default_path(4), 7)), value(7));

        let a5 = value(object(vec![("a", value(5))]));
        assert_eq!(evaluate(&eval_path(default_path(4), a5.clone())), a5);
    }

    #[test]
    fn test_lambda_is_nothing_for_now() {
        assert_eq!(evaluate(&eval_path(lambda(7), 5)), nothing());
        assert_eq!(evaluate(&eval_path(lambda(7), nothing())), nothing());
    }

    #[test]
    fn test_drop_ignores_non_objects() {
        assert_eq!(evaluate(&eval_path(drop(["a"]), 7)), value(7));
        assert_eq!(evaluate(&eval_path(drop(["a"]), nothing())), nothing());
    }

    #[test]
    fn test_drop_removes_named_fields() {
        let foo5 = value(object(vec![("foo", value(5))]));
        assert_eq!(evaluate(&eval_path(drop(["a"]), foo5.clone())), foo5);

        assert_eq!(
            evaluate(&eval_path(drop(["a"]), value(object(vec![("a", value(7))])))),
            value(object(vec![]))
        );

        let ab = value(object(vec![("a", value(7)), ("b", value(9))]));
        assert_eq!(
            evaluate(&eval_path(drop(["a"]), ab.clone())),
            value(object(vec![("b", value(9))]))
        );
        assert_eq!(
            evaluate(&eval_path(drop(["a", "b"]), ab)),
            value(object(vec![]))
        );
    }

    #[test]
    fn test_keep_ignores_non_objects() {
        assert_eq!(evaluate(&eval_path(keep(["a"]), 5)), value(5));
        assert_eq!(evaluate(&eval_path(keep(["a"]), nothing())), nothing());
    }

    #[test]
    fn test_keep_retains_only_named_fields() {
        assert_eq!(
            evaluate(&eval_path(keep(["a"]), value(object(vec![("foo", value(7))])))),
            value(object(vec![]))
        );

        let ab = value(object(vec![("a", value(7)), ("b", value(9))]));
        assert_eq!(
            evaluate(&eval_path(keep(["a"]), ab.clone())),
            value(object(vec![("a", value(7))]))
        );
        assert_eq!(evaluate(&eval_path(keep(["a", "b"]), ab.clone())), ab);
    }

    #[test]
    fn test_obj_narrows_to_objects() {
        assert_eq!(evaluate(&eval_path(obj(), 5)), nothing());

        let a7 = value(object(vec![("a", value(7))]));
        assert_eq!(evaluate(&eval_path(obj(), a7.clone())), a7);
    }

    #[test]
    fn test_arr_narrows_to_arrays() {
        assert_eq!(evaluate(&eval_path(arr(), 5)), nothing());
        assert_eq!(
            evaluate(&eval_path(arr(), vec![1, 2, 3])),
            value(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_field_leaves_non_objects_when_inner_is_nothing() {
        assert_eq!(evaluate(&eval_path(field("a", id()), nothing())), nothing());
        assert_eq!(evaluate(&eval_path(field("a", id()), 5)), value(5));
        assert_eq!(
            evaluate(&eval_path(field("a", const_path(nothing())), 5)),
            value(5)
        );
    }

    #[test]
    fn test_field_creates_object_from_scratch() {
        let a7 = value(object(vec![("a", value(7))]));
        assert_eq!(evaluate(&eval_path(field("a", const_path(7)), 5)), a7);
        assert_eq!(evaluate(&eval_path(field("a", const_path(7)), nothing())), a7);
    }

    #[test]
    fn test_field_rewrites_existing_objects() {
        let b7 = value(object(vec![("b", value(7))]));
        assert_eq!(evaluate(&eval_path(field("a", id()), b7.clone())), b7);

        let a5 = value(object(vec![("a", value(5))]));
        assert_eq!(evaluate(&eval_path(field("a", id()), a5.clone())), a5);
        assert_eq!(
            evaluate(&eval_path(field("a", const_path(7)), a5)),
            value(object(vec![("a", value(7))]))
        );
    }

    #[test]
    fn test_field_appends_after_existing_fields() {
        assert_eq!(
            evaluate(&eval_path(
                field("a", const_path(7)),
                value(object(vec![("b", value(7))]))
            )),
            value(object(vec![("b", value(7)), ("a", value(7))]))
        );
    }

    #[test]
    fn test_field_removes_field_when_inner_becomes_nothing() {
        assert_eq!(
            evaluate(&eval_path(
                field("a", const_path(nothing())),
                value(object(vec![("a", value(5)), ("b", value(9))]))
            )),
            value(object(vec![("b", value(9))]))
        );
    }

    #[test]
    fn test_get_extracts_without_reconstructing() {
        assert_eq!(evaluate(&eval_path(get("a", id()), 5)), nothing());
        assert_eq!(
            evaluate(&eval_path(get("a", id()), value(object(vec![("b", value(7))])))),
            nothing()
        );
        assert_eq!(
            evaluate(&eval_path(get("a", id()), value(object(vec![("a", value(5))])))),
            value(5)
        );
    }

    #[test]
    fn test_get_applies_sub_path_to_extracted_value() {
        assert_eq!(evaluate(&eval_path(get("a", const_path(7)), 5)), value(7));
        assert_eq!(
            evaluate(&eval_path(
                get("a", const_path(7)),
                value(object(vec![("a", value(5))]))
            )),
            value(7)
        );
        assert_eq!(
            evaluate(&eval_path(
                get("a", const_path(7)),
                value(object(vec![("b", value(7))]))
            )),
            value(7)
        );
    }

    #[test]
    fn test_at_misses_yield_nothing() {
        assert_eq!(evaluate(&eval_path(at(2, id()), 5)), nothing());
        assert_eq!(evaluate(&eval_path(at(2, id()), vec![0, 1])), nothing());
        assert_eq!(evaluate(&eval_path(at(-1, id()), vec![0, 1])), nothing());
    }

    #[test]
    fn test_at_extracts_in_range_elements() {
        assert_eq!(evaluate(&eval_path(at(2, id()), vec![0, 1, 2])), value(2));
    }

    #[test]
    fn test_at_with_default_sub_path() {
        assert_eq!(
            evaluate(&eval_path(at(2, default_path("foo")), 5)),
            value("foo")
        );
        assert_eq!(
            evaluate(&eval_path(at(2, default_path("foo")), vec![0, 1])),
            value("foo")
        );
        assert_eq!(
            evaluate(&eval_path(at(2, default_path("foo")), vec![0, 1, 2])),
            value(2)
        );
    }

    #[test]
    fn test_traverse_passes_through_non_arrays() {
        assert_eq!(evaluate(&eval_path(traverse(id()), 5)), value(5));
        assert_eq!(evaluate(&eval_path(traverse(const_path(7)), 5)), value(7));

        let a7 = value(object(vec![("a", value(7))]));
        assert_eq!(evaluate(&eval_path(traverse(id()), a7.clone())), a7);
    }

    #[test]
    fn test_traverse_maps_over_arrays() {
        assert_eq!(
            evaluate(&eval_path(traverse(id()), vec![1, 2, 3])),
            value(vec![1, 2, 3])
        );
        assert_eq!(
            evaluate(&eval_path(traverse(const_path(7)), vec![1, 2, 3])),
            value(vec![7, 7, 7])
        );
    }

    #[test]
    fn test_traverse_recurses_into_nested_arrays() {
        let input = Value::Array(vec![value(vec![1, 2, 3]), value(4)]);
        let expected = Value::Array(vec![value(vec![7, 7, 7]), value(7)]);
        assert_eq!(evaluate(&eval_path(traverse(const_path(7)), input)), expected);
    }

    #[test]
    fn test_traverse_filters_nothing_results() {
        // The non-object element contributes `Nothing` through `Get`,
        // which the traversal drops.
        let input = value(object(vec![(
            "a",
            Value::Array(vec![
                value(object(vec![("b", value(1))])),
                value(object(vec![("b", value(2))])),
                value(3),
            ]),
        )]));
        let expr = eval_path(field("a", traverse(get("b", id()))), input);
        assert_eq!(
            evaluate(&expr),
            value(object(vec![("a", value(vec![1, 2]))]))
        );
    }

    #[test]
    fn test_traverse_rewrites_fields_of_elements() {
        let input = value(object(vec![(
            "a",
            Value::Array(vec![
                value(object(vec![("b", value(1))])),
                value(object(vec![("b", value(2))])),
                value(3),
            ]),
        )]));
        let expr = eval_path(field("a", traverse(field("b", const_path(7)))), input);
        let expected = value(object(vec![(
            "a",
            Value::Array(vec![
                value(object(vec![("b", value(7))])),
                value(object(vec![("b", value(7))])),
                value(object(vec![("b", value(7))])),
            ]),
        )]));
        assert_eq!(evaluate(&expr), expected);
    }

    #[test]
    fn test_composition_applies_left_to_right() {
        let expr = eval_path(compose(const_path(5), default_path(4)), nothing());
        assert_eq!(evaluate(&expr), value(5));

        let expr = eval_path(compose(const_path(nothing()), default_path(4)), 7);
        assert_eq!(evaluate(&expr), value(4));
    }

    #[test]
    fn test_composition_materialises_objects() {
        let expr = eval_path(
            compose(field("a", const_path(7)), field("b", const_path(9))),
            nothing(),
        );
        assert_eq!(
            evaluate(&expr),
            value(object(vec![("a", value(7)), ("b", value(9))]))
        );

        // Swapping the operands swaps the field order.
        let expr = eval_path(
            compose(field("b", const_path(9)), field("a", const_path(7))),
            nothing(),
        );
        assert_eq!(
            evaluate(&expr),
            value(object(vec![("b", value(9)), ("a", value(7))]))
        );
    }

    #[test]
    fn test_composition_rewrites_existing_fields_in_place() {
        let input = value(object(vec![
            ("a", value(1)),
            ("b", value(2)),
            ("c", value(3)),
        ]));
        let expr = eval_path(
            compose(field("a", const_path(7)), field("b", const_path(9))),
            input,
        );
        assert_eq!(
            evaluate(&expr),
            value(object(vec![
                ("a", value(7)),
                ("b", value(9)),
                ("c", value(3)),
            ]))
        );
    }

    #[test]
    fn test_composition_with_keep() {
        let input = value(object(vec![
            ("a", value(1)),
            ("b", value(2)),
            ("c", value(3)),
        ]));
        let path = compose(
            compose(field("a", const_path(7)), field("b", const_path(9))),
            keep(["a", "b"]),
        );
        assert_eq!(
            evaluate(&eval_path(path, input)),
            value(object(vec![("a", value(7)), ("b", value(9))]))
        );
    }

    #[test]
    fn test_composition_is_associative() {
        let a = field("a", const_path(7));
        let b = drop(["c"]);
        let c = keep(["a"]);
        let input = value(object(vec![("b", value(2)), ("c", value(3))]));

        let left = compose(compose(a.clone(), b.clone()), c.clone());
        let right = compose(a, compose(b, c));
        assert_eq!(
            evaluate(&eval_path(left, input.clone())),
            evaluate(&eval_path(right, input))
        );
    }

    #[test]
    fn test_keep_and_drop_are_idempotent() {
        let input = value(object(vec![
            ("a", value(1)),
            ("b", value(2)),
            ("c", value(3)),
        ]));

        let once = evaluate(&eval_path(keep(["a", "c"]), input.clone()));
        let twice = evaluate(&eval_path(
            compose(keep(["a", "c"]), keep(["a", "c"])),
            input.clone(),
        ));
        assert_eq!(once, twice);

        let once = evaluate(&eval_path(drop(["b"]), input.clone()));
        let twice = evaluate(&eval_path(compose(drop(["b"]), drop(["b"])), input));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_get_after_field_round_trips() {
        let input = value(object(vec![("b", value(2))]));
        let expr = eval_path(
            compose(field("a", const_path(7)), get("a", id())),
            input,
        );
        assert_eq!(evaluate(&expr), value(7));
    }

    #[test]
    fn test_outputs_never_hold_nothing_fields() {
        // Rewriting every field to `Nothing` leaves an empty object, not an
        // object of `Nothing` fields.
        let input = value(object(vec![("a", value(1)), ("b", value(2))]));
        let path = compose(
            field("a", const_path(nothing())),
            field("b", const_path(nothing())),
        );
        assert_eq!(evaluate(&eval_path(path, input)), value(object(vec![])));
    }

    #[test]
    fn test_traverse_output_length_counts_non_nothing_results() {
        let input = Value::Array(vec![
            value(object(vec![("b", value(1))])),
            value(2),
            value(object(vec![("b", value(3))])),
        ]);
        let out = evaluate(&eval_path(traverse(get("b", id())), input));
        assert_eq!(out, value(vec![1, 3]));
    }
}
