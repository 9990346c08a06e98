use serde_json::{Number, Value};

/// Performs a deep equality check between two JSON values.
///
/// Maps compare without regard to key order, sequences element by element,
/// numbers by numeric value (`1` equals `1.0`).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_patch_duplex_util::json_equal::deep_equal;
///
/// let a = json!({"foo": [1, 2, 3], "bar": null});
/// let b = json!({"bar": null, "foo": [1, 2, 3]});
/// let c = json!({"foo": [1, 2, 4], "bar": null});
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => deep_equal(val_a, val_b),
                None => false,
            })
        }
        _ => scalar_equal(a, b),
    }
}

/// Shallow comparison used by the differ.
///
/// Scalars compare like [`deep_equal`]. A container is never loosely equal
/// to anything, not even an identical container: the differ recurses into
/// containers of the same kind instead of comparing them here.
///
/// ```
/// use serde_json::json;
/// use json_patch_duplex_util::json_equal::loose_equal;
///
/// assert!(loose_equal(&json!(1), &json!(1.0)));
/// assert!(!loose_equal(&json!(1), &json!("1")));
/// assert!(!loose_equal(&json!([]), &json!([])));
/// ```
pub fn loose_equal(a: &Value, b: &Value) -> bool {
    scalar_equal(a, b)
}

fn scalar_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a == b {
        return true;
    }
    if a.is_f64() || b.is_f64() {
        return match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        };
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_numbers() {
        assert!(deep_equal(&json!(1), &json!(1)));
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!(-3), &json!(-3.0)));
    }

    #[test]
    fn test_not_equal_numbers() {
        assert!(!deep_equal(&json!(1), &json!(2)));
        assert!(!deep_equal(&json!(1), &json!(1.5)));
    }

    #[test]
    fn test_number_and_array_not_equal() {
        assert!(!deep_equal(&json!(1), &json!([])));
    }

    #[test]
    fn test_zero_and_null_not_equal() {
        assert!(!deep_equal(&json!(0), &json!(null)));
    }

    #[test]
    fn test_empty_string_and_null_not_equal() {
        assert!(!deep_equal(&json!(""), &json!(null)));
    }

    #[test]
    fn test_one_and_true_not_equal() {
        assert!(!deep_equal(&json!(1), &json!(true)));
    }

    #[test]
    fn test_equal_objects_different_order() {
        assert!(deep_equal(
            &json!({"a": 1, "b": "2"}),
            &json!({"b": "2", "a": 1})
        ));
    }

    #[test]
    fn test_not_equal_objects_extra_property() {
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_not_equal_objects_different_properties() {
        assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn test_empty_object_and_array_not_equal() {
        assert!(!deep_equal(&json!({}), &json!([])));
    }

    #[test]
    fn test_not_equal_arrays_different_length() {
        assert!(!deep_equal(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn test_array_order_matters() {
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
    }

    #[test]
    fn test_equal_arrays_of_objects() {
        assert!(deep_equal(
            &json!([{"a": [null, true]}, {"b": {}}]),
            &json!([{"a": [null, true]}, {"b": {}}])
        ));
    }

    #[test]
    fn loose_equal_scalars() {
        assert!(loose_equal(&json!(null), &json!(null)));
        assert!(loose_equal(&json!("x"), &json!("x")));
        assert!(!loose_equal(&json!(0), &json!(false)));
        assert!(!loose_equal(&json!(null), &json!({})));
    }

    #[test]
    fn loose_equal_containers_never_equal() {
        assert!(!loose_equal(&json!({}), &json!({})));
        assert!(!loose_equal(&json!([1]), &json!([1])));
    }
}
