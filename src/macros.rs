/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use html_table::{value, Value};
///
/// let item = value!({
///     "id": 1,
///     "name": "Widget",
///     "tags": ["a", "b"],
///     "discount": null
/// });
/// assert_eq!(item.get("discount"), Some(&Value::Null));
/// ```
///
/// Any other expression is converted with [`to_value`](crate::to_value). A
/// value that fails to serialize (for instance a tuple enum variant) becomes
/// `Value::Null`; call `to_value` directly to see the error.
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // any other expression goes through serde
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Map, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_nesting() {
        assert_eq!(value!({}), Value::Object(Map::new()));
        assert_eq!(value!([]), Value::Array(vec![]));

        let obj = value!({
            "row": { "id": 1 },
            "list": [1, "two", null]
        });
        assert_eq!(obj.get("row").and_then(|r| r.get("id")), Some(&Value::from(1)));
        assert_eq!(
            obj.get("list"),
            Some(&Value::Array(vec![Value::from(1), Value::from("two"), Value::Null]))
        );
    }

    #[test]
    fn test_value_macro_expressions() {
        let name = String::from("dynamic");
        assert_eq!(value!(name), Value::from("dynamic"));
    }

    #[test]
    fn test_value_macro_unserializable_is_null() {
        #[derive(serde::Serialize)]
        enum Pair {
            Both(u8, u8),
        }
        assert_eq!(value!(Pair::Both(1, 2)), Value::Null);
    }
}
