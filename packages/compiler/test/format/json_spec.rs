/**
 * Deterministic JSON Serializer Tests
 */
use chrono::TimeDelta;
use indexmap::indexmap;
use reflow_compiler::format::json::json_dumps;
use reflow_compiler::Value;

#[test]
fn should_serialize_every_json_native_shape() {
    let cases: Vec<(Value, &str)> = vec![
        (Value::Null, "null"),
        (true.into(), "true"),
        (1.into(), "1"),
        (1.0.into(), "1.0"),
        (Value::List(vec![]), "[]"),
        (Value::List(vec![1.into(), 2.into(), 3.into()]), "[1, 2, 3]"),
        (Value::Map(indexmap! {}), "{}"),
        (
            Value::Map(indexmap! {
                "k1".to_string() => Value::from(false),
                "k2".to_string() => Value::from(true),
            }),
            r#"{"k1": false, "k2": true}"#,
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(json_dumps(&value), expected, "json_dumps({:?})", value);
    }
}

#[test]
fn should_quote_strings_with_json_escapes() {
    assert_eq!(json_dumps(&Value::from("hello")), r#""hello""#);
    assert_eq!(
        json_dumps(&Value::from("say \"hi\"\n")),
        r#""say \"hi\"\n""#
    );
}

#[test]
fn should_serialize_durations_as_canonical_strings() {
    let one = TimeDelta::days(1) + TimeDelta::seconds(1) + TimeDelta::microseconds(1);
    let two = TimeDelta::days(1) + TimeDelta::seconds(1) + TimeDelta::microseconds(2);

    assert_eq!(
        json_dumps(&Value::List(vec![
            Value::Duration(one),
            Value::Duration(two)
        ])),
        r#"["1 day, 0:00:01.000001", "1 day, 0:00:01.000002"]"#
    );
    assert_eq!(
        json_dumps(&Value::Map(indexmap! {
            "key1".to_string() => Value::Duration(one),
            "key2".to_string() => Value::Duration(two),
        })),
        r#"{"key1": "1 day, 0:00:01.000001", "key2": "1 day, 0:00:01.000002"}"#
    );
}

#[test]
fn should_keep_float_map_values_pointed() {
    let value = Value::Map(indexmap! {
        "sum".to_string() => Value::from(3.0),
        "num2".to_string() => Value::from(3.14),
    });
    assert_eq!(json_dumps(&value), r#"{"sum": 3.0, "num2": 3.14}"#);
}
