//! JSON round trips for the serializable types.

#![cfg(all(feature = "serde", feature = "optics", feature = "monad"))]

use monoptic::monad::Either;
use monoptic::optics::{Prism, Segment};
use monoptic::typeclass::{Max, Sum};
use monoptic::value::{Record, Value};
use rstest::rstest;

fn charge() -> Value {
    Value::record(
        "Charge",
        [
            ("payment", Value::record("CreditCard", [("amount", 1250)])),
            ("memo", Value::from("books")),
            (
                "tags",
                Value::List(vec![Value::from("online"), Value::Bool(true), Value::Null]),
            ),
            ("rate", Value::Float(0.25)),
        ],
    )
}

#[rstest]
#[case(Value::Null)]
#[case(Value::Int(-3))]
#[case(Value::map([("a", Value::map([("b", 2)]))]))]
#[case(charge())]
fn value_round_trips(#[case] value: Value) {
    let json = serde_json::to_string(&value).expect("serializable");
    let decoded: Value = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(decoded, value);
}

#[rstest]
fn decoded_value_keeps_record_tags_for_prisms() {
    let json = serde_json::to_string(&charge()).expect("serializable");
    let decoded: Value = serde_json::from_str(&json).expect("deserializable");
    let amount = Prism::path([
        Segment::tagged("Charge", "payment"),
        Segment::tagged("CreditCard", "amount"),
    ]);

    assert_eq!(amount.preview(&decoded), Some(Value::Int(1250)));
}

#[rstest]
fn record_round_trips() {
    let record = Record::new("Check").with("number", 42).with("memo", "rent");
    let json = serde_json::to_string(&record).expect("serializable");
    assert_eq!(serde_json::from_str::<Record>(&json).expect("deserializable"), record);
}

#[rstest]
fn either_round_trips() {
    let values: Vec<Either<String, i32>> = vec![Either::Left("bad".to_string()), Either::Right(7)];
    let json = serde_json::to_string(&values).expect("serializable");
    let decoded: Vec<Either<String, i32>> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(decoded, values);
}

#[rstest]
fn wrappers_serialize_transparently_as_newtypes() {
    assert_eq!(serde_json::to_string(&Sum(3)).expect("serializable"), "3");
    assert_eq!(
        serde_json::from_str::<Max<i64>>("9").expect("deserializable"),
        Max(9)
    );
}
