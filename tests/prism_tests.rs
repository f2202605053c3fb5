//! Integration tests for Prism optics.
//!
//! Tests cover:
//! - enum variant prisms built with `prism!` and `Prism::new`
//! - optional keys, record tags and tagged path segments on `Value`
//! - short-circuiting composition and outward review
//! - writing back through key prisms

#![cfg(feature = "optics")]
#![forbid(unsafe_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use monoptic::optics::{Prism, Segment};
use monoptic::prism;
use monoptic::value::Value;
use rstest::rstest;

// =============================================================================
// Test Data
// =============================================================================

#[allow(dead_code)]
#[derive(Clone, PartialEq, Debug)]
enum Payment {
    Card(u64),
    Check(u64),
    Cash,
}

fn card_transaction(amount: i64) -> Value {
    Value::record(
        "Charge",
        [(
            "payment",
            Value::record("CreditCard", [("amount", amount)]),
        )],
    )
}

fn check_transaction(amount: i64) -> Value {
    Value::record(
        "Charge",
        [("payment", Value::record("Check", [("amount", amount)]))],
    )
}

fn card_amount() -> Prism<Value, Value> {
    Prism::path([
        Segment::tagged("Charge", "payment"),
        Segment::tagged("CreditCard", "amount"),
    ])
}

// =============================================================================
// Enum Prisms
// =============================================================================

#[rstest]
#[case(Payment::Card(10), Some(10))]
#[case(Payment::Check(10), None)]
#[case(Payment::Cash, None)]
fn variant_prism_preview(#[case] payment: Payment, #[case] expected: Option<u64>) {
    assert_eq!(prism!(Payment, Card).preview(&payment), expected);
}

#[rstest]
fn variant_prism_review_and_over() {
    let card = prism!(Payment, Card);
    assert_eq!(card.review(5), Payment::Card(5));
    assert_eq!(card.over(Payment::Card(5), |cents| cents * 3), Some(Payment::Card(15)));
    assert_eq!(card.over(Payment::Cash, |cents| cents * 3), None);
    assert_eq!(card.over_or_identity(Payment::Cash, |cents| cents * 3), Payment::Cash);
}

// =============================================================================
// Domain Boundaries
// =============================================================================

#[rstest]
fn tagged_path_distinguishes_variants() {
    assert_eq!(card_amount().preview(&card_transaction(100)), Some(Value::Int(100)));
    assert_eq!(card_amount().preview(&check_transaction(100)), None);
}

#[rstest]
fn key_absent_and_wrong_variant_both_miss() {
    let untagged = Value::map([("payment", Value::map([("amount", 100)]))]);
    let no_payment = Value::record("Charge", [("memo", "x")]);

    assert_eq!(card_amount().preview(&untagged), None);
    assert_eq!(card_amount().preview(&no_payment), None);
    assert_eq!(card_amount().preview(&Value::Null), None);
}

#[rstest]
fn record_prism_matches_tag_only() {
    let check = Prism::record("Check");
    let payment = Prism::<Value, Value>::key("payment").compose(check);

    assert!(payment.matches(&check_transaction(1)));
    assert!(!payment.matches(&card_transaction(1)));
}

#[rstest]
fn tagged_path_review_builds_records() {
    assert_eq!(card_amount().review(Value::Int(5)), card_transaction(5));
}

#[rstest]
fn tagged_path_over_rebuilds_in_place() {
    let transaction = Value::record(
        "Charge",
        [
            ("payment", Value::record("CreditCard", [("amount", 100)])),
            ("memo", Value::from("lunch")),
        ],
    );
    let doubled = card_amount()
        .over(transaction, |amount| Value::Int(amount.as_int().unwrap_or_default() * 2))
        .expect("card transaction");

    assert_eq!(card_amount().preview(&doubled), Some(Value::Int(200)));
    assert_eq!(
        Prism::<Value, Value>::key("memo").preview(&doubled),
        Some(Value::from("lunch"))
    );
    assert_eq!(doubled.tag(), Some("Charge"));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn compose_short_circuits_on_outer_miss() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let counting = Prism::new(
        move |value: &Value| {
            counter.fetch_add(1, Ordering::SeqCst);
            Some(value.clone())
        },
        |value| value,
    );
    let composed = Prism::<Value, Value>::key("outer").compose(counting);

    assert_eq!(composed.preview(&Value::map([("other", 1)])), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(composed.preview(&Value::map([("outer", 1)])), Some(Value::Int(1)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn identity_prism_is_neutral_for_compose() {
    let source = card_transaction(3);
    let left = Prism::<Value, Value>::identity().compose(card_amount());
    let right = card_amount().compose(Prism::identity());

    assert_eq!(left.preview(&source), card_amount().preview(&source));
    assert_eq!(right.preview(&source), card_amount().preview(&source));
    assert_eq!(left.review(Value::Int(1)), card_amount().review(Value::Int(1)));
}

#[rstest]
fn empty_path_matches_everything() {
    let everything = Prism::path(Vec::<Segment>::new());
    assert_eq!(everything.preview(&Value::Int(1)), Some(Value::Int(1)));
}

#[rstest]
fn custom_set_is_used_for_write_back() {
    let first_char = Prism::new(
        |text: &String| text.chars().next(),
        |character: char| character.to_string(),
    )
    .with_set(|text: String, character| {
        let mut rest: String = text.chars().skip(1).collect();
        rest.insert(0, character);
        rest
    });

    assert_eq!(first_char.set("hello".to_string(), 'j'), "jello");
    assert_eq!(first_char.review('j'), "j");
    assert_eq!(first_char.over(String::new(), |character| character), None);
}
