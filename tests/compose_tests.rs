//! Folding optics through their composition monoids.
//!
//! `m_concat` over `LensCompose`, `PrismCompose`, `IsoCompose` and
//! `TraversalCombine` must behave exactly like the equivalent hand-written
//! chain, and the identity element must be neutral on both sides.

#![cfg(feature = "optics")]
#![forbid(unsafe_code)]

use monoptic::optics::{
    Iso, IsoCompose, Lens, LensCompose, Prism, PrismCompose, Segment, Traversal,
    TraversalCombine,
};
use monoptic::typeclass::{Monoid, Semigroup, Wrapper, m_append, m_concat};
use monoptic::value::Value;
use rstest::rstest;

fn invoice() -> Value {
    Value::map([
        (
            "billing",
            Value::map([
                (
                    "address",
                    Value::map([("city", Value::from("Osaka")), ("zip", Value::from("530"))]),
                ),
                ("phone", Value::from("06")),
            ]),
        ),
        ("total", Value::Int(1200)),
    ])
}

// =============================================================================
// LensCompose
// =============================================================================

#[rstest]
fn lens_fold_matches_explicit_chain() {
    let folded = m_concat::<LensCompose<Value>, _>([
        Lens::key("billing"),
        Lens::key("address"),
        Lens::key("city"),
    ]);
    let chained = Lens::<Value, Value>::key("billing")
        .compose(Lens::key("address"))
        .compose(Lens::key("city"));

    assert_eq!(folded.view(&invoice()), chained.view(&invoice()));
    assert_eq!(
        folded.set(invoice(), Value::from("Kobe")),
        chained.set(invoice(), Value::from("Kobe"))
    );
}

#[rstest]
fn empty_lens_fold_is_identity() {
    let identity = m_concat::<LensCompose<Value>, _>(Vec::new());
    assert_eq!(identity.view(&invoice()), Ok(invoice()));
    assert_eq!(identity.set(invoice(), Value::Null), Ok(Value::Null));
}

#[rstest]
fn lens_compose_identity_on_both_sides() {
    let city = LensCompose::wrap(Lens::<Value, Value>::path(["billing", "address", "city"]));
    let left = LensCompose::empty().combine(city.clone()).into_inner();
    let right = city.clone().combine(LensCompose::empty()).into_inner();
    let city = city.into_inner();

    assert_eq!(left.view(&invoice()), city.view(&invoice()));
    assert_eq!(right.view(&invoice()), city.view(&invoice()));
}

#[rstest]
fn lens_fold_propagates_violation_from_any_stage() {
    let folded = m_concat::<LensCompose<Value>, _>([
        Lens::key("billing"),
        Lens::key("shipping"),
        Lens::key("city"),
    ]);
    assert_eq!(
        folded.view(&invoice()).map_err(|error| error.key().to_string()),
        Err("shipping".to_string())
    );
}

// =============================================================================
// PrismCompose
// =============================================================================

#[rstest]
#[case(vec!["billing", "phone"], Some(Value::from("06")))]
#[case(vec!["billing", "fax"], None)]
#[case(vec!["total", "cents"], None)]
fn prism_fold_short_circuits(#[case] keys: Vec<&'static str>, #[case] expected: Option<Value>) {
    let folded = m_concat::<PrismCompose<Value>, _>(keys.into_iter().map(|key| Prism::key(key)));
    assert_eq!(folded.preview(&invoice()), expected);
}

#[rstest]
fn prism_fold_reviews_outward() {
    let folded = m_concat::<PrismCompose<Value>, _>([
        Segment::tagged("Order", "payment").into_prism(),
        Segment::key("amount").into_prism(),
    ]);
    assert_eq!(
        folded.review(Value::Int(3)),
        Value::record("Order", [("payment", Value::map([("amount", 3)]))])
    );
}

#[rstest]
fn m_append_composes_two_prisms() {
    let folded = m_append::<PrismCompose<Value>>(Prism::key("billing"), Prism::key("phone"));
    assert_eq!(folded.preview(&invoice()), Some(Value::from("06")));
}

// =============================================================================
// IsoCompose
// =============================================================================

#[rstest]
fn iso_fold_applies_in_order_and_reverses_backwards() {
    let add_one = Iso::new(|value: i64| value + 1, |value: i64| value - 1);
    let double = Iso::new(|value: i64| value * 2, |value: i64| value / 2);
    let folded = m_concat::<IsoCompose<i64>, _>([add_one, double]);

    assert_eq!(folded.view(3), 8);
    assert_eq!(folded.review(8), 3);
}

#[rstest]
fn empty_iso_fold_is_identity() {
    let identity = m_concat::<IsoCompose<String>, _>(Vec::new());
    assert_eq!(identity.view("same".to_string()), "same");
    assert_eq!(identity.review("same".to_string()), "same");
}

// =============================================================================
// TraversalCombine
// =============================================================================

#[rstest]
fn traversal_fold_concatenates_foci() {
    let folded = m_concat::<TraversalCombine<Value, Value>, _>([
        Traversal::combine([Prism::<Value, Value>::key("total")]),
        Traversal::empty(),
        Traversal::combine([
            Prism::<Value, Value>::path(["billing", "phone"]),
            Prism::<Value, Value>::key("discount"),
        ]),
    ]);

    assert_eq!(folded.len(), 3);
    assert_eq!(
        folded.to_list(&invoice()),
        Ok(vec![Value::Int(1200), Value::from("06")])
    );
}

#[rstest]
fn traversal_combine_is_associative_on_reads() {
    let first = TraversalCombine::wrap(Lens::<Value, Value>::key("total").to_traversal());
    let second = TraversalCombine::wrap(Prism::<Value, Value>::key("billing").to_traversal());
    let third = TraversalCombine::wrap(Prism::<Value, Value>::key("missing").to_traversal());

    let left = first
        .clone()
        .combine(second.clone())
        .combine(third.clone())
        .into_inner();
    let right = first.combine(second.combine(third)).into_inner();

    assert_eq!(left.to_list(&invoice()), right.to_list(&invoice()));
    assert_eq!(left.len(), right.len());
}

#[rstest]
fn traversal_combine_identity_on_both_sides() {
    let total = TraversalCombine::wrap(Lens::<Value, Value>::key("total").to_traversal());
    let left = TraversalCombine::empty().combine(total.clone()).into_inner();
    let right = total.combine(TraversalCombine::empty()).into_inner();

    assert_eq!(left.to_list(&invoice()), Ok(vec![Value::Int(1200)]));
    assert_eq!(right.to_list(&invoice()), Ok(vec![Value::Int(1200)]));
    assert_eq!(left.len(), 1);
}
