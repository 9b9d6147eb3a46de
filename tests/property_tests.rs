//! Property tests for the comparator.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use structure_match::structure::{canonicalize, compare_structures};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..6)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

/// Reverse every array at every depth
fn reverse_arrays(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().rev().map(reverse_arrays).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), reverse_arrays(v)))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn prop_reflexive(value in arb_json()) {
        let result = compare_structures(&value, &value);
        prop_assert!(result.structure_is_identical);
        prop_assert!(result.changed_properties().is_empty());
    }

    #[test]
    fn prop_root_permutation_is_identical(
        (items, shuffled) in prop::collection::vec(arb_json(), 0..8)
            .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
    ) {
        let result = compare_structures(&Value::Array(items), &Value::Array(shuffled));
        prop_assert!(result.structure_is_identical);
        prop_assert!(result.changed_properties().is_empty());
    }

    #[test]
    fn prop_nested_reordering_is_identical(value in arb_json()) {
        let result = compare_structures(&value, &reverse_arrays(&value));
        prop_assert!(result.structure_is_identical);
    }

    #[test]
    fn prop_exactly_one_outcome_field(a in arb_json(), b in arb_json()) {
        let result = compare_structures(&a, &b);
        prop_assert_eq!(result.properties_changed.is_some(), result.structure_is_identical);
        prop_assert_eq!(result.path_where_structure_differs.is_some(), !result.structure_is_identical);
    }

    #[test]
    fn prop_verdict_is_symmetric(a in arb_json(), b in arb_json()) {
        prop_assert_eq!(
            compare_structures(&a, &b).structure_is_identical,
            compare_structures(&b, &a).structure_is_identical
        );
    }

    #[test]
    fn prop_extra_key_is_reported(
        fields in prop::collection::btree_map("[a-z]{1,4}", arb_json(), 0..6)
    ) {
        let baseline = Value::Object(fields.clone().into_iter().collect());
        let mut extended: Map<String, Value> = fields.into_iter().collect();
        extended.insert("EXTRA".to_string(), Value::Null);

        let result = compare_structures(&baseline, &Value::Object(extended));
        prop_assert_eq!(result.divergence(), Some("EXTRA"));
    }

    #[test]
    fn prop_canonicalize_is_order_independent(value in arb_json()) {
        prop_assert_eq!(canonicalize(&value), canonicalize(&reverse_arrays(&value)));
    }

    #[test]
    fn prop_divergence_is_deterministic(a in arb_json(), b in arb_json()) {
        prop_assert_eq!(compare_structures(&a, &b), compare_structures(&a, &b));
    }
}
