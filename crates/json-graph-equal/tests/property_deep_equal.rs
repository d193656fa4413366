//! Randomized structural properties over acyclic documents.
//!
//! For trees (no shared handles, no cycles) the engine must agree with
//! plain `serde_json::Value` equality, which makes that equality a handy
//! oracle.

use json_graph_equal::deep_equal_json;
use proptest::prelude::*;
use serde_json::Value;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        // Finite floats only: non-finite ones have no JSON representation.
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{0,4}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn reflexive(v in arb_json()) {
        prop_assert!(deep_equal_json(&v, &v));
    }

    #[test]
    fn symmetric(a in arb_json(), b in arb_json()) {
        prop_assert_eq!(deep_equal_json(&a, &b), deep_equal_json(&b, &a));
    }

    #[test]
    fn agrees_with_tree_equality(a in arb_json(), b in arb_json()) {
        prop_assert_eq!(deep_equal_json(&a, &b), a == b);
    }

    #[test]
    fn sensitive_to_appended_elements(v in arb_json()) {
        let a = Value::Array(vec![v.clone()]);
        let b = Value::Array(vec![v, Value::Null]);
        prop_assert!(!deep_equal_json(&a, &b));
    }
}
