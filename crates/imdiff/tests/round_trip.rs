mod common;

use imdiff::{diff, DiffOptions};
use proptest::prelude::*;
use serde_json::{json, Value};

use common::apply;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-5i64..5).prop_map(|n| json!(n)),
        "[a-c~/]{0,2}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-d~/]{0,2}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_options() -> impl Strategy<Value = DiffOptions> {
    prop_oneof![
        Just(DiffOptions::default()),
        Just(DiffOptions::replace_sequences()),
        Just(DiffOptions::identify_by("a")),
        // Forces the positional fallback for every sequence.
        Just(DiffOptions::default().with_alignment_limit(1)),
        Just(DiffOptions::identify_by("b").with_alignment_limit(8)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn applying_the_patch_reproduces_the_target(
        a in arb_json(),
        b in arb_json(),
        opts in arb_options(),
    ) {
        let patch = diff(&a, &b, &opts);
        prop_assert_eq!(apply(a, &patch).unwrap(), b);
    }

    #[test]
    fn equal_values_produce_no_operations(a in arb_json(), opts in arb_options()) {
        prop_assert!(diff(&a, &a.clone(), &opts).is_empty());
    }

    #[test]
    fn null_against_anything_is_a_root_replace(x in arb_json()) {
        prop_assume!(!x.is_null());
        let patch = diff(&Value::Null, &x, &DiffOptions::default());
        prop_assert_eq!(patch.ops, vec![imdiff::PatchOp::replace("", x.clone())]);
        let patch = diff(&x, &Value::Null, &DiffOptions::default());
        prop_assert_eq!(patch.ops, vec![imdiff::PatchOp::replace("", Value::Null)]);
    }

    #[test]
    fn sequence_edits_round_trip(
        a in prop::collection::vec(0u8..4, 0..20),
        b in prop::collection::vec(0u8..4, 0..20),
    ) {
        let (a, b) = (json!(a), json!(b));
        let patch = diff(&a, &b, &DiffOptions::default());
        prop_assert_eq!(apply(a, &patch).unwrap(), b);
    }
}
