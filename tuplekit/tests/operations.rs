//! End-to-end checks of the runtime operations on heterogeneous JSON
//! sequences and on sequences long enough to overflow a recursive walk.

use serde_json::json;
use tuplekit::core::ops::{
    append, concat, concat_multiple, first, last, last_or, repeat, repeat_with, reverse,
};
use tuplekit::test_support::{ints, json_seq, nested};
use tuplekit::{Limits, Sequence, TupleError, seq};

const LONG: i64 = 200_000;

#[test]
fn documented_examples_hold() {
    let s = json_seq(json!([0, 1, 2]));
    assert_eq!(first(&s), Ok(&json!(0)));
    assert_eq!(last(&s), Ok(&json!(2)));
    assert_eq!(append(&s, json!("new")), json_seq(json!([0, 1, 2, "new"])));
    assert_eq!(reverse(&s), json_seq(json!([2, 1, 0])));
    assert_eq!(
        concat(&s, &json_seq(json!(["a", "b", "c"]))),
        json_seq(json!([0, 1, 2, "a", "b", "c"]))
    );
    assert_eq!(
        repeat(json!("foo"), 4).expect("repeat"),
        json_seq(json!(["foo", "foo", "foo", "foo"]))
    );
    assert_eq!(
        concat_multiple(&nested(vec![vec![], vec![0], vec![1, 2], vec![3, 4, 5]])),
        ints(0..6)
    );
}

#[test]
fn empty_inputs_surface_errors_or_defaults() {
    let empty: Sequence<serde_json::Value> = Sequence::new();
    assert_eq!(
        first(&empty),
        Err(TupleError::EmptySequence { operation: "first" })
    );
    assert_eq!(
        last(&empty),
        Err(TupleError::EmptySequence { operation: "last" })
    );
    assert_eq!(last_or(&empty, json!(null)), json!(null));
    assert!(reverse(&empty).is_empty());
    assert!(concat_multiple(&Sequence::<Sequence<u8>>::new()).is_empty());
}

#[test]
fn long_sequences_do_not_exhaust_the_stack() {
    let long = ints(0..LONG);
    assert_eq!(last(&long), Ok(&(LONG - 1)));
    assert_eq!(first(&reverse(&long)), Ok(&(LONG - 1)));
    assert_eq!(last(&append(&long, -1)), Ok(&-1));
    assert_eq!(concat(&long, &long).len(), 2 * LONG as usize);

    let copies = repeat_with('x', LONG, &Limits { max_repeat: LONG as usize }).expect("repeat");
    assert_eq!(copies.len(), LONG as usize);
}

#[test]
fn many_small_members_flatten() {
    let set: Sequence<Sequence<i64>> = (0..10_000).map(|n| seq![n]).collect();
    assert_eq!(concat_multiple(&set), ints(0..10_000));
}

#[test]
fn repeat_limit_comes_from_config() {
    let limits = Limits::from_toml_str("max_repeat = 2").expect("parse");
    assert_eq!(
        repeat_with(1, 3u8, &limits),
        Err(TupleError::CountLimitExceeded { count: 3, limit: 2 })
    );
    assert!(matches!(
        repeat(1, -1),
        Err(TupleError::InvalidCount { .. })
    ));
}

#[test]
fn sequences_serialize_as_json_arrays() {
    let joined = concat(&json_seq(json!([1, "two"])), &json_seq(json!([{ "three": 3 }])));
    let encoded = serde_json::to_string(&joined).expect("serialize");
    assert_eq!(encoded, r#"[1,"two",{"three":3}]"#);
    let decoded: Sequence<serde_json::Value> = serde_json::from_str(&encoded).expect("parse");
    assert_eq!(decoded, joined);
}
