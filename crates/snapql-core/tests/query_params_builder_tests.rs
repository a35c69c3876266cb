#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use proptest::prelude::*;
use snapql_core::errors::{ExError, ExErrorKind, QueryError};
use snapql_core::{CommitId, QueryParams, QueryParamsBuilder};

use common::{fully_populated_params, noon};

#[test]
fn test_with_limit_rejects_zero_and_negative() {
    for limit in [0, -5] {
        let err = QueryParamsBuilder::with_limit(limit).unwrap_err();
        assert!(
            matches!(err, QueryError::Validation { argument: "limit", .. }),
            "limit {} should be rejected, got {:?}",
            limit,
            err
        );
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), ExErrorKind::Validation);
    }
}

#[test]
fn test_with_limit_one_succeeds() {
    let params = QueryParamsBuilder::with_limit(1).unwrap().build();
    assert_eq!(params.limit(), 1);
}

#[test]
fn test_every_setter_reaches_built_params() {
    let params = fully_populated_params();

    assert_eq!(params.limit(), 25);
    assert_eq!(params.skip(), 5);
    assert_eq!(params.from(), Some(noon(2024, 1, 1)));
    assert_eq!(params.to(), Some(noon(2024, 6, 30)));
    assert_eq!(params.version(), Some(3));
    assert_eq!(params.to_commit_id(), Some(CommitId::new(9, 0)));
    assert_eq!(params.author(), Some("alice"));
    assert!(params.aggregate());
    assert!(params.new_object_changes());
    assert_eq!(params.changed_property(), Some("price"));
    assert_eq!(
        params.commit_properties().get("env").map(String::as_str),
        Some("prod")
    );
}

#[test]
fn test_flags_can_be_switched_back_off() {
    let params = QueryParamsBuilder::with_limit(10)
        .unwrap()
        .with_child_value_objects(true)
        .new_object_changes(true)
        .with_child_value_objects(false)
        .new_object_changes(false)
        .build();

    assert!(!params.aggregate());
    assert!(!params.new_object_changes());
}

#[test]
fn test_initialize_with_copies_the_documented_subset() {
    let original = fully_populated_params();

    let copy = QueryParamsBuilder::initialize_with(&original)
        .unwrap()
        .build();

    assert_eq!(copy.limit(), original.limit());
    assert_eq!(copy.skip(), original.skip());
    assert_eq!(copy.from(), original.from());
    assert_eq!(copy.to(), original.to());
    assert_eq!(copy.version(), Some(3));
    assert_eq!(copy.commit_ids(), original.commit_ids());

    // everything else starts over, though the original carries it
    assert!(original.aggregate() && original.new_object_changes());
    assert!(original.author().is_some() && original.changed_property().is_some());
    assert_eq!(copy.author(), None);
    assert!(copy.commit_properties().is_empty());
    assert!(!copy.aggregate());
    assert!(!copy.new_object_changes());
    assert_eq!(copy.changed_property(), None);
    assert_eq!(copy.to_commit_id(), None);
}

#[test]
fn test_initialize_with_does_not_alias_commit_ids() {
    let original = QueryParamsBuilder::with_limit(10)
        .unwrap()
        .commit_id(CommitId::new(1, 0))
        .build();

    let derived = QueryParamsBuilder::initialize_with(&original)
        .unwrap()
        .commit_id(CommitId::new(2, 0))
        .commit_id(CommitId::new(3, 0))
        .build();

    assert_eq!(original.commit_ids().len(), 1);
    assert_eq!(derived.commit_ids().len(), 3);
}

#[test]
fn test_initialize_with_absent_params() {
    let err = QueryParamsBuilder::initialize_with(None::<&QueryParams>).unwrap_err();
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::NullArgument);
    assert_eq!(ex_err.code(), "ERR_NULL_ARGUMENT");
    assert_eq!(ex_err.argument(), Some("query_params"));
}

#[test]
fn test_commit_id_is_idempotent() {
    let id = CommitId::new(4, 0);
    let params = QueryParamsBuilder::with_limit(10)
        .unwrap()
        .commit_id(id)
        .commit_id(id)
        .build();

    assert_eq!(params.commit_ids().len(), 1);
    assert!(params.commit_ids().contains(&id));
}

#[test]
fn test_commit_ids_merge_with_single_adds() {
    let params = QueryParamsBuilder::with_limit(10)
        .unwrap()
        .commit_id(CommitId::new(1, 0))
        .commit_ids(vec![CommitId::new(1, 0), CommitId::new(1, 1)])
        .build();

    let ids: Vec<_> = params.commit_ids().iter().copied().collect();
    assert_eq!(ids, vec![CommitId::new(1, 0), CommitId::new(1, 1)]);
}

#[test]
fn test_commit_property_last_write_wins() {
    let params = QueryParamsBuilder::with_limit(10)
        .unwrap()
        .commit_property("env", "prod")
        .commit_property("env", "staging")
        .build();

    assert_eq!(params.commit_properties().len(), 1);
    assert_eq!(
        params.commit_properties().get("env").map(String::as_str),
        Some("staging")
    );
}

#[test]
fn test_skip_negative_rejected_even_with_valid_limit() {
    let err = QueryParamsBuilder::with_limit(10)
        .unwrap()
        .skip(-3)
        .unwrap_err();
    assert!(matches!(err, QueryError::Validation { argument: "skip", .. }));
}

#[test]
fn test_time_bounds_are_independent() {
    // no ordering check between from and to
    let params = QueryParamsBuilder::with_limit(10)
        .unwrap()
        .from(noon(2024, 12, 31))
        .to(noon(2024, 1, 1))
        .build();

    assert_eq!(params.from(), Some(noon(2024, 12, 31)));
    assert_eq!(params.to(), Some(noon(2024, 1, 1)));
    assert!(params.has_narrowing());
}

#[test]
fn test_later_mutation_never_reaches_built_params() {
    let builder = QueryParamsBuilder::with_limit(10)
        .unwrap()
        .commit_property("env", "prod")
        .commit_id(CommitId::new(1, 0));
    let built = builder.build();

    let _changed = builder
        .commit_property("env", "staging")
        .commit_property("region", "eu")
        .commit_id(CommitId::new(2, 0))
        .author("bob")
        .build();

    assert_eq!(built.commit_properties().len(), 1);
    assert_eq!(
        built.commit_properties().get("env").map(String::as_str),
        Some("prod")
    );
    assert_eq!(built.commit_ids().len(), 1);
    assert_eq!(built.author(), None);
}

#[test]
fn test_built_params_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryParams>();

    let params = std::sync::Arc::new(fully_populated_params());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let params = params.clone();
            std::thread::spawn(move || params.commit_ids().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

#[test]
fn test_params_serialize_for_engine_handoff() {
    let json = serde_json::to_value(fully_populated_params()).unwrap();
    assert_eq!(json["limit"], 25);
    assert_eq!(json["skip"], 5);
    assert_eq!(json["commit_ids"], serde_json::json!(["1.0", "2.0"]));
    assert_eq!(json["to_commit_id"], "9.0");
    assert_eq!(json["commit_properties"]["env"], "prod");
    assert_eq!(json["version"], 3);
    assert_eq!(json["author"], "alice");
    assert_eq!(json["aggregate"], true);
    assert_eq!(json["new_object_changes"], true);
    assert_eq!(json["changed_property"], "price");
}

proptest! {
    #[test]
    fn prop_positive_limit_round_trips(limit in 1i64..=1_000_000) {
        let params = QueryParamsBuilder::with_limit(limit).unwrap().build();
        prop_assert_eq!(params.limit() as i64, limit);
    }

    #[test]
    fn prop_non_positive_limit_rejected(limit in i64::MIN..=0) {
        prop_assert!(QueryParamsBuilder::with_limit(limit).is_err());
    }

    #[test]
    fn prop_commit_ids_deduplicate(majors in proptest::collection::vec(0u64..20, 0..40)) {
        let builder = majors.iter().fold(
            QueryParamsBuilder::with_limit(10).unwrap(),
            |b, major| b.commit_id(CommitId::new(*major, 0)),
        );
        let distinct: std::collections::BTreeSet<_> = majors.iter().collect();
        prop_assert_eq!(builder.build().commit_ids().len(), distinct.len());
    }
}
