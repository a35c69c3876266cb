use chrono::{NaiveDate, NaiveDateTime};
use snapql_core::{CommitId, QueryParams, QueryParamsBuilder};

/// Build a timestamp on the given day at noon
#[allow(dead_code)]
pub fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid test date")
}

/// Params with every field the builder can set populated
#[allow(dead_code)]
pub fn fully_populated_params() -> QueryParams {
    QueryParamsBuilder::with_limit(25)
        .expect("positive limit")
        .skip(5)
        .expect("non-negative skip")
        .from(noon(2024, 1, 1))
        .to(noon(2024, 6, 30))
        .version(3)
        .commit_ids([CommitId::new(1, 0), CommitId::new(2, 0)])
        .to_commit_id(CommitId::new(9, 0))
        .author("alice")
        .commit_property("env", "prod")
        .with_child_value_objects(true)
        .new_object_changes(true)
        .changed_property("price")
        .build()
}
