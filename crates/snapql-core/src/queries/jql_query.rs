//! Typed filter-chain query

use crate::model::Filter;
use serde::Serialize;
use std::fmt;

/// Immutable query: an ordered, non-empty filter chain plus pagination
///
/// The first filter is the anchor establishing the query's scope; later
/// filters narrow it. Only `QueryBuilder::build` creates values of this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JqlQuery {
    filters: Vec<Filter>,
    new_object_changes: bool,
    limit: usize,
}

impl JqlQuery {
    /// Callers guarantee `filters` is non-empty.
    pub(crate) fn new(filters: Vec<Filter>, new_object_changes: bool, limit: usize) -> Self {
        debug_assert!(!filters.is_empty(), "JqlQuery needs an anchor filter");
        Self {
            filters,
            new_object_changes,
            limit,
        }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// The anchor filter
    pub fn anchor(&self) -> &Filter {
        // non-empty by construction
        &self.filters[0]
    }

    /// Names from the property filters, in insertion order
    pub fn property_filters(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().filter_map(Filter::property_name)
    }

    /// Whether object-creation changes are returned
    pub fn new_object_changes(&self) -> bool {
        self.new_object_changes
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl fmt::Display for JqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JqlQuery {{ filters: [")?;
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", filter)?;
        }
        write!(
            f,
            "], newObjectChanges: {}, limit: {} }}",
            self.new_object_changes, self.limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_first_filter() {
        let query = JqlQuery::new(
            vec![
                Filter::Class {
                    required_type: "Person".into(),
                },
                Filter::Property {
                    property_name: "name".to_string(),
                },
            ],
            false,
            10,
        );
        assert_eq!(query.anchor().kind(), crate::model::FilterKind::Class);
        assert_eq!(query.property_filters().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "anchor filter")]
    fn test_new_rejects_empty_filter_chain() {
        let _ = JqlQuery::new(Vec::new(), false, 10);
    }
}
