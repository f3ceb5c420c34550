//! Query-parameter location state.
//!
//! Stands in for the application's routing layer: a flat set of URL query
//! parameters with partial set/clear updates. The drawer reads its open state
//! and active tab from here and writes back through [`Location::partial`].

use std::collections::BTreeMap;

use bevy::prelude::*;

/// Query parameter naming the panel whose inspect drawer is open.
pub const INSPECT_PARAM: &str = "inspect";

/// Query parameter carrying the active inspect tab's value.
pub const INSPECT_TAB_PARAM: &str = "inspectTab";

/// Current URL query parameters.
#[derive(Resource, Default, Clone, Debug)]
pub struct Location {
    params: BTreeMap<String, String>,
}

impl Location {
    /// Returns the value of a query parameter, if set.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Applies a partial update: `Some` sets a parameter, `None` clears it.
    /// Clearing a parameter that is not set is a no-op.
    pub fn partial<'a>(&mut self, updates: impl IntoIterator<Item = (&'a str, Option<String>)>) {
        for (key, value) in updates {
            match value {
                Some(value) => {
                    self.params.insert(key.to_string(), value);
                }
                None => {
                    self.params.remove(key);
                }
            }
        }
    }

    /// The query string in `key=value&key=value` form, keys sorted.
    pub fn search(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_sets_and_clears() {
        let mut location = Location::default();
        location.partial([
            (INSPECT_PARAM, Some("panel-1".to_string())),
            (INSPECT_TAB_PARAM, Some("stats".to_string())),
        ]);
        assert_eq!(location.query_param(INSPECT_PARAM), Some("panel-1"));
        assert_eq!(location.query_param(INSPECT_TAB_PARAM), Some("stats"));

        location.partial([(INSPECT_TAB_PARAM, None)]);
        assert_eq!(location.query_param(INSPECT_TAB_PARAM), None);
        assert_eq!(location.query_param(INSPECT_PARAM), Some("panel-1"));
    }

    #[test]
    fn clearing_an_absent_param_is_a_no_op() {
        let mut location = Location::default();
        location.partial([(INSPECT_PARAM, None)]);
        location.partial([(INSPECT_PARAM, None)]);
        assert_eq!(location.query_param(INSPECT_PARAM), None);
    }

    #[test]
    fn search_renders_sorted_pairs() {
        let mut location = Location::default();
        location.partial([
            ("b", Some("2".to_string())),
            ("a", Some("1".to_string())),
        ]);
        assert_eq!(location.search(), "a=1&b=2");
    }
}
