//! The drawer's tab set and URL-driven tab selection.

use bevy::prelude::*;

/// One of the drawer's sub-views.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InspectTab {
    Data,
    Stats,
    Query,
    Json,
}

impl InspectTab {
    /// Stable identifier carried by the `inspectTab` query parameter.
    pub fn value(self) -> &'static str {
        match self {
            InspectTab::Data => "data",
            InspectTab::Stats => "stats",
            InspectTab::Query => "query",
            InspectTab::Json => "json",
        }
    }

    /// Label shown in the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            InspectTab::Data => "Data",
            InspectTab::Stats => "Stats",
            InspectTab::Query => "Query",
            InspectTab::Json => "JSON",
        }
    }
}

/// One inspectable view, bound to the panel it inspects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabDescriptor {
    pub tab: InspectTab,
    /// The inspected panel. A back reference; the drawer never owns the panel.
    pub panel: Entity,
}

/// Builds the tab set for a resolved plugin descriptor.
///
/// Order is significant: data-query tabs first, the JSON tab always last.
/// Tabs are built exactly once per drawer and never rebuilt.
pub fn build_tabs(panel: Entity, supports_data_query: bool) -> Vec<TabDescriptor> {
    let mut tabs = Vec::new();

    if supports_data_query {
        tabs.push(TabDescriptor {
            tab: InspectTab::Data,
            panel,
        });
        tabs.push(TabDescriptor {
            tab: InspectTab::Stats,
            panel,
        });
        tabs.push(TabDescriptor {
            tab: InspectTab::Query,
            panel,
        });
    }

    tabs.push(TabDescriptor {
        tab: InspectTab::Json,
        panel,
    });

    tabs
}

/// Selects the tab named by the URL, falling back to the first tab when the
/// value is absent or matches nothing. Pure; recomputed from location state on
/// every render.
pub fn select_tab<'a>(
    tabs: &'a [TabDescriptor],
    url_value: Option<&str>,
) -> Option<&'a TabDescriptor> {
    url_value
        .and_then(|value| tabs.iter().find(|t| t.tab.value() == value))
        .or_else(|| tabs.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(tabs: &[TabDescriptor]) -> Vec<&'static str> {
        tabs.iter().map(|t| t.tab.value()).collect()
    }

    #[test]
    fn data_query_plugins_get_all_four_tabs() {
        let tabs = build_tabs(Entity::PLACEHOLDER, true);
        assert_eq!(values(&tabs), ["data", "stats", "query", "json"]);
    }

    #[test]
    fn widget_plugins_get_only_the_json_tab() {
        let tabs = build_tabs(Entity::PLACEHOLDER, false);
        assert_eq!(values(&tabs), ["json"]);
    }

    #[test]
    fn url_value_selects_the_matching_tab() {
        let tabs = build_tabs(Entity::PLACEHOLDER, true);
        let selected = select_tab(&tabs, Some("stats")).unwrap();
        assert_eq!(selected.tab, InspectTab::Stats);
    }

    #[test]
    fn absent_or_unknown_value_falls_back_to_the_first_tab() {
        let tabs = build_tabs(Entity::PLACEHOLDER, true);
        assert_eq!(select_tab(&tabs, None).unwrap().tab, InspectTab::Data);
        assert_eq!(
            select_tab(&tabs, Some("no-such-tab")).unwrap().tab,
            InspectTab::Data
        );
    }

    #[test]
    fn empty_tab_set_selects_nothing() {
        assert!(select_tab(&[], Some("data")).is_none());
    }
}
