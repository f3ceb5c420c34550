//! Visualization panel model consumed by the inspect drawer.
//!
//! The drawer never owns panel state. It holds the panel's `Entity` and reads
//! these components; the host application inserts and mutates them.

use bevy::prelude::*;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A visualization panel in the dashboard.
#[derive(Component, Clone, Debug)]
pub struct VizPanel {
    /// Stable key carried by the `inspect` query parameter.
    pub id: String,
    /// Panel title. May contain `$var` references resolved at display time.
    pub title: String,
    /// Data queries attached to the panel, kept as opaque JSON.
    pub queries: Vec<Value>,
    /// Most recent query result, if any.
    pub data: Option<PanelData>,
}

impl VizPanel {
    /// Creates a panel with no queries and no data.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            queries: Vec::new(),
            data: None,
        }
    }
}

/// Capability descriptor for a panel's plugin.
///
/// Inserted onto the panel entity by the host once the plugin has loaded.
/// Absence is a transient condition the readiness poller waits out.
#[derive(Component, Clone, Debug, Serialize)]
pub struct PanelPluginMeta {
    /// Identifier of the plugin rendering this panel.
    pub plugin_id: String,
    /// Set for plugins that render without running data queries (text, news, ...).
    pub skip_data_query: bool,
}

/// Whether a panel backed by this plugin runs data queries.
/// Panels that do get the Data, Stats and Query tabs.
pub fn supports_data_query(meta: &PanelPluginMeta) -> bool {
    !meta.skip_data_query
}

/// Result of the panel's most recent data request.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PanelData {
    /// One entry per returned series.
    pub series: Vec<Series>,
    /// Wall time the request took, if known.
    pub request_time_ms: Option<u64>,
}

/// A single named series of values.
#[derive(Clone, Debug, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// One row of the Stats tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: String,
}

/// Summary statistics shown by the Stats tab.
pub fn compute_stats(data: &PanelData) -> Vec<StatRow> {
    let total_rows: usize = data.series.iter().map(|s| s.values.len()).sum();
    vec![
        StatRow {
            label: "Total request time",
            value: data
                .request_time_ms
                .map(|ms| format!("{ms} ms"))
                .unwrap_or_else(|| "-".to_string()),
        },
        StatRow {
            label: "Number of series",
            value: data.series.len().to_string(),
        },
        StatRow {
            label: "Total number of rows",
            value: total_rows.to_string(),
        },
    ]
}

/// Errors from the inspect drawer's serialization paths.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("failed to serialize panel model: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct PanelSnapshot<'a> {
    id: &'a str,
    title: &'a str,
    plugin: Option<&'a PanelPluginMeta>,
    queries: &'a [Value],
    data: Option<&'a PanelData>,
}

/// Pretty-printed JSON snapshot of the panel model, as shown by the JSON tab.
pub fn panel_json(
    panel: &VizPanel,
    plugin: Option<&PanelPluginMeta>,
) -> Result<String, InspectError> {
    let snapshot = PanelSnapshot {
        id: &panel.id,
        title: &panel.title,
        plugin,
        queries: &panel.queries,
        data: panel.data.as_ref(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Pretty-printed JSON of the panel's queries, as shown by the Query tab.
pub fn queries_json(panel: &VizPanel) -> Result<String, InspectError> {
    Ok(serde_json::to_string_pretty(&panel.queries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_data() -> PanelData {
        PanelData {
            series: vec![
                Series {
                    name: "cpu".to_string(),
                    values: vec![0.1, 0.2, 0.3],
                },
                Series {
                    name: "mem".to_string(),
                    values: vec![512.0],
                },
            ],
            request_time_ms: Some(42),
        }
    }

    #[test]
    fn data_query_support_follows_skip_flag() {
        let meta = PanelPluginMeta {
            plugin_id: "timeseries".to_string(),
            skip_data_query: false,
        };
        assert!(supports_data_query(&meta));

        let text = PanelPluginMeta {
            plugin_id: "text".to_string(),
            skip_data_query: true,
        };
        assert!(!supports_data_query(&text));
    }

    #[test]
    fn stats_summarize_series_and_rows() {
        let rows = compute_stats(&sample_data());
        assert_eq!(rows[0].value, "42 ms");
        assert_eq!(rows[1].value, "2");
        assert_eq!(rows[2].value, "4");
    }

    #[test]
    fn stats_without_request_time_show_placeholder() {
        let rows = compute_stats(&PanelData::default());
        assert_eq!(rows[0].value, "-");
        assert_eq!(rows[1].value, "0");
        assert_eq!(rows[2].value, "0");
    }

    #[test]
    fn snapshot_includes_queries_and_plugin() {
        let mut panel = VizPanel::new("panel-1", "CPU usage");
        panel.queries.push(json!({ "expr": "rate(cpu[5m])" }));
        let meta = PanelPluginMeta {
            plugin_id: "timeseries".to_string(),
            skip_data_query: false,
        };

        let text = panel_json(&panel, Some(&meta)).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["id"], "panel-1");
        assert_eq!(value["plugin"]["plugin_id"], "timeseries");
        assert_eq!(value["queries"][0]["expr"], "rate(cpu[5m])");
    }

    #[test]
    fn queries_render_as_a_json_array() {
        let mut panel = VizPanel::new("panel-1", "CPU usage");
        panel.queries.push(json!({ "refId": "A" }));
        let text = queries_json(&panel).unwrap();
        assert!(text.starts_with('['));
        assert!(text.contains("\"refId\": \"A\""));
    }

    #[test]
    fn snapshot_without_plugin_serializes_null() {
        let panel = VizPanel::new("panel-2", "Empty");
        let text = panel_json(&panel, None).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert!(value["plugin"].is_null());
    }
}
