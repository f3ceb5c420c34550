//! A tabbed inspect drawer for visualization panels in Bevy dashboards.
//!
//! Built using bevy_feathers. The drawer waits for the panel's plugin
//! descriptor with a bounded-retry poller, then shows Data, Stats, Query and
//! JSON tabs; open state and the active tab live in query parameters.

pub mod inspector;
pub mod location;
pub mod panel;
pub mod variables;

// Re-export the main plugin for convenience
pub use inspector::{close_inspect, InspectDrawerConfig, InspectDrawerPlugin};
pub use location::{Location, INSPECT_PARAM, INSPECT_TAB_PARAM};
pub use panel::{PanelData, PanelPluginMeta, Series, VizPanel};
pub use variables::VariableSet;
