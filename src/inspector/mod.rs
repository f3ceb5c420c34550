//! Inspect drawer UI module.
//!
//! Renders a right-hand drawer with tabbed sub-views (Data, Stats, Query,
//! JSON) for a visualization panel, using bevy_ui and
//! bevy_experimental_feathers. Drawer open state and the active tab
//! round-trip through query parameters.

pub mod config;
pub mod panels;
pub mod plugin;
pub mod readiness;
pub mod state;
pub mod tabs;

pub use config::InspectDrawerConfig;
pub use panels::close_inspect;
pub use plugin::{InspectDrawerPlugin, InspectSet};
pub use readiness::{attempt, Attempt, ReadinessPoller, RETRY_BUDGET_MS, RETRY_DELAY_MS};
pub use state::{InspectDrawer, Readiness, ReadinessKind};
pub use tabs::{build_tabs, select_tab, InspectTab, TabDescriptor};
