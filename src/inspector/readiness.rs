//! Bounded-retry poller for the panel's plugin descriptor.
//!
//! There is no async handle to await for a panel plugin; it appears on the
//! panel entity at some point after the panel is spawned. The drawer polls
//! for it instead: one attempt every 100 ms, giving up after 2 s. The elapsed
//! budget is threaded through [`attempt`] explicitly so the loop carries no
//! hidden counter, and the pending delay lives in the drawer resource so that
//! closing the drawer cancels the retry.

use std::time::Duration;

use bevy::prelude::*;

use super::state::InspectDrawer;
use super::tabs::build_tabs;
use crate::panel::{supports_data_query, PanelPluginMeta, VizPanel};

/// Delay between attempts.
pub const RETRY_DELAY_MS: u64 = 100;

/// Accumulated wait after which the poller gives up.
pub const RETRY_BUDGET_MS: u64 = 2000;

/// Outcome of a single readiness attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// Descriptor present; the tab set can be built.
    Ready { supports_data_query: bool },
    /// Descriptor absent with budget remaining; retry carrying the new total.
    Retry { elapsed_ms: u64 },
    /// Descriptor absent and the budget is spent.
    GaveUp,
}

/// One step of the poll loop.
///
/// Tab derivation is gated strictly on descriptor presence: the exhausted
/// branch never builds a tab set, not even a JSON-only one.
pub fn attempt(descriptor: Option<&PanelPluginMeta>, elapsed_ms: u64) -> Attempt {
    match descriptor {
        Some(meta) => Attempt::Ready {
            supports_data_query: supports_data_query(meta),
        },
        None if elapsed_ms < RETRY_BUDGET_MS => Attempt::Retry {
            elapsed_ms: elapsed_ms + RETRY_DELAY_MS,
        },
        None => Attempt::GaveUp,
    }
}

/// Pending poll work for an open drawer. Dropping it cancels the retry.
#[derive(Debug)]
pub struct ReadinessPoller {
    elapsed_ms: u64,
    delay: Timer,
}

impl ReadinessPoller {
    /// A poller whose first attempt fires on the next update.
    pub fn new() -> Self {
        Self {
            elapsed_ms: 0,
            delay: Timer::new(Duration::ZERO, TimerMode::Once),
        }
    }

    fn schedule(&mut self, elapsed_ms: u64) {
        self.elapsed_ms = elapsed_ms;
        self.delay = Timer::new(Duration::from_millis(RETRY_DELAY_MS), TimerMode::Once);
    }
}

impl Default for ReadinessPoller {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the poller while a drawer is open and its plugin is unresolved.
///
/// Runs on the UI schedule; the only wait is the one-shot delay timer, so no
/// attempt ever blocks and no two attempts are in flight at once.
pub fn poll_plugin_readiness(
    time: Res<Time>,
    drawer: Option<ResMut<InspectDrawer>>,
    panels: Query<Option<&PanelPluginMeta>, With<VizPanel>>,
) {
    let Some(mut drawer) = drawer else {
        return;
    };
    let panel = drawer.panel;

    let outcome = {
        let Some(poller) = drawer.poller.as_mut() else {
            return;
        };
        if !poller.delay.tick(time.delta()).is_finished() {
            return;
        }
        match panels.get(panel) {
            Ok(descriptor) => Some(attempt(descriptor, poller.elapsed_ms)),
            // The panel entity is gone; the reference can never resolve.
            Err(_) => None,
        }
    };

    match outcome {
        Some(Attempt::Ready {
            supports_data_query,
        }) => {
            let tabs = build_tabs(panel, supports_data_query);
            info!("panel plugin resolved; built {} inspect tabs", tabs.len());
            drawer.mark_ready(tabs);
        }
        Some(Attempt::Retry { elapsed_ms }) => {
            if let Some(poller) = drawer.poller.as_mut() {
                poller.schedule(elapsed_ms);
            }
        }
        Some(Attempt::GaveUp) => {
            warn!("panel plugin not loaded after {RETRY_BUDGET_MS} ms; giving up");
            drawer.mark_plugin_not_loaded();
        }
        None => {
            warn!("inspected panel {panel:?} no longer exists; giving up");
            drawer.mark_plugin_not_loaded();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::state::{Readiness, ReadinessKind};
    use crate::inspector::tabs::InspectTab;

    fn meta(skip_data_query: bool) -> PanelPluginMeta {
        PanelPluginMeta {
            plugin_id: "timeseries".to_string(),
            skip_data_query,
        }
    }

    #[test]
    fn exactly_twenty_retries_before_giving_up() {
        let mut elapsed = 0;
        let mut retries = 0;
        loop {
            match attempt(None, elapsed) {
                Attempt::Retry { elapsed_ms } => {
                    retries += 1;
                    elapsed = elapsed_ms;
                }
                Attempt::GaveUp => break,
                Attempt::Ready { .. } => unreachable!("descriptor is never present"),
            }
        }
        assert_eq!(retries, 20);
        assert_eq!(elapsed, RETRY_BUDGET_MS);
    }

    #[test]
    fn present_descriptor_resolves_regardless_of_elapsed_budget() {
        let meta = meta(false);
        for elapsed in [0, 700, RETRY_BUDGET_MS] {
            assert_eq!(
                attempt(Some(&meta), elapsed),
                Attempt::Ready {
                    supports_data_query: true
                }
            );
        }
    }

    // System-level tests drive a headless app and advance time by hand.

    fn poll_app() -> App {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default());
        app.add_systems(Update, poll_plugin_readiness);
        app
    }

    fn advance(app: &mut App, ms: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(ms));
        app.update();
    }

    fn drawer(app: &App) -> &InspectDrawer {
        app.world().resource::<InspectDrawer>()
    }

    #[test]
    fn descriptor_present_on_first_attempt_builds_tabs_without_retries() {
        let mut app = poll_app();
        let panel = app
            .world_mut()
            .spawn((VizPanel::new("panel-1", "CPU"), meta(false)))
            .id();
        app.insert_resource(InspectDrawer::new(panel));

        app.update();

        let drawer = drawer(&app);
        assert_eq!(drawer.readiness.kind(), ReadinessKind::Ready);
        let tabs: Vec<_> = drawer.tabs().iter().map(|t| t.tab).collect();
        assert_eq!(
            tabs,
            [
                InspectTab::Data,
                InspectTab::Stats,
                InspectTab::Query,
                InspectTab::Json
            ]
        );
        assert!(drawer.poller.is_none(), "no retry may be scheduled");
    }

    #[test]
    fn descriptor_appearing_mid_poll_resolves_and_stops_polling() {
        let mut app = poll_app();
        let panel = app.world_mut().spawn(VizPanel::new("panel-1", "CPU")).id();
        app.insert_resource(InspectDrawer::new(panel));

        app.update();
        for _ in 0..5 {
            advance(&mut app, RETRY_DELAY_MS);
        }
        assert_eq!(drawer(&app).readiness.kind(), ReadinessKind::Pending);

        app.world_mut().entity_mut(panel).insert(meta(true));
        advance(&mut app, RETRY_DELAY_MS);

        let tabs: Vec<_> = drawer(&app).tabs().iter().map(|t| t.tab).collect();
        assert_eq!(tabs, [InspectTab::Json]);
        assert!(drawer(&app).poller.is_none());

        // Further time passing changes nothing.
        advance(&mut app, RETRY_BUDGET_MS);
        assert_eq!(drawer(&app).readiness.kind(), ReadinessKind::Ready);
    }

    #[test]
    fn absent_descriptor_exhausts_the_budget_and_leaves_tabs_unset() {
        let mut app = poll_app();
        let panel = app.world_mut().spawn(VizPanel::new("panel-1", "CPU")).id();
        app.insert_resource(InspectDrawer::new(panel));

        app.update();
        for _ in 0..19 {
            advance(&mut app, RETRY_DELAY_MS);
        }
        assert_eq!(drawer(&app).readiness.kind(), ReadinessKind::Pending);

        // The attempt at the 2000 ms mark finds the budget spent.
        advance(&mut app, RETRY_DELAY_MS);
        assert_eq!(drawer(&app).readiness, Readiness::PluginNotLoaded);
        assert!(drawer(&app).tabs().is_empty());

        // Terminal: a late descriptor is ignored.
        app.world_mut().entity_mut(panel).insert(meta(false));
        advance(&mut app, RETRY_DELAY_MS);
        assert_eq!(drawer(&app).readiness, Readiness::PluginNotLoaded);
    }

    #[test]
    fn dangling_panel_reference_fails_terminally() {
        let mut app = poll_app();
        let panel = app.world_mut().spawn(VizPanel::new("panel-1", "CPU")).id();
        app.world_mut().entity_mut(panel).despawn();
        app.insert_resource(InspectDrawer::new(panel));

        app.update();
        assert_eq!(drawer(&app).readiness, Readiness::PluginNotLoaded);
    }
}
