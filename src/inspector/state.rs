//! Central state for the open inspect drawer.

use bevy::prelude::*;

use super::readiness::ReadinessPoller;
use super::tabs::{InspectTab, TabDescriptor};

/// Readiness of the inspected panel's plugin descriptor.
///
/// Transitions only move forward: `Pending` resolves to exactly one of the
/// other two states and neither terminal state ever resets. Once tabs are
/// built they are never rebuilt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Readiness {
    /// Still polling for the plugin descriptor.
    #[default]
    Pending,
    /// Descriptor resolved; the tab set is final.
    Ready(Vec<TabDescriptor>),
    /// The descriptor never appeared within the retry budget. Terminal;
    /// rendered as a warning banner, no manual retry exists.
    PluginNotLoaded,
}

impl Readiness {
    pub fn kind(&self) -> ReadinessKind {
        match self {
            Readiness::Pending => ReadinessKind::Pending,
            Readiness::Ready(_) => ReadinessKind::Ready,
            Readiness::PluginNotLoaded => ReadinessKind::PluginNotLoaded,
        }
    }
}

/// [`Readiness`] without its payload, for cheap change detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadinessKind {
    Pending,
    Ready,
    PluginNotLoaded,
}

/// State for the open inspect drawer.
///
/// Present as a resource only while a drawer is open. Removing it drops the
/// pending retry timer, so a scheduled attempt can never fire against a
/// dismantled drawer.
#[derive(Resource)]
pub struct InspectDrawer {
    /// The inspected panel.
    pub panel: Entity,
    /// Current readiness, including the tab set once built.
    pub readiness: Readiness,
    /// Pending poll work; cleared once readiness is terminal.
    pub(crate) poller: Option<ReadinessPoller>,
    /// Readiness rendered last frame (for change detection).
    pub(crate) rendered_readiness: Option<ReadinessKind>,
    /// Tab rendered last frame (for change detection).
    pub(crate) rendered_tab: Option<InspectTab>,
}

impl InspectDrawer {
    pub fn new(panel: Entity) -> Self {
        Self {
            panel,
            readiness: Readiness::Pending,
            poller: Some(ReadinessPoller::new()),
            rendered_readiness: None,
            rendered_tab: None,
        }
    }

    /// The built tab set, empty until readiness is `Ready`.
    pub fn tabs(&self) -> &[TabDescriptor] {
        match &self.readiness {
            Readiness::Ready(tabs) => tabs,
            _ => &[],
        }
    }

    /// Resolves `Pending` into `Ready`. Terminal states are left untouched.
    pub(crate) fn mark_ready(&mut self, tabs: Vec<TabDescriptor>) {
        if self.readiness == Readiness::Pending {
            self.readiness = Readiness::Ready(tabs);
        }
        self.poller = None;
    }

    /// Resolves `Pending` into `PluginNotLoaded`. Terminal states are left
    /// untouched.
    pub(crate) fn mark_plugin_not_loaded(&mut self) {
        if self.readiness == Readiness::Pending {
            self.readiness = Readiness::PluginNotLoaded;
        }
        self.poller = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::tabs::build_tabs;

    #[test]
    fn ready_is_terminal() {
        let mut drawer = InspectDrawer::new(Entity::PLACEHOLDER);
        drawer.mark_ready(build_tabs(Entity::PLACEHOLDER, true));
        assert_eq!(drawer.readiness.kind(), ReadinessKind::Ready);
        assert_eq!(drawer.tabs().len(), 4);

        drawer.mark_plugin_not_loaded();
        assert_eq!(drawer.readiness.kind(), ReadinessKind::Ready);
        assert_eq!(drawer.tabs().len(), 4);
    }

    #[test]
    fn plugin_not_loaded_is_terminal() {
        let mut drawer = InspectDrawer::new(Entity::PLACEHOLDER);
        drawer.mark_plugin_not_loaded();
        assert_eq!(drawer.readiness.kind(), ReadinessKind::PluginNotLoaded);

        drawer.mark_ready(build_tabs(Entity::PLACEHOLDER, true));
        assert_eq!(drawer.readiness.kind(), ReadinessKind::PluginNotLoaded);
        assert!(drawer.tabs().is_empty());
    }

    #[test]
    fn resolving_clears_the_pending_poller() {
        let mut drawer = InspectDrawer::new(Entity::PLACEHOLDER);
        assert!(drawer.poller.is_some());
        drawer.mark_ready(build_tabs(Entity::PLACEHOLDER, false));
        assert!(drawer.poller.is_none());
    }
}
