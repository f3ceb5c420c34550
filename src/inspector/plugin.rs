//! Inspect drawer plugin and lifecycle.

use bevy::ecs::relationship::Relationship;
use bevy::feathers::dark_theme::create_dark_theme;
use bevy::feathers::theme::UiTheme;
use bevy::feathers::FeathersPlugins;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::picking::hover::HoverMap;
use bevy::prelude::*;

use super::config::InspectDrawerConfig;
use super::panels::{
    spawn_drawer, sync_active_tab, sync_drawer_content, sync_tab_bar, DrawerContent, DrawerRoot,
};
use super::readiness::poll_plugin_readiness;
use super::state::InspectDrawer;
use crate::location::{Location, INSPECT_PARAM};
use crate::panel::VizPanel;
use crate::variables::VariableSet;

/// System sets for organizing drawer systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InspectSet {
    /// Drive the plugin-readiness poller.
    Poll,
    /// Sync UI with state.
    SyncUi,
}

/// Plugin that manages the inspect drawer lifecycle.
pub struct InspectDrawerPlugin;

impl Plugin for InspectDrawerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(FeathersPlugins)
            .insert_resource(UiTheme(create_dark_theme()))
            // State resources
            .init_resource::<Location>()
            .init_resource::<VariableSet>()
            .init_resource::<InspectDrawerConfig>()
            // System ordering
            .configure_sets(Update, (InspectSet::Poll, InspectSet::SyncUi).chain())
            // Update systems
            .add_systems(
                Update,
                (
                    poll_plugin_readiness.in_set(InspectSet::Poll),
                    // UI sync - chain these to avoid resource conflicts
                    (
                        open_inspect_drawer,
                        sync_tab_bar,
                        sync_active_tab,
                        sync_drawer_content,
                    )
                        .chain()
                        .in_set(InspectSet::SyncUi),
                    handle_drawer_scroll,
                    teardown_inspect_drawer,
                ),
            );
    }
}

/// Opens the drawer when the `inspect` query parameter names a panel.
fn open_inspect_drawer(
    mut commands: Commands,
    location: Res<Location>,
    drawer: Option<Res<InspectDrawer>>,
    config: Res<InspectDrawerConfig>,
    variables: Res<VariableSet>,
    panels: Query<(Entity, &VizPanel)>,
) {
    if drawer.is_some() {
        return;
    }
    let Some(panel_id) = location.query_param(INSPECT_PARAM) else {
        return;
    };
    let Some((entity, panel)) = panels.iter().find(|(_, p)| p.id == panel_id) else {
        debug!("inspect param names unknown panel {panel_id:?}");
        return;
    };

    let title = variables.interpolate(&format!("Inspect: {}", panel.title));
    spawn_drawer(&mut commands, &config, &title);
    commands.insert_resource(InspectDrawer::new(entity));

    info!("inspect drawer opened for panel {panel_id:?}");
}

/// Tears the drawer down once `inspect` is cleared.
///
/// Removing the state resource drops the pending retry timer, so a scheduled
/// readiness attempt can never fire against a dismantled drawer.
fn teardown_inspect_drawer(
    mut commands: Commands,
    location: Res<Location>,
    drawer: Option<Res<InspectDrawer>>,
    roots: Query<Entity, With<DrawerRoot>>,
) {
    if drawer.is_none() || location.query_param(INSPECT_PARAM).is_some() {
        return;
    }

    for root in &roots {
        commands.entity(root).despawn();
    }
    commands.remove_resource::<InspectDrawer>();

    info!("inspect drawer closed");
}

/// Scrolls the drawer content vertically when the wheel moves over it.
fn handle_drawer_scroll(
    mut mouse_wheel_reader: MessageReader<MouseWheel>,
    hover_map: Res<HoverMap>,
    parents: Query<&ChildOf>,
    mut content: Query<(&mut ScrollPosition, &ComputedNode), With<DrawerContent>>,
) {
    for event in mouse_wheel_reader.read() {
        let mut delta_y = -event.y;
        if event.unit == MouseScrollUnit::Line {
            delta_y *= 20.0; // Convert lines to pixels
        }
        if delta_y == 0.0 {
            continue;
        }

        for pointer_map in hover_map.values() {
            for &hovered_entity in pointer_map.keys() {
                // Traverse up to the drawer content, if the pointer is over it
                let mut current = hovered_entity;
                loop {
                    if let Ok((mut scroll_pos, computed)) = content.get_mut(current) {
                        let max_y = (computed.content_size().y - computed.size().y).max(0.0)
                            * computed.inverse_scale_factor();
                        scroll_pos.y = (scroll_pos.y + delta_y).clamp(0.0, max_y);
                        return;
                    }

                    if let Ok(child_of) = parents.get(current) {
                        current = child_of.get();
                    } else {
                        break;
                    }
                }
            }
        }
    }
}
