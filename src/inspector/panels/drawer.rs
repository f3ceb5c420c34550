//! Drawer scaffold: title bar, tab bar, warning banner and content area.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::ecs::observer::On;
use bevy::feathers::controls::{button, ButtonProps};
use bevy::feathers::theme::ThemeBackgroundColor;
use bevy::feathers::tokens;
use bevy::prelude::*;
use bevy::ui::Val::*;
use bevy::ui_widgets::{observe, Activate};

use crate::inspector::config::InspectDrawerConfig;
use crate::inspector::state::{InspectDrawer, ReadinessKind};
use crate::inspector::tabs::{select_tab, InspectTab};
use crate::location::{Location, INSPECT_PARAM, INSPECT_TAB_PARAM};

use super::{data_tab, json_tab, query_tab, stats_tab};

/// Marker component for the drawer's root node.
#[derive(Component)]
pub struct DrawerRoot;

/// Marker for the tab bar container.
#[derive(Component)]
pub struct DrawerTabBar;

/// Marker for the scrollable drawer content area.
#[derive(Component)]
pub struct DrawerContent;

/// Marker for tab buttons. Stores the tab the button activates.
#[derive(Component)]
pub struct TabButton(pub InspectTab);

/// Marker for the per-tab wrapper that carries the active underline.
#[derive(Component)]
pub struct TabUnderline(pub InspectTab);

/// Marker for controls that close the drawer.
#[derive(Component)]
pub struct DrawerCloseButton;

/// Clears the drawer's query parameters; the drawer tears down on the next
/// update. Clearing already-cleared parameters is a no-op, so repeated calls
/// are harmless.
pub fn close_inspect(location: &mut Location) {
    location.partial([(INSPECT_PARAM, None), (INSPECT_TAB_PARAM, None)]);
}

/// Observer for tab button clicks; the selection round-trips through the URL.
fn on_tab_button_click(
    activate: On<Activate>,
    mut location: ResMut<Location>,
    tabs: Query<&TabButton>,
) {
    if let Ok(tab) = tabs.get(activate.entity) {
        location.partial([(INSPECT_TAB_PARAM, Some(tab.0.value().to_string()))]);
    }
}

/// Observer for close controls.
pub(crate) fn on_close_click(
    activate: On<Activate>,
    mut location: ResMut<Location>,
    buttons: Query<(), With<DrawerCloseButton>>,
) {
    if buttons.get(activate.entity).is_ok() {
        close_inspect(&mut location);
    }
}

/// Spawns the drawer scaffold: title bar with close control, an empty tab bar
/// and the scrollable content area.
pub fn spawn_drawer(
    commands: &mut Commands,
    config: &InspectDrawerConfig,
    title: &str,
) -> Entity {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Px(0.0),
                top: Px(0.0),
                width: config.drawer_width,
                height: Percent(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                border: UiRect::left(Px(1.0)),
                ..default()
            },
            ThemeBackgroundColor(tokens::WINDOW_BG),
            BorderColor::all(config.border_color),
            DrawerRoot,
        ))
        .with_children(|root| {
            spawn_title_bar(root, config, title);

            // Tab bar; stays empty until the tab set is built.
            root.spawn((
                Node {
                    width: Percent(100.0),
                    height: config.tab_bar_height,
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    padding: config.panel_padding,
                    column_gap: config.column_gap,
                    border: UiRect::bottom(Px(1.0)),
                    ..default()
                },
                BorderColor::all(config.border_color),
                DrawerTabBar,
            ));

            // Scrollable content area.
            root.spawn((
                Node {
                    width: Percent(100.0),
                    flex_grow: 1.0,
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    row_gap: config.item_gap,
                    padding: config.panel_padding,
                    overflow: Overflow::scroll_y(),
                    ..default()
                },
                ScrollPosition::default(),
                DrawerContent,
            ));
        })
        .id()
}

fn spawn_title_bar(
    parent: &mut ChildSpawnerCommands<'_>,
    config: &InspectDrawerConfig,
    title: &str,
) {
    parent
        .spawn((
            Node {
                width: Percent(100.0),
                height: config.title_bar_height,
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                padding: config.panel_padding,
                border: UiRect::bottom(Px(1.0)),
                ..default()
            },
            BorderColor::all(config.border_color),
        ))
        .with_children(|bar| {
            bar.spawn((
                Text::new(title.to_string()),
                TextFont {
                    font_size: config.title_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            bar.spawn((
                button(
                    ButtonProps::default(),
                    DrawerCloseButton,
                    bevy::prelude::Spawn((
                        Text::new("Close"),
                        TextFont {
                            font_size: config.body_font_size,
                            ..default()
                        },
                    )),
                ),
                observe(on_close_click),
            ));
        });
}

/// Fills the tab bar once the tab set is built. Tabs are never rebuilt, so
/// this spawns buttons at most once per drawer.
pub fn sync_tab_bar(
    mut commands: Commands,
    drawer: Option<Res<InspectDrawer>>,
    config: Res<InspectDrawerConfig>,
    bars: Query<(Entity, Option<&Children>), With<DrawerTabBar>>,
) {
    let Some(drawer) = drawer else {
        return;
    };
    let tabs: Vec<InspectTab> = drawer.tabs().iter().map(|t| t.tab).collect();
    if tabs.is_empty() {
        return;
    }
    let Ok((bar, children)) = bars.single() else {
        return;
    };
    if children.is_some_and(|c| !c.is_empty()) {
        return;
    }

    let body_font_size = config.body_font_size;
    commands.entity(bar).with_children(|bar| {
        for tab in tabs {
            bar.spawn((
                Node {
                    display: Display::Flex,
                    border: UiRect::bottom(Px(2.0)),
                    ..default()
                },
                BorderColor::all(Color::NONE),
                TabUnderline(tab),
            ))
            .with_children(|wrapper| {
                wrapper.spawn((
                    button(
                        ButtonProps::default(),
                        TabButton(tab),
                        bevy::prelude::Spawn((
                            Text::new(tab.label()),
                            TextFont {
                                font_size: body_font_size,
                                ..default()
                            },
                        )),
                    ),
                    observe(on_tab_button_click),
                ));
            });
        }
    });
}

/// Underlines the tab currently named by the URL.
pub fn sync_active_tab(
    drawer: Option<Res<InspectDrawer>>,
    location: Res<Location>,
    config: Res<InspectDrawerConfig>,
    mut underlines: Query<(&TabUnderline, &mut BorderColor)>,
) {
    let Some(drawer) = drawer else {
        return;
    };
    let Some(selected) = select_tab(drawer.tabs(), location.query_param(INSPECT_TAB_PARAM))
    else {
        return;
    };
    for (underline, mut border) in &mut underlines {
        let color = if underline.0 == selected.tab {
            config.active_tab_color
        } else {
            Color::NONE
        };
        *border = BorderColor::all(color);
    }
}

/// Exclusive system that re-renders the drawer content.
///
/// Selection is recomputed from location state every frame and holds no state
/// of its own; the content subtree is rebuilt only when readiness or the
/// selected tab actually changed.
pub fn sync_drawer_content(world: &mut World) {
    let Some(drawer) = world.get_resource::<InspectDrawer>() else {
        return;
    };
    let panel = drawer.panel;
    let readiness_kind = drawer.readiness.kind();

    let url_tab = world
        .resource::<Location>()
        .query_param(INSPECT_TAB_PARAM)
        .map(str::to_string);
    let selected = {
        let drawer = world.resource::<InspectDrawer>();
        select_tab(drawer.tabs(), url_tab.as_deref()).map(|t| t.tab)
    };

    // Skip if nothing has changed since the last render.
    {
        let drawer = world.resource::<InspectDrawer>();
        if drawer.rendered_readiness == Some(readiness_kind) && drawer.rendered_tab == selected {
            return;
        }
    }
    {
        let mut drawer = world.resource_mut::<InspectDrawer>();
        drawer.rendered_readiness = Some(readiness_kind);
        drawer.rendered_tab = selected;
    }

    let mut query = world.query_filtered::<Entity, With<DrawerContent>>();
    let Some(content) = query.iter(world).next() else {
        return;
    };

    // Collect children first, then despawn (despawning a parent also despawns
    // its descendants).
    let children: Vec<Entity> = world
        .get::<Children>(content)
        .map(|c| c.iter().collect())
        .unwrap_or_default();
    for child in children {
        if world.entities().contains(child) {
            world.entity_mut(child).despawn();
        }
    }

    let config = world.resource::<InspectDrawerConfig>().clone();

    match readiness_kind {
        ReadinessKind::Pending => {}
        ReadinessKind::PluginNotLoaded => {
            spawn_plugin_not_loaded_banner(world, content, &config);
        }
        ReadinessKind::Ready => match selected {
            Some(InspectTab::Data) => data_tab::spawn_data_tab(world, content, panel, &config),
            Some(InspectTab::Stats) => stats_tab::spawn_stats_tab(world, content, panel, &config),
            Some(InspectTab::Query) => query_tab::spawn_query_tab(world, content, panel, &config),
            Some(InspectTab::Json) => json_tab::spawn_json_tab(world, content, panel, &config),
            None => {}
        },
    }
}

/// Muted one-line message in the content area.
pub(crate) fn spawn_message(
    world: &mut World,
    parent: Entity,
    config: &InspectDrawerConfig,
    message: &str,
) {
    let body_font_size = config.body_font_size;
    let muted_text_color = config.muted_text_color;
    let message = message.to_string();

    world.entity_mut(parent).with_children(|p| {
        p.spawn((
            Text::new(message),
            TextFont {
                font_size: body_font_size,
                ..default()
            },
            TextColor(muted_text_color),
            Node {
                padding: UiRect::all(Px(16.0)),
                ..default()
            },
        ));
    });
}

/// Warning banner shown when the plugin never loaded. Informational and
/// non-blocking; the rest of the drawer stays interactive.
fn spawn_plugin_not_loaded_banner(
    world: &mut World,
    parent: Entity,
    config: &InspectDrawerConfig,
) {
    let title_font_size = config.title_font_size;
    let body_font_size = config.body_font_size;
    let warning_bg = config.warning_bg_color;
    let warning_text = config.warning_text_color;
    let panel_padding = config.panel_padding;

    world.entity_mut(parent).with_children(|p| {
        p.spawn((
            Node {
                width: Percent(100.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Px(4.0),
                padding: panel_padding,
                ..default()
            },
            BackgroundColor(warning_bg),
        ))
        .with_children(|banner| {
            banner.spawn((
                Text::new("Panel plugin not loaded"),
                TextFont {
                    font_size: title_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            banner.spawn((
                Text::new(
                    "Make sure the panel you want to inspect is visible and has been displayed \
                     before opening inspect.",
                ),
                TextFont {
                    font_size: body_font_size,
                    ..default()
                },
                TextColor(warning_text),
            ));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_clears_both_params() {
        let mut location = Location::default();
        location.partial([
            (INSPECT_PARAM, Some("panel-1".to_string())),
            (INSPECT_TAB_PARAM, Some("json".to_string())),
        ]);

        close_inspect(&mut location);
        assert_eq!(location.query_param(INSPECT_PARAM), None);
        assert_eq!(location.query_param(INSPECT_TAB_PARAM), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut location = Location::default();
        location.partial([(INSPECT_PARAM, Some("panel-1".to_string()))]);

        close_inspect(&mut location);
        close_inspect(&mut location);
        assert_eq!(location.query_param(INSPECT_PARAM), None);
        assert_eq!(location.query_param(INSPECT_TAB_PARAM), None);
    }
}
