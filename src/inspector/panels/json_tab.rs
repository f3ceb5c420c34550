//! JSON tab: a pretty-printed snapshot of the panel model.
//!
//! This tab additionally carries the drawer's close notification, so it gets
//! its own close control on top of the one in the title bar.

use bevy::feathers::controls::{button, ButtonProps};
use bevy::prelude::*;
use bevy::ui_widgets::observe;

use crate::inspector::config::InspectDrawerConfig;
use crate::panel::{panel_json, PanelPluginMeta, VizPanel};

use super::drawer::{on_close_click, spawn_message, DrawerCloseButton};

pub fn spawn_json_tab(
    world: &mut World,
    parent: Entity,
    panel: Entity,
    config: &InspectDrawerConfig,
) {
    let Some(viz_panel) = world.get::<VizPanel>(panel).cloned() else {
        spawn_message(world, parent, config, "Panel no longer exists");
        return;
    };
    let meta = world.get::<PanelPluginMeta>(panel).cloned();

    let text = match panel_json(&viz_panel, meta.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            warn!("failed to render panel JSON: {err}");
            spawn_message(world, parent, config, "Failed to render panel JSON");
            return;
        }
    };

    let body_font_size = config.body_font_size;
    let small_font_size = config.small_font_size;
    let item_gap = config.item_gap;

    world.entity_mut(parent).with_children(|p| {
        p.spawn(Node {
            margin: UiRect::bottom(item_gap),
            ..default()
        })
        .with_children(|wrapper| {
            wrapper.spawn((
                button(
                    ButtonProps::default(),
                    DrawerCloseButton,
                    bevy::prelude::Spawn((
                        Text::new("Close"),
                        TextFont {
                            font_size: body_font_size,
                            ..default()
                        },
                    )),
                ),
                observe(on_close_click),
            ));
        });

        p.spawn((
            Text::new(text),
            TextFont {
                font_size: small_font_size,
                ..default()
            },
            TextColor(Color::srgba(0.9, 0.9, 0.9, 1.0)),
        ));
    });
}
