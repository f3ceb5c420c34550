//! Query tab: the panel's data queries as pretty-printed JSON.

use bevy::prelude::*;

use crate::inspector::config::InspectDrawerConfig;
use crate::panel::{queries_json, VizPanel};

use super::drawer::spawn_message;

pub fn spawn_query_tab(
    world: &mut World,
    parent: Entity,
    panel: Entity,
    config: &InspectDrawerConfig,
) {
    let Some(panel) = world.get::<VizPanel>(panel).cloned() else {
        spawn_message(world, parent, config, "Panel no longer exists");
        return;
    };
    if panel.queries.is_empty() {
        spawn_message(world, parent, config, "Panel has no queries");
        return;
    }

    let text = match queries_json(&panel) {
        Ok(text) => text,
        Err(err) => {
            warn!("failed to render panel queries: {err}");
            spawn_message(world, parent, config, "Failed to render queries");
            return;
        }
    };

    let small_font_size = config.small_font_size;
    world.entity_mut(parent).with_children(|p| {
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
