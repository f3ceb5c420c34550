//! Stats tab: summary statistics for the panel's most recent data request.

use bevy::prelude::*;
use bevy::ui::Val::*;

use crate::inspector::config::InspectDrawerConfig;
use crate::panel::{compute_stats, PanelData, VizPanel};

use super::drawer::spawn_message;

pub fn spawn_stats_tab(
    world: &mut World,
    parent: Entity,
    panel: Entity,
    config: &InspectDrawerConfig,
) {
    let Some(panel) = world.get::<VizPanel>(panel).cloned() else {
        spawn_message(world, parent, config, "Panel no longer exists");
        return;
    };

    let empty = PanelData::default();
    let rows = compute_stats(panel.data.as_ref().unwrap_or(&empty));

    let small_font_size = config.small_font_size;
    let field_name_color = config.field_name_color;
    let muted_text_color = config.muted_text_color;

    world.entity_mut(parent).with_children(|p| {
        for row in rows {
            p.spawn(Node {
                display: Display::Flex,
                flex_direction: FlexDirection::Row,
                column_gap: Px(8.0),
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|line| {
                line.spawn((
                    Text::new(format!("{}:", row.label)),
                    TextFont {
                        font_size: small_font_size,
                        ..default()
                    },
                    TextColor(field_name_color),
                ));
                line.spawn((
                    Text::new(row.value),
                    TextFont {
                        font_size: small_font_size,
                        ..default()
                    },
                    TextColor(muted_text_color),
                ));
            });
        }
    });
}
