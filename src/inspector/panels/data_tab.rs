//! Data tab: the panel's series rendered as cards.

use bevy::feathers::theme::ThemeBackgroundColor;
use bevy::feathers::tokens;
use bevy::prelude::*;
use bevy::ui::Val::*;

use crate::inspector::config::InspectDrawerConfig;
use crate::panel::VizPanel;

use super::drawer::spawn_message;

const VALUE_PREVIEW_LEN: usize = 8;

/// Short textual preview of a series, e.g. `0.1, 0.2, 0.3, ...`.
fn preview(values: &[f64]) -> String {
    let mut text = values
        .iter()
        .take(VALUE_PREVIEW_LEN)
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if values.len() > VALUE_PREVIEW_LEN {
        text.push_str(", ...");
    }
    text
}

pub fn spawn_data_tab(
    world: &mut World,
    parent: Entity,
    panel: Entity,
    config: &InspectDrawerConfig,
) {
    let Some(panel) = world.get::<VizPanel>(panel).cloned() else {
        spawn_message(world, parent, config, "Panel no longer exists");
        return;
    };
    let series = panel.data.map(|d| d.series).unwrap_or_default();
    if series.is_empty() {
        spawn_message(world, parent, config, "No data");
        return;
    }

    let body_font_size = config.body_font_size;
    let small_font_size = config.small_font_size;
    let muted_text_color = config.muted_text_color;
    let panel_padding = config.panel_padding;
    let item_gap = config.item_gap;
    let border_color = config.border_color;

    world.entity_mut(parent).with_children(|p| {
        for series in &series {
            p.spawn((
                Node {
                    width: Percent(100.0),
                    padding: panel_padding,
                    margin: UiRect::bottom(item_gap),
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    border: UiRect::all(Px(1.0)),
                    ..default()
                },
                ThemeBackgroundColor(tokens::WINDOW_BG),
                BorderColor::all(border_color),
            ))
            .with_children(|card| {
                card.spawn((
                    Text::new(format!("{} | {} rows", series.name, series.values.len())),
                    TextFont {
                        font_size: body_font_size,
                        ..default()
                    },
                    TextColor(Color::srgba(0.9, 0.9, 0.9, 1.0)),
                    Node {
                        margin: UiRect::bottom(Px(4.0)),
                        ..default()
                    },
                ));
                card.spawn((
                    Text::new(preview(&series.values)),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_series() {
        let values: Vec<f64> = (0..12).map(|v| v as f64).collect();
        let text = preview(&values);
        assert!(text.ends_with(", ..."));
        assert!(text.starts_with("0, 1, 2"));
    }

    #[test]
    fn preview_shows_short_series_in_full() {
        assert_eq!(preview(&[1.5, 2.0]), "1.5, 2");
    }
}
