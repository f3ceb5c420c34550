//! Configuration constants for the drawer UI.

use bevy::prelude::*;
use bevy::ui::Val;

/// Configuration for drawer layout and styling.
#[derive(Resource, Clone)]
pub struct InspectDrawerConfig {
    // Layout
    /// Width of the drawer (slides in from the right edge).
    pub drawer_width: Val,
    /// Height of the title bar.
    pub title_bar_height: Val,
    /// Height of the tab bar.
    pub tab_bar_height: Val,

    // Spacing
    /// Padding inside panels.
    pub panel_padding: UiRect,
    /// Gap between rows in tab bodies.
    pub item_gap: Val,
    /// Gap between tab buttons.
    pub column_gap: Val,

    // Typography
    /// Font size for the drawer title.
    pub title_font_size: f32,
    /// Font size for body text.
    pub body_font_size: f32,
    /// Font size for small/secondary text.
    pub small_font_size: f32,

    // Colors (for non-themed elements)
    /// Border color.
    pub border_color: Color,
    /// Muted text color.
    pub muted_text_color: Color,
    /// Field-name color in label/value rows.
    pub field_name_color: Color,
    /// Background of the "plugin not loaded" banner.
    pub warning_bg_color: Color,
    /// Text color inside the warning banner.
    pub warning_text_color: Color,
    /// Underline color of the active tab.
    pub active_tab_color: Color,
}

impl Default for InspectDrawerConfig {
    fn default() -> Self {
        Self {
            // Layout
            drawer_width: Val::Percent(40.0),
            title_bar_height: Val::Px(40.0),
            tab_bar_height: Val::Px(36.0),

            // Spacing
            panel_padding: UiRect::all(Val::Px(8.0)),
            item_gap: Val::Px(4.0),
            column_gap: Val::Px(8.0),

            // Typography
            title_font_size: 16.0,
            body_font_size: 13.0,
            small_font_size: 11.0,

            // Colors
            border_color: Color::srgba(0.3, 0.3, 0.3, 1.0),
            muted_text_color: Color::srgba(0.6, 0.6, 0.6, 1.0),
            field_name_color: Color::srgba(0.6, 0.8, 1.0, 1.0),
            warning_bg_color: Color::srgba(0.45, 0.35, 0.1, 1.0),
            warning_text_color: Color::srgba(0.95, 0.9, 0.75, 1.0),
            active_tab_color: Color::srgba(1.0, 0.55, 0.15, 1.0),
        }
    }
}
