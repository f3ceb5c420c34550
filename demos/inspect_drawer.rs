//! Demonstrates the panel inspect drawer.
//!
//! This example spawns a dashboard panel whose plugin descriptor arrives a
//! moment after startup, then opens the drawer through the `inspect` query
//! parameter so the readiness poller can be watched doing its work.

use std::time::Duration;

use bevy::prelude::*;
use panel_inspector::{
    InspectDrawerPlugin, Location, PanelData, PanelPluginMeta, Series, VariableSet, VizPanel,
    INSPECT_PARAM,
};
use serde_json::json;

/// How long the fake plugin loader waits before attaching the descriptor.
const PLUGIN_LOAD_DELAY: Duration = Duration::from_millis(600);

#[derive(Resource)]
struct PluginLoader {
    panel: Entity,
    delay: Timer,
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(InspectDrawerPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, finish_plugin_load)
        .run();
}

fn setup(
    mut commands: Commands,
    mut location: ResMut<Location>,
    mut variables: ResMut<VariableSet>,
) {
    commands.spawn(Camera2d);

    variables.set("host", "web-01");

    let mut panel = VizPanel::new("cpu-panel", "CPU usage on $host");
    panel.queries.push(json!({
        "refId": "A",
        "expr": "rate(node_cpu_seconds_total[5m])",
    }));
    panel.data = Some(PanelData {
        series: vec![
            Series {
                name: "user".to_string(),
                values: vec![0.12, 0.18, 0.22, 0.19, 0.25, 0.31, 0.28, 0.24, 0.2, 0.17],
            },
            Series {
                name: "system".to_string(),
                values: vec![0.05, 0.06, 0.08, 0.07, 0.09],
            },
        ],
        request_time_ms: Some(42),
    });

    let panel = commands.spawn(panel).id();

    // The plugin descriptor shows up later, like a lazily loaded panel plugin
    // would; until then the drawer's poller keeps retrying.
    commands.insert_resource(PluginLoader {
        panel,
        delay: Timer::new(PLUGIN_LOAD_DELAY, TimerMode::Once),
    });

    // Open the drawer right away.
    location.partial([(INSPECT_PARAM, Some("cpu-panel".to_string()))]);

    commands.spawn((
        Text::new(
            "Panel inspect drawer demo\n\n\
             The plugin descriptor is attached 600 ms after startup;\n\
             until then the drawer polls for it. Switch tabs in the\n\
             tab bar, close with the Close button.",
        ),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        TextFont {
            font_size: 16.0,
            ..default()
        },
    ));
}

fn finish_plugin_load(
    mut commands: Commands,
    time: Res<Time>,
    loader: Option<ResMut<PluginLoader>>,
) {
    let Some(mut loader) = loader else {
        return;
    };
    if !loader.delay.tick(time.delta()).is_finished() {
        return;
    }

    commands.entity(loader.panel).insert(PanelPluginMeta {
        plugin_id: "timeseries".to_string(),
        skip_data_query: false,
    });
    commands.remove_resource::<PluginLoader>();

    info!("panel plugin loaded");
}
