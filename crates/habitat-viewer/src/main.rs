//! Habitat Designer - Bevy-based drag-and-drop layout scene
//!
//! Usage:
//!   cargo run -p habitat-viewer
//!   cargo run -p habitat-viewer -- --config scene.json

mod input;
mod rendering;
mod state;
mod ui;

use bevy::prelude::*;
use habitat_logic::constants::scene;
use habitat_logic::controller::Designer;

use input::pointer_input;
use rendering::{draw_outlines, setup_scene, spawn_starfield, sync_module_sprites};
use state::{DesignerState, Hud, Outlines, ViewerArgs};
use ui::{setup_ui, update_hud};

fn main() {
    let args = ViewerArgs::from_args();
    let config = match args.scene_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load scene config: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(path) = &args.config_path {
        println!("Using scene config {}", path.display());
    }

    let designer = Designer::new(config);
    let hud = Hud::from_designer(&designer);

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Space Habitat Designer".to_string(),
                resolution: (scene::WIDTH, scene::HEIGHT).into(),
                resizable: false,
                present_mode: bevy::window::PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb_u8(0x0a, 0x0a, 0x0a)))
        .insert_resource(DesignerState(designer))
        .insert_resource(Outlines::default())
        .insert_resource(hud)
        .add_systems(Startup, (setup_scene, spawn_starfield, setup_ui))
        .add_systems(
            Update,
            (
                pointer_input,
                sync_module_sprites,
                draw_outlines,
                update_hud,
            )
                .chain(),
        )
        .run();

    // Host failures (no window, no renderer) end up here; nothing to retry
    if let AppExit::Error(code) = exit {
        eprintln!("Habitat designer exited with error code {}", code.get());
        std::process::exit(i32::from(code.get()));
    }
}
