//! Pointer input handling for the habitat viewer.
//!
//! Turns left-mouse press/move/release into [`PointerEvent`]s in scene
//! coordinates and applies the resulting effects to viewer resources.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use habitat_logic::controller::{Effect, PointerEvent};
use habitat_logic::geometry::Point;

use crate::rendering::world_to_scene;
use crate::state::{DesignerState, Hud, Outlines};

pub fn pointer_input(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    mut designer: ResMut<DesignerState>,
    mut outlines: ResMut<Outlines>,
    mut hud: ResMut<Hud>,
    mut last_cursor: Local<Option<Point>>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    let cursor = window
        .cursor_position()
        .and_then(|p| camera.viewport_to_world_2d(camera_transform, p).ok())
        .map(world_to_scene);

    // Keep the last in-window position so a release outside still lands somewhere
    let moved = cursor.is_some() && cursor != *last_cursor;
    if cursor.is_some() {
        *last_cursor = cursor;
    }
    let Some(at) = *last_cursor else {
        return;
    };

    let mut events = Vec::new();
    if mouse.just_pressed(MouseButton::Left) {
        events.push(PointerEvent::Down(at));
    }
    if moved && mouse.pressed(MouseButton::Left) {
        events.push(PointerEvent::Move(at));
    }
    if mouse.just_released(MouseButton::Left) {
        events.push(PointerEvent::Up(at));
    }

    for event in events {
        for effect in designer.0.handle(event) {
            match effect {
                Effect::ModuleSpawned { module, kind } => {
                    info!("Placed {} (#{})", kind.template().display_name, module.0);
                }
                Effect::ValidityChanged { module, valid } => {
                    outlines.0.insert(module, valid);
                }
                Effect::SummaryChanged { score, advice } => {
                    hud.score = score.to_string();
                    hud.advice = advice.plain();
                }
            }
        }
    }
}
