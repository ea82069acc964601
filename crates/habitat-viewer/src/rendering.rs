//! Scene rendering for the habitat viewer.
//!
//! The logic crate works in 800×600 scene coordinates (origin top-left,
//! y down); Bevy's 2D camera is centred with y up. Everything crossing that
//! edge goes through [`scene_to_world`] / [`world_to_scene`].

use std::collections::HashSet;

use bevy::prelude::*;
use habitat_logic::constants::scene;
use habitat_logic::geometry::Point;
use habitat_logic::templates::ModuleTemplate;
use rand::Rng;

use crate::state::{DesignerState, ModuleSprite, Outlines};

const STAR_COUNT: usize = 100;

const Z_STARS: f32 = -10.0;
const Z_BOUNDARY: f32 = -5.0;
const Z_PALETTE: f32 = 0.0;
const Z_MODULES: f32 = 1.0;
const Z_LABELS: f32 = 50.0;

pub fn scene_to_world(p: Point) -> Vec2 {
    Vec2::new(p.x - scene::WIDTH / 2.0, scene::HEIGHT / 2.0 - p.y)
}

pub fn world_to_scene(v: Vec2) -> Point {
    Point::new(v.x + scene::WIDTH / 2.0, scene::HEIGHT / 2.0 - v.y)
}

pub fn template_color(template: &ModuleTemplate) -> Color {
    let (r, g, b) = template.rgb();
    Color::srgb(r, g, b)
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    designer: Res<DesignerState>,
) {
    commands.spawn(Camera2d::default());

    // Boundary fill; the stroke is drawn with gizmos each frame
    let boundary = designer.0.habitat().boundary();
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(boundary.radius))),
        MeshMaterial2d(materials.add(Color::srgba(0.1, 0.1, 0.18, 0.3))),
        Transform::from_translation(scene_to_world(boundary.center).extend(Z_BOUNDARY)),
    ));

    // Palette squares and labels
    for slot in designer.0.palette().slots() {
        let template = slot.template();
        commands.spawn((
            Sprite::from_color(template_color(template), Vec2::splat(template.footprint_size)),
            Transform::from_translation(scene_to_world(slot.center).extend(Z_PALETTE)),
        ));
        commands.spawn((
            Text2d::new(template.display_name),
            TextFont {
                font_size: 10.0,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_translation(scene_to_world(slot.label_position()).extend(Z_LABELS)),
        ));
    }

    info!(
        "Habitat boundary r={} at ({}, {}), {} palette templates",
        boundary.radius,
        boundary.center.x,
        boundary.center.y,
        designer.0.palette().slots().len()
    );
}

pub fn spawn_starfield(mut commands: Commands) {
    let mut rng = rand::thread_rng();
    for _ in 0..STAR_COUNT {
        let at = Point::new(
            rng.gen_range(0.0..scene::WIDTH),
            rng.gen_range(0.0..scene::HEIGHT),
        );
        let alpha = rng.gen_range(0.3..1.0) * rng.gen_range(0.5..1.0);
        commands.spawn((
            Sprite::from_color(Color::srgba(1.0, 1.0, 1.0, alpha), Vec2::splat(2.0)),
            Transform::from_translation(scene_to_world(at).extend(Z_STARS)),
        ));
    }
}

/// Spawn a sprite for every new module and keep all sprites on their module.
pub fn sync_module_sprites(
    mut commands: Commands,
    designer: Res<DesignerState>,
    mut sprites: Query<(&ModuleSprite, &mut Transform)>,
) {
    let habitat = designer.0.habitat();
    let mut seen = HashSet::new();

    for (sprite, mut transform) in &mut sprites {
        seen.insert(sprite.0);
        if let Some(module) = habitat.get(sprite.0) {
            let z = transform.translation.z;
            transform.translation = scene_to_world(module.position).extend(z);
        }
    }

    // Later modules draw above earlier ones
    for (order, module) in habitat.modules().iter().enumerate() {
        if seen.contains(&module.id) {
            continue;
        }
        let template = module.template();
        let z = Z_MODULES + order as f32 * 0.01;
        commands.spawn((
            Sprite::from_color(template_color(template), Vec2::splat(template.footprint_size)),
            Transform::from_translation(scene_to_world(module.position).extend(z)),
            ModuleSprite(module.id),
        ));
    }
}

pub fn draw_outlines(designer: Res<DesignerState>, outlines: Res<Outlines>, mut gizmos: Gizmos) {
    let boundary = designer.0.habitat().boundary();
    gizmos.circle_2d(
        Isometry2d::from_translation(scene_to_world(boundary.center)),
        boundary.radius,
        Color::srgb(0.29, 0.29, 0.42),
    );

    for slot in designer.0.palette().slots() {
        gizmos.rect_2d(
            Isometry2d::from_translation(scene_to_world(slot.center)),
            Vec2::splat(slot.template().footprint_size),
            Color::WHITE,
        );
    }

    for module in designer.0.habitat().modules() {
        let color = match outlines.0.get(&module.id) {
            Some(true) => Color::srgb(0.0, 1.0, 0.0),
            Some(false) => Color::srgb(1.0, 0.0, 0.0),
            None => Color::WHITE,
        };
        let size = Vec2::splat(module.template().footprint_size);
        let center = Isometry2d::from_translation(scene_to_world(module.position));
        gizmos.rect_2d(center, size, color);
        // second pass for a thicker outline
        gizmos.rect_2d(center, size + Vec2::splat(2.0), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_world_conversion() {
        assert_eq!(scene_to_world(Point::new(400.0, 300.0)), Vec2::ZERO);
        assert_eq!(scene_to_world(Point::new(0.0, 0.0)), Vec2::new(-400.0, 300.0));
        let p = Point::new(650.0, 120.0);
        assert_eq!(world_to_scene(scene_to_world(p)), p);
    }
}
