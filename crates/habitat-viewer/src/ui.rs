//! HUD for the habitat viewer: instructions, score and advice panels.

use bevy::prelude::*;

use crate::state::{AdviceText, Hud, ScoreText};

const INSTRUCTIONS: &str = "SPACE HABITAT DESIGNER\n\
    Drag modules from palette into habitat\n\
    Green outline = Valid placement\n\
    Red outline = Invalid (overlap/outside boundary)";

pub fn setup_ui(mut commands: Commands, hud: Res<Hud>) {
    // Instructions (top-left)
    commands.spawn((
        Text::new(INSTRUCTIONS),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        BackgroundColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(5.0)),
            ..default()
        },
    ));

    // Score
    commands.spawn((
        Text::new(hud.score.clone()),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.0, 1.0, 0.0)),
        BackgroundColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(120.0),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(5.0)),
            ..default()
        },
        ScoreText,
    ));

    // Advice
    commands.spawn((
        Text::new(hud.advice.clone()),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 1.0, 0.0)),
        BackgroundColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(180.0),
            max_width: Val::Px(300.0),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(5.0)),
            ..default()
        },
        AdviceText,
    ));
}

pub fn update_hud(
    hud: Res<Hud>,
    mut score_q: Query<&mut Text, (With<ScoreText>, Without<AdviceText>)>,
    mut advice_q: Query<&mut Text, (With<AdviceText>, Without<ScoreText>)>,
) {
    if !hud.is_changed() {
        return;
    }
    if let Ok(mut text) = score_q.get_single_mut() {
        **text = hud.score.clone();
    }
    if let Ok(mut text) = advice_q.get_single_mut() {
        **text = hud.advice.clone();
    }
}
