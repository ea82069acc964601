//! State management for the habitat viewer.
//!
//! Contains resource types and Bevy components used throughout the viewer.

use std::collections::HashMap;
use std::path::PathBuf;

use bevy::prelude::*;
use habitat_logic::config::SceneConfig;
use habitat_logic::controller::Designer;
use habitat_logic::error::HabitatError;
use habitat_logic::placement::ModuleId;

// ============================================================================
// RESOURCES
// ============================================================================

#[derive(Resource)]
pub struct DesignerState(pub Designer);

/// Last known validity per placed module, driving outline colours.
#[derive(Resource, Default)]
pub struct Outlines(pub HashMap<ModuleId, bool>);

/// Text shown in the score and advice panels.
#[derive(Resource)]
pub struct Hud {
    pub score: String,
    pub advice: String,
}

impl Hud {
    pub fn from_designer(designer: &Designer) -> Self {
        Self {
            score: designer.score().to_string(),
            advice: designer.advice().plain(),
        }
    }
}

/// Command-line options.
#[derive(Debug, Default)]
pub struct ViewerArgs {
    pub config_path: Option<PathBuf>,
}

impl ViewerArgs {
    pub fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut parsed = Self::default();
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" if i + 1 < args.len() => {
                    parsed.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                }
                _ => i += 1,
            }
        }
        parsed
    }

    /// Load the scene configuration named on the command line, or the bundled one.
    pub fn scene_config(&self) -> Result<SceneConfig, HabitatError> {
        match &self.config_path {
            Some(path) => SceneConfig::load(path),
            None => SceneConfig::bundled(),
        }
    }
}

// ============================================================================
// COMPONENTS
// ============================================================================

/// Sprite standing in for one placed module.
#[derive(Component)]
pub struct ModuleSprite(pub ModuleId);

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct AdviceText;
