//! Module templates — the six immutable palette definitions.
//!
//! A placed module never copies template data; it keeps a [`ModuleKind`] and
//! looks the template up through [`ModuleKind::template`].

use serde::{Deserialize, Serialize};

/// Identifies one of the six module templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleKind {
    SleepPod,
    Kitchen,
    Exercise,
    Storage,
    Hygiene,
    Command,
}

impl ModuleKind {
    /// All kinds, in palette order.
    pub const ALL: [ModuleKind; 6] = [
        ModuleKind::SleepPod,
        ModuleKind::Kitchen,
        ModuleKind::Exercise,
        ModuleKind::Storage,
        ModuleKind::Hygiene,
        ModuleKind::Command,
    ];

    /// Stable identifier, e.g. `SLEEP_POD`.
    pub fn key(self) -> &'static str {
        match self {
            ModuleKind::SleepPod => "SLEEP_POD",
            ModuleKind::Kitchen => "KITCHEN",
            ModuleKind::Exercise => "EXERCISE",
            ModuleKind::Storage => "STORAGE",
            ModuleKind::Hygiene => "HYGIENE",
            ModuleKind::Command => "COMMAND",
        }
    }

    /// Position of this kind in the palette column.
    pub fn palette_index(self) -> usize {
        self as usize
    }

    pub fn template(self) -> &'static ModuleTemplate {
        &TEMPLATES[self.palette_index()]
    }
}

/// Immutable definition a placed module is instantiated from.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleTemplate {
    pub kind: ModuleKind,
    pub display_name: &'static str,
    /// 0xRRGGBB fill colour.
    pub color: u32,
    /// Crew members this module supports when validly placed.
    pub crew_support: u32,
    /// Diameter of the module's footprint (and side of its drawn square).
    pub footprint_size: f32,
}

impl ModuleTemplate {
    pub fn radius(&self) -> f32 {
        self.footprint_size / 2.0
    }

    /// Fill colour as `(r, g, b)` in 0.0..=1.0.
    pub fn rgb(&self) -> (f32, f32, f32) {
        let r = ((self.color >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.color >> 8) & 0xff) as f32 / 255.0;
        let b = (self.color & 0xff) as f32 / 255.0;
        (r, g, b)
    }
}

/// The palette, indexed by [`ModuleKind::palette_index`].
pub static TEMPLATES: [ModuleTemplate; 6] = [
    ModuleTemplate {
        kind: ModuleKind::SleepPod,
        display_name: "Sleep Pod",
        color: 0x00ff00,
        crew_support: 2,
        footprint_size: 60.0,
    },
    ModuleTemplate {
        kind: ModuleKind::Kitchen,
        display_name: "Kitchen",
        color: 0xffff00,
        crew_support: 1,
        footprint_size: 50.0,
    },
    ModuleTemplate {
        kind: ModuleKind::Exercise,
        display_name: "Exercise Area",
        color: 0x0080ff,
        crew_support: 1,
        footprint_size: 55.0,
    },
    ModuleTemplate {
        kind: ModuleKind::Storage,
        display_name: "Storage",
        color: 0x8000ff,
        crew_support: 0,
        footprint_size: 45.0,
    },
    ModuleTemplate {
        kind: ModuleKind::Hygiene,
        display_name: "Hygiene",
        color: 0xff0000,
        crew_support: 1,
        footprint_size: 40.0,
    },
    ModuleTemplate {
        kind: ModuleKind::Command,
        display_name: "Command Center",
        color: 0xff8000,
        crew_support: 1,
        footprint_size: 50.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_indexed_by_kind() {
        for kind in ModuleKind::ALL {
            assert_eq!(kind.template().kind, kind);
        }
    }

    #[test]
    fn test_template_values() {
        let pod = ModuleKind::SleepPod.template();
        assert_eq!(pod.crew_support, 2);
        assert_eq!(pod.footprint_size, 60.0);
        assert_eq!(pod.radius(), 30.0);
        assert_eq!(ModuleKind::Storage.template().crew_support, 0);
        assert_eq!(ModuleKind::Hygiene.template().footprint_size, 40.0);
    }

    #[test]
    fn test_all_footprints_positive() {
        assert!(TEMPLATES.iter().all(|t| t.footprint_size > 0.0));
    }

    #[test]
    fn test_rgb() {
        assert_eq!(ModuleKind::Exercise.template().rgb(), (0.0, 128.0 / 255.0, 1.0));
    }

    #[test]
    fn test_serde_key_matches() {
        for kind in ModuleKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.key()));
        }
    }
}
