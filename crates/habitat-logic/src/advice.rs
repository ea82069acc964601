//! Placement advice — proximity heuristics and capacity tiers.
//!
//! Advice only looks at validly placed modules. Lines are produced in a fixed
//! order: proximity warnings first (one per offending subject module), then
//! exactly one capacity-tier line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::AdviceConfig;
use crate::geometry::Boundary;
use crate::placement::{is_valid, Habitat, PlacedModule};
use crate::templates::ModuleKind;

/// How an advice line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceKind {
    Warning,
    Tip,
    Celebration,
}

impl AdviceKind {
    pub fn icon(self) -> &'static str {
        match self {
            AdviceKind::Warning => "⚠️",
            AdviceKind::Tip => "💡",
            AdviceKind::Celebration => "🎉",
        }
    }
}

/// One line of advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceLine {
    HygieneNearKitchen,
    SleepNearExercise,
    PlaceModules,
    MaxCapacity,
    AddMore,
    Onboarding,
}

impl AdviceLine {
    pub fn kind(self) -> AdviceKind {
        match self {
            AdviceLine::HygieneNearKitchen | AdviceLine::SleepNearExercise => AdviceKind::Warning,
            AdviceLine::MaxCapacity => AdviceKind::Celebration,
            AdviceLine::PlaceModules | AdviceLine::AddMore | AdviceLine::Onboarding => {
                AdviceKind::Tip
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AdviceLine::HygieneNearKitchen => "Move hygiene away from kitchen for safety!",
            AdviceLine::SleepNearExercise => {
                "Consider placing sleep pods away from exercise areas!"
            }
            AdviceLine::PlaceModules => "Place modules inside the habitat boundary to support crew!",
            AdviceLine::MaxCapacity => "Excellent habitat design! Maximum crew capacity reached!",
            AdviceLine::AddMore => "Try adding more modules to increase crew capacity!",
            AdviceLine::Onboarding => "Drag modules from the palette to design your habitat!",
        }
    }
}

impl fmt::Display for AdviceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind().icon(), self.message())
    }
}

/// Ordered advice lines for the current layout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Advice {
    lines: Vec<AdviceLine>,
}

impl Advice {
    pub fn lines(&self) -> &[AdviceLine] {
        &self.lines
    }

    pub fn contains(&self, line: AdviceLine) -> bool {
        self.lines.contains(&line)
    }

    /// Number of times `line` was emitted.
    pub fn count(&self, line: AdviceLine) -> usize {
        self.lines.iter().filter(|&&l| l == line).count()
    }

    /// Lines to show, falling back to the onboarding prompt when empty.
    fn shown(&self) -> &[AdviceLine] {
        if self.lines.is_empty() {
            &[AdviceLine::Onboarding]
        } else {
            &self.lines
        }
    }

    /// Messages without icons, newline separated.
    pub fn plain(&self) -> String {
        self.shown()
            .iter()
            .map(|l| l.message())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.shown().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// "Keep `subject` at least `min_distance` away from any `neighbor`".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityRule {
    pub subject: ModuleKind,
    pub neighbor: ModuleKind,
    pub min_distance: f32,
    pub line: AdviceLine,
}

/// Proximity rules in evaluation order.
pub fn proximity_rules(config: &AdviceConfig) -> [ProximityRule; 2] {
    [
        ProximityRule {
            subject: ModuleKind::Hygiene,
            neighbor: ModuleKind::Kitchen,
            min_distance: config.hygiene_kitchen_min_distance,
            line: AdviceLine::HygieneNearKitchen,
        },
        ProximityRule {
            subject: ModuleKind::SleepPod,
            neighbor: ModuleKind::Exercise,
            min_distance: config.sleep_exercise_min_distance,
            line: AdviceLine::SleepNearExercise,
        },
    ]
}

/// Capacity-tier line for a crew capacity.
pub fn capacity_tier(crew_capacity: u32, config: &AdviceConfig) -> AdviceLine {
    if crew_capacity == 0 {
        AdviceLine::PlaceModules
    } else if crew_capacity >= config.target_crew_capacity {
        AdviceLine::MaxCapacity
    } else {
        AdviceLine::AddMore
    }
}

/// Evaluate all advice rules over the valid subset of `modules`.
pub fn compute_advice(
    modules: &[PlacedModule],
    boundary: &Boundary,
    crew_capacity: u32,
    config: &AdviceConfig,
) -> Advice {
    let valid: Vec<&PlacedModule> = modules
        .iter()
        .filter(|m| is_valid(m, modules, boundary))
        .collect();

    let mut lines = Vec::new();
    for rule in proximity_rules(config) {
        let subjects = valid.iter().filter(|m| m.kind == rule.subject);
        for subject in subjects {
            let too_close = valid
                .iter()
                .filter(|m| m.kind == rule.neighbor)
                .any(|n| subject.position.distance(n.position) < rule.min_distance);
            if too_close {
                lines.push(rule.line);
            }
        }
    }

    lines.push(capacity_tier(crew_capacity, config));
    Advice { lines }
}

impl Habitat {
    /// Advice for the current layout, scored with `crew_capacity`.
    pub fn advice(&self, crew_capacity: u32, config: &AdviceConfig) -> Advice {
        compute_advice(self.modules(), self.boundary(), crew_capacity, config)
    }
}
