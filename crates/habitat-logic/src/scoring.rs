//! Crew-capacity scoring.
//!
//! Recomputed from scratch on every call. Only validly placed modules count.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Boundary;
use crate::placement::{is_valid, Habitat, PlacedModule};

/// Aggregate score over all validly placed modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub crew_capacity: u32,
    pub valid_module_count: u32,
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CREW SUPPORTED: {}\nVALID MODULES: {}",
            self.crew_capacity, self.valid_module_count
        )
    }
}

/// Sum crew support and count modules over every valid placement.
pub fn compute_score(modules: &[PlacedModule], boundary: &Boundary) -> ScoreSummary {
    modules
        .iter()
        .filter(|m| is_valid(m, modules, boundary))
        .fold(ScoreSummary::default(), |mut acc, m| {
            acc.crew_capacity += m.template().crew_support;
            acc.valid_module_count += 1;
            acc
        })
}

impl Habitat {
    pub fn score(&self) -> ScoreSummary {
        compute_score(self.modules(), self.boundary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::templates::ModuleKind;

    #[test]
    fn test_empty_habitat_scores_zero() {
        let h = Habitat::new(Boundary::default());
        assert_eq!(h.score(), ScoreSummary::default());
    }

    #[test]
    fn test_single_sleep_pod_centered() {
        let mut h = Habitat::new(Boundary::default());
        h.spawn(ModuleKind::SleepPod, Point::new(400.0, 300.0));
        assert_eq!(
            h.score(),
            ScoreSummary {
                crew_capacity: 2,
                valid_module_count: 1
            }
        );
    }

    #[test]
    fn test_sleep_pod_outside_scores_zero() {
        let mut h = Habitat::new(Boundary::default());
        h.spawn(ModuleKind::SleepPod, Point::new(700.0, 300.0));
        assert_eq!(h.score().crew_capacity, 0);
        assert_eq!(h.score().valid_module_count, 0);
    }

    #[test]
    fn test_storage_counts_as_valid_without_crew() {
        let mut h = Habitat::new(Boundary::default());
        h.spawn(ModuleKind::Storage, Point::new(400.0, 300.0));
        let score = h.score();
        assert_eq!(score.crew_capacity, 0);
        assert_eq!(score.valid_module_count, 1);
    }

    #[test]
    fn test_overlapping_pair_contributes_nothing() {
        let mut h = Habitat::new(Boundary::default());
        h.spawn(ModuleKind::SleepPod, Point::new(400.0, 300.0));
        h.spawn(ModuleKind::Kitchen, Point::new(420.0, 300.0));
        h.spawn(ModuleKind::Command, Point::new(250.0, 300.0));
        let score = h.score();
        assert_eq!(score.crew_capacity, 1);
        assert_eq!(score.valid_module_count, 1);
    }

    #[test]
    fn test_display() {
        let s = ScoreSummary {
            crew_capacity: 3,
            valid_module_count: 2,
        };
        assert_eq!(s.to_string(), "CREW SUPPORTED: 3\nVALID MODULES: 2");
    }

    #[test]
    fn test_idempotent() {
        let mut h = Habitat::new(Boundary::default());
        h.spawn(ModuleKind::SleepPod, Point::new(400.0, 300.0));
        h.spawn(ModuleKind::Hygiene, Point::new(300.0, 200.0));
        assert_eq!(h.score(), h.score());
    }
}
