//! Placed modules, the habitat container, and placement validity.
//!
//! A placement is valid when the module's footprint lies inside the boundary
//! and overlaps no other placed module. Validity is never stored: it is a pure
//! function of the current module positions and is recomputed on demand.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::{overlaps, within_boundary, Boundary, Footprint, Point};
use crate::templates::{ModuleKind, ModuleTemplate};

/// Stable identity of a placed module, assigned at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(pub u32);

/// A module instantiated from a template and positioned in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedModule {
    pub id: ModuleId,
    pub kind: ModuleKind,
    pub position: Point,
    pub is_being_dragged: bool,
}

impl PlacedModule {
    pub fn template(&self) -> &'static ModuleTemplate {
        self.kind.template()
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.position, self.template().footprint_size)
    }
}

/// Owned collection of placed modules inside one boundary.
///
/// Modules are kept in spawn order, which is also draw order: later modules
/// render above earlier ones. Deserialized layouts are checked for
/// duplicate ids and never hand out an id that is already taken.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "HabitatRecord")]
pub struct Habitat {
    boundary: Boundary,
    modules: Vec<PlacedModule>,
    next_id: u32,
}

/// Serialized shape of a [`Habitat`], validated on the way in.
#[derive(Deserialize)]
struct HabitatRecord {
    #[serde(default)]
    boundary: Boundary,
    #[serde(default)]
    modules: Vec<PlacedModule>,
    #[serde(default)]
    next_id: u32,
}

impl TryFrom<HabitatRecord> for Habitat {
    type Error = LayoutError;

    fn try_from(record: HabitatRecord) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for m in &record.modules {
            if !seen.insert(m.id) {
                return Err(LayoutError::DuplicateModuleId(m.id.0));
            }
        }
        let first_free = record
            .modules
            .iter()
            .map(|m| m.id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        Ok(Self {
            boundary: record.boundary,
            modules: record.modules,
            next_id: record.next_id.max(first_free),
        })
    }
}

impl Habitat {
    pub fn new(boundary: Boundary) -> Self {
        Self {
            boundary,
            modules: Vec::new(),
            next_id: 0,
        }
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn modules(&self) -> &[PlacedModule] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, id: ModuleId) -> Option<&PlacedModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: ModuleId) -> Option<&mut PlacedModule> {
        self.modules.iter_mut().find(|m| m.id == id)
    }

    /// Place a new module of `kind` at `position` and return its id.
    pub fn spawn(&mut self, kind: ModuleKind, position: Point) -> ModuleId {
        let id = ModuleId(self.next_id);
        self.next_id += 1;
        self.modules.push(PlacedModule {
            id,
            kind,
            position,
            is_being_dragged: false,
        });
        id
    }

    /// Move a module. Returns false if no module has this id.
    pub fn move_to(&mut self, id: ModuleId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(m) => {
                m.position = position;
                true
            }
            None => false,
        }
    }

    /// Set or clear a module's drag flag. Returns false if no module has this id.
    pub fn set_dragging(&mut self, id: ModuleId, dragging: bool) -> bool {
        match self.get_mut(id) {
            Some(m) => {
                m.is_being_dragged = dragging;
                true
            }
            None => false,
        }
    }

    /// Validity of one module against the rest of the habitat.
    pub fn is_valid(&self, module: &PlacedModule) -> bool {
        is_valid(module, &self.modules, &self.boundary)
    }

    /// Validity of every placed module, keyed by id.
    pub fn validity_map(&self) -> BTreeMap<ModuleId, bool> {
        self.modules
            .iter()
            .map(|m| (m.id, self.is_valid(m)))
            .collect()
    }
}

/// True if `module` is inside `boundary` and overlaps none of `all_modules`.
///
/// `module` itself may appear in `all_modules`; it is skipped by id.
pub fn is_valid(module: &PlacedModule, all_modules: &[PlacedModule], boundary: &Boundary) -> bool {
    let footprint = module.footprint();
    if !within_boundary(footprint, boundary) {
        return false;
    }

    !all_modules
        .iter()
        .filter(|other| other.id != module.id)
        .any(|other| overlaps(footprint, other.footprint()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habitat() -> Habitat {
        Habitat::new(Boundary::default())
    }

    #[test]
    fn test_spawn_assigns_unique_ids() {
        let mut h = habitat();
        let a = h.spawn(ModuleKind::Kitchen, Point::new(400.0, 300.0));
        let b = h.spawn(ModuleKind::Kitchen, Point::new(400.0, 300.0));
        assert_ne!(a, b);
        assert_eq!(h.len(), 2);
        assert!(!h.get(a).unwrap().is_being_dragged);
    }

    #[test]
    fn test_single_centered_module_valid() {
        let mut h = habitat();
        let id = h.spawn(ModuleKind::SleepPod, Point::new(400.0, 300.0));
        assert!(h.is_valid(h.get(id).unwrap()));
    }

    #[test]
    fn test_module_outside_boundary_invalid() {
        let mut h = habitat();
        let id = h.spawn(ModuleKind::SleepPod, Point::new(700.0, 300.0));
        assert!(!h.is_valid(h.get(id).unwrap()));
    }

    #[test]
    fn test_overlapping_modules_both_invalid() {
        let mut h = habitat();
        let a = h.spawn(ModuleKind::SleepPod, Point::new(400.0, 300.0));
        let b = h.spawn(ModuleKind::Kitchen, Point::new(440.0, 300.0));
        let validity = h.validity_map();
        assert!(!validity[&a]);
        assert!(!validity[&b]);
    }

    #[test]
    fn test_tangent_modules_valid() {
        let mut h = habitat();
        let a = h.spawn(ModuleKind::SleepPod, Point::new(400.0, 300.0));
        let b = h.spawn(ModuleKind::Kitchen, Point::new(455.0, 300.0));
        let validity = h.validity_map();
        assert!(validity[&a]);
        assert!(validity[&b]);
    }

    #[test]
    fn test_outside_module_still_blocks_neighbour() {
        // Validity checks every other placed module, valid or not.
        let mut h = habitat();
        let inside = h.spawn(ModuleKind::Kitchen, Point::new(620.0, 300.0));
        h.spawn(ModuleKind::SleepPod, Point::new(660.0, 300.0));
        assert!(!h.is_valid(h.get(inside).unwrap()));
    }

    #[test]
    fn test_self_excluded_by_identity() {
        // Two modules at the same spot still overlap each other; one alone does not.
        let mut h = habitat();
        let a = h.spawn(ModuleKind::Storage, Point::new(300.0, 300.0));
        assert!(h.is_valid(h.get(a).unwrap()));
        h.spawn(ModuleKind::Storage, Point::new(300.0, 300.0));
        assert!(!h.is_valid(h.get(a).unwrap()));
    }

    #[test]
    fn test_move_and_drag_flag() {
        let mut h = habitat();
        let id = h.spawn(ModuleKind::Command, Point::new(0.0, 0.0));
        assert!(h.move_to(id, Point::new(400.0, 300.0)));
        assert!(h.set_dragging(id, true));
        let m = h.get(id).unwrap();
        assert_eq!(m.position, Point::new(400.0, 300.0));
        assert!(m.is_being_dragged);

        assert!(!h.move_to(ModuleId(99), Point::new(1.0, 1.0)));
        assert!(!h.set_dragging(ModuleId(99), true));
    }

    #[test]
    fn test_restored_layout_spawns_fresh_id() {
        let json = r#"{
            "modules": [{"id": 0, "kind": "SLEEP_POD", "position": {"x": 400.0, "y": 300.0}, "is_being_dragged": false}],
            "next_id": 0
        }"#;
        let mut h: Habitat = serde_json::from_str(json).unwrap();
        let id = h.spawn(ModuleKind::SleepPod, Point::new(400.0, 300.0));
        assert_eq!(id, ModuleId(1));
        // coincident pods block each other
        assert_eq!(h.validity_map().values().filter(|v| **v).count(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "modules": [
                {"id": 3, "kind": "KITCHEN", "position": {"x": 300.0, "y": 300.0}, "is_being_dragged": false},
                {"id": 3, "kind": "STORAGE", "position": {"x": 500.0, "y": 300.0}, "is_being_dragged": false}
            ]
        }"#;
        let err = serde_json::from_str::<Habitat>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate module id 3"));
    }

    #[test]
    fn test_free_function_matches_method() {
        let mut h = habitat();
        h.spawn(ModuleKind::Hygiene, Point::new(400.0, 300.0));
        h.spawn(ModuleKind::Kitchen, Point::new(430.0, 300.0));
        for m in h.modules() {
            assert_eq!(is_valid(m, h.modules(), h.boundary()), h.is_valid(m));
        }
    }
}
