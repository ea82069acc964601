//! Palette layout and pointer hit testing.
//!
//! Palette templates and placed modules are drawn as axis-aligned squares
//! with side equal to the footprint size, so hit testing uses square bounds
//! even though placement rules treat footprints as circles.

use serde::Serialize;

use crate::constants::palette;
use crate::geometry::Point;
use crate::placement::{Habitat, ModuleId};
use crate::templates::{ModuleKind, ModuleTemplate};

/// One palette entry: the template and where its square sits.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaletteSlot {
    pub kind: ModuleKind,
    pub center: Point,
}

impl PaletteSlot {
    pub fn template(&self) -> &'static ModuleTemplate {
        self.kind.template()
    }

    pub fn label_position(&self) -> Point {
        Point::new(self.center.x, self.center.y + palette::LABEL_OFFSET_Y)
    }

    pub fn contains(&self, point: Point) -> bool {
        square_contains(self.center, self.template().footprint_size, point)
    }
}

/// Palette column of all six templates.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteLayout {
    slots: Vec<PaletteSlot>,
}

impl Default for PaletteLayout {
    fn default() -> Self {
        Self::column(Point::new(palette::START_X, palette::START_Y), palette::SPACING)
    }
}

impl PaletteLayout {
    /// Lay the templates out top to bottom starting at `start`.
    pub fn column(start: Point, spacing: f32) -> Self {
        let slots = ModuleKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| PaletteSlot {
                kind,
                center: Point::new(start.x, start.y + i as f32 * spacing),
            })
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[PaletteSlot] {
        &self.slots
    }

    pub fn slot(&self, kind: ModuleKind) -> Option<&PaletteSlot> {
        self.slots.iter().find(|s| s.kind == kind)
    }

    pub fn kind_at(&self, point: Point) -> Option<ModuleKind> {
        self.slots.iter().find(|s| s.contains(point)).map(|s| s.kind)
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Palette(ModuleKind),
    Placed(ModuleId),
}

/// Resolve a pointer position to the topmost thing under it.
///
/// Placed modules are drawn above the palette, most recent on top.
pub fn hit_test(point: Point, habitat: &Habitat, palette: &PaletteLayout) -> Option<HitTarget> {
    let placed = habitat
        .modules()
        .iter()
        .rev()
        .find(|m| square_contains(m.position, m.template().footprint_size, point))
        .map(|m| HitTarget::Placed(m.id));

    placed.or_else(|| palette.kind_at(point).map(HitTarget::Palette))
}

fn square_contains(center: Point, side: f32, point: Point) -> bool {
    let half = side / 2.0;
    (point.x - center.x).abs() <= half && (point.y - center.y).abs() <= half
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Boundary;

    #[test]
    fn test_default_palette_positions() {
        let p = PaletteLayout::default();
        assert_eq!(p.slots().len(), 6);
        assert_eq!(p.slots()[0].kind, ModuleKind::SleepPod);
        assert_eq!(p.slots()[0].center, Point::new(650.0, 50.0));
        assert_eq!(
            p.slot(ModuleKind::Command).unwrap().center,
            Point::new(650.0, 400.0)
        );
        assert_eq!(
            p.slots()[1].label_position(),
            Point::new(650.0, 155.0)
        );
    }

    #[test]
    fn test_palette_hit() {
        let p = PaletteLayout::default();
        assert_eq!(p.kind_at(Point::new(650.0, 120.0)), Some(ModuleKind::Kitchen));
        // Kitchen square spans 95..145 vertically
        assert_eq!(p.kind_at(Point::new(650.0, 146.0)), None);
        assert_eq!(p.kind_at(Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn test_hit_empty_space() {
        let h = Habitat::new(Boundary::default());
        assert_eq!(
            hit_test(Point::new(400.0, 300.0), &h, &PaletteLayout::default()),
            None
        );
    }

    #[test]
    fn test_placed_module_wins_over_palette() {
        let mut h = Habitat::new(Boundary::default());
        let id = h.spawn(ModuleKind::Storage, Point::new(650.0, 50.0));
        assert_eq!(
            hit_test(Point::new(650.0, 50.0), &h, &PaletteLayout::default()),
            Some(HitTarget::Placed(id))
        );
    }

    #[test]
    fn test_most_recent_module_on_top() {
        let mut h = Habitat::new(Boundary::default());
        h.spawn(ModuleKind::Kitchen, Point::new(400.0, 300.0));
        let top = h.spawn(ModuleKind::Kitchen, Point::new(410.0, 300.0));
        assert_eq!(
            hit_test(Point::new(405.0, 300.0), &h, &PaletteLayout::default()),
            Some(HitTarget::Placed(top))
        );
    }

    #[test]
    fn test_square_corner_hits() {
        // Corner of the square lies outside the circular footprint but is still clickable
        let mut h = Habitat::new(Boundary::default());
        let id = h.spawn(ModuleKind::SleepPod, Point::new(400.0, 300.0));
        assert_eq!(
            hit_test(Point::new(428.0, 328.0), &h, &PaletteLayout::default()),
            Some(HitTarget::Placed(id))
        );
    }
}
