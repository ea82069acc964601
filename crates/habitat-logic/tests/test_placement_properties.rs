//! Property tests for the placement rules.
//!
//! Invariants covered:
//! - `overlaps` is symmetric.
//! - `within_boundary` fails exactly when distance + radius exceeds the radius.
//! - Score and per-module validity do not depend on collection order.
//! - Advice never depends on collection order either, up to line multiset.

use proptest::prelude::*;

use habitat_logic::advice::compute_advice;
use habitat_logic::config::AdviceConfig;
use habitat_logic::geometry::{overlaps, within_boundary, Boundary, Footprint, Point};
use habitat_logic::placement::{is_valid, ModuleId, PlacedModule};
use habitat_logic::scoring::compute_score;
use habitat_logic::templates::ModuleKind;

fn kind_strategy() -> impl Strategy<Value = ModuleKind> {
    (0usize..ModuleKind::ALL.len()).prop_map(|i| ModuleKind::ALL[i])
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (0.0f32..800.0, 0.0f32..600.0).prop_map(|(x, y)| Point::new(x, y))
}

fn footprint_strategy() -> impl Strategy<Value = Footprint> {
    (point_strategy(), 1.0f32..120.0).prop_map(|(c, s)| Footprint::new(c, s))
}

fn modules_strategy() -> impl Strategy<Value = Vec<PlacedModule>> {
    prop::collection::vec((kind_strategy(), point_strategy()), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (kind, position))| PlacedModule {
                id: ModuleId(i as u32),
                kind,
                position,
                is_being_dragged: false,
            })
            .collect()
    })
}

/// A module list together with a permutation of itself.
fn shuffled_pair_strategy() -> impl Strategy<Value = (Vec<PlacedModule>, Vec<PlacedModule>)> {
    modules_strategy().prop_flat_map(|modules| (Just(modules.clone()), Just(modules).prop_shuffle()))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in footprint_strategy(), b in footprint_strategy()) {
        prop_assert_eq!(overlaps(a, b), overlaps(b, a));
    }

    #[test]
    fn boundary_check_matches_definition(fp in footprint_strategy()) {
        let boundary = Boundary::default();
        let outside = fp.center.distance(boundary.center) + fp.radius() > boundary.radius;
        prop_assert_eq!(within_boundary(fp, &boundary), !outside);
    }

    #[test]
    fn score_is_order_invariant((modules, shuffled) in shuffled_pair_strategy()) {
        let boundary = Boundary::default();

        prop_assert_eq!(compute_score(&modules, &boundary), compute_score(&shuffled, &boundary));

        for m in &modules {
            prop_assert_eq!(
                is_valid(m, &modules, &boundary),
                is_valid(m, &shuffled, &boundary)
            );
        }

        let config = AdviceConfig::default();
        let capacity = compute_score(&modules, &boundary).crew_capacity;
        let mut a = compute_advice(&modules, &boundary, capacity, &config).lines().to_vec();
        let mut b = compute_advice(&shuffled, &boundary, capacity, &config).lines().to_vec();
        a.sort_by_key(|l| format!("{:?}", l));
        b.sort_by_key(|l| format!("{:?}", l));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn reversal_keeps_score(modules in modules_strategy()) {
        let boundary = Boundary::default();
        let mut reversed = modules.clone();
        reversed.reverse();
        prop_assert_eq!(compute_score(&modules, &boundary), compute_score(&reversed, &boundary));
    }
}
