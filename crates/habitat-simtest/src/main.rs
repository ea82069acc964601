//! Habitat Designer Headless Harness
//!
//! Replays scripted pointer sessions against the pure layout logic.
//! Runs entirely in-process — no window, no rendering.
//!
//! Usage:
//!   cargo run -p habitat-simtest
//!   cargo run -p habitat-simtest -- --verbose
//!   cargo run -p habitat-simtest -- --json        (dump final layouts)
//!   cargo run -p habitat-simtest -- --config scene.json

use habitat_logic::advice::AdviceLine;
use habitat_logic::config::SceneConfig;
use habitat_logic::controller::{Designer, Effect, InteractionState, PointerEvent};
use habitat_logic::geometry::{overlaps, within_boundary, Footprint, Point};
use habitat_logic::placement::PlacedModule;
use habitat_logic::scoring::ScoreSummary;
use habitat_logic::templates::{ModuleKind, TEMPLATES};
use serde::Serialize;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

struct Options {
    verbose: bool,
    json: bool,
    config: SceneConfig,
}

/// Final state of one scenario, for `--json`.
#[derive(Serialize)]
struct LayoutDump<'a> {
    scenario: &'a str,
    modules: &'a [PlacedModule],
    score: ScoreSummary,
    advice: Vec<AdviceLine>,
}

/// Parse command-line arguments, skipping the program name in `args[0]`.
fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        verbose: false,
        json: false,
        config: SceneConfig::bundled().map_err(|e| e.to_string())?,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--verbose" | "-v" => options.verbose = true,
            "--json" => options.json = true,
            "--config" | "-c" if i + 1 < args.len() => {
                options.config = SceneConfig::load(&args[i + 1]).map_err(|e| e.to_string())?;
                i += 1;
            }
            flag @ ("--config" | "-c") => return Err(format!("missing value for {}", flag)),
            other => return Err(format!("unrecognised argument: {}", other)),
        }
        i += 1;
    }
    Ok(options)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_options(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    println!("=== Habitat Designer Harness ===\n");

    let mut results = Vec::new();

    // 1. Template table sanity
    results.extend(validate_templates(&options));

    // 2. Geometry edge cases
    results.extend(validate_geometry(&options));

    // 3. Pointer sessions
    results.extend(validate_sessions(&options));

    // 4. Advice rules
    results.extend(validate_advice(&options));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || options.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn dump(options: &Options, scenario: &str, designer: &Designer) {
    if !options.json {
        return;
    }
    let layout = LayoutDump {
        scenario,
        modules: designer.habitat().modules(),
        score: designer.score(),
        advice: designer.advice().lines().to_vec(),
    };
    match serde_json::to_string_pretty(&layout) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize {}: {}", scenario, e),
    }
}

/// Place `kind` at `at`, recording a failed result if nothing was spawned.
fn place_checked(
    d: &mut Designer,
    kind: ModuleKind,
    at: Point,
    scenario: &str,
    results: &mut Vec<TestResult>,
) -> bool {
    if d.place(kind, at).is_some() {
        return true;
    }
    results.push(TestResult {
        name: format!("{}_place_{}", scenario, kind.key().to_lowercase()),
        passed: false,
        detail: format!(
            "{} was not spawned at ({}, {})",
            kind.template().display_name,
            at.x,
            at.y
        ),
    });
    false
}

// ── 1. Templates ────────────────────────────────────────────────────────

fn validate_templates(_options: &Options) -> Vec<TestResult> {
    println!("--- Module Templates ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "templates_count".into(),
        passed: TEMPLATES.len() == 6,
        detail: format!("{} templates defined", TEMPLATES.len()),
    });

    let bad_size: Vec<_> = TEMPLATES
        .iter()
        .filter(|t| t.footprint_size <= 0.0)
        .map(|t| t.display_name)
        .collect();
    results.push(TestResult {
        name: "templates_positive_footprint".into(),
        passed: bad_size.is_empty(),
        detail: if bad_size.is_empty() {
            "all templates have a positive footprint".into()
        } else {
            format!("non-positive footprint: {}", bad_size.join(", "))
        },
    });

    let total_crew: u32 = TEMPLATES.iter().map(|t| t.crew_support).sum();
    results.push(TestResult {
        name: "templates_total_crew".into(),
        passed: total_crew == 6,
        detail: format!("one of each template supports {} crew", total_crew),
    });

    results
}

// ── 2. Geometry ─────────────────────────────────────────────────────────

fn validate_geometry(options: &Options) -> Vec<TestResult> {
    println!("--- Geometry ---");
    let mut results = Vec::new();
    let boundary = options.config.boundary;

    let c = boundary.center;
    let pod = ModuleKind::SleepPod.template().footprint_size;
    let kitchen = ModuleKind::Kitchen.template().footprint_size;

    let edge = Footprint::new(Point::new(c.x + boundary.radius - pod / 2.0, c.y), pod);
    results.push(TestResult {
        name: "geometry_touching_boundary_inside".into(),
        passed: within_boundary(edge, &boundary),
        detail: format!("pod at x={} touches the boundary", edge.center.x),
    });

    let beyond = Footprint::new(Point::new(edge.center.x + 1.0, c.y), pod);
    results.push(TestResult {
        name: "geometry_past_boundary_outside".into(),
        passed: !within_boundary(beyond, &boundary),
        detail: format!("pod at x={} pokes out", beyond.center.x),
    });

    let a = Footprint::new(c, pod);
    let tangent = Footprint::new(Point::new(c.x + (pod + kitchen) / 2.0, c.y), kitchen);
    results.push(TestResult {
        name: "geometry_tangent_not_overlapping".into(),
        passed: !overlaps(a, tangent) && !overlaps(tangent, a),
        detail: format!("centres {} apart", (pod + kitchen) / 2.0),
    });

    let closer = Footprint::new(Point::new(tangent.center.x - 1.0, c.y), kitchen);
    results.push(TestResult {
        name: "geometry_closer_overlaps".into(),
        passed: overlaps(a, closer) && overlaps(closer, a),
        detail: format!("centres {} apart", (pod + kitchen) / 2.0 - 1.0),
    });

    results
}

// ── 3. Sessions ─────────────────────────────────────────────────────────

fn validate_sessions(options: &Options) -> Vec<TestResult> {
    println!("--- Pointer Sessions ---");
    let mut results = Vec::new();
    let c = options.config.boundary.center;

    // Single sleep pod in the middle
    let mut d = Designer::new(options.config.clone());
    place_checked(
        &mut d,
        ModuleKind::SleepPod,
        c,
        "session_single_pod_center",
        &mut results,
    );
    dump(options, "single_pod_center", &d);
    results.push(TestResult {
        name: "session_single_pod_center".into(),
        passed: d.score()
            == ScoreSummary {
                crew_capacity: 2,
                valid_module_count: 1,
            },
        detail: d.score().to_string().replace('\n', ", "),
    });

    // Pod far outside
    let mut d = Designer::new(options.config.clone());
    let outside = Point::new(c.x + options.config.boundary.radius + 50.0, c.y);
    place_checked(
        &mut d,
        ModuleKind::SleepPod,
        outside,
        "session_single_pod_outside",
        &mut results,
    );
    dump(options, "single_pod_outside", &d);
    results.push(TestResult {
        name: "session_single_pod_outside".into(),
        passed: d.score().crew_capacity == 0,
        detail: d.score().to_string().replace('\n', ", "),
    });

    // Score must lag until release
    let mut d = Designer::new(options.config.clone());
    let start = d
        .palette()
        .slot(ModuleKind::Kitchen)
        .map(|s| s.center)
        .unwrap_or(c);
    d.handle(PointerEvent::Down(start));
    let move_effects = d.handle(PointerEvent::Move(c));
    let during = d.score();
    let up_effects = d.handle(PointerEvent::Up(c));
    let summary_on_move = move_effects
        .iter()
        .any(|e| matches!(e, Effect::SummaryChanged { .. }));
    let summary_on_up = up_effects
        .iter()
        .any(|e| matches!(e, Effect::SummaryChanged { .. }));
    results.push(TestResult {
        name: "session_score_on_release_only".into(),
        passed: !summary_on_move
            && summary_on_up
            && during.crew_capacity == 0
            && d.score().crew_capacity == 1,
        detail: format!(
            "crew {} while dragging, {} after drop",
            during.crew_capacity,
            d.score().crew_capacity
        ),
    });
    results.push(TestResult {
        name: "session_returns_to_idle".into(),
        passed: d.state() == InteractionState::Idle,
        detail: format!("state after drop: {:?}", d.state()),
    });

    // Full crew
    let mut d = Designer::new(options.config.clone());
    for (kind, dx, dy) in full_crew_offsets() {
        let at = Point::new(c.x + dx, c.y + dy);
        place_checked(&mut d, kind, at, "session_full_crew", &mut results);
    }
    dump(options, "full_crew", &d);
    let target = options.config.advice.target_crew_capacity;
    results.push(TestResult {
        name: "session_full_crew".into(),
        passed: d.score().crew_capacity >= target && d.advice().contains(AdviceLine::MaxCapacity),
        detail: format!(
            "crew {} of {} target, advice: {}",
            d.score().crew_capacity,
            target,
            d.advice().plain().replace('\n', " / ")
        ),
    });

    results
}

fn full_crew_offsets() -> Vec<(ModuleKind, f32, f32)> {
    vec![
        (ModuleKind::SleepPod, 0.0, -150.0),
        (ModuleKind::SleepPod, 0.0, 150.0),
        (ModuleKind::Kitchen, -150.0, 0.0),
        (ModuleKind::Command, 150.0, 0.0),
        (ModuleKind::Storage, 0.0, 0.0),
    ]
}

// ── 4. Advice ───────────────────────────────────────────────────────────

fn validate_advice(options: &Options) -> Vec<TestResult> {
    println!("--- Advice Rules ---");
    let mut results = Vec::new();
    let c = options.config.boundary.center;

    let d = Designer::new(options.config.clone());
    results.push(TestResult {
        name: "advice_empty_layout".into(),
        passed: d.advice().lines() == [AdviceLine::PlaceModules],
        detail: d.advice().plain(),
    });

    let mut d = Designer::new(options.config.clone());
    place_checked(
        &mut d,
        ModuleKind::Hygiene,
        c,
        "advice_hygiene_near_kitchen",
        &mut results,
    );
    place_checked(
        &mut d,
        ModuleKind::Kitchen,
        Point::new(c.x + 50.0, c.y),
        "advice_hygiene_near_kitchen",
        &mut results,
    );
    dump(options, "hygiene_near_kitchen", &d);
    results.push(TestResult {
        name: "advice_hygiene_near_kitchen".into(),
        passed: d.advice().contains(AdviceLine::HygieneNearKitchen),
        detail: d.advice().plain().replace('\n', " / "),
    });

    let mut d = Designer::new(options.config.clone());
    place_checked(
        &mut d,
        ModuleKind::SleepPod,
        c,
        "advice_sleep_near_exercise",
        &mut results,
    );
    place_checked(
        &mut d,
        ModuleKind::Exercise,
        Point::new(c.x + 70.0, c.y),
        "advice_sleep_near_exercise",
        &mut results,
    );
    dump(options, "sleep_near_exercise", &d);
    results.push(TestResult {
        name: "advice_sleep_near_exercise".into(),
        passed: d.advice().contains(AdviceLine::SleepNearExercise),
        detail: d.advice().plain().replace('\n', " / "),
    });

    // Overlapping pair is invalid and therefore silent
    let mut d = Designer::new(options.config.clone());
    place_checked(&mut d, ModuleKind::Hygiene, c, "advice_ignores_invalid", &mut results);
    place_checked(
        &mut d,
        ModuleKind::Kitchen,
        Point::new(c.x + 20.0, c.y),
        "advice_ignores_invalid",
        &mut results,
    );
    results.push(TestResult {
        name: "advice_ignores_invalid".into(),
        passed: !d.advice().contains(AdviceLine::HygieneNearKitchen),
        detail: d.advice().plain().replace('\n', " / "),
    });

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("habitat-simtest")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults_to_bundled_scene() {
        let options = parse_options(&args(&[])).unwrap();
        assert!(!options.verbose);
        assert!(!options.json);
        assert_eq!(options.config, SceneConfig::default());
    }

    #[test]
    fn test_flags() {
        let options = parse_options(&args(&["-v", "--json"])).unwrap();
        assert!(options.verbose);
        assert!(options.json);
    }

    #[test]
    fn test_config_without_value() {
        let err = parse_options(&args(&["--config"])).err().unwrap();
        assert_eq!(err, "missing value for --config");
        let err = parse_options(&args(&["-v", "-c"])).err().unwrap();
        assert_eq!(err, "missing value for -c");
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_options(&args(&["--fast"])).err().unwrap();
        assert_eq!(err, "unrecognised argument: --fast");
    }

    #[test]
    fn test_blocked_palette_slot_fails_placement() {
        let mut d = Designer::new(SceneConfig::default());
        let kitchen_slot = d.palette().slot(ModuleKind::Kitchen).unwrap().center;
        let mut results = Vec::new();

        // a pod dropped on the kitchen slot is grabbed instead of a new kitchen
        assert!(place_checked(
            &mut d,
            ModuleKind::SleepPod,
            kitchen_slot,
            "blocked",
            &mut results
        ));
        assert!(results.is_empty());
        assert!(!place_checked(
            &mut d,
            ModuleKind::Kitchen,
            Point::new(400.0, 300.0),
            "blocked",
            &mut results
        ));

        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].name, "blocked_place_kitchen");
        assert_eq!(d.habitat().len(), 1);
    }
}
