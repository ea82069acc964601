//! Pointer interaction state machine.
//!
//! [`dispatch`] takes the current [`InteractionState`] and a [`PointerEvent`],
//! mutates the habitat it is handed, and returns the next state plus the
//! [`Effect`]s a presentation layer should apply. [`Designer`] bundles the
//! habitat, state, configuration and latest summary into one session object.
//!
//! ```text
//!   Idle ──down on palette──▶ Dragging(new module)
//!   Idle ──down on module───▶ Dragging(that module)
//!   Dragging ──move─────────▶ Dragging   (re-validate dragged module only)
//!   Dragging ──up───────────▶ Idle       (re-score, re-advise)
//! ```
//!
//! Everything else leaves the state unchanged. There is no cancel path.

use serde::Serialize;

use crate::advice::Advice;
use crate::config::SceneConfig;
use crate::geometry::Point;
use crate::layout::{hit_test, HitTarget, PaletteLayout};
use crate::placement::{Habitat, ModuleId};
use crate::scoring::ScoreSummary;
use crate::templates::ModuleKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(ModuleId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

/// Instructions for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// A new module was created from a palette template.
    ModuleSpawned { module: ModuleId, kind: ModuleKind },
    /// A module's placement validity was (re)evaluated.
    ValidityChanged { module: ModuleId, valid: bool },
    /// Score and advice were recomputed over the whole layout.
    SummaryChanged { score: ScoreSummary, advice: Advice },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: InteractionState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn stay(state: InteractionState) -> Self {
        Self {
            next: state,
            effects: Vec::new(),
        }
    }
}

/// Apply one pointer event.
pub fn dispatch(
    state: InteractionState,
    event: PointerEvent,
    habitat: &mut Habitat,
    palette: &PaletteLayout,
    config: &SceneConfig,
) -> Transition {
    match (state, event) {
        (InteractionState::Idle, PointerEvent::Down(at)) => match hit_test(at, habitat, palette) {
            Some(HitTarget::Palette(kind)) => {
                let id = habitat.spawn(kind, at);
                habitat.set_dragging(id, true);
                log::debug!("Spawned {} #{} at ({}, {})", kind.key(), id.0, at.x, at.y);
                let mut effects = vec![Effect::ModuleSpawned { module: id, kind }];
                effects.extend(validity_effect(habitat, id));
                Transition {
                    next: InteractionState::Dragging(id),
                    effects,
                }
            }
            Some(HitTarget::Placed(id)) => {
                habitat.set_dragging(id, true);
                log::debug!("Grabbed module #{}", id.0);
                Transition {
                    next: InteractionState::Dragging(id),
                    effects: Vec::new(),
                }
            }
            None => Transition::stay(state),
        },
        (InteractionState::Dragging(id), PointerEvent::Move(at)) => {
            if !habitat.move_to(id, at) {
                log::warn!("Dragged module #{} no longer exists", id.0);
                return Transition::stay(InteractionState::Idle);
            }
            Transition {
                next: state,
                effects: validity_effect(habitat, id).into_iter().collect(),
            }
        }
        (InteractionState::Dragging(id), PointerEvent::Up(_)) => {
            habitat.set_dragging(id, false);
            let mut effects: Vec<Effect> = habitat
                .validity_map()
                .into_iter()
                .map(|(module, valid)| Effect::ValidityChanged { module, valid })
                .collect();
            let score = habitat.score();
            let advice = habitat.advice(score.crew_capacity, &config.advice);
            log::debug!(
                "Dropped module #{}: crew {} from {} valid modules",
                id.0,
                score.crew_capacity,
                score.valid_module_count
            );
            effects.push(Effect::SummaryChanged { score, advice });
            Transition {
                next: InteractionState::Idle,
                effects,
            }
        }
        _ => Transition::stay(state),
    }
}

fn validity_effect(habitat: &Habitat, id: ModuleId) -> Option<Effect> {
    habitat.get(id).map(|m| Effect::ValidityChanged {
        module: id,
        valid: habitat.is_valid(m),
    })
}

/// A designer session: habitat, interaction state and latest summary.
#[derive(Debug, Clone)]
pub struct Designer {
    habitat: Habitat,
    palette: PaletteLayout,
    config: SceneConfig,
    state: InteractionState,
    score: ScoreSummary,
    advice: Advice,
}

impl Default for Designer {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Designer {
    pub fn new(config: SceneConfig) -> Self {
        Self::with_palette(config, PaletteLayout::default())
    }

    pub fn with_palette(config: SceneConfig, palette: PaletteLayout) -> Self {
        let habitat = Habitat::new(config.boundary);
        let score = habitat.score();
        let advice = habitat.advice(score.crew_capacity, &config.advice);
        Self {
            habitat,
            palette,
            config,
            state: InteractionState::Idle,
            score,
            advice,
        }
    }

    /// Feed one pointer event through the state machine.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Effect> {
        let transition = dispatch(
            self.state,
            event,
            &mut self.habitat,
            &self.palette,
            &self.config,
        );
        self.state = transition.next;
        for effect in &transition.effects {
            if let Effect::SummaryChanged { score, advice } = effect {
                self.score = *score;
                self.advice = advice.clone();
            }
        }
        transition.effects
    }

    /// Press, drag to `to`, release: a whole drag gesture.
    pub fn drag(&mut self, from: Point, to: Point) -> Vec<Effect> {
        let mut effects = self.handle(PointerEvent::Down(from));
        effects.extend(self.handle(PointerEvent::Move(to)));
        effects.extend(self.handle(PointerEvent::Up(to)));
        effects
    }

    /// Drag a new module of `kind` from its palette slot to `to`.
    pub fn place(&mut self, kind: ModuleKind, to: Point) -> Option<ModuleId> {
        let from = self.palette.slot(kind)?.center;
        self.drag(from, to).into_iter().find_map(|e| match e {
            Effect::ModuleSpawned { module, .. } => Some(module),
            _ => None,
        })
    }

    pub fn habitat(&self) -> &Habitat {
        &self.habitat
    }

    pub fn palette(&self) -> &PaletteLayout {
        &self.palette
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Score as of the last drop.
    pub fn score(&self) -> ScoreSummary {
        self.score
    }

    /// Advice as of the last drop.
    pub fn advice(&self) -> &Advice {
        &self.advice
    }
}
