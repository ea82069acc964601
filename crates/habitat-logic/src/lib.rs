//! Pure layout logic for the habitat designer.
//!
//! This crate contains everything the designer scene decides that is
//! independent of any window, renderer or input backend. Functions take plain
//! data and return results, making them unit-testable and usable from the Bevy
//! viewer, the headless simtest, and any future host.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`advice`] | Proximity heuristics and capacity-tier advice lines |
//! | [`config`] | Scene configuration (boundary, advice thresholds), JSON loading |
//! | [`constants`] | Scene dimensions, boundary, palette layout, advice thresholds |
//! | [`controller`] | Idle/Dragging pointer state machine and designer session |
//! | [`error`] | Error types for configuration loading and restored layouts |
//! | [`geometry`] | Points, circular footprints, containment and overlap |
//! | [`layout`] | Palette slot positions and pointer hit testing |
//! | [`placement`] | Placed modules, the habitat container, placement validity |
//! | [`scoring`] | Crew-capacity aggregation over valid modules |
//! | [`templates`] | The six immutable module templates |

pub mod advice;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod placement;
pub mod scoring;
pub mod templates;
