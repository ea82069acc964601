//! Scene constants — dimensions, boundary, palette layout, advice thresholds.
//!
//! Scene coordinates are 800×600 with the origin at the top-left and y growing
//! downwards. Hosts with a different coordinate system convert at the edge.

pub mod scene {
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
}

pub mod boundary {
    pub const CENTER_X: f32 = 400.0;
    pub const CENTER_Y: f32 = 300.0;
    pub const RADIUS: f32 = 250.0;
}

pub mod palette {
    /// Column the palette squares are centred on.
    pub const START_X: f32 = 650.0;
    /// Centre of the first palette square.
    pub const START_Y: f32 = 50.0;
    /// Vertical distance between consecutive palette squares.
    pub const SPACING: f32 = 70.0;
    /// Offset from a palette square's centre to its label.
    pub const LABEL_OFFSET_Y: f32 = 35.0;
}

pub mod advice {
    /// Hygiene closer than this to a kitchen triggers a warning.
    pub const HYGIENE_KITCHEN_MIN_DISTANCE: f32 = 100.0;
    /// Sleep pod closer than this to an exercise area triggers a warning.
    pub const SLEEP_EXERCISE_MIN_DISTANCE: f32 = 80.0;
    /// Crew capacity at which the design counts as complete.
    pub const TARGET_CREW_CAPACITY: u32 = 6;
}
