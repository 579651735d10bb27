//! Lane Runner - a three-lane endless driving game
//!
//! Core modules:
//! - `sim`: Game state, per-tick update, collision, input mapping
//! - `scene`: Scene graph, follow camera and entity factory
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Score/speed readout and game-over overlay
//! - `driver`: Frame loop tying simulation, rendering and HUD together
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod hud;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use driver::{FrameOutcome, LoopDriver};
pub use settings::{EasingMode, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Refresh rate the per-tick lane easing was balanced at
    pub const FRAME_RATE_REF: f32 = 60.0;
    /// Largest elapsed time fed into a single tick (tab-suspend guard)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Elapsed time assumed for the very first frame
    pub const FIRST_FRAME_DT: f32 = 1.0 / FRAME_RATE_REF;

    /// Leftmost and rightmost lane index
    pub const MIN_LANE: i8 = -1;
    pub const MAX_LANE: i8 = 1;

    /// Ground plane size (square)
    pub const GROUND_SIZE: f32 = 100.0;
}
