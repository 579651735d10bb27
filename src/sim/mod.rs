//! Gameplay simulation
//!
//! All gameplay rules live here. The simulation positions scene objects
//! through handles but knows nothing about GPUs or the DOM.

pub mod autopilot;
pub mod collision;
pub mod game;
pub mod input;
pub mod road;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use game::Game;
pub use input::InputEvent;
pub use state::{GamePhase, GameState, Lane, Steer};
pub use tick::tick;
