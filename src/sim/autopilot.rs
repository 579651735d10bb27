//! Demo autopilot
//!
//! Picks the lane whose nearest oncoming enemy is farthest away and steers
//! one lane toward it per call.

use super::state::{GameState, Lane, Steer};
use crate::scene::Scene;
use crate::tuning::Tuning;

/// Enemies farther ahead than this are ignored
const LOOK_AHEAD: f32 = 40.0;

/// Suggest a lane change, or `None` to hold the current lane
pub fn suggest(state: &GameState, scene: &Scene, tuning: &Tuning) -> Option<Steer> {
    let player_z = scene.position(state.player).map(|p| p.z).unwrap_or(0.0);

    // Distance to the closest threat per lane (infinite when clear)
    let clearance = |lane: Lane| -> f32 {
        let lane_x = lane.x(tuning.lane_width);
        state
            .enemies
            .iter()
            .filter_map(|&id| scene.position(id))
            .filter(|p| (p.x - lane_x).abs() < tuning.lane_width / 2.0)
            .map(|p| p.z - player_z)
            .filter(|&dz| dz > -tuning.collision.longitudinal && dz < LOOK_AHEAD)
            .fold(f32::INFINITY, f32::min)
    };

    let current = clearance(state.lane);
    if current.is_infinite() {
        return None;
    }

    // Only adjacent lanes are reachable in one step; prefer the clearer one
    let best = [Steer::Left, Steer::Right]
        .into_iter()
        .map(|steer| (steer, state.lane.shifted(steer)))
        .filter(|(_, lane)| *lane != state.lane)
        .map(|(steer, lane)| (steer, clearance(lane)))
        .filter(|(_, c)| *c > current)
        .max_by(|a, b| a.1.total_cmp(&b.1));

    best.map(|(steer, _)| steer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::RecordingHud;
    use crate::scene::{EntityFactory, StandardFactory};
    use crate::settings::EasingMode;
    use crate::sim::Game;
    use glam::Vec3;

    fn game_with_enemy(x: f32, z: f32) -> Game<StandardFactory, RecordingHud> {
        let mut game = Game::new(
            StandardFactory,
            RecordingHud::default(),
            Tuning::default(),
            EasingMode::default(),
            3,
        );
        game.reset(0.0);
        let id = game
            .scene
            .add_object(game.factory.create_enemy_vehicle().at(Vec3::new(x, 0.0, z)));
        game.state.enemies.push(id);
        game
    }

    #[test]
    fn test_holds_when_lane_clear() {
        let game = game_with_enemy(4.0, 20.0);
        assert_eq!(suggest(&game.state, &game.scene, &game.tuning), None);
    }

    #[test]
    fn test_dodges_enemy_ahead() {
        let game = game_with_enemy(0.0, 20.0);
        assert!(suggest(&game.state, &game.scene, &game.tuning).is_some());
    }

    #[test]
    fn test_dodges_away_from_blocked_side() {
        let mut game = game_with_enemy(0.0, 20.0);
        let id = game
            .scene
            .add_object(game.factory.create_enemy_vehicle().at(Vec3::new(-4.0, 0.0, 15.0)));
        game.state.enemies.push(id);
        assert_eq!(
            suggest(&game.state, &game.scene, &game.tuning),
            Some(Steer::Right)
        );
    }
}
