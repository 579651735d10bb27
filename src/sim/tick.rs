//! Per-frame simulation tick
//!
//! Order matters: later steps read positions written by earlier ones.

use glam::Vec3;

use super::collision::collides;
use super::game::Game;
use super::road;
use crate::hud::Hud;
use crate::scene::EntityFactory;

/// Advance the game by `dt` seconds at timestamp `now_ms`
///
/// `dt` is expected to be clamped by the caller; negative or non-finite values
/// are treated as zero. Does nothing unless a run is in progress.
pub fn tick<F: EntityFactory, H: Hud>(game: &mut Game<F, H>, dt: f32, now_ms: f64) {
    if !game.state.is_running() {
        return;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let t = game.tuning;
    game.state.ticks += 1;

    // Ease the car toward its lane
    let target_x = game.state.lane.x(t.lane_width);
    let blend = game.easing.blend(t.lane_easing, dt);
    if let Some(pos) = game.scene.position_mut(game.state.player) {
        pos.x += (target_x - pos.x) * blend;
    }

    // Scroll the road
    let distance = game.state.speed * dt;
    for id in game.state.road {
        if let Some(pos) = game.scene.position_mut(id) {
            pos.z = road::scroll(pos.z, distance, t.road_length);
        }
    }

    let player_pos = game.scene.position(game.state.player).unwrap_or(Vec3::ZERO);
    game.scene.camera.follow(player_pos, &t.camera);

    // Enemies, newest first so removal keeps earlier indices valid
    let advance = distance * t.enemy_speed_multiplier;
    for i in (0..game.state.enemies.len()).rev() {
        let id = game.state.enemies[i];
        let Some(pos) = game.scene.position_mut(id) else {
            // Handle no longer in the scene; forget it
            game.state.enemies.remove(i);
            continue;
        };
        pos.z -= advance;
        let enemy_pos = *pos;

        if enemy_pos.z < t.pass_through_z {
            game.state.enemies.remove(i);
            game.scene.remove_object(id);
            game.state.score += t.pass_through_bonus;
            game.state.passed += 1;
            log::debug!("Enemy passed ({} total)", game.state.passed);
            continue;
        }

        if collides(player_pos, enemy_pos, &t.collision) {
            game.end();
            return;
        }
    }

    // Spawn on schedule, then tighten difficulty
    if now_ms - game.state.last_spawn_ms > game.state.spawn_interval_ms {
        let lane = game.state.roll_enemy_lane();
        let enemy = game
            .factory
            .create_enemy_vehicle()
            .at(Vec3::new(lane.x(t.lane_width), 0.0, t.spawn_z));
        let id = game.scene.add_object(enemy);
        game.state.enemies.push(id);
        game.state.last_spawn_ms = now_ms;
        game.state.ratchet_difficulty(&t);
        log::debug!(
            "Spawned enemy in lane {} (speed {:.1}, interval {}ms)",
            lane.index(),
            game.state.speed,
            game.state.spawn_interval_ms
        );
    }

    // Distance-based score
    game.state.score += f64::from(game.state.speed * dt);

    game.hud.set_score(game.state.display_score());
    game.hud.set_speed(game.state.display_speed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::RecordingHud;
    use crate::scene::{ModelKind, StandardFactory};
    use crate::settings::EasingMode;
    use crate::sim::state::{GamePhase, Lane, Steer};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    type TestGame = Game<StandardFactory, RecordingHud>;

    fn new_game() -> TestGame {
        let mut game = Game::new(
            StandardFactory,
            RecordingHud::default(),
            Tuning::default(),
            EasingMode::FrameRateIndependent,
            12345,
        );
        game.reset(0.0);
        game
    }

    fn place_enemy(game: &mut TestGame, x: f32, z: f32) {
        let node = game.factory.create_enemy_vehicle().at(Vec3::new(x, 0.0, z));
        let id = game.scene.add_object(node);
        game.state.enemies.push(id);
    }

    #[test]
    fn test_first_tick_scores_distance() {
        let mut game = new_game();
        game.update(1.0, 1000.0);

        assert_eq!(game.state.score, 10.0);
        assert_eq!(game.state.speed, 10.0);
        assert_eq!(game.state.lane, Lane::CENTER);
        assert!(game.state.enemies.is_empty());
        assert_eq!(game.hud.score, Some(10));
        assert_eq!(game.hud.speed, Some(10));
    }

    #[test]
    fn test_idle_before_reset() {
        let mut game = Game::new(
            StandardFactory,
            RecordingHud::default(),
            Tuning::default(),
            EasingMode::PerTick,
            1,
        );
        game.update(0.5, 5000.0);
        assert_eq!(game.state.phase, GamePhase::Ready);
        assert_eq!(game.state.score, 0.0);
        assert_eq!(game.state.ticks, 0);
    }

    #[test]
    fn test_pass_through_awards_bonus() {
        let mut game = new_game();
        place_enemy(&mut game, 0.0, -11.0);
        let enemy = game.state.enemies[0];

        game.update(0.0, 10.0);

        assert!(game.state.enemies.is_empty());
        assert!(!game.scene.contains(enemy));
        assert_eq!(game.state.score, 10.0);
        assert_eq!(game.state.passed, 1);
        assert!(game.state.is_running());
    }

    #[test]
    fn test_collision_ends_run() {
        let mut game = new_game();
        place_enemy(&mut game, 0.0, 4.0);

        game.update(0.0, 10.0);

        assert!(game.state.is_game_over());
        assert!(!game.state.is_running());
        assert_eq!(game.hud.game_over, Some(0));
        // Frozen: further ticks change nothing
        let score = game.state.score;
        game.update(0.1, 5000.0);
        assert_eq!(game.state.score, score);
        assert_eq!(game.state.enemies.len(), 1);
    }

    #[test]
    fn test_collision_stops_tick_before_spawn() {
        let mut game = new_game();
        place_enemy(&mut game, 0.0, 3.0);
        // Spawn would be due, but the collision comes first
        game.update(0.0, 10_000.0);
        assert!(game.state.is_game_over());
        assert_eq!(game.state.enemies.len(), 1);
        assert_eq!(game.state.speed, 10.0);
    }

    #[test]
    fn test_collision_skips_older_enemies() {
        let mut game = new_game();
        place_enemy(&mut game, 4.0, 30.0);
        place_enemy(&mut game, 0.0, 3.0);
        let older = game.state.enemies[0];

        game.update(0.1, 10.0);

        assert!(game.state.is_game_over());
        // Newest is checked first; the crash stops the walk before the older one moves
        assert_eq!(game.scene.position(older).unwrap().z, 30.0);
        assert_eq!(game.state.enemies.len(), 2);
    }

    #[test]
    fn test_huge_dt_completes() {
        let mut game = new_game();
        game.update(5.0e10, 10.0);

        assert!(game.state.is_running());
        assert_eq!(game.state.score, f64::from(10.0f32 * 5.0e10));
        for id in game.state.road {
            let z = game.scene.position(id).unwrap().z;
            assert!(z > -300.0 && z <= 300.0);
        }
    }

    #[test]
    fn test_enemy_in_other_lane_is_safe() {
        let mut game = new_game();
        place_enemy(&mut game, 4.0, 2.0);
        game.update(0.0, 10.0);
        assert!(game.state.is_running());
    }

    #[test]
    fn test_enemies_close_faster_than_road() {
        let mut game = new_game();
        place_enemy(&mut game, 4.0, 40.0);
        let enemy = game.state.enemies[0];
        let road_before = game.scene.position(game.state.road[1]).unwrap().z;

        game.update(0.1, 10.0);

        let road_after = game.scene.position(game.state.road[1]).unwrap().z;
        assert!((road_before - road_after - 1.0).abs() < 1e-4);
        let enemy_z = game.scene.position(enemy).unwrap().z;
        assert!((enemy_z - 38.5).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_ratchets_difficulty() {
        let mut game = new_game();
        game.update(0.0, 1501.0);

        assert_eq!(game.state.enemies.len(), 1);
        assert_eq!(game.state.last_spawn_ms, 1501.0);
        assert_eq!(game.state.spawn_interval_ms, 1450.0);
        assert!((game.state.speed - 10.2).abs() < 1e-5);

        let enemy = game.scene.position(game.state.enemies[0]).unwrap();
        assert_eq!(enemy.z, 50.0);
        assert!([-4.0, 0.0, 4.0].contains(&enemy.x));
        assert_eq!(game.scene.count_of(ModelKind::EnemyTruck), 1);
    }

    #[test]
    fn test_spawn_waits_for_interval() {
        let mut game = new_game();
        game.update(0.0, 1500.0);
        assert!(game.state.enemies.is_empty());
    }

    #[test]
    fn test_player_eases_toward_lane() {
        let mut game = new_game();
        game.easing = EasingMode::PerTick;
        game.request_lane_change(Steer::Right);

        game.update(0.016, 10.0);
        let x1 = game.player_position().x;
        assert!((x1 - 0.4).abs() < 1e-5);

        for _ in 0..200 {
            game.update(0.016, 10.0);
        }
        assert!((game.player_position().x - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_camera_follows_player() {
        let mut game = new_game();
        game.request_lane_change(Steer::Left);
        game.update(0.1, 10.0);
        let player = game.player_position();
        assert_eq!(game.scene.camera.eye.x, player.x);
        assert_eq!(game.scene.camera.eye.z, player.z - 10.0);
        assert_eq!(game.scene.camera.target.z, player.z + 10.0);
    }

    #[test]
    fn test_road_wraps_on_tick() {
        let mut game = new_game();
        let seg = game.state.road[0];
        if let Some(pos) = game.scene.position_mut(seg) {
            pos.z = -299.5;
        }
        game.update(0.1, 10.0);
        let z = game.scene.position(seg).unwrap().z;
        assert!((z - (-299.5 + 600.0 - 1.0)).abs() < 1e-3);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut game = new_game();
        game.update(0.0, 1501.0);
        game.update(0.0, 3100.0);
        place_enemy(&mut game, 0.0, 0.0);
        let enemies = game.state.enemies.clone();
        assert_eq!(enemies.len(), 3);
        game.update(0.0, 3200.0);
        assert!(game.state.is_game_over());

        game.reset(4000.0);

        assert_eq!(game.state.score, 0.0);
        assert_eq!(game.state.speed, 10.0);
        assert_eq!(game.state.spawn_interval_ms, 1500.0);
        assert_eq!(game.state.lane, Lane::CENTER);
        assert!(game.state.is_running());
        assert!(!game.state.is_game_over());
        assert!(game.state.enemies.is_empty());
        for id in enemies {
            assert!(!game.scene.contains(id));
        }
        assert_eq!(game.scene.count_of(ModelKind::EnemyTruck), 0);
        assert_eq!(game.player_position(), Vec3::ZERO);
        assert_eq!(game.scene.position(game.state.road[0]).unwrap().z, 0.0);
        assert_eq!(game.scene.position(game.state.road[1]).unwrap().z, 300.0);
        assert_eq!(game.hud.game_over, None);
        // Once for the first run, once for the restart
        assert_eq!(game.hud.hide_calls, 2);
        assert_eq!(game.state.last_spawn_ms, 4000.0);
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_while_running(
            frames in proptest::collection::vec((0.0f32..0.1, 0u8..4), 1..400),
        ) {
            let mut game = new_game();
            let mut now = 0.0;
            for (dt, action) in frames {
                match action {
                    0 => game.request_lane_change(Steer::Left),
                    1 => game.request_lane_change(Steer::Right),
                    _ => {}
                }
                prop_assert!(Lane::new(game.state.lane.index()).is_some());

                let before = (game.state.speed, game.state.spawn_interval_ms, game.state.score);
                now += f64::from(dt) * 1000.0;
                game.update(dt, now);
                if !game.state.is_running() {
                    break;
                }
                prop_assert!(game.state.speed >= before.0);
                prop_assert!(game.state.speed <= 20.0);
                prop_assert!(game.state.spawn_interval_ms <= before.1);
                prop_assert!(game.state.spawn_interval_ms >= 600.0);
                prop_assert!(game.state.score >= before.2);
            }
        }
    }
}
