//! Game lifecycle
//!
//! `Game` bundles the state with the collaborators it drives: the scene it
//! positions, the factory it spawns from and the HUD it reports to.

use glam::Vec3;

use super::road;
use super::state::{GameState, Steer};
use super::tick;
use crate::hud::Hud;
use crate::scene::{EntityFactory, Scene};
use crate::settings::EasingMode;
use crate::tuning::Tuning;

pub struct Game<F: EntityFactory, H: Hud> {
    pub state: GameState,
    pub scene: Scene,
    pub factory: F,
    pub hud: H,
    pub tuning: Tuning,
    pub easing: EasingMode,
}

impl<F: EntityFactory, H: Hud> Game<F, H> {
    /// Build the static scene (ground, road, player). The run starts on `reset`.
    pub fn new(factory: F, hud: H, tuning: Tuning, easing: EasingMode, seed: u64) -> Self {
        let mut scene = Scene::new();
        scene.add_object(factory.create_ground());

        let offsets = road::canonical_offsets(tuning.road_length);
        let road = offsets.map(|z| {
            let segment = factory.create_road_segment().at(Vec3::new(0.0, 0.0, z));
            scene.add_object(segment)
        });
        let player = scene.add_object(factory.create_player_vehicle());
        scene.camera.follow(Vec3::ZERO, &tuning.camera);

        let state = GameState::new(player, road, &tuning, seed);

        Self {
            state,
            scene,
            factory,
            hud,
            tuning,
            easing,
        }
    }

    /// Start (or restart) a run at timestamp `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        for id in self.state.enemies.drain(..) {
            self.scene.remove_object(id);
        }

        self.state.restart(&self.tuning, now_ms);

        if let Some(pos) = self.scene.position_mut(self.state.player) {
            *pos = Vec3::ZERO;
        }
        let offsets = road::canonical_offsets(self.tuning.road_length);
        for (id, z) in self.state.road.into_iter().zip(offsets) {
            if let Some(pos) = self.scene.position_mut(id) {
                pos.z = z;
            }
        }
        self.scene.camera.follow(Vec3::ZERO, &self.tuning.camera);

        self.hud.hide_game_over();
        self.hud.set_score(self.state.display_score());
        self.hud.set_speed(self.state.display_speed());

        log::info!("Run started (seed {})", self.state.seed);
    }

    /// Steer one lane over; ignored once the run has ended
    pub fn request_lane_change(&mut self, steer: Steer) {
        self.state.request_lane_change(steer);
    }

    /// Freeze the run and show the final score
    pub fn end(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        self.state.phase = super::state::GamePhase::GameOver;
        let final_score = self.state.display_score();
        self.hud.show_game_over(final_score);
        log::info!(
            "Game over: score {}, {} enemies passed, top speed {:.1}",
            final_score,
            self.state.passed,
            self.state.speed
        );
    }

    /// Advance one tick (see [`tick::tick`])
    pub fn update(&mut self, dt: f32, now_ms: f64) {
        tick::tick(self, dt, now_ms);
    }

    pub fn player_position(&self) -> Vec3 {
        self.scene.position(self.state.player).unwrap_or(Vec3::ZERO)
    }
}
