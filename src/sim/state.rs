//! Game state and core simulation types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{MAX_LANE, MIN_LANE};
use crate::scene::NodeId;
use crate::tuning::Tuning;

/// One of the three lanes, indexed -1 (left), 0 (center), 1 (right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Lane(i8);

impl Lane {
    pub const LEFT: Lane = Lane(MIN_LANE);
    pub const CENTER: Lane = Lane(0);
    pub const RIGHT: Lane = Lane(MAX_LANE);
    pub const ALL: [Lane; 3] = [Lane::LEFT, Lane::CENTER, Lane::RIGHT];

    /// Lane from a raw index, `None` outside -1..=1
    pub fn new(index: i8) -> Option<Self> {
        (MIN_LANE..=MAX_LANE).contains(&index).then_some(Lane(index))
    }

    pub fn index(&self) -> i8 {
        self.0
    }

    /// Neighboring lane in the given direction; edges stay put (no wraparound)
    pub fn shifted(&self, steer: Steer) -> Lane {
        Lane((self.0 + steer.delta()).clamp(MIN_LANE, MAX_LANE))
    }

    /// Lateral world position of the lane center
    pub fn x(&self, lane_width: f32) -> f32 {
        self.0 as f32 * lane_width
    }

    /// Uniformly random lane
    pub fn random(rng: &mut impl Rng) -> Lane {
        Lane(rng.random_range(MIN_LANE..=MAX_LANE))
    }
}

/// Lane-change direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

impl Steer {
    pub fn delta(&self) -> i8 {
        match self {
            Steer::Left => -1,
            Steer::Right => 1,
        }
    }
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Scene built, first run not started yet
    #[default]
    Ready,
    /// Active gameplay
    Running,
    /// Collided; frozen until restart
    GameOver,
}

/// Authoritative mutable record of a run
#[derive(Debug, Clone)]
pub struct GameState {
    pub lane: Lane,
    /// Accumulated score (distance plus pass-through bonuses)
    pub score: f64,
    /// Road speed (units/s)
    pub speed: f32,
    pub spawn_interval_ms: f64,
    pub phase: GamePhase,
    /// Timestamp of the last enemy spawn (or of the reset)
    pub last_spawn_ms: f64,
    /// Ticks advanced in the current run
    pub ticks: u64,
    /// Player car handle; lives across restarts
    pub player: NodeId,
    /// Looping road segments; lives across restarts
    pub road: [NodeId; 2],
    /// Live enemy handles in spawn order
    pub enemies: Vec<NodeId>,
    /// Enemies passed in the current run
    pub passed: u32,
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    pub fn new(player: NodeId, road: [NodeId; 2], tuning: &Tuning, seed: u64) -> Self {
        Self {
            lane: Lane::CENTER,
            score: 0.0,
            speed: tuning.initial_speed,
            spawn_interval_ms: tuning.initial_spawn_interval_ms,
            phase: GamePhase::Ready,
            last_spawn_ms: 0.0,
            ticks: 0,
            player,
            road,
            enemies: Vec::new(),
            passed: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Restore per-run values; enemy handles must already be released
    pub fn restart(&mut self, tuning: &Tuning, now_ms: f64) {
        debug_assert!(self.enemies.is_empty());
        self.lane = Lane::CENTER;
        self.score = 0.0;
        self.speed = tuning.initial_speed;
        self.spawn_interval_ms = tuning.initial_spawn_interval_ms;
        self.phase = GamePhase::Running;
        self.last_spawn_ms = now_ms;
        self.ticks = 0;
        self.passed = 0;
    }

    /// Move one lane left or right; ignored after game over
    pub fn request_lane_change(&mut self, steer: Steer) {
        if self.is_game_over() {
            return;
        }
        self.lane = self.lane.shifted(steer);
    }

    /// Lane for the next enemy
    pub fn roll_enemy_lane(&mut self) -> Lane {
        Lane::random(&mut self.rng)
    }

    /// Tighten difficulty after a spawn: shorter interval, higher speed
    pub fn ratchet_difficulty(&mut self, tuning: &Tuning) {
        self.spawn_interval_ms = (self.spawn_interval_ms - tuning.spawn_interval_step_ms)
            .max(tuning.min_spawn_interval_ms);
        self.speed = (self.speed + tuning.speed_step).min(tuning.max_speed);
    }

    /// Score as shown on the HUD
    pub fn display_score(&self) -> u64 {
        self.score.floor() as u64
    }

    /// Speed as shown on the HUD
    pub fn display_speed(&self) -> u32 {
        self.speed.floor() as u32
    }
}
