//! Frame loop
//!
//! The host calls `frame` once per display refresh and keeps rescheduling
//! while it returns `FrameOutcome::Continue`. All input is funneled through
//! `handle_input`, so a restart can never land in the middle of a tick.

use crate::consts::FIRST_FRAME_DT;
use crate::hud::Hud;
use crate::renderer::{RenderBackend, RenderError};
use crate::scene::EntityFactory;
use crate::settings::Settings;
use crate::sim::{Game, InputEvent, autopilot};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stopped,
}

pub struct LoopDriver<F: EntityFactory, H: Hud, R: RenderBackend> {
    pub game: Game<F, H>,
    pub backend: R,
    settings: Settings,
    last_time_ms: Option<f64>,
    /// A frame is (or should be) scheduled
    active: bool,
    restart_pending: bool,
    autopilot: bool,
}

impl<F: EntityFactory, H: Hud, R: RenderBackend> LoopDriver<F, H, R> {
    pub fn new(game: Game<F, H>, backend: R, settings: Settings) -> Self {
        Self {
            game,
            backend,
            settings,
            last_time_ms: None,
            active: false,
            restart_pending: false,
            autopilot: false,
        }
    }

    /// Begin the first run; the host schedules the first frame afterwards
    pub fn start(&mut self, now_ms: f64) {
        self.restart(now_ms);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// React to a player command. Returns true when the loop was idle and the
    /// host must schedule a frame to get it going again.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: f64) -> bool {
        match event {
            InputEvent::Steer(steer) => {
                self.game.request_lane_change(steer);
                false
            }
            InputEvent::Restart if self.active => {
                // Applied at the top of the next frame
                self.restart_pending = true;
                false
            }
            InputEvent::Restart => {
                self.restart(now_ms);
                true
            }
            InputEvent::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
                false
            }
        }
    }

    /// Run one display-refresh callback: tick, then render
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        if !self.active {
            return FrameOutcome::Stopped;
        }
        if self.restart_pending {
            self.restart(now_ms);
        }

        let raw_dt = match self.last_time_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => FIRST_FRAME_DT,
        };
        self.last_time_ms = Some(now_ms);
        let dt = self.settings.clamp_dt(raw_dt);
        if raw_dt > self.settings.max_frame_dt {
            log::debug!("Clamped frame time {:.3}s to {:.3}s", raw_dt, dt);
        }

        if self.autopilot {
            if let Some(steer) =
                autopilot::suggest(&self.game.state, &self.game.scene, &self.game.tuning)
            {
                self.game.request_lane_change(steer);
            }
        }

        self.game.update(dt, now_ms);

        match self.backend.render(&self.game.scene) {
            Ok(()) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {}", e),
        }

        if self.game.state.is_game_over() {
            self.active = false;
            FrameOutcome::Stopped
        } else {
            FrameOutcome::Continue
        }
    }

    /// Viewport changed size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.game.scene.camera.set_aspect(width, height);
        self.backend.on_resize(width, height);
    }

    fn restart(&mut self, now_ms: f64) {
        self.restart_pending = false;
        self.last_time_ms = None;
        self.active = true;
        self.game.reset(now_ms);
    }
}
