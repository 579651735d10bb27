//! Heads-up display: score/speed readout and the game-over overlay
//!
//! All calls are fire-and-forget; the game never reads anything back.

/// Display collaborator driven by the game
pub trait Hud {
    fn set_score(&mut self, score: u64);
    fn set_speed(&mut self, speed: u32);
    fn show_game_over(&mut self, final_score: u64);
    fn hide_game_over(&mut self);
}

/// Native HUD: writes changes to the log
#[derive(Debug, Default)]
pub struct LogHud {
    score: u64,
    speed: u32,
}

impl Hud for LogHud {
    fn set_score(&mut self, score: u64) {
        if score != self.score {
            log::trace!("Score: {}", score);
            self.score = score;
        }
    }

    fn set_speed(&mut self, speed: u32) {
        if speed != self.speed {
            log::debug!("Speed: {}", speed);
            self.speed = speed;
        }
    }

    fn show_game_over(&mut self, final_score: u64) {
        log::info!("GAME OVER - final score {}", final_score);
    }

    fn hide_game_over(&mut self) {}
}

/// Browser HUD backed by DOM elements `#score`, `#speed`, `#final-score`, `#game-over`
#[cfg(target_arch = "wasm32")]
pub struct DomHud {
    document: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl DomHud {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Hud for DomHud {
    fn set_score(&mut self, score: u64) {
        self.set_text("score", &format!("Score: {}", score));
    }

    fn set_speed(&mut self, speed: u32) {
        self.set_text("speed", &format!("Speed: {}", speed));
    }

    fn show_game_over(&mut self, final_score: u64) {
        self.set_text("final-score", &final_score.to_string());
        if let Some(el) = self.document.get_element_by_id("game-over") {
            let _ = el.class_list().remove_1("hidden");
        }
    }

    fn hide_game_over(&mut self) {
        if let Some(el) = self.document.get_element_by_id("game-over") {
            let _ = el.class_list().add_1("hidden");
        }
    }
}

/// HUD that records every call, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingHud {
    pub score: Option<u64>,
    pub speed: Option<u32>,
    pub game_over: Option<u64>,
    pub hide_calls: u32,
}

#[cfg(test)]
impl Hud for RecordingHud {
    fn set_score(&mut self, score: u64) {
        self.score = Some(score);
    }

    fn set_speed(&mut self, speed: u32) {
        self.speed = Some(speed);
    }

    fn show_game_over(&mut self, final_score: u64) {
        self.game_over = Some(final_score);
    }

    fn hide_game_over(&mut self) {
        self.game_over = None;
        self.hide_calls += 1;
    }
}
