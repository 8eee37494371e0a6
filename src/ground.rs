use crate::config::GameConfig;

/// Two copies of the ground strip. The secondary copy is staged to start
/// where the primary's visible window ends; when it has taken over, the
/// primary rewinds so scrolling never needs a third copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ground {
    pub primary: f64,
    pub secondary: f64,
    pub baseline: f64,
    pub secondary_active: bool,
}

impl Ground {
    pub fn advance(&mut self, game_speed: f64, config: &GameConfig) {
        self.primary += game_speed;

        let handoff_due =
            self.primary - self.baseline > config.ground_strip_width - config.canvas_width;
        if !(handoff_due || self.secondary_active) {
            return;
        }

        self.secondary_active = true;
        self.secondary += game_speed;

        if self.secondary > config.canvas_width
            && self.primary - self.baseline > config.ground_handoff_threshold
        {
            self.baseline = config.canvas_width;
            self.primary = config.ground_primary_restart;
        }

        if self.secondary > config.ground_strip_width {
            self.secondary = 0.0;
            self.secondary_active = false;
        }
    }

    pub fn primary_x(&self) -> f64 {
        self.baseline - self.primary
    }

    pub fn secondary_x(&self, config: &GameConfig) -> Option<f64> {
        self.secondary_active.then(|| config.canvas_width - self.secondary)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
