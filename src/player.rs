use crate::collision::Rect;
use crate::config::{DINO_RUN_A_X, DINO_RUN_B_X, DINO_STANDING_X, GameConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub vertical_velocity: f64,
    pub jump_force: f64,
    pub grounded: bool,
    hitbox_inset_x: f64,
    hitbox_inset_y: f64,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.player_x,
            y: config.player_start_y(),
            width: config.player_width,
            height: config.player_height,
            vertical_velocity: 0.0,
            jump_force: config.jump_force,
            grounded: true,
            hitbox_inset_x: config.hitbox_inset_x,
            hitbox_inset_y: config.hitbox_inset_y,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Collision-only box. Derived from the current position so it always
    /// tracks `y`.
    pub fn hitbox(&self) -> Rect {
        self.bounds().inset(self.hitbox_inset_x, self.hitbox_inset_y)
    }

    /// Returns false when airborne; there is no double jump.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.vertical_velocity = -self.jump_force;
        true
    }

    pub fn integrate(&mut self, gravity: f64) {
        if !self.grounded {
            self.vertical_velocity += gravity;
        }
        self.y += self.vertical_velocity;
    }

    /// Snaps the player onto the ground line and recomputes `grounded`. Runs
    /// every tick, paused or not. Resting exactly on the line counts as
    /// grounded.
    pub fn clamp_to_ground(&mut self, ground_y: f64) {
        self.grounded = false;
        if self.y + self.height >= ground_y {
            self.y = ground_y - self.height;
            self.grounded = true;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunAnimation {
    counter: u32,
    running_frame: bool,
}

impl RunAnimation {
    pub fn advance(&mut self, interval: u32) {
        self.counter += 1;
        if self.counter > interval {
            self.running_frame = !self.running_frame;
            self.counter = 0;
        }
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    pub fn sprite_x(&self, grounded: bool) -> f64 {
        match (grounded, self.running_frame) {
            (true, true) => DINO_RUN_A_X,
            (true, false) => DINO_RUN_B_X,
            (false, _) => DINO_STANDING_X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_player() -> (Player, GameConfig) {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.clamp_to_ground(config.ground_y());
        (player, config)
    }

    #[test]
    fn clamp_snaps_start_position_onto_ground() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        assert_eq!(player.y, 240.0);
        player.clamp_to_ground(config.ground_y());
        assert_eq!(player.y, 210.0);
        assert!(player.grounded);
    }

    #[test]
    fn standing_still_stays_grounded() {
        let (mut player, config) = grounded_player();
        for _ in 0..5 {
            player.integrate(config.gravity);
            player.clamp_to_ground(config.ground_y());
            assert!(player.grounded);
            assert_eq!(player.y, config.standing_y());
        }
    }

    #[test]
    fn jump_sets_upward_velocity() {
        let (mut player, _) = grounded_player();
        assert!(player.jump());
        assert_eq!(player.vertical_velocity, -15.0);
    }

    #[test]
    fn no_double_jump() {
        let (mut player, config) = grounded_player();
        player.jump();
        player.integrate(config.gravity);
        player.clamp_to_ground(config.ground_y());
        assert!(!player.grounded);

        let velocity = player.vertical_velocity;
        assert!(!player.jump());
        assert_eq!(player.vertical_velocity, velocity);
    }

    #[test]
    fn gravity_only_applies_in_the_air() {
        let (mut player, config) = grounded_player();
        player.integrate(config.gravity);
        assert_eq!(player.vertical_velocity, 0.0);

        player.grounded = false;
        player.integrate(config.gravity);
        assert!((player.vertical_velocity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn jump_arc_returns_to_ground() {
        let (mut player, config) = grounded_player();
        player.jump();
        let mut peak = player.y;
        for _ in 0..200 {
            player.integrate(config.gravity);
            player.clamp_to_ground(config.ground_y());
            peak = peak.min(player.y);
            assert!(player.y + player.height <= config.ground_y());
            if player.grounded {
                break;
            }
        }
        assert!(player.grounded);
        assert_eq!(player.y, config.standing_y());
        assert!(peak < config.standing_y() - 150.0);
    }

    #[test]
    fn hitbox_tracks_vertical_position() {
        let (mut player, _) = grounded_player();
        player.y -= 50.0;
        let hitbox = player.hitbox();
        assert_eq!(hitbox.x, 120.0);
        assert_eq!(hitbox.y, player.y + 10.0);
        assert_eq!(hitbox.width, 48.0);
        assert_eq!(hitbox.height, 90.0);
    }

    #[test]
    fn run_animation_toggles_after_interval() {
        let mut animation = RunAnimation::default();
        assert_eq!(animation.sprite_x(true), DINO_RUN_B_X);
        for _ in 0..10 {
            animation.advance(10);
        }
        assert_eq!(animation.sprite_x(true), DINO_RUN_B_X);
        animation.advance(10);
        assert_eq!(animation.sprite_x(true), DINO_RUN_A_X);
        assert_eq!(animation.sprite_x(false), DINO_STANDING_X);
    }
}
