use rand::Rng;
use rand::seq::SliceRandom;

use crate::collision::Rect;
use crate::config::{
    BASKETBALL_SPRITE, CORN_SPRITE, GameConfig, PYRAMID_SPRITE, SpriteRect, TOOTH_SPRITE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Corn,
    Basketball,
    Tooth,
    Pyramid,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Corn,
        ObstacleKind::Basketball,
        ObstacleKind::Tooth,
        ObstacleKind::Pyramid,
    ];

    pub fn sprite(self) -> SpriteRect {
        match self {
            ObstacleKind::Corn => CORN_SPRITE,
            ObstacleKind::Basketball => BASKETBALL_SPRITE,
            ObstacleKind::Tooth => TOOTH_SPRITE,
            ObstacleKind::Pyramid => PYRAMID_SPRITE,
        }
    }

    pub fn eligible(self, game_speed: f64, pyramid_min_speed: f64) -> bool {
        self != ObstacleKind::Pyramid || game_speed >= pyramid_min_speed
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Obstacle {
    pub kind: Option<ObstacleKind>,
    pub scroll_position: f64,
    pub active: bool,
    pub cooldown: i32,
}

impl Obstacle {
    pub fn current(&self) -> Option<ObstacleKind> {
        if self.active { self.kind } else { None }
    }

    pub fn choose_kind<R: Rng + ?Sized>(
        rng: &mut R,
        game_speed: f64,
        config: &GameConfig,
    ) -> ObstacleKind {
        let available: Vec<ObstacleKind> = ObstacleKind::ALL
            .into_iter()
            .filter(|kind| kind.eligible(game_speed, config.pyramid_min_speed))
            .collect();
        // Corn is always eligible, so the list is never empty.
        available
            .choose(rng)
            .copied()
            .unwrap_or(ObstacleKind::Corn)
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, game_speed: f64, config: &GameConfig) {
        self.kind = Some(Self::choose_kind(rng, game_speed, config));
        self.scroll_position = 0.0;
        self.active = true;
    }

    /// Moves the active obstacle left and retires it once it has fully left
    /// the canvas, drawing a fresh cooldown.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, game_speed: f64, config: &GameConfig) {
        let Some(kind) = self.current() else {
            return;
        };
        self.scroll_position += game_speed;
        if self.scroll_position > config.canvas_width + kind.sprite().width {
            self.active = false;
            self.cooldown = Self::random_cooldown(rng, config);
        }
    }

    pub fn tick_spawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        game_speed: f64,
        config: &GameConfig,
    ) -> Option<ObstacleKind> {
        if self.active {
            return None;
        }
        if self.cooldown <= 0 {
            self.spawn(rng, game_speed, config);
            return self.kind;
        }
        self.cooldown -= 1;
        None
    }

    pub fn random_cooldown<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> i32 {
        let min = config.obstacle_min_cooldown as i32;
        min + rng.gen_range(0..config.obstacle_spawn_gap.max(1)) as i32
    }

    pub fn clear(&mut self, cooldown: i32) {
        self.scroll_position = 0.0;
        self.active = false;
        self.cooldown = cooldown;
    }

    pub fn bounds(&self, config: &GameConfig) -> Option<Rect> {
        let sprite = self.current()?.sprite();
        Some(Rect::new(
            config.canvas_width - self.scroll_position,
            config.ground_y() - sprite.height,
            sprite.width,
            sprite.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn tally(game_speed: f64, trials: usize) -> HashMap<ObstacleKind, usize> {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = HashMap::new();
        for _ in 0..trials {
            let kind = Obstacle::choose_kind(&mut rng, game_speed, &config);
            *counts.entry(kind).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn pyramid_never_spawns_below_speed_seven() {
        let counts = tally(5.0, 1000);
        assert_eq!(counts.get(&ObstacleKind::Pyramid), None);
        assert_eq!(counts.values().sum::<usize>(), 1000);
        assert_eq!(counts.len(), 3);

        let counts = tally(6.99, 1000);
        assert_eq!(counts.get(&ObstacleKind::Pyramid), None);
    }

    #[test]
    fn every_kind_spawns_at_high_speed() {
        let counts = tally(10.0, 1000);
        for kind in ObstacleKind::ALL {
            assert!(counts.get(&kind).copied().unwrap_or(0) > 0, "{kind:?}");
        }
    }

    #[test]
    fn cooldown_stays_within_gap() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let cooldown = Obstacle::random_cooldown(&mut rng, &config);
            assert!((20..30).contains(&cooldown), "{}", cooldown);
        }
    }

    #[test]
    fn spawn_waits_for_cooldown() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut obstacle = Obstacle {
            cooldown: 2,
            ..Obstacle::default()
        };
        assert_eq!(obstacle.tick_spawn(&mut rng, 5.0, &config), None);
        assert_eq!(obstacle.tick_spawn(&mut rng, 5.0, &config), None);
        assert_eq!(obstacle.cooldown, 0);
        assert!(obstacle.tick_spawn(&mut rng, 5.0, &config).is_some());
        assert!(obstacle.active);
        assert_eq!(obstacle.scroll_position, 0.0);
    }

    #[test]
    fn obstacle_retires_after_leaving_canvas() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut obstacle = Obstacle {
            kind: Some(ObstacleKind::Corn),
            active: true,
            ..Obstacle::default()
        };
        // 860 + 44 = 904 must be exceeded.
        obstacle.scroll_position = 900.0;
        obstacle.advance(&mut rng, 4.0, &config);
        assert!(obstacle.active);
        obstacle.advance(&mut rng, 4.0, &config);
        assert!(!obstacle.active);
        assert!((20..30).contains(&obstacle.cooldown));
        assert_eq!(obstacle.bounds(&config), None);
    }

    #[test]
    fn bounds_sit_on_the_ground() {
        let config = GameConfig::default();
        let obstacle = Obstacle {
            kind: Some(ObstacleKind::Pyramid),
            scroll_position: 100.0,
            active: true,
            cooldown: 0,
        };
        let bounds = obstacle.bounds(&config).unwrap();
        assert_eq!(bounds, Rect::new(760.0, 260.0, 128.0, 60.0));
    }
}
