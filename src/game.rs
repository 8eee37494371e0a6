use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::hits_obstacle;
use crate::config::GameConfig;
use crate::ground::Ground;
use crate::input::Action;
use crate::obstacle::Obstacle;
use crate::player::{Player, RunAnimation};
use crate::portfolio::Portfolio;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NeverStarted,
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub high_score: u32,
}

pub struct Game {
    config: GameConfig,
    rng: StdRng,
    phase: Phase,
    pub(crate) player: Player,
    pub(crate) obstacle: Obstacle,
    pub(crate) portfolio: Portfolio,
    pub(crate) ground: Ground,
    pub(crate) animation: RunAnimation,
    game_speed: f64,
    score: u32,
    high_score: u32,
    score_ticks: u32,
    has_played_before: bool,
    game_over_visible: bool,
}

impl Game {
    pub fn new(config: GameConfig, group_sizes: &[usize]) -> Self {
        Self::with_rng(config, group_sizes, StdRng::from_entropy())
    }

    pub fn with_seed(config: GameConfig, group_sizes: &[usize], seed: u64) -> Self {
        Self::with_rng(config, group_sizes, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, group_sizes: &[usize], rng: StdRng) -> Self {
        Self {
            player: Player::new(&config),
            obstacle: Obstacle::default(),
            portfolio: Portfolio::new(group_sizes, &config),
            ground: Ground::default(),
            animation: RunAnimation::default(),
            config,
            rng,
            phase: Phase::NeverStarted,
            game_speed: 0.0,
            score: 0,
            high_score: 0,
            score_ticks: 0,
            has_played_before: false,
            game_over_visible: true,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.game_speed != 0.0
    }

    pub fn game_speed(&self) -> f64 {
        self.game_speed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn has_played_before(&self) -> bool {
        self.has_played_before
    }

    /// Whether the "Game Over!" message should be up. It is raised while
    /// stopped but only shown once a run has been started.
    pub fn shows_game_over(&self) -> bool {
        self.game_over_visible && self.has_played_before
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn portfolio_mut(&mut self) -> &mut Portfolio {
        &mut self.portfolio
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    pub fn animation(&self) -> &RunAnimation {
        &self.animation
    }

    pub fn press_key(&mut self, actions: &[Action]) {
        for &action in actions {
            self.press(action);
        }
    }

    pub fn press(&mut self, action: Action) {
        match action {
            Action::Jump => {
                if self.is_running() {
                    self.player.jump();
                }
            }
            Action::Start => {
                if !self.is_running() {
                    self.start_run();
                }
            }
        }
    }

    fn start_run(&mut self) {
        self.phase = Phase::Running;
        self.game_speed = self.config.base_speed;
        self.game_over_visible = false;
        self.has_played_before = true;
        self.obstacle.cooldown = self.config.obstacle_warmup;
    }

    pub fn tick(&mut self) -> Option<RunSummary> {
        if self.is_running() {
            self.player.integrate(self.config.gravity);
            self.count_score();
            self.portfolio.update(self.game_speed, &self.config);
            self.obstacle
                .advance(&mut self.rng, self.game_speed, &self.config);
        }

        self.player.clamp_to_ground(self.config.ground_y());

        let summary = if self.collided() {
            Some(self.end_run())
        } else {
            None
        };

        self.animation.advance(self.config.animation_interval);
        self.ground.advance(self.game_speed, &self.config);

        if self.is_running() {
            self.obstacle
                .tick_spawn(&mut self.rng, self.game_speed, &self.config);
        }

        summary
    }

    fn count_score(&mut self) {
        self.score_ticks += 1;
        if self.score_ticks >= self.config.ticks_per_score {
            self.score += 1;
            self.score_ticks = 0;
        }

        if self.game_speed < self.config.max_speed {
            self.game_speed = (self.config.base_speed
                + self.score as f64 / self.config.score_per_speed_step)
                .min(self.config.max_speed);
        }
    }

    fn collided(&self) -> bool {
        let Some(obstacle) = self.obstacle.bounds(&self.config) else {
            return false;
        };
        hits_obstacle(
            &self.player.hitbox(),
            &obstacle,
            self.config.collision_margin,
        )
    }

    fn end_run(&mut self) -> RunSummary {
        let score = self.score;
        self.game_speed = 0.0;
        self.phase = Phase::GameOver;
        self.game_over_visible = true;
        self.has_played_before = true;

        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.score = 0;
        self.score_ticks = 0;

        self.obstacle.clear(self.config.obstacle_warmup);
        self.portfolio.reset(&self.config);
        self.animation.reset();
        self.ground.reset();

        RunSummary {
            score,
            high_score: self.high_score,
        }
    }

    /// Ends the current run as if the player had crashed.
    pub fn force_game_over(&mut self) -> Option<RunSummary> {
        if !self.is_running() {
            return None;
        }
        Some(self.end_run())
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
