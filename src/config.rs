pub const CANVAS_ID: &str = "dino-canvas";
pub const GAME_OVER_OVERLAY_ID: &str = "game-over";
pub const CANVAS_WIDTH: f64 = 860.0;
pub const CANVAS_HEIGHT: f64 = 420.0;

pub const SPRITE_SHEET_URL: &str = "/sprite3.png";
pub const PORTFOLIO_GROUPS: [&[&str]; 2] = [
    &["/dino-portfolio/story1.png", "/dino-portfolio/story2.png"],
    &["/dino-portfolio/story1.png", "/dino-portfolio/story2.png"],
];

pub const JUMP_KEY_CODES: [&str; 2] = ["ArrowUp", "Space"];
pub const JUMP_KEY_LEGACY_CODES: [u32; 2] = [38, 32];

pub const TITLE_TEXT: &str = "MOHAMED";
pub const PROMPT_TEXT: &str = "PRESS SPACE KEY TO START";
pub const GAME_OVER_TITLE: &str = "Game Over!";
pub const GAME_OVER_PROMPT: &str = "Press the UP arrow key or SPACE to play again";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SpriteRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

pub const GROUND_SPRITE: SpriteRect = SpriteRect::new(2.0, 142.0, 2400.0, 16.0);
pub const GROUND_DRAW_LIFT: f64 = 8.0;

pub const DINO_STANDING_X: f64 = 1338.0;
pub const DINO_RUN_A_X: f64 = 1514.0;
pub const DINO_RUN_B_X: f64 = 1602.0;
pub const DINO_SPRITE_Y: f64 = 24.0;
pub const DINO_SPRITE_WIDTH: f64 = 88.0;
pub const DINO_SPRITE_HEIGHT: f64 = 110.0;

pub const CORN_SPRITE: SpriteRect = SpriteRect::new(823.0, 59.0, 44.0, 75.0);
pub const BASKETBALL_SPRITE: SpriteRect = SpriteRect::new(876.0, 59.0, 51.0, 50.0);
pub const TOOTH_SPRITE: SpriteRect = SpriteRect::new(936.0, 59.0, 41.0, 50.0);
pub const PYRAMID_SPRITE: SpriteRect = SpriteRect::new(981.0, 59.0, 128.0, 60.0);

/// Tunables for one game instance. `Default` is the reference layout; every
/// value is load-bearing for how the game plays.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub ground_offset: f64,

    pub player_x: f64,
    pub player_start_offset: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub hitbox_inset_x: f64,
    pub hitbox_inset_y: f64,
    pub jump_force: f64,
    pub gravity: f64,

    pub base_speed: f64,
    pub max_speed: f64,
    pub score_per_speed_step: f64,
    pub ticks_per_score: u32,
    pub animation_interval: u32,

    pub obstacle_spawn_gap: u32,
    pub obstacle_min_cooldown: u32,
    pub obstacle_warmup: i32,
    pub pyramid_min_speed: f64,
    pub collision_margin: f64,

    pub banner_width: f64,
    pub banner_placeholder_height: f64,
    pub banner_spacing: f64,
    pub banner_group_spacing: f64,
    pub banner_initial_delay: f64,
    pub banner_speed_factor: f64,
    pub banner_vertical_offset: f64,
    pub banner_exit_buffer: f64,
    pub banner_entry_offset: f64,

    pub ground_strip_width: f64,
    pub ground_handoff_threshold: f64,
    pub ground_primary_restart: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_offset: 100.0,

            player_x: 100.0,
            player_start_offset: 180.0,
            player_width: DINO_SPRITE_WIDTH,
            player_height: DINO_SPRITE_HEIGHT,
            hitbox_inset_x: 20.0,
            hitbox_inset_y: 10.0,
            jump_force: 15.0,
            gravity: 0.6,

            base_speed: 5.0,
            max_speed: 20.0,
            score_per_speed_step: 200.0,
            ticks_per_score: 7,
            animation_interval: 10,

            obstacle_spawn_gap: 10,
            obstacle_min_cooldown: 20,
            obstacle_warmup: 10,
            pyramid_min_speed: 7.0,
            collision_margin: 10.0,

            banner_width: 400.0,
            banner_placeholder_height: 80.0,
            banner_spacing: 300.0,
            banner_group_spacing: CANVAS_WIDTH,
            banner_initial_delay: 10.0,
            banner_speed_factor: 0.7,
            banner_vertical_offset: 150.0,
            banner_exit_buffer: 500.0,
            banner_entry_offset: -200.0,

            ground_strip_width: GROUND_SPRITE.width,
            ground_handoff_threshold: 1000.0,
            ground_primary_restart: 20.0,
        }
    }
}

impl GameConfig {
    pub fn ground_y(&self) -> f64 {
        self.canvas_height - self.ground_offset
    }

    pub fn player_start_y(&self) -> f64 {
        self.canvas_height - self.player_start_offset
    }

    pub fn standing_y(&self) -> f64 {
        self.ground_y() - self.player_height
    }
}

#[derive(Clone, Debug)]
pub struct AssetConfig {
    pub canvas_id: String,
    pub sprite_sheet_url: String,
    pub portfolio_groups: Vec<Vec<String>>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_string(),
            sprite_sheet_url: SPRITE_SHEET_URL.to_string(),
            portfolio_groups: PORTFOLIO_GROUPS
                .iter()
                .map(|group| group.iter().map(|src| src.to_string()).collect())
                .collect(),
        }
    }
}

impl AssetConfig {
    pub fn with_canvas_id(canvas_id: &str) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
            ..Self::default()
        }
    }

    pub fn group_sizes(&self) -> Vec<usize> {
        self.portfolio_groups.iter().map(Vec::len).collect()
    }

    pub fn banner_urls(&self) -> impl Iterator<Item = &str> {
        self.portfolio_groups
            .iter()
            .flat_map(|group| group.iter().map(String::as_str))
    }
}
