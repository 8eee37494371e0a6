use anyhow::Result;

use crate::collision::Rect;
use crate::config::{
    DINO_SPRITE_HEIGHT, DINO_SPRITE_WIDTH, DINO_SPRITE_Y, DINO_STANDING_X, GAME_OVER_PROMPT,
    GAME_OVER_TITLE, GROUND_DRAW_LIFT, GROUND_SPRITE, PROMPT_TEXT, SpriteRect, TITLE_TEXT,
};
use crate::game::{Game, Phase};

const HUD_FONT: &str = "16px 'Press Start 2P', monospace";
const TITLE_FONT: &str = "bold 32px 'Press Start 2P', monospace";
const PROMPT_FONT: &str = "14px 'Press Start 2P', monospace";
const GAME_OVER_FONT: &str = "bold 24px 'Press Start 2P', monospace";
const HUD_COLOR: &str = "black";
const TITLE_COLOR: &str = "#654321";
const PROMPT_COLOR: &str = "#8B4513";
const HUD_RIGHT_MARGIN: f64 = 20.0;
const HUD_GAP: f64 = 40.0;
const HUD_BASELINE: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageId {
    SpriteSheet,
    Banner(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: &'static str,
    pub align: TextAlign,
}

const HUD_STYLE: TextStyle = TextStyle {
    font: HUD_FONT,
    color: HUD_COLOR,
    align: TextAlign::Right,
};

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64) -> Result<()>;

    /// Draws `src` of the image (or the whole image when `None`) into `dst`.
    /// Images that are not loaded yet draw nothing.
    fn draw_image(&mut self, image: ImageId, src: Option<SpriteRect>, dst: Rect) -> Result<()>;

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()>;

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Result<f64>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw the game-over message on the canvas instead of relying on a host
    /// overlay element.
    pub game_over_on_canvas: bool,
}

pub fn format_score(score: u32) -> String {
    format!("{:05}", score)
}

pub fn render<S: Surface + ?Sized>(
    game: &Game,
    surface: &mut S,
    options: RenderOptions,
) -> Result<()> {
    let config = game.config();
    surface.clear(config.canvas_width, config.canvas_height)?;

    match game.phase() {
        Phase::NeverStarted => render_title(game, surface),
        Phase::GameOver => {
            render_resting(game, surface)?;
            // The current score always reads zero here, whatever the run scored.
            render_hud(surface, game, 0, true)?;
            if options.game_over_on_canvas && game.shows_game_over() {
                render_game_over_message(game, surface)?;
            }
            Ok(())
        }
        Phase::Running => render_running(game, surface),
    }
}

fn ground_dst(x: f64, ground_y: f64) -> Rect {
    Rect::new(
        x,
        ground_y - GROUND_DRAW_LIFT,
        GROUND_SPRITE.width,
        GROUND_SPRITE.height,
    )
}

fn dino_src(sprite_x: f64) -> SpriteRect {
    SpriteRect::new(sprite_x, DINO_SPRITE_Y, DINO_SPRITE_WIDTH, DINO_SPRITE_HEIGHT)
}

fn render_resting<S: Surface + ?Sized>(game: &Game, surface: &mut S) -> Result<()> {
    let config = game.config();
    let player = game.player();
    surface.draw_image(
        ImageId::SpriteSheet,
        Some(GROUND_SPRITE),
        ground_dst(0.0, config.ground_y()),
    )?;
    surface.draw_image(
        ImageId::SpriteSheet,
        Some(dino_src(DINO_STANDING_X)),
        Rect::new(player.x, config.standing_y(), player.width, player.height),
    )
}

fn render_title<S: Surface + ?Sized>(game: &Game, surface: &mut S) -> Result<()> {
    let config = game.config();
    render_resting(game, surface)?;

    let center_x = config.canvas_width / 2.0;
    let center_y = config.canvas_height / 2.0;
    surface.fill_text(
        TITLE_TEXT,
        center_x,
        center_y - 20.0,
        &TextStyle {
            font: TITLE_FONT,
            color: TITLE_COLOR,
            align: TextAlign::Center,
        },
    )?;
    surface.fill_text(
        PROMPT_TEXT,
        center_x,
        center_y + 20.0,
        &TextStyle {
            font: PROMPT_FONT,
            color: PROMPT_COLOR,
            align: TextAlign::Center,
        },
    )
}

fn render_game_over_message<S: Surface + ?Sized>(game: &Game, surface: &mut S) -> Result<()> {
    let config = game.config();
    let center_x = config.canvas_width / 2.0;
    let center_y = config.canvas_height / 2.0;
    surface.fill_text(
        GAME_OVER_TITLE,
        center_x,
        center_y - 20.0,
        &TextStyle {
            font: GAME_OVER_FONT,
            color: TITLE_COLOR,
            align: TextAlign::Center,
        },
    )?;
    surface.fill_text(
        GAME_OVER_PROMPT,
        center_x,
        center_y + 20.0,
        &TextStyle {
            font: PROMPT_FONT,
            color: TITLE_COLOR,
            align: TextAlign::Center,
        },
    )
}

fn render_running<S: Surface + ?Sized>(game: &Game, surface: &mut S) -> Result<()> {
    let config = game.config();
    let ground_y = config.ground_y();

    // Banners go first so the player and obstacles draw over them.
    for item in game.portfolio().items().iter().filter(|item| item.active) {
        surface.draw_image(
            ImageId::Banner(item.slot),
            None,
            Rect::new(
                config.canvas_width - item.scroll_position,
                ground_y - config.banner_vertical_offset,
                item.width,
                item.height,
            ),
        )?;
    }

    if let (Some(kind), Some(bounds)) = (game.obstacle().current(), game.obstacle().bounds(config))
    {
        surface.draw_image(ImageId::SpriteSheet, Some(kind.sprite()), bounds)?;
    }

    let ground = game.ground();
    surface.draw_image(
        ImageId::SpriteSheet,
        Some(GROUND_SPRITE),
        ground_dst(ground.primary_x(), ground_y),
    )?;
    if let Some(x) = ground.secondary_x(config) {
        surface.draw_image(ImageId::SpriteSheet, Some(GROUND_SPRITE), ground_dst(x, ground_y))?;
    }

    let player = game.player();
    let sprite_x = game.animation().sprite_x(player.grounded);
    surface.draw_image(ImageId::SpriteSheet, Some(dino_src(sprite_x)), player.bounds())?;

    render_hud(surface, game, game.score(), game.high_score() > 0)
}

fn render_hud<S: Surface + ?Sized>(
    surface: &mut S,
    game: &Game,
    shown_score: u32,
    show_high_score: bool,
) -> Result<()> {
    let config = game.config();
    let score_text = format_score(shown_score);
    surface.fill_text(
        &score_text,
        config.canvas_width - HUD_RIGHT_MARGIN,
        HUD_BASELINE,
        &HUD_STYLE,
    )?;

    if show_high_score {
        let high_text = format!("HI {}", format_score(game.high_score()));
        let score_width = surface.measure_text(&score_text, &HUD_STYLE)?;
        surface.fill_text(
            &high_text,
            config.canvas_width - HUD_GAP - score_width,
            HUD_BASELINE,
            &HUD_STYLE,
        )?;
    }
    Ok(())
}
