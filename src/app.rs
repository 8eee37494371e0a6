use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::browser::{self, js_error};
use crate::canvas::{self, CanvasSurface, LoadingImage};
use crate::config::{AssetConfig, GAME_OVER_OVERLAY_ID, GameConfig};
use crate::game::Game;
use crate::input::actions_for_key;
use crate::render::{self, RenderOptions};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A game attached to a canvas. Owns the keydown listener and the frame
/// loop; dropping it (or calling [`GameMount::unmount`]) releases both.
pub struct GameMount {
    game: Rc<RefCell<Game>>,
    document: Document,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    frame_callback: FrameCallback,
    frame_handle: Rc<Cell<Option<i32>>>,
    alive: Rc<Cell<bool>>,
    _images: Vec<LoadingImage>,
}

impl GameMount {
    pub fn mount(assets: &AssetConfig) -> Result<Self> {
        let document = browser::document()?;
        let canvas = browser::canvas(&document, &assets.canvas_id)?;
        let context = browser::context_2d(&canvas)?;

        let config = GameConfig::default();
        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);

        let game = Rc::new(RefCell::new(Game::new(config, &assets.group_sizes())));

        let mut images = Vec::new();
        let sprite_sheet = canvas::load_sprite_sheet(&assets.sprite_sheet_url)?;
        let sprite_element = sprite_sheet.element.clone();
        images.push(sprite_sheet);

        let mut banner_elements = Vec::new();
        for (slot, url) in assets.banner_urls().enumerate() {
            let banner = canvas::load_banner(url, slot, Rc::clone(&game))?;
            banner_elements.push(banner.element.clone());
            images.push(banner);
        }

        let surface = CanvasSurface::new(context, sprite_element, banner_elements);
        let overlay = browser::html_element(&document, GAME_OVER_OVERLAY_ID);

        let keydown = keydown_listener(Rc::clone(&game));
        document
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .map_err(js_error)?;

        let mut mount = GameMount {
            game,
            document,
            keydown,
            frame_callback: Rc::new(RefCell::new(None)),
            frame_handle: Rc::new(Cell::new(None)),
            alive: Rc::new(Cell::new(true)),
            _images: images,
        };

        // Dropping `mount` on failure removes the listener again.
        mount.start_loop(surface, overlay)?;
        browser::set_status(&mount.document, "ready");
        log!("Dino game mounted on #{}", assets.canvas_id);
        Ok(mount)
    }

    pub fn game(&self) -> Rc<RefCell<Game>> {
        Rc::clone(&self.game)
    }

    pub fn is_running_loop(&self) -> bool {
        self.alive.get() && self.frame_handle.get().is_some()
    }

    fn start_loop(&mut self, surface: CanvasSurface, overlay: Option<HtmlElement>) -> Result<()> {
        let game = Rc::clone(&self.game);
        let callback = Rc::clone(&self.frame_callback);
        let handle = Rc::clone(&self.frame_handle);
        let alive = Rc::clone(&self.alive);
        let mut surface = surface;
        let mut overlay_shown: Option<bool> = None;
        let options = RenderOptions {
            game_over_on_canvas: overlay.is_none(),
        };

        *self.frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            handle.set(None);
            if !alive.get() {
                return;
            }

            {
                let mut game = game.borrow_mut();
                if let Some(summary) = game.tick() {
                    log!(
                        "Run over: score {}, high score {}",
                        summary.score,
                        summary.high_score
                    );
                }

                if let Some(overlay) = &overlay {
                    let shown = game.shows_game_over();
                    if overlay_shown != Some(shown) {
                        overlay.set_hidden(!shown);
                        overlay_shown = Some(shown);
                    }
                }

                // The tick above is complete, so a failed draw only costs
                // this frame.
                if let Err(err) = render::render(&game, &mut surface, options) {
                    error!("Skipping frame: {:#}", err);
                }
            }

            if let Some(next) = callback.borrow().as_ref() {
                match browser::request_animation_frame(next.as_ref().unchecked_ref()) {
                    Ok(id) => handle.set(Some(id)),
                    Err(err) => error!("Frame loop stopped: {:#}", err),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = match self.frame_callback.borrow().as_ref() {
            Some(first) => browser::request_animation_frame(first.as_ref().unchecked_ref())?,
            None => return Ok(()),
        };
        self.frame_handle.set(Some(id));
        Ok(())
    }

    pub fn unmount(self) {
        drop(self);
    }

    fn release(&mut self) {
        if !self.alive.replace(false) {
            return;
        }

        if let Some(id) = self.frame_handle.take() {
            if let Err(err) = browser::cancel_animation_frame(id) {
                error!("Could not cancel animation frame: {:#}", err);
            }
        }
        // The callback holds a handle to its own slot; clearing the slot
        // breaks that cycle.
        self.frame_callback.borrow_mut().take();

        if let Err(err) = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref())
        {
            error!("Could not remove keydown listener: {}", browser::js_value_to_string(&err));
        }
        browser::set_status(&self.document, "unmounted");
        log!("Dino game unmounted");
    }
}

impl Drop for GameMount {
    fn drop(&mut self) {
        self.release();
    }
}

fn keydown_listener(game: Rc<RefCell<Game>>) -> Closure<dyn FnMut(KeyboardEvent)> {
    Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let actions = actions_for_key(&event.code(), event.key_code());
        if actions.is_empty() {
            return;
        }
        event.prevent_default();
        game.borrow_mut().press_key(actions);
    }) as Box<dyn FnMut(KeyboardEvent)>)
}
