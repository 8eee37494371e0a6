#[macro_use]
mod browser;

pub mod app;
pub mod canvas;
pub mod collision;
pub mod config;
pub mod game;
pub mod ground;
pub mod input;
pub mod obstacle;
pub mod player;
pub mod portfolio;
pub mod render;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::GameMount;
use crate::config::{AssetConfig, CANVAS_ID};

thread_local! {
    static MOUNTED: RefCell<Option<GameMount>> = const { RefCell::new(None) };
}

/// Mounts the game on the default canvas when the host page has one.
/// Pages that render the canvas later call [`mount_game`] themselves.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Ok(document) = browser::document() else {
        return;
    };
    if document.get_element_by_id(CANVAS_ID).is_none() {
        return;
    }

    if let Err(err) = mount_game(CANVAS_ID) {
        browser::set_status(&document, "error");
        web_sys::console::error_1(&err);
    }
}

/// Mounts the game on `canvas_id`, replacing any game mounted before.
#[wasm_bindgen]
pub fn mount_game(canvas_id: &str) -> Result<(), JsValue> {
    unmount_game();
    let mount = GameMount::mount(&AssetConfig::with_canvas_id(canvas_id))
        .map_err(|err| JsValue::from_str(&format!("fatal: {:#}", err)))?;
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(mount));
    Ok(())
}

/// Stops the frame loop and detaches input. Safe to call when nothing is
/// mounted.
#[wasm_bindgen]
pub fn unmount_game() {
    let previous = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    if let Some(mount) = previous {
        mount.unmount();
    }
}

#[wasm_bindgen]
pub fn is_game_mounted() -> bool {
    MOUNTED.with(|mounted| {
        mounted
            .borrow()
            .as_ref()
            .is_some_and(GameMount::is_running_loop)
    })
}
