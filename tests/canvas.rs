use dino_portfolio::app::GameMount;
use dino_portfolio::config::AssetConfig;
use dino_portfolio::game::Phase;
use dino_portfolio::{is_game_mounted, mount_game, unmount_game};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn attach_canvas(id: &str) -> HtmlCanvasElement {
    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");
    let canvas = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element");
    canvas.set_id(id);
    document
        .body()
        .expect("no body")
        .append_child(&canvas)
        .expect("append canvas");
    canvas
}

fn press(code: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_code(code);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    let document = web_sys::window().unwrap().document().unwrap();
    document.dispatch_event(&event).expect("dispatch");
    event
}

#[wasm_bindgen_test]
fn canvas_2d_context_available() {
    let canvas = attach_canvas("ctx-canvas");
    let context = canvas
        .get_context("2d")
        .expect("get context")
        .expect("2d context")
        .dyn_into::<CanvasRenderingContext2d>()
        .expect("cast 2d");

    context.clear_rect(0.0, 0.0, 860.0, 420.0);
    assert!(context.fill_text("00000", 10.0, 30.0).is_ok());
    canvas.remove();
}

#[wasm_bindgen_test]
fn mount_fails_without_canvas() {
    let result = GameMount::mount(&AssetConfig::with_canvas_id("no-such-canvas"));
    assert!(result.is_err());
    assert!(mount_game("no-such-canvas").is_err());
    assert!(!is_game_mounted());
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_and_unmount_stops_loop() {
    let canvas = attach_canvas("lifecycle-canvas");
    mount_game("lifecycle-canvas").expect("mount");

    assert!(is_game_mounted());
    assert_eq!(canvas.width(), 860);
    assert_eq!(canvas.height(), 420);

    unmount_game();
    assert!(!is_game_mounted());
    // Unmounting twice is harmless.
    unmount_game();
    canvas.remove();
}

#[wasm_bindgen_test]
fn bound_key_starts_the_game() {
    let canvas = attach_canvas("keys-canvas");
    let mount = GameMount::mount(&AssetConfig::with_canvas_id("keys-canvas")).expect("mount");
    let game = mount.game();

    let ignored = press("KeyA");
    assert!(!ignored.default_prevented());
    assert_eq!(game.borrow().phase(), Phase::NeverStarted);

    let space = press("Space");
    assert!(space.default_prevented());
    assert_eq!(game.borrow().phase(), Phase::Running);
    assert_eq!(game.borrow().game_speed(), 5.0);

    mount.unmount();

    // Input no longer reaches the game once unmounted.
    game.borrow_mut().force_game_over();
    press("Space");
    assert_eq!(game.borrow().phase(), Phase::GameOver);
    canvas.remove();
}
