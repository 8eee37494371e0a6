use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::browser::js_value_to_string;
use crate::collision::Rect;
use crate::config::SpriteRect;
use crate::game::Game;
use crate::render::{ImageId, Surface, TextStyle};

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    sprite_sheet: HtmlImageElement,
    banners: Vec<HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(
        context: CanvasRenderingContext2d,
        sprite_sheet: HtmlImageElement,
        banners: Vec<HtmlImageElement>,
    ) -> Self {
        context.set_image_smoothing_enabled(false);
        Self {
            context,
            sprite_sheet,
            banners,
        }
    }

    fn image(&self, id: ImageId) -> Option<&HtmlImageElement> {
        match id {
            ImageId::SpriteSheet => Some(&self.sprite_sheet),
            ImageId::Banner(slot) => self.banners.get(slot),
        }
    }

    fn apply_style(&self, style: &TextStyle) {
        self.context.set_font(style.font);
        self.context.set_fill_style_str(style.color);
        self.context.set_text_align(style.align.as_css());
    }
}

/// A broken or still-loading image would make `drawImage` throw or draw
/// nothing; skip it for the frame instead.
fn is_drawable(image: &HtmlImageElement) -> bool {
    image.complete() && image.natural_width() > 0 && image.natural_height() > 0
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_image(&mut self, image: ImageId, src: Option<SpriteRect>, dst: Rect) -> Result<()> {
        let Some(element) = self.image(image).filter(|element| is_drawable(element)) else {
            return Ok(());
        };

        let drawn = match src {
            Some(src) => self
                .context
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    element, src.x, src.y, src.width, src.height, dst.x, dst.y, dst.width,
                    dst.height,
                ),
            None => self.context.draw_image_with_html_image_element_and_dw_and_dh(
                element, dst.x, dst.y, dst.width, dst.height,
            ),
        };
        drawn.map_err(|err| anyhow!("drawImage {:?}: {}", image, js_value_to_string(&err)))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()> {
        self.apply_style(style);
        self.context
            .fill_text(text, x, y)
            .map_err(|err| anyhow!("fillText: {}", js_value_to_string(&err)))
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Result<f64> {
        self.apply_style(style);
        self.context
            .measure_text(text)
            .map(|metrics| metrics.width())
            .map_err(|err| anyhow!("measureText: {}", js_value_to_string(&err)))
    }
}

/// An image element together with the callbacks watching its load. Dropping
/// it detaches the callbacks first so a late load cannot call into a freed
/// closure.
pub struct LoadingImage {
    pub element: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl Drop for LoadingImage {
    fn drop(&mut self) {
        self.element.set_onload(None);
        self.element.set_onerror(None);
    }
}

fn load_image<F>(url: &str, make_onload: F) -> Result<LoadingImage>
where
    F: FnOnce(HtmlImageElement) -> Box<dyn FnMut()>,
{
    let element = HtmlImageElement::new()
        .map_err(|err| anyhow!("Could not create image: {}", js_value_to_string(&err)))?;

    let onload = Closure::wrap(make_onload(element.clone()));
    let failed_url = url.to_string();
    let onerror = Closure::wrap(Box::new(move || {
        error!("Failed to load image {}", failed_url);
    }) as Box<dyn FnMut()>);

    element.set_onload(Some(onload.as_ref().unchecked_ref()));
    element.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    element.set_src(url);

    Ok(LoadingImage {
        element,
        _onload: onload,
        _onerror: onerror,
    })
}

pub fn load_sprite_sheet(url: &str) -> Result<LoadingImage> {
    let loaded_url = url.to_string();
    load_image(url, move |_| {
        Box::new(move || {
            log!("Loaded sprite sheet {}", loaded_url);
        }) as Box<dyn FnMut()>
    })
}

/// Loads one banner. When it arrives its natural size is written back to
/// the banner slot it was created for.
pub fn load_banner(url: &str, slot: usize, game: Rc<RefCell<Game>>) -> Result<LoadingImage> {
    load_image(url, move |image| {
        Box::new(move || {
            let width = image.natural_width() as f64;
            let height = image.natural_height() as f64;
            if !game
                .borrow_mut()
                .portfolio_mut()
                .set_natural_size(slot, width, height)
            {
                error!("Banner {} reported an unusable size {}x{}", slot, width, height);
            }
        }) as Box<dyn FnMut()>
    })
}
