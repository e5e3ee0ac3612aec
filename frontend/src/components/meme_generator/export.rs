//! Rasterization and download of the composed meme.
//!
//! `rasterize` repaints the live preview region onto an offscreen canvas at
//! its current layout size: region background, the template image at its
//! rendered box, then the caption lines from `common::export::layout_caption`.
//! `trigger_download` hands the PNG bytes to the browser as a file.
//!
//! Both steps run synchronously inside the click handler, after the preview
//! has been laid out and painted.

use common::error::RasterizationError;
use common::export::{decode_png_data_uri, half_leading, layout_caption, CaptionStyle, ExportScene};
use wasm_bindgen::JsCast;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement,
    HtmlElement, HtmlImageElement, Url,
};

use super::helpers::js_error_message;

/// Fill behind the template image; matches the preview region's background.
pub const REGION_BACKGROUND: &str = "#374151";

const REVOKE_DELAY_MS: u32 = 1_000;

/// Renders `region` and downloads the result as `scene.filename`.
pub fn export_region(
    region: &HtmlElement,
    scene: &ExportScene,
    style: &CaptionStyle,
) -> Result<(), RasterizationError> {
    let data_uri = rasterize(region, scene, style)?;
    let png = decode_png_data_uri(&data_uri)?;
    trigger_download(&png, &scene.filename)
}

/// Paints the composition and returns it as a `data:image/png` URI.
pub fn rasterize(
    region: &HtmlElement,
    scene: &ExportScene,
    style: &CaptionStyle,
) -> Result<String, RasterizationError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(RasterizationError::RegionUnavailable)?;

    let bounds = region.get_bounding_client_rect();
    let (width, height) = (bounds.width(), bounds.height());
    if width < 1.0 || height < 1.0 {
        return Err(RasterizationError::RegionUnavailable);
    }

    let image = region
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
        .ok_or(RasterizationError::ImageNotReady)?;
    if !image.complete() || image.natural_width() == 0 {
        return Err(RasterizationError::ImageNotReady);
    }

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| RasterizationError::Canvas(js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| RasterizationError::Canvas("element is not a canvas".to_string()))?;
    canvas.set_width(width.round() as u32);
    canvas.set_height(height.round() as u32);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| RasterizationError::Canvas(js_error_message(&e)))?
        .ok_or_else(|| RasterizationError::Canvas("2d context unavailable".to_string()))?
        .dyn_into()
        .map_err(|_| RasterizationError::Canvas("unexpected context type".to_string()))?;

    context.set_fill_style_str(REGION_BACKGROUND);
    context.fill_rect(0.0, 0.0, width, height);

    let image_box = image.get_bounding_client_rect();
    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            image_box.left() - bounds.left(),
            image_box.top() - bounds.top(),
            image_box.width(),
            image_box.height(),
        )
        .map_err(|e| RasterizationError::Canvas(js_error_message(&e)))?;

    context.set_font(&style.canvas_font());
    context.set_fill_style_str(style.color);
    context.set_text_baseline("top");
    let leading = half_leading(style);
    for line in layout_caption(&scene.caption, scene.overlay, style) {
        context
            .fill_text(&line.text, line.x, line.y + leading)
            .map_err(|e| RasterizationError::Canvas(js_error_message(&e)))?;
    }

    // A cross-origin template without CORS headers taints the canvas and
    // makes this throw a SecurityError.
    canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| RasterizationError::Tainted(js_error_message(&e)))
}

/// Offers `png` to the user as a file named `filename`.
pub fn trigger_download(png: &[u8], filename: &str) -> Result<(), RasterizationError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| RasterizationError::Download("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| RasterizationError::Download("no document body".to_string()))?;

    let bytes = js_sys::Uint8Array::from(png);
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| RasterizationError::Download(js_error_message(&e)))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| RasterizationError::Download(js_error_message(&e)))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| RasterizationError::Download(js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| RasterizationError::Download("element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.set_attribute("style", "display:none;");

    body.append_child(&anchor)
        .map_err(|e| RasterizationError::Download(js_error_message(&e)))?;
    anchor.click();
    anchor.remove();

    // Some browsers start reading the blob after `click` returns.
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(REVOKE_DELAY_MS).await;
        Url::revoke_object_url(&url).ok();
    });

    Ok(())
}
