use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store in sync with its CSS size times the device
/// pixel ratio. Returns the resulting pixel dimensions.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(window) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let dpr = window.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let width = ((rect.width() * dpr) as u32).max(1);
    let height = ((rect.height() * dpr) as u32).max(1);
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}
