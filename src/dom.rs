use crate::constants::CANVAS_STYLE;
use crate::core::SliderLayout;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create the widget canvas with `canvas_id`, sized to `layout`, and append
/// it to the element with `parent_id`, or to `<body>` when no id is given.
pub fn mount_canvas(
    layout: &SliderLayout,
    canvas_id: &str,
    parent_id: Option<&str>,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    canvas.set_id(canvas_id);
    canvas.set_width(layout.width().ceil() as u32);
    canvas.set_height(layout.height().ceil() as u32);

    let style = canvas.style();
    for (prop, value) in CANVAS_STYLE {
        style
            .set_property(prop, value)
            .map_err(|e| anyhow!("style {}: {:?}", prop, e))?;
    }

    let parent: web::Element = match parent_id {
        Some(id) => document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow!("missing #{}", id))?,
        None => document
            .body()
            .ok_or_else(|| anyhow!("no body"))?
            .into(),
    };
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow!("missing 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!(format!("{:?}", e)))
}

#[inline]
pub fn unmount(canvas: &web::HtmlCanvasElement) {
    canvas.remove();
}
