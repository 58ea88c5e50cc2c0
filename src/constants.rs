/// DOM placement for the mounted canvas.
///
/// The canvas is pinned to the viewport so the widget overlays the page
/// instead of taking part in layout.
pub const CANVAS_ID: &str = "slider-canvas";
pub const CANVAS_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("left", "20px"),
    ("background", "transparent"),
];

// Pointer events that feed the slider controls
pub const POINTER_MOVE_EVENT: &str = "mousemove";

/// DOM id for a mounted canvas: the default widget (instance 0) takes
/// [`CANVAS_ID`], later instances get a numeric suffix.
pub fn canvas_id(instance: u32) -> String {
    if instance == 0 {
        CANVAS_ID.to_string()
    } else {
        format!("{}-{}", CANVAS_ID, instance)
    }
}
