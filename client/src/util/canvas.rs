//! Canvas sizing and context helpers for the animation host components.
//!
//! A missing canvas or 2D context is not an error anywhere in the site:
//! callers get `None` and simply skip the decorative effect.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Fetch the 2D context, or `None` when the browser refuses one.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Size the canvas bitmap to its parent element's CSS box and return the
/// resulting `(width, height)`. Falls back to the current bitmap size when
/// the canvas is detached.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn fit_to_parent(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = canvas.parent_element().map_or_else(
        || (f64::from(canvas.width()), f64::from(canvas.height())),
        |parent| {
            (
                f64::from(parent.client_width()).max(1.0),
                f64::from(parent.client_height()).max(1.0),
            )
        },
    );
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
    (width, height)
}

/// Millisecond wall clock used to seed the per-mount animation RNGs.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn seed_from_clock() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        js_sys::Date::now() as u64
    }
}
