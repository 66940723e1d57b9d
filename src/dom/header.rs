//! Header shadow binding.

use web_sys::{Document, HtmlElement, Window};

use super::{by_id_as, listen, window, DomError, HEADER_ID};
use crate::header::{HeaderController, HeaderShadow};

pub fn mount(doc: &Document, threshold: f64) -> Result<(), DomError> {
    let window = window()?;
    let header: HtmlElement = by_id_as(doc, HEADER_ID)?;
    let mut controller = HeaderController::new(threshold);

    // Pages restored mid-scroll start with the right style
    apply(&header, controller.on_scroll(scroll_offset(&window)))?;

    let target = window.clone();
    listen(&target, "scroll", move |_| {
        if let Err(e) = apply(&header, controller.on_scroll(scroll_offset(&window))) {
            tracing::warn!("Failed to update header shadow: {}", e);
        }
    })
}

fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn apply(header: &HtmlElement, shadow: Option<HeaderShadow>) -> Result<(), DomError> {
    if let Some(shadow) = shadow {
        header
            .style()
            .set_property("box-shadow", shadow.box_shadow())?;
    }
    Ok(())
}
