//! Scroll reveal binding over `IntersectionObserver`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::{query_all, DomError, FADE_SELECTOR};
use crate::reveal::{IntersectionSample, RevealTracker};

const VISIBLE_CLASS: &str = "visible";

pub fn mount(doc: &Document, threshold: f64) -> Result<(), DomError> {
    let elements = query_all(doc, FADE_SELECTOR)?;
    if elements.is_empty() {
        tracing::debug!("No reveal targets on page");
        return Ok(());
    }

    // Keys are indexes into `elements`
    let mut tracker = RevealTracker::new(threshold);
    tracker.observe(0..elements.len());

    let targets = elements.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                let sample = match entry.root_bounds() {
                    Some(root) => IntersectionSample::measured(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        entry.bounding_client_rect().height(),
                        root.height(),
                    ),
                    None => IntersectionSample::new(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    ),
                };
                if tracker.on_intersection(&key, sample).is_some() {
                    if let Err(e) = target.class_list().add_1(VISIBLE_CLASS) {
                        tracing::warn!("Failed to reveal element: {:?}", e);
                    }
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    // Zero reports first contact, which is all a very tall element ever gets
    let thresholds = js_sys::Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(threshold));
    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&thresholds);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for element in &elements {
        observer.observe(element);
    }
    // Lives as long as the observer, which lives as long as the page
    callback.forget();

    tracing::debug!(count = elements.len(), "Observing reveal targets");
    Ok(())
}
