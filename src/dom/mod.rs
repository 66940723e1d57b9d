//! Browser bindings.
//!
//! Translates DOM events into controller events and controller output into
//! DOM writes. Markup is supplied by the page; each behavior mounts on its own
//! so a missing element only disables that one behavior.

pub mod contact;
pub mod fetch;
pub mod header;
pub mod logging;
pub mod menu;
pub mod reveal;
pub mod storage;
pub mod theme;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, Window};

use crate::config::SiteConfig;

// DOM contract with the page markup
pub const CONFIG_ID: &str = "site-config";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const HEADER_ID: &str = "header";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";
pub const FORM_SUBMIT_ID: &str = "form-submit";
pub const FADE_SELECTOR: &str = ".fade-on-scroll";

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element {0}")]
    MissingElement(&'static str),
    #[error("element {0} has an unexpected type")]
    WrongType(&'static str),
    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn by_id(doc: &Document, id: &'static str) -> Result<Element, DomError> {
    doc.get_element_by_id(id).ok_or(DomError::MissingElement(id))
}

pub fn by_id_as<T: JsCast>(doc: &Document, id: &'static str) -> Result<T, DomError> {
    by_id(doc, id)?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(id))
}

/// First match of `selector` in the document
pub fn query(doc: &Document, selector: &'static str) -> Result<Element, DomError> {
    doc.query_selector(selector)?
        .ok_or(DomError::MissingElement(selector))
}

/// First match of `selector` below `parent`
pub fn child(parent: &Element, selector: &'static str) -> Result<Element, DomError> {
    parent
        .query_selector(selector)?
        .ok_or(DomError::MissingElement(selector))
}

pub fn query_all(doc: &Document, selector: &'static str) -> Result<Vec<Element>, DomError> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener, never removed
    closure.forget();
    Ok(())
}

/// Text of the inline JSON config block, if the page has one
pub fn inline_config(doc: &Document) -> Option<String> {
    doc.get_element_by_id(CONFIG_ID).and_then(|el| el.text_content())
}

/// Mount every behavior. Failures are logged per behavior.
pub fn mount(doc: &Document, config: &SiteConfig) {
    report("theme", theme::mount(doc, config));
    report("menu", menu::mount(doc));
    report("reveal", reveal::mount(doc, config.reveal_threshold));
    report("header", header::mount(doc, config.header_shadow_threshold));
    report("contact", contact::mount(doc, config));
}

fn report(behavior: &str, result: Result<(), DomError>) {
    match result {
        Ok(()) => tracing::debug!(behavior, "Mounted"),
        Err(e) => tracing::warn!(behavior, "Behavior disabled: {}", e),
    }
}
