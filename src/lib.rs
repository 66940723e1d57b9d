//! Portfolio Site - client-side behavior
//!
//! Binds five independent behaviors to a static portfolio page:
//! - Theme toggle with a persisted light/dark preference
//! - Mobile navigation menu
//! - One-shot fade-in of sections as they scroll into view
//! - Header shadow once the page is scrolled
//! - Contact form submission with inline status
//!
//! The controllers are plain state machines and build on any target. The
//! `dom` module wires them to the browser and only exists on `wasm32`.

pub mod config;
pub mod contact;
pub mod header;
pub mod menu;
pub mod prefs;
pub mod reveal;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub const VERSION: &str = env!("PORTFOLIO_VERSION");
pub const GIT_SHA: &str = env!("PORTFOLIO_GIT_SHA");

/// Entry point, run by the generated JS glue once the module is instantiated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(e) => {
            web_sys::console::error_1(&format!("portfolio-site: {}", e).into());
            return;
        }
    };

    let loaded = config::load_config(dom::inline_config(&doc).as_deref());
    let site_config = loaded.as_ref().cloned().unwrap_or_default();
    dom::logging::init(&site_config.log_filter);
    if let Err(e) = loaded {
        tracing::warn!("Ignoring site config, using defaults: {}", e);
    }

    tracing::info!("Starting portfolio-site v{} ({})", VERSION, GIT_SHA);

    // Markup must be parsed before anything can be bound
    if doc.ready_state() == "loading" {
        let target = doc.clone();
        let result = dom::listen(&target, "DOMContentLoaded", move |_| {
            dom::mount(&doc, &site_config)
        });
        if let Err(e) = result {
            tracing::error!("Cannot wait for DOMContentLoaded: {}", e);
        }
    } else {
        dom::mount(&doc, &site_config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_metadata_injected() {
        assert!(!VERSION.is_empty());
        assert!(!GIT_SHA.is_empty());
        assert!(!GIT_SHA.contains(char::is_whitespace));
    }
}
