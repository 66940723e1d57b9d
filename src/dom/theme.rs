//! Theme toggle binding.

use web_sys::{Document, Element};

use super::{by_id, listen, storage, window, DomError, THEME_TOGGLE_ID};
use crate::config::SiteConfig;
use crate::theme::{Theme, ThemeController};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const ICON_SELECTOR: &str = "i";

pub fn mount(doc: &Document, config: &SiteConfig) -> Result<(), DomError> {
    let window = window()?;
    let button = by_id(doc, THEME_TOGGLE_ID)?;
    let root = doc
        .document_element()
        .ok_or(DomError::MissingElement("html"))?;

    // The theme still applies without a glyph to sync
    let icon = button.query_selector(ICON_SELECTOR)?;
    if icon.is_none() {
        tracing::warn!("Theme toggle has no icon, only data-theme will change");
    }

    let store = storage::open_store(&window);
    let os_prefers_dark = window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches());

    let mut controller =
        ThemeController::initialize(&store, &config.storage_key, os_prefers_dark);
    apply(&root, icon.as_ref(), controller.current())?;

    listen(&button, "click", move |_| {
        let theme = controller.toggle(&store);
        if let Err(e) = apply(&root, icon.as_ref(), theme) {
            tracing::warn!("Failed to apply theme: {}", e);
        }
    })
}

fn apply(root: &Element, icon: Option<&Element>, theme: Theme) -> Result<(), DomError> {
    root.set_attribute("data-theme", theme.as_str())?;
    if let Some(icon) = icon {
        let glyph = theme.icon();
        let classes = icon.class_list();
        classes.remove_1(glyph.hide)?;
        classes.add_1(glyph.show)?;
    }
    Ok(())
}
